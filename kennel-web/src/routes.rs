use hyper::Method;
use kennel_core::DogId;

use crate::form::Form;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Dog(DogId),
    Breeds,
    Breed(String),
    Admin { edit: Option<DogId> },
    BulkAdd,
    UpdateStatus(DogId),
    SaveDog(DogId),
    DeleteDog(DogId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(Route),
    MethodNotAllowed,
    NotFound,
}

fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Map a request line onto a page or admin action
pub fn resolve(method: &Method, path: &str, query: Option<&str>) -> Resolution {
    let segments: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(decode_segment)
        .collect();
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

    let (route, allowed) = match segments.as_slice() {
        [] => (Route::Home, Method::GET),
        ["dogs", id] => (Route::Dog(DogId::from(*id)), Method::GET),
        ["breeds"] => (Route::Breeds, Method::GET),
        ["breeds", breed] => (Route::Breed(breed.to_string()), Method::GET),
        ["admin"] => {
            let edit = query
                .map(|q| Form::parse(q.as_bytes()))
                .and_then(|form| form.get("edit").map(str::to_string))
                .filter(|id| !id.is_empty())
                .map(DogId::from);
            (Route::Admin { edit }, Method::GET)
        }
        ["admin", "bulk"] => (Route::BulkAdd, Method::POST),
        ["admin", "dogs", id] => (Route::SaveDog(DogId::from(*id)), Method::POST),
        ["admin", "dogs", id, "status"] => (Route::UpdateStatus(DogId::from(*id)), Method::POST),
        ["admin", "dogs", id, "delete"] => (Route::DeleteDog(DogId::from(*id)), Method::POST),
        _ => return Resolution::NotFound,
    };

    if *method == allowed {
        Resolution::Found(route)
    } else {
        Resolution::MethodNotAllowed
    }
}
