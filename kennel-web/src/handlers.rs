//! Request dispatch: route, call the services, render a page

use askama::Template;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::{Method, Response, StatusCode, Uri};
use kennel_core::{DogId, KennelError, Notice};
use tracing::{debug, error, instrument};

use crate::form::Form;
use crate::pages::{AdminPage, BreedPage, BreedsPage, DogPage, ErrorPage, HomePage};
use crate::routes::{Resolution, Route, resolve};
use crate::state::AppState;

pub type HtmlResponse = Response<Full<Bytes>>;

fn respond(status: StatusCode, content_type: &'static str, body: impl Into<Bytes>) -> HtmlResponse {
    let mut response = Response::new(Full::new(body.into()));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

fn render<T: Template>(status: StatusCode, page: &T) -> HtmlResponse {
    match page.render() {
        Ok(html) => respond(status, "text/html; charset=utf-8", html),
        Err(err) => {
            error!(error = %err, "Failed to render page");
            respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                "text/plain; charset=utf-8",
                "Internal server error",
            )
        }
    }
}

fn error_page(status: StatusCode, message: &str) -> HtmlResponse {
    let title = status.canonical_reason().unwrap_or("Error").to_string();
    render(
        status,
        &ErrorPage {
            title,
            message: message.to_string(),
        },
    )
}

/// An admin screen action decoded from the request
enum AdminAction {
    View { edit: Option<DogId> },
    BulkAdd(usize),
    UpdateStatus(DogId, Form),
    Save(DogId, Form),
    Delete(DogId),
}

/// Handle one request. Never fails: every outcome is a rendered page.
#[instrument(level = "debug", skip_all, fields(method = %method, path = %uri.path()))]
pub async fn dispatch(state: &AppState, method: &Method, uri: &Uri, body: Bytes) -> HtmlResponse {
    let route = match resolve(method, uri.path(), uri.query()) {
        Resolution::Found(route) => route,
        Resolution::NotFound => {
            return error_page(StatusCode::NOT_FOUND, "The page you are looking for does not exist.");
        }
        Resolution::MethodNotAllowed => {
            return error_page(
                StatusCode::METHOD_NOT_ALLOWED,
                "This page does not accept that kind of request.",
            );
        }
    };
    debug!(?route, "resolved");

    match route {
        Route::Home => home(state).await,
        Route::Dog(id) => dog(state, &id).await,
        Route::Breeds => breeds(state).await,
        Route::Breed(breed) => breed_gallery(state, &breed).await,
        Route::Admin { edit } => admin(state, AdminAction::View { edit }).await,
        Route::BulkAdd => admin(state, AdminAction::BulkAdd(Form::parse(&body).amount())).await,
        Route::UpdateStatus(id) => admin(state, AdminAction::UpdateStatus(id, Form::parse(&body))).await,
        Route::SaveDog(id) => admin(state, AdminAction::Save(id, Form::parse(&body))).await,
        Route::DeleteDog(id) => admin(state, AdminAction::Delete(id)).await,
    }
}

async fn home(state: &AppState) -> HtmlResponse {
    let page = match state
        .browse()
        .featured(state.settings().browse.featured_count)
        .await
    {
        Ok(dogs) => HomePage::new(&dogs),
        Err(err) => {
            error!(error = %err, "Error fetching dogs");
            HomePage::failed(err)
        }
    };
    render(StatusCode::OK, &page)
}

async fn dog(state: &AppState, id: &DogId) -> HtmlResponse {
    match state.browse().dog(id).await {
        Ok(dog) => render(StatusCode::OK, &DogPage::new(&dog)),
        Err(err) => {
            error!(%id, error = %err, "Error fetching dog");
            let status = match err {
                KennelError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::NOT_FOUND,
            };
            render(status, &DogPage::failed(err))
        }
    }
}

async fn breeds(state: &AppState) -> HtmlResponse {
    let breeds = state.browse().breeds().await;
    render(StatusCode::OK, &BreedsPage::new(&breeds))
}

async fn breed_gallery(state: &AppState, breed: &str) -> HtmlResponse {
    let gallery = state
        .browse()
        .gallery(breed, state.settings().browse.breed_image_limit)
        .await;
    render(StatusCode::OK, &BreedPage::from(gallery))
}

async fn admin(state: &AppState, action: AdminAction) -> HtmlResponse {
    if let Some(err) = state.store_error() {
        return render(StatusCode::OK, &AdminPage::blocked(err));
    }

    let mut console = state.admin();
    // A failed load is recorded on the console and shown as its notice.
    let _ = console.refresh().await;

    let mut rejected = None;
    match action {
        AdminAction::View { edit } => {
            if let Some(id) = edit {
                console.start_editing(&id);
            }
        }
        AdminAction::BulkAdd(amount) => {
            let _ = console.bulk_add(amount).await;
        }
        AdminAction::UpdateStatus(id, form) => match form.status() {
            Ok(status) => {
                let _ = console.update_status(&id, status).await;
            }
            Err(err) => rejected = Some(Notice::error(format!("Error updating status: {}", err))),
        },
        AdminAction::Save(id, form) => match form.patch() {
            Ok(patch) => {
                console.start_editing(&id);
                let _ = console.save_changes(&id, patch).await;
            }
            Err(err) => rejected = Some(Notice::error(format!("Error updating dog: {}", err))),
        },
        AdminAction::Delete(id) => {
            let _ = console.delete(&id).await;
        }
    }

    let page = AdminPage::new(&console, state.settings().admin.default_bulk);
    let page = match &rejected {
        Some(notice) => page.with_notice(notice),
        None => page,
    };
    render(StatusCode::OK, &page)
}
