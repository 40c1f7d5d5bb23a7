//! Page templates and the view data they render

use askama::Template;
use kennel_core::{
    AdminConsole, BreedCatalog, BreedGallery, DogRecord, DogStatus, DogStore, Notice, display_label,
};

pub const NOT_SPECIFIED: &str = "Not specified";

fn status_class(status: DogStatus) -> &'static str {
    match status {
        DogStatus::Available => "status-available",
        DogStatus::Pending => "status-pending",
        DogStatus::Adopted => "status-adopted",
    }
}

/// A dog as shown in listings and on its detail page
pub struct DogView {
    pub id: String,
    pub name: String,
    pub breed: String,
    pub age: String,
    pub has_age: bool,
    pub image_url: String,
    pub status: &'static str,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub description: String,
    pub is_available: bool,
    pub is_pending: bool,
    pub is_adopted: bool,
}

impl From<&DogRecord> for DogView {
    fn from(dog: &DogRecord) -> Self {
        DogView {
            id: dog.id.to_string(),
            name: dog.name.clone(),
            breed: dog.breed.clone(),
            age: dog.age.clone().unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            has_age: dog.age.is_some(),
            image_url: dog.image_url.clone(),
            status: dog.status.as_str(),
            status_label: dog.status.label(),
            status_class: status_class(dog.status),
            description: dog.description.clone().unwrap_or_else(|| {
                format!("{} is a lovely {} looking for a forever home.", dog.name, dog.breed)
            }),
            is_available: dog.status == DogStatus::Available,
            is_pending: dog.status == DogStatus::Pending,
            is_adopted: dog.status == DogStatus::Adopted,
        }
    }
}

pub struct NoticeView {
    pub class: &'static str,
    pub text: String,
}

impl From<&Notice> for NoticeView {
    fn from(notice: &Notice) -> Self {
        NoticeView {
            class: if notice.is_error() { "notice-error" } else { "notice-success" },
            text: notice.text.clone(),
        }
    }
}

pub struct StatusOption {
    pub value: &'static str,
    pub label: &'static str,
}

fn status_options() -> Vec<StatusOption> {
    DogStatus::ALL
        .iter()
        .map(|s| StatusOption {
            value: s.as_str(),
            label: s.label(),
        })
        .collect()
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub dogs: Vec<DogView>,
    pub error: Option<String>,
}

impl HomePage {
    pub fn new(dogs: &[DogRecord]) -> Self {
        HomePage {
            dogs: dogs.iter().map(DogView::from).collect(),
            error: None,
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        HomePage {
            dogs: Vec::new(),
            error: Some(error.to_string()),
        }
    }
}

#[derive(Template)]
#[template(path = "dog.html")]
pub struct DogPage {
    pub dog: Option<DogView>,
    pub error: String,
}

impl DogPage {
    pub fn new(dog: &DogRecord) -> Self {
        DogPage {
            dog: Some(DogView::from(dog)),
            error: String::new(),
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        DogPage {
            dog: None,
            error: error.to_string(),
        }
    }
}

pub struct BreedLink {
    pub path: String,
    pub label: String,
}

#[derive(Template)]
#[template(path = "breeds.html")]
pub struct BreedsPage {
    pub breeds: Vec<BreedLink>,
}

impl BreedsPage {
    pub fn new(breeds: &[String]) -> Self {
        BreedsPage {
            breeds: breeds
                .iter()
                .map(|b| BreedLink {
                    path: b.clone(),
                    label: display_label(b),
                })
                .collect(),
        }
    }
}

pub struct ImageView {
    pub url: String,
    pub label: String,
    pub path: String,
}

#[derive(Template)]
#[template(path = "breed.html")]
pub struct BreedPage {
    pub label: String,
    pub images: Vec<ImageView>,
}

impl From<BreedGallery> for BreedPage {
    fn from(gallery: BreedGallery) -> Self {
        BreedPage {
            label: gallery.breed.label,
            images: gallery
                .images
                .into_iter()
                .map(|image| ImageView {
                    url: image.url,
                    label: image.breed.label,
                    path: image.breed.path_segment,
                })
                .collect(),
        }
    }
}

pub struct AdminRow {
    pub dog: DogView,
    pub age_value: String,
    pub editing: bool,
}

#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminPage {
    pub error: Option<String>,
    pub notice: Option<NoticeView>,
    pub rows: Vec<AdminRow>,
    pub statuses: Vec<StatusOption>,
    pub default_bulk: usize,
    pub max_bulk: usize,
}

impl AdminPage {
    pub fn new<S, C>(console: &AdminConsole<S, C>, default_bulk: usize) -> Self
    where
        S: DogStore + ?Sized,
        C: BreedCatalog + ?Sized,
    {
        let editing = console.editing().map(|d| d.id.clone());
        let rows = console
            .dogs()
            .iter()
            .map(|dog| AdminRow {
                dog: DogView::from(dog),
                age_value: dog.age.clone().unwrap_or_default(),
                editing: editing.as_ref() == Some(&dog.id),
            })
            .collect();

        AdminPage {
            error: None,
            notice: console.notice().map(NoticeView::from),
            rows,
            statuses: status_options(),
            default_bulk: default_bulk.clamp(1, console.max_bulk()),
            max_bulk: console.max_bulk(),
        }
    }

    /// Only the top-level error, for a process without a record store
    pub fn blocked(error: impl ToString) -> Self {
        AdminPage {
            error: Some(error.to_string()),
            notice: None,
            rows: Vec::new(),
            statuses: status_options(),
            default_bulk: 1,
            max_bulk: 1,
        }
    }

    /// Replace the console's outcome message
    pub fn with_notice(mut self, notice: &Notice) -> Self {
        self.notice = Some(NoticeView::from(notice));
        self
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub title: String,
    pub message: String,
}
