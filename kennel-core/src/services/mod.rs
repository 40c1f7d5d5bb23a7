//! Application services composed from the store and catalog ports

mod admin;
mod browse;

pub use admin::{AdminConsole, Notice, NoticeKind, WritePolicy};
pub use browse::{BreedGallery, BrowseService, GalleryImage};
