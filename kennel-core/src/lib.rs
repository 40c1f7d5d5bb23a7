//! Core types and services for the kennel adoption catalog
//!
//! This crate provides:
//! - **Domain**: `DogRecord`, `DogStatus`, `BreedInfo`
//! - **Logic**: breed name normalization (`breed`) and random sampling (`sample`)
//! - **Ports**: `DogStore` and `BreedCatalog` with in-memory implementations
//! - **Services**: `BrowseService` for visitors, `AdminConsole` for record management
//!
//! # Example
//!
//! ```ignore
//! use kennel_core::{BrowseService, MemoryBreedCatalog, MemoryDogStore};
//!
//! let browse = BrowseService::new(Arc::new(MemoryDogStore::new()), Arc::new(MemoryBreedCatalog::new()));
//! let dogs = browse.featured(6).await?;
//! ```
pub mod breed;
pub mod catalog;
pub mod error;
pub mod generator;
pub mod sample;
pub mod services;
pub mod storage;

pub use breed::{BreedInfo, display_label, normalize, try_normalize};
pub use catalog::{BreedCatalog, MemoryBreedCatalog};
pub use error::{BreedPathError, KennelError, Result};
pub use generator::DogGenerator;
pub use sample::{sample, sample_with};
pub use services::{
    AdminConsole, BreedGallery, BrowseService, GalleryImage, Notice, NoticeKind, WritePolicy,
};
pub use storage::{
    DogId, DogPatch, DogQuery, DogRecord, DogStatus, DogStore, MemoryDogStore, NewDog, SortOrder,
};
