//! Visitor-facing flows: featured dogs, dog details, breed browsing

use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::breed::{BreedInfo, normalize};
use crate::catalog::BreedCatalog;
use crate::error::{KennelError, Result};
use crate::sample::sample;
use crate::storage::{DogId, DogQuery, DogRecord, DogStore};

/// One catalog picture with the breed read off its URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryImage {
    pub url: String,
    pub breed: BreedInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreedGallery {
    pub breed: BreedInfo,
    pub images: Vec<GalleryImage>,
}

pub struct BrowseService<S: DogStore + ?Sized, C: BreedCatalog + ?Sized> {
    store: Arc<S>,
    catalog: Arc<C>,
}

impl<S: DogStore + ?Sized, C: BreedCatalog + ?Sized> BrowseService<S, C> {
    pub fn new(store: Arc<S>, catalog: Arc<C>) -> Self {
        BrowseService { store, catalog }
    }

    /// A fresh random selection of at most `count` dogs
    pub async fn featured(&self, count: usize) -> Result<Vec<DogRecord>> {
        let dogs = self.store.list(&DogQuery::all()).await?;
        Ok(sample(&dogs, count))
    }

    pub async fn dog(&self, id: &DogId) -> Result<DogRecord> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| KennelError::not_found(id))
    }

    /// Breed identifiers; an unreachable catalog yields an empty list
    pub async fn breeds(&self) -> Vec<String> {
        self.catalog.list_breeds().await.unwrap_or_else(|err| {
            warn!(error = %err, "Error fetching breeds");
            Vec::new()
        })
    }

    /// Up to `limit` pictures of `breed`; an unreachable catalog yields none
    pub async fn gallery(&self, breed: &str, limit: usize) -> BreedGallery {
        let images = self
            .catalog
            .list_images(breed, limit)
            .await
            .unwrap_or_else(|err| {
                warn!(breed, error = %err, "Error fetching breed images");
                Vec::new()
            });

        BreedGallery {
            breed: normalize(breed),
            images: images
                .into_iter()
                .map(|url| GalleryImage {
                    breed: normalize(&url),
                    url,
                })
                .collect(),
        }
    }
}
