//! In-memory BreedCatalog implementation

use async_trait::async_trait;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;

use super::BreedCatalog;
use crate::error::{KennelError, Result};

/// Fixed breed → image table for tests and the demo server
#[derive(Debug, Clone, Default)]
pub struct MemoryBreedCatalog {
    breeds: BTreeMap<String, Vec<String>>,
}

impl MemoryBreedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_breed(mut self, breed: &str, images: Vec<String>) -> Self {
        self.breeds.insert(breed.to_string(), images);
        self
    }

    /// A handful of breeds with catalog-shaped image URIs
    pub fn sample_catalog() -> Self {
        let mut catalog = Self::new();
        for breed in ["beagle", "bulldog-french", "german-shepherd", "hound-afghan", "pug"] {
            let images = (1..=12)
                .map(|n| format!("https://images.dog.ceo/breeds/{}/{}_{:03}.jpg", breed, breed, n))
                .collect();
            catalog = catalog.with_breed(breed, images);
        }
        catalog
    }
}

#[async_trait]
impl BreedCatalog for MemoryBreedCatalog {
    async fn list_breeds(&self) -> Result<Vec<String>> {
        Ok(self.breeds.keys().cloned().collect())
    }

    async fn list_images(&self, breed: &str, limit: usize) -> Result<Vec<String>> {
        let images = self
            .breeds
            .get(breed)
            .ok_or_else(|| KennelError::fetch("Breed not found (main breed does not exist)"))?;
        Ok(images.iter().take(limit).cloned().collect())
    }

    async fn random_image(&self) -> Result<String> {
        let all: Vec<&String> = self.breeds.values().flatten().collect();
        all.choose(&mut rand::rng())
            .map(|s| s.to_string())
            .ok_or_else(|| KennelError::fetch("catalog has no images"))
    }
}
