//! Random dog records for bulk-populating the store
//!
//! Names, ages and descriptions come from fixed pools; the picture comes from
//! the breed catalog's random image endpoint and the breed is read off its URI.

use futures::future::try_join_all;
use rand::seq::IndexedRandom;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::breed::normalize;
use crate::catalog::BreedCatalog;
use crate::error::Result;
use crate::storage::{DogStatus, NewDog};

pub const NAMES: [&str; 20] = [
    "Max", "Bella", "Charlie", "Luna", "Cooper", "Lucy", "Buddy", "Daisy", "Rocky", "Molly",
    "Bailey", "Sadie", "Lola", "Tucker", "Riley", "Zoe", "Jack", "Stella", "Oliver", "Ruby",
];

pub const AGES: [&str; 4] = ["Puppy (0-1 year)", "1-3 years", "4-7 years", "8+ years"];

pub const DESCRIPTIONS: [&str; 5] = [
    "Playful and energetic. Loves to run and play fetch!",
    "Calm and gentle. Great with children and other pets.",
    "Loyal and protective. Makes an excellent companion.",
    "Smart and trainable. Learns commands quickly.",
    "Affectionate and loving. Enjoys cuddling on the couch.",
];

pub struct DogGenerator<C: BreedCatalog + ?Sized> {
    catalog: Arc<C>,
}

impl<C: BreedCatalog + ?Sized> DogGenerator<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        DogGenerator { catalog }
    }

    /// One available dog with a random catalog picture
    pub async fn generate_one(&self) -> Result<NewDog> {
        let (name, age, description) = {
            let mut rng = rand::rng();
            (
                pick(&NAMES, &mut rng),
                pick(&AGES, &mut rng),
                pick(&DESCRIPTIONS, &mut rng),
            )
        };

        let image_url = self.catalog.random_image().await?;
        let breed = normalize(&image_url).label;
        debug!(name, breed = %breed, "generated dog");

        Ok(NewDog {
            name: name.to_string(),
            breed,
            age: Some(age.to_string()),
            image_url,
            status: DogStatus::Available,
            description: Some(description.to_string()),
        })
    }

    /// `count` dogs generated concurrently. Any failed generation fails the
    /// whole batch.
    #[instrument(level = "debug", skip(self))]
    pub async fn generate_batch(&self, count: usize) -> Result<Vec<NewDog>> {
        try_join_all((0..count).map(|_| self.generate_one())).await
    }
}

fn pick<R: rand::Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}
