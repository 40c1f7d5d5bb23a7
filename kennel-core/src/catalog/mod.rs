//! Breed catalog port: the read-only source of breed names and images

mod memory;

use async_trait::async_trait;

use crate::error::Result;

pub use memory::MemoryBreedCatalog;

#[async_trait]
pub trait BreedCatalog: Send + Sync {
    /// All known breed identifiers (`hound`, `bulldog`, ...)
    async fn list_breeds(&self) -> Result<Vec<String>>;

    /// Up to `limit` image URIs for a breed
    async fn list_images(&self, breed: &str, limit: usize) -> Result<Vec<String>>;

    /// One image URI of a random breed
    async fn random_image(&self) -> Result<String>;
}
