//! DogStore trait for record persistence

use async_trait::async_trait;

use super::query::DogQuery;
use super::types::{DogId, DogPatch, DogRecord, NewDog};
use crate::error::Result;

/// Generic CRUD over the flat `dogs` collection.
///
/// Every call is a single independent request; there are no transactions
/// across calls and concurrent writes to one record are last-write-wins.
#[async_trait]
pub trait DogStore: Send + Sync {
    /// List records matching `query`, in the requested order
    async fn list(&self, query: &DogQuery) -> Result<Vec<DogRecord>>;

    /// Fetch a single record, `None` if the id is unknown
    async fn get(&self, id: &DogId) -> Result<Option<DogRecord>>;

    /// Number of records in the store
    async fn count(&self) -> Result<usize>;

    /// Insert all records in one call and return them as stored
    async fn insert(&self, dogs: Vec<NewDog>) -> Result<Vec<DogRecord>>;

    /// Apply `patch` to the record. Unknown ids are a store error.
    async fn update_by_id(&self, id: &DogId, patch: &DogPatch) -> Result<()>;

    /// Remove the record. Unknown ids are a store error.
    async fn delete_by_id(&self, id: &DogId) -> Result<()>;
}
