//! In-memory DogStore implementation

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Mutex, MutexGuard};

use super::query::DogQuery;
use super::traits::DogStore;
use super::types::{DogId, DogPatch, DogRecord, NewDog};
use crate::error::{KennelError, Result};

/// In-memory dog store for tests and the demo server
#[derive(Debug, Default)]
pub struct MemoryDogStore {
    records: Mutex<Vec<DogRecord>>,
}

impl MemoryDogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing records, kept in the given order
    pub fn with_records(records: Vec<DogRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    fn records(&self) -> Result<MutexGuard<'_, Vec<DogRecord>>> {
        self.records
            .lock()
            .map_err(|_| KennelError::store("memory store lock poisoned"))
    }
}

#[async_trait]
impl DogStore for MemoryDogStore {
    async fn list(&self, query: &DogQuery) -> Result<Vec<DogRecord>> {
        let mut matching: Vec<DogRecord> = self
            .records()?
            .iter()
            .filter(|r| query.matches(r))
            .cloned()
            .collect();
        query.sort(&mut matching);
        Ok(matching)
    }

    async fn get(&self, id: &DogId) -> Result<Option<DogRecord>> {
        Ok(self.records()?.iter().find(|r| &r.id == id).cloned())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.records()?.len())
    }

    async fn insert(&self, dogs: Vec<NewDog>) -> Result<Vec<DogRecord>> {
        let created_at = Utc::now();
        let inserted: Vec<DogRecord> = dogs
            .into_iter()
            .map(|dog| dog.into_record(DogId::new(), created_at))
            .collect();
        self.records()?.extend(inserted.iter().cloned());
        Ok(inserted)
    }

    async fn update_by_id(&self, id: &DogId, patch: &DogPatch) -> Result<()> {
        let mut records = self.records()?;
        let record = records
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| KennelError::not_found(id))?;
        patch.apply_to(record);
        Ok(())
    }

    async fn delete_by_id(&self, id: &DogId) -> Result<()> {
        let mut records = self.records()?;
        let before = records.len();
        records.retain(|r| &r.id != id);
        if records.len() == before {
            return Err(KennelError::not_found(id));
        }
        Ok(())
    }
}
