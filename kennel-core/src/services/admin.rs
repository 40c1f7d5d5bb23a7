//! Admin console: list, bulk-generate, edit, re-status and delete dogs
//!
//! The console keeps a local copy of the table (newest first) plus the last
//! outcome message. A failed call never touches the local copy.

use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::catalog::BreedCatalog;
use crate::error::{KennelError, Result};
use crate::generator::DogGenerator;
use crate::storage::{DogId, DogPatch, DogQuery, DogRecord, DogStatus, DogStore};

pub const DEFAULT_MAX_BULK: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient outcome message for the last action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// How the local list follows a successful single-record write
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WritePolicy {
    /// Re-read the table from the store
    #[default]
    Refetch,
    /// Patch the local copy in place. The displayed list may diverge from the
    /// store (e.g. concurrent edits) until the next refresh.
    Optimistic,
}

pub struct AdminConsole<S: DogStore + ?Sized, C: BreedCatalog + ?Sized> {
    store: Arc<S>,
    generator: DogGenerator<C>,
    policy: WritePolicy,
    max_bulk: usize,
    dogs: Vec<DogRecord>,
    editing: Option<DogRecord>,
    notice: Option<Notice>,
}

impl<S: DogStore + ?Sized, C: BreedCatalog + ?Sized> AdminConsole<S, C> {
    pub fn new(store: Arc<S>, catalog: Arc<C>) -> Self {
        AdminConsole {
            store,
            generator: DogGenerator::new(catalog),
            policy: WritePolicy::default(),
            max_bulk: DEFAULT_MAX_BULK,
            dogs: Vec::new(),
            editing: None,
            notice: None,
        }
    }

    pub fn with_policy(mut self, policy: WritePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_max_bulk(mut self, max_bulk: usize) -> Self {
        self.max_bulk = max_bulk.max(1);
        self
    }

    pub fn dogs(&self) -> &[DogRecord] {
        &self.dogs
    }

    pub fn editing(&self) -> Option<&DogRecord> {
        self.editing.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn max_bulk(&self) -> usize {
        self.max_bulk
    }

    /// Re-read the table, newest first
    pub async fn refresh(&mut self) -> Result<()> {
        match self.store.list(&DogQuery::all().newest_first()).await {
            Ok(dogs) => {
                self.dogs = dogs;
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "Error fetching dogs");
                self.notice = Some(Notice::error(format!("Error loading dogs: {}", err)));
                Err(err)
            }
        }
    }

    /// Re-read after a successful write. The write's notice stands either way.
    async fn reload(&mut self) {
        match self.store.list(&DogQuery::all().newest_first()).await {
            Ok(dogs) => self.dogs = dogs,
            Err(err) => warn!(error = %err, "Write succeeded but the dog list could not be re-read"),
        }
    }

    /// Generate `amount` random dogs and insert them in a single call
    pub async fn bulk_add(&mut self, amount: usize) -> Result<usize> {
        self.notice = None;

        let outcome = async {
            if amount == 0 || amount > self.max_bulk {
                return Err(KennelError::InvalidInput(format!(
                    "Number of dogs must be between 1 and {}",
                    self.max_bulk
                )));
            }
            let dogs = self.generator.generate_batch(amount).await?;
            self.store.insert(dogs).await
        }
        .await;

        match outcome {
            Ok(inserted) => {
                info!(count = inserted.len(), "added dogs");
                self.notice = Some(Notice::success(format!(
                    "Successfully added {} dogs to the database!",
                    inserted.len()
                )));
                self.reload().await;
                Ok(inserted.len())
            }
            Err(err) => {
                error!(error = %err, "Error adding dogs");
                self.notice = Some(Notice::error(format!("Error adding dogs: {}", err)));
                Err(err)
            }
        }
    }

    pub async fn update_status(&mut self, id: &DogId, status: DogStatus) -> Result<()> {
        let patch = DogPatch::status(status);
        if let Err(err) = self.store.update_by_id(id, &patch).await {
            error!(%id, error = %err, "Error updating dog status");
            self.notice = Some(Notice::error(format!("Error updating status: {}", err)));
            return Err(err);
        }

        self.notice = Some(Notice::success("Status updated successfully"));
        self.follow_write(|dogs| patch_local(dogs, id, &patch)).await;
        Ok(())
    }

    /// Open the inline editor for a listed dog
    pub fn start_editing(&mut self, id: &DogId) -> bool {
        self.editing = self.dogs.iter().find(|d| &d.id == id).cloned();
        if self.editing.is_none() {
            self.notice = Some(Notice::error(format!("No dog found with id {}", id)));
        }
        self.editing.is_some()
    }

    pub fn cancel_editing(&mut self) {
        self.editing = None;
    }

    pub async fn save_changes(&mut self, id: &DogId, patch: DogPatch) -> Result<()> {
        if let Err(err) = self.store.update_by_id(id, &patch).await {
            error!(%id, error = %err, "Error updating dog");
            self.notice = Some(Notice::error(format!("Error updating dog: {}", err)));
            return Err(err);
        }

        self.notice = Some(Notice::success("Dog updated successfully!"));
        if self.editing.as_ref().is_some_and(|d| &d.id == id) {
            self.editing = None;
        }
        self.follow_write(|dogs| patch_local(dogs, id, &patch)).await;
        Ok(())
    }

    pub async fn delete(&mut self, id: &DogId) -> Result<()> {
        if let Err(err) = self.store.delete_by_id(id).await {
            error!(%id, error = %err, "Error deleting dog");
            self.notice = Some(Notice::error(format!("Error deleting dog: {}", err)));
            return Err(err);
        }

        self.notice = Some(Notice::success("Dog deleted successfully!"));
        if self.editing.as_ref().is_some_and(|d| &d.id == id) {
            self.editing = None;
        }
        self.follow_write(|dogs| dogs.retain(|d| &d.id != id)).await;
        Ok(())
    }

    async fn follow_write<F>(&mut self, local: F)
    where
        F: FnOnce(&mut Vec<DogRecord>),
    {
        match self.policy {
            WritePolicy::Optimistic => local(&mut self.dogs),
            WritePolicy::Refetch => self.reload().await,
        }
    }
}

fn patch_local(dogs: &mut [DogRecord], id: &DogId, patch: &DogPatch) {
    if let Some(dog) = dogs.iter_mut().find(|d| &d.id == id) {
        patch.apply_to(dog);
    }
}
