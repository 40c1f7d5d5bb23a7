//! Collaborators shared by every request

use async_trait::async_trait;
use config::{Settings, WritePolicySetting};
use kennel_core::{
    AdminConsole, BreedCatalog, BrowseService, DogId, DogPatch, DogQuery, DogRecord, DogStore,
    KennelError, MemoryBreedCatalog, MemoryDogStore, NewDog, Result, WritePolicy,
};
use kennel_gateway::{DogCeoCatalog, SupabaseStore};
use std::sync::Arc;
use tracing::{info, warn};

pub type SharedStore = Arc<dyn DogStore>;
pub type SharedCatalog = Arc<dyn BreedCatalog>;

/// One long-lived store client and catalog client, created at startup and
/// handed to the services per request.
pub struct AppState {
    store: SharedStore,
    store_error: Option<KennelError>,
    catalog: SharedCatalog,
    settings: Settings,
}

impl AppState {
    pub fn new(store: SharedStore, catalog: SharedCatalog, settings: Settings) -> Self {
        AppState {
            store,
            store_error: None,
            catalog,
            settings,
        }
    }

    /// State for a process that has no usable record store. Every store call
    /// fails with `error`; the breed pages keep working.
    pub fn unconfigured(error: KennelError, catalog: SharedCatalog, settings: Settings) -> Self {
        AppState {
            store: Arc::new(Unconfigured(error.clone())),
            store_error: Some(error),
            catalog,
            settings,
        }
    }

    /// Hosted store and the Dog API, as named by the settings
    pub fn from_settings(settings: Settings) -> Self {
        let catalog: SharedCatalog = Arc::new(DogCeoCatalog::new(&settings.catalog.base_url));

        let store = settings
            .store_credentials()
            .map_err(|e| KennelError::Configuration(e.to_string()))
            .and_then(|credentials| SupabaseStore::new(&credentials));

        match store {
            Ok(store) => AppState::new(Arc::new(store), catalog, settings),
            Err(err) => {
                warn!(error = %err, "Record store unavailable");
                AppState::unconfigured(err, catalog, settings)
            }
        }
    }

    /// Demo mode: an empty in-process table and a small fixed catalog
    pub fn in_memory(settings: Settings) -> Self {
        info!("Using in-memory record store and breed catalog");
        AppState::new(
            Arc::new(MemoryDogStore::new()),
            Arc::new(MemoryBreedCatalog::sample_catalog()),
            settings,
        )
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The configuration problem that blocks every store-backed page
    pub fn store_error(&self) -> Option<&KennelError> {
        self.store_error.as_ref()
    }

    pub fn browse(&self) -> BrowseService<dyn DogStore, dyn BreedCatalog> {
        BrowseService::new(self.store.clone(), self.catalog.clone())
    }

    pub fn admin(&self) -> AdminConsole<dyn DogStore, dyn BreedCatalog> {
        let policy = match self.settings.admin.write_policy {
            WritePolicySetting::Refetch => WritePolicy::Refetch,
            WritePolicySetting::Optimistic => WritePolicy::Optimistic,
        };
        AdminConsole::new(self.store.clone(), self.catalog.clone())
            .with_policy(policy)
            .with_max_bulk(self.settings.admin.max_bulk)
    }
}

/// Stand-in store that reports the configuration error on every call
struct Unconfigured(KennelError);

#[async_trait]
impl DogStore for Unconfigured {
    async fn list(&self, _query: &DogQuery) -> Result<Vec<DogRecord>> {
        Err(self.0.clone())
    }

    async fn get(&self, _id: &DogId) -> Result<Option<DogRecord>> {
        Err(self.0.clone())
    }

    async fn count(&self) -> Result<usize> {
        Err(self.0.clone())
    }

    async fn insert(&self, _dogs: Vec<NewDog>) -> Result<Vec<DogRecord>> {
        Err(self.0.clone())
    }

    async fn update_by_id(&self, _id: &DogId, _patch: &DogPatch) -> Result<()> {
        Err(self.0.clone())
    }

    async fn delete_by_id(&self, _id: &DogId) -> Result<()> {
        Err(self.0.clone())
    }
}
