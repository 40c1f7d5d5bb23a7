//! Record store abstractions for dog listings
//!
//! `DogStore` is the port every store backend implements. Two backends exist:
//!
//! - `MemoryDogStore` - in-memory storage for tests and demo mode (this crate)
//! - `SupabaseStore` - hosted PostgREST table (`kennel-gateway`)

mod memory;
mod query;
mod traits;
mod types;

pub use memory::MemoryDogStore;
pub use query::{DogQuery, SortOrder};
pub use traits::DogStore;
pub use types::{DogId, DogPatch, DogRecord, DogStatus, NewDog};
