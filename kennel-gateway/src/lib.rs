//! HTTP adapters behind the kennel ports
//!
//! - `SupabaseStore` implements `DogStore` against a PostgREST `dogs` table
//! - `DogCeoCatalog` implements `BreedCatalog` against the public Dog API
//!
//! Both share the JSON `Client` wrapper and convert transport failures into
//! `KennelError::Store` / `KennelError::Fetch` at the port boundary.

mod client;
pub mod dog_ceo;
pub mod supabase;

pub use client::Client;
pub use dog_ceo::DogCeoCatalog;
pub use supabase::SupabaseStore;
