use thiserror::Error;

/// Errors surfaced by the store and catalog ports and the services built on them
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KennelError {
    /// Store credentials are missing; blocks every store operation
    #[error("{0}")]
    Configuration(String),

    /// A record store call failed
    #[error("{0}")]
    Store(String),

    /// A breed catalog call failed
    #[error("{0}")]
    Fetch(String),

    /// The caller asked for something the services refuse to do
    #[error("{0}")]
    InvalidInput(String),
}

impl KennelError {
    pub fn store(msg: impl Into<String>) -> Self {
        KennelError::Store(msg.into())
    }

    pub fn fetch(msg: impl Into<String>) -> Self {
        KennelError::Fetch(msg.into())
    }

    pub fn not_found(id: impl std::fmt::Display) -> Self {
        KennelError::Store(format!("No dog found with id {}", id))
    }
}

pub type Result<T> = std::result::Result<T, KennelError>;

/// A breed path or image URI that does not contain a breed segment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreedPathError {
    #[error("breed path is empty")]
    Empty,

    #[error("no breed segment in {0:?}")]
    Malformed(String),
}
