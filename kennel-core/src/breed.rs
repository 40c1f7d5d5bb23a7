//! Breed name normalization
//!
//! Breed identifiers are hyphen-joined lowercase words (`german-shepherd`,
//! `hound-afghan`). They reach us either bare, as a route segment, or embedded
//! in a catalog image URI of the shape
//! `https://images.dog.ceo/breeds/<breed>/<file>`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::BreedPathError;

/// Path component that introduces the breed segment in catalog image URIs
const BREEDS_COMPONENT: &str = "breeds";

/// Display label plus the identifier used to build a breed-detail link.
/// Derived at read time, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedInfo {
    pub label: String,
    pub path_segment: String,
}

impl BreedInfo {
    pub fn from_identifier(identifier: &str) -> Self {
        BreedInfo {
            label: display_label(identifier),
            path_segment: identifier.to_string(),
        }
    }
}

/// Derive a `BreedInfo` from an image URI, a path, or a bare identifier.
///
/// Never fails: input without a recognizable breed segment yields an empty
/// `BreedInfo`. Use [`try_normalize`] to reject such input instead.
pub fn normalize(input: &str) -> BreedInfo {
    match try_normalize(input) {
        Ok(info) => info,
        Err(err) => {
            debug!(input, error = %err, "could not derive breed");
            BreedInfo::default()
        }
    }
}

pub fn try_normalize(input: &str) -> Result<BreedInfo, BreedPathError> {
    breed_segment(input).map(BreedInfo::from_identifier)
}

/// `german-shepherd` -> `German Shepherd`
pub fn display_label(identifier: &str) -> String {
    identifier
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn breed_segment(input: &str) -> Result<&str, BreedPathError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(BreedPathError::Empty);
    }
    if !input.contains('/') {
        return Ok(input);
    }

    let (has_authority, path) = match input.split_once("://") {
        Some((_, rest)) => (true, rest.split_once('/').map(|(_, p)| p).unwrap_or("")),
        None => (false, input),
    };
    let path = path.split(['?', '#']).next().unwrap_or("");
    let names_directory = path.ends_with('/');
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let malformed = || BreedPathError::Malformed(input.to_string());

    if let Some(pos) = segments.iter().position(|s| *s == BREEDS_COMPONENT) {
        return segments.get(pos + 1).copied().ok_or_else(malformed);
    }

    match segments.as_slice() {
        [.., breed] if names_directory => Ok(*breed),
        // the directory holding the image file
        [.., breed, _file] => Ok(*breed),
        [only] if !has_authority => Ok(*only),
        _ => Err(malformed()),
    }
}
