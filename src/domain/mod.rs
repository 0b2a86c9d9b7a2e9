//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Summary and detail types (validated, view-ready)
//! - `wire.rs` — Raw serde structs matching upstream records
//! - `convert.rs` — `TryFrom` conversions with validation
//! - `client.rs` — Sub-client with list/get/pages methods

pub mod character;
pub mod comic;
pub mod event;

use crate::shared::ResourceId;
use std::fmt;

// ─── Validation ──────────────────────────────────────────────────────────────

/// A record that does not have the fields every view relies on.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Multiple(ResourceId, Vec<ValidationError>),
    MissingName,
    MissingTitle,
    MissingThumbnail,
    InvalidNumber(&'static str, String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(id, errors) => {
                write!(f, "record {id}:")?;
                for err in errors {
                    write!(f, " {};", err)?;
                }
                Ok(())
            }
            ValidationError::MissingName => write!(f, "Missing name"),
            ValidationError::MissingTitle => write!(f, "Missing title"),
            ValidationError::MissingThumbnail => write!(f, "Missing thumbnail"),
            ValidationError::InvalidNumber(field, raw) => {
                write!(f, "Invalid number for {field}: {raw}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for crate::error::SdkError {
    fn from(err: ValidationError) -> Self {
        crate::error::SdkError::Parse(err.to_string())
    }
}

/// Fold collected errors into one, or succeed when there are none.
pub(crate) fn finish(id: &ResourceId, errors: Vec<ValidationError>) -> Result<(), ValidationError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Multiple(id.clone(), errors))
    }
}
