use crate::domain::CapabilityCategory;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog contains no locations")]
    Empty,

    #[error("location at position {0} has an empty id")]
    EmptyId(usize),

    #[error("duplicate location id: {0}")]
    DuplicateId(String),

    #[error("location {id} has {found} age segments, expected 3")]
    AgeSegments { id: String, found: usize },

    #[error("location {id}: share {label:?} is {value}, outside 0-100")]
    ShareOutOfRange { id: String, label: String, value: f64 },

    #[error("missing capability definition for category {}", .0.as_str())]
    MissingDefinition(CapabilityCategory),
}
