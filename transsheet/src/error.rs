//! All error types for the transsheet crate.
//!
//! These are returned from all fallible operations (loading catalogs, merging buckets,
//! reading glossaries, writing sheets, etc.).

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid variable pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("duplicate key({key}) in `{bucket}`")]
    DuplicateKey { bucket: String, key: Uuid },

    #[error("duplicate glossary key `{0}`")]
    DuplicateGlossaryKey(String),

    #[error("duplicated glossary keys: {count} error(s)")]
    DuplicateGlossaryKeys { count: usize },

    #[error("unknown conversion type `{0}`")]
    UnknownConversionType(String),

    #[error("translation sheet not found for `{bucket}` ({path})")]
    MissingBucket { bucket: String, path: String },

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Creates a new duplicate key error for the named bucket.
    pub fn duplicate_key(bucket: impl Into<String>, key: Uuid) -> Self {
        Error::DuplicateKey {
            bucket: bucket.into(),
            key,
        }
    }

    /// Creates a new validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}
