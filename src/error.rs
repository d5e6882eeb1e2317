// WHY: one error type for library callers so they can branch on failure class
// I/O and configuration failures carry the path or format id that caused them

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading sources, resolving engines or selecting results
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("failed to read document {}: {source}", .path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("document {} is not a readable container: {source}", .path.display())]
    Container {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("document {} has no content part '{part}'", .path.display())]
    MissingContentPart { path: PathBuf, part: &'static str },

    #[error("document {} is not valid UTF-8", .path.display())]
    DocumentEncoding { path: PathBuf },

    #[error("failed to read database {}: {source}", .path.display())]
    DatabaseRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("database {} is not valid UTF-8", .path.display())]
    DatabaseEncoding { path: PathBuf },

    #[error("unknown database format '{0}'")]
    UnknownFormat(String),

    #[error("failed to build pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: Box<regex_automata::meta::BuildError>,
    },

    /// The caller asked for a top result from a ranked list with no entries
    #[error("no ranked entries to select a top result from")]
    EmptyMatchList,

    #[error("database was supplied inline and has no file to re-import")]
    NoDatabaseSource,
}

impl ReviewError {
    /// True for failures caused by unreadable or malformed input files
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ReviewError::DocumentRead { .. }
                | ReviewError::Container { .. }
                | ReviewError::MissingContentPart { .. }
                | ReviewError::DocumentEncoding { .. }
                | ReviewError::DatabaseRead { .. }
                | ReviewError::DatabaseEncoding { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ReviewError>;
