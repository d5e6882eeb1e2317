// WHY: explicit construction parameters replace any module-level format table
// Each ReviewDocument owns its own config so instances with different formats coexist

use std::path::{Path, PathBuf};

/// Database format used when none is requested
pub const DEFAULT_FORMAT: &str = "adam";

/// Configuration for reading the database file
#[derive(Debug, Clone, Default)]
pub struct ReaderConfig {
    /// Map the database file into memory instead of buffered reading
    pub use_mmap: bool,
}

/// Construction parameters for a [`crate::ReviewDocument`]
#[derive(Debug, Clone)]
pub struct ReviewConfig {
    /// Document to review (DOCX container or raw markup file)
    pub document: PathBuf,
    /// Flat-text abbreviation database
    pub database: PathBuf,
    /// Database format identifier, resolved against an engine registry
    pub format: String,
    /// Prefix matching instead of delimiter-anchored matching
    pub permissive: bool,
    pub reader: ReaderConfig,
}

impl ReviewConfig {
    pub fn new(document: impl AsRef<Path>, database: impl AsRef<Path>) -> Self {
        Self {
            document: document.as_ref().to_path_buf(),
            database: database.as_ref().to_path_buf(),
            format: DEFAULT_FORMAT.to_string(),
            permissive: false,
            reader: ReaderConfig::default(),
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_permissive(mut self, permissive: bool) -> Self {
        self.permissive = permissive;
        self
    }

    pub fn with_reader(mut self, reader: ReaderConfig) -> Self {
        self.reader = reader;
        self
    }
}
