// WHY: database formats differ in column layout and ranking, the matcher does not
// A registry maps a format id to {scoring engine, field delimiter}; new formats only add an entry

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{Result, ReviewError};

pub mod adam;
pub mod glossary;

pub use adam::AdamEngine;
pub use glossary::GlossaryEngine;

/// Structured fields of one database entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Definition {
    /// Abbreviation as written in the database
    pub abbreviation: String,
    /// Expanded long form
    pub long_form: String,
    /// Format-specific extra columns
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl Definition {
    pub fn new(abbreviation: impl Into<String>, long_form: impl Into<String>) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            long_form: long_form.into(),
            attributes: BTreeMap::new(),
        }
    }
}

/// One ranked entry; rank is its position in the engine's output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDefinition {
    pub score: f64,
    pub definition: Definition,
}

/// Turns matched raw database lines into ranked, structured entries.
///
/// Implementations must accept an empty slice and return an empty list.
/// Output is ordered by descending score.
pub trait ScoringEngine: Send + Sync {
    fn name(&self) -> &str;

    fn score(&self, lines: &[&str]) -> Vec<ScoredDefinition>;
}

/// Sort by descending score; ties keep database order
pub fn rank(mut entries: Vec<ScoredDefinition>) -> Vec<ScoredDefinition> {
    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
    entries
}

/// A registered format: its engine and the delimiter after the leading token
#[derive(Clone)]
pub struct EngineDescriptor {
    pub engine: Arc<dyn ScoringEngine>,
    pub delimiter: String,
}

impl EngineDescriptor {
    pub fn new(engine: impl ScoringEngine + 'static, delimiter: impl Into<String>) -> Self {
        Self { engine: Arc::new(engine), delimiter: delimiter.into() }
    }
}

impl fmt::Debug for EngineDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineDescriptor")
            .field("engine", &self.engine.name())
            .field("delimiter", &self.delimiter)
            .finish()
    }
}

/// Format id to engine descriptor mapping
#[derive(Debug, Clone, Default)]
pub struct EngineRegistry {
    formats: HashMap<String, EngineDescriptor>,
}

impl EngineRegistry {
    /// Registry without any formats
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with the built-in `adam` (tab) and `glossary` (comma) formats
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(adam::FORMAT_ID, EngineDescriptor::new(AdamEngine, adam::DELIMITER));
        registry.register(glossary::FORMAT_ID, EngineDescriptor::new(GlossaryEngine, glossary::DELIMITER));
        registry
    }

    /// Add or replace a format
    pub fn register(&mut self, format: impl Into<String>, descriptor: EngineDescriptor) -> &mut Self {
        self.formats.insert(format.into(), descriptor);
        self
    }

    /// Look up a format; unregistered ids are a configuration error
    pub fn resolve(&self, format: &str) -> Result<EngineDescriptor> {
        self.formats
            .get(format)
            .cloned()
            .ok_or_else(|| ReviewError::UnknownFormat(format.to_string()))
    }

    /// Registered format ids, sorted
    pub fn formats(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.formats.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
