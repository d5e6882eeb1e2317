pub mod abbreviation_detector;
pub mod config;
pub mod discovery;
pub mod engines;
pub mod error;
pub mod reader;

// Re-export main types for convenient access
pub use abbreviation_detector::{
    build_pattern, plurals, top_definition, MatchPolicy, MatchResultSet, ReviewDocument,
};

pub use config::{ReaderConfig, ReviewConfig, DEFAULT_FORMAT};

pub use engines::{
    Definition, EngineDescriptor, EngineRegistry, ScoredDefinition, ScoringEngine,
};

pub use error::ReviewError;
