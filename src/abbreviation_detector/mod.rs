// WHY: review pipeline entry point tying the normalizer, extractor, matcher and engines together
// Document content and database text are read once and treated as immutable snapshots

use std::path::PathBuf;

use regex_automata::meta::Regex;
use regex_automata::util::syntax;
use tracing::{debug, info};

use crate::config::{ReaderConfig, ReviewConfig};
use crate::engines::{EngineDescriptor, EngineRegistry};
use crate::error::{Result, ReviewError};
use crate::reader::{read_document_markup, strip_byte_order_mark, DatabaseReader, ReadStats};

pub mod extraction;
pub mod matcher;
pub mod normalization;
pub mod plurals;
pub mod results;

pub use extraction::CandidateExtractor;
pub use matcher::{build_pattern, DatabaseMatcher, MatchPolicy};
pub use normalization::MarkupNormalizer;
pub use plurals::plurals;
pub use results::{top_definition, MatchResultSet};

/// Compile a pattern with the meta engine under the given syntax flags
pub(crate) fn compile(pattern: &str, config: syntax::Config) -> Result<Regex> {
    Regex::builder()
        .syntax(config)
        .build(pattern)
        .map_err(|source| ReviewError::Pattern { pattern: pattern.to_string(), source: Box::new(source) })
}

/// One document checked against one abbreviation database
pub struct ReviewDocument {
    content: String,
    database: String,
    database_path: Option<PathBuf>,
    database_stats: Option<ReadStats>,
    reader: ReaderConfig,
    format: String,
    policy: MatchPolicy,
    descriptor: EngineDescriptor,
    extractor: CandidateExtractor,
}

impl ReviewDocument {
    /// Read the document and database named in `config` using the built-in formats
    pub fn open(config: ReviewConfig) -> Result<Self> {
        Self::open_with_registry(config, &EngineRegistry::builtin())
    }

    /// Read the document and database, resolving the format against `registry`.
    ///
    /// An unknown format fails before any file is touched.
    pub fn open_with_registry(config: ReviewConfig, registry: &EngineRegistry) -> Result<Self> {
        let descriptor = registry.resolve(&config.format)?;

        info!("Reviewing {} against {} ({})", config.document.display(), config.database.display(), config.format);
        let markup = read_document_markup(&config.document)?;
        let content = MarkupNormalizer::new()?.normalize(&markup);
        debug!("Normalized document content: {} bytes", content.len());

        let (database, stats) = DatabaseReader::new(config.reader.clone()).read(&config.database)?;

        Ok(Self {
            content,
            database,
            database_path: Some(config.database),
            database_stats: Some(stats),
            reader: config.reader,
            format: config.format,
            policy: MatchPolicy::from_permissive(config.permissive),
            descriptor,
            extractor: CandidateExtractor::new()?,
        })
    }

    /// Build from in-memory markup and database text
    pub fn from_text(markup: &str, database: impl Into<String>, format: &str, permissive: bool) -> Result<Self> {
        Self::from_text_with_registry(markup, database, format, permissive, &EngineRegistry::builtin())
    }

    pub fn from_text_with_registry(
        markup: &str,
        database: impl Into<String>,
        format: &str,
        permissive: bool,
        registry: &EngineRegistry,
    ) -> Result<Self> {
        let descriptor = registry.resolve(format)?;
        Ok(Self {
            content: MarkupNormalizer::new()?.normalize(markup),
            database: strip_byte_order_mark(database.into()),
            database_path: None,
            database_stats: None,
            reader: ReaderConfig::default(),
            format: format.to_string(),
            policy: MatchPolicy::from_permissive(permissive),
            descriptor,
            extractor: CandidateExtractor::new()?,
        })
    }

    /// Normalized document text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Raw database text as last imported
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Statistics of the last file import, `None` for inline databases
    pub fn database_stats(&self) -> Option<&ReadStats> {
        self.database_stats.as_ref()
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Re-read the database file, replacing the current snapshot
    pub fn import_database(&mut self) -> Result<()> {
        let path = self.database_path.as_ref().ok_or(ReviewError::NoDatabaseSource)?;
        let (database, stats) = DatabaseReader::new(self.reader.clone()).read(path)?;
        self.database = database;
        self.database_stats = Some(stats);
        Ok(())
    }

    /// Abbreviation candidates in the document, unordered and deduplicated
    pub fn find_abbreviations(&self) -> Vec<String> {
        self.extractor.extract(&self.content)
    }

    /// Search the database for every candidate and rank the matches.
    ///
    /// Every candidate gets an entry, empty when nothing matched. Results are
    /// recomputed on each call.
    pub fn search_database(&self) -> Result<MatchResultSet> {
        let matcher = DatabaseMatcher::new(&self.database, self.policy, &self.descriptor.delimiter);
        let mut results = MatchResultSet::new();

        for candidate in self.find_abbreviations() {
            let lines = matcher.matching_lines(&candidate)?;
            let ranked = self.descriptor.engine.score(&lines);
            results.insert(candidate, ranked);
        }

        info!(
            "Searched {} candidates: {} resolved",
            results.len(),
            results.resolved().count()
        );
        Ok(results)
    }
}
