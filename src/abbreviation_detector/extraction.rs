// WHY: abbreviations are introduced in prose as "long form (ABBR)"
// Parenthesised tokens with at least one letter become lookup candidates

use std::collections::HashSet;

use regex_automata::meta::Regex;
use regex_automata::util::syntax;
use tracing::debug;

use super::compile;
use super::plurals::plurals;
use crate::error::Result;

/// Optional leading digits, then a required letter, then word characters.
/// Purely numeric content such as reference markers `(12)` never matches.
const CANDIDATE_PATTERN: &str = r"\((\d*[a-z]\w*)\)";

/// Finds abbreviation candidates in normalized document text
pub struct CandidateExtractor {
    pattern: Regex,
}

impl CandidateExtractor {
    pub fn new() -> Result<Self> {
        let config = syntax::Config::new()
            .case_insensitive(true)
            .multi_line(true)
            .dot_matches_new_line(true);
        let pattern = compile(CANDIDATE_PATTERN, config)?;
        Ok(Self { pattern })
    }

    /// Raw parenthesised tokens in order of appearance, duplicates included
    pub fn raw_matches<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get_group(1))
            .map(|span| &text[span.range()])
            .collect()
    }

    /// Deduplicated candidates with their plural/singular variants.
    ///
    /// Order of the returned candidates is not meaningful.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let raw = self.raw_matches(text);
        let candidates: HashSet<String> = raw.iter().flat_map(|token| plurals(token)).collect();

        debug!("Extracted {} candidates from {} parenthesised tokens", candidates.len(), raw.len());
        candidates.into_iter().collect()
    }
}
