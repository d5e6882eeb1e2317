use std::collections::BTreeMap;

use serde::Serialize;

use crate::engines::{Definition, ScoredDefinition};
use crate::error::{Result, ReviewError};

/// Structured fields of the highest-ranked entry.
///
/// An empty list is a caller error: a candidate with no matches must be
/// checked with `is_empty()` before asking for its top result.
pub fn top_definition(ranked: &[ScoredDefinition]) -> Result<&Definition> {
    ranked
        .first()
        .map(|entry| &entry.definition)
        .ok_or(ReviewError::EmptyMatchList)
}

/// Candidate to ranked entries, rebuilt on every database search
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MatchResultSet {
    matches: BTreeMap<String, Vec<ScoredDefinition>>,
}

impl MatchResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, candidate: impl Into<String>, ranked: Vec<ScoredDefinition>) {
        self.matches.insert(candidate.into(), ranked);
    }

    pub fn get(&self, candidate: &str) -> Option<&[ScoredDefinition]> {
        self.matches.get(candidate).map(Vec::as_slice)
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.matches.contains_key(candidate)
    }

    /// Top definition for a candidate; `Ok(None)` when the candidate was never searched
    pub fn top(&self, candidate: &str) -> Result<Option<&Definition>> {
        self.get(candidate).map(top_definition).transpose()
    }

    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.matches.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ScoredDefinition])> {
        self.matches.iter().map(|(candidate, ranked)| (candidate.as_str(), ranked.as_slice()))
    }

    /// Candidates with at least one ranked entry
    pub fn resolved(&self) -> impl Iterator<Item = (&str, &[ScoredDefinition])> {
        self.iter().filter(|(_, ranked)| !ranked.is_empty())
    }

    /// Candidates with no ranked entries
    pub fn unresolved(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, ranked)| ranked.is_empty()).map(|(candidate, _)| candidate)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
