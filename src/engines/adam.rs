// WHY: default format, a tab-separated abbreviation database in the ADAM column layout
// Columns: short form, long form, short-form variants, long-form variants, occurrences

use tracing::debug;

use super::{rank, Definition, ScoredDefinition, ScoringEngine};

pub const FORMAT_ID: &str = "adam";
pub const DELIMITER: &str = "\t";

/// Scores ADAM lines by occurrence count, falling back to long-form variant counts
#[derive(Debug, Clone, Copy, Default)]
pub struct AdamEngine;

/// A `form:count` pair from a variant column
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub form: String,
    pub count: u64,
}

/// Parse a `form:count|form:count` column. Entries without a count get 0.
pub fn parse_variants(column: &str) -> Vec<Variant> {
    column
        .split('|')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.rsplit_once(':') {
            Some((form, count)) => match count.trim().parse::<u64>() {
                Ok(count) => Variant { form: form.to_string(), count },
                Err(_) => Variant { form: entry.to_string(), count: 0 },
            },
            None => Variant { form: entry.to_string(), count: 0 },
        })
        .collect()
}

impl AdamEngine {
    fn parse_line(line: &str) -> Option<ScoredDefinition> {
        if line.starts_with('#') {
            return None;
        }

        let mut columns = line.split(DELIMITER);
        let short_form = columns.next()?.trim();
        let long_form = columns.next()?.trim();
        if short_form.is_empty() || long_form.is_empty() {
            return None;
        }

        let short_forms = columns.next().map(str::trim).unwrap_or_default();
        let long_forms = columns.next().map(str::trim).unwrap_or_default();
        let occurrences = columns.next().map(str::trim).unwrap_or_default();

        let score = match occurrences.parse::<f64>() {
            Ok(count) if count.is_finite() => count,
            _ => parse_variants(long_forms).iter().map(|v| v.count as f64).sum(),
        };

        let mut definition = Definition::new(short_form, long_form);
        for (key, value) in [("short_forms", short_forms), ("long_forms", long_forms), ("occurrences", occurrences)] {
            if !value.is_empty() {
                definition.attributes.insert(key.to_string(), value.to_string());
            }
        }

        Some(ScoredDefinition { score, definition })
    }
}

impl ScoringEngine for AdamEngine {
    fn name(&self) -> &str {
        FORMAT_ID
    }

    fn score(&self, lines: &[&str]) -> Vec<ScoredDefinition> {
        let entries: Vec<ScoredDefinition> = lines.iter().filter_map(|line| Self::parse_line(line)).collect();
        if entries.len() < lines.len() {
            debug!("Skipped {} malformed adam lines", lines.len() - entries.len());
        }
        rank(entries)
    }
}
