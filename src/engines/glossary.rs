// Approved-glossary export: `ABBR,definition text`, one entry per line

use super::{Definition, ScoredDefinition, ScoringEngine};

pub const FORMAT_ID: &str = "glossary";
pub const DELIMITER: &str = ",";

/// Ranks glossary entries by their order in the file
#[derive(Debug, Clone, Copy, Default)]
pub struct GlossaryEngine;

fn unquote(field: &str) -> &str {
    let field = field.trim();
    field
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(field)
}

impl ScoringEngine for GlossaryEngine {
    fn name(&self) -> &str {
        FORMAT_ID
    }

    fn score(&self, lines: &[&str]) -> Vec<ScoredDefinition> {
        lines
            .iter()
            .copied()
            .filter_map(|line| line.split_once(DELIMITER))
            .map(|(abbreviation, long_form)| (unquote(abbreviation), unquote(long_form)))
            .filter(|(abbreviation, long_form)| !abbreviation.is_empty() && !long_form.is_empty())
            .enumerate()
            .map(|(position, (abbreviation, long_form))| ScoredDefinition {
                score: 1.0 / (position as f64 + 1.0),
                definition: Definition::new(abbreviation, long_form),
            })
            .collect()
    }
}
