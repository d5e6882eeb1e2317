// WHY: line-oriented "grep" over the raw database text
// Pattern construction lives in one pure function so both policies are testable without I/O

use regex_automata::util::syntax;
use serde::Serialize;
use tracing::debug;

use super::compile;
use crate::error::Result;

/// How a candidate must line up with the leading token of a database line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Candidate at line start, immediately followed by the format's delimiter
    #[default]
    Strict,
    /// Candidate at line start as a prefix, no delimiter required.
    ///
    /// A short candidate also matches longer abbreviations that begin with it
    /// (`GEF` matches a `GEFS` entry). This trades precision for recall.
    Permissive,
}

impl MatchPolicy {
    pub fn from_permissive(permissive: bool) -> Self {
        if permissive {
            MatchPolicy::Permissive
        } else {
            MatchPolicy::Strict
        }
    }
}

/// Build the whole-line pattern for `candidate` under `policy`.
///
/// Candidate and delimiter are matched literally.
pub fn build_pattern(candidate: &str, policy: MatchPolicy, delimiter: &str) -> String {
    let candidate = regex_syntax::escape(candidate);
    match policy {
        MatchPolicy::Strict => format!("^{candidate}{}.*$", regex_syntax::escape(delimiter)),
        MatchPolicy::Permissive => format!("^{candidate}.*$"),
    }
}

fn line_syntax() -> syntax::Config {
    syntax::Config::new()
        .case_insensitive(true)
        .multi_line(true)
        .crlf(true)
}

/// Borrowed view over a database text with a fixed policy and delimiter
#[derive(Debug, Clone, Copy)]
pub struct DatabaseMatcher<'a> {
    database: &'a str,
    policy: MatchPolicy,
    delimiter: &'a str,
}

impl<'a> DatabaseMatcher<'a> {
    pub fn new(database: &'a str, policy: MatchPolicy, delimiter: &'a str) -> Self {
        Self { database, policy, delimiter }
    }

    /// Every database line matching `candidate`, in database order, without line terminators
    pub fn matching_lines(&self, candidate: &str) -> Result<Vec<&'a str>> {
        let pattern = build_pattern(candidate, self.policy, self.delimiter);
        let regex = compile(&pattern, line_syntax())?;

        let database = self.database;
        let lines: Vec<&'a str> = regex.find_iter(database).map(|m| &database[m.range()]).collect();

        debug!("Candidate {} matched {} database lines", candidate, lines.len());
        Ok(lines)
    }
}
