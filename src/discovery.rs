use anyhow::{Context, Result};
use glob::glob;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Configuration for document discovery behavior
#[derive(Debug, Clone, Default)]
pub struct DiscoveryConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
}

fn is_glob_pattern(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}

/// Expand document arguments into paths, in argument order, without duplicates.
///
/// An argument naming an existing path is always taken literally, even when it
/// contains glob metacharacters. Otherwise arguments containing `*`, `?` or `[`
/// are glob patterns and only yield existing files. Other arguments pass
/// through unchanged so that a missing document is reported by the reader with
/// its own error.
pub fn expand_documents(args: &[String], config: &DiscoveryConfig) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut documents = Vec::new();

    for arg in args {
        if !is_glob_pattern(arg) || Path::new(arg).exists() {
            if seen.insert(PathBuf::from(arg)) {
                documents.push(PathBuf::from(arg));
            }
            continue;
        }

        let entries = glob(arg).with_context(|| format!("Invalid document pattern: {arg}"))?;
        let mut matched = 0usize;

        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => {
                    matched += 1;
                    if seen.insert(path.clone()) {
                        debug!("Pattern {} matched {}", arg, path.display());
                        documents.push(path);
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    if config.fail_fast {
                        return Err(anyhow::anyhow!("Failed to expand {}: {}", arg, e));
                    }
                    warn!("Skipping unreadable match for {}: {}", arg, e);
                }
            }
        }

        if matched == 0 {
            warn!("Document pattern matched no files: {}", arg);
        }
    }

    Ok(documents)
}
