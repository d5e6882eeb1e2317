use abbrev_review::discovery::{self, DiscoveryConfig};
use abbrev_review::{
    plurals, top_definition, EngineRegistry, MatchPolicy, MatchResultSet, ReaderConfig, ReviewConfig, ReviewDocument,
};
use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn, Level};

#[derive(Parser, Debug)]
#[command(name = "abbrev-review")]
#[command(about = "Cross-reference abbreviations used in documents against an abbreviation database")]
#[command(version)]
struct Args {
    /// Documents to review (DOCX or markup files); glob patterns are expanded
    #[arg(required = true)]
    documents: Vec<String>,

    /// Abbreviation database file
    #[arg(long, short = 'd')]
    database: PathBuf,

    /// Database format identifier
    #[arg(long, default_value = abbrev_review::DEFAULT_FORMAT)]
    format: String,

    /// Match database entries by prefix instead of requiring the delimiter
    #[arg(long)]
    permissive: bool,

    /// Use memory-mapped I/O for the database
    #[arg(long)]
    use_mmap: bool,

    /// Abort on first failing document
    #[arg(long)]
    fail_fast: bool,

    /// Print the full match result set as JSON
    #[arg(long)]
    json: bool,

    /// Debug-level logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Serialize)]
struct DocumentReport<'a> {
    document: String,
    format: &'a str,
    policy: MatchPolicy,
    matches: &'a MatchResultSet,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!("Starting abbrev-review");
    info!(?args, "Parsed CLI arguments");

    // an unknown format fails before any document is read
    EngineRegistry::builtin().resolve(&args.format)?;

    if !args.database.is_file() {
        anyhow::bail!("Database file does not exist: {}", args.database.display());
    }

    let discovery_config = DiscoveryConfig { fail_fast: args.fail_fast };
    let documents = discovery::expand_documents(&args.documents, &discovery_config)?;
    if documents.is_empty() {
        anyhow::bail!("No documents matched: {}", args.documents.join(" "));
    }

    let mut failed = 0usize;
    for document in &documents {
        match review(document, &args) {
            Ok((review, results)) => print_results(document, &review, &results, args.json)?,
            Err(e) => {
                if args.fail_fast {
                    return Err(e);
                }
                warn!("Review failed for {}: {:#}", document.display(), e);
                failed += 1;
            }
        }
    }

    info!("Reviewed {} documents, {} failed", documents.len(), failed);
    if failed > 0 {
        anyhow::bail!("{failed} of {} documents could not be reviewed", documents.len());
    }
    Ok(())
}

fn review(document: &Path, args: &Args) -> Result<(ReviewDocument, MatchResultSet)> {
    let config = ReviewConfig::new(document, &args.database)
        .with_format(args.format.clone())
        .with_permissive(args.permissive)
        .with_reader(ReaderConfig { use_mmap: args.use_mmap });

    let review = ReviewDocument::open(config)
        .with_context(|| format!("Failed to open review for {}", document.display()))?;
    let results = review
        .search_database()
        .with_context(|| format!("Database search failed for {}", document.display()))?;
    Ok((review, results))
}

fn print_results(document: &Path, review: &ReviewDocument, results: &MatchResultSet, json: bool) -> Result<()> {
    if json {
        let report = DocumentReport {
            document: document.display().to_string(),
            format: review.format(),
            policy: review.policy(),
            matches: results,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", document.display());
    for (candidate, ranked) in results.resolved() {
        let top = top_definition(ranked)?;
        let alternatives = ranked.len() - 1;
        if alternatives > 0 {
            println!("  {candidate}\t{}\t(+{alternatives} more)", top.long_form);
        } else {
            println!("  {candidate}\t{}", top.long_form);
        }
    }

    // a candidate counts as resolved when any of its plural/singular forms is
    let unresolved: Vec<&str> = results
        .unresolved()
        .filter(|candidate| {
            !plurals(candidate)
                .iter()
                .any(|variant| results.get(variant).is_some_and(|ranked| !ranked.is_empty()))
        })
        .collect();
    if !unresolved.is_empty() {
        println!("  no definition: {}", unresolved.join(", "));
    }
    Ok(())
}
