use crate::config::{load_config_file, CliOverrides, Settings};
use crate::extract::BlockExtractor;
use crate::input::{read_markdown, validate_input};
use crate::materialize::Materializer;
use crate::report::print_summary;
use crate::types::RunSummary;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Parsed command line
#[derive(Debug, Default)]
pub struct Args {
    pub input: Option<String>,
    pub lang: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub dry_run: bool,
    pub debug: bool,
}

/// Logs go to stderr. `RUST_LOG` wins over `--debug`.
pub fn init_logging(debug: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Ignore error if a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false)
        .without_time()
        .try_init();
}

/// Validate, read, extract, write, summarize. Errors returned from here are
/// the fatal ones; per-block failures are logged inside `process`.
pub fn run(args: Args) -> Result<RunSummary> {
    init_logging(args.debug);

    let md_path = validate_input(args.input.as_deref())?;
    info!("Processing Markdown file: {}", md_path.display());

    let cwd = std::env::current_dir().context("Could not determine current directory")?;
    let config = load_config_file(&cwd)?;
    let settings = Settings::resolve(
        CliOverrides {
            lang: args.lang,
            output_dir: args.output_dir,
            dry_run: args.dry_run,
        },
        config,
        &cwd,
    );
    debug!("Effective settings: {:?}", settings);

    let markdown = read_markdown(&md_path)?;
    let summary = process(&markdown, &settings)?;
    print_summary(&summary, &settings.lang, settings.dry_run);
    Ok(summary)
}

/// One pass over the markdown, one block at a time.
pub fn process(markdown: &str, settings: &Settings) -> Result<RunSummary> {
    let extractor = BlockExtractor::new(&settings.lang)?;
    let materializer = Materializer::new(&settings.output_dir, settings.dry_run);
    let mut summary = RunSummary::default();

    for block in extractor.blocks(markdown) {
        if !block.has_path() {
            warn!(
                "Found ```{} code block without a valid // FILE: marker. Skipping.",
                settings.lang
            );
            summary.skipped += 1;
            continue;
        }
        if let Some(pattern) = settings.ignored_by(&block.rel_path) {
            info!("Skipping {} (matches ignore pattern {:?})", block.rel_path, pattern);
            summary.skipped += 1;
            continue;
        }

        match materializer.materialize(&block) {
            Ok(()) => summary.written += 1,
            Err(err) => {
                error!("{:#}", err);
                summary.failed += 1;
            }
        }
    }

    debug!(
        "{} written, {} skipped, {} failed",
        summary.written, summary.skipped, summary.failed
    );
    Ok(summary)
}
