//! pdfsections - Reconstruct the sections of publisher PDFs
//!
//! Reads positioned page dumps (`{ "pages": [...], "outline": [...] }`),
//! runs one publisher layout policy over them and writes one JSON line per
//! structured document.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use pdfsections_core::api::{DocumentOutcome, JsonLinesStore, JsonPageSource, SectionStore};
use pdfsections_core::extract_batch;
use pdfsections_core::layout::PolicyParams;
use pdfsections_core::policy::{PolicyOptions, Publisher, build_policy};
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;

/// Reconstruct sections, subsections and paragraphs from positioned PDF
/// page dumps.
#[derive(Parser, Debug)]
#[command(name = "pdfsections")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more page dump files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Publisher template: elsevier, frontiers, springer, lak-sigcse
    #[arg(short = 'p', long)]
    publisher: Publisher,

    /// Number of text columns (Elsevier only: 1 or 2)
    #[arg(long)]
    columns: Option<usize>,

    /// Use the pre-2016 Frontiers template
    #[arg(long = "old-layout", action = ArgAction::SetTrue)]
    old_layout: bool,

    /// Sections with less text than this are dropped
    #[arg(long = "min-section-chars")]
    min_section_chars: Option<usize>,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Worker threads (0 = all cores)
    #[arg(short = 'j', long, default_value = "0")]
    jobs: usize,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

impl Args {
    fn policy_options(&self) -> PolicyOptions {
        PolicyOptions {
            columns: self.columns,
            old_layout: self.old_layout,
            params: self
                .min_section_chars
                .map(|n| PolicyParams::default().with_min_section_chars(n)),
        }
    }
}

fn document_id(path: &std::path::Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over -d
    let default_level = if args.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_ascii_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let policy = build_policy(args.publisher, &args.policy_options())
        .context("invalid layout options")?;

    let mut documents = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let bytes =
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        documents.push(bytes);
    }

    let outcomes = extract_batch(&documents, &JsonPageSource, policy.as_ref(), args.jobs)?;

    let output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("creating output file {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };
    let mut store = JsonLinesStore::new(output);

    let (mut structured, mut empty, mut failed) = (0usize, 0usize, 0usize);
    for (path, outcome) in args.files.iter().zip(&outcomes) {
        match outcome {
            DocumentOutcome::Structured(records) => {
                store
                    .store(&document_id(path), records)
                    .with_context(|| format!("storing {}", path.display()))?;
                structured += 1;
            }
            DocumentOutcome::Empty => {
                warn!(file = %path.display(), "no sections found, needs manual review");
                empty += 1;
            }
            DocumentOutcome::Failed(reason) => {
                warn!(file = %path.display(), %reason, "extraction failed");
                failed += 1;
            }
        }
    }
    store.into_inner().flush()?;

    info!(publisher = policy.name(), structured, empty, failed, "done");
    if failed > 0 {
        bail!("{failed} of {} document(s) failed", outcomes.len());
    }
    Ok(())
}
