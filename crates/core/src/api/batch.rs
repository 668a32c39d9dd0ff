//! Batch extraction over independent documents.

use std::panic::{AssertUnwindSafe, catch_unwind};

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::document::{Section, SectionRecord, flatten};
use crate::error::Result;
use crate::extract::extract_content;
use crate::policy::LayoutPolicy;

use super::source::PageSource;

/// Result of extracting one document.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentOutcome {
    /// Flattened sections, ready for storage.
    Structured(Vec<SectionRecord>),
    /// No top-level heading was found. Route to manual review.
    Empty,
    /// The document could not be read.
    Failed(String),
}

impl DocumentOutcome {
    pub fn records(&self) -> Option<&[SectionRecord]> {
        match self {
            DocumentOutcome::Structured(records) => Some(records.as_slice()),
            _ => None,
        }
    }
}

pub(crate) fn default_thread_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Loads one document and reconstructs its sections.
pub fn extract_document(
    bytes: &[u8],
    source: &dyn PageSource,
    policy: &dyn LayoutPolicy,
) -> Result<Vec<Section>> {
    let (pages, outline) = source.load(bytes)?;
    debug!(pages = pages.len(), outline = !outline.is_empty(), "loaded document");
    Ok(extract_content(&pages, &outline, policy))
}

/// Extracts many documents in parallel.
///
/// Each document is its own failure boundary: an unreadable document, or a
/// panic while extracting it, becomes [`DocumentOutcome::Failed`] without
/// affecting the others. Outcomes are returned in input order. `threads == 0`
/// uses every available core.
pub fn extract_batch<D>(
    documents: &[D],
    source: &dyn PageSource,
    policy: &dyn LayoutPolicy,
    threads: usize,
) -> Result<Vec<DocumentOutcome>>
where
    D: AsRef<[u8]> + Sync,
{
    let threads = if threads == 0 {
        default_thread_count()
    } else {
        threads
    };
    let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;

    let outcomes = pool.install(|| {
        documents
            .par_iter()
            .enumerate()
            .map(|(idx, doc)| {
                let extract = || extract_document(doc.as_ref(), source, policy);
                let result = catch_unwind(AssertUnwindSafe(extract));
                match result {
                    Ok(Ok(sections)) if sections.is_empty() => DocumentOutcome::Empty,
                    Ok(Ok(sections)) => DocumentOutcome::Structured(flatten(&sections)),
                    Ok(Err(err)) => {
                        warn!(document = idx, error = %err, "extraction failed");
                        DocumentOutcome::Failed(err.to_string())
                    }
                    Err(_) => {
                        warn!(document = idx, "extraction panicked");
                        DocumentOutcome::Failed("extraction panicked".to_string())
                    }
                }
            })
            .collect()
    });
    Ok(outcomes)
}
