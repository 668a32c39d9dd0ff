//! Collaborator boundaries and the batch driver.
//!
//! The extraction core consumes pages from a [`PageSource`] and hands
//! flattened records to a [`SectionStore`]. [`extract_batch`] runs many
//! independent documents in parallel, each behind its own failure boundary.
//!
//! # Example
//!
//! ```ignore
//! use pdfsections_core::api::{JsonPageSource, extract_batch};
//! use pdfsections_core::policy::{Publisher, PolicyOptions, build_policy};
//!
//! let policy = build_policy(Publisher::Frontiers, &PolicyOptions::default())?;
//! let dumps = vec![std::fs::read("paper.json")?];
//! let outcomes = extract_batch(&dumps, &JsonPageSource, policy.as_ref(), 0)?;
//! ```

pub mod batch;
pub mod source;
pub mod store;

pub use batch::{DocumentOutcome, extract_batch, extract_document};
pub use source::{DocumentDump, JsonPageSource, PageSource};
pub use store::{JsonLinesStore, MemoryStore, SectionStore};
