//! pdfsections - reconstructs the section structure of publisher PDFs from
//! positioned text lines.

pub mod api;
pub mod document;
pub mod error;
pub mod extract;
pub mod layout;
pub mod policy;
pub mod utils;

pub use api::{DocumentOutcome, extract_batch, extract_document};
pub use document::{Section, SectionRecord, flatten};
pub use error::{ExtractError, Result};
pub use extract::extract_content;
pub use policy::{LayoutPolicy, PolicyOptions, Publisher, build_policy};
