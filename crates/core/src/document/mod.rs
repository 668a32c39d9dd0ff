//! Reconstructed document model: paragraphs, sections, outline hints and
//! the flattened storage records.

pub mod outline;
pub mod paragraph;
pub mod record;
pub mod section;

pub use outline::{Bookmark, Heading, Outline};
pub use paragraph::Paragraph;
pub use record::{SectionRecord, flatten};
pub use section::Section;
