//! Page geometry for layout reconstruction.
//!
//! This module contains:
//! - Page primitive types (Page, TextLine, Glyph, Segment, Figure)
//! - Reconstruction thresholds (PolicyParams)
//! - Reading order sorting and column margin detection

pub mod elements;
pub mod order;
pub mod params;

pub use elements::*;
pub use order::{Margins, detect_margins, reading_cmp, sort_reading_order};
pub use params::*;
