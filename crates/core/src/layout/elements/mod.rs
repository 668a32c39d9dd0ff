//! Page primitive types consumed by the extraction pipeline.
//!
//! Contains:
//! - Component: Base type for objects with bounding boxes
//! - Glyph: A positioned character with font, size, orientation and ink
//! - TextLine: A horizontal line of glyphs with its text
//! - Segment: Straight lines and curves (table rules, footnote dividers)
//! - Figure: Embedded figure/image regions
//! - Page: The unordered primitives of one page

/// Implements HasBBox trait by delegating to a field with direct
/// `.x0`, `.y0`, `.x1`, `.y1` fields:
/// ```ignore
/// impl_has_bbox_delegate!(Segment, component);
/// // expands to: self.component.x0
/// ```
macro_rules! impl_has_bbox_delegate {
    ($type:ty, $field:ident) => {
        impl crate::utils::HasBBox for $type {
            fn x0(&self) -> f64 {
                self.$field.x0
            }
            fn y0(&self) -> f64 {
                self.$field.y0
            }
            fn x1(&self) -> f64 {
                self.$field.x1
            }
            fn y1(&self) -> f64 {
                self.$field.y1
            }
        }
    };
}

mod component;
mod glyph;
mod graphics;
mod page;
mod textline;

pub use component::Component;
pub use glyph::{Color, Glyph, GlyphBuilder};
pub use graphics::{Figure, Segment, SegmentKind};
pub use page::Page;
pub use textline::TextLine;
