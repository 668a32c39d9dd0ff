//! Glyph type: one positioned character of a text line.
//!
//! Use `Glyph::builder()` to construct glyphs with optional fields.

use serde::Deserialize;

use crate::utils::Rect;

use super::component::Component;

/// Optional non-stroking colour components (gray, RGB or CMYK).
pub type Color = Option<Vec<f64>>;

/// Builder for Glyph with fluent API for optional fields.
///
/// # Example
/// ```ignore
/// let g = Glyph::builder((0.0, 0.0, 6.0, 10.0), 'A', "Times-Bold", 10.0)
///     .upright(false)
///     .color(Some(vec![0.5, 0.5, 0.5]))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct GlyphBuilder {
    bbox: Rect,
    ch: char,
    fontname: String,
    size: f64,
    upright: bool,
    color: Color,
}

impl GlyphBuilder {
    /// Creates a new builder with required fields.
    /// Optional fields default to: upright=true, color=None.
    pub fn new(bbox: Rect, ch: char, fontname: &str, size: f64) -> Self {
        Self {
            bbox,
            ch,
            fontname: fontname.to_string(),
            size,
            upright: true,
            color: None,
        }
    }

    /// Sets whether the glyph is upright (default: true).
    pub const fn upright(mut self, upright: bool) -> Self {
        self.upright = upright;
        self
    }

    /// Sets the non-stroking (fill) colour.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn build(self) -> Glyph {
        Glyph {
            component: Component::new(self.bbox),
            ch: self.ch,
            fontname: self.fontname,
            size: self.size,
            upright: self.upright,
            color: self.color,
        }
    }
}

/// A character with bounding box, font and ink metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Glyph {
    #[serde(rename = "bbox")]
    component: Component,
    #[serde(rename = "char")]
    ch: char,
    fontname: String,
    /// Glyph height as reported by the font.
    size: f64,
    #[serde(default = "default_upright")]
    upright: bool,
    #[serde(default)]
    color: Color,
}

const fn default_upright() -> bool {
    true
}

impl Glyph {
    pub fn builder(bbox: Rect, ch: char, fontname: &str, size: f64) -> GlyphBuilder {
        GlyphBuilder::new(bbox, ch, fontname, size)
    }

    pub fn new(bbox: Rect, ch: char, fontname: &str, size: f64) -> Self {
        Self::builder(bbox, ch, fontname, size).build()
    }

    pub const fn ch(&self) -> char {
        self.ch
    }

    pub fn fontname(&self) -> &str {
        &self.fontname
    }

    pub const fn size(&self) -> f64 {
        self.size
    }

    pub const fn upright(&self) -> bool {
        self.upright
    }

    pub const fn color(&self) -> &Color {
        &self.color
    }
}

impl std::ops::Deref for Glyph {
    type Target = Component;
    fn deref(&self) -> &Self::Target {
        &self.component
    }
}

impl_has_bbox_delegate!(Glyph, component);
