//! Text line type: a horizontal run of glyphs produced by layout analysis.
//!
//! The text of a line always ends with a single `\n`, mirroring the newline
//! annotation that layout analysis appends to every analysed line. The
//! paragraph heuristics rely on that terminator.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::utils::Rect;

use super::component::Component;
use super::glyph::Glyph;

/// A positioned line of text with per-glyph typography.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "TextLineDump")]
pub struct TextLine {
    pub(crate) component: Component,
    text: String,
    glyphs: Vec<Glyph>,
}

#[derive(Deserialize)]
struct TextLineDump {
    bbox: Rect,
    text: String,
    #[serde(default)]
    glyphs: Vec<Glyph>,
}

impl From<TextLineDump> for TextLine {
    fn from(dump: TextLineDump) -> Self {
        Self::new(dump.bbox, &dump.text, dump.glyphs)
    }
}

impl TextLine {
    pub fn new(bbox: Rect, text: &str, glyphs: Vec<Glyph>) -> Self {
        let mut text = text.trim_end_matches('\n').to_string();
        text.push('\n');
        Self {
            component: Component::new(bbox),
            text,
            glyphs,
        }
    }

    /// Builds a line whose visible characters share one font and size,
    /// spread evenly across the bounding box.
    pub fn from_text(bbox: Rect, text: &str, fontname: &str, size: f64) -> Self {
        let (x0, y0, x1, y1) = bbox;
        let count = text.chars().filter(|c| !c.is_whitespace()).count().max(1);
        let step = (x1 - x0) / count as f64;
        let glyphs = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(i, ch)| {
                let gx0 = x0 + step * i as f64;
                Glyph::new((gx0, y0, gx0 + step, y1), ch, fontname, size)
            })
            .collect();
        Self::new(bbox, text, glyphs)
    }

    pub const fn bbox(&self) -> Rect {
        self.component.bbox()
    }

    /// Line text, terminated by exactly one `\n`.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Most common font name among the glyphs, lower-cased.
    ///
    /// Ties go to the font seen first. Returns an empty string for a line
    /// without glyphs.
    pub fn dominant_font(&self) -> String {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for g in &self.glyphs {
            *counts.entry(g.fontname()).or_default() += 1;
        }
        let mut best: Option<(&str, usize)> = None;
        for (font, n) in counts {
            if best.is_none_or(|(_, m)| n > m) {
                best = Some((font, n));
            }
        }
        best.map(|(font, _)| font.to_lowercase()).unwrap_or_default()
    }

    /// Mean glyph height, or None for a line without glyphs.
    pub fn mean_glyph_height(&self) -> Option<f64> {
        if self.glyphs.is_empty() {
            return None;
        }
        let total: f64 = self.glyphs.iter().map(|g| g.size()).sum();
        Some(total / self.glyphs.len() as f64)
    }

    /// Majority vote over the glyphs' upright flags.
    pub fn is_upright_majority(&self) -> bool {
        if self.glyphs.is_empty() {
            return false;
        }
        let upright = self.glyphs.iter().filter(|g| g.upright()).count();
        upright as f64 / self.glyphs.len() as f64 >= 0.5
    }

    /// True when the averaged fill colour is near-black in its first two
    /// components, or when no glyph carries colour information.
    pub fn is_dark_ink(&self) -> bool {
        let colors: Vec<&Vec<f64>> = self
            .glyphs
            .iter()
            .filter_map(|g| g.color().as_ref())
            .filter(|c| !c.is_empty())
            .collect();
        if colors.is_empty() {
            return true;
        }
        let n = colors.len() as f64;
        let component_mean = |i: usize| colors.iter().filter_map(|c| c.get(i)).sum::<f64>() / n;
        component_mean(0) + component_mean(1) < 0.1
    }

    /// True when the text has at least one cased letter and no lowercase letters.
    pub fn is_uppercase(&self) -> bool {
        let mut cased = false;
        for c in self.text.chars() {
            if c.is_lowercase() {
                return false;
            }
            if c.is_uppercase() {
                cased = true;
            }
        }
        cased
    }
}

impl_has_bbox_delegate!(TextLine, component);
