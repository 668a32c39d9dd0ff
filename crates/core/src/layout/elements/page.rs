//! Page container: the unordered primitives found on one page.

use serde::Deserialize;

use crate::error::{ExtractError, Result};
use crate::utils::{HasBBox, is_valid_rect};

use super::graphics::{Figure, Segment};
use super::textline::TextLine;

/// Represents an entire page.
///
/// Storage order of the primitives carries no meaning; reading order is
/// reconstructed from geometry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    /// Zero-based page index within the document.
    pub index: usize,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub text_lines: Vec<TextLine>,
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub figures: Vec<Figure>,
}

impl Page {
    pub fn new(index: usize, width: f64, height: f64) -> Self {
        Self {
            index,
            width,
            height,
            text_lines: Vec::new(),
            segments: Vec::new(),
            figures: Vec::new(),
        }
    }

    pub fn add_line(&mut self, line: TextLine) {
        self.text_lines.push(line);
    }

    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn add_figure(&mut self, figure: Figure) {
        self.figures.push(figure);
    }

    pub fn is_portrait(&self) -> bool {
        self.width < self.height
    }

    /// Checks the geometry contract: positive page size and well-formed boxes.
    pub fn validate(&self) -> Result<()> {
        let malformed = |msg: String| ExtractError::MalformedPage {
            page: self.index,
            msg,
        };
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(malformed(format!(
                "non-positive page size {}x{}",
                self.width, self.height
            )));
        }
        if let Some(line) = self.text_lines.iter().find(|l| !is_valid_rect(l.bbox())) {
            return Err(malformed(format!(
                "inverted text line bbox {:?}",
                line.bbox()
            )));
        }
        if let Some(seg) = self.segments.iter().find(|s| !is_valid_rect(s.bbox())) {
            return Err(malformed(format!("inverted segment bbox {:?}", seg.bbox())));
        }
        if let Some(fig) = self.figures.iter().find(|f| !is_valid_rect(f.bbox())) {
            return Err(malformed(format!("inverted figure bbox {:?}", fig.bbox())));
        }
        Ok(())
    }
}
