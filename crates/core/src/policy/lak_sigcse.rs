//! ACM two-column proceedings template as used by LAK and SIGCSE.

use crate::document::Outline;
use crate::layout::{Page, PolicyParams, TextLine};
use crate::utils::HasBBox;

use super::rules::rule_groups;
use super::{LayoutPolicy, numbering_depth};

const FOOTNOTE_MIN_WIDTH: f64 = 200.0;

/// Glyphs smaller than this belong to footers, copyright blocks and
/// table cells.
const MIN_BODY_HEIGHT: f64 = 8.0;

/// Bold faces seen across the template's LaTeX and Word variants.
const BOLD_FONTS: [&str; 6] = [
    "cmbx",
    "bold",
    ".b",
    "nimbusromno9l-medi",
    "libertinetb",
    "libertineb",
];

#[derive(Debug, Clone, Default)]
pub struct LakSigcsePolicy {
    params: PolicyParams,
}

impl LakSigcsePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: PolicyParams) -> Self {
        Self { params }
    }
}

impl LayoutPolicy for LakSigcsePolicy {
    fn name(&self) -> &'static str {
        "lak-sigcse"
    }

    fn columns(&self) -> usize {
        2
    }

    fn params(&self) -> &PolicyParams {
        &self.params
    }

    fn check_limits(&self, region: &dyn HasBBox, page_index: usize, column: usize) -> bool {
        if region.y0() < 60.0 || region.y1() > 720.0 {
            return false;
        }
        // the author block spans both columns
        if page_index == 0 {
            if column == 0 && region.x1() > 300.0 {
                return false;
            }
            if column == 1 && region.x0() < 300.0 {
                return false;
            }
        }
        if column == 0 {
            region.x0() < 295.0
        } else {
            region.x1() > 300.0
        }
    }

    fn check_line(&self, line: &TextLine, page_index: usize, column: usize) -> bool {
        if line.mean_glyph_height().is_some_and(|h| h < MIN_BODY_HEIGHT) {
            return false;
        }
        self.check_limits(line, page_index, column)
    }

    fn check_heading(&self, line: &TextLine, _outline: &Outline) -> bool {
        let font = line.dominant_font();
        if !BOLD_FONTS.iter().any(|bold| font.contains(bold)) {
            return false;
        }
        line.text().contains('.') && line.mean_glyph_height().is_some_and(|h| h > 10.0)
    }

    /// Numbered headings nest by their numbering. Unnumbered ones are
    /// sections when set in capitals, subsections otherwise.
    fn heading_level(&self, line: &TextLine) -> usize {
        match numbering_depth(line.text()) {
            Some(depth) => depth,
            None if line.is_uppercase() => 0,
            None => 1,
        }
    }

    fn exclude_tables_and_footnotes<'a>(
        &self,
        lines: Vec<&'a TextLine>,
        page: &Page,
        column: usize,
    ) -> Vec<&'a TextLine> {
        rule_groups(self, page, column, FOOTNOTE_MIN_WIDTH).apply(lines)
    }
}
