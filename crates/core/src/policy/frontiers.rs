//! Frontiers journal template, two columns.
//!
//! The pre-2016 template set headings in Univers Condensed Bold and marked
//! subsections with grey ink. The current one sizes headings up and sets
//! top-level ones in capitals or a `-Bd` face.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::Outline;
use crate::layout::{Page, PolicyParams, TextLine};
use crate::utils::HasBBox;

use super::LayoutPolicy;
use super::rules::rule_groups;

static OLD_HEADING_FONT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+univers-condensedbold$").expect("valid regex"));

const FOOTNOTE_MIN_WIDTH: f64 = 200.0;

#[derive(Debug, Clone)]
pub struct FrontiersPolicy {
    old_layout: bool,
    params: PolicyParams,
}

impl FrontiersPolicy {
    pub fn new(old_layout: bool) -> Self {
        Self::with_params(old_layout, PolicyParams::default())
    }

    pub fn with_params(old_layout: bool, params: PolicyParams) -> Self {
        Self { old_layout, params }
    }
}

impl LayoutPolicy for FrontiersPolicy {
    fn name(&self) -> &'static str {
        "frontiers"
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
        // The current template's first page has a side bar on the left and a
        // single wide body column.
        if page_index == 0 && !self.old_layout {
            return column == 0 && region.x0() > 160.0;
        }
        if column == 0 {
            region.x0() < 295.0
        } else {
            region.x1() > 300.0
        }
    }

    fn check_heading(&self, line: &TextLine, _outline: &Outline) -> bool {
        if self.old_layout {
            OLD_HEADING_FONT.is_match(&line.dominant_font())
        } else {
            line.mean_glyph_height()
                .is_some_and(|h| 10.5 < h && h < 13.0)
        }
    }

    fn heading_level(&self, line: &TextLine) -> usize {
        if self.old_layout {
            if line.is_dark_ink() { 1 } else { 0 }
        } else if line.is_uppercase() || line.dominant_font().ends_with("-bd") {
            0
        } else {
            1
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
