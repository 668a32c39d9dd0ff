//! Elsevier journal template, single- or two-column.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::Outline;
use crate::error::{ExtractError, Result};
use crate::layout::{Page, PolicyParams, TextLine};
use crate::utils::HasBBox;

use super::rules::captioned_rule_groups;
use super::{LayoutPolicy, numbering_depth};

static NUMBERING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\d").expect("valid regex"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"((\.|-)b)|(bold)$").expect("valid regex"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"((\.|-)i)|(italic)$").expect("valid regex"));

/// Lone rules narrower than this are not footnote dividers.
const FOOTNOTE_MIN_WIDTH: f64 = 20.0;
/// Footnote dividers sit in the lower part of the page.
const FOOTNOTE_MAX_Y: f64 = 200.0;

/// Content area of one column. Text lines must start inside `left..right`.
#[derive(Debug, Clone, Copy)]
struct Band {
    bottom: f64,
    top: f64,
    left: f64,
    right: f64,
}

impl Band {
    const fn new(bottom: f64, top: f64, left: f64, right: f64) -> Self {
        Self {
            bottom,
            top,
            left,
            right,
        }
    }

    fn holds_vertically(&self, region: &dyn HasBBox) -> bool {
        region.y0() >= self.bottom && region.y1() <= self.top
    }
}

#[derive(Debug, Clone)]
pub struct ElsevierPolicy {
    columns: usize,
    params: PolicyParams,
}

impl ElsevierPolicy {
    pub fn new(columns: usize) -> Result<Self> {
        Self::with_params(columns, PolicyParams::default())
    }

    pub fn with_params(columns: usize, params: PolicyParams) -> Result<Self> {
        if !(1..=2).contains(&columns) {
            return Err(ExtractError::InvalidColumns {
                publisher: "elsevier",
                columns,
            });
        }
        Ok(Self { columns, params })
    }

    fn band(&self, column: usize) -> Band {
        match (self.columns, column) {
            (2, 0) => Band::new(55.0, 730.0, 30.0, 300.0),
            (2, _) => Band::new(55.0, 730.0, 300.0, 510.0),
            _ => Band::new(55.0, 690.0, 35.0, 510.0),
        }
    }

    /// Title block and abstract on the first page.
    fn in_title_block(region: &dyn HasBBox, page_index: usize) -> bool {
        page_index == 0 && region.y1() > 450.0
    }

    fn is_bold(font: &str) -> bool {
        BOLD.is_match(font)
    }

    fn is_italic(font: &str) -> bool {
        ITALIC.is_match(font)
    }
}

impl LayoutPolicy for ElsevierPolicy {
    fn name(&self) -> &'static str {
        "elsevier"
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn params(&self) -> &PolicyParams {
        &self.params
    }

    fn check_limits(&self, region: &dyn HasBBox, page_index: usize, column: usize) -> bool {
        let band = self.band(column);
        let x0 = region.x0();
        !Self::in_title_block(region, page_index)
            && band.holds_vertically(region)
            && band.left < x0
            && x0 < band.right
    }

    fn rule_in_column(&self, rule: &dyn HasBBox, page_index: usize, column: usize) -> bool {
        let band = self.band(column);
        !Self::in_title_block(rule, page_index)
            && band.holds_vertically(rule)
            && rule.x0() < band.right
            && rule.x1() > band.left
    }

    fn check_heading(&self, line: &TextLine, _outline: &Outline) -> bool {
        if !NUMBERING.is_match(line.text()) {
            return false;
        }
        let font = line.dominant_font();
        Self::is_bold(&font) || Self::is_italic(&font)
    }

    fn heading_level(&self, line: &TextLine) -> usize {
        numbering_depth(line.text()).unwrap_or(0)
    }

    fn exclude_tables_and_footnotes<'a>(
        &self,
        lines: Vec<&'a TextLine>,
        page: &Page,
        column: usize,
    ) -> Vec<&'a TextLine> {
        let captions: Vec<&TextLine> = lines
            .iter()
            .copied()
            .filter(|line| line.text().starts_with("Table") && Self::is_bold(&line.dominant_font()))
            .collect();
        captioned_rule_groups(
            self,
            page,
            column,
            &captions,
            FOOTNOTE_MIN_WIDTH,
            FOOTNOTE_MAX_Y,
        )
        .apply(lines)
    }
}
