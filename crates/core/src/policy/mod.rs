//! Publisher layout policies.
//!
//! PDF templates are visually regular but carry no reliable structure tags.
//! A policy encodes one publisher's template: the content region of each
//! column, how headings look, and how tables, footnotes and figures are
//! recognised. The extraction driver only ever sees `dyn LayoutPolicy`.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::document::Outline;
use crate::error::{ExtractError, Result};
use crate::layout::{Page, PolicyParams, TextLine};
use crate::utils::HasBBox;

mod elsevier;
mod frontiers;
mod lak_sigcse;
pub mod rules;
mod springer;

pub use elsevier::ElsevierPolicy;
pub use frontiers::FrontiersPolicy;
pub use lak_sigcse::LakSigcsePolicy;
pub use springer::SpringerPolicy;

/// Dotted numeric heading prefix: `2`, `2.`, `2.1`, `3.2.1.`.
static NUMBERING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+(?:\.\d+)*)\.?(?:\s|$)").expect("valid numbering regex"));

/// Nesting depth implied by a numeric heading prefix.
///
/// `"2 Method"` and `"2. Method"` are depth 0, `"2.1 Sample"` depth 1.
/// Returns None when the text has no numeric prefix.
pub fn numbering_depth(text: &str) -> Option<usize> {
    let caps = NUMBERING.captures(text)?;
    Some(caps[1].split('.').count() - 1)
}

/// Per-publisher capability set used by the extraction driver.
pub trait LayoutPolicy: Send + Sync {
    /// Short publisher name for logs and errors.
    fn name(&self) -> &'static str;

    /// Number of text columns scanned per page, left to right.
    fn columns(&self) -> usize;

    fn params(&self) -> &PolicyParams;

    /// Whether the page is processed at all. Landscape pages are skipped.
    fn check_page(&self, page: &Page) -> bool {
        page.is_portrait()
    }

    /// Whether a region lies in the main content area of `column` on the
    /// page with index `page_index`. Applies to text lines, rules and figures.
    fn check_limits(&self, region: &dyn HasBBox, page_index: usize, column: usize) -> bool;

    /// Whether a horizontal rule delimits content of `column`. Rules often
    /// span several columns, so templates whose column test looks at `x0`
    /// alone override this with a band overlap test.
    fn rule_in_column(&self, rule: &dyn HasBBox, page_index: usize, column: usize) -> bool {
        self.check_limits(rule, page_index, column)
    }

    /// Content-region test for text lines. Policies that also filter on
    /// typography override this; the default is the plain geometric test.
    fn check_line(&self, line: &TextLine, page_index: usize, column: usize) -> bool {
        self.check_limits(line, page_index, column)
    }

    /// Rotated lines are excluded from reading order.
    fn is_horizontal(&self, line: &TextLine) -> bool {
        line.is_upright_majority()
    }

    /// Whether the line is a heading. The outline is an optional hint.
    fn check_heading(&self, line: &TextLine, outline: &Outline) -> bool;

    /// Nesting depth of a heading line: 0 for sections, 1 for subsections.
    fn heading_level(&self, line: &TextLine) -> usize;

    /// Drops lines inside tables and below the footnote divider.
    fn exclude_tables_and_footnotes<'a>(
        &self,
        lines: Vec<&'a TextLine>,
        _page: &Page,
        _column: usize,
    ) -> Vec<&'a TextLine> {
        lines
    }

    /// Drops lines overlapping a figure inside this column's content area.
    fn exclude_shapes<'a>(
        &self,
        lines: Vec<&'a TextLine>,
        page: &Page,
        column: usize,
    ) -> Vec<&'a TextLine> {
        let figures: Vec<_> = page
            .figures
            .iter()
            .filter(|fig| self.check_limits(*fig, page.index, column))
            .collect();
        if figures.is_empty() {
            return lines;
        }
        lines
            .into_iter()
            .filter(|line| !figures.iter().any(|fig| line.overlaps(*fig)))
            .collect()
    }
}

/// Publisher templates with a bundled policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Publisher {
    Elsevier,
    Frontiers,
    Springer,
    LakSigcse,
}

impl FromStr for Publisher {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "elsevier" => Ok(Publisher::Elsevier),
            "frontiers" => Ok(Publisher::Frontiers),
            "springer" | "springer-conf" => Ok(Publisher::Springer),
            "lak" | "sigcse" | "lak-sigcse" | "acm" => Ok(Publisher::LakSigcse),
            _ => Err(ExtractError::UnknownPublisher(s.to_string())),
        }
    }
}

/// Options for building a bundled policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyOptions {
    /// Column count for templates that come in several variants (Elsevier).
    pub columns: Option<usize>,
    /// Use the pre-2016 Frontiers template.
    pub old_layout: bool,
    /// Threshold overrides. None keeps the policy's defaults.
    pub params: Option<PolicyParams>,
}

/// Builds the policy for a publisher.
pub fn build_policy(
    publisher: Publisher,
    options: &PolicyOptions,
) -> Result<Box<dyn LayoutPolicy>> {
    let params = options.params.clone().unwrap_or_default();
    let fixed_columns = |name: &'static str, expected: usize| match options.columns {
        Some(columns) if columns != expected => Err(ExtractError::InvalidColumns {
            publisher: name,
            columns,
        }),
        _ => Ok(()),
    };
    let policy: Box<dyn LayoutPolicy> = match publisher {
        Publisher::Elsevier => {
            let columns = options.columns.unwrap_or(1);
            Box::new(ElsevierPolicy::with_params(columns, params)?)
        }
        Publisher::Frontiers => {
            fixed_columns("frontiers", 2)?;
            Box::new(FrontiersPolicy::with_params(options.old_layout, params))
        }
        Publisher::Springer => {
            fixed_columns("springer", 1)?;
            Box::new(SpringerPolicy::with_params(params))
        }
        Publisher::LakSigcse => {
            fixed_columns("lak-sigcse", 2)?;
            Box::new(LakSigcsePolicy::with_params(params))
        }
    };
    Ok(policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Figure;

    #[test]
    fn numbering_depth_counts_components() {
        assert_eq!(numbering_depth("2 Method\n"), Some(0));
        assert_eq!(numbering_depth("2. Method"), Some(0));
        assert_eq!(numbering_depth("2.1 Participants"), Some(1));
        assert_eq!(numbering_depth("  3.2.1. Coding"), Some(2));
        assert_eq!(numbering_depth("Method"), None);
        assert_eq!(numbering_depth("2nd experiment"), None);
    }

    #[test]
    fn publisher_names_parse() {
        assert_eq!("Elsevier".parse::<Publisher>().unwrap(), Publisher::Elsevier);
        assert_eq!("lak-sigcse".parse::<Publisher>().unwrap(), Publisher::LakSigcse);
        assert!(matches!(
            "ieee".parse::<Publisher>(),
            Err(ExtractError::UnknownPublisher(_))
        ));
    }

    #[test]
    fn build_policy_validates_columns() {
        let two = PolicyOptions {
            columns: Some(2),
            ..Default::default()
        };
        assert_eq!(build_policy(Publisher::Elsevier, &two).unwrap().columns(), 2);
        assert!(build_policy(Publisher::Springer, &two).is_err());
        let three = PolicyOptions {
            columns: Some(3),
            ..Default::default()
        };
        assert!(build_policy(Publisher::Elsevier, &three).is_err());
    }

    #[test]
    fn params_override_reaches_policy() {
        let options = PolicyOptions {
            params: Some(PolicyParams::default().with_min_section_chars(10)),
            ..Default::default()
        };
        let policy = build_policy(Publisher::Frontiers, &options).unwrap();
        assert_eq!(policy.params().min_section_chars, 10);
    }

    #[test]
    fn default_shape_exclusion_drops_overlapping_lines() {
        let policy = FrontiersPolicy::new(false);
        let mut page = Page::new(2, 595.0, 842.0);
        page.add_figure(Figure::new("Im1", (60.0, 300.0, 280.0, 500.0)));
        let inside = TextLine::from_text((80.0, 400.0, 200.0, 410.0), "axis label", "F", 9.0);
        let outside = TextLine::from_text((80.0, 600.0, 280.0, 610.0), "body text", "F", 9.0);
        let other_column = TextLine::from_text((320.0, 400.0, 540.0, 410.0), "right", "F", 9.0);

        let kept = policy.exclude_shapes(vec![&inside, &outside], &page, 0);
        assert_eq!(kept, vec![&outside]);
        // The figure is outside column 1's content region, so nothing goes.
        let kept = policy.exclude_shapes(vec![&other_column], &page, 1);
        assert_eq!(kept.len(), 1);
    }
}
