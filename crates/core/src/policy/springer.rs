//! Springer conference proceedings (LNCS) template, single column.

use crate::document::Outline;
use crate::layout::{Page, PolicyParams, TextLine};
use crate::utils::HasBBox;

use super::rules::rule_groups;
use super::{LayoutPolicy, numbering_depth};

const FOOTNOTE_MIN_WIDTH: f64 = 50.0;

fn is_section_size(height: f64) -> bool {
    10.5 < height && height < 13.0
}

#[derive(Debug, Clone, Default)]
pub struct SpringerPolicy {
    params: PolicyParams,
}

impl SpringerPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: PolicyParams) -> Self {
        Self { params }
    }

    fn is_bold(font: &str) -> bool {
        font.contains("cmbx") || font.contains("bold") || font.contains(".b")
    }
}

impl LayoutPolicy for SpringerPolicy {
    fn name(&self) -> &'static str {
        "springer"
    }

    fn columns(&self) -> usize {
        1
    }

    fn params(&self) -> &PolicyParams {
        &self.params
    }

    fn check_limits(&self, region: &dyn HasBBox, page_index: usize, column: usize) -> bool {
        if page_index == 0 {
            // title and author lines
            if region.height() > 14.0 {
                return false;
            }
            // centred affiliations
            if region.x0() > 90.0 {
                return false;
            }
        }
        if region.y0() < 60.0 || region.y1() > 630.0 {
            return false;
        }
        if column == 0 {
            region.x0() < 295.0
        } else {
            region.x1() > 300.0
        }
    }

    fn check_heading(&self, line: &TextLine, _outline: &Outline) -> bool {
        if line.x0() > 100.0 {
            return false;
        }
        if line.mean_glyph_height().is_some_and(is_section_size) {
            return true;
        }
        Self::is_bold(&line.dominant_font())
            && (line.text().contains('.') || (70.0 < line.x0() && line.x0() < 90.0))
    }

    /// Section headings use the large size. Smaller bold headings nest by
    /// their numbering; run-in ones without a number open a subsection.
    fn heading_level(&self, line: &TextLine) -> usize {
        if line.mean_glyph_height().is_some_and(is_section_size) {
            return 0;
        }
        numbering_depth(line.text()).unwrap_or(1)
    }

    fn exclude_tables_and_footnotes<'a>(
        &self,
        lines: Vec<&'a TextLine>,
        page: &Page,
        column: usize,
    ) -> Vec<&'a TextLine> {
        rule_groups(self, page, column, FOOTNOTE_MIN_WIDTH).apply(lines)
    }

    /// The template wraps body text in form XObjects, which show up as
    /// figure regions, so nothing is dropped.
    fn exclude_shapes<'a>(
        &self,
        lines: Vec<&'a TextLine>,
        _page: &Page,
        _column: usize,
    ) -> Vec<&'a TextLine> {
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Figure;

    #[test]
    fn first_page_skips_title_block() {
        let policy = SpringerPolicy::new();
        let title = (140.0, 550.0, 460.0, 566.0);
        let affiliation = (150.0, 500.0, 450.0, 508.0);
        let abstract_line = (80.0, 400.0, 500.0, 408.0);
        assert!(!policy.check_limits(&title, 0, 0));
        assert!(!policy.check_limits(&affiliation, 0, 0));
        assert!(policy.check_limits(&abstract_line, 0, 0));
        assert!(policy.check_limits(&affiliation, 1, 0));
        assert!(!policy.check_limits(&(80.0, 620.0, 500.0, 635.0), 1, 0));
    }

    #[test]
    fn headings_by_size_or_bold_numbering() {
        let policy = SpringerPolicy::new();
        let outline = Outline::default();
        let at = |x0: f64, text: &str, font: &str, size: f64| {
            TextLine::from_text((x0, 500.0, 400.0, 500.0 + size), text, font, size)
        };
        let section = at(72.0, "1 Introduction", "CMBX12", 12.0);
        let sub = at(72.0, "2.1 Data", "CMBX10", 10.0);
        let run_in = at(60.0, "Results.", "NHTOVX+CMBX10", 10.0);
        let body = at(60.0, "Body text, e.g. here", "CMR10", 10.0);
        let indented = at(120.0, "Table 1", "CMBX12", 12.0);
        for line in [&section, &sub, &run_in] {
            assert!(policy.check_heading(line, &outline), "{}", line.text());
        }
        assert!(!policy.check_heading(&body, &outline));
        assert!(!policy.check_heading(&indented, &outline));

        assert_eq!(policy.heading_level(&section), 0);
        assert_eq!(policy.heading_level(&sub), 1);
        assert_eq!(policy.heading_level(&run_in), 1);
    }

    #[test]
    fn figures_do_not_drop_lines() {
        let policy = SpringerPolicy::new();
        let mut page = Page::new(1, 595.0, 842.0);
        page.add_figure(Figure::new("Fig1", (60.0, 300.0, 400.0, 500.0)));
        let label = TextLine::from_text((80.0, 400.0, 200.0, 408.0), "x axis", "CMR8", 8.0);
        assert_eq!(policy.exclude_shapes(vec![&label], &page, 0), vec![&label]);
    }
}
