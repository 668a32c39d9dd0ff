//! Extraction driver: pages to section tree.
//!
//! Pages are walked in order and each page column by column. The lines of a
//! column are sorted into reading order, filtered by the layout policy and
//! fed into the section tree. Everything before the first top-level heading
//! is prologue (title block, abstract, keywords) and is discarded.

use tracing::{debug, trace, warn};

use crate::document::{Outline, Paragraph, Section};
use crate::layout::{Page, PolicyParams, TextLine, detect_margins, sort_reading_order};
use crate::policy::LayoutPolicy;
use crate::utils::{HasBBox, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ScanningForStart,
    Accumulating,
}

/// Reconstructs the section tree of a document.
///
/// Returns an empty list when no top-level heading is ever found; callers
/// should treat that as "no structured content", not as a failure.
pub fn extract_content(
    pages: &[Page],
    outline: &Outline,
    policy: &dyn LayoutPolicy,
) -> Vec<Section> {
    let mut extractor = Extractor::new(policy, outline);
    for page in pages {
        extractor.process_page(page);
    }
    extractor.finish()
}

/// The previous body line and the right margin of the column it was in.
#[derive(Debug, Clone, Copy)]
struct LastLine {
    bbox: Rect,
    right_margin: f64,
}

struct Extractor<'a> {
    policy: &'a dyn LayoutPolicy,
    outline: &'a Outline,
    state: State,
    sections: Vec<Section>,
    last_line: Option<LastLine>,
}

impl<'a> Extractor<'a> {
    fn new(policy: &'a dyn LayoutPolicy, outline: &'a Outline) -> Self {
        Self {
            policy,
            outline,
            state: State::ScanningForStart,
            sections: Vec::new(),
            last_line: None,
        }
    }

    fn process_page(&mut self, page: &Page) {
        let policy = self.policy;
        if !policy.check_page(page) {
            debug!(page = page.index, policy = policy.name(), "skipping landscape page");
            return;
        }

        for column in 0..policy.columns() {
            let mut lines: Vec<&TextLine> = page
                .text_lines
                .iter()
                .filter(|line| {
                    policy.is_horizontal(line) && policy.check_line(line, page.index, column)
                })
                .collect();
            sort_reading_order(&mut lines, policy.params().same_line_epsilon);

            let lines = match self.state {
                State::ScanningForStart => match self.find_start(&lines) {
                    Some(start) => {
                        debug!(
                            page = page.index,
                            column,
                            heading = %self.sections[0],
                            "found first section"
                        );
                        lines.split_off(start + 1)
                    }
                    None => continue,
                },
                State::Accumulating => {
                    let before = lines.len();
                    let lines = policy.exclude_tables_and_footnotes(lines, page, column);
                    let after_tables = lines.len();
                    let lines = policy.exclude_shapes(lines, page, column);
                    debug!(
                        page = page.index,
                        column,
                        tables_and_footnotes = before - after_tables,
                        shapes = after_tables - lines.len(),
                        "excluded lines"
                    );
                    lines
                }
            };

            let Some(margins) = detect_margins(&lines, policy.params().margin_bucket) else {
                continue;
            };
            trace!(
                page = page.index,
                column,
                lines = lines.len(),
                left = margins.left,
                right = margins.right,
                "column ready"
            );

            let mut same_column = false;
            for line in lines {
                self.process_line(line, margins.right, &mut same_column);
            }
        }
    }

    /// Opens the first section at the first top-level heading of the column.
    /// Returns the heading's position in `lines`.
    fn find_start(&mut self, lines: &[&TextLine]) -> Option<usize> {
        let start = lines.iter().position(|line| {
            self.policy.check_heading(line, self.outline) && self.policy.heading_level(line) == 0
        })?;
        self.sections.push(Section::new(lines[start].text(), 0));
        self.state = State::Accumulating;
        Some(start)
    }

    fn process_line(&mut self, line: &TextLine, right_margin: f64, same_column: &mut bool) {
        let text = line.text().trim_start();
        if text.is_empty() {
            return;
        }
        let policy = self.policy;
        let Some(section) = self.sections.last_mut() else {
            return;
        };

        if policy.check_heading(line, self.outline) {
            let level = policy.heading_level(line);
            if !self.outline.is_empty() {
                debug!(
                    heading = text.trim_end(),
                    level,
                    in_outline = self.outline.find(text).is_some(),
                    "heading"
                );
            }
            if !section.add_heading(line.text(), level) {
                trace!(heading = line.text().trim(), level, "new section");
                self.sections.push(Section::new(line.text(), level));
            }
            return;
        }

        let merged = match (section.last_paragraph_mut(), self.last_line) {
            (Some(paragraph), Some(last)) => {
                retract_separator(paragraph, line, text, &last, *same_column, policy.params());
                if paragraph.ends_with('\n') {
                    false
                } else {
                    paragraph.append(text);
                    true
                }
            }
            _ => false,
        };
        if !merged {
            section.append_paragraph(Paragraph::new(text));
        }
        self.last_line = Some(LastLine {
            bbox: line.bbox(),
            right_margin,
        });
        *same_column = true;
    }

    fn finish(mut self) -> Vec<Section> {
        let min_chars = self.policy.params().min_section_chars;
        for section in &mut self.sections {
            section.remove_empty(min_chars);
        }
        self.sections.retain(|section| !section.is_empty());
        if self.sections.is_empty() {
            warn!(policy = self.policy.name(), "document yielded no sections");
        }
        debug!(
            policy = self.policy.name(),
            sections = self.sections.len(),
            "extraction finished"
        );
        self.sections
    }
}

/// Decides whether `line` continues the paragraph's last line and, if so,
/// retracts the newline sentinel so the caller appends instead of opening a
/// new paragraph.
///
/// A line to the right of the previous one on the same row is a split
/// fragment of it; this check runs first and excludes the margin check.
/// Otherwise, when the previous line ran to the right margin of its column
/// and sat either on this column or at the bottom of the previous one, a
/// line-final hyphen is removed or, if the sentence is still open, the
/// newline is dropped and the space kept.
fn retract_separator(
    paragraph: &mut Paragraph,
    line: &TextLine,
    text: &str,
    last: &LastLine,
    same_column: bool,
    params: &PolicyParams,
) {
    let prev = &last.bbox;
    if same_column && line.y1() > prev.y0() && line.x0() > prev.x1() && paragraph.ends_with('\n') {
        paragraph.pop(1);
        return;
    }
    let at_margin = (prev.x1() - last.right_margin).abs() < params.margin_proximity;
    let continued = same_column || prev.y0() < params.page_bottom_continuation;
    if at_margin && continued && !paragraph.remove_hyphen() && paragraph.same_paragraph(text) {
        paragraph.pop(1);
    }
}
