//! End-to-end extraction over synthetic pages.

use pdfsections_core::document::{Outline, flatten};
use pdfsections_core::extract_content;
use pdfsections_core::layout::{Page, PolicyParams, Segment, TextLine};
use pdfsections_core::policy::{
    LayoutPolicy, PolicyOptions, Publisher, build_policy, numbering_depth,
};
use pdfsections_core::utils::HasBBox;

// ============================================================================
// Fixtures
// ============================================================================

/// Single-column policy: bold lines are headings, nested by numbering.
struct BoldHeadings {
    params: PolicyParams,
}

impl BoldHeadings {
    fn new(min_section_chars: usize) -> Self {
        Self {
            params: PolicyParams::default().with_min_section_chars(min_section_chars),
        }
    }
}

impl LayoutPolicy for BoldHeadings {
    fn name(&self) -> &'static str {
        "bold-headings"
    }

    fn columns(&self) -> usize {
        1
    }

    fn params(&self) -> &PolicyParams {
        &self.params
    }

    fn check_limits(&self, region: &dyn HasBBox, _page_index: usize, _column: usize) -> bool {
        region.y0() >= 50.0 && region.y1() <= 800.0
    }

    fn check_heading(&self, line: &TextLine, _outline: &Outline) -> bool {
        line.dominant_font().ends_with("-bold")
    }

    fn heading_level(&self, line: &TextLine) -> usize {
        numbering_depth(line.text()).unwrap_or(0)
    }
}

const RIGHT: f64 = 300.0;
const LEADING: f64 = 12.0;

/// Stacks lines top-down from y=700 at 12pt leading.
fn column(lines: &[(&str, &str, f64)]) -> Vec<TextLine> {
    lines
        .iter()
        .enumerate()
        .map(|(i, (text, font, x1))| {
            let y0 = 700.0 - LEADING * i as f64;
            TextLine::from_text((72.0, y0, *x1, y0 + 10.0), text, font, 10.0)
        })
        .collect()
}

fn page_with(index: usize, lines: Vec<TextLine>) -> Page {
    let mut page = Page::new(index, 595.0, 842.0);
    for line in lines {
        page.add_line(line);
    }
    page
}

// ============================================================================
// Paragraph reconstruction
// ============================================================================

#[test]
fn test_hyphenated_word_merges_across_lines() {
    let page = page_with(
        0,
        column(&[
            ("1. Introduction", "Times-Bold", RIGHT),
            ("This is the first sen-", "Times-Roman", RIGHT),
            ("tence of the paragraph.", "Times-Roman", 250.0),
        ]),
    );
    let sections = extract_content(&[page], &Outline::default(), &BoldHeadings::new(10));

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title(), "Introduction");
    assert_eq!(sections[0].paragraphs().len(), 1);
    assert_eq!(
        sections[0].paragraphs()[0].text(),
        "This is the first sentence of the paragraph."
    );
}

#[test]
fn test_short_line_starts_new_paragraph() {
    let page = page_with(
        0,
        column(&[
            ("1. Method", "Times-Bold", RIGHT),
            ("We recruited forty students from two", "Times-Roman", RIGHT),
            ("universities.", "Times-Roman", 140.0),
            ("Each student completed two tasks.", "Times-Roman", 260.0),
        ]),
    );
    let sections = extract_content(&[page], &Outline::default(), &BoldHeadings::new(10));

    let paragraphs: Vec<&str> = sections[0].paragraphs().iter().map(|p| p.text()).collect();
    assert_eq!(
        paragraphs,
        vec![
            "We recruited forty students from two universities.",
            "Each student completed two tasks.",
        ]
    );
}

// ============================================================================
// Section tree
// ============================================================================

#[test]
fn test_wrapped_heading_merges_into_one_section() {
    let body = "Body text that is long enough to survive the pruning of short sections.";
    let page = page_with(
        0,
        column(&[
            ("1. Introduction and", "Times-Bold", RIGHT),
            ("Background", "Times-Bold", 160.0),
            (body, "Times-Roman", 250.0),
        ]),
    );
    let sections = extract_content(&[page], &Outline::default(), &BoldHeadings::new(50));

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].heading(), "1. Introduction and Background");
    assert_eq!(sections[0].title(), "Introduction and Background");
    assert_eq!(sections[0].heading_index(), Some("1."));
}

#[test]
fn test_heading_after_body_opens_sibling_and_subsections_nest() {
    let long = "A paragraph that is comfortably longer than fifty characters in total.";
    let page = page_with(
        0,
        column(&[
            ("1. Introduction", "Times-Bold", RIGHT),
            (long, "Times-Roman", 250.0),
            ("2. Method", "Times-Bold", RIGHT),
            ("2.1 Participants", "Times-Bold", RIGHT),
            (long, "Times-Roman", 250.0),
            ("2.2 Spurious", "Times-Bold", RIGHT),
            ("Short.", "Times-Roman", 120.0),
            ("3. Results", "Times-Bold", RIGHT),
            (long, "Times-Roman", 250.0),
        ]),
    );
    let sections = extract_content(&[page], &Outline::default(), &BoldHeadings::new(50));
    let records = flatten(&sections);

    let shape: Vec<(&str, Option<usize>)> =
        records.iter().map(|r| (r.heading.as_str(), r.parent)).collect();
    assert_eq!(
        shape,
        vec![
            ("Introduction", None),
            ("Method", None),
            ("Participants", Some(1)),
            ("Results", None),
        ]
    );
    assert_eq!(records[1].text, "");
    assert_eq!(records[2].text, long);
}

// ============================================================================
// Start detection and empty documents
// ============================================================================

#[test]
fn test_prologue_before_first_heading_is_discarded() {
    let long = "Body text that is long enough to survive the pruning of short sections.";
    let page = page_with(
        0,
        column(&[
            ("A Study of Things", "Times-Roman", 200.0),
            ("Abstract text that is not part of any section.", "Times-Roman", RIGHT),
            ("1. Introduction", "Times-Bold", RIGHT),
            (long, "Times-Roman", 250.0),
        ]),
    );
    let sections = extract_content(&[page], &Outline::default(), &BoldHeadings::new(50));
    let records = flatten(&sections);
    assert_eq!(records.len(), 1);
    assert!(!records[0].text.contains("Abstract"));
}

#[test]
fn test_subsection_heading_does_not_start_document() {
    let page = page_with(
        0,
        column(&[
            ("1.1 Aims", "Times-Bold", RIGHT),
            ("Some text that would otherwise be long enough to keep.", "Times-Roman", 250.0),
        ]),
    );
    let sections = extract_content(&[page], &Outline::default(), &BoldHeadings::new(10));
    assert!(sections.is_empty());
}

#[test]
fn test_no_heading_yields_empty_result() {
    let page = page_with(
        0,
        column(&[
            ("Scanned cover page", "Times-Roman", RIGHT),
            ("with no structure at all.", "Times-Roman", 250.0),
        ]),
    );
    let sections = extract_content(&[page], &Outline::default(), &BoldHeadings::new(10));
    assert!(sections.is_empty());
}

#[test]
fn test_landscape_pages_are_skipped() {
    let long = "Body text that is long enough to survive the pruning of short sections.";
    let first = page_with(
        0,
        column(&[
            ("1. Introduction", "Times-Bold", RIGHT),
            (long, "Times-Roman", 250.0),
        ]),
    );
    let mut landscape = page_with(1, column(&[("Table 4 rotated", "Times-Roman", 250.0)]));
    landscape.width = 842.0;
    landscape.height = 595.0;

    let policy = BoldHeadings::new(50);
    let sections = extract_content(&[first, landscape], &Outline::default(), &policy);
    assert_eq!(sections[0].paragraphs().len(), 1);
    assert!(!sections[0].text().contains("rotated"));
}

#[test]
fn test_whitespace_lines_are_skipped() {
    let page = page_with(
        0,
        column(&[
            ("1. Introduction", "Times-Bold", RIGHT),
            ("A line that runs all the way to the", "Times-Roman", RIGHT),
            ("   ", "Times-Roman", RIGHT),
            ("margin continues here.", "Times-Roman", 200.0),
        ]),
    );
    let sections = extract_content(&[page], &Outline::default(), &BoldHeadings::new(10));
    assert_eq!(
        sections[0].text(),
        "A line that runs all the way to the margin continues here."
    );
}

// ============================================================================
// Publisher policies end to end
// ============================================================================

fn lak_line(bbox: (f64, f64, f64, f64), text: &str) -> TextLine {
    TextLine::from_text(bbox, text, "LinLibertineT", 9.0)
}

#[test]
fn test_table_between_rules_is_excluded_in_both_columns() {
    let policy = build_policy(Publisher::LakSigcse, &PolicyOptions::default()).unwrap();
    let filler = "Learning analytics dashboards are widely deployed in courses";

    let mut first = Page::new(0, 612.0, 792.0);
    first.add_line(TextLine::from_text(
        (60.0, 600.0, 200.0, 611.0),
        "1. INTRODUCTION",
        "LinLibertineTB",
        11.0,
    ));
    first.add_line(lak_line((60.0, 580.0, 290.0, 589.0), filler));

    let mut second = Page::new(1, 612.0, 792.0);
    second.add_segment(Segment::line((50.0, 100.0), (400.0, 100.0)));
    second.add_segment(Segment::line((50.0, 200.0), (400.0, 200.0)));
    for (x0, x1) in [(60.0, 290.0), (310.0, 540.0)] {
        second.add_line(lak_line((x0, 400.0, x1, 409.0), "above the table in this column."));
        second.add_line(lak_line((x0, 150.0, x1, 159.0), "table cell value"));
        second.add_line(lak_line((x0, 120.0, x1, 129.0), "table cell value"));
        second.add_line(lak_line((x0, 80.0, x1, 89.0), "below the table in this column."));
    }

    let sections = extract_content(&[first, second], &Outline::default(), policy.as_ref());
    assert_eq!(sections.len(), 1);
    let text = sections[0].text();
    assert!(!text.contains("table cell"), "{text}");
    assert_eq!(text.matches("above the table").count(), 2);
    assert_eq!(text.matches("below the table").count(), 2);
}

#[test]
fn test_table_spanning_two_elsevier_columns_is_excluded_in_both() {
    let options = PolicyOptions {
        columns: Some(2),
        ..PolicyOptions::default()
    };
    let policy = build_policy(Publisher::Elsevier, &options).unwrap();
    let body = |bbox, text: &str| TextLine::from_text(bbox, text, "Gulliver", 9.0);

    let mut first = Page::new(0, 595.0, 842.0);
    first.add_line(TextLine::from_text(
        (40.0, 400.0, 200.0, 410.0),
        "1. Introduction",
        "Gulliver-Bold",
        10.0,
    ));
    first.add_line(body(
        (40.0, 380.0, 290.0, 389.0),
        "Text above the table that keeps the section alive.",
    ));

    let mut second = Page::new(1, 595.0, 842.0);
    second.add_segment(Segment::line((50.0, 100.0), (400.0, 100.0)));
    second.add_segment(Segment::line((50.0, 200.0), (400.0, 200.0)));
    for (x0, x1) in [(40.0, 290.0), (310.0, 500.0)] {
        second.add_line(body((x0, 400.0, x1, 409.0), "above the table in this column."));
        second.add_line(body((x0, 150.0, x1, 159.0), "table cell value"));
    }

    let sections = extract_content(&[first, second], &Outline::default(), policy.as_ref());
    assert_eq!(sections.len(), 1);
    let text = sections[0].text();
    assert!(!text.contains("table cell"), "{text}");
    assert_eq!(text.matches("above the table").count(), 2);
}

#[test]
fn test_paragraph_continues_from_column_bottom() {
    let policy = build_policy(Publisher::Frontiers, &PolicyOptions::default()).unwrap();
    let outline = Outline::default();

    let mut first = Page::new(0, 595.0, 842.0);
    let line = TextLine::from_text;
    first.add_line(line((170.0, 650.0, 300.0, 662.0), "INTRODUCTION", "Museo-Bd", 12.0));
    first.add_line(line((170.0, 630.0, 540.0, 639.0), "Students self-regulate.", "Museo", 9.0));

    let mut second = Page::new(1, 595.0, 842.0);
    for (i, y0) in [140.0, 128.0, 116.0, 104.0, 92.0].into_iter().enumerate() {
        let text = if i == 4 {
            "of the learning process and the"
        } else {
            "Metacognitive monitoring is part"
        };
        second.add_line(TextLine::from_text((50.0, y0, 290.0, y0 + 9.0), text, "Museo", 9.0));
    }
    second.add_line(line((305.0, 700.0, 545.0, 709.0), "outcomes it predicts.", "Museo", 9.0));

    let sections = extract_content(&[first, second], &outline, policy.as_ref());
    let last = sections[0].paragraphs().last().unwrap();
    assert!(last.text().ends_with("of the learning process and the outcomes it predicts."));
}
