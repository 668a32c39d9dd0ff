//! Section tree built incrementally during extraction.
//!
//! A section owns its subsections and paragraphs exclusively. While the
//! document is scanned only the last branch of the tree is "open": new
//! headings and paragraphs always go to the deepest open section.

use std::sync::LazyLock;

use regex::Regex;

use super::paragraph::Paragraph;

/// Leading numeric index of a heading, e.g. `2`, `2.`, `3.1.4 `.
pub(crate) static HEADING_INDEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+(\.)?)+\s*").expect("valid heading index regex"));

/// A heading with its body paragraphs and nested subsections.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    heading: String,
    heading_index: Option<String>,
    level: usize,
    subsections: Vec<Section>,
    paragraphs: Vec<Paragraph>,
}

impl Section {
    pub fn new(heading: &str, level: usize) -> Self {
        let heading = heading.trim().to_string();
        let heading_index = HEADING_INDEX
            .find(&heading)
            .map(|m| m.as_str().trim().to_string());
        Self {
            heading,
            heading_index,
            level,
            subsections: Vec::new(),
            paragraphs: Vec::new(),
        }
    }

    /// Full heading text, including any numeric index.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Heading text with the leading numeric index stripped.
    pub fn title(&self) -> &str {
        match HEADING_INDEX.find(&self.heading) {
            Some(m) => &self.heading[m.end()..],
            None => &self.heading,
        }
    }

    /// Numeric index taken from the first heading line, e.g. `"2.1"`.
    pub fn heading_index(&self) -> Option<&str> {
        self.heading_index.as_deref()
    }

    pub const fn level(&self) -> usize {
        self.level
    }

    pub fn subsections(&self) -> &[Section] {
        &self.subsections
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// This section's own paragraphs joined by a single newline.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Routes a heading line into the tree.
    ///
    /// Returns false when the heading sits at this section's level but body
    /// text has already begun (or is shallower than this section): the caller
    /// must open a new sibling. A same-level heading before any body text is a
    /// wrapped continuation and is appended to the open heading. Deeper
    /// headings descend into the last subsection, or open a new one.
    pub fn add_heading(&mut self, text: &str, level: usize) -> bool {
        if level < self.level {
            return false;
        }
        if level == self.level {
            if self.last_paragraph().is_some() {
                return false;
            }
            let open = self.deepest_open_mut();
            open.heading.push(' ');
            open.heading.push_str(text.trim());
            return true;
        }
        let merged = match self.subsections.last_mut() {
            Some(last) => last.add_heading(text, level),
            None => false,
        };
        if !merged {
            self.subsections.push(Section::new(text, level));
        }
        true
    }

    /// Appends a paragraph to the deepest open section.
    pub fn append_paragraph(&mut self, paragraph: Paragraph) {
        match self.subsections.last_mut() {
            Some(last) => last.append_paragraph(paragraph),
            None => self.paragraphs.push(paragraph),
        }
    }

    /// Last paragraph of the deepest open section.
    pub fn last_paragraph(&self) -> Option<&Paragraph> {
        match self.subsections.last() {
            Some(last) => last.last_paragraph(),
            None => self.paragraphs.last(),
        }
    }

    pub fn last_paragraph_mut(&mut self) -> Option<&mut Paragraph> {
        match self.subsections.last_mut() {
            Some(last) => last.last_paragraph_mut(),
            None => self.paragraphs.last_mut(),
        }
    }

    fn deepest_open_mut(&mut self) -> &mut Section {
        if self.subsections.is_empty() {
            return self;
        }
        let last = self.subsections.len() - 1;
        self.subsections[last].deepest_open_mut()
    }

    /// True when the section has neither subsections nor paragraphs.
    pub fn is_empty(&self) -> bool {
        self.subsections.is_empty() && self.paragraphs.is_empty()
    }

    /// Prunes short content bottom-up.
    ///
    /// Paragraphs are dropped together when their combined length is below
    /// `min_chars`; subsections left empty afterwards are removed.
    pub fn remove_empty(&mut self, min_chars: usize) {
        let total: usize = self.paragraphs.iter().map(Paragraph::char_len).sum();
        if total < min_chars {
            self.paragraphs.clear();
        }
        for section in &mut self.subsections {
            section.remove_empty(min_chars);
        }
        self.subsections.retain(|s| !s.is_empty());
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.heading)
    }
}
