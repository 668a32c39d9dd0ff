//! Document outline (bookmark tree) used as a secondary heading hint.
//!
//! Outlines are author-supplied and frequently incomplete, so they never
//! decide heading-ness on their own.

use serde::Deserialize;

/// Raw outline node as delivered by the PDF collaborator.
///
/// A `Children` list attaches to the `Entry` immediately before it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Bookmark {
    Entry { title: String },
    Children(Vec<Bookmark>),
}

impl Bookmark {
    pub fn entry(title: &str) -> Self {
        Bookmark::Entry {
            title: title.to_string(),
        }
    }
}

/// An enumerated outline entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub title: String,
    /// 1-based index of the parent among its own siblings; None at top level.
    pub parent_index: Option<usize>,
    /// 1-based index among siblings.
    pub index: usize,
    pub subheadings: Vec<Heading>,
}

/// Enumerated outline tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    headings: Vec<Heading>,
}

impl Outline {
    pub fn from_bookmarks(bookmarks: &[Bookmark]) -> Self {
        Self {
            headings: enumerate(bookmarks, None),
        }
    }

    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    /// Finds the top-level entry whose title, or one of whose direct
    /// subheadings' titles, contains the trimmed line text.
    ///
    /// A subheading match returns its enclosing top-level entry.
    pub fn find(&self, text: &str) -> Option<&Heading> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.headings.iter().find(|heading| {
            heading.title.contains(text)
                || heading.subheadings.iter().any(|sub| sub.title.contains(text))
        })
    }
}

fn enumerate(bookmarks: &[Bookmark], parent_index: Option<usize>) -> Vec<Heading> {
    let mut headings: Vec<Heading> = Vec::new();
    for bookmark in bookmarks {
        match bookmark {
            Bookmark::Entry { title } => {
                let index = headings.len() + 1;
                headings.push(Heading {
                    title: title.clone(),
                    parent_index,
                    index,
                    subheadings: Vec::new(),
                });
            }
            Bookmark::Children(children) => {
                if let Some(last) = headings.last_mut() {
                    last.subheadings = enumerate(children, Some(last.index));
                }
            }
        }
    }
    headings
}
