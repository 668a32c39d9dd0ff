//! Flattening of the section tree into storage records.

use serde::{Deserialize, Serialize};

use super::section::Section;

/// One section in storage form.
///
/// `index` is the record's position in the flattened list and `parent` the
/// index of its enclosing section, so the tree can be rebuilt without
/// back-references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub heading: String,
    pub index: usize,
    pub parent: Option<usize>,
    pub text: String,
}

/// Flattens top-level sections in pre-order.
pub fn flatten(sections: &[Section]) -> Vec<SectionRecord> {
    let mut records = Vec::new();
    for section in sections {
        push_section(section, None, &mut records);
    }
    records
}

fn push_section(section: &Section, parent: Option<usize>, records: &mut Vec<SectionRecord>) {
    let index = records.len();
    records.push(SectionRecord {
        heading: section.title().to_string(),
        index,
        parent,
        text: section.text(),
    });
    for subsection in section.subsections() {
        push_section(subsection, Some(index), records);
    }
}
