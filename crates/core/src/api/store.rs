//! Section stores: where flattened records go.

use std::io::Write;

use indexmap::IndexMap;
use serde::Serialize;

use crate::document::SectionRecord;
use crate::error::{ExtractError, Result};

/// Persists the flattened sections of one document.
pub trait SectionStore {
    fn store(&mut self, document_id: &str, sections: &[SectionRecord]) -> Result<()>;
}

/// In-memory store keeping documents in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: IndexMap<String, Vec<SectionRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, document_id: &str) -> Option<&[SectionRecord]> {
        self.documents.get(document_id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SectionRecord])> {
        self.documents
            .iter()
            .map(|(id, records)| (id.as_str(), records.as_slice()))
    }
}

impl SectionStore for MemoryStore {
    /// Each document is stored once.
    fn store(&mut self, document_id: &str, sections: &[SectionRecord]) -> Result<()> {
        if self.documents.contains_key(document_id) {
            return Err(ExtractError::Store(format!(
                "document {document_id} already stored"
            )));
        }
        self.documents
            .insert(document_id.to_string(), sections.to_vec());
        Ok(())
    }
}

#[derive(Serialize)]
struct StoredDocument<'a> {
    document: &'a str,
    sections: &'a [SectionRecord],
}

/// Writes one JSON object per document and line.
#[derive(Debug)]
pub struct JsonLinesStore<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesStore<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SectionStore for JsonLinesStore<W> {
    fn store(&mut self, document_id: &str, sections: &[SectionRecord]) -> Result<()> {
        let doc = StoredDocument {
            document: document_id,
            sections,
        };
        serde_json::to_writer(&mut self.writer, &doc)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
