//! Page sources: where positioned pages come from.

use serde::Deserialize;

use crate::document::{Bookmark, Outline};
use crate::error::Result;
use crate::layout::Page;

/// Turns raw document bytes into positioned pages and the outline hint.
pub trait PageSource: Send + Sync {
    fn pages(&self, bytes: &[u8]) -> Result<Vec<Page>>;

    fn outline(&self, bytes: &[u8]) -> Result<Outline>;

    /// Pages and outline together. Sources that decode both from one pass
    /// should override this.
    fn load(&self, bytes: &[u8]) -> Result<(Vec<Page>, Outline)> {
        Ok((self.pages(bytes)?, self.outline(bytes)?))
    }
}

/// Page dump as written by an external PDF layout tool.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentDump {
    pub pages: Vec<Page>,
    #[serde(default)]
    pub outline: Vec<Bookmark>,
}

impl DocumentDump {
    /// Parses and validates a JSON dump.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let dump: Self = serde_json::from_slice(bytes)?;
        for page in &dump.pages {
            page.validate()?;
        }
        Ok(dump)
    }
}

/// Reads `{ "pages": [...], "outline": [...] }` JSON dumps.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPageSource;

impl PageSource for JsonPageSource {
    fn pages(&self, bytes: &[u8]) -> Result<Vec<Page>> {
        Ok(DocumentDump::from_slice(bytes)?.pages)
    }

    fn outline(&self, bytes: &[u8]) -> Result<Outline> {
        let dump = DocumentDump::from_slice(bytes)?;
        Ok(Outline::from_bookmarks(&dump.outline))
    }

    fn load(&self, bytes: &[u8]) -> Result<(Vec<Page>, Outline)> {
        let dump = DocumentDump::from_slice(bytes)?;
        let outline = Outline::from_bookmarks(&dump.outline);
        Ok((dump.pages, outline))
    }
}
