//! Page-level input types.

use serde::{Deserialize, Serialize};

/// One detected table on a page, before any cleaning.
///
/// Rows may be jagged and cells may be absent; normalization turns this
/// into a rectangular [`CleanTable`](super::CleanTable).
pub type RawGrid = Vec<Vec<Option<String>>>;

/// A single page as delivered by the page source.
///
/// `page` is 1-indexed and increases by 1 across the sequence. The text has
/// already been normalized by [`normalize_multiline`](crate::text::normalize_multiline);
/// `raw_tables` holds zero or more uncleaned cell grids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    /// Page number (1-indexed)
    pub page: u32,

    /// Normalized page text (possibly empty)
    pub text: String,

    /// Raw table grids detected on this page
    pub raw_tables: Vec<RawGrid>,
}

impl PageRecord {
    /// Create a page record with no tables.
    pub fn new(page: u32, text: impl Into<String>) -> Self {
        Self {
            page,
            text: text.into(),
            raw_tables: Vec::new(),
        }
    }

    /// Create a page record with tables.
    pub fn with_tables(page: u32, text: impl Into<String>, raw_tables: Vec<RawGrid>) -> Self {
        Self {
            page,
            text: text.into(),
            raw_tables,
        }
    }

    /// Number of raw tables detected on this page.
    pub fn table_count(&self) -> usize {
        self.raw_tables.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_record_new() {
        let page = PageRecord::new(1, "一、培养目标");
        assert_eq!(page.page, 1);
        assert_eq!(page.table_count(), 0);
    }

    #[test]
    fn test_page_record_with_tables() {
        let grid: RawGrid = vec![vec![Some("a".to_string()), None]];
        let page = PageRecord::with_tables(2, "", vec![grid]);
        assert_eq!(page.table_count(), 1);
    }
}
