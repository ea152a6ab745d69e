//! Cleaned table types.

use serde::{Deserialize, Serialize};

/// A normalized, rectangular table.
///
/// Invariants upheld by [`grid_to_table`](crate::table::grid_to_table):
/// every row has exactly `columns.len()` cells, no row or column is fully
/// blank, column names are unique, and emptiness is always the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanTable {
    /// Resolved or synthesized column names (unique)
    pub columns: Vec<String>,

    /// Data rows, each of length `columns.len()`
    pub rows: Vec<Vec<String>>,
}

impl CleanTable {
    /// Create a table from columns and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// One exported table with its inferred metadata.
///
/// A page may host zero, one, or many packs, and one appendix may span
/// several pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablePack {
    /// Page the table was found on (1-indexed)
    pub page: u32,

    /// Display title, resolved from the appendix title map or page text
    pub title: String,

    /// Appendix key such as `附表1`, empty when the page maps to none
    pub appendix: String,

    /// Page-level direction label, empty when untagged
    pub direction: String,

    /// Name of the direction column under the rules this pack was built
    /// with, so exports recognize it even when renamed
    #[serde(default = "default_direction_column")]
    pub direction_column: String,

    /// Column names (direction column included once rows are tagged)
    pub columns: Vec<String>,

    /// Data rows
    pub rows: Vec<Vec<String>>,
}

fn default_direction_column() -> String {
    crate::parse::DIRECTION_COLUMN.to_string()
}

impl TablePack {
    /// Borrow the pack's table part as a [`CleanTable`].
    pub fn table(&self) -> CleanTable {
        CleanTable::new(self.columns.clone(), self.rows.clone())
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_table_accessors() {
        let table = CleanTable::new(
            vec!["课程名称".into(), "学分".into()],
            vec![vec!["数学".into(), "4".into()]],
        );
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column_index("学分"), Some(1));
        assert_eq!(table.column_index("缺失"), None);
        assert!(!table.is_empty());
    }
}
