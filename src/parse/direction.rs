//! Specialization-direction classification.
//!
//! A curriculum page commonly mixes rows for more than one specialization
//! track, separated by inline sub-header rows such as `焊接方向`. The page
//! text gives a coarse default; row-level header detection overrides it
//! from the header row downward.

use crate::model::CleanTable;
use crate::text::clean;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default name of the inserted direction column.
pub const DIRECTION_COLUMN: &str = "专业方向";

/// Keyword and label configuration for direction tagging.
///
/// Defaults match the welding / non-destructive-testing document family;
/// inject different rules to retarget the classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionRules {
    /// Keywords whose presence in page text signals the first track
    pub primary_keywords: Vec<String>,

    /// Keywords whose presence in page text signals the second track
    pub secondary_keywords: Vec<String>,

    /// Label for the first track
    pub primary_label: String,

    /// Label for the second track
    pub secondary_label: String,

    /// Label when both tracks are present on one page
    pub combined_label: String,

    /// Name of the direction column inserted into tagged tables
    pub column_name: String,
}

impl Default for DirectionRules {
    fn default() -> Self {
        Self {
            primary_keywords: vec!["焊接".to_string()],
            secondary_keywords: vec!["无损".to_string(), "无损检测".to_string()],
            primary_label: "焊接".to_string(),
            secondary_label: "无损检测".to_string(),
            combined_label: "混合（焊接+无损检测）".to_string(),
            column_name: DIRECTION_COLUMN.to_string(),
        }
    }
}

/// Page-level and row-level direction classifier.
pub struct DirectionTagger {
    rules: DirectionRules,
    primary_header: Regex,
    secondary_header: Regex,
}

impl DirectionTagger {
    /// Create a tagger from rules, compiling the row-header patterns.
    pub fn new(rules: DirectionRules) -> Self {
        let primary_header = Regex::new(&format!(
            "{}.*方向",
            regex::escape(&rules.primary_label)
        ))
        .unwrap();
        let secondary_header = Regex::new(&format!(
            "{}.*方向",
            regex::escape(
                rules
                    .secondary_keywords
                    .first()
                    .unwrap_or(&rules.secondary_label)
            )
        ))
        .unwrap();
        Self {
            rules,
            primary_header,
            secondary_header,
        }
    }

    /// The rules this tagger runs with.
    pub fn rules(&self) -> &DirectionRules {
        &self.rules
    }

    /// Classify a whole page by keyword presence.
    ///
    /// Both families present yields the combined label, one yields its
    /// label, neither yields the empty string (untagged).
    pub fn infer_page_direction(&self, page_text: &str) -> String {
        let has_primary = self
            .rules
            .primary_keywords
            .iter()
            .any(|k| page_text.contains(k.as_str()));
        let has_secondary = self
            .rules
            .secondary_keywords
            .iter()
            .any(|k| page_text.contains(k.as_str()));
        match (has_primary, has_secondary) {
            (true, true) => self.rules.combined_label.clone(),
            (true, false) => self.rules.primary_label.clone(),
            (false, true) => self.rules.secondary_label.clone(),
            (false, false) => String::new(),
        }
    }

    /// Tag every row of a table with a direction, inserting or overwriting
    /// the direction column.
    ///
    /// Rows are walked top to bottom carrying the last matched header
    /// direction; rows before any header inherit `page_direction`. When a
    /// same-named column already exists, only rows whose carried direction
    /// is empty fall back to `page_direction` — a row that matched a header
    /// keeps its value. A table where every computed direction stays empty
    /// is left untouched: no column of blanks gets inserted.
    pub fn tag_rows(&self, table: &mut CleanTable, page_direction: &str) {
        if table.is_empty() {
            return;
        }

        let mut carried = String::new();
        let mut directions: Vec<String> = Vec::with_capacity(table.rows.len());
        for row in &table.rows {
            let row_text = row
                .iter()
                .map(|c| clean(c))
                .collect::<Vec<_>>()
                .join(" ");
            if self.primary_header.is_match(&row_text) {
                carried = self.rules.primary_label.clone();
            } else if self.secondary_header.is_match(&row_text) {
                carried = self.rules.secondary_label.clone();
            }
            directions.push(if carried.is_empty() {
                page_direction.to_string()
            } else {
                carried.clone()
            });
        }

        if directions.iter().all(|d| d.is_empty()) {
            return;
        }

        match table.column_index(&self.rules.column_name) {
            Some(j) => {
                for (row, dir) in table.rows.iter_mut().zip(directions) {
                    if let Some(cell) = row.get_mut(j) {
                        *cell = if dir.is_empty() {
                            page_direction.to_string()
                        } else {
                            dir
                        };
                    }
                }
            }
            None => {
                table.columns.insert(0, self.rules.column_name.clone());
                for (row, dir) in table.rows.iter_mut().zip(directions) {
                    row.insert(0, dir);
                }
            }
        }
    }
}

impl Default for DirectionTagger {
    fn default() -> Self {
        Self::new(DirectionRules::default())
    }
}
