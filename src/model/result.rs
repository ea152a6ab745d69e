//! The root extraction aggregate.

use super::{AppendixTitleMap, ObjectiveSet, PageRecord, RequirementSet, SectionMap, TablePack};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one extraction run produced.
///
/// Built once by the orchestrator and treated as immutable afterward; each
/// run is a pure function of the input bytes plus the OCR flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Number of pages the source delivered
    pub page_count: usize,

    /// Total raw tables across all pages
    pub table_count: usize,

    /// Whether OCR fallback was enabled for this run
    pub ocr_used: bool,

    /// SHA-256 hex digest of the source document bytes
    pub file_sha256: String,

    /// When the extraction ran
    pub extracted_at: DateTime<Utc>,

    /// Per-page text and raw tables, in page order
    pub pages: Vec<PageRecord>,

    /// Chapter key → body mapping
    pub sections: SectionMap,

    /// Appendix key → display title mapping
    pub appendix_titles: AppendixTitleMap,

    /// Training objectives
    pub objectives: ObjectiveSet,

    /// Graduation requirements
    pub requirements: RequirementSet,

    /// Normalized, tagged tables in page order
    pub tables: Vec<TablePack>,
}

impl ExtractResult {
    /// Check if the run extracted nothing (empty or unreadable source).
    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }
}
