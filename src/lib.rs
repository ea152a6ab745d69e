//! # unplan
//!
//! Structured extraction of academic training-plan documents.
//!
//! The crate consumes a sequence of per-page (text, raw table grid) pairs
//! produced by an external page-rendering collaborator and turns it into
//! one structured record: chaptered sections, the graduation-requirements
//! outline, the training-objectives list, and normalized tables with
//! inferred titles and per-row specialization-direction tags.
//!
//! ## Quick Start
//!
//! ```
//! use unplan::{extract_pages, PageRecord};
//!
//! let pages = vec![
//!     PageRecord::new(1, "一、培养目标\n1. 了解专业基础"),
//! ];
//! let result = extract_pages(pages, b"document bytes");
//! assert_eq!(result.objectives.items, vec!["了解专业基础"]);
//! ```
//!
//! ## Pipeline
//!
//! - **Cleaning**: whitespace/newline normalization ([`text`])
//! - **Tables**: jagged grid → rectangular, header-resolved, fill-down
//!   post-processed table ([`table`])
//! - **Structure**: chapter segmentation, appendix titles, objectives,
//!   the 12-item requirements outline, direction tagging ([`parse`])
//! - **Orchestration**: per-page composition with page-order-preserving
//!   parallelism ([`extract`])
//! - **Export**: JSON snapshot, per-table CSV with BOM, ZIP ([`export`])

pub mod error;
pub mod export;
pub mod extract;
pub mod model;
pub mod parse;
pub mod source;
pub mod table;
pub mod text;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::JsonFormat;
pub use extract::{AppendixPageMap, ExtractOptions, Extractor};
pub use model::{
    AppendixTitleMap, CleanTable, ExtractResult, ObjectiveSet, PageRecord, RawGrid,
    RequirementItem, RequirementSet, RequirementSubItem, SectionMap, TablePack,
};
pub use parse::{DirectionRules, DirectionTagger};
pub use source::{OcrEngine, PageSource, StaticPageSource};

/// Extract a structured result from an already-rendered page sequence.
///
/// `document_bytes` are hashed into the result's content digest.
pub fn extract_pages(pages: Vec<PageRecord>, document_bytes: &[u8]) -> ExtractResult {
    Extractor::new().run_pages(pages, document_bytes)
}

/// Extract with custom options.
pub fn extract_pages_with_options(
    pages: Vec<PageRecord>,
    document_bytes: &[u8],
    options: ExtractOptions,
) -> ExtractResult {
    Extractor::with_options(options).run_pages(pages, document_bytes)
}

/// Extract from a [`PageSource`] collaborator.
///
/// A failing source degrades to an empty result; zero pages means
/// "nothing extracted", never a crash.
pub fn extract_from_source(source: &mut dyn PageSource, document_bytes: &[u8]) -> ExtractResult {
    Extractor::new().run(source, document_bytes)
}

/// Builder for extraction and export in one chain.
///
/// ```
/// use unplan::{PageRecord, Unplan};
///
/// let result = Unplan::new()
///     .sequential()
///     .run_pages(vec![PageRecord::new(1, "正文")], b"bytes");
/// let json = result.to_json().unwrap();
/// assert!(json.contains("file_sha256"));
/// ```
pub struct Unplan {
    options: ExtractOptions,
}

impl Unplan {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
        }
    }

    /// Record that OCR fallback is enabled for this run.
    pub fn with_ocr(mut self, enable: bool) -> Self {
        self.options = self.options.with_ocr(enable);
        self
    }

    /// Disable parallel page processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Set the page → appendix layout mapping.
    pub fn with_appendix_pages(mut self, map: AppendixPageMap) -> Self {
        self.options = self.options.with_appendix_pages(map);
        self
    }

    /// Set the direction keyword rules.
    pub fn with_direction_rules(mut self, rules: DirectionRules) -> Self {
        self.options = self.options.with_direction_rules(rules);
        self
    }

    /// Run over an already-rendered page sequence.
    pub fn run_pages(self, pages: Vec<PageRecord>, document_bytes: &[u8]) -> UnplanResult {
        UnplanResult {
            result: Extractor::with_options(self.options).run_pages(pages, document_bytes),
        }
    }

    /// Run over a page source.
    pub fn run(self, source: &mut dyn PageSource, document_bytes: &[u8]) -> UnplanResult {
        UnplanResult {
            result: Extractor::with_options(self.options).run(source, document_bytes),
        }
    }
}

impl Default for Unplan {
    fn default() -> Self {
        Self::new()
    }
}

/// Result wrapper with export shortcuts.
pub struct UnplanResult {
    /// The extraction result
    pub result: ExtractResult,
}

impl UnplanResult {
    /// Serialize the full result as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        export::to_json(&self.result, JsonFormat::Pretty)
    }

    /// Serialize the full result with an explicit format.
    pub fn to_json_with(&self, format: JsonFormat) -> Result<String> {
        export::to_json(&self.result, format)
    }

    /// Package all tables into a ZIP archive.
    pub fn tables_archive(&self) -> Result<Vec<u8>> {
        export::tables_archive(&self.result.tables)
    }

    /// Borrow the result.
    pub fn result(&self) -> &ExtractResult {
        &self.result
    }
}
