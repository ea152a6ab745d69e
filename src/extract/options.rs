//! Extraction options and configuration.

use crate::parse::DirectionRules;
use serde::{Deserialize, Serialize};

/// Mapping from page number to the appendix hosted on that page.
///
/// This is a layout heuristic tied to one known document family, kept as
/// injectable configuration so the pipeline retargets to other layouts
/// without code change. Unmapped pages get no appendix, never a guess.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppendixPageMap {
    entries: Vec<(u32, String)>,
}

impl AppendixPageMap {
    /// Create an empty map (no page hosts an appendix).
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a map from explicit (page, appendix key) pairs.
    pub fn from_pairs<K: Into<String>>(pairs: impl IntoIterator<Item = (u32, K)>) -> Self {
        Self {
            entries: pairs.into_iter().map(|(p, k)| (p, k.into())).collect(),
        }
    }

    /// Appendix key for a page, if any.
    pub fn get(&self, page: u32) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| *p == page)
            .map(|(_, k)| k.as_str())
    }
}

impl Default for AppendixPageMap {
    /// The 18-page training-plan layout this pipeline was tuned on:
    /// pages 10-11 host 附表1, 12 附表2, 13-14 附表3, 15 附表4, 16 附表5.
    fn default() -> Self {
        Self::from_pairs([
            (10, "附表1"),
            (11, "附表1"),
            (12, "附表2"),
            (13, "附表3"),
            (14, "附表3"),
            (15, "附表4"),
            (16, "附表5"),
        ])
    }
}

/// Options for one extraction run.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Whether the OCR fallback was enabled for this run (recorded in the
    /// result; the fallback itself runs inside the page source)
    pub enable_ocr: bool,

    /// Process pages sequentially instead of in parallel
    pub sequential: bool,

    /// Page → appendix layout mapping
    pub appendix_pages: AppendixPageMap,

    /// Direction keyword and label configuration
    pub direction_rules: DirectionRules,
}

impl ExtractOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that OCR fallback is enabled.
    pub fn with_ocr(mut self, enable: bool) -> Self {
        self.enable_ocr = enable;
        self
    }

    /// Disable parallel page processing.
    pub fn sequential(mut self) -> Self {
        self.sequential = true;
        self
    }

    /// Set the page → appendix mapping.
    pub fn with_appendix_pages(mut self, map: AppendixPageMap) -> Self {
        self.appendix_pages = map;
        self
    }

    /// Set the direction rules.
    pub fn with_direction_rules(mut self, rules: DirectionRules) -> Self {
        self.direction_rules = rules;
        self
    }
}
