//! Itemized-list result types: training objectives and graduation
//! requirements.

use serde::{Deserialize, Serialize};

/// Parsed training objectives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectiveSet {
    /// Number of items recognized
    pub count: usize,

    /// Objective texts with leading enumeration stripped
    pub items: Vec<String>,

    /// Normalized source text the items were parsed from
    pub raw: String,
}

impl ObjectiveSet {
    /// Build a set from items plus the raw text they came from.
    pub fn new(items: Vec<String>, raw: String) -> Self {
        Self {
            count: items.len(),
            items,
            raw,
        }
    }
}

/// A numbered sub-item such as `1.1` under a graduation requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSubItem {
    /// Literal matched number, e.g. `"1.1"` (never renumbered)
    pub no: String,

    /// Sub-item body text
    pub body: String,
}

/// One main graduation requirement (nominally 1..=12).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementItem {
    /// Main item number
    pub no: u32,

    /// Title before the full-width colon, empty when none
    pub title: String,

    /// Body text after the title
    pub body: String,

    /// Numbered sub-items in document order
    pub subitems: Vec<RequirementSubItem>,
}

/// Parsed graduation requirements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequirementSet {
    /// Number of main items recognized
    pub count: usize,

    /// Main items sorted ascending by `no`
    pub items: Vec<RequirementItem>,

    /// The requirements window of the document text
    pub raw: String,
}

impl RequirementSet {
    /// Build a set from already-sorted items plus their source window.
    pub fn new(items: Vec<RequirementItem>, raw: String) -> Self {
        Self {
            count: items.len(),
            items,
            raw,
        }
    }
}
