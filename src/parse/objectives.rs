//! Training-objectives list extraction.

use crate::model::ObjectiveSet;
use crate::text::{clean, normalize_multiline};
use regex::Regex;

/// Lines kept verbatim when no enumeration style is recognized.
const FALLBACK_LINE_LIMIT: usize = 30;

/// Extracts numbered objectives from a chapter body.
///
/// Accepts the enumeration styles `1.` / `1、` / `1．` / `(1)` / `（1）`.
pub struct ObjectivesParser {
    item: Regex,
}

impl ObjectivesParser {
    /// Create a parser with the compiled enumeration pattern.
    pub fn new() -> Self {
        Self {
            // Separator form first so "1. Foo" strips the dot rather than
            // matching the bare-digits branch and keeping it.
            item: Regex::new(r"^(?:\d+\s*[.、．]|[（(]?\s*\d+\s*[）)]?)\s*(.+)$").unwrap(),
        }
    }

    /// Parse a section body into an [`ObjectiveSet`].
    ///
    /// When no line matches the enumeration pattern, the first 30
    /// non-blank lines are kept verbatim so content is never silently
    /// dropped.
    pub fn parse(&self, section_text: &str) -> ObjectiveSet {
        let raw = normalize_multiline(section_text);
        let lines: Vec<&str> = raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let mut items: Vec<String> = Vec::new();
        for line in &lines {
            if let Some(caps) = self.item.captures(line) {
                let body = clean(caps.get(1).map_or("", |m| m.as_str()));
                if !body.is_empty() {
                    items.push(body);
                }
            }
        }

        if items.is_empty() {
            log::warn!("no numbered objectives recognized, keeping first lines verbatim");
            items = lines
                .iter()
                .take(FALLBACK_LINE_LIMIT)
                .map(|l| l.to_string())
                .collect();
        }

        ObjectiveSet::new(items, raw)
    }
}

impl Default for ObjectivesParser {
    fn default() -> Self {
        Self::new()
    }
}
