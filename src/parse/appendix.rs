//! Appendix-title resolution.
//!
//! Training plans label their appendix tables in a few notations; the body
//! text carries the authoritative titles. Three patterns are tried per
//! line, most explicit first:
//!
//! 1. `附表1：课程设置表` — label then title, always overwrites.
//! 2. `课程设置表（附表1）` anchored to the whole line — overwrites.
//! 3. `…课程设置表（附表1）…` anywhere in a line — only fills a gap.

use crate::model::AppendixTitleMap;
use crate::text::{clean, normalize_multiline};
use regex::Regex;

/// Scans document text for appendix labels and builds the title lookup.
pub struct AppendixTitleResolver {
    labeled: Regex,
    suffixed_full: Regex,
    suffixed_inline: Regex,
    key_ws: Regex,
}

impl AppendixTitleResolver {
    /// Create a resolver with the compiled label patterns.
    pub fn new() -> Self {
        Self {
            labeled: Regex::new(r"(附表\s*\d+)\s*[:：]\s*(.+)$").unwrap(),
            suffixed_full: Regex::new(r"^(?P<title>.+?)\s*[（(]\s*(?P<key>附表\s*\d+)\s*[)）]\s*$")
                .unwrap(),
            suffixed_inline: Regex::new(r"(?P<title>.+?)\s*[（(]\s*(?P<key>附表\s*\d+)\s*[)）]")
                .unwrap(),
            key_ws: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Resolve all appendix titles found in the document.
    pub fn resolve(&self, full_text: &str) -> AppendixTitleMap {
        let text = normalize_multiline(full_text);
        let mut titles = AppendixTitleMap::new();

        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(caps) = self.labeled.captures(line) {
                let key = self.normalize_key(caps.get(1).map_or("", |m| m.as_str()));
                let val = clean(caps.get(2).map_or("", |m| m.as_str()));
                if !val.is_empty() {
                    titles.set(&key, &val);
                }
                continue;
            }

            if let Some(caps) = self.suffixed_full.captures(line) {
                let key = self.normalize_key(&caps["key"]);
                let val = clean(&caps["title"]);
                if !val.is_empty() {
                    titles.set(&key, &val);
                }
                continue;
            }

            if let Some(caps) = self.suffixed_inline.captures(line) {
                let key = self.normalize_key(&caps["key"]);
                let val = clean(&caps["title"]);
                if !val.is_empty() {
                    titles.set_if_absent(&key, &val);
                }
            }
        }

        titles
    }

    fn normalize_key(&self, key: &str) -> String {
        self.key_ws.replace_all(key, "").to_string()
    }
}

impl Default for AppendixTitleResolver {
    fn default() -> Self {
        Self::new()
    }
}
