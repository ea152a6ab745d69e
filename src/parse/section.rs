//! Chapter segmentation over Chinese-numeral headings.

use crate::model::{SectionMap, FRONT_MATTER_KEY};
use crate::text::{clean, normalize_multiline};
use regex::Regex;

/// Splits a full document into chapters keyed by their heading line.
///
/// A heading is a line of Chinese numerals (一…十, combinable) followed by
/// `、`, `.` or `．` and a title with nothing after it. Text before the
/// first heading lands under [`FRONT_MATTER_KEY`].
pub struct SectionSplitter {
    heading: Regex,
}

impl SectionSplitter {
    /// Create a splitter with the compiled heading pattern.
    pub fn new() -> Self {
        Self {
            heading: Regex::new(r"^\s*([一二三四五六七八九十]+)\s*[、.．]\s*(\S.*?)\s*$").unwrap(),
        }
    }

    /// Split normalized document text into an ordered section map.
    ///
    /// A duplicate heading keeps appending to its existing entry, so a
    /// chapter body may be built from several disjoint spans.
    pub fn split(&self, full_text: &str) -> SectionMap {
        let text = normalize_multiline(full_text);
        let mut sections = SectionMap::new();
        let mut current = FRONT_MATTER_KEY.to_string();

        for line in text.lines() {
            if let Some(caps) = self.heading.captures(line) {
                let numeral = caps.get(1).map_or("", |m| m.as_str());
                let title = clean(caps.get(2).map_or("", |m| m.as_str()));
                current = format!("{}、{}", numeral, title);
                sections.ensure_key(&current);
            } else {
                sections.append_line(&current, line);
            }
        }

        sections.trim_bodies();
        sections
    }
}

impl Default for SectionSplitter {
    fn default() -> Self {
        Self::new()
    }
}
