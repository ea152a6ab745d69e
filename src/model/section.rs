//! Insertion-ordered section and appendix-title maps.
//!
//! Document order matters for both maps, and the section map must support
//! appending body lines to an already-present key, so these are thin
//! `Vec`-backed wrappers rather than hash maps.

use serde::{Deserialize, Serialize};

/// Sentinel key for text before the first recognized chapter heading.
pub const FRONT_MATTER_KEY: &str = "封面/前言";

/// One chapter: heading key plus accumulated body text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Chapter key, `"<numeral>、<title>"` or [`FRONT_MATTER_KEY`]
    pub key: String,

    /// Body text attributed to this chapter
    pub body: String,
}

/// Ordered mapping from chapter key to chapter body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionMap {
    sections: Vec<Section>,
}

impl SectionMap {
    /// Create an empty section map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Append a body line to `key`, creating the section if absent.
    ///
    /// A recurring key keeps accumulating into its original entry, so a
    /// garbled duplicate heading never splits a chapter.
    pub fn append_line(&mut self, key: &str, line: &str) {
        if let Some(section) = self.sections.iter_mut().find(|s| s.key == key) {
            if !section.body.is_empty() {
                section.body.push('\n');
            }
            section.body.push_str(line);
        } else {
            self.sections.push(Section {
                key: key.to_string(),
                body: line.to_string(),
            });
        }
    }

    /// Register a key with no body yet.
    pub fn ensure_key(&mut self, key: &str) {
        if !self.sections.iter().any(|s| s.key == key) {
            self.sections.push(Section {
                key: key.to_string(),
                body: String::new(),
            });
        }
    }

    /// Look up a section body by exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.body.as_str())
    }

    /// First key whose name contains `needle`, in document order.
    pub fn find_key_containing(&self, needle: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.key.contains(needle))
            .map(|s| s.key.as_str())
    }

    /// Iterate sections in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Trim trailing whitespace from every body.
    pub fn trim_bodies(&mut self) {
        for section in &mut self.sections {
            let trimmed = section.body.trim().to_string();
            section.body = trimmed;
        }
    }
}

/// One resolved appendix title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppendixTitle {
    /// Normalized appendix key, internal whitespace stripped (`附表1`)
    pub key: String,

    /// Resolved display title
    pub title: String,
}

/// Ordered mapping from appendix key to its most authoritative title.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppendixTitleMap {
    titles: Vec<AppendixTitle>,
}

impl AppendixTitleMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of resolved titles.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Set `key` to `title`, overwriting any existing entry.
    pub fn set(&mut self, key: &str, title: &str) {
        if let Some(entry) = self.titles.iter_mut().find(|t| t.key == key) {
            entry.title = title.to_string();
        } else {
            self.titles.push(AppendixTitle {
                key: key.to_string(),
                title: title.to_string(),
            });
        }
    }

    /// Set `key` to `title` only if the key is not already present.
    pub fn set_if_absent(&mut self, key: &str, title: &str) {
        if !self.contains(key) {
            self.set(key, title);
        }
    }

    /// Check whether a key has a title.
    pub fn contains(&self, key: &str) -> bool {
        self.titles.iter().any(|t| t.key == key)
    }

    /// Look up a title by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.titles
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.title.as_str())
    }

    /// Iterate entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = &AppendixTitle> {
        self.titles.iter()
    }
}
