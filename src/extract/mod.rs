//! Extraction orchestration.
//!
//! Composes the cleaning, splitting, and tagging stages over a page
//! sequence and assembles the final [`ExtractResult`]. Pages are
//! independent, so table structuring may run in parallel; results are
//! merged back in page order.

mod options;

pub use options::{AppendixPageMap, ExtractOptions};

use crate::model::{ExtractResult, PageRecord, TablePack};
use crate::parse::{
    AppendixTitleResolver, DirectionTagger, ObjectivesParser, RequirementsParser, SectionSplitter,
};
use crate::source::PageSource;
use crate::table::clean_grid;
use crate::text::clean;
use chrono::Utc;
use rayon::prelude::*;
use regex::Regex;
use sha2::{Digest, Sha256};

/// Chapter-key substring that locates the objectives chapter.
const OBJECTIVES_HINT: &str = "培养目标";

/// Orchestrates one full extraction run.
pub struct Extractor {
    options: ExtractOptions,
    splitter: SectionSplitter,
    appendix_resolver: AppendixTitleResolver,
    objectives: ObjectivesParser,
    requirements: RequirementsParser,
    tagger: DirectionTagger,
    inline_label: Regex,
}

impl Extractor {
    /// Create an extractor with default options.
    pub fn new() -> Self {
        Self::with_options(ExtractOptions::default())
    }

    /// Create an extractor with the given options.
    pub fn with_options(options: ExtractOptions) -> Self {
        let tagger = DirectionTagger::new(options.direction_rules.clone());
        Self {
            options,
            splitter: SectionSplitter::new(),
            appendix_resolver: AppendixTitleResolver::new(),
            objectives: ObjectivesParser::new(),
            requirements: RequirementsParser::new(),
            tagger,
            inline_label: Regex::new(r"(附表\s*\d+)\s*[:：]\s*([^\n\r]{2,120})").unwrap(),
        }
    }

    /// Run the pipeline over a page source.
    ///
    /// `document_bytes` are only hashed for the result's content digest.
    /// A failing source degrades to zero pages rather than an error;
    /// callers treat an empty result as "nothing extracted".
    pub fn run(&self, source: &mut dyn PageSource, document_bytes: &[u8]) -> ExtractResult {
        let pages = match source.pages() {
            Ok(pages) => pages,
            Err(e) => {
                log::warn!("page source failed, extracting nothing: {}", e);
                Vec::new()
            }
        };
        self.run_pages(pages, document_bytes)
    }

    /// Run the pipeline over an already-extracted page sequence.
    pub fn run_pages(&self, pages: Vec<PageRecord>, document_bytes: &[u8]) -> ExtractResult {
        let full_text = pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let sections = self.splitter.split(&full_text);
        let appendix_titles = self.appendix_resolver.resolve(&full_text);

        let objectives_text = sections
            .find_key_containing(OBJECTIVES_HINT)
            .and_then(|key| sections.get(key))
            .filter(|body| !body.is_empty())
            .unwrap_or(&full_text);
        let objectives = self.objectives.parse(objectives_text);
        let requirements = self.requirements.parse(&full_text);

        // rayon's collect preserves input order, so the parallel pass
        // yields the same page-ordered table sequence as the serial one.
        let tables: Vec<TablePack> = if self.options.sequential {
            pages
                .iter()
                .flat_map(|page| self.structure_page(page, &appendix_titles))
                .collect()
        } else {
            pages
                .par_iter()
                .flat_map_iter(|page| self.structure_page(page, &appendix_titles))
                .collect()
        };

        ExtractResult {
            page_count: pages.len(),
            table_count: tables.len(),
            ocr_used: self.options.enable_ocr,
            file_sha256: sha256_hex(document_bytes),
            extracted_at: Utc::now(),
            pages,
            sections,
            appendix_titles,
            objectives,
            requirements,
            tables,
        }
    }

    /// Clean, tag, and title every table on one page.
    fn structure_page(
        &self,
        page: &PageRecord,
        appendix_titles: &crate::model::AppendixTitleMap,
    ) -> Vec<TablePack> {
        let appendix = self
            .options
            .appendix_pages
            .get(page.page)
            .unwrap_or("")
            .to_string();
        let base_title = self.infer_title(&page.text, &appendix, appendix_titles, page.page);
        let title = if !appendix.is_empty() && !base_title.contains(&appendix) {
            format!("{}（{}）", base_title, appendix)
        } else {
            base_title
        };
        let page_direction = self.tagger.infer_page_direction(&page.text);

        let cleaned: Vec<_> = page.raw_tables.iter().filter_map(clean_grid).collect();
        let many = cleaned.len() > 1;

        cleaned
            .into_iter()
            .enumerate()
            .map(|(i, mut table)| {
                self.tagger.tag_rows(&mut table, &page_direction);
                TablePack {
                    page: page.page,
                    title: if many {
                        format!("{} - 表{}", title, i + 1)
                    } else {
                        title.clone()
                    },
                    appendix: appendix.clone(),
                    direction: page_direction.clone(),
                    direction_column: self.tagger.rules().column_name.clone(),
                    columns: table.columns,
                    rows: table.rows,
                }
            })
            .collect()
    }

    /// Resolve a display title for the page's tables.
    ///
    /// Preference order: resolved appendix title, a page-text title
    /// suffixed with the parenthesized appendix key, any inline
    /// `附表N: title` on the page, the appendix key itself, and finally a
    /// positional placeholder.
    fn infer_title(
        &self,
        page_text: &str,
        appendix: &str,
        appendix_titles: &crate::model::AppendixTitleMap,
        page_no: u32,
    ) -> String {
        if !appendix.is_empty() {
            if let Some(title) = appendix_titles.get(appendix) {
                return title.to_string();
            }
            let pattern = format!(
                r"(?P<title>[^\n\r]{{2,120}}?)\s*[（(]\s*{}\s*[)）]",
                regex::escape(appendix)
            );
            if let Ok(re) = Regex::new(&pattern) {
                if let Some(caps) = re.captures(page_text) {
                    return clean(&caps["title"]);
                }
            }
        }

        if let Some(caps) = self.inline_label.captures(page_text) {
            return clean(caps.get(2).map_or("", |m| m.as_str()));
        }

        if !appendix.is_empty() {
            appendix.to_string()
        } else {
            format!("第{}页表格", page_no)
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
