//! Page source abstraction.
//!
//! Provides a trait-based interface over whatever renders the document
//! into per-page text and raw table grids, isolating the concrete
//! document-opening library (and any OCR engine) from the structuring
//! pipeline.

use crate::error::Result;
use crate::model::PageRecord;
use crate::text::normalize_multiline;

/// Pages shorter than this many characters are OCR candidates.
pub const OCR_TEXT_THRESHOLD: usize = 50;

/// Abstract interface for the external page/table source.
///
/// Implementations deliver pages with 1-indexed, consecutive page numbers.
/// A page whose table extraction failed must still appear, with an empty
/// `raw_tables` — one bad page never hides the others.
pub trait PageSource {
    /// Extract all pages of the document.
    fn pages(&mut self) -> Result<Vec<PageRecord>>;
}

/// Abstract interface for an optional OCR fallback engine.
pub trait OcrEngine {
    /// Recognize text on the given page. Errors are swallowed by callers;
    /// OCR is best-effort and never fatal.
    fn recognize(&self, page: u32) -> Result<String>;
}

/// A page source over an already-extracted sequence of pages.
///
/// Used when the rendering collaborator runs elsewhere and hands over its
/// output, and by tests. Applies the OCR fallback policy when an engine is
/// attached: OCR runs only on pages with fewer than [`OCR_TEXT_THRESHOLD`]
/// characters of text, and its output replaces the page text only when
/// strictly longer.
pub struct StaticPageSource<'a> {
    pages: Vec<PageRecord>,
    ocr: Option<&'a dyn OcrEngine>,
}

impl<'a> StaticPageSource<'a> {
    /// Wrap a prepared page sequence.
    pub fn new(pages: Vec<PageRecord>) -> Self {
        Self { pages, ocr: None }
    }

    /// Attach an OCR engine for short-text pages.
    pub fn with_ocr(mut self, ocr: &'a dyn OcrEngine) -> Self {
        self.ocr = Some(ocr);
        self
    }
}

impl PageSource for StaticPageSource<'_> {
    // Repeated calls deliver the same document; OCR reruns each time.
    fn pages(&mut self) -> Result<Vec<PageRecord>> {
        let mut pages = self.pages.clone();
        if let Some(ocr) = self.ocr {
            for page in &mut pages {
                if page.text.chars().count() >= OCR_TEXT_THRESHOLD {
                    continue;
                }
                match ocr.recognize(page.page) {
                    Ok(text) => {
                        let text = normalize_multiline(&text);
                        if text.chars().count() > page.text.chars().count() {
                            page.text = text;
                        }
                    }
                    Err(e) => {
                        log::warn!("OCR failed on page {}: {}", page.page, e);
                    }
                }
            }
        }
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct FixedOcr(&'static str);

    impl OcrEngine for FixedOcr {
        fn recognize(&self, _page: u32) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingOcr;

    impl OcrEngine for FailingOcr {
        fn recognize(&self, _page: u32) -> Result<String> {
            Err(Error::Other("engine offline".to_string()))
        }
    }

    #[test]
    fn test_static_source_passthrough() {
        let mut source = StaticPageSource::new(vec![PageRecord::new(1, "text")]);
        let pages = source.pages().unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].text, "text");
    }

    #[test]
    fn test_repeated_calls_return_same_pages() {
        let mut source = StaticPageSource::new(vec![PageRecord::new(1, "text")]);
        let first = source.pages().unwrap();
        let second = source.pages().unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].text, "text");
    }

    #[test]
    fn test_ocr_replaces_short_text_when_longer() {
        let ocr = FixedOcr("识别出来的更长的一段文字内容");
        let mut source = StaticPageSource::new(vec![PageRecord::new(1, "短")]).with_ocr(&ocr);
        let pages = source.pages().unwrap();
        assert_eq!(pages[0].text, "识别出来的更长的一段文字内容");
    }

    #[test]
    fn test_ocr_skips_long_text() {
        let long: String = "长".repeat(OCR_TEXT_THRESHOLD);
        let ocr = FixedOcr("别的内容");
        let mut source =
            StaticPageSource::new(vec![PageRecord::new(1, long.clone())]).with_ocr(&ocr);
        let pages = source.pages().unwrap();
        assert_eq!(pages[0].text, long);
    }

    #[test]
    fn test_ocr_failure_swallowed() {
        let ocr = FailingOcr;
        let mut source = StaticPageSource::new(vec![PageRecord::new(1, "短")]).with_ocr(&ocr);
        let pages = source.pages().unwrap();
        assert_eq!(pages[0].text, "短");
    }

    #[test]
    fn test_ocr_shorter_output_kept_original() {
        let ocr = FixedOcr("x");
        let mut source = StaticPageSource::new(vec![PageRecord::new(1, "原文")]).with_ocr(&ocr);
        let pages = source.pages().unwrap();
        assert_eq!(pages[0].text, "原文");
    }
}
