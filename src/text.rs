//! Whitespace and newline normalization primitives.
//!
//! Every other stage of the pipeline runs on text that has passed through
//! these two functions, so the rest of the crate can assume single spaces,
//! `\n` line endings, and at most two consecutive blank lines.

/// Collapse runs of whitespace to a single space and trim.
///
/// Any Unicode whitespace counts: non-breaking and ideographic spaces
/// (U+3000, pervasive in CJK documents) collapse and trim like ASCII
/// spaces, and newlines inside a cell collapse too — callers that need
/// line structure split first ([`normalize_multiline`]). Total: any input
/// yields a (possibly empty) trimmed string.
pub fn clean(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            in_space = true;
        } else {
            if in_space && !out.is_empty() {
                out.push(' ');
            }
            in_space = false;
            out.push(ch);
        }
    }
    out
}

/// Normalize a multi-line block: unify line endings to `\n`, clean each
/// line, and cap runs of blank lines at two so paragraph breaks survive
/// without unbounded blank runs.
pub fn normalize_multiline(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut out: Vec<String> = Vec::new();
    let mut blank = 0usize;
    for line in unified.split('\n') {
        let line = clean(line);
        if line.is_empty() {
            blank += 1;
            if blank <= 2 {
                out.push(String::new());
            }
        } else {
            blank = 0;
            out.push(line);
        }
    }
    out.join("\n").trim().to_string()
}
