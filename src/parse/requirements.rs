//! Graduation-requirements parsing.
//!
//! The requirements chapter is a two-level numbered list: main items `1.`
//! through `12.`, each optionally followed by sub-items `1.1`, `1.2`, …
//! Parsing is an explicit three-state machine so the rule that keeps `1.1`
//! from being misread as main item `1` stays auditable in one place.

use crate::model::{RequirementItem, RequirementSet, RequirementSubItem};
use crate::text::{clean, normalize_multiline};
use regex::Regex;

/// Nominal number of graduation requirements.
const EXPECTED_ITEMS: u32 = 12;

/// Parser state: which item, if any, is currently accumulating lines.
enum State {
    /// No main item open yet
    NoItem,
    /// A main item is open, no sub-item
    InMain { item: RequirementItem },
    /// A main item and one of its sub-items are both open
    InSub {
        item: RequirementItem,
        sub: RequirementSubItem,
    },
}

/// Extracts the graduation-requirements outline from whole-document text.
pub struct RequirementsParser {
    heading: Regex,
    next_chapter: Regex,
    main_item: Regex,
    sub_item: Regex,
}

impl RequirementsParser {
    /// Create a parser with the compiled patterns.
    pub fn new() -> Self {
        Self {
            heading: Regex::new(r"(?m)^\s*(二\s*[、.．]?\s*毕业要求|毕业要求)\s*$").unwrap(),
            next_chapter: Regex::new(r"(?m)^\s*[三四五六七八九十]\s*[、.．]").unwrap(),
            main_item: Regex::new(r"^(\d{1,2})\s*[.、](.*)$").unwrap(),
            sub_item: Regex::new(r"^(\d{1,2}\.\d{1,2})\s+(.+)$").unwrap(),
        }
    }

    /// Parse the requirements window out of the full document text.
    ///
    /// The window runs from the requirements heading (tolerating a bare
    /// `毕业要求` line) to the next top-level chapter heading, or the whole
    /// document when no heading is found. Main items are sorted by number;
    /// when more than [`EXPECTED_ITEMS`] were collected, stray numbered
    /// lines outside 1..=12 are dropped without renumbering the rest.
    pub fn parse(&self, full_text: &str) -> RequirementSet {
        let text = normalize_multiline(full_text);
        let window = self.locate_window(&text);

        let mut items: Vec<RequirementItem> = Vec::new();
        let mut state = State::NoItem;

        for line in window.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            state = self.step(state, line, &mut items);
        }
        flush(state, &mut items);

        items.sort_by_key(|item| item.no);
        if items.len() as u32 > EXPECTED_ITEMS {
            log::warn!(
                "collected {} main items, filtering to 1..={}",
                items.len(),
                EXPECTED_ITEMS
            );
            items.retain(|item| (1..=EXPECTED_ITEMS).contains(&item.no));
        }

        RequirementSet::new(items, window.trim().to_string())
    }

    fn locate_window<'a>(&self, text: &'a str) -> &'a str {
        let tail = match self.heading.find(text) {
            Some(m) => &text[m.start()..],
            None => text,
        };
        match self.next_chapter.find(tail) {
            Some(m) => &tail[..m.start()],
            None => tail,
        }
    }

    /// Advance the state machine by one non-blank line.
    fn step(&self, state: State, line: &str, items: &mut Vec<RequirementItem>) -> State {
        if let Some((no, body_full)) = self.match_main(line) {
            flush(state, items);
            let (title, body) = split_title(&body_full);
            return State::InMain {
                item: RequirementItem {
                    no,
                    title,
                    body,
                    subitems: Vec::new(),
                },
            };
        }

        // Sub-items only count while a main item is open; a stray `x.y`
        // line before any main item is noise inside the window and is
        // dropped, exactly like a continuation with nothing open.
        if let Some(caps) = self.sub_item.captures(line) {
            let next_sub = RequirementSubItem {
                no: caps[1].to_string(),
                body: clean(&caps[2]),
            };
            return match state {
                State::NoItem => State::NoItem,
                State::InMain { item } => State::InSub {
                    item,
                    sub: next_sub,
                },
                State::InSub { mut item, sub } => {
                    item.subitems.push(sub);
                    State::InSub {
                        item,
                        sub: next_sub,
                    }
                }
            };
        }

        // Continuation line: append to whichever is innermost open.
        match state {
            State::NoItem => State::NoItem,
            State::InMain { mut item } => {
                item.body.push(' ');
                item.body.push_str(line);
                item.body = clean(&item.body);
                State::InMain { item }
            }
            State::InSub { item, mut sub } => {
                sub.body.push(' ');
                sub.body.push_str(line);
                sub.body = clean(&sub.body);
                State::InSub { item, sub }
            }
        }
    }

    /// Match a main-item line, rejecting `1.1` forms.
    ///
    /// The rejection rule: the character immediately after the separator
    /// must not be a digit, otherwise `1.1 …` would read as main item 1.
    fn match_main(&self, line: &str) -> Option<(u32, String)> {
        let caps = self.main_item.captures(line)?;
        let rest = caps.get(2).map_or("", |m| m.as_str());
        if rest.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return None;
        }
        let body = clean(rest);
        if body.is_empty() {
            return None;
        }
        let no: u32 = caps[1].parse().ok()?;
        Some((no, body))
    }
}

impl Default for RequirementsParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Close any open sub-item into its parent, then the parent into `items`.
fn flush(state: State, items: &mut Vec<RequirementItem>) {
    match state {
        State::NoItem => {}
        State::InMain { item } => items.push(item),
        State::InSub { mut item, sub } => {
            item.subitems.push(sub);
            items.push(item);
        }
    }
}

/// Split `工程知识：能够…` into title and body on the full-width colon.
fn split_title(body_full: &str) -> (String, String) {
    match body_full.split_once('：') {
        Some((title, body)) => (clean(title), clean(body)),
        None => (String::new(), body_full.to_string()),
    }
}
