//! Abbreviation expansion on live keystrokes.
//!
//! The editing surface calls [`on_space_key`] when the user presses space.
//! The decision tells the surface whether to let the keystroke through
//! untouched or to substitute the just-typed token. The space is suppressed
//! only on a successful replace, so unmatched `:token` text stays put and
//! the user's space is never silently eaten.

use crate::store::{AbbrevStore, AbbreviationTable};
use chrono::{Local, NaiveDate};

/// Leading character that marks an abbreviation token.
pub const TRIGGER: char = ':';

/// Token that expands to the current calendar date, regardless of the table.
const DATE_MACRO: &str = "cd";

/// What the editing surface should do with the pending space keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionDecision {
    /// Let the space through; nothing is replaced.
    NoAction,
    /// Delete the byte range `[start, end)`, insert `replacement` at
    /// `start`, move the caret to `start + replacement.len()`, and suppress
    /// the space keystroke (the replacement carries its own trailing space).
    Replace {
        start: usize,
        end: usize,
        replacement: String,
    },
}

/// Decide whether the token just typed before `caret` should be expanded.
///
/// `text_before_caret` is the active section's text up to the caret (byte
/// offset); passing the full text is also accepted, only `[..caret]` is
/// examined.
pub fn on_space_key<S: AbbrevStore>(
    table: &AbbreviationTable<S>,
    caret: usize,
    text_before_caret: &str,
) -> ExpansionDecision {
    decide(table, caret, text_before_caret, Local::now().date_naive())
}

fn decide<S: AbbrevStore>(
    table: &AbbreviationTable<S>,
    caret: usize,
    text_before_caret: &str,
    today: NaiveDate,
) -> ExpansionDecision {
    let before = match text_before_caret.get(..caret) {
        Some(s) => s,
        None => return ExpansionDecision::NoAction,
    };

    // Nearest preceding space or newline bounds the candidate token;
    // absence means the token starts at the beginning of the text.
    let start = before.rfind([' ', '\n']).map_or(0, |i| i + 1);
    let token = &before[start..];

    let key = match token.strip_prefix(TRIGGER) {
        Some(key) => key,
        None => return ExpansionDecision::NoAction,
    };

    let value = if key == DATE_MACRO {
        Some(today.format("%Y-%m-%d").to_string())
    } else {
        table.get(key).map(str::to_string)
    };

    match value {
        Some(value) => ExpansionDecision::Replace {
            start,
            end: caret,
            replacement: format!("{} ", value),
        },
        None => ExpansionDecision::NoAction,
    }
}
