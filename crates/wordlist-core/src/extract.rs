use std::sync::OnceLock;

use regex::Regex;
use wordlist_types::Entry;

static ENTRY_HEAD: OnceLock<Regex> = OnceLock::new();
static ENTRY_BOUNDARY: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_RUN: OnceLock<Regex> = OnceLock::new();

/// `N. word [pronunciation]:` at the start of a line
fn entry_head() -> &'static Regex {
    ENTRY_HEAD.get_or_init(|| {
        Regex::new(r"(?m)^\d+\.\s+([^\[\n]+?)\s*\[([^\]]+)\]:")
            .expect("Static regex pattern is guaranteed to be valid")
    })
}

/// Where the next numbered entry begins; ends the current translation
fn entry_boundary() -> &'static Regex {
    ENTRY_BOUNDARY.get_or_init(|| {
        Regex::new(r"\n\d+\.").expect("Static regex pattern is guaranteed to be valid")
    })
}

fn whitespace_run() -> &'static Regex {
    WHITESPACE_RUN.get_or_init(|| {
        Regex::new(r"\s+").expect("Static regex pattern is guaranteed to be valid")
    })
}

/// Collapse every whitespace run (newlines included) to one space and trim
fn collapse_whitespace(text: &str) -> String {
    whitespace_run().replace_all(text.trim(), " ").into_owned()
}

/// Extract every well-formed entry from normalized text, in input order.
///
/// A translation runs from the colon up to the next `\n<digits>.` or the end
/// of the text, so it may span several lines. Lines that don't fit the entry
/// shape are skipped.
pub fn extract_entries(text: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut pos = 0;

    while let Some(caps) = entry_head().captures_at(text, pos) {
        let Some(head) = caps.get(0) else {
            break;
        };

        // Search from the colon itself so an empty translation still stops at the next entry
        let end = entry_boundary()
            .find_at(text, head.end())
            .map_or(text.len(), |m| m.start());

        let entry = Entry::new(
            caps[1].trim(),
            caps[2].trim(),
            collapse_whitespace(&text[head.end()..end]),
        );
        tracing::debug!(
            word = %entry.word,
            pronunciation = %entry.pronunciation,
            "extracted entry"
        );
        entries.push(entry);

        // Resume at the boundary newline so the next `^` anchor can match right after it
        pos = end;
    }

    entries
}
