use std::sync::OnceLock;

use regex::Regex;

static CATEGORY_HEADER: OnceLock<Regex> = OnceLock::new();

/// A line holding only a letter group and its count, e.g. `A. (103)`
fn category_header() -> &'static Regex {
    CATEGORY_HEADER.get_or_init(|| {
        Regex::new(r"(?m)^[A-Z]\.\s*\(\d+\)\s*$")
            .expect("Static regex pattern is guaranteed to be valid")
    })
}

/// Remove category header lines, leaving the rest of the text untouched.
///
/// Each matched line is replaced by an empty string; its newline stays.
pub fn strip_category_headers(text: &str) -> String {
    category_header().replace_all(text, "").into_owned()
}

/// Number of category header lines in `text`
pub fn count_category_headers(text: &str) -> usize {
    category_header().find_iter(text).count()
}
