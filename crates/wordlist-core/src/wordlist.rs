use std::fs;
use std::path::Path;

use wordlist_types::Entry;

use crate::error::{ConvertError, Result};
use crate::extract::extract_entries;
use crate::preprocess::{count_category_headers, strip_category_headers};

/// Counts reported after a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionSummary {
    pub headers_stripped: usize,
    pub entries: usize,
    /// Entries without a word or translation; still written, but the importer skips them
    pub incomplete: usize,
}

/// Parsed vocabulary list
#[derive(Debug, Clone, Default)]
pub struct Wordlist {
    pub entries: Vec<Entry>,
    pub headers_stripped: usize,
}

impl Wordlist {
    /// Strip category headers and extract entries from raw text
    pub fn parse(text: &str) -> Self {
        let headers_stripped = count_category_headers(text);
        let normalized = strip_category_headers(text);
        let entries = extract_entries(&normalized);

        Self {
            entries,
            headers_stripped,
        }
    }

    /// Load and parse a UTF-8 vocabulary list from file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading vocabulary list from file: {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| ConvertError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;

        let wordlist = Self::parse(&text);
        tracing::info!(
            "Extracted {} entries ({} category headers stripped)",
            wordlist.entry_count(),
            wordlist.headers_stripped
        );
        Ok(wordlist)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn summary(&self) -> ConversionSummary {
        let mut incomplete = 0;
        for entry in self.entries.iter().filter(|e| !e.is_importable()) {
            tracing::warn!(
                word = %entry.word,
                "entry has no word or translation and will be skipped on import"
            );
            incomplete += 1;
        }

        ConversionSummary {
            headers_stripped: self.headers_stripped,
            entries: self.entry_count(),
            incomplete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_counts_headers_and_entries() {
        let wordlist = Wordlist::parse(
            "A. (2)\n1. ant [ænt]: an insect\n2. arm [ɑːm]: a limb\nB. (1)\n3. bow [baʊ]:\n",
        );
        assert_eq!(wordlist.headers_stripped, 2);
        assert_eq!(wordlist.entry_count(), 3);
        assert_eq!(
            wordlist.summary(),
            ConversionSummary {
                headers_stripped: 2,
                entries: 3,
                incomplete: 1,
            }
        );
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = Wordlist::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConvertError::ReadInput { .. }));
    }
}
