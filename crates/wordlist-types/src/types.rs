use serde::{Deserialize, Serialize};

/// One parsed vocabulary record.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,          // e.g., "apple"
    pub pronunciation: String, // e.g., "əˈpæl"
    pub translation: String,   // e.g., "a fruit"
}

impl Entry {
    pub fn new(
        word: impl Into<String>,
        pronunciation: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            pronunciation: pronunciation.into(),
            translation: translation.into(),
        }
    }

    /// Whether the vocabulary importer accepts this row (needs a word and a translation)
    pub fn is_importable(&self) -> bool {
        !self.word.is_empty() && !self.translation.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_importable_requires_word_and_translation() {
        assert!(Entry::new("apple", "əˈpæl", "a fruit").is_importable());
        assert!(Entry::new("apple", "", "a fruit").is_importable());
        assert!(!Entry::new("apple", "əˈpæl", "").is_importable());
        assert!(!Entry::new("", "əˈpæl", "a fruit").is_importable());
    }
}
