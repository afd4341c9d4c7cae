// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Usage counter attached to every stored word.
pub type Frequency = u64;

fn default_frequency() -> Frequency {
    1
}

/// A single dictionary entry as it appears in the persisted word list.
/// Only exists at load/save time; the trie itself stores no records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    #[serde(alias = "Text")]
    pub text: String,
    /// Older dictionaries carry no counter, every word there counts once.
    #[serde(default = "default_frequency", alias = "Frequency")]
    pub frequency: Frequency,
}

impl WordRecord {
    pub fn new(text: impl Into<String>, frequency: Frequency) -> Self {
        Self { text: text.into(), frequency }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_frequency_defaults_to_one() {
        let record: WordRecord = serde_json::from_str(r#"{"Text":"привет"}"#).unwrap();
        assert_eq!(record, WordRecord::new("привет", 1));
    }

    #[test]
    fn lowercase_field_names() {
        let record: WordRecord = serde_json::from_str(r#"{"text":"cat","frequency":5}"#).unwrap();
        assert_eq!(record.frequency, 5);
    }
}
