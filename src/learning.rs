// File: src/learning.rs
use crate::config::AutocompleteConfig;
use crate::core::tokenizer::{words, WordChars};
use crate::core::trie::Trie;
use crate::core::types::Frequency;

/// Feeds finished words back into the trie so they rank higher next time.
pub struct LearningEngine {
    frequency_increment: Frequency,
    min_word_len: usize,
}

impl LearningEngine {
    pub fn new() -> Self {
        Self { frequency_increment: 1, min_word_len: 1 }
    }

    pub fn from_config(config: &AutocompleteConfig) -> Self {
        Self {
            frequency_increment: config.frequency_increment,
            min_word_len: config.min_word_len.max(1),
        }
    }

    /// Records one use of `word`. Returns whether it was stored.
    pub fn learn(&self, trie: &mut Trie, word: &str) -> bool {
        let word = word.to_lowercase();
        if word.chars().count() < self.min_word_len {
            return false;
        }
        trie.insert(&word, self.frequency_increment);
        tracing::debug!("learned {:?} (now {:?})", word, trie.frequency(&word));
        true
    }

    /// Learns every word of a submitted message. Returns how many were stored.
    pub fn learn_text<W: WordChars + ?Sized>(&self, trie: &mut Trie, text: &str, chars: &W) -> usize {
        words(text, chars)
            .iter()
            .filter(|word| self.learn(trie, word))
            .count()
    }
}

impl Default for LearningEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenizer::UnicodeWordChars;

    #[test]
    fn lowercases_before_storing() {
        let mut trie = Trie::new();
        let learner = LearningEngine::new();
        assert!(learner.learn(&mut trie, "Hello"));
        assert!(learner.learn(&mut trie, "HELLO"));
        assert_eq!(trie.frequency("hello"), Some(2));
    }

    #[test]
    fn skips_short_and_empty_words() {
        let config = AutocompleteConfig { min_word_len: 3, ..Default::default() };
        let learner = LearningEngine::from_config(&config);
        let mut trie = Trie::new();
        assert!(!learner.learn(&mut trie, ""));
        assert!(!learner.learn(&mut trie, "ok"));
        assert!(learner.learn(&mut trie, "yes"));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn learns_whole_message() {
        let config = AutocompleteConfig { frequency_increment: 2, ..Default::default() };
        let learner = LearningEngine::from_config(&config);
        let mut trie = Trie::new();
        let stored = learner.learn_text(&mut trie, "Go, go, Power Rangers!", &UnicodeWordChars);
        assert_eq!(stored, 4);
        assert_eq!(trie.frequency("go"), Some(4));
        assert_eq!(trie.frequency("rangers"), Some(2));
    }
}
