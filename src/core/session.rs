// src/core/session.rs
use crate::config::AutocompleteConfig;
use crate::core::tokenizer::{replace_trailing_word, trailing_word, UnicodeWordChars, WordChars};
use crate::core::trie::Trie;
use crate::core::types::WordRecord;
use crate::error::{AutocompleteError, Result};
use crate::learning::LearningEngine;
use crate::persistence::{back_up_unreadable, load_from_disk, save_to_disk};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Connects free-form chat input to the trie.
///
/// Besides the dictionary it remembers the last input seen by
/// [`append_suggestion`](Self::append_suggestion), which is how it tells
/// typing apart from deleting.
pub struct AutocompleteSession<W: WordChars = UnicodeWordChars> {
    pub trie: Trie,
    prev_input: String,
    word_chars: W,
    learning_engine: LearningEngine,
    max_completions: usize,
    dictionary_path: Option<PathBuf>,
}

impl AutocompleteSession {
    pub fn new() -> Self {
        Self::with_trie(Trie::new(), &AutocompleteConfig::default())
    }

    pub fn with_trie(trie: Trie, config: &AutocompleteConfig) -> Self {
        Self::with_word_chars(trie, UnicodeWordChars, config)
    }

    /// Loads the dictionary named by `config`. A missing or unreadable file
    /// leaves the session with an empty dictionary; a malformed one is first
    /// moved aside to `<name>.bak` so a later save cannot destroy it.
    pub fn from_file_or_new(config: &AutocompleteConfig) -> Self {
        let path = config.resolved_dictionary_path();
        let trie = match load_from_disk(&path) {
            Ok(records) => Trie::from_records(records),
            Err(AutocompleteError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("no dictionary at {}, starting empty", path.display());
                Trie::new()
            }
            Err(e @ AutocompleteError::Json(_)) => {
                tracing::warn!("ignoring dictionary {}: {}", path.display(), e);
                match back_up_unreadable(&path) {
                    Ok(backup) => tracing::warn!("moved it to {}", backup.display()),
                    Err(e) => tracing::warn!("could not back it up: {}", e),
                }
                Trie::new()
            }
            Err(e) => {
                tracing::warn!("ignoring dictionary {}: {}", path.display(), e);
                Trie::new()
            }
        };
        let mut session = Self::with_trie(trie, config);
        session.dictionary_path = Some(path);
        session
    }
}

impl Default for AutocompleteSession {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: WordChars> AutocompleteSession<W> {
    pub fn with_word_chars(trie: Trie, word_chars: W, config: &AutocompleteConfig) -> Self {
        Self {
            trie,
            prev_input: String::new(),
            word_chars,
            learning_engine: LearningEngine::from_config(config),
            max_completions: config.max_completions,
            dictionary_path: config.dictionary_path.clone(),
        }
    }

    pub fn dictionary_path(&self) -> Option<&Path> {
        self.dictionary_path.as_deref()
    }

    pub fn previous_input(&self) -> &str {
        &self.prev_input
    }

    /// The word fragment being typed at the end of `text`.
    pub fn trailing_word<'a>(&self, text: &'a str) -> &'a str {
        trailing_word(text, &self.word_chars)
    }

    /// The untyped rest of the best completion for `text`, for inline ghost
    /// text. Returns `""` when nothing matches or when `text` is not longer
    /// than the previous input (the user is deleting).
    pub fn append_suggestion(&mut self, text: &str) -> String {
        let ghost = self.ghost_suffix(text);
        self.prev_input.clear();
        self.prev_input.push_str(text);
        ghost
    }

    fn ghost_suffix(&self, text: &str) -> String {
        let fragment = self.trailing_word(text);
        if fragment.is_empty() {
            return String::new();
        }
        let fragment = fragment.to_lowercase();
        let Some(best) = self.trie.get_suggestions(&fragment, 1).into_iter().next() else {
            return String::new();
        };
        if text.chars().count() <= self.prev_input.chars().count() {
            tracing::trace!("input shrank, suppressing {:?}", best);
            return String::new();
        }
        best[fragment.len()..].to_string()
    }

    /// Up to `max_count` full words completing the trailing fragment of `text`.
    pub fn completion_list(&self, text: &str, max_count: usize) -> Vec<String> {
        let fragment = self.trailing_word(text);
        if fragment.is_empty() {
            return vec![];
        }
        self.trie.get_suggestions(&fragment.to_lowercase(), max_count)
    }

    /// [`completion_list`](Self::completion_list) sized by the configured maximum.
    pub fn completions(&self, text: &str) -> Vec<String> {
        self.completion_list(text, self.max_completions)
    }

    /// Records one use of a finished word.
    pub fn learn_word(&mut self, word: &str) -> bool {
        self.learning_engine.learn(&mut self.trie, word)
    }

    /// Learns every word of a submitted message.
    pub fn learn_input(&mut self, text: &str) -> usize {
        self.learning_engine
            .learn_text(&mut self.trie, text, &self.word_chars)
    }

    /// Puts the chosen dropdown entry in place of the trailing fragment.
    pub fn accept_completion(&mut self, text: &str, word: &str) -> String {
        let accepted = replace_trailing_word(text, word, &self.word_chars);
        self.prev_input.clone_from(&accepted);
        accepted
    }

    /// Completes the trailing fragment with the best dictionary word, keeping
    /// the dictionary's spelling. `None` when nothing matches.
    pub fn accept_best(&mut self, text: &str) -> Option<String> {
        let best = self.completion_list(text, 1).into_iter().next()?;
        Some(self.accept_completion(text, &best))
    }

    /// Forgets the previous input, e.g. after the chat box was cleared.
    pub fn reset(&mut self) {
        self.prev_input.clear();
    }

    /// A copy of the dictionary, safe to hand to a writer elsewhere.
    pub fn snapshot(&self) -> Vec<WordRecord> {
        self.trie.to_flat_list()
    }

    pub fn save_dictionary(&self) -> Result<()> {
        if let Some(path) = &self.dictionary_path {
            save_to_disk(&self.snapshot(), path)
        } else {
            Ok(()) // Don't error if no path is set
        }
    }
}
