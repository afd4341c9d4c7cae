// src/config.rs
use crate::core::types::Frequency;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "chat-autocomplete";
const DICTIONARY_FILE: &str = "autocomplete_dict.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    /// Where the learned dictionary lives. `None` means the platform data dir.
    pub dictionary_path: Option<PathBuf>,
    /// Size of the dropdown completion list.
    pub max_completions: usize,
    /// Words shorter than this many characters are not learned.
    pub min_word_len: usize,
    pub frequency_increment: Frequency,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            max_completions: 10,
            min_word_len: 1,
            frequency_increment: 1,
        }
    }
}

impl AutocompleteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("using default config, could not read {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// The configured dictionary location, or the default one under the
    /// platform data directory (falling back to the working directory).
    pub fn resolved_dictionary_path(&self) -> PathBuf {
        self.dictionary_path.clone().unwrap_or_else(default_dictionary_path)
    }
}

pub fn default_dictionary_path() -> PathBuf {
    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push(DICTIONARY_FILE);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: AutocompleteConfig = serde_json::from_str(r#"{"max_completions": 3}"#).unwrap();
        assert_eq!(config.max_completions, 3);
        assert_eq!(config.min_word_len, 1);
        assert_eq!(config.frequency_increment, 1);
        assert!(config.dictionary_path.is_none());
    }

    #[test]
    fn default_path_ends_with_dictionary_file() {
        let path = AutocompleteConfig::default().resolved_dictionary_path();
        assert!(path.ends_with(Path::new(APP_DIR).join(DICTIONARY_FILE)));
    }

    #[test]
    fn missing_config_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = AutocompleteConfig::load_or_default(&dir.path().join("nope.json"));
        assert_eq!(config, AutocompleteConfig::default());
    }
}
