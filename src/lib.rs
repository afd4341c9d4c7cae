// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod learning;
pub mod persistence;

pub use crate::config::AutocompleteConfig;
pub use crate::core::session::AutocompleteSession;
pub use crate::core::trie::Trie;
pub use crate::core::types::WordRecord;
pub use crate::error::{AutocompleteError, Result};
