pub mod session;
pub mod tokenizer;
pub mod trie;
pub mod types;
