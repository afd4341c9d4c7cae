// --- File: src/core/trie.rs
use crate::core::types::{Frequency, WordRecord};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

#[derive(Clone, Debug)]
struct TrieNode {
    children: HashMap<char, usize>,
    is_word: bool,
    frequency: Frequency,
    max_freq_in_subtree: Frequency,
}

impl TrieNode {
    fn new() -> Self {
        Self { children: HashMap::new(), is_word: false, frequency: 0, max_freq_in_subtree: 0 }
    }
}

/// A ranked match. Higher frequency ranks first, equal frequencies fall back
/// to lexicographic order so results are reproducible.
#[derive(Debug, PartialEq, Eq)]
struct Candidate {
    frequency: Frequency,
    word: String,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then_with(|| other.word.cmp(&self.word))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An in-memory prefix tree of words and their usage counts.
///
/// Nodes live in a single arena; every node other than the root is referenced
/// from exactly one parent's child map, and nodes are never removed.
#[derive(Clone, Debug)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()], word_count: 0 }
    }

    /// Rebuilds a trie from a flattened word list. Repeated entries accumulate.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = WordRecord>,
    {
        let mut trie = Self::new();
        for record in records {
            trie.insert(&record.text, record.frequency);
        }
        trie
    }

    /// Number of distinct stored words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Inserts `word` and adds `frequency` to its usage count.
    /// O(k) complexity where k is the word length.
    ///
    /// The empty word is ignored, so the root never becomes a word. A stored
    /// word always ends up with a count of at least 1.
    pub fn insert(&mut self, word: &str, frequency: Frequency) {
        if word.is_empty() {
            return;
        }

        let mut node_idx = 0;
        let mut path = vec![0];
        for ch in word.chars() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&ch) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(TrieNode::new());
                self.nodes[node_idx].children.insert(ch, new_node_id);
                new_node_id
            };
            node_idx = next_idx;
            path.push(node_idx);
        }

        let node = &mut self.nodes[node_idx];
        if !node.is_word {
            node.is_word = true;
            self.word_count += 1;
        }
        node.frequency = node.frequency.saturating_add(frequency).max(1);
        let updated_freq = node.frequency;

        // Counts only grow, so once an ancestor already covers the new count
        // every node above it does too.
        for &idx in path.iter().rev() {
            let node = &mut self.nodes[idx];
            if node.max_freq_in_subtree >= updated_freq {
                break;
            }
            node.max_freq_in_subtree = updated_freq;
        }
    }

    fn find_node(&self, prefix: &str) -> Option<usize> {
        prefix
            .chars()
            .try_fold(0, |idx, ch| self.nodes[idx].children.get(&ch).copied())
    }

    /// Usage count of `word`, or `None` if it was never stored.
    pub fn frequency(&self, word: &str) -> Option<Frequency> {
        self.find_node(word)
            .map(|idx| &self.nodes[idx])
            .filter(|node| node.is_word)
            .map(|node| node.frequency)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.frequency(word).is_some()
    }

    /// Up to `max_count` stored words starting with `prefix`, best ranked first.
    pub fn get_suggestions(&self, prefix: &str, max_count: usize) -> Vec<String> {
        self.get_top_k_suggestions(prefix, max_count)
            .into_iter()
            .map(|(word, _)| word)
            .collect()
    }

    /// Get top K suggestions with their counts, using subtree pruning.
    /// O(S log K) where S is the number of nodes visited.
    pub fn get_top_k_suggestions(&self, prefix: &str, k: usize) -> Vec<(String, Frequency)> {
        if k == 0 {
            return vec![];
        }
        let Some(start) = self.find_node(prefix) else {
            return vec![];
        };

        // Min-heap of the best k so far; the top is the current k-th entry.
        // Sized by what can come back, not by the caller's cap.
        let capacity = k.min(self.word_count).saturating_add(1);
        let mut heap: BinaryHeap<Reverse<Candidate>> = BinaryHeap::with_capacity(capacity);
        let mut stack = vec![(start, prefix.to_string())];

        while let Some((node_idx, word)) = stack.pop() {
            let node = &self.nodes[node_idx];
            let floor = if heap.len() == k {
                heap.peek().map(|Reverse(worst)| worst.frequency)
            } else {
                None
            };
            // An equal count may still win on the tie-break, so only strictly
            // lower subtrees are skipped.
            if floor.is_some_and(|f| node.max_freq_in_subtree < f) {
                continue;
            }

            if node.is_word {
                let candidate = Candidate { frequency: node.frequency, word: word.clone() };
                if heap.len() < k {
                    heap.push(Reverse(candidate));
                } else if heap.peek().is_some_and(|Reverse(worst)| candidate > *worst) {
                    heap.pop();
                    heap.push(Reverse(candidate));
                }
            }

            for (&ch, &child_idx) in &node.children {
                let mut next = String::with_capacity(word.len() + ch.len_utf8());
                next.push_str(&word);
                next.push(ch);
                stack.push((child_idx, next));
            }
        }

        // Ascending `Reverse` order is descending rank.
        heap.into_sorted_vec()
            .into_iter()
            .map(|Reverse(c)| (c.word, c.frequency))
            .collect()
    }

    /// Every stored word with its count, in lexicographic order.
    pub fn to_flat_list(&self) -> Vec<WordRecord> {
        let mut records = Vec::with_capacity(self.word_count);
        let mut stack = vec![(0usize, String::new())];
        while let Some((node_idx, word)) = stack.pop() {
            let node = &self.nodes[node_idx];
            if node.is_word {
                records.push(WordRecord::new(word.clone(), node.frequency));
            }
            for (&ch, &child_idx) in &node.children {
                let mut next = word.clone();
                next.push(ch);
                stack.push((child_idx, next));
            }
        }
        records.sort_by(|a, b| a.text.cmp(&b.text));
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_of(words: &[(&str, Frequency)]) -> Trie {
        let mut trie = Trie::new();
        for &(word, freq) in words {
            trie.insert(word, freq);
        }
        trie
    }

    #[test]
    fn ranks_by_frequency() {
        let trie = trie_of(&[("car", 1), ("cat", 5)]);
        assert_eq!(trie.get_suggestions("ca", 2), vec!["cat", "car"]);
    }

    #[test]
    fn equal_frequencies_are_lexicographic() {
        let trie = trie_of(&[("bee", 2), ("bed", 2), ("bear", 2), ("beam", 3)]);
        assert_eq!(trie.get_suggestions("be", 10), vec!["beam", "bear", "bed", "bee"]);
        assert_eq!(trie.get_suggestions("be", 2), vec!["beam", "bear"]);
    }

    #[test]
    fn repeated_insert_accumulates() {
        let mut trie = Trie::new();
        trie.insert("hello", 1);
        trie.insert("hello", 1);
        assert_eq!(trie.frequency("hello"), Some(2));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn word_that_prefixes_another() {
        let trie = trie_of(&[("he", 1), ("hello", 3)]);
        assert_eq!(trie.get_suggestions("he", 5), vec!["hello", "he"]);
        assert!(trie.contains("he"));
        assert!(!trie.contains("hel"));
        assert_eq!(trie.frequency("hel"), None);
    }

    #[test]
    fn result_is_capped() {
        let trie = trie_of(&[("a", 1), ("ab", 1), ("abc", 1), ("abd", 1)]);
        assert_eq!(trie.get_suggestions("a", 3).len(), 3);
        assert_eq!(trie.get_suggestions("a", 10).len(), 4);
        assert!(trie.get_suggestions("a", 0).is_empty());
    }

    #[test]
    fn huge_max_count_returns_all_matches() {
        let trie = trie_of(&[("cat", 5), ("car", 1), ("dog", 2)]);
        assert_eq!(trie.get_suggestions("ca", usize::MAX), vec!["cat", "car"]);
        assert_eq!(trie.get_suggestions("", 1 << 40).len(), 3);
    }

    #[test]
    fn missing_prefix_and_empty_trie() {
        let trie = Trie::new();
        assert!(trie.get_suggestions("", 5).is_empty());
        assert!(trie.is_empty());

        let trie = trie_of(&[("cat", 1)]);
        assert!(trie.get_suggestions("dog", 5).is_empty());
        assert!(trie.get_suggestions("cats", 5).is_empty());
    }

    #[test]
    fn empty_prefix_returns_everything() {
        let trie = trie_of(&[("cat", 1), ("dog", 4)]);
        assert_eq!(trie.get_suggestions("", 5), vec!["dog", "cat"]);
    }

    #[test]
    fn empty_word_is_ignored() {
        let mut trie = Trie::new();
        trie.insert("", 3);
        assert!(trie.is_empty());
        assert!(trie.to_flat_list().is_empty());
    }

    #[test]
    fn zero_frequency_still_counts_once() {
        let mut trie = Trie::new();
        trie.insert("word", 0);
        assert_eq!(trie.frequency("word"), Some(1));
    }

    #[test]
    fn cyrillic_words() {
        let trie = trie_of(&[("привет", 2), ("привычка", 1), ("пока", 1)]);
        assert_eq!(trie.get_suggestions("при", 5), vec!["привет", "привычка"]);
    }

    #[test]
    fn flat_list_is_sorted_and_complete() {
        let trie = trie_of(&[("dog", 2), ("cat", 5), ("car", 1), ("cat", 1)]);
        let records = trie.to_flat_list();
        assert_eq!(
            records,
            vec![
                WordRecord::new("car", 1),
                WordRecord::new("cat", 6),
                WordRecord::new("dog", 2),
            ]
        );
        let rebuilt = Trie::from_records(records.clone());
        assert_eq!(rebuilt.to_flat_list(), records);
    }

    #[test]
    fn pruned_search_matches_full_sort() {
        let mut trie = Trie::new();
        let mut all = Vec::new();
        // Deterministic spread of words and counts sharing prefixes.
        for i in 0..300u64 {
            let word = format!("w{}{}", i % 7, i);
            let freq = (i * 37) % 11 + 1;
            trie.insert(&word, freq);
            all.push((word, freq));
        }

        for prefix in ["w", "w3", "w31", "w6"] {
            let mut expected: Vec<(String, Frequency)> = all
                .iter()
                .filter(|(w, _)| w.starts_with(prefix))
                .cloned()
                .collect();
            expected.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            expected.truncate(8);
            assert_eq!(trie.get_top_k_suggestions(prefix, 8), expected, "prefix {prefix}");
        }
    }
}
