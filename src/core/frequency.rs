//! Insertion-ordered value counts.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts per distinct value, remembering the order values were first seen.
///
/// Ties are always resolved in favor of the value seen first, both for
/// [`Frequency::mode`] and for the ordering of [`Frequency::ranked`].
#[derive(Debug, Clone)]
pub struct Frequency<K> {
    slots: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> Default for Frequency<K> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Frequency<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K) {
        match self.slots.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.slots.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Most frequent value; `None` when nothing was counted.
    pub fn mode(&self) -> Option<&K> {
        let mut best: Option<&(K, usize)> = None;
        for entry in &self.entries {
            if best.is_none_or(|b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(k, _)| k)
    }

    /// All values by descending count (stable: ties keep first-seen order).
    pub fn ranked(&self) -> Vec<(&K, usize)> {
        let mut out: Vec<(&K, usize)> = self.entries.iter().map(|(k, c)| (k, *c)).collect();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for Frequency<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut freq = Frequency::new();
        for k in iter {
            freq.add(k);
        }
        freq
    }
}
