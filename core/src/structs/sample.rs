use fxhash::FxHashSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// One draw of items from a universe. Produced per trial and thrown away after.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sample<T>(pub Vec<T>);

impl<T> Sample<T> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: Eq + Hash> Sample<T> {
    /// Presence-set check, O(n). This is the one to use inside simulation loops.
    pub fn has_duplicates(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.0.iter().any(|item| !seen.insert(item))
    }
}

impl<T: Eq + Hash + Clone> Sample<T> {
    /// Every value that occurs more than once, each listed once, in order of
    /// first occurrence.
    ///
    /// Pairwise scan, O(n^2). Only meant for showing a single small sample.
    pub fn duplicates(&self) -> Vec<T> {
        if !self.has_duplicates() {
            return vec![];
        }

        self.0
            .iter()
            .tuple_combinations::<(_, _)>()
            .filter(|(a, b)| a == b)
            .map(|(a, _)| a)
            .unique()
            .cloned()
            .collect()
    }
}

impl<T> IntoIterator for Sample<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sample<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
