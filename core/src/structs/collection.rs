use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

use super::{Sample, Universe};
use crate::{error::Result, sampler::Sampler};

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AlbumState {
    Empty,
    Filling,
    Complete,
}

/// What happened when a pack was opened into an album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackReport<T> {
    pub already_had: Vec<T>,
    pub new: Vec<T>,
}

impl<T> PackReport<T> {
    pub fn had_duplicates(&self) -> bool {
        !self.already_had.is_empty()
    }
}

/// Set of items seen so far within one trial (an album, or a cohort).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionTracker<T: Eq + Hash> {
    items: FxHashSet<T>,
}

impl<T: Eq + Hash> Default for CollectionTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> CollectionTracker<T> {
    pub fn new() -> Self {
        Self {
            items: FxHashSet::default(),
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Returns whether the item was new. Adding an item twice is a no-op.
    pub fn add(&mut self, item: T) -> bool {
        self.items.insert(item)
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_complete(&self, universe_size: usize) -> bool {
        self.size() == universe_size
    }

    pub fn missing(&self, universe_size: usize) -> usize {
        universe_size.saturating_sub(self.size())
    }

    pub fn state(&self, universe_size: usize) -> AlbumState {
        if self.is_complete(universe_size) {
            AlbumState::Complete
        } else if self.items.is_empty() {
            AlbumState::Empty
        } else {
            AlbumState::Filling
        }
    }

    pub fn has_any_matches(&self, sample: &Sample<T>) -> bool {
        sample.iter().any(|item| self.contains(item))
    }

    pub fn clear(&mut self) {
        self.items.clear()
    }
}

impl<T: Eq + Hash + Clone> CollectionTracker<T> {
    /// Album that already holds `count` distinct random items.
    pub fn prefilled<S: Sampler>(
        universe: &Universe<T>,
        count: usize,
        sampler: &mut S,
    ) -> Result<Self> {
        let mut tracker = Self::new();
        tracker.merge(&sampler.draw(universe, count)?);
        Ok(tracker)
    }

    /// Adds every item of the sample and returns how many were new.
    pub fn merge(&mut self, sample: &Sample<T>) -> usize {
        sample
            .iter()
            .filter(|&item| self.add(item.clone()))
            .count()
    }

    /// Like [`merge`](Self::merge), but reports which items were already owned.
    /// Duplicates are judged against the album before the pack is added.
    pub fn open(&mut self, sample: &Sample<T>) -> PackReport<T> {
        let (already_had, new): (Vec<_>, Vec<_>) = sample
            .iter()
            .cloned()
            .partition(|item| self.contains(item));

        for item in &new {
            self.add(item.clone());
        }

        PackReport { already_had, new }
    }
}

impl<T: Eq + Hash + Ord + Clone> CollectionTracker<T> {
    pub fn sorted_items(&self) -> Vec<T> {
        let mut items = self.items.iter().cloned().collect::<Vec<_>>();
        items.sort();
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::UniformSampler;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn add_is_idempotent() {
        let mut album = CollectionTracker::new();
        assert!(album.add(3));
        assert!(!album.add(3));
        assert_eq!(album.size(), 1);
        assert!(album.contains(&3));
        assert!(!album.contains(&4));
    }

    #[test]
    fn empty_album_never_matches() {
        let universe = (0..5).collect::<Universe<u32>>();
        let mut sampler = UniformSampler::new(StdRng::seed_from_u64(0));
        let album = CollectionTracker::new();

        for _ in 0..100 {
            let pack = sampler.draw(&universe, 2).unwrap();
            assert!(!album.has_any_matches(&pack));
        }
    }

    #[test]
    fn state_moves_from_empty_to_complete() {
        let mut album = CollectionTracker::new();
        assert_eq!(album.state(3), AlbumState::Empty);
        album.merge(&Sample(vec![0, 1]));
        assert_eq!(album.state(3), AlbumState::Filling);
        assert_eq!(album.missing(3), 1);
        album.merge(&Sample(vec![1, 2]));
        assert_eq!(album.state(3), AlbumState::Complete);
        assert!(album.is_complete(3));
    }

    #[test]
    fn open_reports_already_owned_items() {
        let mut album = CollectionTracker::new();
        let first = album.open(&Sample(vec![1, 2, 3]));
        assert!(!first.had_duplicates());
        assert_eq!(first.new, vec![1, 2, 3]);

        let second = album.open(&Sample(vec![3, 4, 1]));
        assert!(second.had_duplicates());
        assert_eq!(second.already_had, vec![3, 1]);
        assert_eq!(second.new, vec![4]);
        assert_eq!(album.sorted_items(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn merge_counts_new_items() {
        let mut album = CollectionTracker::new();
        assert_eq!(album.merge(&Sample(vec![1, 1, 2])), 2);
        assert_eq!(album.merge(&Sample(vec![2, 3])), 1);
        album.clear();
        assert_eq!(album.size(), 0);
    }

    #[test]
    fn prefilled_album_has_requested_size() {
        let universe = (0..728).collect::<Universe<u16>>();
        let mut sampler = UniformSampler::new(StdRng::seed_from_u64(8));
        let album = CollectionTracker::prefilled(&universe, 100, &mut sampler).unwrap();
        assert_eq!(album.size(), 100);
        assert!(CollectionTracker::prefilled(&universe, 729, &mut sampler).is_err());
    }
}
