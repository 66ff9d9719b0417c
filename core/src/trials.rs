use log::trace;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

use crate::{
    error::{Result, SimulationError},
    sampler::Sampler,
    structs::{CollectionTracker, Sample, Universe},
};

/// One complete scenario, from an empty state to its outcome.
pub trait Trial {
    type Outcome;

    fn run<S: Sampler>(&self, sampler: &mut S) -> Result<Self::Outcome>;
}

fn check_pack_size<T>(universe: &Universe<T>, pack_size: usize) -> Result<()> {
    if pack_size == 0 || pack_size > universe.len() {
        return Err(SimulationError::InvalidSampleSize {
            requested: pack_size,
            available: universe.len(),
        });
    }
    Ok(())
}

/// Birthday-style trial: does a group of `size` independent picks share an item?
#[derive(Debug, Clone, Copy)]
pub struct CohortTrial<'u, T> {
    universe: &'u Universe<T>,
    size: usize,
}

impl<'u, T: Eq + Hash + Clone> CohortTrial<'u, T> {
    pub fn new(universe: &'u Universe<T>, size: usize) -> Self {
        Self { universe, size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// A single cohort, kept for display.
    pub fn draw<S: Sampler>(&self, sampler: &mut S) -> Result<Sample<T>> {
        sampler.draw_independent(self.universe, self.size)
    }
}

impl<'u, T: Eq + Hash + Clone> Trial for CohortTrial<'u, T> {
    type Outcome = bool;

    fn run<S: Sampler>(&self, sampler: &mut S) -> Result<bool> {
        Ok(self.draw(sampler)?.has_duplicates())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlbumOutcome {
    /// Packs opened, counting the one that completed the album.
    pub packs_to_complete: usize,
    /// 1-based index of the first pack holding an item that was already owned.
    pub packs_to_first_duplicate: Option<usize>,
}

/// Sticker-style trial: open packs until the album is full.
#[derive(Debug, Clone, Copy)]
pub struct AlbumFillTrial<'u, T> {
    universe: &'u Universe<T>,
    pack_size: usize,
}

impl<'u, T: Eq + Hash + Clone> AlbumFillTrial<'u, T> {
    pub fn new(universe: &'u Universe<T>, pack_size: usize) -> Result<Self> {
        check_pack_size(universe, pack_size)?;
        Ok(Self {
            universe,
            pack_size,
        })
    }

    /// Opens packs into `album` until it is complete. Packs are counted from
    /// the first one opened by this call.
    pub fn complete<S: Sampler>(
        &self,
        album: &mut CollectionTracker<T>,
        sampler: &mut S,
    ) -> Result<AlbumOutcome> {
        let universe_size = self.universe.len();
        let mut packs = 0;
        let mut first_duplicate = None;

        while !album.is_complete(universe_size) {
            let pack = sampler.draw(self.universe, self.pack_size)?;
            packs += 1;

            if first_duplicate.is_none() && album.has_any_matches(&pack) {
                trace!("first duplicate in pack {packs}");
                first_duplicate = Some(packs);
            }

            album.merge(&pack);
        }

        Ok(AlbumOutcome {
            packs_to_complete: packs,
            packs_to_first_duplicate: first_duplicate,
        })
    }
}

impl<'u, T: Eq + Hash + Clone> Trial for AlbumFillTrial<'u, T> {
    type Outcome = AlbumOutcome;

    fn run<S: Sampler>(&self, sampler: &mut S) -> Result<AlbumOutcome> {
        self.complete(&mut CollectionTracker::new(), sampler)
    }
}

/// Opens `packs` packs into an empty album. True if any pack repeated a sticker.
#[derive(Debug, Clone, Copy)]
pub struct PackDuplicateTrial<'u, T> {
    universe: &'u Universe<T>,
    pack_size: usize,
    packs: usize,
}

impl<'u, T: Eq + Hash + Clone> PackDuplicateTrial<'u, T> {
    pub fn new(universe: &'u Universe<T>, pack_size: usize, packs: usize) -> Result<Self> {
        check_pack_size(universe, pack_size)?;
        if packs == 0 {
            return Err(SimulationError::InvalidPackCount);
        }
        Ok(Self {
            universe,
            pack_size,
            packs,
        })
    }
}

impl<'u, T: Eq + Hash + Clone> Trial for PackDuplicateTrial<'u, T> {
    type Outcome = bool;

    fn run<S: Sampler>(&self, sampler: &mut S) -> Result<bool> {
        let mut album = CollectionTracker::new();
        for _ in 0..self.packs {
            let pack = sampler.draw(self.universe, self.pack_size)?;
            if album.has_any_matches(&pack) {
                return Ok(true);
            }
            album.merge(&pack);
        }
        Ok(false)
    }
}
