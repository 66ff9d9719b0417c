use serde::{Deserialize, Serialize};

use crate::{
    algo::{MAX_GUESSES, NUM_DIGITS},
    data,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BagelsSettings {
    /// Length of the secret, 1 to 10.
    pub num_digits: usize,
    pub max_guesses: usize,
    pub pace_ms: u64,
}

impl Default for BagelsSettings {
    fn default() -> Self {
        Self {
            num_digits: NUM_DIGITS,
            max_guesses: MAX_GUESSES,
            pace_ms: 50,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthdaySettings {
    pub min_group: usize,
    pub max_group: usize,
    pub iterations: usize,
    pub progress_every: usize,
    pub pace_ms: u64,
}

impl Default for BirthdaySettings {
    fn default() -> Self {
        Self {
            min_group: 1,
            max_group: 100,
            iterations: 100_000,
            progress_every: 10_000,
            pace_ms: 35,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StickerSettings {
    pub places: u16,
    pub pack_size: usize,
    /// Smallest pack count the prompt accepts.
    pub min_packs: usize,
    pub fill_iterations: usize,
    pub fill_progress_every: usize,
    pub duplicate_iterations: usize,
    pub duplicate_progress_every: usize,
    pub pace_ms: u64,
}

impl Default for StickerSettings {
    fn default() -> Self {
        Self {
            places: data::STICKER_PLACES,
            pack_size: data::STICKERS_PER_PACK,
            min_packs: 2,
            fill_iterations: 100,
            fill_progress_every: 10,
            duplicate_iterations: 100_000,
            duplicate_progress_every: 10_000,
            pace_ms: 30,
        }
    }
}

/// All tunables of the three programs. Missing fields fall back to defaults
/// when deserializing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bagels: BagelsSettings,
    pub birthday: BirthdaySettings,
    pub sticker: StickerSettings,
}
