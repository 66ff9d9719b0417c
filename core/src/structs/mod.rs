pub mod calendar;
pub mod clues;
pub mod collection;
pub mod digits;
pub mod sample;
pub mod universe;

pub use calendar::{Day, Month};
pub use clues::{Clue, Clues};
pub use collection::{AlbumState, CollectionTracker, PackReport};
pub use digits::{DigitsN, GuessError};
pub use sample::Sample;
pub use universe::Universe;

/// Sticker identifier within an album.
pub type Sticker = u16;
