use std::sync::OnceLock;

use crate::structs::{Day, Sticker, Universe};

pub const STICKER_PLACES: u16 = 728;
pub const STICKERS_PER_PACK: usize = 6;

/// Every day of a common year, January 1 first.
pub fn calendar() -> &'static Universe<Day> {
    static CALENDAR: OnceLock<Universe<Day>> = OnceLock::new();
    CALENDAR.get_or_init(|| Day::all().collect())
}

/// The ten decimal digits.
pub fn digits() -> &'static Universe<u8> {
    static DIGITS: OnceLock<Universe<u8>> = OnceLock::new();
    DIGITS.get_or_init(|| (0..10).collect())
}

pub fn sticker_album(places: u16) -> Universe<Sticker> {
    (0..places).collect()
}

/// The album with the default number of places.
pub fn stickers() -> &'static Universe<Sticker> {
    static STICKERS: OnceLock<Universe<Sticker>> = OnceLock::new();
    STICKERS.get_or_init(|| sticker_album(STICKER_PLACES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universes_have_expected_sizes() {
        assert_eq!(calendar().len(), 365);
        assert_eq!(digits().len(), 10);
        assert_eq!(stickers().len(), 728);
        assert_eq!(sticker_album(12).len(), 12);
    }
}
