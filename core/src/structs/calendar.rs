use core::fmt;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(
    Copy, Clone, Debug, Display, EnumIter, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Length in a common (non-leap) year.
    pub fn days(self) -> u8 {
        match self {
            Month::February => 28,
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }
}

/// A birthday: a day of a common year.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day {
    pub month: Month,
    pub day: u8,
}

impl Day {
    pub fn all() -> impl Iterator<Item = Day> {
        Month::iter().flat_map(|month| (1..=month.days()).map(move |day| Day { month, day }))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_year_has_365_days() {
        assert_eq!(Day::all().count(), 365);
    }

    #[test]
    fn days_are_in_calendar_order() {
        let days = Day::all().collect::<Vec<_>>();
        assert!(days.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(days[0].to_string(), "January 1");
        assert_eq!(days[59].to_string(), "March 1");
        assert_eq!(days[364].to_string(), "December 31");
    }
}
