#[cfg(feature = "terminal")]
use colored::Colorize;
use core::fmt;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::str::FromStr;

/// Declared in alphabetical order, so sorting clues hides their positions.
#[derive(
    Copy, Clone, Debug, SerializeDisplay, DeserializeFromStr, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum Clue {
    Bagels,
    Fermi,
    Pico,
}

impl FromStr for Clue {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bagels" => Ok(Clue::Bagels),
            "fermi" => Ok(Clue::Fermi),
            "pico" => Ok(Clue::Pico),
            _ => Err("Unknown clue"),
        }
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Clue::Bagels => "Bagels",
            Clue::Fermi => "Fermi",
            Clue::Pico => "Pico",
        };

        write!(f, "{word}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Clues(pub Vec<Clue>);

impl Clues {
    pub fn bagels() -> Self {
        Self(vec![Clue::Bagels])
    }

    pub fn all_fermi(n: usize) -> Self {
        Self(vec![Clue::Fermi; n])
    }
}

impl FromStr for Clues {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(Clue::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

#[cfg(feature = "terminal")]
impl fmt::Display for Clues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &clue) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let word = clue.to_string();
            let word = match clue {
                Clue::Bagels => word.as_str().red(),
                Clue::Pico => word.as_str().yellow(),
                Clue::Fermi => word.as_str().green(),
            };

            write!(f, "{}", word)?;
        }
        Ok(())
    }
}

#[cfg(not(feature = "terminal"))]
impl fmt::Display for Clues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clue) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{clue}")?;
        }
        Ok(())
    }
}
