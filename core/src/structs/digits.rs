use core::fmt;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("Expected {expected_length} digits. Found \"{guess}\" of length {}", guess.chars().count())]
    IncorrectLength {
        guess: String,
        expected_length: usize,
    },
    #[error("Guess \"{guess}\" contains '{found}', which is not a digit")]
    NotADigit { guess: String, found: char },
}

/// A fixed-length run of decimal digits: a Bagels secret or a guess.
#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitsN<const N: usize>(#[serde_as(as = "[_; N]")] pub [u8; N]);

impl<const N: usize> DigitsN<N> {
    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }
}

impl<const N: usize> fmt::Display for DigitsN<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0.iter() {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl<const N: usize> TryFrom<&str> for DigitsN<N> {
    type Error = GuessError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let incorrect_length = || GuessError::IncorrectLength {
            guess: value.to_string(),
            expected_length: N,
        };

        if value.chars().count() != N {
            return Err(incorrect_length());
        }

        let array = value
            .chars()
            .map(|c| match c {
                '0'..='9' => Ok(c as u8 - b'0'),
                _ => Err(GuessError::NotADigit {
                    guess: value.to_string(),
                    found: c,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?
            .try_into()
            .map_err(|_: Vec<_>| incorrect_length())?;

        Ok(Self(array))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Digits = DigitsN<3>;

    #[rstest]
    #[case("123", [1, 2, 3])]
    #[case("007", [0, 0, 7])]
    fn parses_digits(#[case] input: &str, #[case] expected: [u8; 3]) {
        let digits: Digits = input.try_into().unwrap();
        assert_eq!(digits, DigitsN(expected));
        assert_eq!(digits.to_string(), input);
    }

    #[rstest]
    #[case("12")]
    #[case("1234")]
    #[case("")]
    #[case("12a4")]
    fn rejects_wrong_length(#[case] input: &str) {
        assert!(matches!(
            Digits::try_from(input),
            Err(GuessError::IncorrectLength { .. })
        ));
    }

    #[rstest]
    #[case("12a", 'a')]
    #[case(" 12", ' ')]
    #[case("1٣2", '٣')]
    fn rejects_non_digits(#[case] input: &str, #[case] found: char) {
        assert_eq!(
            Digits::try_from(input),
            Err(GuessError::NotADigit {
                guess: input.to_string(),
                found
            })
        );
    }
}
