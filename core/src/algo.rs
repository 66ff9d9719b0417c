use log::debug;

use crate::{
    data,
    error::{Result, SimulationError},
    sampler::Sampler,
    structs::{Clue, Clues, DigitsN},
};

pub const NUM_DIGITS: usize = 3;
pub const MAX_GUESSES: usize = 10;

pub fn get_clues<const N: usize>(secret: &DigitsN<N>, guess: &DigitsN<N>) -> Clues {
    let mut clues = Vec::with_capacity(N);
    for i in 0..N {
        if guess.0[i] == secret.0[i] {
            clues.push(Clue::Fermi)
        } else if secret.contains(guess.0[i]) {
            clues.push(Clue::Pico)
        }
    }

    if clues.is_empty() {
        return Clues::bagels();
    }

    clues.sort();
    Clues(clues)
}

/// `N` distinct digits, fails when `N` is more than ten.
pub fn get_secret<S: Sampler, const N: usize>(sampler: &mut S) -> Result<DigitsN<N>> {
    let sample = sampler.draw(data::digits(), N)?;
    let mut secret = [0; N];
    secret.copy_from_slice(&sample.0);
    Ok(DigitsN(secret))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { guesses: usize },
    Lost,
}

#[derive(Debug, Clone)]
pub struct Game<const N: usize> {
    secret: DigitsN<N>,
    max_guesses: usize,
    guesses_taken: usize,
    status: GameStatus,
}

impl<const N: usize> Game<N> {
    /// Fails with `InvalidGuessLimit` when `max_guesses` is zero.
    pub fn new(secret: DigitsN<N>, max_guesses: usize) -> Result<Self> {
        if max_guesses == 0 {
            return Err(SimulationError::InvalidGuessLimit);
        }
        Ok(Self {
            secret,
            max_guesses,
            guesses_taken: 0,
            status: GameStatus::InProgress,
        })
    }

    pub fn start<S: Sampler>(sampler: &mut S, max_guesses: usize) -> Result<Self> {
        if max_guesses == 0 {
            return Err(SimulationError::InvalidGuessLimit);
        }
        let secret = get_secret(sampler)?;
        debug!("new game with {max_guesses} guesses");
        Self::new(secret, max_guesses)
    }

    pub fn secret(&self) -> &DigitsN<N> {
        &self.secret
    }

    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    pub fn guesses_taken(&self) -> usize {
        self.guesses_taken
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Scores a guess. Once the game is over the status no longer changes.
    pub fn guess(&mut self, guess: &DigitsN<N>) -> (Clues, GameStatus) {
        let clues = get_clues(&self.secret, guess);
        if self.is_over() {
            return (clues, self.status);
        }

        self.guesses_taken += 1;
        self.status = if *guess == self.secret {
            GameStatus::Won {
                guesses: self.guesses_taken,
            }
        } else if self.guesses_taken >= self.max_guesses {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        (clues, self.status)
    }
}
