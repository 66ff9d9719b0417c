use anyhow::{bail, ensure, Result};
use log::{debug, info};
use paradoxes_core::{
    algo::{Game, GameStatus},
    config::BagelsSettings,
    sampler::Sampler,
    structs::DigitsN,
};
use serde::Serialize;
use std::io::{BufRead, Write};

use crate::prompt::Console;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BagelsReport {
    pub games: usize,
    pub wins: usize,
}

fn intro(num_digits: usize) -> String {
    format!(
        "Bagels, a deductive logic game.
I am thinking of a {num_digits}-digit number with no repeated digits.
Try to guess what it is. Here are some clues:
When I say:    That means:
  Pico         One digit is correct but in the wrong position.
  Fermi        One digit is correct and in the right position.
  Bagels       No digit is correct.

For example, if the secret number was 248 and your guess was 843, the clues would be Fermi Pico.
"
    )
}

fn read_guess<const N: usize, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    number: usize,
) -> Result<DigitsN<N>> {
    loop {
        console.say(format!("Guess #{number}."))?;
        let line = console.read_line()?;
        match DigitsN::<N>::try_from(line.trim()) {
            Ok(guess) => return Ok(guess),
            Err(e) => debug!("{e}"),
        }
    }
}

pub fn run<R, W, S>(
    console: &mut Console<R, W>,
    sampler: &mut S,
    settings: &BagelsSettings,
) -> Result<BagelsReport>
where
    R: BufRead,
    W: Write,
    S: Sampler,
{
    ensure!(
        settings.max_guesses > 0,
        "Bagels needs at least one guess per game"
    );

    match settings.num_digits {
        1 => play::<1, _, _, _>(console, sampler, settings),
        2 => play::<2, _, _, _>(console, sampler, settings),
        3 => play::<3, _, _, _>(console, sampler, settings),
        4 => play::<4, _, _, _>(console, sampler, settings),
        5 => play::<5, _, _, _>(console, sampler, settings),
        6 => play::<6, _, _, _>(console, sampler, settings),
        7 => play::<7, _, _, _>(console, sampler, settings),
        8 => play::<8, _, _, _>(console, sampler, settings),
        9 => play::<9, _, _, _>(console, sampler, settings),
        10 => play::<10, _, _, _>(console, sampler, settings),
        n => bail!("Bagels secrets have 1 to 10 digits, got {n}"),
    }
}

fn play<const N: usize, R, W, S>(
    console: &mut Console<R, W>,
    sampler: &mut S,
    settings: &BagelsSettings,
) -> Result<BagelsReport>
where
    R: BufRead,
    W: Write,
    S: Sampler,
{
    let mut report = BagelsReport::default();
    console.say(intro(N))?;

    loop {
        let mut game = Game::<N>::start(sampler, settings.max_guesses)?;
        report.games += 1;

        console.say(format!(
            "I have thought up a number. You have {} guesses to get it.",
            game.max_guesses()
        ))?;

        while !game.is_over() {
            let guess = read_guess::<N, _, _>(console, game.guesses_taken() + 1)?;
            let (clues, status) = game.guess(&guess);
            console.say(clues.to_string())?;

            match status {
                GameStatus::Won { guesses } => {
                    report.wins += 1;
                    console.say(format!("You got it in {guesses} guesses!"))?;
                }
                GameStatus::Lost => console.say(format!(
                    "You ran out of guesses. The answer was {}.",
                    game.secret()
                ))?,
                GameStatus::InProgress => (),
            }
        }

        if !console.confirm("Do you want to play again? (y or n)")? {
            break;
        }
    }

    console.say("Thanks for playing!")?;
    info!("played {} games, won {}", report.games, report.wins);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::tests::{output, scripted};
    use paradoxes_core::{
        algo::{get_secret, NUM_DIGITS},
        sampler::UniformSampler,
    };
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    type Digits = DigitsN<NUM_DIGITS>;

    fn sampler() -> UniformSampler<StdRng> {
        UniformSampler::new(StdRng::seed_from_u64(248))
    }

    fn upcoming_secret(sampler: &UniformSampler<StdRng>) -> Digits {
        get_secret(&mut sampler.clone()).unwrap()
    }

    #[test]
    fn winning_game_after_bad_input() {
        let mut sampler = sampler();
        let secret = upcoming_secret(&sampler);
        let mut console = scripted(&format!("12\nabc\n{secret}\nn\n"));

        let report = run(&mut console, &mut sampler, &BagelsSettings::default()).unwrap();
        assert_eq!(report, BagelsReport { games: 1, wins: 1 });

        let out = output(console);
        assert_eq!(out.matches("Guess #1.").count(), 3);
        assert!(out.contains("You got it in 1 guesses!"));
        assert!(out.ends_with("Thanks for playing!\n"));
    }

    #[test]
    fn losing_game_reveals_secret() {
        let mut sampler = sampler();
        let secret = upcoming_secret(&sampler);
        // Secrets never repeat a digit.
        let wrong = "999";
        let settings = BagelsSettings {
            max_guesses: 2,
            ..BagelsSettings::default()
        };
        let mut console = scripted(&format!("{wrong}\n{wrong}\nno\n"));

        let report = run(&mut console, &mut sampler, &settings).unwrap();
        assert_eq!(report, BagelsReport { games: 1, wins: 0 });
        assert!(output(console).contains(&format!("The answer was {secret}.")));
    }

    #[test]
    fn four_digit_secret() {
        let mut sampler = sampler();
        let secret: DigitsN<4> = get_secret(&mut sampler.clone()).unwrap();
        let settings = BagelsSettings {
            num_digits: 4,
            ..BagelsSettings::default()
        };
        let mut console = scripted(&format!("123\n{secret}\nn\n"));

        let report = run(&mut console, &mut sampler, &settings).unwrap();
        assert_eq!(report, BagelsReport { games: 1, wins: 1 });

        let out = output(console);
        assert!(out.contains("I am thinking of a 4-digit number"));
        assert_eq!(out.matches("Guess #1.").count(), 2);
        assert!(out.contains("You got it in 1 guesses!"));
    }

    #[rstest]
    #[case(0, 10)]
    #[case(11, 10)]
    #[case(3, 0)]
    fn unplayable_settings_are_rejected(#[case] num_digits: usize, #[case] max_guesses: usize) {
        let settings = BagelsSettings {
            num_digits,
            max_guesses,
            ..BagelsSettings::default()
        };
        let mut console = scripted("123\n");
        assert!(run(&mut console, &mut sampler(), &settings).is_err());
        assert!(!output(console).contains("Guess #1."));
    }
}
