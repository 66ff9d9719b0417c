use anyhow::{ensure, Result};
use log::warn;
use paradoxes_core::{
    aggregate::{HitStatistics, MonteCarlo},
    config::BirthdaySettings,
    data,
    sampler::Sampler,
    trials::CohortTrial,
};
use std::io::{BufRead, Write};

use crate::{display::thousands, prompt::Console};

const INTRO: &str = "The Birthday Paradox shows us that in a group of N people, the odds
that at least two of them have the same birthday is surprisingly high. This
program runs a Monte Carlo simulation to explore this concept.

(It's not actually a paradox, it's just a surprising result.)
";

fn group_size<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &BirthdaySettings,
    size: Option<usize>,
) -> Result<usize> {
    let valid = settings.min_group..=settings.max_group;
    if let Some(size) = size {
        ensure!(
            valid.contains(&size),
            "group size must be between {} and {}, got {size}",
            settings.min_group,
            settings.max_group
        );
        return Ok(size);
    }

    Ok(console.ask_number(
        &[format!(
            "How many birthdays shall I generate? (Max {})",
            settings.max_group
        )
        .as_str()],
        valid,
        &format!(
            "Please enter a number between {} and {}.",
            settings.min_group, settings.max_group
        ),
    )?)
}

pub fn run<R, W, S>(
    console: &mut Console<R, W>,
    sampler: &mut S,
    settings: &BirthdaySettings,
    size: Option<usize>,
) -> Result<HitStatistics>
where
    R: BufRead,
    W: Write,
    S: Sampler,
{
    console.say(INTRO)?;
    let size = group_size(console, settings, size)?;
    let trial = CohortTrial::new(data::calendar(), size);

    let birthdays = trial.draw(sampler)?;
    console.say(format!("Here are {size} birthdays:"))?;
    for (i, birthday) in birthdays.iter().enumerate() {
        console.say(format!("Person {}: {birthday}", i + 1))?;
    }

    let duplicates = birthdays.duplicates();
    if duplicates.is_empty() {
        console.say("No shared birthdays in this group.")?;
    } else {
        console.say("Same birthday for multiple people on these dates:")?;
        for day in duplicates {
            console.say(day.to_string())?;
        }
    }

    let iterations = thousands(settings.iterations);
    console.say(format!(
        "Generating {size} random birthdays {iterations} times..."
    ))?;
    console.wait_for_enter()?;

    let stats = MonteCarlo::new(settings.iterations)?
        .with_progress(settings.progress_every, |i| {
            if let Err(e) = console.say(format!("{i} simulations run...")) {
                warn!("could not report progress: {e}");
            }
        })
        .run(&trial, sampler)?;

    console.say(format!("{iterations} simulations run."))?;
    console.say(format!(
        "{} simulations had at least one shared birthday.",
        stats.hits
    ))?;
    console.say(format!(
        "Probability of at least one shared birthday: {:.2}%",
        stats.hit_rate
    ))?;
    console.say("That's probably higher than you would expect!")?;

    Ok(stats)
}
