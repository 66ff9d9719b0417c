mod bagels;
mod birthday;
mod display;
mod prompt;
mod settings;
mod sticker;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};
use paradoxes_core::{config::Settings, sampler::UniformSampler};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::{
    io::{self, Write},
    path::PathBuf,
};

use display::Pacer;
use prompt::Console;

#[derive(Parser)]
#[command(name = "paradoxes")]
#[command(version, about = "Bagels and two probability paradoxes, simulated")]
struct Cli {
    /// Seed for the random number generator
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// JSON settings file; missing fields keep their defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Delay between printed words, in milliseconds
    #[arg(long, global = true)]
    pace_ms: Option<u64>,

    /// Print the final statistics as JSON
    #[arg(long, global = true)]
    json: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone, Copy, Debug)]
enum Command {
    /// Guess the secret number from Pico, Fermi and Bagels clues
    Bagels {
        /// Length of the secret number, 1 to 10
        #[arg(short, long)]
        digits: Option<usize>,
        #[arg(long)]
        max_guesses: Option<usize>,
    },
    /// Estimate the chance of a shared birthday in a group
    Birthday {
        /// Group size; asked for when missing
        #[arg(short = 'n', long)]
        size: Option<usize>,
        /// Number of simulated groups
        #[arg(short, long)]
        iterations: Option<usize>,
    },
    /// Open sticker packs and estimate how soon they repeat
    Sticker {
        /// Packs to open; asked for when missing
        #[arg(short, long)]
        packs: Option<usize>,
        /// Number of simulated album fills
        #[arg(long)]
        fill_iterations: Option<usize>,
        /// Number of simulated pack openings
        #[arg(short, long)]
        iterations: Option<usize>,
    },
}

impl Cli {
    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// Command line flags win over the settings file.
    fn apply(&self, settings: &mut Settings) {
        if let Some(pace_ms) = self.pace_ms {
            settings.bagels.pace_ms = pace_ms;
            settings.birthday.pace_ms = pace_ms;
            settings.sticker.pace_ms = pace_ms;
        }

        match self.command {
            Command::Bagels {
                digits,
                max_guesses,
            } => {
                if let Some(digits) = digits {
                    settings.bagels.num_digits = digits;
                }
                if let Some(max_guesses) = max_guesses {
                    settings.bagels.max_guesses = max_guesses;
                }
            }
            Command::Birthday { iterations, .. } => {
                if let Some(iterations) = iterations {
                    settings.birthday.iterations = iterations;
                }
            }
            Command::Sticker {
                fill_iterations,
                iterations,
                ..
            } => {
                if let Some(fill_iterations) = fill_iterations {
                    settings.sticker.fill_iterations = fill_iterations;
                }
                if let Some(iterations) = iterations {
                    settings.sticker.duplicate_iterations = iterations;
                }
            }
        }
    }
}

/// Word delay of the program picked on the command line.
fn pacer(command: Command, settings: &Settings) -> Pacer {
    Pacer::from_millis(match command {
        Command::Bagels { .. } => settings.bagels.pace_ms,
        Command::Birthday { .. } => settings.birthday.pace_ms,
        Command::Sticker { .. } => settings.sticker.pace_ms,
    })
}

fn print_json<T: Serialize>(report: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level())).init();

    let mut settings = settings::load(cli.config.as_deref())?;
    cli.apply(&mut settings);
    debug!("{settings:?}");

    let rng = match cli.seed {
        Some(seed) => {
            info!("seeding with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut sampler = UniformSampler::new(rng);
    let mut console = Console::new(
        io::stdin().lock(),
        io::stdout().lock(),
        pacer(cli.command, &settings),
    );

    match cli.command {
        Command::Bagels { .. } => {
            let report = bagels::run(&mut console, &mut sampler, &settings.bagels)?;
            drop(console);
            if cli.json {
                print_json(&report)?;
            }
        }
        Command::Birthday { size, .. } => {
            let report = birthday::run(&mut console, &mut sampler, &settings.birthday, size)?;
            drop(console);
            if cli.json {
                print_json(&report)?;
            }
        }
        Command::Sticker { packs, .. } => {
            let report = sticker::run(&mut console, &mut sampler, &settings.sticker, packs)?;
            drop(console);
            if cli.json {
                print_json(&report)?;
            }
        }
    }

    Ok(())
}
