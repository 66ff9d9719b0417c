use anyhow::{ensure, Result};
use log::{info, warn};
use paradoxes_core::{
    aggregate::{AlbumStatistics, HitStatistics, MonteCarlo},
    config::StickerSettings,
    data,
    sampler::Sampler,
    structs::{CollectionTracker, Sticker, Universe},
    trials::{AlbumFillTrial, PackDuplicateTrial},
};
use serde::Serialize;
use std::io::{BufRead, Write};

use crate::{display::thousands, prompt::Console};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StickerReport {
    pub packs: usize,
    pub album_fill: AlbumStatistics,
    pub pack_duplicates: HitStatistics,
}

fn intro(pack_size: usize) -> String {
    format!(
        "The Sticker Paradox shows us that in a package of {pack_size} stickers, the odds
that at least one of them will already be in your collection is surprisingly high.
This program runs a Monte Carlo simulation to explore this concept.

(It's not actually a paradox, it's just a surprising result.)
"
    )
}

fn pack_count<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &StickerSettings,
    packs: Option<usize>,
) -> Result<usize> {
    let retry = format!(
        "Please enter a number greater than {}.",
        settings.min_packs.saturating_sub(1)
    );
    if let Some(packs) = packs {
        ensure!(packs >= settings.min_packs, "{retry} Got {packs}.");
        return Ok(packs);
    }

    Ok(console.ask_number(
        &[
            "How many sticker packs shall I generate?",
            "(Numbers larger than 15 can take a while.)",
        ],
        settings.min_packs..=usize::MAX,
        &retry,
    )?)
}

/// Opens `packs` packs one by one, telling the player about every repeat.
fn open_packs<R, W, S>(
    console: &mut Console<R, W>,
    sampler: &mut S,
    stickers: &Universe<Sticker>,
    settings: &StickerSettings,
    packs: usize,
) -> Result<CollectionTracker<Sticker>>
where
    R: BufRead,
    W: Write,
    S: Sampler,
{
    let mut album = CollectionTracker::new();
    for i in 1..=packs {
        let pack = sampler.draw(stickers, settings.pack_size)?;
        let report = album.open(&pack);
        if report.had_duplicates() {
            console.say(format!("Pack {i} contains a sticker you already have!"))?;
            for sticker in report.already_had {
                console.say(format!("Sticker {sticker} is already in your collection."))?;
            }
        } else {
            console.say(format!("Pack {i} contains all new stickers!"))?;
        }
    }
    Ok(album)
}

pub fn run<R, W, S>(
    console: &mut Console<R, W>,
    sampler: &mut S,
    settings: &StickerSettings,
    packs: Option<usize>,
) -> Result<StickerReport>
where
    R: BufRead,
    W: Write,
    S: Sampler,
{
    let stickers = data::sticker_album(settings.places);
    let fill = AlbumFillTrial::new(&stickers, settings.pack_size)?;

    console.say(intro(settings.pack_size))?;
    let packs = pack_count(console, settings, packs)?;
    let duplicates = PackDuplicateTrial::new(&stickers, settings.pack_size, packs)?;

    let mut album = open_packs(console, sampler, &stickers, settings, packs)?;
    console.say("All packs have been opened.")?;
    console.say(format!(
        "You have {} unique stickers in your collection.",
        album.size()
    ))?;
    console.say("Here are the stickers you have:")?;
    let owned = album
        .sorted_items()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    console.print(format!("{{{}}}\n", owned.join(", ")))?;
    console.say(format!(
        "You need {} more stickers to complete your collection.",
        album.missing(stickers.len())
    ))?;

    console.say("Now let's see how many more packs you need to complete your collection.")?;
    let rest = fill.complete(&mut album, sampler)?;
    info!("album completed after {} more packs", rest.packs_to_complete);
    console.say(format!(
        "\n\nYou need {} more packs to complete your collection.",
        rest.packs_to_complete
    ))?;

    console.say(
        "\n\nLet's also run a Monte Carlo simulation to see how many packs
you would need on average to complete your collection.",
    )?;
    console.say(
        "\nDuring each simulation, we will also calculate how many packs you would need
on average to find your first duplicate sticker.",
    )?;
    console.say("(This will take a while...)")?;
    console.wait_for_enter()?;

    let album_fill = MonteCarlo::new(settings.fill_iterations)?
        .with_progress(settings.fill_progress_every, |i| {
            if let Err(e) = console.say(format!("{i} simulations run...")) {
                warn!("could not report progress: {e}");
            }
        })
        .run(&fill, sampler)?;

    console.say(format!(
        "On average, you would need to open {:.2} packs to complete your collection.",
        album_fill.completion.mean
    ))?;
    match album_fill.first_duplicate {
        Some(first) => console.say(format!(
            "During each simulation, you would need to open {:.2} packs to find your first duplicate sticker.",
            first.mean
        ))?,
        None => console.say("No simulation found a duplicate sticker before the album was full.")?,
    }
    console.say("These are probably higher than you would expect!")?;

    console.say(format!(
        "\n\nLet's also run a Monte Carlo simulation to see what the probability is
that you will find a duplicate sticker if you start with {packs} packs."
    ))?;
    console.say("(This will take a while...)")?;
    console.wait_for_enter()?;

    let pack_duplicates = MonteCarlo::new(settings.duplicate_iterations)?
        .with_progress(settings.duplicate_progress_every, |i| {
            if let Err(e) = console.say(format!("{i} simulations run...")) {
                warn!("could not report progress: {e}");
            }
        })
        .run(&duplicates, sampler)?;

    console.say(format!(
        "{} of {} simulations had at least one shared sticker.",
        pack_duplicates.hits,
        thousands(pack_duplicates.iterations)
    ))?;
    console.say(format!(
        "Probability of at least one duplicate sticker when starting with {packs} packs: {:.2}%",
        pack_duplicates.hit_rate
    ))?;
    console.say("That's probably higher than you would expect!")?;

    Ok(StickerReport {
        packs,
        album_fill,
        pack_duplicates,
    })
}
