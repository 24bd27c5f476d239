//! Location selection and lookup commands
//!
//! `select` walks the user through a numbered menu (by city fragment or by
//! state) and persists the choice; `locations` is the non-interactive lookup
//! for scripting and quick searches.

use anyhow::Context;
use colored::*;
use std::io::{self, Write};
use tracing::info;

use crate::app::models::LocationEntry;
use crate::app::services::data_source::DataSource;
use crate::app::services::location_index::LocationIndex;
use crate::cli::args::{LocationsArgs, OutputFormat, SelectArgs};
use crate::config::{Config, SavedLocation};

use super::shared::setup_logging;

/// Select command runner: choose a location interactively and save it
pub async fn run_select(args: SelectArgs) -> anyhow::Result<()> {
    setup_logging(args.get_log_level());

    let config = Config::resolve(args.cache_dir.clone())?;
    let source = DataSource::new(config.clone());
    let index = load_index(&source, args.refresh_locations).await?;

    let entry = if args.by_state {
        select_by_state(&index)?
    } else {
        select_by_city(&index)?
    };

    let saved = SavedLocation::from_entry(entry);
    saved.save(&config.saved_location_path())?;
    info!("saved location {} ({})", saved.name, saved.key);

    println!("Saved location: {}", saved.name.bright_cyan());
    Ok(())
}

/// Locations command runner: non-interactive lookup
pub async fn run_locations(args: LocationsArgs) -> anyhow::Result<()> {
    setup_logging(args.get_log_level());
    args.validate()?;

    let config = Config::resolve(args.cache_dir.clone())?;
    let source = DataSource::new(config);
    let index = load_index(&source, args.refresh_locations).await?;

    let entries: Vec<&LocationEntry> = match (&args.state, &args.search) {
        (Some(state), _) => index.lookup_state(state).iter().collect(),
        (None, Some(fragment)) => index.search_city(fragment),
        (None, None) => unreachable!("validate() requires a query"),
    };

    // Zero matches is an expected outcome of user search, not a failure
    if entries.is_empty() {
        println!("No locations matched.");
        return Ok(());
    }

    match args.output_format {
        OutputFormat::Human => print_entries(&entries),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&entries)
                .context("Failed to serialize location listing")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Build the location index from the (possibly cached) location list
pub async fn load_index(source: &DataSource, refresh: bool) -> anyhow::Result<LocationIndex> {
    let raw = source.location_list(refresh).await?;
    let index = LocationIndex::build(&raw).context("Location list could not be indexed")?;
    info!(
        "location index ready: {} locations in {} states",
        index.entry_count(),
        index.state_count()
    );
    Ok(index)
}

/// Prompt for a city fragment until at least one location matches, then
/// present the matches as a numbered menu
pub fn select_by_city(index: &LocationIndex) -> anyhow::Result<&LocationEntry> {
    loop {
        let city = prompt("Enter your city: ")?;
        let matches = index.search_city(city.trim());

        if matches.is_empty() {
            println!("No cities found!");
            continue;
        }

        return choose_from_menu(&matches);
    }
}

/// Prompt for a state until one matches, then present its locations as a
/// numbered menu in source order
pub fn select_by_state(index: &LocationIndex) -> anyhow::Result<&LocationEntry> {
    loop {
        let state = prompt("Enter your state: ")?;
        let entries = index.lookup_state(state.trim());

        if entries.is_empty() {
            println!("State not found!");
            continue;
        }

        let refs: Vec<&LocationEntry> = entries.iter().collect();
        return choose_from_menu(&refs);
    }
}

/// Present entries as a numbered menu and read a selection
fn choose_from_menu<'a>(entries: &[&'a LocationEntry]) -> anyhow::Result<&'a LocationEntry> {
    println!();
    for (i, entry) in entries.iter().enumerate() {
        println!(
            "  {}. {}",
            (i + 1).to_string().bright_yellow().bold(),
            entry.name.bright_cyan()
        );
    }
    println!();

    loop {
        let input = prompt("Enter your choice here: ")?;

        match input.trim().parse::<usize>() {
            Ok(choice) if choice >= 1 && choice <= entries.len() => {
                return Ok(entries[choice - 1]);
            }
            _ => println!("Invalid choice!"),
        }
    }
}

fn prompt(message: &str) -> anyhow::Result<String> {
    print!("{}", message.bright_white());
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read user input")?;

    Ok(input)
}

fn print_entries(entries: &[&LocationEntry]) {
    for (i, entry) in entries.iter().enumerate() {
        println!(
            "  {}. {} {}",
            (i + 1).to_string().bright_yellow().bold(),
            entry.name.bright_cyan(),
            format!("({})", entry.key).bright_black()
        );
    }
}
