//! League command: archetype of every team with data for a selection

use super::shared::{CommandContext, check_season, print_json};
use crate::cli::args::{LeagueArgs, OutputFormat};
use crate::cli::render;
use crate::query::league_archetypes;
use anyhow::Result;
use tracing::{info, warn};

pub fn run_league(args: &LeagueArgs, context: &CommandContext) -> Result<()> {
    let dataset = context.store.current();
    let selection = &args.selection;
    check_season(selection.season);

    let entries = league_archetypes(&dataset, selection.season, selection.game_type, &context.config);
    if entries.is_empty() {
        warn!(
            "No teams have {} data for {}",
            selection.game_type, selection.season
        );
    } else {
        info!("Classified {} teams", entries.len());
    }

    match selection.output_format {
        OutputFormat::Human => {
            let title = format!("{} {}", selection.season.label(), selection.game_type);
            println!("{}", render::league(&entries, &title));
        }
        OutputFormat::Json => print_json(&entries)?,
    }
    Ok(())
}
