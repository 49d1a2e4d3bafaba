//! Report command: one team's shot profile for a season and game type

use super::shared::{CommandContext, check_season, print_json};
use crate::cli::args::{OutputFormat, ReportArgs};
use crate::cli::render;
use crate::query::{TeamReport, resolve_team};
use anyhow::{Result, bail};
use tracing::{debug, info};

pub fn run_report(args: &ReportArgs, context: &CommandContext) -> Result<()> {
    let dataset = context.store.current();
    let selection = &args.selection;
    check_season(selection.season);
    let team = resolve_team(&dataset, &args.team)?;
    debug!("Resolved '{}' to {} ({})", args.team, team.full_name(), team.id);

    let Some(report) = TeamReport::build(
        &dataset,
        team,
        selection.season,
        selection.game_type,
        &context.config,
    ) else {
        if dataset.is_missing(team.id, selection.season, selection.game_type) {
            info!("Fetch job recorded no data for this selection");
        }
        bail!(
            "No {} data for {} in {}",
            selection.game_type,
            team.full_name(),
            selection.season.label()
        );
    };

    match selection.output_format {
        OutputFormat::Human => println!("{}", render::report(&report)),
        OutputFormat::Json => print_json(&report)?,
    }
    Ok(())
}
