//! Snapshot command: rank the regular-season league for a date and
//! optionally append it to the dataset's history

use super::shared::{CommandContext, print_json};
use crate::cli::args::{OutputFormat, SnapshotArgs};
use crate::cli::render;
use crate::history::build_snapshot;
use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use tracing::info;

pub async fn run_snapshot(args: &SnapshotArgs, context: &CommandContext) -> Result<()> {
    let dataset = context.store.current();
    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());

    let snapshot = build_snapshot(&dataset, args.season, date)
        .ok_or_else(|| anyhow!("No regular-season zone data for {}", args.season.label()))?;
    info!("Built snapshot for {} with {} teams", date, snapshot.teams.len());

    let recorded = if args.write {
        let mut updated = (*dataset).clone();
        let added = updated
            .history
            .record(snapshot.clone(), context.config.max_history_days);
        if added {
            updated
                .save(&context.dataset_path)
                .await
                .with_context(|| format!("Failed to write {}", context.dataset_path.display()))?;
            let reloaded = context.store.reload(&context.dataset_path).await?;
            info!(
                "History now holds {} snapshots",
                reloaded.history.snapshots.len()
            );
        }
        Some(added)
    } else {
        None
    };

    match args.output_format {
        OutputFormat::Human => println!("{}", render::snapshot(&snapshot, &dataset.teams, recorded)),
        OutputFormat::Json => print_json(&snapshot)?,
    }
    Ok(())
}
