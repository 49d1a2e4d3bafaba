//! Terminal rendering of reports
//!
//! Human output uses `colored`; JSON output serialises the query types
//! directly.

use crate::archetype::ZoneRatios;
use crate::models::{Metric, Position, RankSnapshot, Team};
use crate::query::{Direction, LeagueEntry, MetricLine, RankTier, TeamReport, VsAverage};
use colored::{ColoredString, Colorize};
use std::fmt::Write;

/// Render a team report for the terminal
pub fn report(report: &TeamReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {} {}",
        report.team.full_name().as_str().bright_cyan().bold(),
        format!("({})", report.team.abbr).as_str().dimmed(),
        format!("{} {}", report.season_label, report.game_type)
            .as_str()
            .bright_white()
    );
    let pool = format!("Ranked within a pool of {} teams", report.pool_size);
    let _ = writeln!(out, "{}", pool.as_str().dimmed());
    let _ = writeln!(out);

    match &report.archetype {
        Some(archetype) => {
            let _ = writeln!(out, "{}", archetype.to_string().as_str().bright_green().bold());
            let _ = writeln!(out, "  {}", archetype.explanation);
        }
        None => {
            let _ = writeln!(out, "{}", "No archetype: not enough shot data".yellow());
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", "Totals".bold());
    for line in &report.totals {
        let label = position_label(line.position);
        let _ = writeln!(out, "  {:<9} {}", label, metric_cells(&line.metrics));
    }
    let _ = writeln!(out);

    if let Some(ratios) = &report.ratios {
        let _ = writeln!(out, "{}", "Shot profile".bold());
        for (name, value) in ratio_rows(ratios) {
            let _ = writeln!(out, "  {:<16} {:>5.1}%", name, value * 100.0);
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "{}", "Zones".bold());
    for zone in &report.zones {
        let _ = writeln!(out, "  {:<20} {}", zone.area, metric_cells(&zone.metrics));
    }

    if let Some(leaders) = &report.leaders {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "Leaders".bold());
        let rows = [("Shots", &leaders.shots), ("Goals", &leaders.goals), ("Sh%", &leaders.pctg)];
        for (title, leader) in rows {
            if let Some(leader) = leader {
                let name = match &leader.first_name {
                    Some(first) => format!("{} {}", first, leader.name),
                    None => leader.name.clone(),
                };
                let _ = writeln!(out, "  {:<6} {} ({})", title, name, leader.val);
            }
        }
    }

    let _ = writeln!(out);
    let _ = write!(
        out,
        "{}",
        format!("Data fetched {}", report.fetched_at.format("%Y-%m-%d %H:%M UTC"))
            .as_str()
            .dimmed()
    );
    out
}

/// Render the league archetype table
pub fn league(entries: &[LeagueEntry], title: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title.bright_cyan().bold());

    if entries.is_empty() {
        let _ = write!(out, "{}", "No teams have data for this selection".yellow());
        return out;
    }

    for entry in entries {
        let rank = match entry.sog_rank {
            Some(rank) if rank > 0 => {
                tier_colored(&format!("#{:<2}", rank), RankTier::from_rank(rank, entry.pool_size))
            }
            _ => "  -".dimmed(),
        };
        let archetype = entry
            .archetype
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string());
        let abbr = format!("{:<4}", entry.team.abbr);
        let _ = writeln!(out, "  {} {} {}", abbr.as_str().bold(), rank, archetype);
    }
    out
}

/// Render a rank snapshot summary
pub fn snapshot(snapshot: &RankSnapshot, teams: &[Team], recorded: Option<bool>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        format!("Rank snapshot for {}", snapshot.date)
            .as_str()
            .bright_cyan()
            .bold()
    );

    for team in teams {
        let Some(ranks) = snapshot.teams.get(&team.id) else {
            continue;
        };
        let rank = |r: Option<u32>| r.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "  {} F sog {:>3}  D sog {:>3}  F goals {:>3}  D goals {:>3}  {} zones",
            format!("{:<4}", team.abbr).as_str().bold(),
            rank(ranks.fwd_sog_rank),
            rank(ranks.def_sog_rank),
            rank(ranks.fwd_goal_rank),
            rank(ranks.def_goal_rank),
            ranks.zone_ranks.len()
        );
    }

    match recorded {
        Some(true) => {
            let _ = write!(out, "{}", "Snapshot added to history".bright_green());
        }
        Some(false) => {
            let _ = write!(out, "{}", "History already has a snapshot for this date".yellow());
        }
        None => {}
    }
    out
}

fn position_label(position: Position) -> &'static str {
    match position {
        Position::All => "All",
        Position::Forwards => "Forwards",
        Position::Defense => "Defense",
    }
}

fn metric_cells(lines: &[MetricLine]) -> String {
    lines
        .iter()
        .map(metric_cell)
        .collect::<Vec<_>>()
        .join("  ")
}

fn metric_cell(line: &MetricLine) -> String {
    let value = match line.metric {
        Metric::ShootingPctg => format!("{:>5.1}%", line.value * 100.0),
        Metric::Sog | Metric::Goals => format!("{:>6}", line.value),
    };
    let rank = if line.rank == 0 {
        "  -".dimmed()
    } else {
        tier_colored(&format!("#{:<2}", line.rank), line.tier)
    };
    let average = line.vs_average.map(vs_average_cell).unwrap_or_default();
    format!("{} {} {}{}", metric_name(line.metric), value, rank, average)
}

fn metric_name(metric: Metric) -> &'static str {
    match metric {
        Metric::Sog => "SOG",
        Metric::Goals => "G",
        Metric::ShootingPctg => "Sh%",
    }
}

fn vs_average_cell(vs: VsAverage) -> String {
    let text = format!(" ({:+.0}% vs avg)", vs.pct_diff);
    match vs.direction {
        Direction::Above => text.as_str().green().to_string(),
        Direction::Below => text.as_str().red().to_string(),
        Direction::Even => text.as_str().dimmed().to_string(),
    }
}

fn tier_colored(text: &str, tier: Option<RankTier>) -> ColoredString {
    match tier {
        Some(RankTier::Top15) => text.bright_green().bold(),
        Some(RankTier::Top33) => text.green(),
        Some(RankTier::Middle) => text.normal(),
        Some(RankTier::Bottom) => text.red(),
        None => text.dimmed(),
    }
}

fn ratio_rows(ratios: &ZoneRatios) -> Vec<(&'static str, f64)> {
    let mut rows = vec![
        ("High danger", ratios.high_danger),
        ("Net front", ratios.net_front),
        ("Crease", ratios.crease_rate),
        ("Low slot", ratios.low_slot_rate),
        ("Slot", ratios.slot_share),
        ("Circles", ratios.circle_share),
        ("Point", ratios.point_share),
        ("Corners", ratios.corner_share),
        ("Perimeter", ratios.perimeter_share),
    ];
    if let Some(def_ratio) = ratios.def_ratio {
        rows.push(("Defense share", def_ratio));
    }
    rows
}
