use clap::Parser;
use shotmap::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // No subcommand: show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => match signal {
                Ok(()) => Err(anyhow::anyhow!("Interrupted by user")),
                Err(e) => Err(anyhow::Error::new(e).context("Failed to listen for CTRL+C")),
            },
        }
    });

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Shotmap - NHL Team Shot-Location Reports");
    println!("========================================");
    println!();
    println!("Where each team shoots from, how it ranks against the league or the");
    println!("playoff field, and what kind of attack that adds up to.");
    println!();
    println!("USAGE:");
    println!("    shotmap <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    report      Shot report for one team");
    println!("    league      Archetype of every team with data");
    println!("    snapshot    Build a daily rank snapshot for the history");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    --dataset <FILE>  Dataset JSON (default: public/nhl-data.json)");
    println!("    --config <FILE>   Configuration file (JSON)");
    println!("    -v, --verbose     Increase logging verbosity");
    println!("    -q, --quiet       Only log errors");
    println!("    -h, --help        Show help information");
    println!("    -V, --version     Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Ottawa's regular season report:");
    println!("    shotmap report --team OTT");
    println!();
    println!("    # Playoff report re-ranked over the playoff field, as JSON:");
    println!("    shotmap report --team Senators --season 20242025 --game-type playoffs --format json");
    println!();
    println!("    # Archetypes for the whole league:");
    println!("    shotmap league --season 20252026");
    println!();
    println!("    # Append today's rank snapshot to the dataset history:");
    println!("    shotmap snapshot --write");
    println!();
    println!("For detailed help on any command, use:");
    println!("    shotmap <COMMAND> --help");
}
