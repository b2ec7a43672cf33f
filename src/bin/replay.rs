use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};

use connect_four::config::AppConfig;
use connect_four::game::{Game, Outcome};
use connect_four::replay::replay;

/// Replay a sequence of Connect Four moves and report the outcome.
#[derive(Parser)]
#[command(name = "replay", about = "Replay Connect Four moves and report the outcome")]
struct Cli {
    /// Columns to drop into, in turn order, starting with player 1
    columns: Vec<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Record rejected moves instead of failing on them
    #[arg(long)]
    lenient: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or(&config.logging.level)).init();
    if !cli.config.exists() {
        info!("no config at {}, using defaults", cli.config.display());
    }

    // Apply CLI overrides
    if cli.lenient {
        config.replay.strict = false;
    }
    debug!("replay config: {:?}", config.replay);

    let mut game = Game::new();
    let transcript = replay(&mut game, &cli.columns, &config.replay)
        .context("replaying moves")?;

    for record in transcript.moves() {
        match record.row {
            Some(row) => println!(
                "{:>3}. {} -> column {}, row {}: {}",
                record.index + 1,
                record.player,
                record.column,
                row,
                record.result
            ),
            None => println!(
                "{:>3}. {} -> column {}: {}",
                record.index + 1,
                record.player,
                record.column,
                record.result
            ),
        }
    }

    match transcript.outcome() {
        Some(Outcome::Winner(player)) => {
            println!("{player} won!");
            if let Some(line) = game.winning_line(player) {
                println!("Winning line: {line:?}");
            }
        }
        Some(Outcome::Tie) => println!("Tie!"),
        None => println!("In progress, {} to move", game.active_player()),
    }

    Ok(())
}
