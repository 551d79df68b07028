//! bb - baseball game simulator CLI
//!
//! `bb play` simulates one seeded game and prints the line score and box score.
//! `bb batch` runs many seeded games in parallel and prints aggregate rates.

mod batch;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use bb_core::{simulate_seeded, ModelConfig};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "bb")]
#[command(about = "Deterministic pitch-by-pitch baseball simulator", long_about = None)]
#[command(version)]
struct Cli {
    /// Log every plate appearance (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ModelArgs {
    /// JSON model config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Model preset: realistic, high_offense, pitchers_duel
    #[arg(long, conflicts_with = "config")]
    preset: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a single game
    Play {
        /// Game seed
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Print the full JSON game record instead of text
        #[arg(long, default_value = "false")]
        json: bool,

        /// Include play-by-play
        #[arg(long, default_value = "false")]
        plays: bool,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Simulate many games in parallel and report averages
    Batch {
        /// Number of games
        #[arg(long, default_value = "1000")]
        games: u64,

        /// Seed of the first game; game i uses seed + i
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Print the summary as JSON
        #[arg(long, default_value = "false")]
        json: bool,

        #[command(flatten)]
        model: ModelArgs,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "bb_core=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Ignore error if already set (e.g., during tests).
    let _ = fmt().with_env_filter(env_filter).with_writer(std::io::stderr).try_init();
}

fn load_config_file(path: &Path) -> Result<ModelConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    ModelConfig::from_json_str(&text)
        .with_context(|| format!("invalid config {}", path.display()))
}

fn resolve_model(args: &ModelArgs) -> Result<ModelConfig> {
    let config = match (&args.config, &args.preset) {
        (Some(path), _) => load_config_file(path)?,
        (None, Some(name)) => match ModelConfig::from_preset(name) {
            Some(cfg) => cfg,
            None => bail!("unknown preset '{name}' (expected realistic, high_offense, pitchers_duel)"),
        },
        (None, None) => ModelConfig::from_env_or_default(),
    };
    config.validate().context("model config rejected")?;
    Ok(config)
}

fn run_play(seed: u64, json: bool, plays: bool, config: ModelConfig) -> Result<()> {
    let game = simulate_seeded(config, seed).with_context(|| format!("game {seed} failed"))?;
    debug!(seed, plate_appearances = game.plays.len(), "game simulated");

    if json {
        println!("{}", serde_json::to_string_pretty(&game)?);
        return Ok(());
    }

    println!("{}", render::summary(&game));
    println!();
    print!("{}", render::line_score(&game));
    println!();
    print!("{}", render::box_score(&game));
    if plays {
        println!();
        print!("{}", render::play_by_play(&game.plays));
    }
    println!();
    println!("Digest: {}", game.digest()?);
    Ok(())
}

fn run_batch(games: u64, seed: u64, json: bool, config: ModelConfig) -> Result<()> {
    let summary = batch::run_batch(&config, games, seed).context("batch run failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Games:               {}", summary.games);
    println!("Runs/game:           {:.2}", summary.runs_per_game());
    println!("Home win rate:       {:.3}", summary.home_win_rate());
    println!("Extra-inning rate:   {:.3}", summary.extra_inning_rate());
    println!("Walk-off rate:       {:.3}", summary.walkoff_rate());
    println!("Skipped bottom 9th:  {:.3}", summary.skipped_bottom_rate());
    println!("Pitches/PA:          {:.2}", summary.pitches_per_pa());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play { seed, json, plays, model } => {
            let config = resolve_model(&model)?;
            run_play(seed, json, plays, config)
        }
        Commands::Batch { games, seed, json, model } => {
            let config = resolve_model(&model)?;
            run_batch(games, seed, json, config)
        }
    }
}
