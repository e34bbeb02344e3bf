//! ringseed demo: prints the numbers derived from a draw history.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ringseed::game::{demo_history, history_from_json, LOTTO_MAX};
use ringseed::payload::engine_room;
use ringseed::{EngineConfig, SeedEngine};

/// ringseed: deterministic seed-to-numbers generator
#[derive(Parser, Debug)]
#[command(name = "ringseed")]
#[command(about = "Derive reproducible lottery numbers from a draw history")]
struct Args {
    /// Engine configuration file (JSON); built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Game variant to generate for
    #[arg(short, long, default_value = LOTTO_MAX)]
    game: String,

    /// Draw history file (JSON array); the 2025-08-16 reference draw when omitted
    #[arg(long)]
    history: Option<PathBuf>,

    /// Target draw date (YYYY-MM-DD)
    #[arg(short, long, default_value = "2025-08-21")]
    target: NaiveDate,

    /// Print the prediction as JSON
    #[arg(long)]
    json: bool,

    /// Report the status of the embedded payload
    #[arg(long)]
    engine_room: bool,
}

fn init_tracing() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .context("invalid log filter")?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing()?;

    let config = match &args.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    let engine = SeedEngine::from_config(&config)?;
    let game = config.game(&args.game)?;

    let history = match &args.history {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read history '{}'", path.display()))?;
            history_from_json(&json)?
        }
        None => demo_history(),
    };

    let prediction = engine.generate_numbers(&history, game, args.target)?;
    if args.json {
        println!("{}", serde_json::to_string(&prediction)?);
    } else {
        println!("Demo mains: {:?}", prediction.primaries);
        println!("Demo bonus: {}", prediction.bonus);
    }

    if args.engine_room {
        match engine_room() {
            Ok(artifact) => println!("Engine room: {} bytes sealed", artifact.len()),
            Err(e) => {
                warn!(error = %e, "Engine room unavailable");
                println!("Engine room: locked ({})", e);
            }
        }
    }

    Ok(())
}
