//! Behaviour Simulation CLI
//!
//! Closed-loop run of the walk / kick / dribble task against a scripted
//! motion executor, plus config inspection.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bh_core::{BehaviourConfig, SimConfig, Simulation};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bh_sim")]
#[command(about = "Run and inspect the tick-driven behaviour engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the closed-loop simulation
    Run {
        /// Behaviour config file (.yaml/.yml/.json)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Frames to simulate
        #[arg(long, default_value_t = 600)]
        frames: u64,

        /// Seed for the ball model
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Frames motion spends lining up
        #[arg(long, default_value_t = 10)]
        lineup_frames: u32,

        /// Frames motion spends kicking or dribbling
        #[arg(long, default_value_t = 20)]
        action_frames: u32,

        /// Per-frame chance of losing the ball (0.0-1.0)
        #[arg(long, default_value_t = 0.05)]
        dropout: f64,

        /// Write a JSON-lines trace here
        #[arg(long)]
        trace: Option<PathBuf>,
    },

    /// Print the effective behaviour config as YAML
    Config {
        /// Behaviour config file (.yaml/.yml/.json)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&Path>) -> Result<BehaviourConfig> {
    let mut cfg = match path {
        Some(path) => BehaviourConfig::load(path)
            .with_context(|| format!("loading behaviour config {}", path.display()))?,
        None => BehaviourConfig::default(),
    };
    cfg.apply_env_overrides().context("applying environment overrides")?;
    Ok(cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, frames, seed, lineup_frames, action_frames, dropout, trace } => {
            let behaviour = load_config(config.as_deref())?;
            let sim = SimConfig {
                frames,
                seed,
                lineup_frames,
                action_frames,
                dropout,
                ..SimConfig::default()
            };

            println!("🤖 Running behaviour simulation...");
            println!(
                "   Frames:     {} ({:.1}s at {} Hz)",
                frames,
                frames as f32 / behaviour.frame_rate_hz as f32,
                behaviour.frame_rate_hz
            );
            println!(
                "   Warm-up:    {} frames ({:.1}s)",
                behaviour.walk_phase_frames,
                behaviour.walk_phase_secs()
            );
            println!("   Seed:       {}", seed);

            info!(
                frames,
                seed,
                lineup_frames,
                action_frames,
                dropout,
                walk_phase_frames = behaviour.walk_phase_frames,
                "starting closed-loop run"
            );
            let outcome = Simulation::new(behaviour, &sim)?.run();
            info!(
                kicks = outcome.summary.kicks_completed,
                dribbles = outcome.summary.dribbles_completed,
                motion_actions = outcome.motion_actions,
                "run finished"
            );

            println!();
            println!("{}", outcome.summary);
            println!("motion performed:   {}", outcome.motion_actions);

            if let Some(path) = trace {
                let lines = outcome.trace.to_json_lines()?;
                std::fs::write(&path, lines)
                    .with_context(|| format!("writing trace {}", path.display()))?;
                info!(path = %path.display(), ticks = outcome.trace.len(), "trace written");
                println!("📝 Trace: {} ({} ticks)", path.display(), outcome.trace.len());
            }
        }

        Commands::Config { config } => {
            let cfg = load_config(config.as_deref())?;
            print!("{}", cfg.to_yaml_string()?);
        }
    }

    Ok(())
}
