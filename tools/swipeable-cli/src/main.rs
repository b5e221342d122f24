//! Swipeable CLI: replay recorded pointer streams through the gesture tracker.
//!
//! Usage:
//!   swipeable replay <PATH>      Recognize gestures in a recorded stream
//!   swipeable config             Show the effective configuration
//!   swipeable init-config        Write a default configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use swipeable_common::config::{AppConfig, TrackerConfig};

mod commands;

#[derive(Parser)]
#[command(
    name = "swipeable",
    about = "Swipe, flick, and tap recognition for pointer event streams",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to the standard location)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded JSONL pointer stream and print recognized gestures
    Replay {
        /// Path to the events file
        path: PathBuf,

        #[command(flatten)]
        overrides: TrackerOverrides,

        /// Also print per-move swiping callbacks
        #[arg(long)]
        all: bool,

        /// Write recognized gestures to a JSONL file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the effective configuration
    Config {
        #[command(flatten)]
        overrides: TrackerOverrides,
    },

    /// Write a default configuration file
    InitConfig {
        /// Destination (defaults to the standard location)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Command-line overrides for tracker options.
#[derive(Args, Debug, Default)]
pub struct TrackerOverrides {
    /// Minimum movement in pixels before a gesture counts as a swipe
    #[arg(long)]
    delta: Option<f64>,

    /// Velocity (px/ms) above which a swipe is a flick
    #[arg(long)]
    flick_threshold: Option<f64>,

    /// Rotate the coordinate frame by this many degrees
    #[arg(long)]
    rotation: Option<f64>,

    /// Prevent default handling of cancelable move events
    #[arg(long)]
    prevent_default: bool,

    /// Stop propagation of handled events
    #[arg(long)]
    stop_propagation: bool,
}

impl TrackerOverrides {
    pub fn apply(&self, config: &mut TrackerConfig) {
        if let Some(delta) = self.delta {
            config.delta = delta;
        }
        if let Some(threshold) = self.flick_threshold {
            config.flick_threshold = threshold;
        }
        if let Some(angle) = self.rotation {
            config.rotation_angle = angle;
        }
        config.prevent_default_touchmove_event |= self.prevent_default;
        config.stop_propagation |= self.stop_propagation;
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // init-config may target a file that doesn't exist yet.
    let mut config = match (&cli.command, &cli.config) {
        (Commands::InitConfig { .. }, _) => AppConfig::default(),
        (_, Some(path)) => AppConfig::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {e}", path.display()))?,
        (_, None) => AppConfig::load()?,
    };

    // Initialize logging
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    swipeable_common::logging::init_logging(&config.logging);

    match cli.command {
        Commands::Replay {
            path,
            overrides,
            all,
            output,
        } => {
            overrides.apply(&mut config.tracker);
            commands::replay::run(path, &config.tracker, all, output)
        }
        Commands::Config { overrides } => {
            overrides.apply(&mut config.tracker);
            commands::config::run(&config)
        }
        Commands::InitConfig { path, force } => {
            commands::init_config::run(path.or(cli.config), force)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_replay_overrides() {
        let cli = Cli::try_parse_from([
            "swipeable",
            "replay",
            "events.jsonl",
            "--delta",
            "25",
            "--rotation",
            "90",
            "--prevent-default",
        ])
        .unwrap();

        let Commands::Replay {
            path, overrides, ..
        } = cli.command
        else {
            panic!("expected replay command");
        };
        assert_eq!(path, PathBuf::from("events.jsonl"));

        let mut config = TrackerConfig::default();
        overrides.apply(&mut config);
        assert_eq!(config.delta, 25.0);
        assert_eq!(config.rotation_angle, 90.0);
        assert_eq!(config.flick_threshold, 0.6);
        assert!(config.prevent_default_touchmove_event);
        assert!(!config.stop_propagation);
    }

    #[test]
    fn test_overrides_keep_config_flags() {
        let mut config = TrackerConfig {
            stop_propagation: true,
            ..Default::default()
        };
        TrackerOverrides::default().apply(&mut config);
        assert!(config.stop_propagation);
    }
}
