use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::history::DEFAULT_RECENT_MOVES;

#[derive(Parser, Debug)]
#[command(name = "backgammon-review", about = "Hot-seat backgammon with move review")]
pub struct Args {
    /// Directory for log files [default: platform data dir]
    #[arg(long, value_name = "PATH")]
    pub log_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info", value_name = "FILTER")]
    pub log_level: String,

    /// Seed for the dice, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of entries shown in the recent moves panel
    #[arg(long, default_value_t = DEFAULT_RECENT_MOVES)]
    pub recent: usize,
}

impl Args {
    /// Resolve and create the log directory.
    pub fn log_dir(&self) -> Result<PathBuf> {
        let path = match &self.log_dir {
            Some(dir) => dir.clone(),
            None => {
                let mut path = dirs::data_dir()
                    .context("Unable to determine data directory for your platform")?;
                path.push("backgammon-review");
                path.push("logs");
                path
            }
        };

        std::fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create log directory {}", path.display()))?;

        Ok(path)
    }
}
