use anyhow::Result;
use clap::Parser;

use backgammon_review::{args::Args, logging::init_logging, ui::run_ui};

fn main() -> Result<()> {
    let args = Args::parse();

    let log_dir = args.log_dir()?;
    let _guard = init_logging(&log_dir, &args.log_level)?;

    tracing::info!(log_dir = %log_dir.display(), seed = ?args.seed, "Starting backgammon-review");

    run_ui(args.seed, args.recent)
}
