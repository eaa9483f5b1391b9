//! CLI entry point for the sliding-tile merging puzzle

use clap::Parser;
use mergegrid::io::cli::{Cli, GameRunner};

fn main() -> mergegrid::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let runner = GameRunner::new(cli);
    runner.run()
}
