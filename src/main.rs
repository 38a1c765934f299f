//! CLI entry point for the maze generator and solver

use clap::Parser;
use mazegen::io::cli::{Cli, MazeProcessor};

fn main() -> mazegen::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut processor = MazeProcessor::new(cli);
    processor.process()
}
