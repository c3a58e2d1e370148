//! Round peg adapter CLI - Main Entry Point

use anyhow::Result;
use clap::Parser;

mod cli;
mod peg_spec;

fn main() -> Result<()> {
    env_logger::init();
    let cli = cli::Cli::parse();
    cli::run(cli)
}
