//! CLI entry point for socket-constrained tile grid generation

use clap::Parser;
use wavegrid::io::cli::{self, Cli};

fn main() -> wavegrid::Result<()> {
    let args = Cli::parse();
    cli::run(&args)
}
