//! Command line parsing and the interactive generation driver
//!
//! The driver exercises the cooperative mode end to end: one engine step per
//! loop turn, with a separate seeded generator answering each randomness
//! request, the way an embedding UI would.

use crate::algorithm::executor::{Model, StepOutcome};
use crate::algorithm::selection::RandomPair;
use crate::io::catalog::{DemoTile, default_tile, demo_tiles};
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH};
use crate::io::error::Result;
use crate::io::image::export_grid_as_png;
use crate::io::progress::GenerationProgress;
use crate::spatial::grid::Grid;
use crate::spatial::tiles::TilesDefinition;
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Generate a socket-constrained tile grid from the built-in catalog
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Seed for the random generator
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Write the result as a PNG to this path instead of printing text
    #[arg(long)]
    pub output: Option<String>,
}

/// Run one full generation according to the parsed arguments
///
/// # Errors
///
/// Returns an error if the definition is rejected or the PNG export fails.
pub fn run(cli: &Cli) -> Result<()> {
    let definition = TilesDefinition {
        tiles: demo_tiles(),
        default_tile: default_tile(),
        width: cli.width,
        height: cli.height,
        seed: cli.seed,
    };

    let mut model = Model::init(definition)?;
    let mut rng = StdRng::seed_from_u64(cli.seed);
    let progress = GenerationProgress::new(cli.width * cli.height);

    loop {
        match model.step() {
            StepOutcome::Advanced => progress.set_fixed(model.fixed_count()),
            StepOutcome::Complete => break,
            StepOutcome::NeedsRandom(request) => {
                let pair = RandomPair {
                    position: rng.random(),
                    tile: rng.random(),
                };
                model.resume_with_random(request, pair)?;
                if model.pending_steps() == 0 {
                    // Contradiction: nothing left to place, run stalls
                    break;
                }
            }
        }
    }
    progress.finish(model.is_solved());

    let rendered = model.render();
    match &cli.output {
        Some(path) => export_grid_as_png(&rendered, path),
        None => {
            print_text(&rendered);
            Ok(())
        }
    }
}

/// Print the rendered grid as one glyph per cell
#[allow(clippy::print_stdout)]
fn print_text(grid: &Grid<DemoTile>) {
    for row in grid.rows() {
        let line: String = row.iter().map(|tile| tile.glyph).collect();
        println!("{line}");
    }
}
