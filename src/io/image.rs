//! PNG export of a rendered demo grid, one colour block per tile

use crate::io::catalog::DemoTile;
use crate::io::configuration::TILE_PIXEL_SIZE;
use crate::io::error::{EngineError, Result};
use crate::spatial::grid::Grid;
use image::{ImageBuffer, Rgba};
use std::path::Path;

/// Export a rendered demo grid as a PNG
///
/// Each tile becomes a [`TILE_PIXEL_SIZE`]-sided square of its catalog
/// colour. Parent directories are created as needed.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved to `output_path`.
pub fn export_grid_as_png(grid: &Grid<DemoTile>, output_path: &str) -> Result<()> {
    let width = grid.width() as u32 * TILE_PIXEL_SIZE;
    let height = grid.height() as u32 * TILE_PIXEL_SIZE;
    let mut img = ImageBuffer::new(width, height);

    for (pos, tile) in grid.indexed_cells() {
        let [r, g, b, a] = tile.color;
        for dy in 0..TILE_PIXEL_SIZE {
            for dx in 0..TILE_PIXEL_SIZE {
                let x = pos[0] as u32 * TILE_PIXEL_SIZE + dx;
                let y = pos[1] as u32 * TILE_PIXEL_SIZE + dy;
                img.put_pixel(x, y, Rgba([r, g, b, a]));
            }
        }
    }

    if let Some(parent) = Path::new(output_path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| EngineError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| EngineError::ImageExport {
        path: output_path.into(),
        source: e,
    })?;

    Ok(())
}
