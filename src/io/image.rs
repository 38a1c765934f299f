//! Rendering of grid states to RGBA images and PNG export

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage, imageops::FilterType};

use crate::io::configuration::{
    BACKTRACKED_COLOR, CURSOR_COLOR, PASSAGE_COLOR, PATH_COLOR, WALL_COLOR,
};
use crate::io::error::{MazeError, Result};
use crate::spatial::{CellType, Coord, Grid};

/// RGBA colour per cell state, plus the cursor highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Wall cells
    pub wall: [u8; 4],
    /// Open corridor cells
    pub passage: [u8; 4],
    /// Cells on the solver's route
    pub path: [u8; 4],
    /// Cells the solver abandoned
    pub backtracked: [u8; 4],
    /// Highlight overriding the colour of the cursor cell
    pub cursor: [u8; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wall: WALL_COLOR,
            passage: PASSAGE_COLOR,
            path: PATH_COLOR,
            backtracked: BACKTRACKED_COLOR,
            cursor: CURSOR_COLOR,
        }
    }
}

impl Palette {
    /// Colour of a cell state
    pub const fn color_of(&self, cell_type: CellType) -> [u8; 4] {
        match cell_type {
            CellType::Wall => self.wall,
            CellType::Passage => self.passage,
            CellType::Path => self.path,
            CellType::Backtracked => self.backtracked,
        }
    }
}

/// Render a grid with one pixel per cell
///
/// Pure function of the grid state. The cursor cell, when given and inside
/// the grid, is drawn in the highlight colour.
pub fn render(grid: &Grid, cursor: Option<Coord>, palette: &Palette) -> RgbaImage {
    let mut img = ImageBuffer::new(grid.width() as u32, grid.height() as u32);

    for cell in grid.cells() {
        let color = palette.color_of(cell.cell_type);
        img.put_pixel(cell.x() as u32, cell.y() as u32, Rgba(color));
    }

    if let Some(at) = cursor.filter(|&at| grid.contains(at)) {
        img.put_pixel(at.x as u32, at.y as u32, Rgba(palette.cursor));
    }

    img
}

/// Render a freshly carved maze with the entrance highlighted
pub fn render_unsolved(grid: &Grid, palette: &Palette) -> RgbaImage {
    render(grid, Some(grid.entrance()), palette)
}

/// Enlarge an image so every cell covers `factor` by `factor` pixels
///
/// Uses nearest-neighbour sampling so cell edges stay crisp.
pub fn scale_image(img: &RgbaImage, factor: u32) -> RgbaImage {
    if factor <= 1 {
        return img.clone();
    }

    image::imageops::resize(
        img,
        img.width() * factor,
        img.height() * factor,
        FilterType::Nearest,
    )
}

/// Save an image as PNG, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| MazeError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
