//! Occupancy-grid rasterizer.
//!
//! Classifies each source pixel of a traversability bitmap: pure white
//! (R=255, G=255, B=255, alpha ignored) is free space, everything else is
//! an obstacle. The rule is an exact match with no tolerance band, so
//! anti-aliased or near-white pixels classify as obstacles; maps are
//! expected to be drawn with hard edges.

use std::path::Path;

use atlas_types::AtlasError;
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use tracing::info;

/// A discretized 2-D traversability map.
///
/// Cells are stored row-major, top row first; `true` marks an obstacle.
/// Invariant: `cells.len() == width * height` with `width, height ≥ 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyGrid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Build a grid from raw cells.
    ///
    /// # Errors
    ///
    /// Returns [`AtlasError::InvalidDimension`] if either extent is zero or
    /// `cells.len()` does not equal `width * height`.
    pub fn new(width: u32, height: u32, cells: Vec<bool>) -> Result<Self, AtlasError> {
        if width == 0 || height == 0 {
            return Err(AtlasError::InvalidDimension(
                "grid extent must be at least 1x1".to_string(),
            ));
        }
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(AtlasError::InvalidDimension(format!(
                "expected {} cells for a {}x{} grid, got {}",
                expected,
                width,
                height,
                cells.len()
            )));
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Rasterize a bitmap into a grid at the source resolution.
    ///
    /// # Errors
    ///
    /// Returns [`AtlasError::MapLoad`] if the file cannot be read or
    /// decoded, or the decoded image has zero extent.
    pub fn from_image<P: AsRef<Path>>(path: P) -> Result<Self, AtlasError> {
        Self::from_image_supersampled(path, 1)
    }

    /// Rasterize a bitmap, replicating each pixel's classification into a
    /// `factor` × `factor` block of output cells.
    ///
    /// The output is `width · factor` by `height · factor`. Color data is
    /// not interpolated or subdivided: every replica carries the single
    /// source pixel's coarse classification.
    ///
    /// # Errors
    ///
    /// Returns [`AtlasError::InvalidDimension`] if `factor` is zero, and
    /// [`AtlasError::MapLoad`] for unreadable, undecodable, or zero-extent
    /// images.
    pub fn from_image_supersampled<P: AsRef<Path>>(
        path: P,
        factor: u32,
    ) -> Result<Self, AtlasError> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|e| {
                AtlasError::MapLoad(format!("failed to decode {}: {}", path.display(), e))
            })?
            .into_rgba8();

        let grid = Self::from_image_buffer(&img, factor)?;
        info!(
            path = %path.display(),
            width = grid.width,
            height = grid.height,
            factor,
            "loaded traversability map"
        );
        Ok(grid)
    }

    /// Classify an already-decoded image buffer.
    ///
    /// This is the pure core of the rasterizer; the file-path entry points
    /// decode and delegate here. Iteration order is source row, then row
    /// replica, then source column, then column replica.
    ///
    /// # Errors
    ///
    /// Returns [`AtlasError::InvalidDimension`] if `factor` is zero and
    /// [`AtlasError::MapLoad`] if the buffer has zero extent.
    pub fn from_image_buffer(img: &RgbaImage, factor: u32) -> Result<Self, AtlasError> {
        if factor == 0 {
            return Err(AtlasError::InvalidDimension(
                "super-sampling factor must be at least 1".to_string(),
            ));
        }
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(AtlasError::MapLoad("image has zero extent".to_string()));
        }

        let out_width = width * factor;
        let out_height = height * factor;
        let mut cells = Vec::with_capacity(out_width as usize * out_height as usize);
        for y in 0..height {
            for _row_replica in 0..factor {
                for x in 0..width {
                    let [r, g, b, _] = img.get_pixel(x, y).0;
                    let free = r == 255 && g == 255 && b == 255;
                    for _col_replica in 0..factor {
                        cells.push(!free);
                    }
                }
            }
        }

        Ok(Self {
            width: out_width,
            height: out_height,
            cells,
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The cells, row-major, top row first.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// True when the cell at `(x, y)` is blocked.
    ///
    /// Coordinates outside the grid count as blocked.
    pub fn is_obstacle(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return true;
        }
        self.cells[(y * self.width + x) as usize]
    }
}
