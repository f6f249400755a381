//! Surface deformation driver.
//!
//! Samples the total displacement at every vertex of a square plane. Only
//! the total is used; per-source components are never computed here.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::frame::FrameSnapshot;

/// Side length of the default plane, in world units.
pub const DEFAULT_SIZE: f64 = 30.0;
/// Default number of segments per side.
pub const DEFAULT_SEGMENTS: usize = 300;
/// Largest number of segments per side a grid will use.
pub const MAX_SEGMENTS: usize = 4096;

/// A square plane split into `segments × segments` cells, centered on the
/// origin.
///
/// Vertices are stored row-major. Row 0 lies at `y = +size/2`, column 0 at
/// `x = -size/2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGrid {
    size: f64,
    segments: usize,
}

impl Default for SurfaceGrid {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SEGMENTS)
    }
}

impl SurfaceGrid {
    /// Creates a grid with `segments` clamped to `[1, MAX_SEGMENTS]`.
    pub fn new(size: f64, segments: usize) -> Self {
        Self {
            size,
            segments: segments.clamp(1, MAX_SEGMENTS),
        }
    }

    /// Side length of the plane.
    pub const fn size(&self) -> f64 {
        self.size
    }

    /// Segments per side.
    pub const fn segments(&self) -> usize {
        self.segments
    }

    /// Vertices per side (`segments + 1`).
    pub const fn vertices_per_side(&self) -> usize {
        self.segments + 1
    }

    /// Plane x coordinate of column `col`.
    pub fn x(&self, col: usize) -> f64 {
        let step = self.size / self.segments as f64;
        col as f64 * step - self.size / 2.0
    }

    /// Plane y coordinate of row `row`.
    pub fn y(&self, row: usize) -> f64 {
        let step = self.size / self.segments as f64;
        -(row as f64 * step - self.size / 2.0)
    }

    /// Evaluates the field at every vertex for one frame.
    pub fn sample(&self, frame: &FrameSnapshot) -> Surface {
        let n = self.vertices_per_side();
        let mut heights = vec![0.0; n * n];

        let fill_row = |(row, chunk): (usize, &mut [f64])| {
            let y = self.y(row);
            for (col, z) in chunk.iter_mut().enumerate() {
                *z = frame.total(self.x(col), y);
            }
        };

        #[cfg(feature = "parallel")]
        heights.par_chunks_mut(n).enumerate().for_each(fill_row);
        #[cfg(not(feature = "parallel"))]
        heights.chunks_mut(n).enumerate().for_each(fill_row);

        debug!(
            vertices = n * n,
            time = frame.time(),
            "sampled surface"
        );

        Surface {
            grid: *self,
            heights,
        }
    }
}

/// Heights of every grid vertex for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    grid: SurfaceGrid,
    heights: Vec<f64>,
}

impl Surface {
    /// The grid these heights were sampled on.
    pub const fn grid(&self) -> &SurfaceGrid {
        &self.grid
    }

    /// Row-major heights.
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// Height at `(col, row)`, or `None` outside the grid.
    pub fn height_at(&self, col: usize, row: usize) -> Option<f64> {
        let n = self.grid.vertices_per_side();
        if col >= n || row >= n {
            return None;
        }
        self.heights.get(row * n + col).copied()
    }

    /// `(x, y, z)` of the displaced vertex at `(col, row)`.
    pub fn vertex(&self, col: usize, row: usize) -> Option<(f64, f64, f64)> {
        self.height_at(col, row)
            .map(|z| (self.grid.x(col), self.grid.y(row), z))
    }

    /// Iterates over all displaced vertices in storage order.
    pub fn vertices(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        let n = self.grid.vertices_per_side();
        self.heights
            .iter()
            .enumerate()
            .map(move |(i, &z)| (self.grid.x(i % n), self.grid.y(i / n), z))
    }

    /// Minimum, maximum and mean height.
    ///
    /// NaN heights are skipped by min/max but poison the mean.
    pub fn stats(&self) -> SurfaceStats {
        let (min, max, sum) = self.heights.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), &z| (min.min(z), max.max(z), sum + z),
        );
        SurfaceStats {
            vertices: self.heights.len(),
            min,
            max,
            mean: sum / self.heights.len() as f64,
        }
    }
}

/// Summary of a sampled surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceStats {
    pub vertices: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}
