//! Positions in the shared simulation plane.

use crate::math::sqrt;

/// A point in the simulation plane.
///
/// # Example
///
/// ```rust
/// use wavefield::Point2D;
///
/// let a = Point2D::new(3.0, 0.0);
/// let b = Point2D::new(0.0, 4.0);
/// assert_eq!(a.distance_to(b), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point2D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2D {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the origin (0, 0).
    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean distance to `other`.
    ///
    /// Computed as `sqrt(dx² + dy²)` rather than `hypot` so every caller
    /// rounds the same way.
    #[inline]
    pub fn distance_to(self, other: Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        sqrt(dx * dx + dy * dy)
    }
}

impl From<(f64, f64)> for Point2D {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A point source of circular waves.
///
/// Sources are plain positions. Their order matters: the source at index `i`
/// is shifted by `i` times the phase offset.
pub type WaveSource = Point2D;

/// Two sources placed symmetrically about the origin on the x axis.
///
/// Returns `[(-separation/2, 0), (separation/2, 0)]`.
///
/// ```rust
/// use wavefield::{symmetric_pair, Point2D};
///
/// let [left, right] = symmetric_pair(4.0);
/// assert_eq!(left, Point2D::new(-2.0, 0.0));
/// assert_eq!(right, Point2D::new(2.0, 0.0));
/// ```
#[inline]
pub fn symmetric_pair(separation: f64) -> [WaveSource; 2] {
    let half = separation / 2.0;
    [Point2D::new(-half, 0.0), Point2D::new(half, 0.0)]
}
