//! Text rendering of a cross-section.
//!
//! Uses the same [`CanvasMapping`] a pixel canvas would, with one character
//! cell per pixel.

use crate::cross_section::{CanvasMapping, Profile};

const AXIS: char = '-';
const SOURCE_1: char = '.';
const SOURCE_2: char = '+';
const COMPOSITE: char = '#';

/// Character-grid plot of a [`Profile`].
///
/// ```rust
/// use ripple::{Controls, CrossSection, FrameSnapshot, TextPlot};
///
/// let frame = FrameSnapshot::capture(&Controls::default(), 0.0);
/// let profile = CrossSection::new(0.0).sample(&frame);
/// let text = TextPlot::new(60, 11).render(&profile, 1.0);
/// assert_eq!(text.lines().count(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPlot {
    width: usize,
    height: usize,
}

impl Default for TextPlot {
    fn default() -> Self {
        Self::new(80, 21)
    }
}

impl TextPlot {
    /// A plot of `width × height` cells, each at least 2.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.max(2),
            height: height.max(2),
        }
    }

    /// Mapping from samples to cells. `envelope` is the displacement that
    /// reaches the top row.
    pub fn mapping(&self, steps: usize, envelope: f64) -> CanvasMapping {
        let half = (self.height - 1) as f64 / 2.0;
        let y_scale = if envelope > 0.0 { half / envelope } else { half };
        CanvasMapping::new((self.width - 1) as f64, (self.height - 1) as f64, steps)
            .with_y_scale(y_scale)
    }

    /// Draws the axis, both source curves and the composite, in that order.
    pub fn render(&self, profile: &Profile, envelope: f64) -> String {
        let steps = profile.samples().len().saturating_sub(1);
        let mapping = self.mapping(steps, envelope);
        let mut grid = vec![vec![' '; self.width]; self.height];

        if let Some(row) = self.cell(mapping.canvas_y(0.0)) {
            grid[row].fill(AXIS);
        }

        let curves = [
            (profile.source_curve(0), SOURCE_1),
            (profile.source_curve(1), SOURCE_2),
            (profile.composite_curve(), COMPOSITE),
        ];
        for (curve, mark) in &curves {
            for (i, value) in curve.iter().enumerate() {
                let col = self.column(mapping.canvas_x(i));
                let row = self.cell(mapping.canvas_y(*value));
                if let (Some(col), Some(row)) = (col, row) {
                    grid[row][col] = *mark;
                }
            }
        }

        let mut out = String::with_capacity((self.width + 1) * self.height);
        for line in grid {
            out.extend(line);
            out.push('\n');
        }
        out
    }

    fn column(&self, x: f64) -> Option<usize> {
        to_index(x, self.width)
    }

    fn cell(&self, y: f64) -> Option<usize> {
        to_index(y, self.height)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_index(coord: f64, len: usize) -> Option<usize> {
    let rounded = coord.round();
    if !rounded.is_finite() || rounded < 0.0 || rounded >= len as f64 {
        return None;
    }
    Some(rounded as usize)
}
