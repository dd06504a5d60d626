//! Segmented ring gauges: battery charge around the screen edge and speed
//! around the speed digits.
//!
//! # Incremental Updates
//!
//! A gauge remembers how many segments are lit. An update computes the new
//! count and paints only the segments whose state changed:
//!
//! | Transition | Painted |
//! |------------|---------|
//! | `current < target` | light `current..target` |
//! | `current > target` | clear `target..current`, top segment first |
//! | `redraw` | every segment, lit or cleared |
//!
//! The lit segments are therefore always the lowest-indexed prefix of the
//! geometry table.
//!
//! # Segment Shape
//!
//! Lighting a segment fills its whole cell. Clearing paints black over the
//! interior only (inset by 1 px), so an unlit segment keeps an outline in its
//! own hue. A redraw paints that outline first, since after a screen reset
//! there is nothing left to keep.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
// `round` is inherent only with std; the no_std build takes it from micromath
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::colors::{BLACK, SPEED_SEGMENT, battery_segment_color};
use crate::config::layout::{BATTERY_CELL_HEIGHT, BATTERY_CELL_WIDTH, SPEED_CELL_HEIGHT, SPEED_CELL_WIDTH};
use crate::widgets::primitives::fill_rect;

// =============================================================================
// Geometry Tables
// =============================================================================

/// Battery ring, bottom-left corner clockwise to bottom-right corner.
pub const BATTERY_CELLS: [Point; 35] = [
    // left column, bottom to top
    Point::new(0, 204),
    Point::new(0, 187),
    Point::new(0, 170),
    Point::new(0, 153),
    Point::new(0, 136),
    Point::new(0, 119),
    Point::new(0, 102),
    Point::new(0, 85),
    Point::new(0, 68),
    Point::new(0, 51),
    Point::new(0, 34),
    Point::new(0, 17),
    // top row, left to right
    Point::new(0, 0),
    Point::new(16, 0),
    Point::new(32, 0),
    Point::new(48, 0),
    Point::new(64, 0),
    Point::new(80, 0),
    Point::new(96, 0),
    Point::new(112, 0),
    Point::new(128, 0),
    Point::new(144, 0),
    Point::new(160, 0),
    // right column, top to bottom
    Point::new(160, 17),
    Point::new(160, 34),
    Point::new(160, 51),
    Point::new(160, 68),
    Point::new(160, 85),
    Point::new(160, 102),
    Point::new(160, 119),
    Point::new(160, 136),
    Point::new(160, 153),
    Point::new(160, 170),
    Point::new(160, 187),
    Point::new(160, 204),
];

/// Speed ring around the speed digits, bottom-center clockwise to bottom-center.
pub const SPEED_CELLS: [Point; 22] = [
    // bottom-left row, right to left
    Point::new(57, 151),
    Point::new(41, 151),
    Point::new(25, 151),
    // left column, bottom to top
    Point::new(25, 134),
    Point::new(25, 117),
    Point::new(25, 100),
    Point::new(25, 84),
    // top row, left to right
    Point::new(25, 66),
    Point::new(41, 66),
    Point::new(57, 66),
    Point::new(73, 66),
    Point::new(90, 66),
    Point::new(106, 66),
    Point::new(122, 66),
    Point::new(138, 66),
    // right column, top to bottom
    Point::new(138, 83),
    Point::new(138, 100),
    Point::new(138, 117),
    Point::new(138, 134),
    // bottom-right row, right to left
    Point::new(138, 151),
    Point::new(122, 151),
    Point::new(106, 151),
];

// =============================================================================
// Ring Gauge
// =============================================================================

/// How lit segments are colored.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SegmentPalette {
    /// Red-to-green gradient along the ring (battery).
    Gradient,
    /// One color for every segment (speed).
    Solid(Rgb565),
}

/// A ring of segments filled from index 0 upward.
#[derive(Clone, Debug)]
pub struct RingGauge {
    cells: &'static [Point],
    /// Inclusive extent of a lit cell from its corner.
    extent: Point,
    palette: SegmentPalette,
    filled: usize,
}

#[allow(clippy::len_without_is_empty)]
impl RingGauge {
    /// The 35-segment battery gauge around the screen edge.
    pub const fn battery() -> Self {
        Self {
            cells: &BATTERY_CELLS,
            extent: Point::new(BATTERY_CELL_WIDTH, BATTERY_CELL_HEIGHT),
            palette: SegmentPalette::Gradient,
            filled: 0,
        }
    }

    /// The 22-segment speed gauge around the speed digits.
    pub const fn speed() -> Self {
        Self {
            cells: &SPEED_CELLS,
            extent: Point::new(SPEED_CELL_WIDTH, SPEED_CELL_HEIGHT),
            palette: SegmentPalette::Solid(SPEED_SEGMENT),
            filled: 0,
        }
    }

    /// Number of segments in the ring.
    #[inline]
    pub const fn len(&self) -> usize { self.cells.len() }

    /// Number of currently lit segments.
    #[inline]
    pub const fn filled(&self) -> usize { self.filled }

    /// Segments to light for a fraction in `[0, 1]`, rounded to nearest.
    ///
    /// Out-of-range fractions are clamped to an empty or full ring.
    pub fn segments_for(
        &self,
        percent: f32,
    ) -> usize {
        let target = (percent * self.len() as f32).round();
        if target.is_nan() || target <= 0.0 {
            0
        } else if target >= self.len() as f32 {
            self.len()
        } else {
            target as usize
        }
    }

    /// Color of segment `index` when lit.
    pub fn segment_color(
        &self,
        index: usize,
    ) -> Rgb565 {
        match self.palette {
            SegmentPalette::Gradient => battery_segment_color(index, self.len()),
            SegmentPalette::Solid(color) => color,
        }
    }

    /// Show `percent` of the ring lit.
    ///
    /// With `redraw`, every segment is repainted (use after the screen was
    /// cleared); otherwise only segments that change state are painted.
    pub fn update<D>(
        &mut self,
        display: &mut D,
        percent: f32,
        redraw: bool,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        if !(0.0..=1.0).contains(&percent) {
            log_debug!("gauge fraction {} out of range, clamping", percent);
        }
        let target = self.segments_for(percent);

        if redraw {
            for index in 0..self.len() {
                self.draw_cell(display, index, index < target, true);
            }
        } else if target > self.filled {
            for index in self.filled..target {
                self.draw_cell(display, index, true, false);
            }
        } else {
            for index in (target..self.filled).rev() {
                self.draw_cell(display, index, false, false);
            }
        }

        self.filled = target;
    }

    fn draw_cell<D>(
        &self,
        display: &mut D,
        index: usize,
        lit: bool,
        redraw: bool,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let corner = self.cells[index];
        if lit || redraw {
            fill_rect(display, corner, corner + self.extent, self.segment_color(index));
        }
        if !lit {
            fill_rect(display, corner + Point::new(1, 1), corner + self.extent - Point::new(1, 1), BLACK);
        }
    }
}
