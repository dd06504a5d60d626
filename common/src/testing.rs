//! Host-side test doubles for the draw target and the delay provider.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PointsIter, Rectangle};
use embedded_hal::delay::DelayNs;

use crate::colors::BLACK;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Panel-sized framebuffer that also logs every `fill_solid` call.
///
/// Pixels start black, like the panel after a reset.
pub struct RecordingDisplay {
    pixels: Vec<Rgb565>,
    fills: Vec<(Rectangle, Rgb565)>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            pixels: vec![BLACK; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
            fills: Vec::new(),
        }
    }

    /// Rectangles filled so far, in draw order, unclipped.
    pub fn fills(&self) -> &[(Rectangle, Rgb565)] { &self.fills }

    /// Forget the fill log, keeping the pixels.
    pub fn clear_log(&mut self) { self.fills.clear(); }

    pub fn pixel(
        &self,
        p: Point,
    ) -> Rgb565 {
        self.index(p).map_or(BLACK, |i| self.pixels[i])
    }

    /// Number of pixels that are not black.
    pub fn lit_pixels(&self) -> usize { self.pixels.iter().filter(|&&c| c != BLACK).count() }

    /// Whole-frame comparison.
    pub fn same_pixels(
        &self,
        other: &Self,
    ) -> bool {
        self.pixels == other.pixels
    }

    fn index(
        &self,
        p: Point,
    ) -> Option<usize> {
        let in_bounds = p.x >= 0 && p.y >= 0 && (p.x as u32) < SCREEN_WIDTH && (p.y as u32) < SCREEN_HEIGHT;
        in_bounds.then(|| p.y as usize * SCREEN_WIDTH as usize + p.x as usize)
    }
}

impl OriginDimensions for RecordingDisplay {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for RecordingDisplay {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.fills.push((*area, color));
        let visible = area.intersection(&self.bounding_box());
        for point in visible.points() {
            if let Some(i) = self.index(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }
}

/// Delay provider that returns immediately and records requested durations.
#[derive(Default)]
pub struct MockDelay {
    pub delays_ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(
        &mut self,
        _ns: u32,
    ) {
    }

    fn delay_ms(
        &mut self,
        ms: u32,
    ) {
        self.delays_ms.push(ms);
    }
}
