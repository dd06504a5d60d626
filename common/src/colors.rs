//! Color constants and color rules for the dashboard.
//!
//! The panel runs in Rgb565. Colors that the layout specifies as 8-bit RGB
//! triplets go through [`rgb`], which drops the low bits of each channel the
//! same way a 565 panel driver packs a color, so the constants below can stay
//! written as the 8-bit triplets they were designed in.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Background, cleared segments and erased glyph cells.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Numbers and labels.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Dashboard Colors
// =============================================================================

/// Lit speed gauge segment, RGB(150, 150, 255).
pub const SPEED_SEGMENT: Rgb565 = rgb(150, 150, 255);

/// Read indicator after a successful telemetry poll, RGB(0, 150, 0).
pub const READ_SUCCESS: Rgb565 = rgb(0, 150, 0);

/// Read indicator after a failed telemetry poll, RGB(150, 0, 0).
pub const READ_FAILURE: Rgb565 = rgb(150, 0, 0);

/// Warning banner background, RGB(150, 0, 0).
pub const WARNING_BG: Rgb565 = rgb(150, 0, 0);

/// Pack an 8-bit-per-channel color into Rgb565.
#[inline]
pub const fn rgb(
    r: u8,
    g: u8,
    b: u8,
) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

/// Hue of battery segment `index` out of `count`.
///
/// Green grows linearly with the index and red is its complement, so the first
/// segment is pure red and the last pure green. The hue depends only on the
/// index, never on the fill state.
pub fn battery_segment_color(
    index: usize,
    count: usize,
) -> Rgb565 {
    let green = if count > 1 {
        (255.0 / (count - 1) as f32 * index as f32) as u8
    } else {
        255
    };
    let red = 255 - green;
    rgb(red, green, 0)
}

/// Gray that fades from white (`progress = 0`) to black (`progress = 1`).
///
/// Used while an accumulator is being reset: the number stays on screen and
/// darkens as the caller's hold gesture progresses.
pub fn fade_to_black(progress: f32) -> Rgb565 {
    let brightness = (255.0 * (1.0 - progress)) as u8;
    rgb(brightness, brightness, brightness)
}
