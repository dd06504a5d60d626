//! Read indicator and warning banner.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_hal::delay::DelayNs;

use crate::colors::{BLACK, WARNING_BG};
use crate::config::layout::{READ_INDICATOR, WARNING_BANNER, WARNING_TEXT_POS};
use crate::styles::WARNING_STYLE;
use crate::widgets::primitives::{draw_text, fill_region};

/// Light the read indicator in `color`, hold it for `duration_ms`, then
/// blank it.
///
/// Blocks the caller for the whole pulse.
pub fn pulse_read_indicator<D, Dl>(
    display: &mut D,
    delay: &mut Dl,
    color: Rgb565,
    duration_ms: u32,
) where
    D: DrawTarget<Color = Rgb565>,
    Dl: DelayNs,
{
    fill_region(display, READ_INDICATOR, color);
    delay.delay_ms(duration_ms);
    fill_region(display, READ_INDICATOR, BLACK);
}

/// Paint the warning banner and its text.
///
/// The banner is never cleared here; the next full reset removes it.
pub fn draw_warning<D>(
    display: &mut D,
    text: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_region(display, WARNING_BANNER, WARNING_BG);
    draw_text(display, text, WARNING_TEXT_POS, WARNING_STYLE);
}
