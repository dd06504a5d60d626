//! Low-level drawing primitives shared across widgets.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use crate::styles::TOP_LEFT;

/// Fill the rectangle spanning `top_left..=bottom_right` (both corners included).
///
/// Parts outside the target are clipped by the draw target. Draw errors are
/// ignored: a dropped rectangle is repainted by the next update of its field.
#[inline]
pub fn fill_rect<D>(
    display: &mut D,
    top_left: Point,
    bottom_right: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.fill_solid(&Rectangle::with_corners(top_left, bottom_right), color).ok();
}

/// Fill a `(top_left, bottom_right)` pair from the layout tables.
#[inline]
pub fn fill_region<D>(
    display: &mut D,
    region: (Point, Point),
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rect(display, region.0, region.1, color);
}

/// Draw `text` with its top-left corner at `position`.
#[inline]
pub fn draw_text<D>(
    display: &mut D,
    text: &str,
    position: Point,
    style: MonoTextStyle<'_, Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, position, style, TOP_LEFT).draw(display).ok();
}
