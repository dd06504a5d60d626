//! Static labels drawn once after a screen reset.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::config::layout::{
    FW_VERSION_POS,
    KM_UNIT_POS,
    MAH_LABEL_POS,
    MILES_UNIT_POS,
    SPEED_UNIT_POS,
    TOTAL_LABEL_POS,
    TRIP_LABEL_POS,
    VOLTS_LABEL_POS,
};
use crate::styles::LABEL_STYLE;
use crate::widgets::primitives::draw_text;

/// Field captions and unit names for the configured unit system.
pub fn draw_labels<D>(
    display: &mut D,
    imperial_units: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_text(display, "VOLTS", VOLTS_LABEL_POS, LABEL_STYLE);
    draw_text(display, "MAH", MAH_LABEL_POS, LABEL_STYLE);

    let speed_unit = if imperial_units { "MPH" } else { "KPH" };
    draw_text(display, speed_unit, SPEED_UNIT_POS, LABEL_STYLE);

    draw_text(display, "TRIP", TRIP_LABEL_POS, LABEL_STYLE);
    draw_text(display, "TOTAL", TOTAL_LABEL_POS, LABEL_STYLE);

    let (distance_unit, positions) = if imperial_units {
        ("MILES", MILES_UNIT_POS)
    } else {
        ("KM", KM_UNIT_POS)
    };
    for position in positions {
        draw_text(display, distance_unit, position, LABEL_STYLE);
    }
}

/// Firmware version string, shown below the speed digits.
pub fn draw_fw_version<D>(
    display: &mut D,
    version: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_text(display, version, FW_VERSION_POS, LABEL_STYLE);
}
