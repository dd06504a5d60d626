//! Screen layout constants for the 176x220 portrait panel.
//!
//! Every position is the top-left corner of the region it names. Rectangles
//! given as two corners are inclusive on both ends, the way the panel's
//! fill primitive addresses pixels.
//!
//! ```text
//!  +------------------------------+   battery ring runs up the left edge,
//!  |B  volts        mah          B|   across the top and down the right
//!  |B  VOLTS        MAH          B|
//!  |B   +--speed ring--+         B|
//!  |B   |    8 8       |         B|
//!  |B   |        KPH   |         B|
//!  |B   +--------------+         B|
//!  |B  trip         total        B|
//!  |B      KM             KM     B|
//!  +------------------------------+
//! ```
//!
//! # Compile-Time Validation
//!
//! `const` assertions check that every region stays on the panel. Moving a
//! field off-screen fails the build instead of silently clipping.

use embedded_graphics::prelude::Point;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ILI9225 2.2" panel, portrait).
pub const SCREEN_WIDTH: u32 = 176;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 220;

// =============================================================================
// Number Fields (3x5 bitmap font)
// =============================================================================

/// Gap between characters of the large numbers.
pub const NUMBER_SPACING: i32 = 2;

/// Magnification of the volts, mAh and distance numbers (12x20 px digits).
pub const NUMBER_MAGNIFY: i32 = 4;

/// Magnification of the speed digits (21x35 px digits).
pub const SPEED_MAGNIFY: i32 = 7;

pub const VOLTS_POS: Point = Point::new(24, 25);
pub const MAH_POS: Point = Point::new(84, 25);
pub const TRIP_POS: Point = Point::new(24, 185);
pub const TOTAL_POS: Point = Point::new(98, 185);

pub const SPEED_TENS_POS: Point = Point::new(60, 91);
pub const SPEED_ONES_POS: Point = Point::new(89, 91);

/// Region cleared instead of drawing a tens digit when speed is below 10.
pub const SPEED_TENS_CLEAR: (Point, Point) = (Point::new(60, 91), Point::new(82, 127));

// =============================================================================
// Labels (6x10 font)
// =============================================================================

pub const VOLTS_LABEL_POS: Point = Point::new(36, 48);
pub const MAH_LABEL_POS: Point = Point::new(132, 48);
pub const SPEED_UNIT_POS: Point = Point::new(90, 131);
pub const TRIP_LABEL_POS: Point = Point::new(23, 175);
pub const TOTAL_LABEL_POS: Point = Point::new(97, 175);

/// Distance unit positions (trip, total) when metric. "KM" is shorter than
/// "MILES", so it sits further right to stay flush with the numbers.
pub const KM_UNIT_POS: [Point; 2] = [Point::new(70, 208), Point::new(139, 208)];

/// Distance unit positions (trip, total) when imperial.
pub const MILES_UNIT_POS: [Point; 2] = [Point::new(50, 208), Point::new(119, 208)];

pub const FW_VERSION_POS: Point = Point::new(40, 140);

// =============================================================================
// Ring Gauges
// =============================================================================

/// Battery segment extent: a lit cell covers `x..=x+14`, `y..=y+15`.
pub const BATTERY_CELL_WIDTH: i32 = 14;
pub const BATTERY_CELL_HEIGHT: i32 = 15;

/// Speed segment extent: a lit cell covers `x..=x+10`, `y..=y+11`.
pub const SPEED_CELL_WIDTH: i32 = 10;
pub const SPEED_CELL_HEIGHT: i32 = 11;

// =============================================================================
// Status Areas
// =============================================================================

/// Read indicator swatch, between the speed digits and the trip field.
pub const READ_INDICATOR: (Point, Point) = (Point::new(85, 155), Point::new(89, 159));

/// Warning banner across the top of the speed ring.
pub const WARNING_BANNER: (Point, Point) = (Point::new(0, 60), Point::new(176, 83));

pub const WARNING_TEXT_POS: Point = Point::new(5, 65);

// =============================================================================
// Compile-Time Validation
// =============================================================================

const fn on_screen(p: Point) -> bool {
    p.x >= 0 && p.y >= 0 && p.x < SCREEN_WIDTH as i32 && p.y < SCREEN_HEIGHT as i32
}

// Widest value strings: "4.20" volts, "12345" mAh, "12.34" trip, "1234" total
const DIGIT_ADVANCE: i32 = 3 * NUMBER_MAGNIFY + NUMBER_SPACING;
const _: () = assert!(VOLTS_POS.x + 4 * DIGIT_ADVANCE <= MAH_POS.x);
const _: () = assert!(MAH_POS.x + 5 * DIGIT_ADVANCE <= SCREEN_WIDTH as i32);
const _: () = assert!(TRIP_POS.x + 5 * DIGIT_ADVANCE <= TOTAL_POS.x);
const _: () = assert!(TOTAL_POS.x + 4 * DIGIT_ADVANCE <= SCREEN_WIDTH as i32);
const _: () = assert!(TRIP_POS.y + 5 * NUMBER_MAGNIFY < KM_UNIT_POS[0].y);

// Speed digits stay inside the ring and the tens clear covers a whole digit
const _: () = assert!(SPEED_TENS_POS.x + 3 * SPEED_MAGNIFY <= SPEED_ONES_POS.x);
const _: () = assert!(SPEED_TENS_CLEAR.1.x - SPEED_TENS_CLEAR.0.x + 1 >= 3 * SPEED_MAGNIFY);
const _: () = assert!(SPEED_TENS_CLEAR.1.y - SPEED_TENS_CLEAR.0.y + 1 >= 5 * SPEED_MAGNIFY);

const _: () = assert!(on_screen(READ_INDICATOR.0) && on_screen(READ_INDICATOR.1));
const _: () = assert!(on_screen(WARNING_TEXT_POS));
const _: () = assert!(on_screen(FW_VERSION_POS));
const _: () = assert!(on_screen(MILES_UNIT_POS[1]) && on_screen(KM_UNIT_POS[1]));
