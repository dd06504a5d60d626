//! 3x5 bitmap digit font for the large dashboard numbers.
//!
//! Each glyph is painted as a grid of filled squares, `magnify` pixels per
//! cell, with every cell painted in either the foreground or the background
//! color. Painting the background too means a new number fully overwrites the
//! previous one in place, so fields never need a separate clear.
//!
//! # Number Strings
//!
//! [`draw_number`] understands the characters produced by formatting a value
//! into a fixed-width field:
//!
//! | Char | Drawn as | Width |
//! |------|----------|-------|
//! | `0`-`9` | glyph | 3 cells |
//! | `.` | one lit cell on the baseline | 1 cell |
//! | `-` | lit middle row | 3 cells |
//! | space | background only | 3 cells |
//!
//! Anything else is skipped without advancing the cursor.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::widgets::fill_rect;

/// Glyph width in cells.
pub const GLYPH_WIDTH: i32 = 3;

/// Glyph height in cells.
pub const GLYPH_HEIGHT: i32 = 5;

/// Digit glyphs, indexed `[digit][row][column]`.
pub const DIGITS_3X5: [[[bool; 3]; 5]; 10] = {
    const O: bool = false;
    const X: bool = true;
    [
        [[X, X, X], [X, O, X], [X, O, X], [X, O, X], [X, X, X]], // 0
        [[O, O, X], [O, O, X], [O, O, X], [O, O, X], [O, O, X]], // 1
        [[X, X, X], [O, O, X], [X, X, X], [X, O, O], [X, X, X]], // 2
        [[X, X, X], [O, O, X], [O, X, X], [O, O, X], [X, X, X]], // 3
        [[X, O, X], [X, O, X], [X, X, X], [O, O, X], [O, O, X]], // 4
        [[X, X, X], [X, O, O], [X, X, X], [O, O, X], [X, X, X]], // 5
        [[X, X, X], [X, O, O], [X, X, X], [X, O, X], [X, X, X]], // 6
        [[X, X, X], [O, O, X], [O, O, X], [O, O, X], [O, O, X]], // 7
        [[X, X, X], [X, O, X], [X, X, X], [X, O, X], [X, X, X]], // 8
        [[X, X, X], [X, O, X], [X, X, X], [O, O, X], [X, X, X]], // 9
    ]
};

/// Horizontal advance of a digit, minus, or space at the given scale.
#[inline]
pub const fn glyph_advance(
    spacing: i32,
    magnify: i32,
) -> i32 {
    GLYPH_WIDTH * magnify + spacing
}

/// Horizontal advance of a decimal point at the given scale.
#[inline]
pub const fn point_advance(
    spacing: i32,
    magnify: i32,
) -> i32 {
    magnify + spacing
}

/// Paint one digit with its top-left corner at `origin`.
///
/// Cells are painted column by column. Values above 9 draw nothing.
pub fn draw_digit<D>(
    display: &mut D,
    digit: u8,
    origin: Point,
    fg: Rgb565,
    bg: Rgb565,
    magnify: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(glyph) = DIGITS_3X5.get(usize::from(digit)) else {
        return;
    };

    for col in 0..GLYPH_WIDTH {
        for row in 0..GLYPH_HEIGHT {
            let color = if glyph[row as usize][col as usize] { fg } else { bg };
            let cell = origin + Point::new(col * magnify, row * magnify);
            fill_rect(display, cell, cell + Point::new(magnify - 1, magnify - 1), color);
        }
    }
}

/// Paint a formatted number left-to-right starting at `origin`.
///
/// Returns the cursor x position after the last character, including the
/// trailing spacing.
pub fn draw_number<D>(
    display: &mut D,
    text: &str,
    origin: Point,
    fg: Rgb565,
    bg: Rgb565,
    spacing: i32,
    magnify: i32,
) -> i32
where
    D: DrawTarget<Color = Rgb565>,
{
    let top = origin.y;
    let bottom = top + GLYPH_HEIGHT * magnify - 1;
    let mut cursor_x = origin.x;

    for ch in text.bytes() {
        let glyph_right = cursor_x + GLYPH_WIDTH * magnify - 1;
        match ch {
            b'0'..=b'9' => {
                draw_digit(display, ch - b'0', Point::new(cursor_x, top), fg, bg, magnify);
                cursor_x += glyph_advance(spacing, magnify);
            }
            b'.' => {
                let right = cursor_x + magnify - 1;
                fill_rect(display, Point::new(cursor_x, top), Point::new(right, bottom), bg);
                fill_rect(
                    display,
                    Point::new(cursor_x, top + 4 * magnify),
                    Point::new(right, bottom),
                    fg,
                );
                cursor_x += point_advance(spacing, magnify);
            }
            b'-' => {
                fill_rect(display, Point::new(cursor_x, top), Point::new(glyph_right, bottom), bg);
                fill_rect(
                    display,
                    Point::new(cursor_x, top + 2 * magnify),
                    Point::new(glyph_right, top + 3 * magnify - 1),
                    fg,
                );
                cursor_x += glyph_advance(spacing, magnify);
            }
            b' ' => {
                fill_rect(display, Point::new(cursor_x, top), Point::new(glyph_right, bottom), bg);
                cursor_x += glyph_advance(spacing, magnify);
            }
            _ => {}
        }
    }

    cursor_x
}
