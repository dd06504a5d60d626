//! Pre-computed text styles.
//!
//! Text is positioned by its top-left corner (`Baseline::Top`), matching how
//! the layout constants are measured, and always carries a background color
//! so redrawing a label or banner text never leaves stale pixels or a halo
//! around the glyphs.

use embedded_graphics::{
    mono_font::{MonoTextStyle, MonoTextStyleBuilder, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    text::{Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_14_POINT;

use crate::colors::{BLACK, WARNING_BG, WHITE};

/// Left-aligned text anchored at its top-left corner.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new().baseline(Baseline::Top).build();

/// Small white labels on the black background (6x10 px glyphs).
pub const LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyleBuilder::new()
    .font(&FONT_6X10)
    .text_color(WHITE)
    .background_color(BLACK)
    .build();

/// Warning text, black on the banner color (`ProFont` 14pt, 10x18 px cells).
pub const WARNING_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyleBuilder::new()
    .font(&PROFONT_14_POINT)
    .text_color(BLACK)
    .background_color(WARNING_BG)
    .build();
