//! The dashboard renderer.
//!
//! [`Dashboard`] paints every field of the fixed layout and keeps just enough
//! state to redraw incrementally: the last mAh and trip values (so a reset
//! fade can repaint them) and the lit segment count of each ring gauge.
//!
//! The draw target is borrowed per call rather than owned, so the caller keeps
//! the panel for its own use (boot screens, flushing) between updates.
//!
//! # Field Formats
//!
//! | Field | Width | Decimals | Position |
//! |-------|-------|----------|----------|
//! | volts | 4 | 2, or 1 when 2 don't fit | [`VOLTS_POS`] |
//! | mAh | 5 | 0 | [`MAH_POS`] |
//! | trip | 5 | 2 | [`TRIP_POS`] |
//! | total | 4 | 0 | [`TOTAL_POS`] |
//! | speed | 2 digits, capped at 99 | - | [`SPEED_TENS_POS`], [`SPEED_ONES_POS`] |
//!
//! Values are right-aligned with spaces, and spaces are painted as background,
//! so a shorter value fully erases a longer one.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_hal::delay::DelayNs;
use heapless::String;
// `round` is inherent only with std; the no_std build takes it from micromath
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::colors::{BLACK, READ_FAILURE, READ_SUCCESS, WHITE, fade_to_black};
use crate::config::DisplayConfig;
use crate::config::layout::{
    MAH_POS,
    NUMBER_MAGNIFY,
    NUMBER_SPACING,
    SPEED_MAGNIFY,
    SPEED_ONES_POS,
    SPEED_TENS_CLEAR,
    SPEED_TENS_POS,
    TOTAL_POS,
    TRIP_POS,
    VOLTS_POS,
};
use crate::font::{draw_digit, draw_number};
use crate::telemetry::TelemetrySnapshot;
use crate::widgets::{RingGauge, draw_fw_version, draw_labels, draw_warning, fill_region, pulse_read_indicator};

/// Highest speed the two speed digits can show.
pub const MAX_DISPLAY_SPEED: u8 = 99;

/// Formatted field text. Anything past the capacity is dropped.
type FieldText = String<16>;

/// Stateful painter for the dashboard layout.
#[derive(Clone, Debug)]
pub struct Dashboard {
    config: DisplayConfig,
    /// 1.0 for metric, miles per km for imperial.
    distance_speed_multiplier: f32,
    last_mah: i32,
    last_trip_distance_meters: u32,
    battery: RingGauge,
    speed: RingGauge,
}

impl Dashboard {
    pub fn new(config: DisplayConfig) -> Self {
        log_info!(
            "dashboard: imperial={} per_cell={} cells={}",
            config.imperial_units(),
            config.per_cell_voltage(),
            config.battery_cells()
        );
        Self {
            config,
            distance_speed_multiplier: config.distance_speed_multiplier(),
            last_mah: 0,
            last_trip_distance_meters: 0,
            battery: RingGauge::battery(),
            speed: RingGauge::speed(),
        }
    }

    #[inline]
    pub const fn config(&self) -> &DisplayConfig { &self.config }

    /// Lit segments of the battery gauge.
    #[inline]
    pub const fn battery_cells_filled(&self) -> usize { self.battery.filled() }

    /// Lit segments of the speed gauge.
    #[inline]
    pub const fn speed_cells_filled(&self) -> usize { self.speed.filled() }

    /// Clear the whole screen and paint the static labels.
    ///
    /// Gauge counts are kept, so the next gauge updates must pass
    /// `redraw = true` to bring the segments back.
    pub fn reset<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        log_info!("dashboard: full reset");
        display.clear(BLACK).ok();
        draw_labels(display, self.config.imperial_units());
    }

    pub fn set_fw_version<D>(
        &self,
        display: &mut D,
        version: &str,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        draw_fw_version(display, version);
    }

    /// Pack voltage, or the average cell voltage in per-cell mode.
    pub fn set_volts<D>(
        &self,
        display: &mut D,
        volts: f32,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let shown = if self.config.per_cell_voltage() {
            volts / f32::from(self.config.battery_cells())
        } else {
            volts
        };
        let text = format_volts(shown);
        draw_field(display, &text, VOLTS_POS, WHITE);
    }

    pub fn set_mah<D>(
        &mut self,
        display: &mut D,
        mah: i32,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        self.last_mah = mah;
        self.draw_mah(display, WHITE);
    }

    /// Repaint the last mAh value faded toward black by `progress` (0..=1).
    pub fn set_mah_reset_progress<D>(
        &self,
        display: &mut D,
        progress: f32,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        self.draw_mah(display, fade_to_black(progress));
    }

    pub fn set_trip_distance<D>(
        &mut self,
        display: &mut D,
        meters: u32,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        self.last_trip_distance_meters = meters;
        self.draw_trip_distance(display, WHITE);
    }

    /// Repaint the last trip distance faded toward black by `progress` (0..=1).
    pub fn set_trip_reset_progress<D>(
        &self,
        display: &mut D,
        progress: f32,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        self.draw_trip_distance(display, fade_to_black(progress));
    }

    pub fn set_total_distance<D>(
        &self,
        display: &mut D,
        meters: u32,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut text = FieldText::new();
        let _ = write!(text, "{:>4.0}", self.kilometers(meters));
        draw_field(display, &text, TOTAL_POS, WHITE);
    }

    /// Speed in the configured unit, rounded and capped at [`MAX_DISPLAY_SPEED`].
    ///
    /// Below 10 the tens position is blanked instead of showing a leading zero.
    pub fn set_speed<D>(
        &self,
        display: &mut D,
        kph: u8,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let speed = self.display_speed(kph);
        if speed >= 10 {
            draw_digit(display, speed / 10, SPEED_TENS_POS, WHITE, BLACK, SPEED_MAGNIFY);
        } else {
            fill_region(display, SPEED_TENS_CLEAR, BLACK);
        }
        draw_digit(display, speed % 10, SPEED_ONES_POS, WHITE, BLACK, SPEED_MAGNIFY);
    }

    pub fn update_battery_indicator<D>(
        &mut self,
        display: &mut D,
        percent: f32,
        redraw: bool,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        self.battery.update(display, percent, redraw);
    }

    pub fn update_speed_indicator<D>(
        &mut self,
        display: &mut D,
        percent: f32,
        redraw: bool,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        self.speed.update(display, percent, redraw);
    }

    /// Flash the read indicator green for `duration_ms`. Blocks.
    pub fn indicate_read_success<D, Dl>(
        &self,
        display: &mut D,
        delay: &mut Dl,
        duration_ms: u32,
    ) where
        D: DrawTarget<Color = Rgb565>,
        Dl: DelayNs,
    {
        pulse_read_indicator(display, delay, READ_SUCCESS, duration_ms);
    }

    /// Flash the read indicator red for `duration_ms`. Blocks.
    pub fn indicate_read_failure<D, Dl>(
        &self,
        display: &mut D,
        delay: &mut Dl,
        duration_ms: u32,
    ) where
        D: DrawTarget<Color = Rgb565>,
        Dl: DelayNs,
    {
        log_warn!("dashboard: telemetry read failed");
        pulse_read_indicator(display, delay, READ_FAILURE, duration_ms);
    }

    /// Show `text` on the warning banner until the next [`reset`](Self::reset).
    pub fn set_warning<D>(
        &self,
        display: &mut D,
        text: &str,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        log_warn!("dashboard: warning '{}'", text);
        draw_warning(display, text);
    }

    /// Paint a whole telemetry snapshot.
    ///
    /// With `full`, the screen is reset first and both gauges are redrawn from
    /// scratch; otherwise fields are repainted in place and gauges update
    /// incrementally. Fields are always repainted since each overwrites its
    /// own background.
    pub fn render<D>(
        &mut self,
        display: &mut D,
        snapshot: &TelemetrySnapshot,
        full: bool,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        if full {
            self.reset(display);
        }
        self.set_volts(display, snapshot.volts);
        self.set_mah(display, snapshot.mah);
        self.set_trip_distance(display, snapshot.trip_meters);
        self.set_total_distance(display, snapshot.total_meters);
        self.set_speed(display, snapshot.speed_kph);
        self.update_battery_indicator(display, snapshot.battery_percent, full);
        self.update_speed_indicator(display, snapshot.speed_percent, full);
    }

    fn draw_mah<D>(
        &self,
        display: &mut D,
        color: Rgb565,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut text = FieldText::new();
        let _ = write!(text, "{:>5}", self.last_mah);
        draw_field(display, &text, MAH_POS, color);
    }

    fn draw_trip_distance<D>(
        &self,
        display: &mut D,
        color: Rgb565,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut text = FieldText::new();
        let _ = write!(text, "{:>5.2}", self.kilometers(self.last_trip_distance_meters));
        draw_field(display, &text, TRIP_POS, color);
    }

    /// Meters to kilometers or miles.
    #[inline]
    fn kilometers(
        &self,
        meters: u32,
    ) -> f32 {
        meters as f32 / 1000.0 * self.distance_speed_multiplier
    }

    fn display_speed(
        &self,
        kph: u8,
    ) -> u8 {
        let speed = (f32::from(kph) * self.distance_speed_multiplier).round();
        if speed >= f32::from(MAX_DISPLAY_SPEED) {
            MAX_DISPLAY_SPEED
        } else {
            speed as u8
        }
    }
}

/// Four characters: two decimals for single-digit values, one otherwise.
fn format_volts(volts: f32) -> FieldText {
    let mut text = FieldText::new();
    let _ = write!(text, "{volts:>4.2}");
    if text.len() > 4 {
        text.clear();
        let _ = write!(text, "{volts:>4.1}");
    }
    text
}

#[inline]
fn draw_field<D>(
    display: &mut D,
    text: &str,
    origin: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_number(display, text, origin, color, BLACK, NUMBER_SPACING, NUMBER_MAGNIFY);
}

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::{PointsIter, Rectangle};

    use super::*;
    use crate::config::layout::{
        KM_UNIT_POS,
        MILES_UNIT_POS,
        READ_INDICATOR,
        SPEED_UNIT_POS,
        VOLTS_LABEL_POS,
        WARNING_BANNER,
    };
    use crate::font::glyph_advance;
    use crate::testing::{MockDelay, RecordingDisplay};

    fn metric() -> Dashboard { Dashboard::new(DisplayConfig::default()) }

    fn imperial() -> Dashboard { Dashboard::new(DisplayConfig::new(true, false, 12).unwrap()) }

    /// Renders `draw` on a fresh display and returns it.
    fn rendered(draw: impl FnOnce(&mut RecordingDisplay)) -> RecordingDisplay {
        let mut display = RecordingDisplay::new();
        draw(&mut display);
        display
    }

    /// Number field as it would be drawn directly from `text`.
    fn field(
        text: &str,
        origin: Point,
        color: Rgb565,
    ) -> RecordingDisplay {
        rendered(|d| draw_field(d, text, origin, color))
    }

    #[test]
    fn test_format_volts_fits_four_chars() {
        assert_eq!(format_volts(4.2).as_str(), "4.20");
        assert_eq!(format_volts(42.0).as_str(), "42.0");
        assert_eq!(format_volts(3.0).as_str(), "3.00");
        assert_eq!(format_volts(50.44).as_str(), "50.4");
    }

    #[test]
    fn test_per_cell_volts_match_pack_volts() {
        let per_cell = Dashboard::new(DisplayConfig::new(false, true, 2).unwrap());
        let pack = Dashboard::new(DisplayConfig::new(false, false, 2).unwrap());

        let a = rendered(|d| per_cell.set_volts(d, 8.4));
        let b = rendered(|d| pack.set_volts(d, 4.2));
        assert!(a.same_pixels(&b));
        assert!(a.same_pixels(&field("4.20", VOLTS_POS, WHITE)));
    }

    #[test]
    fn test_speed_below_ten_clears_tens() {
        let dash = metric();
        let tens_clear = Rectangle::with_corners(SPEED_TENS_CLEAR.0, SPEED_TENS_CLEAR.1);
        for kph in 0..=9 {
            let mut display = RecordingDisplay::new();
            dash.set_speed(&mut display, 88);
            display.clear_log();
            dash.set_speed(&mut display, kph);

            assert_eq!(display.fills()[0], (tens_clear, BLACK), "kph {kph}");
            // clear plus the 15 cells of the ones digit
            assert_eq!(display.fills().len(), 16);
            let tens_lit = tens_clear.points().any(|p| display.pixel(p) != BLACK);
            assert!(!tens_lit, "stale tens digit at kph {kph}");
        }
    }

    #[test]
    fn test_speed_ten_draws_both_digits() {
        let display = rendered(|d| metric().set_speed(d, 10));
        assert_eq!(display.fills().len(), 30);
        let expected = rendered(|d| {
            draw_digit(d, 1, SPEED_TENS_POS, WHITE, BLACK, SPEED_MAGNIFY);
            draw_digit(d, 0, SPEED_ONES_POS, WHITE, BLACK, SPEED_MAGNIFY);
        });
        assert!(display.same_pixels(&expected));
    }

    #[test]
    fn test_speed_capped_at_99() {
        let dash = metric();
        assert_eq!(dash.display_speed(99), 99);
        assert_eq!(dash.display_speed(150), 99);
        assert_eq!(dash.display_speed(255), 99);
    }

    #[test]
    fn test_imperial_speed_conversion() {
        let dash = imperial();
        assert_eq!(dash.display_speed(100), 62); // 62.14
        assert_eq!(dash.display_speed(30), 19); // 18.64
        assert_eq!(dash.display_speed(1), 1); // 0.62
        assert_eq!(metric().display_speed(30), 30);
    }

    #[test]
    fn test_mah_is_cached_and_right_aligned() {
        let mut dash = metric();
        let display = rendered(|d| dash.set_mah(d, 1234));
        assert_eq!(dash.last_mah, 1234);
        assert!(display.same_pixels(&field(" 1234", MAH_POS, WHITE)));
    }

    #[test]
    fn test_mah_fade_uses_cached_value() {
        let mut dash = metric();
        let mut display = RecordingDisplay::new();
        dash.set_mah(&mut display, 250);
        dash.set_mah_reset_progress(&mut display, 0.5);

        assert_eq!(dash.last_mah, 250, "fade must not change the cached value");
        assert!(display.same_pixels(&field("  250", MAH_POS, fade_to_black(0.5))));
    }

    #[test]
    fn test_mah_fade_complete_is_black() {
        let mut dash = metric();
        let mut display = RecordingDisplay::new();
        dash.set_mah(&mut display, 88888);
        dash.set_mah_reset_progress(&mut display, 1.0);
        assert_eq!(display.lit_pixels(), 0);
    }

    #[test]
    fn test_trip_distance_format() {
        let mut dash = metric();
        let display = rendered(|d| dash.set_trip_distance(d, 12_340));
        assert_eq!(dash.last_trip_distance_meters, 12_340);
        assert!(display.same_pixels(&field("12.34", TRIP_POS, WHITE)));
    }

    #[test]
    fn test_trip_fade_dims_cached_value() {
        let mut dash = metric();
        let mut display = RecordingDisplay::new();
        dash.set_trip_distance(&mut display, 1_500);
        dash.set_trip_reset_progress(&mut display, 0.75);

        assert_eq!(dash.last_trip_distance_meters, 1_500);
        assert!(display.same_pixels(&field(" 1.50", TRIP_POS, fade_to_black(0.75))));
    }

    #[test]
    fn test_imperial_distances() {
        let mut dash = imperial();
        let trip = rendered(|d| dash.set_trip_distance(d, 10_000));
        assert!(trip.same_pixels(&field(" 6.21", TRIP_POS, WHITE)));

        let total = rendered(|d| dash.set_total_distance(d, 100_000));
        assert!(total.same_pixels(&field("  62", TOTAL_POS, WHITE)));
    }

    #[test]
    fn test_total_distance_not_cached() {
        let dash = metric();
        let display = rendered(|d| dash.set_total_distance(d, 1_234_000));
        assert!(display.same_pixels(&field("1234", TOTAL_POS, WHITE)));
    }

    #[test]
    fn test_shorter_value_erases_longer() {
        let mut dash = metric();
        let mut display = RecordingDisplay::new();
        dash.set_mah(&mut display, 88888);
        dash.set_mah(&mut display, 7);
        assert!(display.same_pixels(&field("    7", MAH_POS, WHITE)));
    }

    #[test]
    fn test_reset_clears_and_draws_labels() {
        let mut dash = metric();
        let mut display = RecordingDisplay::new();
        dash.set_mah(&mut display, 0);
        dash.set_warning(&mut display, "HOT");
        dash.reset(&mut display);

        assert_eq!(display.pixel(WARNING_BANNER.0), BLACK, "banner cleared");
        let expected = rendered(|d| draw_labels(d, false));
        assert!(display.same_pixels(&expected));
    }

    #[test]
    fn test_reset_uses_unit_labels() {
        let metric_screen = rendered(|d| metric().reset(d));
        let imperial_screen = rendered(|d| imperial().reset(d));
        assert!(!metric_screen.same_pixels(&imperial_screen));

        let unit_box = |display: &RecordingDisplay, origin: Point| {
            (0..12).any(|dx| (0..10).any(|dy| display.pixel(origin + Point::new(dx, dy)) == WHITE))
        };
        assert!(unit_box(&metric_screen, KM_UNIT_POS[0]));
        assert!(unit_box(&imperial_screen, MILES_UNIT_POS[0]));
        assert!(unit_box(&imperial_screen, SPEED_UNIT_POS));
        assert!(unit_box(&metric_screen, VOLTS_LABEL_POS));
    }

    #[test]
    fn test_read_pulses() {
        let dash = metric();
        let mut display = RecordingDisplay::new();
        let mut delay = MockDelay::default();
        dash.indicate_read_success(&mut display, &mut delay, 30);
        dash.indicate_read_failure(&mut display, &mut delay, 60);

        assert_eq!(delay.delays_ms, vec![30, 60]);
        let colors: Vec<Rgb565> = display.fills().iter().map(|&(_, c)| c).collect();
        assert_eq!(colors, vec![READ_SUCCESS, BLACK, READ_FAILURE, BLACK]);
        assert_eq!(display.pixel(READ_INDICATOR.0), BLACK);
    }

    #[test]
    fn test_gauge_counts_exposed() {
        let mut dash = metric();
        let mut display = RecordingDisplay::new();
        dash.update_battery_indicator(&mut display, 0.5, false);
        dash.update_speed_indicator(&mut display, 1.0, false);
        assert_eq!(dash.battery_cells_filled(), 18);
        assert_eq!(dash.speed_cells_filled(), 22);
    }

    fn snapshot() -> TelemetrySnapshot {
        TelemetrySnapshot {
            volts: 46.3,
            mah: 1_820,
            trip_meters: 8_450,
            total_meters: 412_000,
            speed_kph: 27,
            battery_percent: 0.6,
            speed_percent: 0.45,
        }
    }

    #[test]
    fn test_render_full_matches_individual_setters() {
        let mut dash = metric();
        let via_render = rendered(|d| dash.render(d, &snapshot(), true));

        let mut manual = metric();
        let s = snapshot();
        let by_hand = rendered(|d| {
            manual.reset(d);
            manual.set_volts(d, s.volts);
            manual.set_mah(d, s.mah);
            manual.set_trip_distance(d, s.trip_meters);
            manual.set_total_distance(d, s.total_meters);
            manual.set_speed(d, s.speed_kph);
            manual.update_battery_indicator(d, s.battery_percent, true);
            manual.update_speed_indicator(d, s.speed_percent, true);
        });

        assert!(via_render.same_pixels(&by_hand));
        assert_eq!(dash.battery_cells_filled(), 21);
        assert_eq!(dash.speed_cells_filled(), 10);
    }

    #[test]
    fn test_render_incremental_after_full_is_stable() {
        let mut dash = metric();
        let mut display = RecordingDisplay::new();
        dash.render(&mut display, &snapshot(), true);
        let mut reference = RecordingDisplay::new();
        let mut fresh = metric();
        fresh.render(&mut reference, &snapshot(), true);

        display.clear_log();
        dash.render(&mut display, &snapshot(), false);
        assert!(display.same_pixels(&reference));

        // No full-screen clear and no gauge segments on an unchanged frame
        let screen = display.bounding_box();
        assert!(display.fills().iter().all(|(rect, _)| *rect != screen));
    }

    #[test]
    fn test_render_incremental_moves_gauges() {
        let mut dash = metric();
        let mut display = RecordingDisplay::new();
        dash.render(&mut display, &snapshot(), true);

        let slower = TelemetrySnapshot {
            speed_kph: 5,
            speed_percent: 0.1,
            ..snapshot()
        };
        dash.render(&mut display, &slower, false);
        assert_eq!(dash.speed_cells_filled(), 2);
        assert_eq!(dash.battery_cells_filled(), 21);
    }

    #[test]
    fn test_volts_field_width() {
        // Widest volts text stays left of the mAh field
        let right = VOLTS_POS.x + 4 * glyph_advance(NUMBER_SPACING, NUMBER_MAGNIFY);
        assert!(right <= MAH_POS.x);
    }
}
