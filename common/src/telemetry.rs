//! One poll's worth of telemetry and the gauge fraction helpers.

/// Every value the dashboard shows, sampled together.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetrySnapshot {
    /// Pack voltage.
    pub volts: f32,
    /// Charge drawn since the last mAh reset.
    pub mah: i32,
    pub trip_meters: u32,
    pub total_meters: u32,
    pub speed_kph: u8,
    /// Battery gauge fraction, `0.0..=1.0`.
    pub battery_percent: f32,
    /// Speed gauge fraction, `0.0..=1.0`.
    pub speed_percent: f32,
}

/// Linear state-of-charge estimate from pack voltage.
///
/// Maps the average cell voltage from `min_cell_volts..=max_cell_volts` onto
/// `0.0..=1.0`. A pack with no cells or an empty window reads as empty.
pub fn battery_percent(
    volts: f32,
    cells: u8,
    min_cell_volts: f32,
    max_cell_volts: f32,
) -> f32 {
    let window = max_cell_volts - min_cell_volts;
    if cells == 0 || window.is_nan() || window <= 0.0 {
        return 0.0;
    }
    let cell_volts = volts / f32::from(cells);
    clamp_unit((cell_volts - min_cell_volts) / window)
}

/// Speed as a fraction of `max_kph`, saturating at full scale.
pub fn speed_percent(
    kph: u8,
    max_kph: u8,
) -> f32 {
    if max_kph == 0 {
        return 0.0;
    }
    clamp_unit(f32::from(kph) / f32::from(max_kph))
}

#[inline]
fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}
