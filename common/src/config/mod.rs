//! Dashboard configuration.
//!
//! - `layout`: Panel dimensions and the fixed position of every field
//! - [`DisplayConfig`]: Runtime options (units, voltage mode, pack size)

pub mod layout;

pub use layout::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Kilometers to miles. Applied to speed and both distance fields when the
/// dashboard runs in imperial units.
pub const MILES_PER_KM: f32 = 0.621_371;

/// Rejected configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Per-cell voltage divides by the cell count, so it can't be zero.
    #[error("battery pack must have at least one cell")]
    NoBatteryCells,
}

/// Options that change what the dashboard draws, fixed for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    imperial_units: bool,
    per_cell_voltage: bool,
    battery_cells: u8,
}

impl DisplayConfig {
    /// Build a configuration, validating the pack size.
    pub const fn new(
        imperial_units: bool,
        per_cell_voltage: bool,
        battery_cells: u8,
    ) -> Result<Self, ConfigError> {
        if battery_cells == 0 {
            return Err(ConfigError::NoBatteryCells);
        }
        Ok(Self {
            imperial_units,
            per_cell_voltage,
            battery_cells,
        })
    }

    /// Show speed in MPH and distances in miles.
    #[inline]
    pub const fn imperial_units(&self) -> bool { self.imperial_units }

    /// Show the average cell voltage instead of the pack voltage.
    #[inline]
    pub const fn per_cell_voltage(&self) -> bool { self.per_cell_voltage }

    /// Number of series cells in the pack.
    #[inline]
    pub const fn battery_cells(&self) -> u8 { self.battery_cells }

    /// Factor from metric speed/distance to the configured unit.
    #[inline]
    pub const fn distance_speed_multiplier(&self) -> f32 {
        if self.imperial_units { MILES_PER_KM } else { 1.0 }
    }
}

impl Default for DisplayConfig {
    /// Metric units, pack voltage, 12S pack.
    fn default() -> Self {
        Self {
            imperial_units: false,
            per_cell_voltage: false,
            battery_cells: 12,
        }
    }
}
