//! Dashboard renderer for a 176x220 electric-vehicle instrument panel.
//!
//! This crate contains the platform-agnostic renderer shared between the
//! desktop simulator and firmware builds:
//!
//! - [`dashboard`]: The stateful [`Dashboard`] painter and its field setters
//! - [`font`]: 3x5 bitmap digit font for the large numbers
//! - [`widgets`]: Ring gauges, labels, read indicator and warning banner
//! - [`colors`]: RGB565 color constants and the gauge/fade color rules
//! - [`config`]: Screen layout constants and [`DisplayConfig`]
//! - [`styles`]: Pre-computed text styles
//! - [`telemetry`]: Snapshot type and gauge fraction helpers
//!
//! # Drawing Model
//!
//! Every operation borrows a `DrawTarget<Color = Rgb565>` for the duration of
//! the call and paints only the region its field owns. Nothing is buffered:
//! the target sees a stream of solid rectangle fills and mono-font text.
//!
//! # Logging
//!
//! Enable the `defmt` feature on firmware or the `log` feature on host builds.
//! With neither, logging compiles away.
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of its own unit tests and never allocates.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

#[macro_use]
mod trace;

pub mod colors;
pub mod config;
pub mod dashboard;
pub mod font;
pub mod styles;
pub mod telemetry;
pub mod widgets;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use config::{ConfigError, DisplayConfig};
pub use dashboard::Dashboard;
pub use telemetry::{TelemetrySnapshot, battery_percent, speed_percent};
