//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

/// Target poll period (~20 Hz). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(50);

/// How long the read indicator stays lit after each poll.
pub const READ_PULSE_MS: u32 = 10;

/// Every Nth poll is reported as a failed telemetry read.
pub const FAILED_READ_EVERY: u32 = 40;

/// Frames a held reset key takes to fade its number to black (1.5 s).
pub const FADE_FRAMES: u32 = 30;

/// Simulated seconds per wall-clock second, so distances visibly accumulate.
pub const TIME_SCALE: f32 = 20.0;
