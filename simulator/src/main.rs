//! EV Dashboard Simulator for Windows/Desktop.
//!
//! Drives the shared dashboard renderer with synthetic ride telemetry in an
//! embedded-graphics-simulator window.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `M` (hold) | Fade the mAh counter, zero it when the fade completes |
//! | `T` (hold) | Fade the trip distance, zero it when the fade completes |
//! | `W` | Show the warning banner |
//! | `F` | Full redraw |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod delay;
mod fade;
mod ride;
mod timing;

use std::thread;
use std::time::Instant;

use anyhow::{Context, bail};
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use env_logger::Env;
use evdash_common::colors::BLACK;
use evdash_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use evdash_common::{Dashboard, DisplayConfig};
use log::{debug, info};

use crate::delay::StdDelay;
use crate::fade::{FadeStep, HoldFade};
use crate::ride::{Ride, RideProfile};
use crate::timing::{FADE_FRAMES, FAILED_READ_EVERY, FRAME_TIME, READ_PULSE_MS};

const FW_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

const WARNING_TEXT: &str = "LOW BATTERY";

/// Command-line options.
#[derive(Parser, Debug)]
#[command(version, about = "Desktop simulator for the EV dashboard renderer")]
struct Args {
    /// Show MPH and miles instead of KPH and kilometers
    #[arg(long)]
    imperial: bool,

    /// Show the average cell voltage instead of the pack voltage
    #[arg(long)]
    per_cell: bool,

    /// Series cells in the simulated pack
    #[arg(long, default_value_t = 12)]
    cells: u8,

    /// Speed that fills the speed gauge, in km/h
    #[arg(long, default_value_t = 50)]
    max_speed: u8,

    /// Cell voltage shown as an empty battery
    #[arg(long, default_value_t = 3.3)]
    min_cell_volts: f32,

    /// Cell voltage shown as a full battery
    #[arg(long, default_value_t = 4.2)]
    max_cell_volts: f32,

    /// Window pixel scale
    #[arg(long, default_value_t = 2)]
    scale: u32,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(if args.debug { "debug" } else { "info" }))
        .format_timestamp_secs()
        .init();

    let config = DisplayConfig::new(args.imperial, args.per_cell, args.cells).context("invalid dashboard options")?;
    if args.max_cell_volts <= args.min_cell_volts {
        bail!(
            "--max-cell-volts ({}) must be above --min-cell-volts ({})",
            args.max_cell_volts,
            args.min_cell_volts
        );
    }
    if args.scale == 0 {
        bail!("--scale must be at least 1");
    }

    info!("{} {} starting", env!("CARGO_PKG_NAME"), FW_VERSION);

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(args.scale).build();
    let mut window = Window::new("EV Dashboard Sim", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let mut dashboard = Dashboard::new(config);
    let mut ride = Ride::new(RideProfile {
        cells: args.cells,
        min_cell_volts: args.min_cell_volts,
        max_cell_volts: args.max_cell_volts,
        max_speed_kph: args.max_speed,
    });
    let mut delay = StdDelay;

    let mut mah_fade = HoldFade::new(FADE_FRAMES);
    let mut trip_fade = HoldFade::new(FADE_FRAMES);
    let mut full_redraw = true;
    let mut show_warning = false;
    let mut poll = 0u32;

    'running: loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::M => mah_fade.start(),
                        Keycode::T => trip_fade.start(),
                        Keycode::W => show_warning = true,
                        Keycode::F => full_redraw = true,
                        _ => {}
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => match keycode {
                    Keycode::M if mah_fade.is_active() => {
                        debug!("mAh reset cancelled");
                        mah_fade.cancel();
                    }
                    Keycode::T if trip_fade.is_active() => {
                        debug!("trip reset cancelled");
                        trip_fade.cancel();
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        ride.advance(FRAME_TIME.as_secs_f32());

        // Poll: a failed read keeps the previous values on screen
        poll = poll.wrapping_add(1);
        let read_ok = !poll.is_multiple_of(FAILED_READ_EVERY);
        if read_ok {
            dashboard.indicate_read_success(&mut display, &mut delay, READ_PULSE_MS);
        } else {
            dashboard.indicate_read_failure(&mut display, &mut delay, READ_PULSE_MS);
        }

        if full_redraw {
            dashboard.render(&mut display, &ride.sample(), true);
            dashboard.set_fw_version(&mut display, FW_VERSION);
            full_redraw = false;
        } else if read_ok {
            dashboard.render(&mut display, &ride.sample(), false);
        }

        match mah_fade.advance() {
            Some(FadeStep::Progress(p)) => dashboard.set_mah_reset_progress(&mut display, p),
            Some(FadeStep::Done) => {
                info!("mAh counter reset");
                ride.reset_mah();
                dashboard.set_mah(&mut display, 0);
            }
            None => {}
        }

        match trip_fade.advance() {
            Some(FadeStep::Progress(p)) => dashboard.set_trip_reset_progress(&mut display, p),
            Some(FadeStep::Done) => {
                info!("trip distance reset");
                ride.reset_trip();
                dashboard.set_trip_distance(&mut display, 0);
            }
            None => {}
        }

        if show_warning {
            dashboard.set_warning(&mut display, WARNING_TEXT);
            show_warning = false;
        }

        window.update(&display);

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    info!("window closed after {poll} polls");
    Ok(())
}
