//! Synthetic ride telemetry.
//!
//! Speed follows a slow sine, current draw grows with speed, and the pack
//! voltage drops linearly with the charge drawn plus a load-dependent sag.
//! Distances integrate the speed. The whole ride runs [`TIME_SCALE`] times
//! faster than the wall clock.

use evdash_common::{TelemetrySnapshot, battery_percent, speed_percent};

use crate::timing::TIME_SCALE;

/// Usable pack capacity.
const PACK_CAPACITY_MAH: f32 = 10_000.0;

/// Draw at standstill (controller, lights).
const IDLE_CURRENT_A: f32 = 1.5;

/// Extra draw per km/h of speed.
const CURRENT_PER_KPH_A: f32 = 0.6;

/// Pack voltage lost per amp of load.
const SAG_VOLTS_PER_A: f32 = 0.08;

/// Odometer reading at the start of the simulation.
const INITIAL_TOTAL_METERS: f32 = 1_234_000.0;

/// Parameters of the simulated pack and vehicle.
#[derive(Clone, Copy, Debug)]
pub struct RideProfile {
    pub cells: u8,
    pub min_cell_volts: f32,
    pub max_cell_volts: f32,
    pub max_speed_kph: u8,
}

/// Accumulated ride state.
#[derive(Debug)]
pub struct Ride {
    profile: RideProfile,
    t: f32,
    mah: f32,
    trip_meters: f32,
    total_meters: f32,
}

impl Ride {
    pub const fn new(profile: RideProfile) -> Self {
        Self {
            profile,
            t: 0.0,
            mah: 0.0,
            trip_meters: 0.0,
            total_meters: INITIAL_TOTAL_METERS,
        }
    }

    /// Advance the ride by `dt` wall-clock seconds.
    pub fn advance(
        &mut self,
        dt: f32,
    ) {
        let dt = dt * TIME_SCALE;
        self.t += dt;

        let kph = self.speed_kph();
        let amps = self.current_amps(kph);
        self.mah = (self.mah + amps * 1000.0 * dt / 3600.0).min(PACK_CAPACITY_MAH);

        let meters = f32::from(kph) / 3.6 * dt;
        self.trip_meters += meters;
        self.total_meters += meters;
    }

    /// Current values as the dashboard would receive them.
    pub fn sample(&self) -> TelemetrySnapshot {
        let kph = self.speed_kph();
        let volts = self.pack_volts(kph);
        let p = &self.profile;

        TelemetrySnapshot {
            volts,
            mah: self.mah as i32,
            trip_meters: self.trip_meters as u32,
            total_meters: self.total_meters as u32,
            speed_kph: kph,
            battery_percent: battery_percent(volts, p.cells, p.min_cell_volts, p.max_cell_volts),
            speed_percent: speed_percent(kph, p.max_speed_kph),
        }
    }

    pub const fn reset_mah(&mut self) { self.mah = 0.0; }

    pub const fn reset_trip(&mut self) { self.trip_meters = 0.0; }

    fn speed_kph(&self) -> u8 {
        // Dips below zero are clamped, giving stops between runs
        let kph = fake_signal(self.t, -8.0, f32::from(self.profile.max_speed_kph) + 5.0, 0.02);
        kph.clamp(0.0, f32::from(u8::MAX)) as u8
    }

    fn current_amps(
        &self,
        kph: u8,
    ) -> f32 {
        CURRENT_PER_KPH_A.mul_add(f32::from(kph), IDLE_CURRENT_A)
    }

    fn pack_volts(
        &self,
        kph: u8,
    ) -> f32 {
        let p = &self.profile;
        let drawn = self.mah / PACK_CAPACITY_MAH;
        let cell = (p.max_cell_volts - p.min_cell_volts).mul_add(-drawn, p.max_cell_volts);
        let sag = self.current_amps(kph) * SAG_VOLTS_PER_A;
        (cell * f32::from(p.cells) - sag).max(0.0)
    }
}

/// Sine between `min` and `max` at angular frequency `freq`.
fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}
