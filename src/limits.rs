//! Hours-of-service limits and trip timing constants.
//!
//! Durations that become segment lengths are in minutes; running totals in
//! the scheduling loops are tracked in fractional hours.

/// Assumed average driving speed, aligned with the trip planner front end.
pub const AVG_SPEED_MPH: f64 = 55.0;

/// Refuel every 1,000 miles.
pub const FUEL_STOP_INTERVAL_MILES: f64 = 1_000.0;

/// Refueling takes 30 minutes.
pub const FUEL_STOP_MINUTES: u32 = 30;

/// Pickup and dropoff each take an hour.
pub const PICKUP_DROPOFF_MINUTES: u32 = 60;

/// FMCSA rule: at most 11 hours of driving per day.
pub const MAX_DRIVE_HOURS_PER_DAY: f64 = 11.0;

/// FMCSA rule: 14-hour on-duty window per day.
pub const MAX_ON_DUTY_HOURS_PER_DAY: f64 = 14.0;

/// FMCSA rule: a 30-minute break is required after 8 hours of driving.
pub const BREAK_TRIGGER_DRIVE_HOURS: f64 = 8.0;

pub const BREAK_MINUTES: u32 = 30;

/// Sleeper berth portion of the mandatory daily rest.
pub const SLEEPER_BERTH_HOURS: f64 = 7.0;

/// Off-duty portion of the mandatory daily rest (10 hours total with the
/// sleeper berth).
pub const OFF_DUTY_REST_HOURS: f64 = 3.0;

/// FMCSA 60-hour/7-day cycle limit. Carried on trips but not yet enforced
/// when placing rests.
pub const CYCLE_LIMIT_60_HOURS: f64 = 60.0;

/// FMCSA 70-hour/8-day cycle limit. Carried on trips but not yet enforced
/// when placing rests.
pub const CYCLE_LIMIT_70_HOURS: f64 = 70.0;

/// The driver wakes at 4:00 AM.
pub const WAKE_HOUR: f64 = 4.0;

/// The driver reaches the pickup location at 6:00 AM.
pub const DEPART_HOUR: f64 = 6.0;

/// Remaining-distance threshold that ends the simulation loop, absorbing
/// floating-point residue.
pub const DISTANCE_EPSILON_MILES: f64 = 0.01;
