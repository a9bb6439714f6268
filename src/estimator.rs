//! Day-count estimation without segment emission.
//!
//! Runs the same clock simulation as the schedule simulator but only counts
//! calendar days, for quick trip-duration queries. Two deliberate differences
//! from the simulator: breaks are counted on every pass where the day's
//! driving has reached the threshold (no once-per-window flag), and the
//! pickup and dropoff hours are both added after the driving loop.

use tracing::debug;

use crate::error::ScheduleError;
use crate::limits;
use crate::model::Trip;
use crate::simulator::ensure_distance;
use crate::traits::DistanceProvider;

/// Estimates how many calendar days the trip needs.
///
/// Resolves the distance through `distance` when the trip does not know it
/// yet (persisting the resolved value on the trip), and fails only when that
/// resolution fails.
pub fn estimate_days<D>(trip: &mut Trip, distance: &D) -> Result<u32, ScheduleError>
where
    D: DistanceProvider,
{
    let miles = ensure_distance(trip, distance)?;
    let days = days_for_distance(miles);
    debug!(miles, days, "estimated trip days");
    Ok(days)
}

/// Pure day-count estimate for a known distance.
pub fn days_for_distance(miles: f64) -> u32 {
    let mut remaining = miles / limits::AVG_SPEED_MPH;
    let mut clock = limits::WAKE_HOUR;
    let mut driven_today = 0.0_f64;
    let mut duty_window = 0.0_f64;
    let mut days: u32 = 1;

    let pre_trip_hours = limits::DEPART_HOUR - limits::WAKE_HOUR;
    clock += pre_trip_hours;
    duty_window += pre_trip_hours;

    while remaining > 0.0 {
        let chunk = limits::BREAK_TRIGGER_DRIVE_HOURS
            .min(limits::MAX_DRIVE_HOURS_PER_DAY - driven_today)
            .min(limits::MAX_ON_DUTY_HOURS_PER_DAY - duty_window)
            .min(remaining);

        if chunk > 0.0 {
            clock += chunk;
            duty_window += chunk;
            driven_today += chunk;
            remaining -= chunk;
        }

        if driven_today >= limits::BREAK_TRIGGER_DRIVE_HOURS
            && duty_window < limits::MAX_ON_DUTY_HOURS_PER_DAY
        {
            clock += hours(limits::BREAK_MINUTES);
            duty_window += hours(limits::BREAK_MINUTES);
        }

        if (driven_today >= limits::MAX_DRIVE_HOURS_PER_DAY
            || duty_window >= limits::MAX_ON_DUTY_HOURS_PER_DAY)
            && remaining > 0.0
        {
            clock += limits::SLEEPER_BERTH_HOURS + limits::OFF_DUTY_REST_HOURS;
            driven_today = 0.0;
            duty_window = 0.0;

            if clock >= 24.0 {
                days += 1;
                clock -= 24.0;
            }
        }
    }

    // Pickup and dropoff land on the final day.
    clock += hours(limits::PICKUP_DROPOFF_MINUTES * 2);
    if clock >= 24.0 {
        days += 1;
    }

    days.max(1)
}

fn hours(minutes: u32) -> f64 {
    f64::from(minutes) / 60.0
}
