//! HOS schedule simulation (the scheduling core).
//!
//! One simulation run is one sequential pass over the remaining distance,
//! interleaving four constraints with independent reset rules: the 11-hour
//! daily driving cap, the 14-hour on-duty window, the 30-minute break after
//! 8 hours of driving, and the 1,000-mile fuel interval.

use tracing::debug;

use crate::error::ScheduleError;
use crate::limits;
use crate::model::{DutySegment, HaltKind, Location, Schedule, Trip};
use crate::traits::{DistanceProvider, WaypointProvider};

/// Generates the full duty-segment itinerary for a trip and installs it.
///
/// Resolves the distance through `distance` when the trip does not know it
/// yet (the resolved value is persisted on the trip), builds the complete
/// ordered segment sequence, then swaps it in atomically. Fails only when
/// the distance is unknown and the provider cannot resolve it; in that case
/// the trip's previous schedule is left untouched.
pub fn simulate<'a, D, W>(
    trip: &'a mut Trip,
    distance: &D,
    waypoints: &W,
) -> Result<&'a Schedule, ScheduleError>
where
    D: DistanceProvider,
    W: WaypointProvider,
{
    let miles = ensure_distance(trip, distance)?;
    let schedule = build_schedule(trip, miles, waypoints);
    debug!(
        segments = schedule.segments.len(),
        days = schedule.number_of_days,
        miles,
        "built schedule"
    );
    trip.install_schedule(schedule);
    Ok(trip.schedule())
}

/// Resolves and persists the trip distance if it is still unknown (zero).
pub(crate) fn ensure_distance<D>(trip: &mut Trip, distance: &D) -> Result<f64, ScheduleError>
where
    D: DistanceProvider,
{
    if trip.distance_miles == 0.0 {
        let estimate = distance.resolve(trip.pickup.coords(), trip.dropoff.coords())?;
        debug!(
            miles = estimate.miles,
            duration = %estimate.duration_label,
            "resolved trip distance"
        );
        trip.distance_miles = estimate.miles;
    }
    Ok(trip.distance_miles)
}

fn build_schedule<W>(trip: &Trip, total_miles: f64, waypoints: &W) -> Schedule
where
    W: WaypointProvider,
{
    let mut segments: Vec<DutySegment> = Vec::new();
    let mut clock = limits::WAKE_HOUR;
    let mut day: u32 = 1;
    let mut remaining = total_miles;
    let mut driven_today = 0.0_f64;
    let mut duty_window = 0.0_f64;
    // Miles covered since the last fuel stop; reduced by the interval, not
    // zeroed, so the overshoot carries into the next interval.
    let mut since_fuel = 0.0_f64;
    let mut break_taken = false;

    // Pre-trip preparation, 4:00 AM to 6:00 AM at the pickup point.
    let pre_trip_hours = limits::DEPART_HOUR - limits::WAKE_HOUR;
    segments.push(segment(
        HaltKind::OnDutyNotDriving,
        (pre_trip_hours * 60.0) as u32,
        "Pre-trip preparation and travel to pickup location",
        day,
        trip.pickup.clone(),
    ));
    clock += pre_trip_hours;
    duty_window += pre_trip_hours;

    segments.push(segment(
        HaltKind::Stop,
        limits::PICKUP_DROPOFF_MINUTES,
        "Pickup at location",
        day,
        trip.pickup.clone(),
    ));
    clock += hours(limits::PICKUP_DROPOFF_MINUTES);
    duty_window += hours(limits::PICKUP_DROPOFF_MINUTES);

    while remaining > limits::DISTANCE_EPSILON_MILES {
        // Once the window's break is behind us the full daily cap applies.
        let break_horizon = if break_taken {
            limits::MAX_DRIVE_HOURS_PER_DAY
        } else {
            limits::BREAK_TRIGGER_DRIVE_HOURS
        };
        let chunk_hours = break_horizon
            .min(limits::MAX_DRIVE_HOURS_PER_DAY - driven_today)
            .min(limits::MAX_ON_DUTY_HOURS_PER_DAY - duty_window)
            .min(remaining / limits::AVG_SPEED_MPH);

        if chunk_hours > 0.0 {
            let chunk_miles = chunk_hours * limits::AVG_SPEED_MPH;
            since_fuel += chunk_miles;
            remaining -= chunk_miles;

            segments.push(segment(
                HaltKind::Drive,
                (chunk_hours * 60.0) as u32,
                "Driving",
                day,
                waypoints.waypoint(&trip.pickup, &trip.dropoff, HaltKind::Drive),
            ));
            clock += chunk_hours;
            duty_window += chunk_hours;
            driven_today += chunk_hours;
        }

        if total_miles >= limits::FUEL_STOP_INTERVAL_MILES
            && since_fuel >= limits::FUEL_STOP_INTERVAL_MILES
        {
            segments.push(segment(
                HaltKind::Fuel,
                limits::FUEL_STOP_MINUTES,
                "Fuel stop",
                day,
                waypoints.waypoint(&trip.pickup, &trip.dropoff, HaltKind::Fuel),
            ));
            clock += hours(limits::FUEL_STOP_MINUTES);
            duty_window += hours(limits::FUEL_STOP_MINUTES);
            since_fuel -= limits::FUEL_STOP_INTERVAL_MILES;
        }

        // At most one mandatory break per on-duty window.
        if !break_taken && driven_today >= limits::BREAK_TRIGGER_DRIVE_HOURS {
            segments.push(segment(
                HaltKind::Break,
                limits::BREAK_MINUTES,
                "Mandatory 30-minute rest break",
                day,
                waypoints.waypoint(&trip.pickup, &trip.dropoff, HaltKind::Break),
            ));
            clock += hours(limits::BREAK_MINUTES);
            duty_window += hours(limits::BREAK_MINUTES);
            break_taken = true;
        }

        if (driven_today >= limits::MAX_DRIVE_HOURS_PER_DAY
            || duty_window >= limits::MAX_ON_DUTY_HOURS_PER_DAY)
            && remaining > limits::DISTANCE_EPSILON_MILES
        {
            // 10-hour daily rest: sleeper berth then off duty, same spot.
            let rest_stop = waypoints.waypoint(&trip.pickup, &trip.dropoff, HaltKind::Sleeper);
            segments.push(segment(
                HaltKind::Sleeper,
                limits::SLEEPER_BERTH_HOURS as u32 * 60,
                "Sleeper Berth Rest",
                day,
                rest_stop.clone(),
            ));
            clock += limits::SLEEPER_BERTH_HOURS;

            segments.push(segment(
                HaltKind::OffDuty,
                limits::OFF_DUTY_REST_HOURS as u32 * 60,
                "Off Duty Rest",
                day,
                rest_stop,
            ));
            clock += limits::OFF_DUTY_REST_HOURS;

            driven_today = 0.0;
            duty_window = 0.0;
            break_taken = false;

            if clock >= 24.0 {
                day += 1;
                clock -= 24.0;
            }
        }
    }

    segments.push(segment(
        HaltKind::Stop,
        limits::PICKUP_DROPOFF_MINUTES,
        "Dropoff at location",
        day,
        trip.dropoff.clone(),
    ));
    clock += hours(limits::PICKUP_DROPOFF_MINUTES);

    let number_of_days = if clock < 24.0 { day } else { day + 1 };

    Schedule {
        segments,
        number_of_days,
    }
}

fn segment(
    halt: HaltKind,
    duration_minutes: u32,
    description: &str,
    day: u32,
    location: Location,
) -> DutySegment {
    DutySegment {
        halt,
        duration_minutes,
        description: description.to_string(),
        day,
        location,
    }
}

fn hours(minutes: u32) -> f64 {
    f64::from(minutes) / 60.0
}
