//! Domain model for trips and their generated duty schedules.
//!
//! These are value-like types. A `Trip` owns its generated `Schedule`, which
//! is always replaced wholesale after a simulation run, never patched.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// A named geographic point.
///
/// Pickup and dropoff locations come from the caller; waypoint locations are
/// synthesized per segment and are representative rather than exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            latitude,
            longitude,
        }
    }

    /// Coordinates as (lat, lng).
    pub fn coords(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// Classification of a duty segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HaltKind {
    /// On duty but not driving (pre-trip preparation).
    OnDutyNotDriving,
    /// Pickup or dropoff stop.
    Stop,
    Drive,
    /// Refueling stop.
    Fuel,
    /// Mandatory 30-minute rest break.
    Break,
    /// Sleeper berth portion of the daily rest.
    Sleeper,
    /// Off-duty portion of the daily rest.
    OffDuty,
}

/// One entry in the generated itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DutySegment {
    pub halt: HaltKind,
    /// Duration in whole minutes.
    pub duration_minutes: u32,
    pub description: String,
    /// 1-based trip day, non-decreasing across the sequence.
    pub day: u32,
    pub location: Location,
}

/// The complete generated itinerary for one trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub segments: Vec<DutySegment>,
    pub number_of_days: u32,
}

/// A trip to be scheduled.
///
/// `distance_miles == 0.0` means the distance is unknown and must be resolved
/// through a [`DistanceProvider`](crate::traits::DistanceProvider) before
/// scheduling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub pickup: Location,
    pub dropoff: Location,
    pub distance_miles: f64,
    /// Hours already used in the rolling 60/70-hour cycle. Validated on
    /// construction but not yet consulted when placing rests.
    pub cycle_used_hours: f64,
    schedule: Schedule,
}

impl Trip {
    /// Creates a trip, rejecting negative distance or cycle hours.
    pub fn new(
        pickup: Location,
        dropoff: Location,
        distance_miles: f64,
        cycle_used_hours: f64,
    ) -> Result<Self, ScheduleError> {
        if !distance_miles.is_finite() || distance_miles < 0.0 {
            return Err(ScheduleError::InvalidTrip(format!(
                "distance must be a non-negative number of miles, got {distance_miles}"
            )));
        }
        if !cycle_used_hours.is_finite() || cycle_used_hours < 0.0 {
            return Err(ScheduleError::InvalidTrip(format!(
                "cycle hours used must be non-negative, got {cycle_used_hours}"
            )));
        }

        Ok(Self {
            pickup,
            dropoff,
            distance_miles,
            cycle_used_hours,
            schedule: Schedule::default(),
        })
    }

    /// The most recently installed schedule (empty until a simulation runs).
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn segments(&self) -> &[DutySegment] {
        &self.schedule.segments
    }

    pub fn number_of_days(&self) -> u32 {
        self.schedule.number_of_days
    }

    /// Replaces the whole schedule in one assignment.
    ///
    /// The previous schedule stays visible until a fully built replacement
    /// exists, so a failed run can never expose a half-written itinerary.
    pub fn install_schedule(&mut self, schedule: Schedule) {
        self.schedule = schedule;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depot() -> Location {
        Location::new("Chicago", "Chicago, IL", 41.8781, -87.6298)
    }

    #[test]
    fn rejects_negative_distance() {
        let result = Trip::new(depot(), depot(), -10.0, 0.0);
        assert!(matches!(result, Err(ScheduleError::InvalidTrip(_))));
    }

    #[test]
    fn rejects_negative_cycle_hours() {
        let result = Trip::new(depot(), depot(), 100.0, -1.0);
        assert!(matches!(result, Err(ScheduleError::InvalidTrip(_))));
    }

    #[test]
    fn new_trip_has_empty_schedule() {
        let trip = Trip::new(depot(), depot(), 100.0, 0.0).unwrap();
        assert!(trip.segments().is_empty());
        assert_eq!(trip.number_of_days(), 0);
    }

    #[test]
    fn halt_kind_uses_wire_names() {
        let json = serde_json::to_string(&HaltKind::OnDutyNotDriving).unwrap();
        assert_eq!(json, "\"ON_DUTY_NOT_DRIVING\"");
        let json = serde_json::to_string(&HaltKind::OffDuty).unwrap();
        assert_eq!(json, "\"OFF_DUTY\"");
    }
}
