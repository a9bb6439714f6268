//! Waypoint strategies for labelling duty segments.
//!
//! A waypoint lookup must never fail the schedule: every error path lands on
//! the synthesized midpoint fallback, and the simulator treats both the same.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::model::{HaltKind, Location};
use crate::ors::OrsClient;
use crate::traits::WaypointProvider;

/// Route-aware waypoints: a point along the actual driving path, reverse
/// geocoded to a name.
///
/// The pick along the path is random; seed it for reproducible runs.
pub struct OrsWaypoints {
    client: OrsClient,
    rng: Mutex<StdRng>,
}

impl OrsWaypoints {
    pub fn new(client: OrsClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    /// Seeded picks, for reproducible schedules.
    pub fn with_seed(client: OrsClient, seed: u64) -> Self {
        Self::with_rng(client, StdRng::seed_from_u64(seed))
    }

    fn with_rng(client: OrsClient, rng: StdRng) -> Self {
        Self {
            client,
            rng: Mutex::new(rng),
        }
    }
}

impl WaypointProvider for OrsWaypoints {
    fn waypoint(&self, pickup: &Location, dropoff: &Location, halt: HaltKind) -> Location {
        let route = match self.client.directions(pickup.coords(), dropoff.coords()) {
            Ok(route) => route,
            Err(err) => {
                warn!(error = %err, ?halt, "route lookup failed, using midpoint fallback");
                return fallback_location(pickup, dropoff, halt);
            }
        };

        let interior = route.path.interior();
        if interior.is_empty() {
            warn!(?halt, "route geometry too short, using midpoint fallback");
            return fallback_location(pickup, dropoff, halt);
        }

        let (latitude, longitude) = {
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            interior[rng.gen_range(0..interior.len())]
        };

        let (mut name, mut address) = match route.primary_road.as_deref() {
            Some(road) => split_road_name(road),
            None => ("Unknown Location".to_string(), "Unknown".to_string()),
        };

        match self.client.reverse_geocode((latitude, longitude)) {
            Ok(place) => {
                if let Some(geocoded) = place.name {
                    name = geocoded;
                }
                if let Some(label) = place.label.filter(|label| !label.is_empty()) {
                    address = label;
                }
                // A street or locality reads better than a point-of-interest
                // name for a roadside halt.
                if let Some(street) = place.street {
                    name = street;
                } else if let Some(locality) = place.locality {
                    name = locality;
                }
            }
            Err(err) => {
                warn!(error = %err, "reverse geocode failed, keeping route step name");
            }
        }

        Location::new(halt_label(halt, &name), address, latitude, longitude)
    }
}

/// Deterministic waypoints at the pickup/dropoff midpoint. Never touches the
/// network; useful for tests and offline planning.
#[derive(Debug, Clone, Copy, Default)]
pub struct MidpointWaypoints;

impl WaypointProvider for MidpointWaypoints {
    fn waypoint(&self, pickup: &Location, dropoff: &Location, halt: HaltKind) -> Location {
        fallback_location(pickup, dropoff, halt)
    }
}

/// The fallback used whenever a route-aware lookup fails.
pub fn fallback_location(pickup: &Location, dropoff: &Location, halt: HaltKind) -> Location {
    Location::new(
        halt_label(halt, "Fallback Location"),
        "Unknown",
        (pickup.latitude + dropoff.latitude) / 2.0,
        (pickup.longitude + dropoff.longitude) / 2.0,
    )
}

fn halt_label(halt: HaltKind, name: &str) -> String {
    match halt {
        HaltKind::Fuel => format!("Fuel Stop: {name}"),
        HaltKind::Break => format!("Break Stop: {name}"),
        HaltKind::Sleeper => format!("Sleeper Stop: {name}"),
        HaltKind::OffDuty => format!("Off Duty Stop: {name}"),
        HaltKind::OnDutyNotDriving | HaltKind::Stop | HaltKind::Drive => name.to_string(),
    }
}

/// Splits a turn-by-turn road name like "Cleveland HSt, Amarillo, TX" into a
/// short name and an address remainder.
fn split_road_name(road: &str) -> (String, String) {
    match road.split_once(',') {
        Some((name, rest)) => {
            let name = name.trim().to_string();
            let rest = rest.trim();
            let address = if rest.is_empty() {
                name.clone()
            } else {
                rest.to_string()
            };
            (name, address)
        }
        None => (road.to_string(), "Unknown".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pickup() -> Location {
        Location::new("Chicago", "Chicago, IL, USA", 40.0, -88.0)
    }

    fn dropoff() -> Location {
        Location::new("Los Angeles", "Los Angeles, CA, USA", 34.0, -118.0)
    }

    #[test]
    fn fallback_sits_at_the_midpoint() {
        let location = fallback_location(&pickup(), &dropoff(), HaltKind::Fuel);
        assert_eq!(location.latitude, 37.0);
        assert_eq!(location.longitude, -103.0);
        assert_eq!(location.address, "Unknown");
    }

    #[test]
    fn fallback_names_carry_the_halt_kind() {
        let fuel = fallback_location(&pickup(), &dropoff(), HaltKind::Fuel);
        assert_eq!(fuel.name, "Fuel Stop: Fallback Location");

        let sleeper = fallback_location(&pickup(), &dropoff(), HaltKind::Sleeper);
        assert_eq!(sleeper.name, "Sleeper Stop: Fallback Location");

        let stop = fallback_location(&pickup(), &dropoff(), HaltKind::Stop);
        assert_eq!(stop.name, "Fallback Location");

        let drive = fallback_location(&pickup(), &dropoff(), HaltKind::Drive);
        assert_eq!(drive.name, "Fallback Location");
    }

    #[test]
    fn midpoint_provider_is_deterministic() {
        let provider = MidpointWaypoints;
        let first = provider.waypoint(&pickup(), &dropoff(), HaltKind::Break);
        let second = provider.waypoint(&pickup(), &dropoff(), HaltKind::Break);
        assert_eq!(first, second);
    }

    #[test]
    fn road_names_split_on_the_first_comma() {
        let (name, address) = split_road_name("Cleveland HSt, Amarillo, TX");
        assert_eq!(name, "Cleveland HSt");
        assert_eq!(address, "Amarillo, TX");

        let (name, address) = split_road_name("Interstate 40");
        assert_eq!(name, "Interstate 40");
        assert_eq!(address, "Unknown");
    }
}
