//! Core provider traits for the trip scheduler.
//!
//! These are intentionally minimal. The scheduler only ever sees resolved
//! miles and labelled locations; HTTP, API keys, and response shapes live in
//! the concrete adapters.

use thiserror::Error;

use crate::model::{HaltKind, Location};

/// Raised when a trip distance is unknown and the provider cannot resolve it.
///
/// This is the one provider failure the scheduler does not absorb.
#[derive(Debug, Clone, Error)]
#[error("distance unavailable: {reason}")]
pub struct DistanceUnavailable {
    pub reason: String,
}

impl DistanceUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A resolved trip distance with a human-readable duration label.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEstimate {
    pub miles: f64,
    /// e.g. "38h 10m".
    pub duration_label: String,
}

/// Resolves driving distance between two coordinate pairs.
pub trait DistanceProvider {
    /// Coordinates are (lat, lng).
    fn resolve(
        &self,
        from: (f64, f64),
        to: (f64, f64),
    ) -> Result<RouteEstimate, DistanceUnavailable>;
}

/// Produces a representative named location along the route for a halt.
///
/// Implementations must never fail outward: on any lookup error they return
/// a deterministic fallback at the pickup/dropoff midpoint, labelled by halt
/// kind. The scheduler does not distinguish real waypoints from fallbacks.
pub trait WaypointProvider {
    fn waypoint(&self, pickup: &Location, dropoff: &Location, halt: HaltKind) -> Location;
}
