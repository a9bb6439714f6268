//! Real US city locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Distances in the tests are fixed
//! per scenario, so these only need to be plausible endpoints.

use hos_planner::model::Location;

pub fn chicago() -> Location {
    Location::new("Chicago", "Chicago, IL, USA", 41.8781, -87.6298)
}

pub fn denver() -> Location {
    Location::new("Denver", "Denver, CO, USA", 39.7392, -104.9903)
}

pub fn los_angeles() -> Location {
    Location::new("Los Angeles", "Los Angeles, CA, USA", 34.0522, -118.2437)
}

pub fn amarillo() -> Location {
    Location::new("Amarillo", "Amarillo, TX, USA", 35.2220, -101.8313)
}
