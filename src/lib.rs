//! hos-planner core
//!
//! Plans multi-day truck trips under federal hours-of-service limits,
//! turning a trip distance into an ordered sequence of duty segments.

pub mod traits;
pub mod model;
pub mod limits;
pub mod error;
pub mod estimator;
pub mod simulator;
pub mod route;
pub mod ors;
pub mod waypoint;
pub mod haversine;
