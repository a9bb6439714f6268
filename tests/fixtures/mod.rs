//! Test fixtures for hos-planner.
//!
//! Provides real cross-country locations and stub providers for exercising
//! the scheduler without network access.

pub mod us_cities;

pub use us_cities::*;
