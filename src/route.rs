//! Route geometry as decoded coordinate sequences.
//!
//! Stores latitude/longitude points directly for internal processing.
//! Encoding to/from compact wire formats happens at the adapter boundary,
//! not inside the scheduler.

use serde::{Deserialize, Serialize};

/// A driving route as decoded (latitude, longitude) points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    points: Vec<(f64, f64)>,
}

impl RoutePath {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Points strictly between the endpoints, the candidates for waypoint
    /// picks. Empty when the path has fewer than three points.
    pub fn interior(&self) -> &[(f64, f64)] {
        if self.points.len() < 3 {
            &[]
        } else {
            &self.points[1..self.points.len() - 1]
        }
    }

    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_excludes_endpoints() {
        let path = RoutePath::new(vec![(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]);
        assert_eq!(path.interior(), &[(2.0, 2.0), (3.0, 3.0)]);
    }

    #[test]
    fn short_paths_have_no_interior() {
        assert!(RoutePath::new(vec![]).interior().is_empty());
        assert!(RoutePath::new(vec![(1.0, 1.0)]).interior().is_empty());
        assert!(RoutePath::new(vec![(1.0, 1.0), (2.0, 2.0)]).interior().is_empty());
    }
}
