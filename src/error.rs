//! Error taxonomy for schedule generation.

use thiserror::Error;

use crate::traits::DistanceUnavailable;

#[derive(Debug, Clone, Error)]
pub enum ScheduleError {
    /// The trip distance is unknown and the distance provider failed.
    /// Fatal: no schedule is produced and nothing on the trip changes.
    #[error(transparent)]
    DistanceUnavailable(#[from] DistanceUnavailable),

    /// Trip inputs were rejected before simulation began.
    #[error("invalid trip parameters: {0}")]
    InvalidTrip(String),
}
