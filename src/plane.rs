use crate::time::Time;
use serde::{Deserialize, Serialize};

/// One aircraft's demand on the tower, as read from the scenario file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaneRequest {
    pub remaining_fuel: i64,
    pub gate_distance: i64,
    pub service_time: i64,
    pub requested_takeoff_time: Time,
    pub max_complaint_time: i64,
}
