//! Public types for the availability API
use serde::{Deserialize, Serialize};

use crate::availability::{FreeInterval, ReservationInterval};

/// Free and taken time of a schedule, both ascending by start
#[derive(Serialize, Deserialize, Debug)]
pub struct AvailabilityResponse {
    pub schedule_id: i64,
    pub minimum_hours: u32,
    pub available: Vec<FreeInterval>,
    pub unavailable: Vec<ReservationInterval>,
}
