//! Public types for the quote and reservation API
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::marketplace::{Vehicle, de};

pub use crate::availability::BookingQuote;
pub use crate::checkout::{BookingRequest, Receipt};
pub use crate::marketplace::{Reservation, ReservationUpdate};

/// Range as picked by the renter, before snapping
#[derive(Deserialize, Debug)]
pub struct QuoteRequest {
    #[serde(deserialize_with = "de::local_datetime")]
    pub start: NaiveDateTime,
    #[serde(deserialize_with = "de::local_datetime")]
    pub end: NaiveDateTime,
}

/// A vehicle as offered in the booking form
#[derive(Serialize, Debug, PartialEq)]
pub struct VehicleChoice {
    pub id: i64,
    pub name: String,
    pub license_plate: String,
    pub vehicle_type: &'static str,
}

impl From<&Vehicle> for VehicleChoice {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.vehicle_id,
            name: vehicle.display_name(),
            license_plate: vehicle.license_plate.clone(),
            vehicle_type: vehicle.vehicle_type.label(),
        }
    }
}
