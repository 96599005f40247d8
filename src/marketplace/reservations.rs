use chrono::NaiveDateTime;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{ClientError, MarketplaceClient, de};
use crate::availability::{RequestedRange, ReservationInterval, TimeRange};
use crate::models::{PaymentMethod, ReservationStatus, SpotType, VehicleColor, VehicleType};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub spot_id: Option<i64>,
    #[serde(default)]
    pub spot_name: Option<String>,
    #[serde(default)]
    pub spot_type: Option<SpotType>,
    #[serde(default)]
    pub spot_address: Option<String>,
    #[serde(default)]
    pub spot_image_path: Option<String>,
    #[serde(default)]
    pub vehicle: Option<i64>,
    #[serde(default)]
    pub vehicle_type: Option<VehicleType>,
    #[serde(default)]
    pub vehicle_license_plate: Option<String>,
    #[serde(default)]
    pub vehicle_province: Option<String>,
    #[serde(default)]
    pub vehicle_brand: Option<String>,
    #[serde(default)]
    pub vehicle_model: Option<String>,
    #[serde(default)]
    pub vehicle_color: Option<VehicleColor>,
    #[serde(default)]
    pub status: Option<ReservationStatus>,
    #[serde(deserialize_with = "de::local_datetime")]
    pub start_date_time: NaiveDateTime,
    #[serde(deserialize_with = "de::local_datetime")]
    pub end_date_time: NaiveDateTime,
    #[serde(default)]
    pub method: Option<PaymentMethod>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub review_id: Option<i64>,
    #[serde(default)]
    pub review_rating: Option<u8>,
    #[serde(default)]
    pub review_comment: Option<String>,
    /// Local wall-clock time of booking.
    #[serde(default, deserialize_with = "de::opt_wall_clock")]
    pub created_at: Option<NaiveDateTime>,
}

impl Reservation {
    pub fn interval(&self) -> ReservationInterval {
        TimeRange::new(self.start_date_time, self.end_date_time)
    }

    /// Canceled and removed reservations give their time back. A
    /// reservation without a status is assumed to hold it.
    pub fn holds_slot(&self) -> bool {
        self.status.is_none_or(ReservationStatus::holds_slot)
    }
}

/// Intervals of the reservations that still hold their slot.
pub fn blocking_intervals(reservations: &[Reservation]) -> Vec<ReservationInterval> {
    reservations
        .iter()
        .filter(|r| r.holds_slot())
        .map(Reservation::interval)
        .collect()
}

/// Body of `member/reservations/store/{schedule}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReservation {
    pub vehicle: i64,
    pub reservation_datetime: String,
}

impl NewReservation {
    pub fn new(vehicle: i64, range: &RequestedRange) -> Self {
        Self {
            vehicle,
            reservation_datetime: range.to_booking_datetime(),
        }
    }
}

/// Body of `member/reservations/update/{id}`. Only the vehicle can
/// change after booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationUpdate {
    pub vehicle: i64,
}

impl MarketplaceClient {
    /// Reservations against the signed in host's schedules.
    pub async fn reservations(&self) -> Result<Vec<Reservation>, ClientError> {
        self.fetch("member/reservations/index").await
    }

    /// Reservations made by the signed in renter.
    pub async fn renter_reservations(&self) -> Result<Vec<Reservation>, ClientError> {
        self.fetch("member/reservations/list").await
    }

    pub async fn schedule_reservations(
        &self,
        schedule_id: i64,
    ) -> Result<Vec<Reservation>, ClientError> {
        self.fetch(&format!("member/reservations/schedule/{}", schedule_id))
            .await
    }

    /// Books a range on a schedule. Returns the new reservation id, `0`
    /// when the API refused the booking.
    pub async fn store_reservation(
        &self,
        schedule_id: i64,
        reservation: &NewReservation,
    ) -> Result<i64, ClientError> {
        self.submit(
            Method::POST,
            &format!("member/reservations/store/{}", schedule_id),
            "reservation",
            reservation,
        )
        .await
    }

    pub async fn update_reservation(
        &self,
        id: i64,
        update: &ReservationUpdate,
    ) -> Result<bool, ClientError> {
        self.submit(
            Method::PUT,
            &format!("member/reservations/update/{}", id),
            "reservation",
            update,
        )
        .await
    }

    /// Cancels a reservation.
    pub async fn remove_reservation(&self, id: i64) -> Result<bool, ClientError> {
        self.patch(&format!("member/reservations/remove/{}", id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation(status: Option<&str>, start: &str, end: &str) -> Reservation {
        let status = status.map_or("null".to_string(), |s| format!("\"{}\"", s));
        serde_json::from_str(&format!(
            r#"{{"status": {}, "startDateTime": "{}", "endDateTime": "{}"}}"#,
            status, start, end
        ))
        .unwrap()
    }

    #[test]
    fn it_only_blocks_reservations_that_hold_a_slot() {
        let reservations = vec![
            reservation(Some("1"), "2024-01-01T08:00", "2024-01-01T10:00"),
            reservation(Some("2"), "2024-01-01T11:00", "2024-01-01T12:00"),
            reservation(Some("3"), "2024-01-01T13:00", "2024-01-01T14:00"),
            reservation(None, "2024-01-01T15:00", "2024-01-01T16:00"),
        ];
        let blocking = blocking_intervals(&reservations);
        assert_eq!(blocking.len(), 3);
        assert!(blocking.iter().all(|i| i.start.format("%H").to_string() != "13"));
    }

    #[test]
    fn it_decodes_vehicle_details() {
        let reservation: Reservation = serde_json::from_str(
            r#"{
                "id": 5,
                "status": 1,
                "vehicle": 2,
                "vehicleType": "suv",
                "vehicleColor": "silver",
                "method": "promptpay",
                "amount": "120.00",
                "startDateTime": "2024-01-01T08:00:00",
                "endDateTime": "2024-01-01T11:00:00"
            }"#,
        )
        .unwrap();
        assert_eq!(reservation.vehicle_type, Some(VehicleType::Suv));
        assert_eq!(reservation.vehicle_color, Some(VehicleColor::Silver));
        assert_eq!(reservation.method, Some(PaymentMethod::PromptPay));
        assert_eq!(reservation.amount, Some(120.0));
        assert_eq!(reservation.interval().duration().num_hours(), 3);
    }
}
