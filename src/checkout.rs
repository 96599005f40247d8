//! Quoting and booking a range on a schedule against the live API.
//!
//! Both steps fetch the schedule and its reservations together and
//! resolve availability from that snapshot. The API re-checks on store.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::availability::{
    BookingError, BookingQuote, RequestedRange, ReservationInterval, ScheduleWindow, total_hours,
    total_price, validate_booking,
};
use crate::marketplace::{
    ClientError, MarketplaceClient, NewPayment, NewReservation, ReservationUpdate, ReviewDraft,
    ReviewOutcome, Schedule, blocking_intervals, de,
};
use crate::models::PaymentMethod;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Booking(#[from] BookingError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("Failed to create")]
    Rejected,
    #[error("Failed to create payment")]
    PaymentFailed { reservation_id: i64 },
    #[error("Failed to update")]
    NotUpdated,
    #[error("Failed to delete")]
    NotRemoved,
    #[error("Rating must be between 1 and 5")]
    InvalidRating,
}

/// A renter's booking as submitted, before any check.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    #[serde(deserialize_with = "de::local_datetime")]
    pub start: NaiveDateTime,
    #[serde(deserialize_with = "de::local_datetime")]
    pub end: NaiveDateTime,
    #[serde(default)]
    pub vehicle: Option<i64>,
    #[serde(default)]
    pub method: Option<PaymentMethod>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub reservation_id: i64,
    pub schedule_id: i64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub total_hours: f64,
    pub total_price: f64,
    pub method: PaymentMethod,
}

/// Shapes a picked range for `window`. An empty pick is refused before
/// it is extended to the minimum.
pub fn shape_range(
    window: &ScheduleWindow,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<RequestedRange, BookingError> {
    RequestedRange::new(start, end)?;
    Ok(RequestedRange::from_picker(start, end, window.minimum_hours))
}

async fn snapshot(
    client: &MarketplaceClient,
    schedule_id: i64,
) -> Result<(Schedule, Vec<ReservationInterval>), ClientError> {
    let (schedule, reservations) = tokio::join!(
        client.schedule(schedule_id),
        client.schedule_reservations(schedule_id)
    );
    Ok((schedule?, blocking_intervals(&reservations?)))
}

pub async fn quote(
    client: &MarketplaceClient,
    schedule_id: i64,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<BookingQuote, CheckoutError> {
    let (schedule, reservations) = snapshot(client, schedule_id).await?;
    let window = schedule.window();
    let range = shape_range(&window, start, end)?;
    Ok(BookingQuote::new(
        &window,
        &reservations,
        &range,
        schedule.price_per_hour,
    ))
}

/// Validates the booking, stores the reservation, then records its
/// payment. A stored reservation is not rolled back when the payment
/// fails; the error carries its id.
pub async fn checkout(
    client: &MarketplaceClient,
    schedule_id: i64,
    request: &BookingRequest,
) -> Result<Receipt, CheckoutError> {
    let (schedule, reservations) = snapshot(client, schedule_id).await?;
    let window = schedule.window();
    let range = shape_range(&window, request.start, request.end)?;
    let booking = validate_booking(
        &window,
        &reservations,
        Some(range),
        request.vehicle,
        request.method,
    )?;

    let reservation_id = client
        .store_reservation(
            schedule_id,
            &NewReservation::new(booking.vehicle, &booking.range),
        )
        .await?;
    if reservation_id == 0 {
        tracing::warn!("Reservation on schedule {} was refused", schedule_id);
        return Err(CheckoutError::Rejected);
    }

    let hours = total_hours(&booking.range, window.minimum_hours);
    let amount = total_price(hours, schedule.price_per_hour);
    let payment = NewPayment {
        amount,
        method: booking.method,
    };
    match client.store_payment(reservation_id, &payment).await {
        Ok(true) => {}
        Ok(false) => return Err(CheckoutError::PaymentFailed { reservation_id }),
        Err(err) => {
            tracing::error!("Payment of reservation {} failed: {}", reservation_id, err);
            return Err(CheckoutError::PaymentFailed { reservation_id });
        }
    }

    tracing::info!("Booked reservation {} on schedule {}", reservation_id, schedule_id);
    Ok(Receipt {
        reservation_id,
        schedule_id,
        start: booking.range.start,
        end: booking.range.end,
        total_hours: hours,
        total_price: amount,
        method: booking.method,
    })
}

/// Moves a booked reservation to another of the renter's vehicles.
pub async fn change_vehicle(
    client: &MarketplaceClient,
    reservation_id: i64,
    vehicle: i64,
) -> Result<(), CheckoutError> {
    let update = ReservationUpdate { vehicle };
    if !client.update_reservation(reservation_id, &update).await? {
        return Err(CheckoutError::NotUpdated);
    }
    Ok(())
}

/// Cancels a reservation, giving its time back to the schedule.
pub async fn cancel(client: &MarketplaceClient, reservation_id: i64) -> Result<(), CheckoutError> {
    if !client.remove_reservation(reservation_id).await? {
        tracing::warn!("Cancelling reservation {} was refused", reservation_id);
        return Err(CheckoutError::NotRemoved);
    }
    tracing::info!("Canceled reservation {}", reservation_id);
    Ok(())
}

/// Leaves or replaces the review of a reservation.
pub async fn review(
    client: &MarketplaceClient,
    reservation_id: i64,
    draft: &ReviewDraft,
) -> Result<ReviewOutcome, CheckoutError> {
    if !(1..=5).contains(&draft.rating) {
        return Err(CheckoutError::InvalidRating);
    }
    match client.upsert_review(reservation_id, draft).await? {
        ReviewOutcome::Rejected => Err(CheckoutError::Rejected),
        outcome => Ok(outcome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn it_refuses_an_empty_pick_before_extending_it() {
        let window = ScheduleWindow::new(at(0, 0), at(23, 0), Some(2));
        assert_eq!(
            shape_range(&window, at(9, 0), at(9, 0)),
            Err(BookingError::EmptyDuration)
        );

        let range = shape_range(&window, at(9, 1), at(9, 40)).unwrap();
        assert_eq!(range.start, at(9, 0));
        assert_eq!(range.end, at(11, 0));
    }

    async fn mock_answer(
        server: &mut mockito::ServerGuard,
        method: &str,
        path: &str,
        body: &str,
    ) -> mockito::Mock {
        server
            .mock(method, path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    #[tokio::test]
    async fn it_reports_a_refused_cancellation() {
        let mut server = mockito::Server::new_async().await;
        let _ok = mock_answer(&mut server, "PATCH", "/member/reservations/remove/5", "true").await;
        let _refused =
            mock_answer(&mut server, "PATCH", "/member/reservations/remove/6", "false").await;
        let client = MarketplaceClient::new(&server.url(), None);

        cancel(&client, 5).await.unwrap();
        let err = cancel(&client, 6).await.unwrap_err();
        assert!(matches!(err, CheckoutError::NotRemoved));
    }

    #[tokio::test]
    async fn it_changes_the_vehicle_of_a_reservation() {
        let mut server = mockito::Server::new_async().await;
        let update = server
            .mock("PUT", "/member/reservations/update/5")
            .match_body(mockito::Matcher::Regex(r#""vehicle":9"#.into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("true")
            .create_async()
            .await;
        let client = MarketplaceClient::new(&server.url(), None);

        change_vehicle(&client, 5, 9).await.unwrap();
        update.assert_async().await;
    }

    #[tokio::test]
    async fn it_checks_the_rating_before_sending_a_review() {
        let mut server = mockito::Server::new_async().await;
        let upsert = server
            .mock("PUT", "/member/reviews/update/5")
            .expect(0)
            .create_async()
            .await;
        let client = MarketplaceClient::new(&server.url(), None);

        let draft = ReviewDraft {
            rating: 0,
            comment: None,
        };
        let err = review(&client, 5, &draft).await.unwrap_err();
        assert!(matches!(err, CheckoutError::InvalidRating));
        upsert.assert_async().await;
    }

    #[tokio::test]
    async fn it_reports_a_rejected_review() {
        let mut server = mockito::Server::new_async().await;
        let _upsert = mock_answer(&mut server, "PUT", "/member/reviews/update/5", "0").await;
        let client = MarketplaceClient::new(&server.url(), None);

        let draft = ReviewDraft {
            rating: 5,
            comment: Some("Tight turn at the ramp".into()),
        };
        let err = review(&client, 5, &draft).await.unwrap_err();
        assert!(matches!(err, CheckoutError::Rejected));
    }
}
