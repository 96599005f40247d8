use reqwest::Method;
use serde::Serialize;

use super::{ClientError, MarketplaceClient};
use crate::models::PaymentMethod;

/// Body of `member/payments/store/{reservation}`.
#[derive(Debug, Clone, Serialize)]
pub struct NewPayment {
    pub amount: f64,
    pub method: PaymentMethod,
}

impl MarketplaceClient {
    /// Records the payment of a reservation.
    pub async fn store_payment(
        &self,
        reservation_id: i64,
        payment: &NewPayment,
    ) -> Result<bool, ClientError> {
        self.submit(
            Method::POST,
            &format!("member/payments/store/{}", reservation_id),
            "payment",
            payment,
        )
        .await
    }
}
