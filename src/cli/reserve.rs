use anyhow::Result;
use chrono::NaiveDateTime;
use serde_json::json;

use crate::checkout::{self, BookingRequest};
use crate::format::format_price;
use crate::marketplace::MarketplaceClient;
use crate::models::PaymentMethod;

pub async fn run(
    client: &MarketplaceClient,
    schedule_id: i64,
    vehicle: i64,
    start: NaiveDateTime,
    end: NaiveDateTime,
    method: PaymentMethod,
) -> Result<()> {
    let request = BookingRequest {
        start,
        end,
        vehicle: Some(vehicle),
        method: Some(method),
    };
    let receipt = checkout::checkout(client, schedule_id, &request).await?;
    println!(
        "{}",
        json!({
            "receipt": receipt,
            "amount": format_price(receipt.total_price),
            "method": receipt.method.label(),
        })
    );
    Ok(())
}
