use anyhow::Result;
use chrono::NaiveDateTime;
use serde_json::json;

use crate::checkout;
use crate::format::{format_price, format_total_hours};
use crate::marketplace::MarketplaceClient;

pub async fn run(
    client: &MarketplaceClient,
    schedule_id: i64,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<()> {
    let quote = checkout::quote(client, schedule_id, start, end).await?;
    println!(
        "{}",
        json!({
            "quote": quote,
            "duration": format_total_hours(quote.total_hours),
            "price": format_price(quote.total_price),
        })
    );
    Ok(())
}
