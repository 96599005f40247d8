use anyhow::Result;
use serde_json::json;

use crate::checkout;
use crate::marketplace::MarketplaceClient;

pub async fn run(client: &MarketplaceClient, reservation_id: i64) -> Result<()> {
    checkout::cancel(client, reservation_id).await?;
    println!("{}", json!({ "canceled": reservation_id }));
    Ok(())
}
