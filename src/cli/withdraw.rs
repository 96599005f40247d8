use anyhow::Result;
use serde_json::json;

use crate::format::format_price;
use crate::marketplace::{MarketplaceClient, NewWithdrawal};
use crate::payout;

pub async fn run(
    client: &MarketplaceClient,
    amount: f64,
    method: String,
    account: String,
) -> Result<()> {
    let withdrawal = NewWithdrawal {
        amount,
        method,
        account,
    };
    payout::request_withdrawal(client, &withdrawal).await?;
    println!(
        "{}",
        json!({
            "requested": format_price(withdrawal.amount),
            "method": withdrawal.method,
            "account": withdrawal.account,
        })
    );
    Ok(())
}
