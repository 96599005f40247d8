use anyhow::Result;
use chrono::Local;
use serde_json::json;

use crate::fetch::FetchState;
use crate::format::format_rating;
use crate::insights::{RatingSummary, ReservationSummary, WithdrawalSummary};
use crate::marketplace::MarketplaceClient;

pub async fn run(client: &MarketplaceClient) -> Result<()> {
    let today = Local::now().date_naive();
    let (reservations, withdrawals, reviews) = tokio::join!(
        FetchState::load(client.reservations()),
        FetchState::load(client.withdrawals()),
        FetchState::load(client.reviews()),
    );

    // Reservations are required, the rest print as errors when missing
    let reservations = reservations.into_result()?;
    let ratings = reviews.map(|r| RatingSummary::new(&r));
    println!(
        "{}",
        json!({
            "reservations": ReservationSummary::new(&reservations, today),
            "withdrawals": withdrawals.map(|w| WithdrawalSummary::new(&w)),
            "rating": ratings.data().map(|r| format_rating(r.average)),
            "ratings": ratings,
        })
    );
    Ok(())
}
