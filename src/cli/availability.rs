use anyhow::Result;
use serde_json::json;

use crate::availability::{compute_free_intervals, unavailable_intervals};
use crate::format::format_datetime;
use crate::marketplace::{MarketplaceClient, blocking_intervals};
use crate::models::spot_type_label;

pub async fn run(client: &MarketplaceClient, schedule_id: i64) -> Result<()> {
    let (schedule, reservations) = tokio::join!(
        client.schedule(schedule_id),
        client.schedule_reservations(schedule_id)
    );
    let schedule = schedule?;
    let window = schedule.window();
    let blocking = blocking_intervals(&reservations?);

    let describe = |ranges: Vec<crate::availability::TimeRange>| {
        ranges
            .into_iter()
            .map(|r| {
                json!({
                    "start": r.start,
                    "end": r.end,
                    "label": format!("{} - {}", format_datetime(&r.start), format_datetime(&r.end)),
                })
            })
            .collect::<Vec<_>>()
    };

    println!(
        "{}",
        json!({
            "schedule_id": schedule_id,
            "spot_name": schedule.spot_name,
            "spot_type": spot_type_label(schedule.spot_type),
            "minimum_hours": window.minimum_hours,
            "available": describe(compute_free_intervals(&window, &blocking)),
            "unavailable": describe(unavailable_intervals(&blocking)),
        })
    );
    Ok(())
}
