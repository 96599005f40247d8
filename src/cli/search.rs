use anyhow::{Context, Result};
use serde_json::json;

use crate::listing::{ScheduleSearch, SortOrder, paginate};
use crate::marketplace::MarketplaceClient;

pub async fn run(
    client: &MarketplaceClient,
    query: Option<String>,
    sort: Option<u8>,
    page: usize,
    per_page: usize,
) -> Result<()> {
    let sort = sort
        .map(SortOrder::try_from)
        .transpose()
        .context("Invalid sort order")?;
    let search = ScheduleSearch {
        q: query,
        sort,
        ..Default::default()
    };

    let schedules = client.search_schedules().await?;
    let page = paginate(search.apply(schedules), page, per_page);
    println!(
        "{}",
        json!({
            "search": search,
            "results": page,
        })
    );
    Ok(())
}
