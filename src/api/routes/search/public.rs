//! Public types for the schedule search API
use serde::Deserialize;

use crate::listing::ScheduleSearch;
use crate::marketplace::de;

pub use crate::listing::Page;
pub use crate::marketplace::Schedule;

/// Search criteria plus the page to return
#[derive(Deserialize, Debug, Default)]
pub struct SearchQuery {
    #[serde(flatten)]
    pub search: ScheduleSearch,
    #[serde(default, deserialize_with = "de::opt_count")]
    pub page: Option<usize>,
    #[serde(default, deserialize_with = "de::opt_count")]
    pub per_page: Option<usize>,
}
