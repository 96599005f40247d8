//! Public types for the reviews API
use serde::Serialize;

use crate::insights::RatingSummary;

pub use crate::marketplace::{Review, ReviewDraft, ReviewOutcome};

#[derive(Serialize, Debug)]
pub struct ScheduleReviews {
    pub schedule_id: i64,
    pub summary: RatingSummary,
    pub reviews: Vec<Review>,
}

#[derive(Serialize, Debug)]
pub struct ReviewResponse {
    pub outcome: ReviewOutcome,
}
