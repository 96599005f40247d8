use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{ClientError, MarketplaceClient, de};
use crate::models::ReviewStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub review_id: i64,
    #[serde(default)]
    pub reservation: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub status: Option<ReviewStatus>,
    #[serde(deserialize_with = "de::rating")]
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "de::opt_instant")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `member/reviews/update/{reservation}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// What the API did with a review draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewOutcome {
    Rejected,
    Created,
    Updated,
}

impl From<u8> for ReviewOutcome {
    fn from(code: u8) -> Self {
        match code {
            1 => ReviewOutcome::Created,
            2 => ReviewOutcome::Updated,
            _ => ReviewOutcome::Rejected,
        }
    }
}

impl MarketplaceClient {
    /// Reviews left on the signed in host's schedules.
    pub async fn reviews(&self) -> Result<Vec<Review>, ClientError> {
        self.fetch("member/reviews/index").await
    }

    pub async fn schedule_reviews(&self, schedule_id: i64) -> Result<Vec<Review>, ClientError> {
        self.fetch(&format!("member/reviews/schedule/{}", schedule_id))
            .await
    }

    /// Creates or replaces the review of a reservation.
    pub async fn upsert_review(
        &self,
        reservation_id: i64,
        draft: &ReviewDraft,
    ) -> Result<ReviewOutcome, ClientError> {
        let code: u8 = self
            .submit(
                Method::PUT,
                &format!("member/reviews/update/{}", reservation_id),
                "review",
                draft,
            )
            .await?;
        Ok(ReviewOutcome::from(code))
    }
}
