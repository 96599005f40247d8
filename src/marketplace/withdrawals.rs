use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{ClientError, MarketplaceClient, de};
use crate::models::WithdrawalStatus;

/// A host's request to pay out part of their balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    pub id: i64,
    pub status: WithdrawalStatus,
    #[serde(deserialize_with = "de::decimal")]
    pub amount: f64,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default, deserialize_with = "de::opt_instant")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `member/withdrawals/store`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWithdrawal {
    #[serde(deserialize_with = "de::decimal")]
    pub amount: f64,
    pub method: String,
    pub account: String,
}

impl MarketplaceClient {
    pub async fn withdrawals(&self) -> Result<Vec<Withdrawal>, ClientError> {
        self.fetch("member/withdrawals/index").await
    }

    pub async fn store_withdrawal(&self, withdrawal: &NewWithdrawal) -> Result<bool, ClientError> {
        self.submit(
            Method::POST,
            "member/withdrawals/store",
            "withdrawal",
            withdrawal,
        )
        .await
    }
}
