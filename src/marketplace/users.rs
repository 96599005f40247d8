use serde::{Deserialize, Serialize};

use super::{ClientError, MarketplaceClient, de};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub balance: Option<f64>,
}

impl MarketplaceClient {
    /// The signed in user, including their balance.
    pub async fn current_user(&self) -> Result<User, ClientError> {
        self.fetch("member/users/index").await
    }
}
