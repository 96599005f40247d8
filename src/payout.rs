//! Withdrawal requests against the signed in host's balance.

use thiserror::Error;

use crate::insights::{WithdrawalError, check_withdrawal};
use crate::marketplace::{ClientError, MarketplaceClient, NewWithdrawal};

#[derive(Debug, Error)]
pub enum PayoutError {
    #[error(transparent)]
    Withdrawal(#[from] WithdrawalError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("Failed to create")]
    Rejected,
}

/// Checks the amount against the current balance, then stores the
/// request. Nothing is sent upstream when the check fails.
pub async fn request_withdrawal(
    client: &MarketplaceClient,
    withdrawal: &NewWithdrawal,
) -> Result<(), PayoutError> {
    let user = client.current_user().await?;
    check_withdrawal(withdrawal.amount, user.balance.unwrap_or(0.0))?;

    if !client.store_withdrawal(withdrawal).await? {
        tracing::warn!("Withdrawal of {} by {} was refused", withdrawal.amount, user.username);
        return Err(PayoutError::Rejected);
    }
    tracing::info!("Requested withdrawal of {} for {}", withdrawal.amount, user.username);
    Ok(())
}
