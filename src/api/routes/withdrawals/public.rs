//! Public types for the withdrawals API

pub use crate::marketplace::NewWithdrawal;
