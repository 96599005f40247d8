#[macro_use]
pub mod models;

pub mod api;
pub mod availability;
pub mod checkout;
pub mod cli;
pub mod core;
pub mod fetch;
pub mod format;
pub mod insights;
pub mod listing;
pub mod marketplace;
pub mod payout;
