use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod availability;
pub mod cancel;
pub mod check;
pub mod reserve;
pub mod search;
pub mod serve;
pub mod summary;
pub mod withdraw;

use crate::core::{AppConfig, init_tracing};
use crate::format::parse_datetime_arg;
use crate::marketplace::MarketplaceClient;
use crate::models::PaymentMethod;
use chrono::NaiveDateTime;

/// Accepts `2024-01-01T08:00` or `01/01/2024 08:00`.
fn datetime(value: &str) -> Result<NaiveDateTime, String> {
    parse_datetime_arg(value).map_err(|e| e.to_string())
}

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long)]
        host: Option<String>,

        /// Set the server port
        #[arg(long)]
        port: Option<String>,
    },
    /// Print the free and taken time of a schedule
    Availability {
        #[arg(long)]
        schedule: i64,
    },
    /// Quote a range on a schedule and tell whether it can be booked
    Check {
        #[arg(long)]
        schedule: i64,
        #[arg(long, value_parser = datetime)]
        start: NaiveDateTime,
        #[arg(long, value_parser = datetime)]
        end: NaiveDateTime,
    },
    /// Book a range on a schedule and pay for it
    Reserve {
        #[arg(long)]
        schedule: i64,
        #[arg(long)]
        vehicle: i64,
        #[arg(long, value_parser = datetime)]
        start: NaiveDateTime,
        #[arg(long, value_parser = datetime)]
        end: NaiveDateTime,
        /// One of bank, promptpay, card, paypal, google, apple, payoneer, usdt
        #[arg(long)]
        method: PaymentMethod,
    },
    /// Cancel a reservation
    Cancel {
        #[arg(long)]
        reservation: i64,
    },
    /// Search bookable schedules
    Search {
        #[arg(long)]
        query: Option<String>,
        /// Sort order code, 0 (top rated) to 7
        #[arg(long)]
        sort: Option<u8>,
        #[arg(long, default_value = "1")]
        page: usize,
    },
    /// Print the host dashboard aggregates
    Summary {},
    /// Request a payout from the host balance
    Withdraw {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        method: String,
        #[arg(long)]
        account: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();
    let config = AppConfig::default();

    if !matches!(args.command, Some(Command::Serve { .. })) {
        init_tracing(&format!("{}=info", env!("CARGO_CRATE_NAME")));
    }
    let client = MarketplaceClient::new(&config.api_url, config.session_cookie.clone());

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port, config).await?;
        }
        Some(Command::Availability { schedule }) => {
            availability::run(&client, schedule).await?;
        }
        Some(Command::Check {
            schedule,
            start,
            end,
        }) => {
            check::run(&client, schedule, start, end).await?;
        }
        Some(Command::Reserve {
            schedule,
            vehicle,
            start,
            end,
            method,
        }) => {
            reserve::run(&client, schedule, vehicle, start, end, method).await?;
        }
        Some(Command::Cancel { reservation }) => {
            cancel::run(&client, reservation).await?;
        }
        Some(Command::Search { query, sort, page }) => {
            search::run(&client, query, sort, page, config.page_size).await?;
        }
        Some(Command::Summary {}) => {
            summary::run(&client).await?;
        }
        Some(Command::Withdraw {
            amount,
            method,
            account,
        }) => {
            withdraw::run(&client, amount, method, account).await?;
        }
        None => {}
    }

    Ok(())
}
