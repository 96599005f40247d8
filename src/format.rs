//! Display formatting shared by the service and the command line.

use chrono::NaiveDateTime;

use crate::availability::BOOKING_DATETIME_FORMAT;
use crate::marketplace::de::parse_local_datetime;

pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%d %b %Y (%H:%M)").to_string()
}

/// Two decimals with comma thousands separators, e.g. `1,234.50`.
pub fn format_price(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, cents)
}

/// Whole ratings print without decimals, the rest with one.
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{:.0}", rating)
    } else {
        format!("{:.1}", rating)
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{} {}", n, unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

/// `2 days 3 hours`, `1 day`, `5 hours`. Zero or less reads `0 hour`.
pub fn format_total_hours(total_hours: f64) -> String {
    if total_hours <= 0.0 {
        return "0 hour".to_string();
    }
    let total = total_hours.floor() as i64;
    let days = total / 24;
    let hours = total % 24;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(plural(days, "day"));
    }
    if hours > 0 {
        parts.push(plural(hours, "hour"));
    }
    if parts.is_empty() {
        return "0 hour".to_string();
    }
    parts.join(" ")
}

/// Reads a datetime given on the command line or in a request body,
/// either ISO 8601 or `dd/MM/yyyy HH:mm`.
pub fn parse_datetime_arg(value: &str) -> anyhow::Result<NaiveDateTime> {
    parse_local_datetime(value)
        .or_else(|| NaiveDateTime::parse_from_str(value.trim(), BOOKING_DATETIME_FORMAT).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid datetime: {}", value))
}
