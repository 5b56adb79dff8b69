//! Compact, locale-independent formatting of market figures.

use chrono::{DateTime, Utc};

pub const PLACEHOLDER: &str = "-";
pub const UNKNOWN_AGE: &str = "Unknown";

const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// `$1.23B`, `$4.56M`, `$7.89K` or `$12.34`. Zero renders; `None` or NaN does not.
pub fn format_currency(value: Option<f64>) -> String {
    let value = match value {
        Some(v) if v.is_finite() => v,
        _ => return PLACEHOLDER.to_string(),
    };

    if value >= BILLION {
        format!("${:.2}B", value / BILLION)
    } else if value >= MILLION {
        format!("${:.2}M", value / MILLION)
    } else if value >= THOUSAND {
        format!("${:.2}K", value / THOUSAND)
    } else {
        format!("${:.2}", value)
    }
}

/// Unit price with precision scaled to the magnitude so sub-cent tokens stay readable.
///
/// A zero price renders as the placeholder, the same as a missing one.
pub fn format_price(price: Option<f64>) -> String {
    let price = match price {
        Some(p) if p.is_finite() && p != 0.0 => p,
        _ => return PLACEHOLDER.to_string(),
    };

    if price < 0.0001 {
        format!("${:.8}", price)
    } else if price < 1.0 {
        format!("${:.6}", price)
    } else {
        format!("${:.2}", price)
    }
}

/// Same as [`format_price`] for the provider's textual prices.
pub fn format_price_str(price: Option<&str>) -> String {
    format_price(price.and_then(parse_decimal))
}

/// Lenient decimal parse; malformed or non-finite input yields `None`.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn format_age(timestamp_ms: Option<i64>) -> String {
    format_age_at(timestamp_ms, Utc::now())
}

/// Relative age against `now`. Uses the absolute distance so clock skew
/// on future-dated pairs still yields a readable age.
pub fn format_age_at(timestamp_ms: Option<i64>, now: DateTime<Utc>) -> String {
    let created = match timestamp_ms {
        Some(ts) if ts != 0 => ts,
        _ => return UNKNOWN_AGE.to_string(),
    };

    let diff_ms = (now.timestamp_millis() as i128 - created as i128).unsigned_abs();
    let hours = diff_ms as f64 / MILLIS_PER_HOUR;

    if hours < 1.0 {
        format!("{} mins ago", (hours * 60.0).floor() as u64)
    } else if hours < 24.0 {
        format!("{} hours ago", hours.floor() as u64)
    } else {
        format!("{} days ago", (hours / 24.0).floor() as u64)
    }
}

/// Signed percentage as shown on pair badges: `+12.5%`, `-3%`, `0%`.
pub fn format_change(change: Option<f64>) -> String {
    match change {
        Some(c) if c.is_finite() => {
            let sign = if c > 0.0 { "+" } else { "" };
            format!("{}{}%", sign, c)
        }
        _ => PLACEHOLDER.to_string(),
    }
}

/// Calendar date (UTC) of an epoch-millisecond timestamp.
pub fn format_date(timestamp_ms: Option<i64>) -> String {
    timestamp_ms
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}
