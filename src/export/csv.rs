//! Spreadsheet-friendly CSV summary.
//!
//! Twelve fixed rows of scalar metrics; the momentum and trader-behavior
//! structures are intentionally not flattened here (the JSON export has them).

use ::csv::{QuoteStyle, Terminator, WriterBuilder};
use dexdash_core::{AnalyticsDocument, DexDashError, Result};

use crate::util::format::{format_date, PLACEHOLDER};

pub const HEADER: [&str; 3] = ["Metric", "Value", "Unit/Note"];

/// `(metric, value, unit)` rows in export order.
pub fn rows(doc: &AnalyticsDocument) -> Vec<[String; 3]> {
    let id = &doc.identity;
    let market = &doc.market_metrics;
    let change = &doc.momentum_profile.price_change;
    let txns = &doc.trader_behavior.transactions_24h;

    vec![
        row("Symbol", text(id.symbol.as_deref()), "Identity"),
        row("Name", text(id.name.as_deref()), "Identity"),
        row("Address", text(id.address.as_deref()), "Contract"),
        row("Chain", text(id.chain.as_deref()), "Network"),
        row("Price USD", price(market.price_usd_text.as_deref(), market.price_usd), "USD"),
        row("Liquidity", number(market.liquidity_usd), "USD"),
        row("FDV", number(market.fdv), "USD"),
        row("24h Volume", number(doc.momentum_profile.volume.h24), "USD"),
        row("24h Change", change.h24.map(|c| format!("{}%", c)).unwrap_or_else(|| PLACEHOLDER.to_string()), "Percentage"),
        row("Txns Buys", count(txns.buys), "Count"),
        row("Txns Sells", count(txns.sells), "Count"),
        row("Pair Age", format_date(id.created_at), "Date"),
    ]
}

/// Header plus twelve rows, `\n`-separated, with no trailing newline.
pub fn render(doc: &AnalyticsDocument) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER).map_err(export_error)?;
    for fields in rows(doc) {
        writer.write_record(&fields).map_err(export_error)?;
    }

    let bytes = writer.into_inner().map_err(|e| DexDashError::Export(e.to_string()))?;
    let mut content = String::from_utf8(bytes).map_err(|e| DexDashError::Export(e.to_string()))?;
    if content.ends_with('\n') {
        content.pop();
    }
    Ok(content)
}

fn export_error(err: ::csv::Error) -> DexDashError {
    DexDashError::Export(format!("CSV write failed: {}", err))
}

fn row(metric: &str, value: String, unit: &str) -> [String; 3] {
    [metric.to_string(), value, unit.to_string()]
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or(PLACEHOLDER).to_string()
}

/// Provider text when available so trailing zeros survive.
fn price(text: Option<&str>, value: Option<f64>) -> String {
    text.map(str::to_string).unwrap_or_else(|| number(value))
}

fn number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn count(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| PLACEHOLDER.to_string())
}
