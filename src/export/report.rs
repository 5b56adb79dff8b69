//! Static, printable text report of a pair

use chrono::{DateTime, Utc};
use dexdash_core::{AnalyticsDocument, TimeWindow};

use crate::util::format::{format_age_at, format_change, format_currency, format_price, PLACEHOLDER};
use crate::util::links::chart_embed_url;

pub const CHART_PLACEHOLDER: &str = "[Chart Interactive View Not Available in Print - See JSON Data for History]";

const WIDTH: usize = 60;
const REPORT_WINDOWS: [TimeWindow; 3] = [TimeWindow::M5, TimeWindow::H1, TimeWindow::H24];

pub fn render(doc: &AnalyticsDocument, now: DateTime<Utc>) -> String {
    let id = &doc.identity;
    let market = &doc.market_metrics;
    let txns = &doc.trader_behavior.transactions_24h;
    let or_dash = |v: Option<&str>| v.unwrap_or(PLACEHOLDER).to_string();

    let mut out = Vec::new();
    out.push("=".repeat(WIDTH));
    out.push(format!("{} ({})", or_dash(id.name.as_deref()), or_dash(id.symbol.as_deref())));
    out.push(format!("On {} via {}", or_dash(id.chain.as_deref()), or_dash(id.dex.as_deref())));
    out.push("=".repeat(WIDTH));
    out.push(stat("Price USD", &format_price(market.price_usd)));
    for window in REPORT_WINDOWS {
        let change = doc.momentum_profile.price_change.get(window);
        out.push(stat(&window.as_str().to_uppercase(), &format_change(change)));
    }
    out.push("-".repeat(WIDTH));
    out.push(stat("Liquidity", &format_currency(market.liquidity_usd)));
    out.push(stat("FDV", &format_currency(market.fdv)));
    out.push(stat("Volume (24h)", &format_currency(doc.momentum_profile.volume.h24)));
    out.push(stat("Created", &format_age_at(id.created_at, now)));
    out.push("-".repeat(WIDTH));
    out.push("Market Action".to_string());
    out.push(stat(
        "Buys vs Sells (24h)",
        &format!("{} Buys / {} Sells", count(txns.buys), count(txns.sells)),
    ));
    out.push(stat(
        "Buy pressure",
        &txns
            .buy_pressure_ratio
            .map(|r| format!("{:.2}%", r * 100.0))
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
    ));
    out.push(stat("Contract Address", &or_dash(id.address.as_deref())));
    out.push(stat("Pair Address", &or_dash(id.pair_address.as_deref())));
    if let (Some(chain), Some(pair)) = (id.chain.as_deref(), id.pair_address.as_deref()) {
        out.push(stat("Chart", &chart_embed_url(chain, pair)));
    }
    out.push(String::new());
    out.push(CHART_PLACEHOLDER.to_string());
    out.push("=".repeat(WIDTH));

    let mut report = out.join("\n");
    report.push('\n');
    report
}

fn stat(label: &str, value: &str) -> String {
    format!("{:<22}{}", label, value)
}

fn count(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| PLACEHOLDER.to_string())
}
