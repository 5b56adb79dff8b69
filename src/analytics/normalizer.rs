use dexdash_core::{
    AnalyticsDocument, MarketMetrics, MomentumProfile, PairIdentity, RawPairRecord, TimeWindow, TraderBehavior,
    TransactionSummary, WindowSeries, WindowValues,
};
use tracing::warn;

use crate::util::format::parse_decimal;
use crate::util::links::pair_page_url;

/// Builds the analytics document for one pair.
///
/// Never fails: absent sub-objects become absent fields and are reported as
/// warnings only.
pub fn normalize(pair: &RawPairRecord) -> AnalyticsDocument {
    warn_missing_sections(pair);

    AnalyticsDocument {
        identity: identity(pair),
        market_metrics: MarketMetrics {
            price_usd: pair.price_usd.as_deref().and_then(parse_decimal),
            price_usd_text: pair
                .price_usd
                .as_deref()
                .map(str::trim)
                .filter(|text| parse_decimal(text).is_some())
                .map(str::to_string),
            price_native: pair.price_native.as_deref().and_then(parse_decimal),
            liquidity_usd: pair.liquidity_usd(),
            fdv: pair.fdv,
            market_cap: pair.market_cap,
        },
        momentum_profile: MomentumProfile {
            price_change: window_series(pair.price_change.as_ref()),
            volume: window_series(pair.volume.as_ref()),
        },
        trader_behavior: TraderBehavior {
            transactions_24h: transactions_24h(pair),
        },
    }
}

/// Share of trades that were buys, rounded to four places.
/// `None` when there were no trades at all.
pub fn buy_pressure_ratio(buys: u64, sells: u64) -> Option<f64> {
    let total = buys.checked_add(sells)?;
    if total == 0 {
        return None;
    }
    let ratio = buys as f64 / total as f64;
    Some((ratio * 10_000.0).round() / 10_000.0)
}

fn identity(pair: &RawPairRecord) -> PairIdentity {
    let base = pair.base_token.as_ref();
    let url = pair.url.clone().or_else(|| match (&pair.chain_id, &pair.pair_address) {
        (Some(chain), Some(address)) => Some(pair_page_url(chain, address)),
        _ => None,
    });

    PairIdentity {
        name: base.and_then(|t| t.name.clone()),
        symbol: base.and_then(|t| t.symbol.clone()),
        address: base.and_then(|t| t.address.clone()),
        chain: pair.chain_id.clone(),
        dex: pair.dex_id.clone(),
        pair_address: pair.pair_address.clone(),
        url,
        created_at: pair.pair_created_at,
    }
}

fn window_series(values: Option<&WindowValues>) -> WindowSeries {
    let get = |w: TimeWindow| values.and_then(|v| v.get(w));
    WindowSeries {
        m5: get(TimeWindow::M5),
        h1: get(TimeWindow::H1),
        h6: get(TimeWindow::H6),
        h24: get(TimeWindow::H24),
    }
}

fn transactions_24h(pair: &RawPairRecord) -> TransactionSummary {
    let counts = pair.txns.as_ref().and_then(|t| t.get(TimeWindow::H24));
    let buys = counts.and_then(|c| c.buys);
    let sells = counts.and_then(|c| c.sells);

    let (total, ratio) = match (buys, sells) {
        (Some(b), Some(s)) => (b.checked_add(s), buy_pressure_ratio(b, s)),
        _ => (None, None),
    };

    TransactionSummary {
        buys,
        sells,
        total,
        buy_pressure_ratio: ratio,
    }
}

fn warn_missing_sections(pair: &RawPairRecord) {
    let label = pair.pair_address.as_deref().unwrap_or("<unknown pair>");
    let missing: Vec<&str> = [
        ("baseToken", pair.base_token.is_none()),
        ("liquidity", pair.liquidity.is_none()),
        ("volume", pair.volume.is_none()),
        ("priceChange", pair.price_change.is_none()),
        ("txns", pair.txns.is_none()),
    ]
    .iter()
    .filter(|(_, absent)| *absent)
    .map(|(name, _)| *name)
    .collect();

    if !missing.is_empty() {
        warn!("⚠️ Pair {} is missing {}; affected fields left empty", label, missing.join(", "));
    }
}
