//! Raw pair records as returned by the market-data provider.
//!
//! Every field is optional: the provider omits whole sub-objects for young or
//! thinly traded pairs, and prices arrive either as numeric strings or numbers.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeWindow {
    M5,
    H1,
    H6,
    H24,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 4] = [TimeWindow::M5, TimeWindow::H1, TimeWindow::H6, TimeWindow::H24];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::M5 => "m5",
            TimeWindow::H1 => "h1",
            TimeWindow::H6 => "h6",
            TimeWindow::H24 => "h24",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawPairRecord {
    #[serde(rename = "chainId", default, deserialize_with = "lenient")]
    pub chain_id: Option<String>,
    #[serde(rename = "dexId", default, deserialize_with = "lenient")]
    pub dex_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(rename = "pairAddress", default, deserialize_with = "lenient")]
    pub pair_address: Option<String>,
    #[serde(rename = "baseToken", default, deserialize_with = "lenient")]
    pub base_token: Option<TokenRef>,
    #[serde(rename = "quoteToken", default, deserialize_with = "lenient")]
    pub quote_token: Option<TokenRef>,
    #[serde(rename = "priceNative", default, deserialize_with = "lenient_text")]
    pub price_native: Option<String>,
    #[serde(rename = "priceUsd", default, deserialize_with = "lenient_text")]
    pub price_usd: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub txns: Option<Transactions>,
    #[serde(default, deserialize_with = "lenient")]
    pub volume: Option<WindowValues>,
    #[serde(rename = "priceChange", default, deserialize_with = "lenient")]
    pub price_change: Option<WindowValues>,
    #[serde(default, deserialize_with = "lenient")]
    pub liquidity: Option<Liquidity>,
    #[serde(default, deserialize_with = "lenient")]
    pub fdv: Option<f64>,
    #[serde(rename = "marketCap", default, deserialize_with = "lenient")]
    pub market_cap: Option<f64>,
    #[serde(rename = "pairCreatedAt", default, deserialize_with = "lenient")]
    pub pair_created_at: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub info: Option<PairInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TokenRef {
    #[serde(default, deserialize_with = "lenient")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub symbol: Option<String>,
}

/// Per-window figures (price change in percent, or volume in USD).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WindowValues {
    #[serde(default, deserialize_with = "lenient")]
    pub m5: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub h1: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub h6: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub h24: Option<f64>,
}

impl WindowValues {
    pub fn get(&self, window: TimeWindow) -> Option<f64> {
        match window {
            TimeWindow::M5 => self.m5,
            TimeWindow::H1 => self.h1,
            TimeWindow::H6 => self.h6,
            TimeWindow::H24 => self.h24,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Transactions {
    #[serde(default, deserialize_with = "lenient")]
    pub m5: Option<TransactionCount>,
    #[serde(default, deserialize_with = "lenient")]
    pub h1: Option<TransactionCount>,
    #[serde(default, deserialize_with = "lenient")]
    pub h6: Option<TransactionCount>,
    #[serde(default, deserialize_with = "lenient")]
    pub h24: Option<TransactionCount>,
}

impl Transactions {
    pub fn get(&self, window: TimeWindow) -> Option<&TransactionCount> {
        match window {
            TimeWindow::M5 => self.m5.as_ref(),
            TimeWindow::H1 => self.h1.as_ref(),
            TimeWindow::H6 => self.h6.as_ref(),
            TimeWindow::H24 => self.h24.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TransactionCount {
    #[serde(default, deserialize_with = "lenient")]
    pub buys: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub sells: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Liquidity {
    #[serde(default, deserialize_with = "lenient")]
    pub usd: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub base: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub quote: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PairInfo {
    #[serde(rename = "imageUrl", default, deserialize_with = "lenient")]
    pub image_url: Option<String>,
}

impl RawPairRecord {
    pub fn liquidity_usd(&self) -> Option<f64> {
        self.liquidity.as_ref().and_then(|l| l.usd)
    }

    pub fn base_symbol(&self) -> Option<&str> {
        self.base_token.as_ref().and_then(|t| t.symbol.as_deref())
    }

    pub fn quote_symbol(&self) -> Option<&str> {
        self.quote_token.as_ref().and_then(|t| t.symbol.as_deref())
    }

    pub fn price_change(&self, window: TimeWindow) -> Option<f64> {
        self.price_change.as_ref().and_then(|p| p.get(window))
    }

    pub fn volume(&self, window: TimeWindow) -> Option<f64> {
        self.volume.as_ref().and_then(|v| v.get(window))
    }

    pub fn image_url(&self) -> Option<&str> {
        self.info.as_ref().and_then(|i| i.image_url.as_deref())
    }
}

/// Decodes an optional field, treating a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|v| serde_json::from_value(v).ok()))
}

/// Accepts `"0.0012"` or `0.0012` and keeps the textual form; anything else is absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record_deserializes() {
        let json = r#"{
            "chainId": "solana",
            "dexId": "raydium",
            "url": "https://dexscreener.com/solana/pair1",
            "pairAddress": "pair1",
            "baseToken": {"address": "mint1", "name": "Bonk", "symbol": "BONK"},
            "quoteToken": {"address": "So111", "name": "Wrapped SOL", "symbol": "SOL"},
            "priceNative": "0.0000001",
            "priceUsd": "0.00002",
            "txns": {"h24": {"buys": 10, "sells": 5}},
            "volume": {"h24": 1000.5, "h1": 20},
            "priceChange": {"m5": -1.5, "h24": 12},
            "liquidity": {"usd": 5000, "base": 1, "quote": 2},
            "fdv": 100000,
            "marketCap": 90000,
            "pairCreatedAt": 1700000000000,
            "info": {"imageUrl": "https://img/bonk.png"}
        }"#;

        let pair: RawPairRecord = serde_json::from_str(json).unwrap();
        assert_eq!(pair.base_symbol(), Some("BONK"));
        assert_eq!(pair.quote_symbol(), Some("SOL"));
        assert_eq!(pair.liquidity_usd(), Some(5000.0));
        assert_eq!(pair.price_usd.as_deref(), Some("0.00002"));
        assert_eq!(pair.price_change(TimeWindow::M5), Some(-1.5));
        assert_eq!(pair.price_change(TimeWindow::H6), None);
        assert_eq!(pair.volume(TimeWindow::H1), Some(20.0));
        assert_eq!(pair.txns.as_ref().and_then(|t| t.get(TimeWindow::H24)).and_then(|c| c.buys), Some(10));
        assert_eq!(pair.image_url(), Some("https://img/bonk.png"));
    }

    #[test]
    fn test_sparse_record_deserializes() {
        let pair: RawPairRecord = serde_json::from_str(r#"{"pairAddress": "p"}"#).unwrap();
        assert_eq!(pair.pair_address.as_deref(), Some("p"));
        assert!(pair.liquidity_usd().is_none());
        assert!(pair.base_symbol().is_none());
        assert!(pair.volume(TimeWindow::H24).is_none());
    }

    #[test]
    fn test_numeric_price_is_kept_as_text() {
        let pair: RawPairRecord = serde_json::from_str(r#"{"priceUsd": 1.25, "priceNative": null}"#).unwrap();
        assert_eq!(pair.price_usd.as_deref(), Some("1.25"));
        assert!(pair.price_native.is_none());
    }

    #[test]
    fn test_mistyped_fields_are_absent_not_fatal() {
        let json = r#"{
            "pairAddress": "a",
            "baseToken": {"symbol": "A", "name": 7},
            "liquidity": {"usd": 5000, "base": "lots"},
            "fdv": "n/a",
            "marketCap": [],
            "pairCreatedAt": "yesterday",
            "priceUsd": true,
            "volume": {"h24": "big", "h1": 12},
            "priceChange": "up",
            "txns": {"h24": {"buys": -1, "sells": 4}, "h1": "x"},
            "info": 3
        }"#;

        let pair: RawPairRecord = serde_json::from_str(json).unwrap();
        assert_eq!(pair.pair_address.as_deref(), Some("a"));
        assert_eq!(pair.base_symbol(), Some("A"));
        assert_eq!(pair.base_token.as_ref().and_then(|t| t.name.clone()), None);
        assert_eq!(pair.liquidity_usd(), Some(5000.0));
        assert_eq!(pair.fdv, None);
        assert_eq!(pair.market_cap, None);
        assert_eq!(pair.pair_created_at, None);
        assert_eq!(pair.price_usd, None);
        assert_eq!(pair.volume(TimeWindow::H24), None);
        assert_eq!(pair.volume(TimeWindow::H1), Some(12.0));
        assert!(pair.price_change.is_none());
        let h24 = pair.txns.as_ref().and_then(|t| t.get(TimeWindow::H24)).cloned().unwrap();
        assert_eq!((h24.buys, h24.sells), (None, Some(4)));
        assert!(pair.info.is_none());
    }

    #[test]
    fn test_window_names() {
        let names: Vec<&str> = TimeWindow::ALL.iter().map(|w| w.as_str()).collect();
        assert_eq!(names, vec!["m5", "h1", "h6", "h24"]);
    }
}
