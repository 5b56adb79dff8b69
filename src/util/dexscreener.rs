//! DexScreener search client backing pair discovery

use std::time::Duration;

use async_trait::async_trait;
use dexdash_core::{DexDashError, RawPairRecord, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::Api;
use crate::discovery::PairSource;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "schemaVersion", default)]
    schema_version: Option<String>,
    #[serde(default)]
    pairs: Option<Vec<Value>>,
}

pub struct DexScreenerClient {
    client: Client,
    base_url: String,
}

impl DexScreenerClient {
    pub fn new(api: &Api) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()
            .map_err(|e| DexDashError::Transport(format!("Failed to create DexScreener HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: api.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn search_url(&self, query: &str) -> Result<Url> {
        Url::parse_with_params(&format!("{}/search", self.base_url), &[("q", query)])
            .map_err(|e| DexDashError::Config(format!("invalid API base URL {}: {}", self.base_url, e)))
    }
}

#[async_trait]
impl PairSource for DexScreenerClient {
    fn signature(&self) -> &'static str {
        "DexScreener search API"
    }

    async fn search_pairs(&self, query: &str) -> Result<Vec<RawPairRecord>> {
        let url = self.search_url(query)?;
        info!("🌐 Fetching pairs from DexScreener: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DexDashError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DexDashError::Transport(format!("DexScreener API error: {}", response.status())));
        }

        let body = response.text().await.map_err(|e| DexDashError::Transport(e.to_string()))?;
        parse_search_response(&body)
    }
}

/// Decodes a search payload, dropping entries that are not JSON objects.
/// Mistyped fields inside an entry only blank that field.
///
/// A null or missing `pairs` array is an empty result, not an error.
pub fn parse_search_response(body: &str) -> Result<Vec<RawPairRecord>> {
    let data: SearchResponse = serde_json::from_str(body)
        .map_err(|e| DexDashError::Parse(format!("Failed to parse DexScreener response: {}", e)))?;

    debug!("DexScreener schema version: {:?}", data.schema_version);

    let entries = data.pairs.unwrap_or_default();
    let total = entries.len();
    let pairs: Vec<RawPairRecord> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value::<RawPairRecord>(entry) {
            Ok(pair) => Some(pair),
            Err(e) => {
                warn!("⚠️ Skipping malformed pair entry #{}: {}", i, e);
                None
            }
        })
        .collect();

    debug!("Decoded {}/{} pair entries", pairs.len(), total);
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_query() {
        let client = DexScreenerClient::new(&Api::default()).unwrap();
        let url = client.search_url("pepe coin&x").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.dexscreener.com/latest/dex/search?q=pepe+coin%26x"
        );
    }

    #[test]
    fn test_parse_skips_malformed_entries() {
        let body = r#"{
            "schemaVersion": "1.0.0",
            "pairs": [
                {"pairAddress": "a", "liquidity": {"usd": 500}},
                "garbage",
                [1, 2],
                {"pairAddress": "b"}
            ]
        }"#;

        let pairs = parse_search_response(body).unwrap();
        let addresses: Vec<_> = pairs.iter().map(|p| p.pair_address.clone().unwrap()).collect();
        assert_eq!(addresses, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_keeps_pair_with_mistyped_scalar() {
        let body = r#"{"pairs":[{"pairAddress":"a","baseToken":{"symbol":"A"},"liquidity":{"usd":5000},"fdv":"n/a"}]}"#;

        let pairs = parse_search_response(body).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].liquidity_usd(), Some(5000.0));
        assert_eq!(pairs[0].fdv, None);
    }

    #[test]
    fn test_parse_keeps_pair_with_mistyped_address() {
        let pairs = parse_search_response(r#"{"pairs":[{"pairAddress":42,"liquidity":{"usd":500}}]}"#).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].pair_address, None);
        assert_eq!(pairs[0].liquidity_usd(), Some(500.0));
    }

    #[test]
    fn test_parse_null_pairs_is_empty() {
        let pairs = parse_search_response(r#"{"schemaVersion": "1.0.0", "pairs": null}"#).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_parse_non_json_is_error() {
        let err = parse_search_response("<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, DexDashError::Parse(_)));
    }

    #[tokio::test]
    #[ignore] // Run only when testing with live API
    async fn test_live_search() {
        let client = DexScreenerClient::new(&Api::default()).unwrap();
        let pairs = client.search_pairs("BONK").await.unwrap();
        assert!(!pairs.is_empty());
    }
}
