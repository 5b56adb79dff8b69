//! Lossless JSON export: metadata envelope plus the full analytics document

use dexdash_core::{
    AnalyticsDocument, DexDashError, MarketMetrics, MomentumProfile, PairIdentity, Result, TraderBehavior,
};
use serde::{Deserialize, Serialize};

use super::{ExportContext, ExportMeta};

#[derive(Serialize)]
struct AnalysisExportRef<'a> {
    meta: ExportMeta,
    identity: &'a PairIdentity,
    market_metrics: &'a MarketMetrics,
    momentum_profile: &'a MomentumProfile,
    trader_behavior: &'a TraderBehavior,
}

/// Decoded form of a JSON export.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisExport {
    pub meta: ExportMeta,
    pub identity: PairIdentity,
    pub market_metrics: MarketMetrics,
    pub momentum_profile: MomentumProfile,
    pub trader_behavior: TraderBehavior,
}

impl AnalysisExport {
    pub fn into_document(self) -> AnalyticsDocument {
        AnalyticsDocument {
            identity: self.identity,
            market_metrics: self.market_metrics,
            momentum_profile: self.momentum_profile,
            trader_behavior: self.trader_behavior,
        }
    }
}

pub fn render(doc: &AnalyticsDocument, ctx: &ExportContext) -> Result<String> {
    let export = AnalysisExportRef {
        meta: ctx.meta(),
        identity: &doc.identity,
        market_metrics: &doc.market_metrics,
        momentum_profile: &doc.momentum_profile,
        trader_behavior: &doc.trader_behavior,
    };

    serde_json::to_string_pretty(&export).map_err(|e| DexDashError::Export(e.to_string()))
}

pub fn parse(content: &str) -> Result<AnalysisExport> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Export;
    use chrono::{TimeZone, Utc};
    use dexdash_core::{TransactionSummary, WindowSeries};

    fn ctx() -> ExportContext {
        ExportContext::from_config(&Export::default(), Utc.timestamp_millis_opt(1_700_000_000_000).unwrap())
    }

    fn document() -> AnalyticsDocument {
        AnalyticsDocument {
            identity: PairIdentity {
                name: Some("Bonk".to_string()),
                symbol: Some("BONK".to_string()),
                chain: Some("solana".to_string()),
                ..Default::default()
            },
            market_metrics: MarketMetrics {
                price_usd: Some(0.00002345),
                liquidity_usd: Some(25_000.0),
                ..Default::default()
            },
            momentum_profile: MomentumProfile {
                price_change: WindowSeries { m5: Some(1.0), h1: None, h6: None, h24: Some(-4.5) },
                volume: WindowSeries::default(),
            },
            trader_behavior: TraderBehavior {
                transactions_24h: TransactionSummary {
                    buys: Some(3),
                    sells: Some(1),
                    total: Some(4),
                    buy_pressure_ratio: Some(0.75),
                },
            },
        }
    }

    #[test]
    fn test_top_level_key_order() {
        let content = render(&document(), &ctx()).unwrap();
        let positions: Vec<usize> = ["\"meta\"", "\"identity\"", "\"market_metrics\"", "\"momentum_profile\"", "\"trader_behavior\""]
            .iter()
            .map(|key| content.find(key).unwrap())
            .collect();

        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_envelope_contents() {
        let content = render(&document(), &ctx()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(value["meta"]["timestamp"], "2023-11-14T22:13:20.000Z");
        assert_eq!(value["meta"]["platform"], "DexDash Pro");
        assert_eq!(value["meta"]["note"], "Data suitable for AI Sentiment & Technical Analysis");
        assert!(value["identity"]["created_at"].is_null());
        assert!(value["market_metrics"].get("price_usd_text").is_none());
        assert!(value["momentum_profile"]["price_change"]["h6"].is_null());
        assert_eq!(value["trader_behavior"]["transactions_24h"]["buy_pressure_ratio"], 0.75);
    }

    #[test]
    fn test_round_trip_preserves_document() {
        let doc = document();
        let decoded = parse(&render(&doc, &ctx()).unwrap()).unwrap();

        assert_eq!(decoded.meta, ctx().meta());
        assert_eq!(decoded.into_document(), doc);
    }

    #[test]
    fn test_rendering_is_reproducible() {
        assert_eq!(render(&document(), &ctx()).unwrap(), render(&document(), &ctx()).unwrap());
    }
}
