//! Liquidity filter and ranking of raw search results

use dexdash_core::{DexDashError, RawPairRecord, Result};
use tracing::{debug, info, warn};

use crate::config::Ranking;

/// Ranked search results, highest liquidity first.
///
/// When no pair clears the liquidity floor the original, unranked input is
/// kept instead and `fallback` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPairs {
    pub pairs: Vec<RawPairRecord>,
    pub fallback: bool,
}

impl RankedPairs {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// 1-based selection, as shown to the user.
    pub fn select(&self, position: usize) -> Option<&RawPairRecord> {
        position.checked_sub(1).and_then(|i| self.pairs.get(i))
    }
}

#[derive(Debug, Clone)]
pub struct PairRanker {
    pub min_liquidity_usd: f64,
}

impl Default for PairRanker {
    fn default() -> Self {
        Self { min_liquidity_usd: 100.0 }
    }
}

impl PairRanker {
    pub fn from_config(ranking: &Ranking) -> Self {
        Self {
            min_liquidity_usd: ranking.min_liquidity_usd,
        }
    }

    pub fn is_liquid(&self, pair: &RawPairRecord) -> bool {
        matches!(pair.liquidity_usd(), Some(usd) if usd > self.min_liquidity_usd)
    }

    /// Keeps pairs above the liquidity floor, sorted descending (stable for ties).
    ///
    /// An empty input is a `NoResults` error rather than an empty ranking.
    pub fn rank(&self, pairs: Vec<RawPairRecord>) -> Result<RankedPairs> {
        if pairs.is_empty() {
            return Err(DexDashError::NoResults);
        }

        let mut liquid: Vec<RawPairRecord> = pairs.iter().filter(|p| self.is_liquid(p)).cloned().collect();

        if liquid.is_empty() {
            warn!(
                "⚠️ No pair above ${:.0} liquidity, showing all {} unranked results",
                self.min_liquidity_usd,
                pairs.len()
            );
            return Ok(RankedPairs { pairs, fallback: true });
        }

        // Filter guarantees liquidity is present
        liquid.sort_by(|a, b| {
            let a = a.liquidity_usd().unwrap_or(0.0);
            let b = b.liquidity_usd().unwrap_or(0.0);
            b.total_cmp(&a)
        });

        debug!("Dropped {} illiquid pairs", pairs.len() - liquid.len());
        info!("📊 Ranked {} of {} pairs by liquidity", liquid.len(), pairs.len());

        Ok(RankedPairs { pairs: liquid, fallback: false })
    }
}
