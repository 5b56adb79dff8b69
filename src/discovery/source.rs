//! Injected retrieval capability and the discovery entry point

use async_trait::async_trait;
use dexdash_core::{DexDashError, RawPairRecord, Result};
use tracing::{info, instrument};

use super::ranker::{PairRanker, RankedPairs};

/// Anything that can answer a free-text or contract-address pair search.
#[async_trait]
pub trait PairSource: Send + Sync {
    fn signature(&self) -> &'static str;

    async fn search_pairs(&self, query: &str) -> Result<Vec<RawPairRecord>>;
}

/// Retrieves pairs for `query` and ranks them.
///
/// Retrieval is the only await point; ranking runs synchronously on the result.
#[instrument(skip(source, ranker), fields(source = source.signature()))]
pub async fn discover(source: &dyn PairSource, ranker: &PairRanker, query: &str) -> Result<RankedPairs> {
    let query = query.trim();
    if query.is_empty() {
        return Err(DexDashError::EmptyQuery);
    }

    let pairs = source.search_pairs(query).await?;
    info!("🔍 {} raw pairs for '{}'", pairs.len(), query);

    if pairs.is_empty() {
        info!("No results for '{}'", query);
        return Err(DexDashError::NoResults);
    }

    ranker.rank(pairs)
}
