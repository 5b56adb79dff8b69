//! Canonical analytics document derived from one selected pair.
//!
//! Field names double as the JSON export schema, so they are snake_case and
//! declared in export order.

use serde::{Deserialize, Serialize};

use crate::types::TimeWindow;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalyticsDocument {
    pub identity: PairIdentity,
    pub market_metrics: MarketMetrics,
    pub momentum_profile: MomentumProfile,
    pub trader_behavior: TraderBehavior,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PairIdentity {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub address: Option<String>,
    pub chain: Option<String>,
    pub dex: Option<String>,
    pub pair_address: Option<String>,
    pub url: Option<String>,
    /// Pair creation time in epoch milliseconds (`pairCreatedAt`).
    pub created_at: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MarketMetrics {
    pub price_usd: Option<f64>,
    /// Provider's price text (`"1.50"`), kept for the CSV summary.
    #[serde(skip)]
    pub price_usd_text: Option<String>,
    pub price_native: Option<f64>,
    pub liquidity_usd: Option<f64>,
    pub fdv: Option<f64>,
    pub market_cap: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MomentumProfile {
    pub price_change: WindowSeries,
    pub volume: WindowSeries,
}

/// One value per standard window; `None` means the provider had no data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WindowSeries {
    pub m5: Option<f64>,
    pub h1: Option<f64>,
    pub h6: Option<f64>,
    pub h24: Option<f64>,
}

impl WindowSeries {
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
pub struct TraderBehavior {
    pub transactions_24h: TransactionSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TransactionSummary {
    pub buys: Option<u64>,
    pub sells: Option<u64>,
    pub total: Option<u64>,
    /// buys / (buys + sells), four decimal places; `None` when there were no trades.
    pub buy_pressure_ratio: Option<f64>,
}
