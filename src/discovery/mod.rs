//! Pair discovery: retrieval, liquidity ranking and stale-result suppression

pub mod ranker;
pub mod session;
pub mod source;

pub use ranker::{PairRanker, RankedPairs};
pub use session::{SearchSession, SearchTicket};
pub use source::{discover, PairSource};
