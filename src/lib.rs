// Pair discovery, ranking and analytics export
pub mod analytics;
pub mod config;
pub mod discovery;
pub mod export;
pub mod logging;
pub mod util;

// Re-export commonly used types for convenience
pub use dexdash_core::*;
