//! Formatting, provider client and terminal helpers

pub mod dexscreener;
pub mod display;
pub mod format;
pub mod links;
