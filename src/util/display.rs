//! Display utilities for terminal output

use colored::Colorize;
use dexdash_core::{RawPairRecord, TimeWindow};

use crate::discovery::RankedPairs;
use crate::util::format::{format_change, format_currency, format_price_str, PLACEHOLDER};

pub fn print_ranked_pairs(ranked: &RankedPairs) {
    println!("\n{} {}", "📋", format!("Found {} Pairs", ranked.len()).bold());
    if ranked.fallback {
        println!("   {}", "Unranked - no pair above the liquidity floor".bright_yellow());
    } else {
        println!("   {}", "Sorted by Liquidity".dimmed());
    }
    println!("{}", "=".repeat(70));

    for (i, pair) in ranked.pairs.iter().enumerate() {
        println!("{}", render_pair_card(i + 1, pair));
    }
    println!("{}", "=".repeat(70));
}

/// One list entry: `#1 BONK / SOL  solana • raydium  +12%` followed by price and liquidity.
pub fn render_pair_card(position: usize, pair: &RawPairRecord) -> String {
    let base = pair.base_symbol().unwrap_or(PLACEHOLDER);
    let quote = pair.quote_symbol().unwrap_or(PLACEHOLDER);
    let chain = pair.chain_id.as_deref().unwrap_or(PLACEHOLDER);
    let dex = pair.dex_id.as_deref().unwrap_or(PLACEHOLDER);

    let change = pair.price_change(TimeWindow::H24);
    let badge = format_change(change);
    let badge = match change {
        Some(c) if c >= 0.0 => badge.green(),
        Some(_) => badge.red(),
        None => badge.dimmed(),
    };

    format!(
        "{:>3}. {} / {}  {} • {}  {}\n     Price: {}   Liquidity: {}",
        position,
        base.bold(),
        quote,
        chain,
        dex,
        badge,
        format_price_str(pair.price_usd.as_deref()),
        format_currency(pair.liquidity_usd()),
    )
}
