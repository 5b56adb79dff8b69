//! Provider URLs derived from a pair's chain and address.

pub const DEXSCREENER_BASE: &str = "https://dexscreener.com";
pub const PLACEHOLDER_IMAGE_URL: &str = "https://cdn-icons-png.flaticon.com/512/12114/12114233.png";

pub fn pair_page_url(chain: &str, pair_address: &str) -> String {
    format!("{}/{}/{}", DEXSCREENER_BASE, chain, pair_address)
}

/// Embeddable chart widget for the pair (dark theme, no trades or info panes).
pub fn chart_embed_url(chain: &str, pair_address: &str) -> String {
    format!("{}?embed=1&theme=dark&trades=0&info=0", pair_page_url(chain, pair_address))
}

pub fn image_or_placeholder(image_url: Option<&str>) -> &str {
    match image_url {
        Some(url) if !url.is_empty() => url,
        _ => PLACEHOLDER_IMAGE_URL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_links() {
        assert_eq!(pair_page_url("solana", "abc"), "https://dexscreener.com/solana/abc");
        assert_eq!(
            chart_embed_url("base", "0x1"),
            "https://dexscreener.com/base/0x1?embed=1&theme=dark&trades=0&info=0"
        );
    }

    #[test]
    fn test_image_fallback() {
        assert_eq!(image_or_placeholder(Some("https://img/x.png")), "https://img/x.png");
        assert_eq!(image_or_placeholder(Some("")), PLACEHOLDER_IMAGE_URL);
        assert_eq!(image_or_placeholder(None), PLACEHOLDER_IMAGE_URL);
    }
}
