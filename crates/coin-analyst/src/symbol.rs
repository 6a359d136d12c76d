//! Symbol Normalization
//!
//! User input is case-insensitive and may or may not carry the quote
//! suffix; upstream endpoints want the venue instrument ("BTC-USD") while
//! reports carry the bare base symbol ("BTC").

/// Fixed quote currency for the venue.
pub const QUOTE_SUFFIX: &str = "-USD";

/// Uppercase base symbol with any quote suffix stripped.
pub fn base(symbol: &str) -> String {
    let upper = symbol.trim().to_uppercase();
    upper
        .strip_suffix(QUOTE_SUFFIX)
        .map_or(upper.clone(), ToOwned::to_owned)
}

/// Venue instrument string for a user-supplied symbol.
pub fn instrument(symbol: &str) -> String {
    format!("{}{QUOTE_SUFFIX}", base(symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_normalizes_case_and_whitespace() {
        assert_eq!(base(" btc "), "BTC");
        assert_eq!(base("Xrp"), "XRP");
    }

    #[test]
    fn test_base_strips_quote_suffix() {
        assert_eq!(base("eth-usd"), "ETH");
        assert_eq!(base("ETH-USD"), "ETH");
    }

    #[test]
    fn test_instrument_appends_suffix_once() {
        assert_eq!(instrument("btc"), "BTC-USD");
        assert_eq!(instrument("BTC-USD"), "BTC-USD");
    }
}
