//! Domain Models
//!
//! Core data types flowing through the report pipeline. All monetary and
//! volume values use `rust_decimal` - never use f64 for money! Decimals are
//! always finite, so the "no NaN/Inf in a snapshot" invariant holds by
//! construction.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// One venue-scoped tick for an instrument, as fetched from the market
/// data endpoint.
///
/// Every field except the buy/sell volumes is required upstream; a payload
/// missing one of them is rejected at the fetch boundary as
/// `UpstreamUnavailable` rather than defaulted.
#[derive(Clone, Debug, PartialEq)]
pub struct TickSnapshot {
    /// Base symbol, uppercase (e.g. "BTC")
    pub symbol: String,

    /// Last traded price in USD
    pub price: Decimal,

    pub best_bid: Decimal,
    pub best_ask: Decimal,

    /// Percentage changes over the trailing windows
    pub change_24h: Decimal,
    pub change_7d: Decimal,
    pub change_30d: Decimal,

    pub day_open: Decimal,
    pub day_high: Decimal,
    pub day_low: Decimal,

    pub volume_24h: Decimal,
    pub quote_volume_24h: Decimal,
    pub trades_24h: u64,

    /// Taker buy/sell volumes; zero when the venue does not report them
    pub buy_volume_24h: Decimal,
    pub sell_volume_24h: Decimal,
}

/// Metrics derived from a [`TickSnapshot`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedMetrics {
    /// `best_ask - best_bid`, stored exactly; rounding happens only at
    /// report formatting. Negative spreads from a crossed book pass
    /// through unvalidated.
    pub spread: Decimal,

    /// `buy_volume / sell_volume`. `None` when sell volume is zero - an
    /// undefined ratio is a valid third state, not an error.
    pub buy_sell_ratio: Option<Decimal>,
}

/// News sentiment label, fixed vocabulary.
///
/// Anything the upstream sends outside this vocabulary collapses to
/// `Neutral`, as does a missing label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" => Self::Positive,
            "NEGATIVE" => Self::Negative,
            _ => Self::Neutral,
        }
    }
}

/// A single news article reference, projected from the news search
/// endpoint. Serializes into the report exactly as the engine prompt
/// expects it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewsItem {
    pub url: String,

    /// Publication time, UTC, minute precision on the wire
    #[serde(serialize_with = "serialize_minute")]
    pub published: DateTime<Utc>,

    pub sentiment: Sentiment,

    /// Publisher name, "Unknown" when the upstream omits it
    pub source: String,
}

fn serialize_minute<S: Serializer>(
    published: &DateTime<Utc>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&published.format("%Y-%m-%d %H:%M").to_string())
}

/// Percentage deltas section of a [`Report`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Performance {
    #[serde(rename = "24h")]
    pub day: String,
    #[serde(rename = "7d")]
    pub week: String,
    #[serde(rename = "30d")]
    pub month: String,
}

/// The structured report handed to the summarization engine.
///
/// Field names, ordering and the display formatting of every value are a
/// contract: the engine's instructions are tuned to this exact shape. An
/// undefined buy/sell ratio serializes as an explicit JSON `null`, never
/// an omitted key.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub symbol: String,
    pub price: String,
    pub performance: Performance,
    pub range_today: String,
    pub volume_24h: String,
    pub quote_volume_24h: String,
    pub trades_24h: String,
    pub best_bid: String,
    pub best_ask: String,
    pub spread: String,
    pub buy_volume_24h: String,
    pub sell_volume_24h: String,
    pub buy_sell_ratio: Option<String>,
    pub latest_news: Vec<NewsItem>,
}

/// A rendered price-history image, held in memory for the lifetime of one
/// pipeline run. Keeping the bytes in the pipeline (instead of a shared
/// well-known file path) means concurrent requests cannot race on each
/// other's chart.
#[derive(Clone, Debug)]
pub struct ChartArtifact {
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl ChartArtifact {
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime: "image/png".into(),
        }
    }
}
