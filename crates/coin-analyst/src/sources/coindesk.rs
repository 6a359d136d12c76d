//! CoinDesk Data API Client
//!
//! Implements both [`MarketDataSource`] and [`NewsSource`] against the
//! CoinDesk data API. Raw payloads are decoded into typed structs at this
//! boundary; a missing required field is an `UpstreamUnavailable`, never a
//! deep key error at use time.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{MarketDataSource, NewsSource, MAX_NEWS_ITEMS};
use crate::error::{AnalystError, Result};
use crate::model::{NewsItem, Sentiment, TickSnapshot};
use crate::symbol;

/// CoinDesk client configuration
#[derive(Clone, Debug)]
pub struct CoinDeskConfig {
    /// API base URL
    pub base_url: String,

    /// API key sent as a query parameter
    pub api_key: String,

    /// Venue the tick endpoint is scoped to
    pub market: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for CoinDeskConfig {
    fn default() -> Self {
        Self {
            base_url: "https://data-api.coindesk.com".into(),
            api_key: String::new(),
            market: "coinbase".into(),
            timeout_secs: 10,
        }
    }
}

impl CoinDeskConfig {
    pub fn from_env() -> Self {
        let base_url = std::env::var("COINDESK_BASE_URL")
            .unwrap_or_else(|_| "https://data-api.coindesk.com".into());
        let api_key = std::env::var("COINDESK_API_KEY").unwrap_or_default();
        let timeout_secs = std::env::var("COINDESK_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(10);

        Self {
            base_url,
            api_key,
            timeout_secs,
            ..Default::default()
        }
    }
}

/// HTTP client for the CoinDesk data API
pub struct CoinDeskClient {
    http: reqwest::Client,
    config: CoinDeskConfig,
}

impl CoinDeskClient {
    pub fn new(config: CoinDeskConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(CoinDeskConfig::from_env())
    }
}

// Wire payloads. Field names follow the upstream SCREAMING_CASE schema.

#[derive(Debug, Deserialize)]
struct TickEnvelope {
    #[serde(rename = "Data", default)]
    data: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawTick {
    #[serde(rename = "PRICE")]
    price: Decimal,
    #[serde(rename = "BEST_BID")]
    best_bid: Decimal,
    #[serde(rename = "BEST_ASK")]
    best_ask: Decimal,
    #[serde(rename = "MOVING_24_HOUR_CHANGE_PERCENTAGE")]
    change_24h: Decimal,
    #[serde(rename = "MOVING_7_DAY_CHANGE_PERCENTAGE")]
    change_7d: Decimal,
    #[serde(rename = "MOVING_30_DAY_CHANGE_PERCENTAGE")]
    change_30d: Decimal,
    #[serde(rename = "CURRENT_DAY_OPEN")]
    day_open: Decimal,
    #[serde(rename = "CURRENT_DAY_HIGH")]
    day_high: Decimal,
    #[serde(rename = "CURRENT_DAY_LOW")]
    day_low: Decimal,
    #[serde(rename = "MOVING_24_HOUR_VOLUME")]
    volume_24h: Decimal,
    #[serde(rename = "MOVING_24_HOUR_QUOTE_VOLUME")]
    quote_volume_24h: Decimal,
    #[serde(rename = "MOVING_24_HOUR_TOTAL_TRADES")]
    trades_24h: u64,
    // Not every venue reports taker-side volumes
    #[serde(rename = "MOVING_24_HOUR_VOLUME_BUY", default)]
    buy_volume_24h: Decimal,
    #[serde(rename = "MOVING_24_HOUR_VOLUME_SELL", default)]
    sell_volume_24h: Decimal,
}

impl RawTick {
    fn into_snapshot(self, base_symbol: String) -> TickSnapshot {
        TickSnapshot {
            symbol: base_symbol,
            price: self.price,
            best_bid: self.best_bid,
            best_ask: self.best_ask,
            change_24h: self.change_24h,
            change_7d: self.change_7d,
            change_30d: self.change_30d,
            day_open: self.day_open,
            day_high: self.day_high,
            day_low: self.day_low,
            volume_24h: self.volume_24h,
            quote_volume_24h: self.quote_volume_24h,
            trades_24h: self.trades_24h,
            buy_volume_24h: self.buy_volume_24h,
            sell_volume_24h: self.sell_volume_24h,
        }
    }
}

#[derive(Debug, Deserialize)]
struct NewsEnvelope {
    #[serde(rename = "Data", default)]
    data: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawNewsItem {
    #[serde(rename = "URL")]
    url: String,
    #[serde(rename = "PUBLISHED_ON")]
    published_on: i64,
    #[serde(rename = "SENTIMENT", default)]
    sentiment: Option<String>,
    #[serde(rename = "SOURCE_DATA", default)]
    source_data: Option<RawNewsSource>,
}

#[derive(Debug, Deserialize)]
struct RawNewsSource {
    #[serde(rename = "NAME", default)]
    name: Option<String>,
}

/// Project one raw news object into a [`NewsItem`].
///
/// Missing URL or timestamp fails the single item; sentiment and source
/// fall back to their defaults.
fn project_news_item(value: serde_json::Value) -> std::result::Result<NewsItem, String> {
    let raw: RawNewsItem = serde_json::from_value(value).map_err(|e| e.to_string())?;
    let published = DateTime::from_timestamp(raw.published_on, 0)
        .ok_or_else(|| format!("published timestamp {} out of range", raw.published_on))?;

    Ok(NewsItem {
        url: raw.url,
        published,
        sentiment: raw
            .sentiment
            .as_deref()
            .map(Sentiment::from_label)
            .unwrap_or_default(),
        source: raw
            .source_data
            .and_then(|s| s.name)
            .unwrap_or_else(|| "Unknown".into()),
    })
}

#[async_trait]
impl MarketDataSource for CoinDeskClient {
    async fn fetch_tick(&self, symbol: &str) -> Result<TickSnapshot> {
        let instrument = symbol::instrument(symbol);
        let url = format!("{}/spot/v1/latest/tick", self.config.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("market", self.config.market.as_str()),
                ("instruments", instrument.as_str()),
                ("apply_mapping", "true"),
                ("api_key", self.config.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalystError::UpstreamUnavailable(format!(
                "tick endpoint returned {status} for {instrument}"
            )));
        }

        let envelope: TickEnvelope = response.json().await.map_err(|e| {
            AnalystError::UpstreamUnavailable(format!("malformed tick response: {e}"))
        })?;
        let raw = envelope.data.get(&instrument).cloned().ok_or_else(|| {
            AnalystError::UpstreamUnavailable(format!(
                "instrument {instrument} missing from tick response"
            ))
        })?;
        let raw: RawTick = serde_json::from_value(raw).map_err(|e| {
            AnalystError::UpstreamUnavailable(format!("malformed tick payload for {instrument}: {e}"))
        })?;

        Ok(raw.into_snapshot(symbol::base(symbol)))
    }

    fn venue(&self) -> &str {
        &self.config.market
    }
}

#[async_trait]
impl NewsSource for CoinDeskClient {
    async fn fetch_news(&self, symbol: &str) -> Result<Vec<NewsItem>> {
        let base = symbol::base(symbol);
        let url = format!("{}/news/v1/search", self.config.base_url);
        let limit = MAX_NEWS_ITEMS.to_string();

        let response = self
            .http
            .get(&url)
            .query(&[
                ("categories", base.as_str()),
                ("lang", "EN"),
                ("api_key", self.config.api_key.as_str()),
                ("limit", limit.as_str()),
                ("search_string", base.as_str()),
                ("source_key", "coindesk"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalystError::UpstreamUnavailable(format!(
                "news endpoint returned {status} for {base}"
            )));
        }

        let envelope: NewsEnvelope = response.json().await.map_err(|e| {
            AnalystError::UpstreamUnavailable(format!("malformed news response: {e}"))
        })?;
        let mut items = Vec::with_capacity(MAX_NEWS_ITEMS);
        for value in envelope.data {
            match project_news_item(value) {
                Ok(item) => items.push(item),
                // One bad item must not sink the batch
                Err(reason) => {
                    tracing::warn!(symbol = %base, %reason, "skipping malformed news item");
                }
            }
            if items.len() == MAX_NEWS_ITEMS {
                break;
            }
        }

        Ok(items)
    }
}
