//! OpenAI Summarization Gateway
//!
//! Implementation of `Summarizer` against the OpenAI Responses API. The
//! report is serialized to compact JSON and submitted as one user turn,
//! with the chart attached as a single inline base64 image when present.
//! The engine's text comes back verbatim; nothing here parses or
//! validates the analysis itself.

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use coin_analyst::{AnalystError, ChartArtifact, Report, Result, Summarizer, ANALYST_PROMPT};

/// OpenAI gateway configuration
#[derive(Clone, Debug)]
pub struct OpenAiConfig {
    /// API key for bearer auth
    pub api_key: String,

    /// API base URL
    pub base_url: String,

    /// Model identifier
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com/v1".into(),
            model: "gpt-5-nano".into(),
            timeout_secs: 120,
        }
    }
}

impl OpenAiConfig {
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-5-nano".into());

        Self {
            api_key,
            base_url,
            model,
            ..Default::default()
        }
    }
}

/// Summarization gateway backed by the OpenAI Responses API
pub struct OpenAiGateway {
    http: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiGateway {
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(OpenAiConfig::from_env())
    }

    /// One user turn: serialized report text plus the optional inline
    /// chart image.
    fn build_request(&self, report: &Report, chart: Option<&ChartArtifact>) -> Result<ResponsesRequest> {
        let summary = serde_json::to_string(report)?;

        let mut content = vec![InputContent::InputText { text: summary }];
        if let Some(chart) = chart {
            content.push(InputContent::InputImage {
                image_url: data_url(chart),
            });
        }

        Ok(ResponsesRequest {
            model: self.config.model.clone(),
            instructions: ANALYST_PROMPT.into(),
            input: vec![InputTurn {
                role: "user",
                content,
            }],
        })
    }
}

fn data_url(chart: &ChartArtifact) -> String {
    format!("data:{};base64,{}", chart.mime, BASE64.encode(&chart.bytes))
}

#[derive(Debug, Serialize)]
struct ResponsesRequest {
    model: String,
    instructions: String,
    input: Vec<InputTurn>,
}

#[derive(Debug, Serialize)]
struct InputTurn {
    role: &'static str,
    content: Vec<InputContent>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum InputContent {
    InputText { text: String },
    InputImage { image_url: String },
}

#[derive(Debug, Deserialize)]
struct ResponsesReply {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<OutputContent>,
}

#[derive(Debug, Deserialize)]
struct OutputContent {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: String,
}

fn output_text(reply: &ResponsesReply) -> String {
    reply
        .output
        .iter()
        .flat_map(|item| &item.content)
        .filter(|content| content.kind == "output_text")
        .map(|content| content.text.as_str())
        .collect()
}

#[async_trait]
impl Summarizer for OpenAiGateway {
    async fn summarize(&self, report: &Report, chart: Option<&ChartArtifact>) -> Result<String> {
        let request = self.build_request(report, chart)?;
        let url = format!("{}/responses", self.config.base_url);

        tracing::debug!(model = %self.config.model, with_chart = chart.is_some(), "submitting report");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalystError::Gateway(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalystError::Gateway(format!(
                "engine returned {status}"
            )));
        }

        let reply: ResponsesReply = response
            .json()
            .await
            .map_err(|e| AnalystError::Gateway(e.to_string()))?;

        let text = output_text(&reply);
        if text.is_empty() {
            return Err(AnalystError::Gateway("engine returned no output text".into()));
        }
        Ok(text)
    }

    fn engine(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coin_analyst::{assemble, metrics, MockMarketData};
    use serde_json::json;

    fn sample_report() -> Report {
        let tick = MockMarketData::sample("BTC");
        let derived = metrics::derive(&tick);
        assemble::assemble(&tick, &derived, Vec::new())
    }

    fn gateway() -> OpenAiGateway {
        OpenAiGateway::new(OpenAiConfig {
            api_key: "test".into(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = OpenAiConfig::default();
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-5-nano");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_request_with_chart_carries_data_url() {
        let chart = ChartArtifact::png(vec![1, 2, 3]);
        let request = gateway()
            .build_request(&sample_report(), Some(&chart))
            .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        let content = &json["input"][0]["content"];
        assert_eq!(content[0]["type"], "input_text");
        assert_eq!(content[1]["type"], "input_image");
        let url = content[1]["image_url"].as_str().unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        assert!(json["instructions"].as_str().unwrap().contains("Spot trading"));
    }

    #[test]
    fn test_request_without_chart_is_text_only() {
        let request = gateway().build_request(&sample_report(), None).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        let content = json["input"][0]["content"].as_array().unwrap();
        assert_eq!(content.len(), 1);
        assert_eq!(content[0]["type"], "input_text");
        assert!(content[0]["text"].as_str().unwrap().contains("\"symbol\":\"BTC\""));
    }

    #[test]
    fn test_output_text_extraction() {
        let reply: ResponsesReply = serde_json::from_value(json!({
            "output": [
                { "content": [
                    { "type": "reasoning", "text": "ignored" },
                    { "type": "output_text", "text": "Hold. Confidence 0.6." }
                ]}
            ]
        }))
        .unwrap();

        assert_eq!(output_text(&reply), "Hold. Confidence 0.6.");
    }

    #[tokio::test]
    async fn test_engine_error_maps_to_gateway() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/responses"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let gateway = OpenAiGateway::new(OpenAiConfig {
            api_key: "test".into(),
            base_url: server.uri(),
            ..Default::default()
        })
        .unwrap();

        let result = gateway.summarize(&sample_report(), None).await;
        assert!(matches!(result, Err(AnalystError::Gateway(_))));
    }

    #[tokio::test]
    async fn test_happy_path_returns_engine_text_verbatim() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/responses"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "output": [
                    { "content": [ { "type": "output_text", "text": "Buy. Confidence 0.7." } ] }
                ]
            })))
            .mount(&server)
            .await;

        let gateway = OpenAiGateway::new(OpenAiConfig {
            api_key: "test".into(),
            base_url: server.uri(),
            ..Default::default()
        })
        .unwrap();

        let text = gateway.summarize(&sample_report(), None).await.unwrap();
        assert_eq!(text, "Buy. Confidence 0.7.");
    }
}
