use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::Completer;

/// A completer backed by the OpenAI Responses API.
pub struct OpenAiCompleter {
    client: reqwest::Client,
    api_url: String,
    model: String,
    api_key: String,
}

impl OpenAiCompleter {
    pub fn new(
        api_url: String,
        model: String,
        api_key: String,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            api_url,
            model,
            api_key,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Completer for OpenAiCompleter {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = ApiRequest {
            model: &self.model,
            input: prompt,
        };

        info!(model = %self.model, "sending request to completion API");
        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("completion API request failed")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            bail!("completion API error ({}): {}", status, text);
        }

        let api_resp: ApiResponse = resp
            .json()
            .await
            .context("failed to decode completion API response")?;

        if let Some(usage) = &api_resp.usage {
            debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "completion token usage"
            );
        }

        let text = extract_text(api_resp)?;
        info!("completion API call completed");
        Ok(text)
    }
}

/// Text of the first `output_text` item in the first output message.
fn extract_text(resp: ApiResponse) -> Result<String> {
    let message = resp
        .output
        .into_iter()
        .find(|item| item.item_type == "message")
        .context("completion API returned no output message")?;

    message
        .content
        .into_iter()
        .find(|block| block.content_type == "output_text")
        .and_then(|block| block.text)
        .context("completion API message has no text content")
}

// --- API types ---

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    output: Vec<OutputItem>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(rename = "type")]
    item_type: String,
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    text: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    input_tokens: u64,
    output_tokens: u64,
}
