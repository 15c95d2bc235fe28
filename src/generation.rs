//! Client side of the remote story/poem generation endpoint.
//!
//! The endpoint takes `{"prompt": ..., "type": "story" | "poem"}` and answers
//! with `{"story": ...}` or `{"poem": ...}`. Anything else, including an
//! `{"error": ...}` body or a non-2xx status, is a failed generation.

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use crate::writing::WritingType;

/// Body of the `POST` sent to the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    #[serde(rename = "type")]
    pub kind: WritingType,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerationResponse {
    pub story: Option<String>,
    pub poem: Option<String>,
    pub error: Option<String>,
}

impl GenerationResponse {
    /// Picks the field matching `kind` out of the response.
    pub fn into_text(self, kind: WritingType) -> anyhow::Result<String> {
        let text = match kind {
            WritingType::Story => self.story,
            WritingType::Poem => self.poem,
        };
        match (text, self.error) {
            (Some(text), _) => Ok(text),
            (None, Some(e)) => bail!("generation endpoint reported an error: {e}"),
            (None, None) => bail!("response has no `{kind}` field"),
        }
    }
}

#[async_trait::async_trait(?Send)]
pub trait GenerationService {
    /// Runs one generation request to completion. No retries, no timeout.
    async fn generate(&self, request: &GenerationRequest) -> anyhow::Result<String>;
}

#[derive(Debug, Clone)]
pub struct HttpGenerationService {
    endpoint: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpGenerationService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    /// Sends the request and returns the raw status and body (native version).
    #[cfg(not(target_arch = "wasm32"))]
    async fn post(&self, request: &GenerationRequest) -> anyhow::Result<(u16, String)> {
        let res = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .with_context(|| format!("could not reach {}", self.endpoint))?;
        let status = res.status().as_u16();
        let body = res.text().await?;
        Ok((status, body))
    }

    /// Sends the request and returns the raw status and body (WASM version).
    ///
    /// Goes through the browser's fetch, so the endpoint has to allow CORS.
    #[cfg(target_arch = "wasm32")]
    async fn post(&self, request: &GenerationRequest) -> anyhow::Result<(u16, String)> {
        use gloo_net::http::Request;

        let res = Request::post(&self.endpoint)
            .json(request)?
            .send()
            .await
            .with_context(|| format!("could not reach {}", self.endpoint))?;
        let status = res.status();
        let body = res.text().await?;
        Ok((status, body))
    }
}

#[async_trait::async_trait(?Send)]
impl GenerationService for HttpGenerationService {
    async fn generate(&self, request: &GenerationRequest) -> anyhow::Result<String> {
        let (status, body) = self.post(request).await?;
        if !(200..300).contains(&status) {
            bail!("request failed: {status} - {body}");
        }
        let response: GenerationResponse =
            serde_json::from_str(&body).context("malformed response body")?;
        response.into_text(request.kind)
    }
}
