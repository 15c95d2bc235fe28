use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://storybot-genai-1.onrender.com/generate";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    /// Fixed key of the single settings record in browser storage.
    pub id: Option<u32>,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            id: Some(1),
            endpoint: default_endpoint(),
        }
    }
}

impl AppSettings {
    /// Checks that the endpoint is an absolute http(s) URL.
    pub fn validate(&self) -> anyhow::Result<()> {
        let url = reqwest::Url::parse(self.endpoint.trim())
            .with_context(|| format!("{:?} is not a valid URL", self.endpoint))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("endpoint must use http or https, got {}", url.scheme());
        }
        Ok(())
    }
}
