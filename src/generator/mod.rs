//! Slide generation.
//!
//! The editor asks a [`SlideGenerator`] for a whole new slide. Two
//! implementations exist: [`TemplateSlideGenerator`] assembles the slide in
//! process from fixed templates, and [`HttpSlideGenerator`] posts the prompt
//! to a remote endpoint that speaks the same JSON contract.

/// HTTP client for a remote generate-slide endpoint
pub mod http;
/// Colour palettes and palette selection
pub mod palette;
/// Template-based slide assembly
pub mod template;

pub use http::HttpSlideGenerator;
pub use palette::{FixedPalette, Palette, PaletteSelector, RandomPalette, SeededPalette, PALETTES};
pub use template::TemplateSlideGenerator;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::slide::SlideData;

/// Request body: `{ "prompt": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Free-form prompt; absent is distinct from empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl GenerateRequest {
    /// Request carrying `prompt`.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: Some(prompt.into()) }
    }
}

/// Response body: `{ "slide": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated slide.
    pub slide: SlideData,
}

/// Something that turns a prompt into a complete slide.
#[async_trait]
pub trait SlideGenerator: Send + Sync {
    /// Produce a slide for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<SlideData>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Pick the generator the configuration asks for.
pub fn from_config(config: &Config) -> Arc<dyn SlideGenerator> {
    if let Some(url) = &config.generate_url {
        tracing::info!(%url, "using remote slide generator");
        return Arc::new(HttpSlideGenerator::new(url.clone(), config.request_timeout));
    }

    let selector: Box<dyn PaletteSelector> = match config.palette_seed {
        Some(seed) => Box::new(SeededPalette::new(seed)),
        None => Box::new(RandomPalette),
    };
    tracing::info!("using in-process template slide generator");
    Arc::new(TemplateSlideGenerator::new(selector))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_request_prompt_absent_vs_empty() {
        let req: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.prompt, None);
        let req: GenerateRequest = serde_json::from_str(r#"{"prompt":""}"#).unwrap();
        assert_eq!(req.prompt.as_deref(), Some(""));
        assert_eq!(serde_json::to_string(&GenerateRequest::new("hi")).unwrap(), r#"{"prompt":"hi"}"#);
    }

    #[test]
    fn test_from_config_picks_remote_when_url_set() {
        let mut config = Config::default();
        assert_eq!(from_config(&config).name(), "template");

        config.generate_url = Some("http://127.0.0.1:9/api/generate-slide".to_string());
        assert_eq!(from_config(&config).name(), "http");
    }
}
