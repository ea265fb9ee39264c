use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{GenerateRequest, GenerateResponse, SlideGenerator};
use crate::error::{Error, Result};
use crate::slide::SlideData;

/// Client for a remote generate-slide endpoint.
#[derive(Clone)]
pub struct HttpSlideGenerator {
    url: String,
    client: Client,
}

impl HttpSlideGenerator {
    /// Create a client posting to `url`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Endpoint this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST the request and decode the response body.
    async fn post(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        let resp = self.client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {} failed: {}", self.url, e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::generation_status(
                format!("Request to {} returned {}", self.url, status),
                status.as_u16(),
            ));
        }

        let body = resp.bytes().await
            .map_err(|e| Error::Network(format!("Reading response from {} failed: {}", self.url, e)))?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(Error::generation(format!("Empty response from {}", self.url)));
        }

        serde_json::from_slice(&body)
            .map_err(|e| Error::parse(format!("Invalid slide JSON from {}: {}", self.url, e)))
    }
}

#[async_trait]
impl SlideGenerator for HttpSlideGenerator {
    async fn generate(&self, prompt: &str) -> Result<SlideData> {
        let request = GenerateRequest::new(prompt);
        let response = self.post(&request).await?;
        if !response.slide.has_unique_ids() {
            return Err(Error::generation(format!("Slide from {} has duplicate element ids", self.url)));
        }
        tracing::debug!(
            slide = %response.slide.id,
            elements = response.slide.elements.len(),
            "remote generator returned slide"
        );
        Ok(response.slide)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on an ephemeral port.
    async fn serve_once(status_line: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0_u8; 8192];
            let _ = socket.read(&mut buf).await;
            let reply = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(reply.as_bytes()).await;
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}/api/generate-slide")
    }

    #[tokio::test]
    async fn test_success_decodes_slide() {
        let slide = crate::slide::default_slide();
        let body = serde_json::to_string(&GenerateResponse { slide: slide.clone() }).unwrap();
        let url = serve_once("200 OK", body).await;

        let generator = HttpSlideGenerator::new(url, Duration::from_secs(5));
        let got = generator.generate("hello").await.unwrap();
        assert_eq!(got, slide);
    }

    #[tokio::test]
    async fn test_error_status_maps_to_generation_error() {
        let url = serve_once("500 Internal Server Error", "{}".to_string()).await;

        let generator = HttpSlideGenerator::new(url, Duration::from_secs(5));
        let err = generator.generate("hello").await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let url = serve_once("200 OK", r#"{"nope":true}"#.to_string()).await;

        let generator = HttpSlideGenerator::new(url, Duration::from_secs(5));
        let err = generator.generate("hello").await.unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[tokio::test]
    async fn test_duplicate_element_ids_rejected() {
        let mut slide = crate::slide::default_slide();
        let copy = slide.elements[0].clone();
        slide.elements.push(copy);
        let body = serde_json::to_string(&GenerateResponse { slide }).unwrap();
        let url = serve_once("200 OK", body).await;

        let generator = HttpSlideGenerator::new(url, Duration::from_secs(5));
        let err = generator.generate("hello").await.unwrap_err();
        assert!(err.to_string().contains("duplicate element ids"));
    }

    #[tokio::test]
    async fn test_empty_body_is_generation_error() {
        let url = serve_once("200 OK", String::new()).await;

        let generator = HttpSlideGenerator::new(url, Duration::from_secs(5));
        let err = generator.generate("hello").await.unwrap_err();
        assert!(matches!(err, Error::Generation { status: None, .. }));
        assert!(err.to_string().contains("Empty response"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind then drop so the port is known to be closed.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let generator = HttpSlideGenerator::new(format!("http://{addr}/"), Duration::from_secs(2));
        let err = generator.generate("hello").await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }
}
