use anyhow::{Context, Result};
use log::info;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::OcrSettings;

/// Raw multi-line text recognized from a screenshot
#[derive(Debug, Clone, Deserialize)]
pub struct RecognizedText {
    pub text: String,
}

/// Client for the external text-recognition service. One opaque call
/// per image, no streaming and no in-flight cancellation.
pub struct OcrClient {
    client: Client,
    endpoint: String,
}

impl OcrClient {
    pub fn new(settings: &OcrSettings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(settings.user_agent)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build OCR HTTP client")?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
        })
    }

    pub async fn recognize(&self, image: Vec<u8>) -> Result<RecognizedText> {
        info!("Sending {} byte image to OCR service", image.len());

        let response = self
            .client
            .post(&self.endpoint)
            .body(image)
            .send()
            .await
            .context("Failed to reach OCR service")?;

        if !response.status().is_success() {
            anyhow::bail!("OCR service returned status: {}", response.status());
        }

        response
            .json::<RecognizedText>()
            .await
            .context("Failed to decode OCR response")
    }
}
