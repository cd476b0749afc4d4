use serde::Serialize;
use reqwest::Client;

use crate::config::Config;
use crate::error::{Result, AppError};

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

/// Submits a single non-streaming completion request and returns the
/// generated text.
pub async fn call_gemini(client: &Client, config: &Config, prompt: &str) -> Result<String> {
    let body = GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: prompt.into(),
            }],
        }],
    };

    let url = format!(
        "{}/models/{}:generateContent",
        config.gemini_api_base, config.gemini_model
    );

    let response = client
        .post(&url)
        .query(&[("key", config.gemini_api_key.as_str())])
        .json(&body)
        .send()
        .await
        .map_err(|e| AppError::GenerationFailed(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(AppError::GenerationFailed(format!(
            "generation service returned {}: {}",
            status, text
        )));
    }

    let json: serde_json::Value = response
        .json()
        .await
        .map_err(|e| AppError::GenerationFailed(format!("invalid generation response: {}", e)))?;

    let reply = json["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .ok_or_else(|| AppError::GenerationFailed("no text in generation response".to_string()))?
        .to_string();

    Ok(reply)
}
