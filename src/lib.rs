pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod video;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use config::Config;
use error::{AppError, Result};

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: Client,
}

impl AppState {
    /// Builds the shared state, with a single bounded-timeout HTTP client
    /// reused for both external services.
    pub fn new(config: Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(AppState {
            config: Arc::new(config),
            http,
        })
    }
}
