use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};

pub const DEFAULT_YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub youtube_api_key: String,
    pub gemini_api_key: String,
    /// Base URLs are overridable so tests can point both clients at a stand-in server.
    pub youtube_api_base: String,
    pub gemini_api_base: String,
    pub gemini_model: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        // Both service credentials are required up front; a missing key is a
        // startup error, not a per-request error.
        let youtube_api_key = env::var("YOUTUBE_API_KEY")?;
        let gemini_api_key = env::var("GEMINI_API_KEY")?;

        let youtube_api_base = env::var("YOUTUBE_API_BASE")
            .unwrap_or_else(|_| DEFAULT_YOUTUBE_API_BASE.to_string());
        let gemini_api_base = env::var("GEMINI_API_BASE")
            .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string());
        let gemini_model = env::var("GEMINI_MODEL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        // Load server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let server_addr = SocketAddr::new(ip, port);

        Ok(Config {
            server_addr,
            youtube_api_key,
            gemini_api_key,
            youtube_api_base,
            gemini_api_base,
            gemini_model,
        })
    }
}
