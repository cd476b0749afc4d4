use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{AppError, Result};

// Recognized URL shapes, in priority order. The capture stops at the
// terminator for each shape, so anything trailing the id is dropped.
static URL_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"(?:https?://)?(?:www\.)?youtube\.com/watch\?v=([^&]+)")
            .expect("Failed to parse watch URL pattern"),
        Regex::new(r"(?:https?://)?(?:www\.)?youtu\.be/([^?]+)")
            .expect("Failed to parse short URL pattern"),
        Regex::new(r"(?:https?://)?(?:www\.)?youtube\.com/embed/([^?]+)")
            .expect("Failed to parse embed URL pattern"),
    ]
});

/// Extracts the video id from a watch, short-link or embed URL.
/// Returns `None` for anything that matches no recognized shape.
pub fn extract_video_id(input: &str) -> Option<&str> {
    URL_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(input))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Metadata for a single video, flattened from the lookup response.
/// Engagement counts arrive as strings and are passed through untouched.
#[derive(Debug, Clone)]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub view_count: String,
    pub like_count: String,
    pub comment_count: String,
}

#[derive(Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Deserialize)]
struct VideoItem {
    snippet: Snippet,
    #[serde(default)]
    statistics: Statistics,
}

#[derive(Deserialize)]
struct Snippet {
    title: String,
    #[serde(default)]
    description: String,
    // Absent entirely when the video carries no tags
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    #[serde(default)]
    view_count: String,
    #[serde(default)]
    like_count: String,
    #[serde(default)]
    comment_count: String,
}

pub async fn fetch_video_metadata(
    client: &Client,
    config: &Config,
    video_id: &str,
) -> Result<VideoMetadata> {
    let url = format!("{}/videos", config.youtube_api_base);
    let response = client
        .get(&url)
        .query(&[
            ("part", "snippet,statistics"),
            ("id", video_id),
            ("key", config.youtube_api_key.as_str()),
        ])
        .send()
        .await
        .map_err(|e| AppError::MetadataUnavailable(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::MetadataUnavailable(format!(
            "metadata service returned {}: {}",
            status, body
        )));
    }

    let list: VideoListResponse = response
        .json()
        .await
        .map_err(|e| AppError::MetadataUnavailable(format!("invalid metadata response: {}", e)))?;

    let item = list
        .items
        .into_iter()
        .next()
        .ok_or_else(|| AppError::MetadataUnavailable(format!("no video found for id {}", video_id)))?;

    Ok(VideoMetadata {
        title: item.snippet.title,
        description: item.snippet.description,
        tags: item.snippet.tags,
        view_count: item.statistics.view_count,
        like_count: item.statistics.like_count,
        comment_count: item.statistics.comment_count,
    })
}

pub fn build_prompt(metadata: &VideoMetadata) -> String {
    let tags = if metadata.tags.is_empty() {
        "None".to_string()
    } else {
        metadata.tags.join(", ")
    };

    format!(
        "Please summarize the following video :\n\n\
         Title: {}\n\
         Description: {}\n\
         Tags: {}\n\
         Views: {}\n\
         Likes: {}\n\
         Comments: {}\n\n\
         Please provide a concise summary that captures the main points and \
         potential content of the video based on this information. The summary \
         should be about 3-4 paragraphs long.",
        metadata.title,
        metadata.description,
        tags,
        metadata.view_count,
        metadata.like_count,
        metadata.comment_count
    )
}
