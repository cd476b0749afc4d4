use axum::{
    routing::post,
    Router,
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower_http::cors::{CorsLayer, Any};
use tracing::{debug, info, warn};

use crate::error::{AppError, ErrorResponse};
use crate::api::models::{SummarizeRequest, SummarizeResponse};
use crate::video::{build_prompt, extract_video_id, fetch_video_metadata};
use crate::llm::call_gemini;
use crate::AppState;

/// Fixed disclaimer attached to every successful summary, independent of the
/// generation result.
pub const DISCLAIMER: &str = "This is the AI based summary it may be accurate maybe not";

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/summarize", post(summarize_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn summarize_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Response {
    // A body that doesn't decode into the request shape is rejected before
    // either external service is touched.
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            warn!("rejecting malformed request body: {}", rejection.body_text());
            let body = Json(ErrorResponse {
                error: rejection.body_text(),
            });
            return (StatusCode::BAD_REQUEST, body).into_response();
        }
    };

    info!("processing summarize request for {}", req.url);

    match process_summarize_request(&state, &req).await {
        Ok(response_data) => {
            info!("successfully summarized {}", req.url);
            (StatusCode::OK, Json(response_data)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

async fn process_summarize_request(
    state: &AppState,
    req: &SummarizeRequest,
) -> Result<SummarizeResponse, AppError> {
    let video_id = extract_video_id(&req.url).ok_or(AppError::InvalidInput)?;
    debug!("extracted video id {}", video_id);

    let metadata = fetch_video_metadata(&state.http, &state.config, video_id).await?;

    let prompt = build_prompt(&metadata);
    debug!("built prompt with length: {} chars", prompt.len());

    let summary = call_gemini(&state.http, &state.config, &prompt).await?;

    Ok(SummarizeResponse {
        summary,
        disclaimer: DISCLAIMER.to_string(),
    })
}
