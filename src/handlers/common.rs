//! Welcome message and unmatched-route fallback.

use crate::error::AppError;
use crate::response::MessageBody;
use axum::{extract::OriginalUri, Json};

pub const WELCOME_MESSAGE: &str = "Welcome to the Formula 1 API.";

pub async fn welcome() -> Json<MessageBody> {
    Json(MessageBody {
        message: WELCOME_MESSAGE,
    })
}

pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    AppError::RouteNotFound(path.to_string())
}
