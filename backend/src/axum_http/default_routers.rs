use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use tracing::info;

use super::error_responses::AppError;

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    info!(path = %uri.path(), "http: no route matched");
    AppError::NotFound("NOT_FOUND".to_string()).into_response()
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK").into_response()
}
