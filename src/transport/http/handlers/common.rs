use crate::domain::catalog::LookupError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Answer for an empty dataset: 200 with a plain-text notice, kept for
/// compatibility with existing consumers.
pub fn dataset_unavailable(notice: &'static str) -> Response {
    (StatusCode::OK, notice).into_response()
}

pub fn json_200<T: Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

/// Every lookup failure is a 400 carrying the dataset's static message.
pub fn json_400<T: Serialize>(err: &LookupError, to_body: impl FnOnce(String) -> T) -> Response {
    (StatusCode::BAD_REQUEST, Json(to_body(err.message().to_string()))).into_response()
}
