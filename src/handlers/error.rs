use axum::http::StatusCode;
use axum::{response::IntoResponse, Json};
use serde::Serialize;

use crate::errors::{HasErrorCode, PsError};

#[derive(Serialize)]
struct Problem<'a> {
    title: &'a str,
    detail: String,
    code: &'a str,
}

fn map_error(err: &PsError) -> StatusCode {
    use PsError::*;
    match err {
        Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        Sort(_) => StatusCode::BAD_REQUEST,
        ContainerClient(_) => StatusCode::BAD_GATEWAY,
        Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for PsError {
    fn into_response(self) -> axum::response::Response {
        let status = map_error(&self);
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "Request failed: {}", self);
        } else {
            tracing::warn!(code = self.error_code(), "Request rejected: {}", self);
        }
        let problem = Problem {
            title: status.canonical_reason().unwrap_or("error"),
            detail: self.to_string(),
            code: self.error_code(),
        };
        (status, Json(problem)).into_response()
    }
}
