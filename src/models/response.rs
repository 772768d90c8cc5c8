use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GenericResponse<T> {
    pub results: Vec<T>,
}

impl<T> GenericResponse<T> {
    pub fn results(results: Vec<T>) -> Self {
        GenericResponse { results }
    }
}

impl<T> IntoResponse for GenericResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
