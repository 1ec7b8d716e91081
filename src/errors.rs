use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A booking submission with one or more required fields missing. The
    /// response does not say which field, matching the wire contract.
    #[error("All fields are required")]
    MissingFields,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingFields => StatusCode::BAD_REQUEST,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
