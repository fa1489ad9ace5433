use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum AccountError {
    Validation(String),
    NotFound(String),
    InvalidCredentials,
    Hash(String),
    Conflict(String),
    Database(sqlx::Error),
}

impl std::fmt::Display for AccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountError::Validation(msg) => write!(f, "Validation: {msg}"),
            AccountError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AccountError::InvalidCredentials => write!(f, "Invalid credentials"),
            AccountError::Hash(msg) => write!(f, "Hash Error: {msg}"),
            AccountError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            AccountError::Database(err) => write!(f, "Database Error: {err}"),
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AccountError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AccountError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AccountError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            AccountError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AccountError::Hash(msg) => {
                tracing::error!("Hash error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AccountError::Database(err) => {
                tracing::error!("Database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AccountError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return AccountError::Conflict("Email is already registered".to_string());
            }
        }
        AccountError::Database(err)
    }
}
