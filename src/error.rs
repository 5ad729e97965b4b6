//! Error types for Bibliotheca server

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// Application error codes returned in error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    DbFailure = 2,
    NoSuchData = 3,
    BadValue = 4,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Validation error: {0}")]
    InvalidFields(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
    /// Per-field validation messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, Vec<String>>>,
}

/// Flatten validator output into `field -> [messages]`
fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut fields = None;
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchData, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone()),
            AppError::InvalidFields(errors) => {
                fields = Some(field_messages(errors));
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::BadValue,
                    "Invalid input".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
            fields,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("Book with id 7 not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_maps_to_500() {
        let response = AppError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_field_messages_fall_back_to_code() {
        let mut errors = ValidationErrors::new();
        errors.add("title", ValidationError::new("length"));
        let mut with_message = ValidationError::new("range");
        with_message.message = Some("Year must be 1500 or later".into());
        errors.add("year", with_message);

        let fields = field_messages(&errors);
        assert_eq!(fields["title"], vec!["length".to_string()]);
        assert_eq!(fields["year"], vec!["Year must be 1500 or later".to_string()]);
    }
}
