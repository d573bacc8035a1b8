use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::auth::AuthError;
use crate::domain::reading_list::ReadingListError;
use crate::domain::repositories::RepositoryError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 401 Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate(field) => Self::conflict(format!("{} already taken", field)),
            other => {
                tracing::error!(error = %other, "Repository failure");
                Self::internal_server_error("Database error")
            }
        }
    }
}

impl From<ReadingListError> for ApiError {
    fn from(err: ReadingListError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        tracing::error!(error = %err, "Authentication backend failure");
        Self::internal_server_error("Authentication error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reading_list::ListCategory;

    #[test]
    fn duplicate_maps_to_conflict() {
        let err = ApiError::from(RepositoryError::Duplicate("username".to_string()));
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.message, "username already taken");
    }

    #[test]
    fn corrupt_row_is_hidden() {
        let err = ApiError::from(RepositoryError::Corrupt("bad email".to_string()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.contains("bad email"));
    }

    #[test]
    fn reading_list_error_is_bad_request() {
        let err = ApiError::from(ReadingListError::NotInList {
            item_id: "OL1M".to_string(),
            category: ListCategory::Read,
        });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Book OL1M is not in the read list");
    }

    #[tokio::test]
    async fn response_body_has_error_field() {
        let response = ApiError::conflict("missing").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "missing");
    }
}
