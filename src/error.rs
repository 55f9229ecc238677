use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    #[error("account {0} still has payments attached")]
    AccountInUse(i64),

    #[error("payment references account {0}, which does not exist")]
    MissingAccount(i64),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        ApiError::NotFound { resource, id }
    }
}

/// True when the underlying driver reported a foreign-key constraint failure.
pub fn is_fk_violation(e: &SqlxError) -> bool {
    matches!(e, SqlxError::Database(db) if db.is_foreign_key_violation())
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match &self {
            ApiError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: self.to_string(),
                },
            ),
            ApiError::AccountInUse(_) => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "ACCOUNT_IN_USE".to_string(),
                    message: self.to_string(),
                },
            ),
            ApiError::MissingAccount(_) => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "ACCOUNT_MISSING".to_string(),
                    message: self.to_string(),
                },
            ),
            ApiError::Database(e) => {
                error!(error = %e, "database failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody {
                        code: "INTERNAL_ERROR".to_string(),
                        message: "An internal server error occurred.".to_string(),
                    },
                )
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
