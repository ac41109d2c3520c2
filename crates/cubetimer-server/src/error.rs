use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cubetimer_core::CoreError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("{0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::Database(e) => {
                tracing::error!("Database Error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            AppError::Core(e) => {
                let status = match e {
                    CoreError::UnsupportedPuzzle(_) | CoreError::UnknownAverageKind(_) => {
                        StatusCode::NOT_FOUND
                    }
                    CoreError::InvalidTime(_) | CoreError::UnknownAction(_) => {
                        StatusCode::BAD_REQUEST
                    }
                };
                (status, e.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        (status, Json(json!({ "error": msg }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
