//! Error types for the restaurant API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid restaurant id: {0}")]
    InvalidRestaurantId(String),

    #[error("restaurant not found: {0}")]
    RestaurantNotFound(Uuid),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::InvalidRestaurantId(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::RestaurantNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            Error::Database(_) | Error::Other(_) => {
                // Log the real cause for operators; callers only ever see a
                // generic message.
                tracing::error!(error = %self, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "something went wrong".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
