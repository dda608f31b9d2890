//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  /// Corrupted color references; never expected in a healthy store.
  #[error("integrity error: {0}")]
  Integrity(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<phonebook_core::Error> for ApiError {
  fn from(e: phonebook_core::Error) -> Self {
    use phonebook_core::Error;
    match e {
      Error::NotFound(id) => Self::NotFound(format!("contact {id} not found")),
      e @ (Error::ReferentialIntegrity { .. } | Error::NoColorForTag(_)) => {
        Self::Integrity(e.to_string())
      }
      Error::Storage(e) => Self::Store(e),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Integrity(m) => (StatusCode::INTERNAL_SERVER_ERROR, m.clone()),
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
