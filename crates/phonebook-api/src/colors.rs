//! Handler for `GET /colors`.

use std::sync::Arc;

use axum::{Json, extract::State};
use phonebook_core::{color::Color, store::ContactStorage};
use phonebook_repository::Repository;

use crate::error::ApiError;

/// `GET /colors`
pub async fn list<S: ContactStorage>(
  State(repo): State<Arc<Repository<S>>>,
) -> Result<Json<Vec<Color>>, ApiError> {
  Ok(Json(repo.colors().await?))
}
