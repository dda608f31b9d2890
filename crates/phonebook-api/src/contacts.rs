//! Handlers for `/contacts` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/contacts` | Active view; optional `?tag=Mobile\|Family\|Home\|Office\|Other` |
//! | `GET`  | `/contacts/trash` | Trashed view |
//! | `POST` | `/contacts` | Body: a contact; omit `id` (or send `-1`) for a new one |
//! | `POST` | `/contacts/:id/trash` | 404 if not found |
//! | `POST` | `/contacts/restore` | Body: `{"ids":[..]}`; unknown ids are ignored |
//! | `POST` | `/contacts/purge` | Body: `{"ids":[..]}`; unknown ids are ignored |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use phonebook_core::{
  color::Tag,
  contact::{Contact, ContactId},
  store::ContactStorage,
};
use phonebook_repository::Repository;
use serde::Deserialize;

use crate::error::ApiError;

// ─── Views ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub tag: Option<Tag>,
}

/// `GET /contacts[?tag=<tag>]`
pub async fn list<S: ContactStorage>(
  State(repo): State<Arc<Repository<S>>>,
  Query(params): Query<ListParams>,
) -> Json<Vec<Contact>> {
  match params.tag {
    Some(tag) => Json(repo.contacts_with_tag(tag)),
    None => Json(repo.active_view()),
  }
}

/// `GET /contacts/trash`
pub async fn trash<S: ContactStorage>(
  State(repo): State<Arc<Repository<S>>>,
) -> Json<Vec<Contact>> {
  Json(repo.trashed_view())
}

// ─── Save ─────────────────────────────────────────────────────────────────────

/// `POST /contacts`: 201 when a new row was written, 200 on replace.
pub async fn save<S: ContactStorage>(
  State(repo): State<Arc<Repository<S>>>,
  Json(contact): Json<Contact>,
) -> Result<impl IntoResponse, ApiError> {
  let saved = repo.upsert(contact).await?;
  let status = if saved.created {
    StatusCode::CREATED
  } else {
    StatusCode::OK
  };
  Ok((status, Json(saved.contact)))
}

// ─── Trash lifecycle ──────────────────────────────────────────────────────────

/// `POST /contacts/:id/trash`
pub async fn move_to_trash<S: ContactStorage>(
  State(repo): State<Arc<Repository<S>>>,
  Path(id): Path<ContactId>,
) -> Result<StatusCode, ApiError> {
  repo.move_to_trash(id).await?;
  Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct IdsBody {
  pub ids: Vec<ContactId>,
}

/// `POST /contacts/restore` with body: `{"ids":[1,2]}`
pub async fn restore<S: ContactStorage>(
  State(repo): State<Arc<Repository<S>>>,
  Json(body): Json<IdsBody>,
) -> Result<StatusCode, ApiError> {
  repo.restore(&body.ids).await?;
  Ok(StatusCode::NO_CONTENT)
}

/// `POST /contacts/purge` with body: `{"ids":[1,2]}`
pub async fn purge<S: ContactStorage>(
  State(repo): State<Arc<Repository<S>>>,
  Json(body): Json<IdsBody>,
) -> Result<StatusCode, ApiError> {
  repo.purge(&body.ids).await?;
  Ok(StatusCode::NO_CONTENT)
}
