//! JSON REST API for the phonebook.
//!
//! Exposes an axum [`Router`] over a [`Repository`]. The repository stays the
//! only writer; handlers translate requests into its operations.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", phonebook_api::api_router(repo.clone()))
//! ```

pub mod colors;
pub mod contacts;
pub mod error;

use std::sync::Arc;

use axum::{
  Json, Router,
  extract::State,
  routing::{get, post},
};
use phonebook_core::store::ContactStorage;
use phonebook_repository::{Repository, ViewSnapshot};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Build the API router for `repo`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(repo: Arc<Repository<S>>) -> Router<()>
where
  S: ContactStorage + 'static,
{
  Router::new()
    // Contacts
    .route("/contacts", get(contacts::list::<S>).post(contacts::save::<S>))
    .route("/contacts/trash", get(contacts::trash::<S>))
    .route("/contacts/restore", post(contacts::restore::<S>))
    .route("/contacts/purge", post(contacts::purge::<S>))
    .route("/contacts/{id}/trash", post(contacts::move_to_trash::<S>))
    // Colors
    .route("/colors", get(colors::list::<S>))
    // Both views at one revision
    .route("/snapshot", get(snapshot::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(repo)
}

/// `GET /snapshot`
async fn snapshot<S: ContactStorage>(
  State(repo): State<Arc<Repository<S>>>,
) -> Json<ViewSnapshot> {
  Json(ViewSnapshot::clone(&repo.snapshot()))
}

// ─── Integration tests ────────────────────────────────────────────────────────
