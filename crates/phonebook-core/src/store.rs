//! The `ContactStorage` trait: the narrow CRUD interface the repository
//! consumes.
//!
//! The trait is implemented by storage backends (e.g.
//! `phonebook-store-sqlite`). It carries no business logic: trash semantics,
//! color resolution and view publication all live above it.

use std::future::Future;

use crate::{
  color::ColorId,
  contact::ContactId,
  record::{ColorRecord, ContactRecord, NewColor},
};

/// Abstraction over a phonebook storage backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactStorage: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Colors ────────────────────────────────────────────────────────────

  /// Every color row, ordered by id.
  fn all_colors(
    &self,
  ) -> impl Future<Output = Result<Vec<ColorRecord>, Self::Error>> + Send + '_;

  /// Insert colors in one transaction; returns the assigned ids in input
  /// order.
  fn insert_colors(
    &self,
    colors: Vec<NewColor>,
  ) -> impl Future<Output = Result<Vec<ColorId>, Self::Error>> + Send + '_;

  // ── Contacts ──────────────────────────────────────────────────────────

  /// Every contact row, trashed or not, ordered by id.
  fn all_contacts(
    &self,
  ) -> impl Future<Output = Result<Vec<ContactRecord>, Self::Error>> + Send + '_;

  /// The rows whose id is in `ids`, ordered by id. Unknown ids are simply
  /// absent from the result; `ids` may be arbitrarily long.
  fn contacts_by_ids<'a>(
    &'a self,
    ids: &'a [ContactId],
  ) -> impl Future<Output = Result<Vec<ContactRecord>, Self::Error>> + Send + 'a;

  /// Insert `record` or replace the row with the same id.
  ///
  /// A record with `id: None` gets a fresh id; the id of the written row is
  /// returned either way.
  fn insert_or_replace_contact(
    &self,
    record: ContactRecord,
  ) -> impl Future<Output = Result<ContactId, Self::Error>> + Send + '_;

  /// Insert new contacts in one transaction; returns the assigned ids in
  /// input order. Either every record is written or none is.
  fn insert_contacts(
    &self,
    records: Vec<ContactRecord>,
  ) -> impl Future<Output = Result<Vec<ContactId>, Self::Error>> + Send + '_;

  /// Hard-delete the rows whose id is in `ids`; returns how many were
  /// removed. Unknown ids are no-ops; `ids` may be arbitrarily long.
  fn delete_contacts<'a>(
    &'a self,
    ids: &'a [ContactId],
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + 'a;
}
