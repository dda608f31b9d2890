//! Error taxonomy shared by every layer above the storage engine.

use thiserror::Error;

use crate::{
  color::{ColorId, Tag},
  contact::ContactId,
};

#[derive(Debug, Error)]
pub enum Error {
  /// A contact row points at a color id that storage does not hold. Never
  /// repaired automatically: it means the store handed back an inconsistent
  /// snapshot.
  #[error("contact {contact_id} references missing color {color_id}")]
  ReferentialIntegrity {
    contact_id: ContactId,
    color_id:   ColorId,
  },

  /// The palette holds no color for this tag, so a contact carrying it
  /// cannot be given a valid color reference.
  #[error("no color is registered for tag {0}")]
  NoColorForTag(Tag),

  #[error("contact not found: {0}")]
  NotFound(ContactId),

  #[error("storage failure: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Box a backend error as [`Error::Storage`].
  pub fn storage<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Storage(Box::new(e))
  }

  /// `true` for the referential-integrity class of failures.
  pub fn is_integrity(&self) -> bool {
    matches!(self, Self::ReferentialIntegrity { .. } | Self::NoColorForTag(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
