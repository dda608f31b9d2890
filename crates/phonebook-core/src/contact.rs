//! The domain form of a contact, handed to observers and accepted from the UI.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{Color, Tag};

/// Numeric identity of a contact. [`ContactId::DRAFT`] marks a contact that
/// has not been persisted yet.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ContactId(pub i64);

impl ContactId {
  /// The "unassigned" sentinel carried by drafts.
  pub const DRAFT: Self = Self(-1);

  pub fn is_draft(self) -> bool { self == Self::DRAFT }
}

impl Default for ContactId {
  fn default() -> Self { Self::DRAFT }
}

impl fmt::Display for ContactId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// A contact with its color resolved.
///
/// A contact is either active or trashed; `trashed` is the only soft-delete
/// marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
  pub id:           ContactId,
  pub name:         String,
  pub phone_number: String,
  pub tag:          Tag,
  pub trashed:      bool,
  pub color:        Color,
}

impl Contact {
  /// A fresh draft: unassigned id, tag `Mobile`, the default color.
  pub fn draft() -> Self {
    Self {
      id:           ContactId::DRAFT,
      name:         String::new(),
      phone_number: String::new(),
      tag:          Tag::default(),
      trashed:      false,
      color:        Color::default(),
    }
  }

  /// Convenience constructor for a draft with the given fields.
  pub fn new(
    name: impl Into<String>,
    phone_number: impl Into<String>,
    tag: Tag,
  ) -> Self {
    Self {
      name: name.into(),
      phone_number: phone_number.into(),
      tag,
      ..Self::draft()
    }
  }

  pub fn is_draft(&self) -> bool { self.id.is_draft() }
}

impl Default for Contact {
  fn default() -> Self { Self::draft() }
}
