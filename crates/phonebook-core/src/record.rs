//! Persisted record shapes, one per table.
//!
//! These mirror the storage layout exactly and carry no business logic;
//! [`crate::mapper`] translates between them and the domain types.

use crate::{
  color::{ColorId, Tag},
  contact::ContactId,
};

/// A row of the `Color` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRecord {
  pub id:           ColorId,
  pub code:         String,
  pub display_name: String,
  pub tag:          Tag,
}

/// Input to [`crate::store::ContactStorage::insert_colors`].
/// The id is always assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewColor {
  pub code:         String,
  pub display_name: String,
  pub tag:          Tag,
}

/// A row of the `Contact` table.
///
/// `id: None` asks the store to assign a fresh id on insert. Rows read back
/// from the store always carry `Some`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
  pub id:           Option<ContactId>,
  pub name:         String,
  pub phone_number: String,
  pub tag:          Tag,
  pub color_id:     ColorId,
  pub trashed:      bool,
}
