//! Encoding and decoding helpers between domain types and the plain values
//! stored in SQLite columns.
//!
//! Tags are stored by name, ids as plain integers, `trashed` as 0/1.

use std::str::FromStr as _;

use phonebook_core::{
  color::{ColorId, Tag},
  contact::ContactId,
  record::{ColorRecord, ContactRecord},
};

use crate::{Error, Result};

// ─── Tag ─────────────────────────────────────────────────────────────────────

pub fn encode_tag(tag: Tag) -> &'static str { tag.into() }

pub fn decode_tag(s: String) -> Result<Tag> {
  Tag::from_str(&s).map_err(|_| Error::UnknownTag(s))
}

// ─── Id lists ────────────────────────────────────────────────────────────────

/// `?, ?, ?` with one placeholder per id, for `IN (...)` clauses.
pub fn placeholders(n: usize) -> String { vec!["?"; n].join(", ") }

pub fn encode_ids(ids: &[ContactId]) -> Vec<i64> {
  ids.iter().map(|id| id.0).collect()
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column values read directly from a `color` row.
pub struct RawColor {
  pub id:           i64,
  pub code:         String,
  pub display_name: String,
  pub tag:          String,
}

impl RawColor {
  pub const COLUMNS: &'static str = "id, code, display_name, tag";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:           row.get(0)?,
      code:         row.get(1)?,
      display_name: row.get(2)?,
      tag:          row.get(3)?,
    })
  }

  pub fn into_record(self) -> Result<ColorRecord> {
    Ok(ColorRecord {
      id:           ColorId(self.id),
      code:         self.code,
      display_name: self.display_name,
      tag:          decode_tag(self.tag)?,
    })
  }
}

/// Column values read directly from a `contact` row.
pub struct RawContact {
  pub id:           i64,
  pub name:         String,
  pub phone_number: String,
  pub tag:          String,
  pub color_id:     i64,
  pub trashed:      bool,
}

impl RawContact {
  pub const COLUMNS: &'static str =
    "id, name, phone_number, tag, color_id, trashed";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:           row.get(0)?,
      name:         row.get(1)?,
      phone_number: row.get(2)?,
      tag:          row.get(3)?,
      color_id:     row.get(4)?,
      trashed:      row.get(5)?,
    })
  }

  pub fn into_record(self) -> Result<ContactRecord> {
    Ok(ContactRecord {
      id:           Some(ContactId(self.id)),
      name:         self.name,
      phone_number: self.phone_number,
      tag:          decode_tag(self.tag)?,
      color_id:     ColorId(self.color_id),
      trashed:      self.trashed,
    })
  }
}

pub fn decode_contacts(raws: Vec<RawContact>) -> Result<Vec<ContactRecord>> {
  raws.into_iter().map(RawContact::into_record).collect()
}
