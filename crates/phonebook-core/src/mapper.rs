//! Pure translation between persisted records and domain objects.
//!
//! Nothing here touches storage. The only failure is a contact whose color id
//! is absent from the color map handed in, which is reported as
//! [`Error::ReferentialIntegrity`] rather than papered over with a default.

use std::collections::HashMap;

use crate::{
  Error, Result,
  color::{Color, ColorId},
  contact::{Contact, ContactId},
  record::{ColorRecord, ContactRecord},
};

/// Color rows keyed by id, as needed by [`map_contact`].
pub type ColorsById = HashMap<ColorId, ColorRecord>;

pub fn colors_by_id(records: impl IntoIterator<Item = ColorRecord>) -> ColorsById {
  records.into_iter().map(|r| (r.id, r)).collect()
}

// ─── Colors ──────────────────────────────────────────────────────────────────

pub fn map_color(record: &ColorRecord) -> Color {
  Color {
    id:           record.id,
    code:         record.code.clone(),
    display_name: record.display_name.clone(),
    tag:          record.tag,
  }
}

pub fn map_colors(records: &[ColorRecord]) -> Vec<Color> {
  records.iter().map(map_color).collect()
}

// ─── Contacts ────────────────────────────────────────────────────────────────

/// Join a contact row with its color.
pub fn map_contact(record: ContactRecord, colors: &ColorsById) -> Result<Contact> {
  let id = record.id.unwrap_or(ContactId::DRAFT);
  let color = colors
    .get(&record.color_id)
    .map(map_color)
    .ok_or(Error::ReferentialIntegrity {
      contact_id: id,
      color_id:   record.color_id,
    })?;

  Ok(Contact {
    id,
    name: record.name,
    phone_number: record.phone_number,
    tag: record.tag,
    trashed: record.trashed,
    color,
  })
}

/// Map every row, or fail on the first unresolved color with no partial
/// output.
pub fn map_contacts(
  records: impl IntoIterator<Item = ContactRecord>,
  colors: &ColorsById,
) -> Result<Vec<Contact>> {
  records
    .into_iter()
    .map(|r| map_contact(r, colors))
    .collect()
}

/// The persisted form of `contact`. Drafts lose their sentinel id so the store
/// assigns a fresh one; anything else replaces the existing row.
pub fn to_record(contact: &Contact) -> ContactRecord {
  ContactRecord {
    id:           (!contact.is_draft()).then_some(contact.id),
    name:         contact.name.clone(),
    phone_number: contact.phone_number.clone(),
    tag:          contact.tag,
    color_id:     contact.color.id,
    trashed:      contact.trashed,
  }
}
