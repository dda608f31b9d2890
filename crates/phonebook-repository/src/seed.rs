//! First-run population of an empty store.

use phonebook_core::{
  Error, Result,
  defaults::{DEFAULT_CONTACTS, default_palette},
  record::ContactRecord,
  store::ContactStorage,
};

/// How many rows [`ensure_seeded`] wrote to each table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
  pub colors_seeded:   usize,
  pub contacts_seeded: usize,
}

/// Insert the default palette into an empty color table, then the default
/// contacts into an empty contact table.
///
/// Each table is considered independently; a single existing row suppresses
/// seeding for that table. Contacts resolve their color against the colors
/// actually stored, so the palette must be in place first.
pub async fn ensure_seeded<S: ContactStorage>(store: &S) -> Result<SeedReport> {
  let mut report = SeedReport::default();

  let mut colors = store.all_colors().await.map_err(Error::storage)?;
  if colors.is_empty() {
    let ids = store
      .insert_colors(default_palette())
      .await
      .map_err(Error::storage)?;
    report.colors_seeded = ids.len();
    colors = store.all_colors().await.map_err(Error::storage)?;
  }

  let contacts = store.all_contacts().await.map_err(Error::storage)?;
  if contacts.is_empty() {
    // Resolve every color before writing anything.
    let records = DEFAULT_CONTACTS
      .iter()
      .map(|d| {
        let color = colors
          .iter()
          .find(|c| c.tag == d.tag)
          .ok_or(Error::NoColorForTag(d.tag))?;
        Ok(ContactRecord {
          id:           None,
          name:         d.name.to_owned(),
          phone_number: d.phone_number.to_owned(),
          tag:          d.tag,
          color_id:     color.id,
          trashed:      false,
        })
      })
      .collect::<Result<Vec<_>>>()?;

    // One transaction: a failed seed leaves the table empty, so the next
    // open retries it in full.
    let ids = store.insert_contacts(records).await.map_err(Error::storage)?;
    report.contacts_seeded = ids.len();
  }

  Ok(report)
}
