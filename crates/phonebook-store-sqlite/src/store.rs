//! [`SqliteStore`]: the SQLite implementation of [`ContactStorage`].

use std::path::Path;

use phonebook_core::{
  color::ColorId,
  contact::ContactId,
  record::{ColorRecord, ContactRecord, NewColor},
  store::ContactStorage,
};

use crate::{
  Result,
  encode::{RawColor, RawContact, decode_contacts, encode_ids, encode_tag, placeholders},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A phonebook store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// Upper bound on ids bound into one `IN (...)` statement, far below
/// SQLite's host-parameter limit.
const IDS_PER_STATEMENT: usize = 500;

/// Run a `SELECT` over `contact` with the given trailing clause.
fn select_contacts(
  conn: &rusqlite::Connection,
  clause: &str,
  params: impl rusqlite::Params,
) -> rusqlite::Result<Vec<RawContact>> {
  let sql = format!(
    "SELECT {} FROM contact {clause} ORDER BY id",
    RawContact::COLUMNS
  );
  let mut stmt = conn.prepare(&sql)?;
  let rows = stmt
    .query_map(params, RawContact::from_row)?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  Ok(rows)
}

/// Sorted, deduplicated raw ids, so chunked results concatenate in id order.
fn sorted_ids(ids: &[ContactId]) -> Vec<i64> {
  let mut ids = encode_ids(ids);
  ids.sort_unstable();
  ids.dedup();
  ids
}

// ─── ContactStorage impl ─────────────────────────────────────────────────────

impl ContactStorage for SqliteStore {
  type Error = crate::Error;

  // ── Colors ────────────────────────────────────────────────────────────────

  async fn all_colors(&self) -> Result<Vec<ColorRecord>> {
    let raws: Vec<RawColor> = self
      .conn
      .call(|conn| {
        let sql = format!("SELECT {} FROM color ORDER BY id", RawColor::COLUMNS);
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], RawColor::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawColor::into_record).collect()
  }

  async fn insert_colors(&self, colors: Vec<NewColor>) -> Result<Vec<ColorId>> {
    let ids = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut ids = Vec::with_capacity(colors.len());
        for color in &colors {
          tx.execute(
            "INSERT INTO color (code, display_name, tag) VALUES (?1, ?2, ?3)",
            rusqlite::params![color.code, color.display_name, encode_tag(color.tag)],
          )?;
          ids.push(ColorId(tx.last_insert_rowid()));
        }
        tx.commit()?;
        Ok(ids)
      })
      .await?;
    Ok(ids)
  }

  // ── Contacts ──────────────────────────────────────────────────────────────

  async fn all_contacts(&self) -> Result<Vec<ContactRecord>> {
    let raws = self
      .conn
      .call(|conn| Ok(select_contacts(conn, "", rusqlite::params![])?))
      .await?;
    decode_contacts(raws)
  }

  async fn contacts_by_ids(&self, ids: &[ContactId]) -> Result<Vec<ContactRecord>> {
    if ids.is_empty() {
      return Ok(Vec::new());
    }
    let ids = sorted_ids(ids);

    let raws = self
      .conn
      .call(move |conn| {
        let mut rows = Vec::new();
        for chunk in ids.chunks(IDS_PER_STATEMENT) {
          let clause = format!("WHERE id IN ({})", placeholders(chunk.len()));
          rows.extend(select_contacts(
            conn,
            &clause,
            rusqlite::params_from_iter(chunk),
          )?);
        }
        Ok(rows)
      })
      .await?;

    decode_contacts(raws)
  }

  async fn insert_or_replace_contact(&self, record: ContactRecord) -> Result<ContactId> {
    let id           = record.id.map(|id| id.0);
    let name         = record.name;
    let phone_number = record.phone_number;
    let tag          = encode_tag(record.tag);
    let color_id     = record.color_id.0;
    let trashed      = record.trashed;

    let written = self
      .conn
      .call(move |conn| {
        // A NULL id makes SQLite assign the next rowid.
        conn.execute(
          "INSERT OR REPLACE INTO contact (id, name, phone_number, tag, color_id, trashed)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![id, name, phone_number, tag, color_id, trashed],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(ContactId(written))
  }

  async fn insert_contacts(&self, records: Vec<ContactRecord>) -> Result<Vec<ContactId>> {
    let ids = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut ids = Vec::with_capacity(records.len());
        for r in &records {
          tx.execute(
            "INSERT INTO contact (id, name, phone_number, tag, color_id, trashed)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
              r.id.map(|id| id.0),
              r.name,
              r.phone_number,
              encode_tag(r.tag),
              r.color_id.0,
              r.trashed
            ],
          )?;
          ids.push(ContactId(tx.last_insert_rowid()));
        }
        tx.commit()?;
        Ok(ids)
      })
      .await?;
    Ok(ids)
  }

  async fn delete_contacts(&self, ids: &[ContactId]) -> Result<usize> {
    if ids.is_empty() {
      return Ok(0);
    }
    let ids = sorted_ids(ids);

    let removed = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut removed = 0;
        for chunk in ids.chunks(IDS_PER_STATEMENT) {
          let sql = format!("DELETE FROM contact WHERE id IN ({})", placeholders(chunk.len()));
          removed += tx.execute(&sql, rusqlite::params_from_iter(chunk))?;
        }
        tx.commit()?;
        Ok(removed)
      })
      .await?;
    Ok(removed)
  }
}
