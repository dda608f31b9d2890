//! Integration tests for `SqliteStore` against an in-memory database.

use phonebook_core::{
  color::{ColorId, Tag},
  contact::ContactId,
  defaults::default_palette,
  record::{ContactRecord, NewColor},
  store::ContactStorage,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

/// A store holding the default palette (ids 1..=5).
async fn store_with_palette() -> SqliteStore {
  let s = store().await;
  s.insert_colors(default_palette()).await.unwrap();
  s
}

fn contact(name: &str, tag: Tag, color_id: i64) -> ContactRecord {
  ContactRecord {
    id:           None,
    name:         name.into(),
    phone_number: "555".into(),
    tag,
    color_id:     ColorId(color_id),
    trashed:      false,
  }
}

// ─── Colors ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn fresh_store_is_empty() {
  let s = store().await;
  assert!(s.all_colors().await.unwrap().is_empty());
  assert!(s.all_contacts().await.unwrap().is_empty());
}

#[tokio::test]
async fn insert_colors_assigns_ids_in_order() {
  let s = store().await;
  let ids = s.insert_colors(default_palette()).await.unwrap();
  assert_eq!(ids, (1..=5).map(ColorId).collect::<Vec<_>>());

  let colors = s.all_colors().await.unwrap();
  assert_eq!(colors.len(), 5);
  let office = colors.iter().find(|c| c.tag == Tag::Office).unwrap();
  assert_eq!(office.id, ColorId(4));
  assert_eq!(office.code, "#B7D3DF");
  assert_eq!(office.display_name, "Sky Blue");
}

#[tokio::test]
async fn insert_colors_empty_batch_is_noop() {
  let s = store().await;
  let ids = s.insert_colors(Vec::<NewColor>::new()).await.unwrap();
  assert!(ids.is_empty());
  assert!(s.all_colors().await.unwrap().is_empty());
}

// ─── Insert or replace ───────────────────────────────────────────────────────

#[tokio::test]
async fn insert_without_id_assigns_fresh_ids() {
  let s = store_with_palette().await;

  let a = s
    .insert_or_replace_contact(contact("Adam", Tag::Mobile, 1))
    .await
    .unwrap();
  let b = s
    .insert_or_replace_contact(contact("Jane", Tag::Mobile, 1))
    .await
    .unwrap();

  assert_eq!(a, ContactId(1));
  assert_eq!(b, ContactId(2));
  assert_eq!(s.all_contacts().await.unwrap().len(), 2);
}

#[tokio::test]
async fn insert_with_existing_id_replaces_row() {
  let s = store_with_palette().await;
  let id = s
    .insert_or_replace_contact(contact("Dad", Tag::Family, 2))
    .await
    .unwrap();

  let mut updated = contact("Dad", Tag::Home, 3);
  updated.id = Some(id);
  updated.trashed = true;
  let written = s.insert_or_replace_contact(updated).await.unwrap();
  assert_eq!(written, id);

  let all = s.all_contacts().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].id, Some(id));
  assert_eq!(all[0].tag, Tag::Home);
  assert_eq!(all[0].color_id, ColorId(3));
  assert!(all[0].trashed);
}

#[tokio::test]
async fn insert_with_unknown_color_is_rejected() {
  let s = store_with_palette().await;
  let err = s
    .insert_or_replace_contact(contact("Ghost", Tag::Other, 42))
    .await
    .unwrap_err();
  assert!(matches!(err, crate::Error::Database(_)));
}

// ─── Queries ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn contacts_by_ids_skips_unknown_ids() {
  let s = store_with_palette().await;
  let a = s
    .insert_or_replace_contact(contact("Adam", Tag::Mobile, 1))
    .await
    .unwrap();
  s.insert_or_replace_contact(contact("Jane", Tag::Mobile, 1))
    .await
    .unwrap();

  let found = s.contacts_by_ids(&[a, ContactId(99)]).await.unwrap();
  assert_eq!(found.len(), 1);
  assert_eq!(found[0].name, "Adam");

  assert!(s.contacts_by_ids(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn contacts_by_ids_handles_more_ids_than_sqlite_variables() {
  let s = store_with_palette().await;
  let a = s
    .insert_or_replace_contact(contact("Adam", Tag::Mobile, 1))
    .await
    .unwrap();
  let b = s
    .insert_or_replace_contact(contact("Jane", Tag::Mobile, 1))
    .await
    .unwrap();

  // Unknown ids on both sides of the known ones, with a duplicate.
  let mut ids: Vec<_> = (1_000..41_000).map(ContactId).collect();
  ids.push(b);
  ids.push(a);
  ids.push(b);

  let found = s.contacts_by_ids(&ids).await.unwrap();
  let found: Vec<_> = found.iter().map(|r| r.id).collect();
  assert_eq!(found, [Some(a), Some(b)]);
}

// ─── Batch insert ────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_contacts_assigns_ids_in_order() {
  let s = store_with_palette().await;
  let ids = s
    .insert_contacts(vec![
      contact("Big Bro", Tag::Family, 2),
      contact("Home", Tag::Home, 3),
    ])
    .await
    .unwrap();
  assert_eq!(ids, [ContactId(1), ContactId(2)]);

  let all = s.all_contacts().await.unwrap();
  assert_eq!(all[1].name, "Home");
  assert_eq!(all[1].color_id, ColorId(3));
}

#[tokio::test]
async fn insert_contacts_is_all_or_nothing() {
  let s = store_with_palette().await;
  let err = s
    .insert_contacts(vec![
      contact("Adam", Tag::Mobile, 1),
      contact("Jane", Tag::Mobile, 1),
      contact("Ghost", Tag::Other, 42),
    ])
    .await
    .unwrap_err();
  assert!(matches!(err, crate::Error::Database(_)));
  assert!(s.all_contacts().await.unwrap().is_empty());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_contacts_counts_removed_rows() {
  let s = store_with_palette().await;
  let a = s
    .insert_or_replace_contact(contact("Adam", Tag::Mobile, 1))
    .await
    .unwrap();
  let b = s
    .insert_or_replace_contact(contact("Jane", Tag::Mobile, 1))
    .await
    .unwrap();

  let removed = s.delete_contacts(&[a, ContactId(77)]).await.unwrap();
  assert_eq!(removed, 1);

  let left = s.all_contacts().await.unwrap();
  assert_eq!(left.len(), 1);
  assert_eq!(left[0].id, Some(b));
  assert_eq!(s.delete_contacts(&[]).await.unwrap(), 0);
}

#[tokio::test]
async fn delete_contacts_handles_more_ids_than_sqlite_variables() {
  let s = store_with_palette().await;
  let a = s
    .insert_or_replace_contact(contact("Adam", Tag::Mobile, 1))
    .await
    .unwrap();
  let b = s
    .insert_or_replace_contact(contact("Jane", Tag::Mobile, 1))
    .await
    .unwrap();

  let mut ids: Vec<_> = (1_000..41_000).map(ContactId).collect();
  ids.push(a);
  ids.push(a);

  assert_eq!(s.delete_contacts(&ids).await.unwrap(), 1);
  let left = s.all_contacts().await.unwrap();
  assert_eq!(left.len(), 1);
  assert_eq!(left[0].id, Some(b));
}

#[tokio::test]
async fn purged_ids_are_not_reused() {
  let s = store_with_palette().await;
  let a = s
    .insert_or_replace_contact(contact("Adam", Tag::Mobile, 1))
    .await
    .unwrap();
  s.delete_contacts(&[a]).await.unwrap();

  let next = s
    .insert_or_replace_contact(contact("Jane", Tag::Mobile, 1))
    .await
    .unwrap();
  assert!(next > a);
}

#[tokio::test]
async fn reopening_a_file_store_keeps_rows() {
  let dir = std::env::temp_dir().join(format!(
    "phonebook-store-test-{}",
    std::process::id()
  ));
  std::fs::create_dir_all(&dir).unwrap();
  let path = dir.join("reopen.db");
  let _ = std::fs::remove_file(&path);

  {
    let s = SqliteStore::open(&path).await.unwrap();
    s.insert_colors(default_palette()).await.unwrap();
  }

  let s = SqliteStore::open(&path).await.unwrap();
  assert_eq!(s.all_colors().await.unwrap().len(), 5);

  drop(s);
  let _ = std::fs::remove_dir_all(&dir);
}
