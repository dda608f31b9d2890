//! The single writer over a [`ContactStorage`].

use std::{collections::HashSet, sync::Arc};

use phonebook_core::{
  Error, Result,
  color::{Color, Tag},
  contact::{Contact, ContactId},
  mapper::{colors_by_id, map_color, map_colors, map_contacts, to_record},
  store::ContactStorage,
};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::{
  publish::{Publisher, Subscription, ViewSnapshot},
  seed::ensure_seeded,
};

/// The contact as persisted by [`Repository::upsert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
  pub contact: Contact,
  /// No row with this id existed before the save.
  pub created: bool,
}

/// Owns all writes to the store and republishes both derived views after
/// every mutation.
///
/// Mutations are serialized by an internal lock: each one performs its
/// writes, re-reads the store and publishes a new [`ViewSnapshot`] before the
/// next mutation may start. Reads of the published views never wait on the
/// lock.
///
/// The store is moved in at [`Repository::open`] and never handed back out,
/// so every write goes through these methods.
pub struct Repository<S> {
  store:      S,
  write_lock: Mutex<()>,
  publisher:  Arc<Publisher>,
}

impl<S: ContactStorage> Repository<S> {
  /// Seed `store` if it is fresh, publish the first snapshot, and return the
  /// ready repository.
  pub async fn open(store: S) -> Result<Self> {
    let repo = Self {
      store,
      write_lock: Mutex::new(()),
      publisher: Arc::new(Publisher::default()),
    };

    {
      let _guard = repo.write_lock.lock().await;
      let report = ensure_seeded(&repo.store).await.inspect_err(log_failure)?;
      info!(
        colors = report.colors_seeded,
        contacts = report.contacts_seeded,
        "store seeded"
      );
      repo.recompute().await?;
    }

    Ok(repo)
  }

  // ── Published views ───────────────────────────────────────────────────────

  /// The latest published snapshot.
  pub fn snapshot(&self) -> Arc<ViewSnapshot> { self.publisher.current() }

  /// Contacts not in the trash, as of the latest completed mutation.
  pub fn active_view(&self) -> Vec<Contact> { self.snapshot().active.clone() }

  /// Contacts in the trash, as of the latest completed mutation.
  pub fn trashed_view(&self) -> Vec<Contact> { self.snapshot().trashed.clone() }

  /// Active contacts carrying `tag`.
  pub fn contacts_with_tag(&self, tag: Tag) -> Vec<Contact> {
    self
      .snapshot()
      .active
      .iter()
      .filter(|c| c.tag == tag)
      .cloned()
      .collect()
  }

  /// Start receiving snapshots: the current one immediately, then one per
  /// completed mutation.
  pub fn subscribe(&self) -> Subscription { self.publisher.subscribe() }

  pub fn subscriber_count(&self) -> usize { self.publisher.subscriber_count() }

  // ── Reads ─────────────────────────────────────────────────────────────────

  /// Every color, read from storage.
  pub async fn colors(&self) -> Result<Vec<Color>> {
    let records = self.store.all_colors().await.map_err(storage_failure)?;
    Ok(map_colors(&records))
  }

  // ── Mutations ─────────────────────────────────────────────────────────────

  /// Insert a draft or replace an existing contact, and return it as
  /// persisted.
  ///
  /// The color is always re-derived from `contact.tag`; a draft gets a fresh
  /// id.
  pub async fn save(&self, contact: Contact) -> Result<Contact> {
    self.upsert(contact).await.map(|saved| saved.contact)
  }

  /// [`Repository::save`], also reporting whether a new row was created.
  pub async fn upsert(&self, contact: Contact) -> Result<Saved> {
    let _guard = self.write_lock.lock().await;

    let colors = self.store.all_colors().await.map_err(storage_failure)?;
    let color = colors
      .iter()
      .find(|c| c.tag == contact.tag)
      .map(map_color)
      .ok_or(Error::NoColorForTag(contact.tag))
      .inspect_err(log_failure)?;

    let created = contact.is_draft()
      || self
        .store
        .contacts_by_ids(&[contact.id])
        .await
        .map_err(storage_failure)?
        .is_empty();

    let mut contact = Contact { color, ..contact };
    let id = self
      .store
      .insert_or_replace_contact(to_record(&contact))
      .await
      .map_err(storage_failure)?;
    debug!(%id, created, "contact saved");
    contact.id = id;

    self.recompute().await?;
    Ok(Saved { contact, created })
  }

  /// Move one contact to the trash. Fails with [`Error::NotFound`] if `id`
  /// does not exist.
  pub async fn move_to_trash(&self, id: ContactId) -> Result<()> {
    let _guard = self.write_lock.lock().await;

    let mut record = self
      .store
      .contacts_by_ids(&[id])
      .await
      .map_err(storage_failure)?
      .pop()
      .ok_or(Error::NotFound(id))?;

    record.trashed = true;
    self
      .store
      .insert_or_replace_contact(record)
      .await
      .map_err(storage_failure)?;
    debug!(%id, "contact moved to trash");

    self.recompute().await
  }

  /// Take every existing contact in `ids` out of the trash. Unknown ids are
  /// skipped. Views are republished once, after the whole batch.
  pub async fn restore(&self, ids: &[ContactId]) -> Result<()> {
    let _guard = self.write_lock.lock().await;

    let records = self.store.contacts_by_ids(ids).await.map_err(storage_failure)?;
    log_missing(ids, records.iter().filter_map(|r| r.id), "restore");

    for mut record in records {
      record.trashed = false;
      self
        .store
        .insert_or_replace_contact(record)
        .await
        .map_err(storage_failure)?;
    }
    debug!(requested = ids.len(), "contacts restored");

    self.recompute().await
  }

  /// Permanently delete the contacts in `ids`. Unknown ids are no-ops.
  /// Views are republished once, after the whole batch.
  pub async fn purge(&self, ids: &[ContactId]) -> Result<()> {
    let _guard = self.write_lock.lock().await;

    let removed = self.store.delete_contacts(ids).await.map_err(storage_failure)?;
    debug!(requested = ids.len(), removed, "contacts purged");

    self.recompute().await
  }

  // ── Recompute ─────────────────────────────────────────────────────────────

  /// Re-read the store and publish both views together. The caller must hold
  /// `write_lock`.
  async fn recompute(&self) -> Result<()> {
    let colors = self.store.all_colors().await.map_err(storage_failure)?;
    let contacts = self.store.all_contacts().await.map_err(storage_failure)?;

    let by_id = colors_by_id(colors.iter().cloned());
    let (trashed, active): (Vec<_>, Vec<_>) =
      contacts.into_iter().partition(|r| r.trashed);

    let active = map_contacts(active, &by_id).inspect_err(log_failure)?;
    let trashed = map_contacts(trashed, &by_id).inspect_err(log_failure)?;

    let revision = self.publisher.publish(active, trashed, map_colors(&colors));
    debug!(revision, "views published");
    Ok(())
  }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn storage_failure<E>(e: E) -> Error
where
  E: std::error::Error + Send + Sync + 'static,
{
  error!(error = %e, "storage failure");
  Error::storage(e)
}

fn log_failure(e: &Error) {
  error!(error = %e, "contact repository failure");
}

/// Note, at debug level, the requested ids a batch operation did not find.
fn log_missing(
  requested: &[ContactId],
  found: impl Iterator<Item = ContactId>,
  operation: &'static str,
) {
  let found: HashSet<_> = found.collect();
  for id in requested.iter().filter(|id| !found.contains(id)) {
    debug!(%id, operation, "skipping unknown contact");
  }
}
