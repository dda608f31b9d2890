//! Publication of view snapshots to subscribers.
//!
//! The current snapshot is an `Arc` swapped in one step, so a reader sees
//! either the old pair of views or the new one. Each subscriber owns an
//! unbounded channel; publishing never waits on a subscriber.

use std::sync::{
  Arc, Mutex, PoisonError, RwLock, Weak,
  atomic::{AtomicU64, Ordering},
};

use phonebook_core::{color::Color, contact::Contact};
use serde::Serialize;
use tokio::sync::mpsc;

// ─── Snapshot ────────────────────────────────────────────────────────────────

/// Both derived views, plus the palette, as of one storage read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
  /// Incremented on every publish; 0 only before the first recompute.
  pub revision: u64,
  /// Contacts with `trashed = false`, ordered by id.
  pub active:   Vec<Contact>,
  /// Contacts with `trashed = true`, ordered by id.
  pub trashed:  Vec<Contact>,
  pub colors:   Vec<Color>,
}

// ─── Publisher ───────────────────────────────────────────────────────────────

type Sender = mpsc::UnboundedSender<Arc<ViewSnapshot>>;

#[derive(Default)]
pub(crate) struct Publisher {
  current:     RwLock<Arc<ViewSnapshot>>,
  /// Held for the whole of `publish` and `subscribe` so a new subscriber's
  /// first value and the stream after it never overlap or leave a gap.
  subscribers: Mutex<Vec<(u64, Sender)>>,
  next_id:     AtomicU64,
}

impl Publisher {
  pub(crate) fn current(&self) -> Arc<ViewSnapshot> {
    self
      .current
      .read()
      .unwrap_or_else(PoisonError::into_inner)
      .clone()
  }

  /// Swap in a new snapshot and notify every live subscriber. Returns the
  /// revision assigned.
  pub(crate) fn publish(
    &self,
    active: Vec<Contact>,
    trashed: Vec<Contact>,
    colors: Vec<Color>,
  ) -> u64 {
    let mut subscribers = self
      .subscribers
      .lock()
      .unwrap_or_else(PoisonError::into_inner);

    let snapshot = {
      let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
      let next = Arc::new(ViewSnapshot {
        revision: current.revision + 1,
        active,
        trashed,
        colors,
      });
      *current = next.clone();
      next
    };

    // A failed send means the receiver is gone.
    subscribers.retain(|(_, tx)| tx.send(snapshot.clone()).is_ok());
    snapshot.revision
  }

  pub(crate) fn subscribe(self: &Arc<Self>) -> Subscription {
    let mut subscribers = self
      .subscribers
      .lock()
      .unwrap_or_else(PoisonError::into_inner);

    let (tx, rx) = mpsc::unbounded_channel();
    // Cannot fail: `rx` is still in hand.
    let _ = tx.send(self.current());

    let id = self.next_id.fetch_add(1, Ordering::Relaxed);
    subscribers.push((id, tx));

    Subscription { id, rx, publisher: Arc::downgrade(self) }
  }

  pub(crate) fn subscriber_count(&self) -> usize {
    let mut subscribers = self
      .subscribers
      .lock()
      .unwrap_or_else(PoisonError::into_inner);
    subscribers.retain(|(_, tx)| !tx.is_closed());
    subscribers.len()
  }

  fn remove(&self, id: u64) {
    self
      .subscribers
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .retain(|(sub_id, _)| *sub_id != id);
  }
}

// ─── Subscription ────────────────────────────────────────────────────────────

/// A live feed of [`ViewSnapshot`]s.
///
/// The first value received is the snapshot current at subscription time;
/// every later publish follows in order. Call [`Subscription::unsubscribe`]
/// (or drop the subscription) to stop delivery.
///
/// The queue behind a subscription is unbounded. A subscription that is kept
/// alive but never read holds every snapshot published since; drop it once
/// it is no longer consumed.
pub struct Subscription {
  id:        u64,
  rx:        mpsc::UnboundedReceiver<Arc<ViewSnapshot>>,
  publisher: Weak<Publisher>,
}

impl Subscription {
  /// Wait for the next snapshot. Returns `None` once the repository is gone
  /// and every pending snapshot has been received.
  pub async fn recv(&mut self) -> Option<Arc<ViewSnapshot>> { self.rx.recv().await }

  /// The next already-delivered snapshot, if any, without waiting.
  pub fn try_recv(&mut self) -> Option<Arc<ViewSnapshot>> { self.rx.try_recv().ok() }

  /// Stop receiving updates.
  pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
  fn drop(&mut self) {
    if let Some(publisher) = self.publisher.upgrade() {
      publisher.remove(self.id);
    }
  }
}
