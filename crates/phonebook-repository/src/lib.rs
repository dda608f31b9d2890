//! The contact repository: sole writer of the store, and publisher of the
//! active and trashed views derived from it.
//!
//! Construct a [`Repository`] with [`Repository::open`]; it seeds a fresh
//! store and publishes the first snapshot before returning.

pub mod publish;
pub mod repository;
pub mod seed;

pub use publish::{Subscription, ViewSnapshot};
pub use repository::{Repository, Saved};
pub use seed::{SeedReport, ensure_seeded};
