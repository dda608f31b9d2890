//! Error type for `phonebook-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// A `tag` column held a string outside the closed tag set.
  #[error("unknown tag in storage: {0:?}")]
  UnknownTag(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
