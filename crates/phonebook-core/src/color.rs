//! Tags and the colors associated with them.

use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Tag ─────────────────────────────────────────────────────────────────────

/// The closed set of labels a contact can carry. Each tag owns exactly one
/// color in the default palette.
///
/// The string form (`"Mobile"`, `"Family"`, ...) is what gets persisted.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
  strum::EnumIter,
  strum::IntoStaticStr,
)]
pub enum Tag {
  #[default]
  Mobile,
  Family,
  Home,
  Office,
  Other,
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// Storage-assigned identity of a color. Immutable once assigned.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ColorId(pub i64);

impl fmt::Display for ColorId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// A palette entry in its domain form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
  pub id:           ColorId,
  /// Hex color code, e.g. `#B7D3DF`.
  pub code:         String,
  pub display_name: String,
  pub tag:          Tag,
}

impl Default for Color {
  fn default() -> Self { crate::defaults::default_color() }
}
