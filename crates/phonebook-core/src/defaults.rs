//! The fixed palette and contact list a fresh store is seeded with.

use crate::{
  color::{Color, ColorId, Tag},
  record::NewColor,
};

/// One entry per tag, in insertion order: `(tag, code, display name)`.
pub const DEFAULT_PALETTE: [(Tag, &str, &str); 5] = [
  (Tag::Mobile, "#F8ECD1", "Soft Yellow"),
  (Tag::Family, "#DEB6AB", "Pale Orange"),
  (Tag::Home, "#FEC8D8", "Candy Pink"),
  (Tag::Office, "#B7D3DF", "Sky Blue"),
  (Tag::Other, "#C9BBCF", "Medium Lilac"),
];

/// A default contact; its color is the stored palette entry for `tag`.
#[derive(Debug, Clone, Copy)]
pub struct DefaultContact {
  pub name:         &'static str,
  pub phone_number: &'static str,
  pub tag:          Tag,
}

pub const DEFAULT_CONTACTS: [DefaultContact; 7] = [
  DefaultContact { name: "Big Bro", phone_number: "8842351113", tag: Tag::Family },
  DefaultContact { name: "Kobra Office", phone_number: "9942305436", tag: Tag::Office },
  DefaultContact { name: "Dad", phone_number: "886430008", tag: Tag::Family },
  DefaultContact { name: "Kursh Delivery", phone_number: "991557433", tag: Tag::Other },
  DefaultContact { name: "Adam", phone_number: "886350599", tag: Tag::Mobile },
  DefaultContact { name: "Jane", phone_number: "882415513", tag: Tag::Mobile },
  DefaultContact { name: "Auntie's home", phone_number: "991630331", tag: Tag::Home },
];

/// The palette as insertable records.
pub fn default_palette() -> Vec<NewColor> {
  DEFAULT_PALETTE
    .iter()
    .map(|(tag, code, name)| NewColor {
      code:         (*code).to_owned(),
      display_name: (*name).to_owned(),
      tag:          *tag,
    })
    .collect()
}

/// The color drafts start with: the first palette entry, with the id a fresh
/// store assigns it.
pub fn default_color() -> Color {
  let (tag, code, name) = DEFAULT_PALETTE[0];
  Color {
    id: ColorId(1),
    code: code.to_owned(),
    display_name: name.to_owned(),
    tag,
  }
}
