//! Item records stored inside a profile.
//!
//! These types mirror the decrypted payload of a profile file: a flat
//! list of credential items, each with overview data (title, category,
//! URLs) and a detail block (fields, sections, notes).  The browsing
//! core treats them as read-only values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The reserved designation marking the field whose value is copied to
/// the clipboard when an item is chosen.
pub const PASSWORD_DESIGNATION: &str = "password";

/// Item category.
///
/// The derived `Ord` follows declaration order, which is the ascending
/// category order used when sorting the item list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Login,
    Password,
    SecureNote,
    CreditCard,
    Identity,
    BankAccount,
    Membership,
    Server,
    #[default]
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Login => "Login",
            Category::Password => "Password",
            Category::SecureNote => "Secure Note",
            Category::CreditCard => "Credit Card",
            Category::Identity => "Identity",
            Category::BankAccount => "Bank Account",
            Category::Membership => "Membership",
            Category::Server => "Server",
            Category::Other => "Other",
        };
        f.write_str(label)
    }
}

/// Whether a field value is plain text or must be masked in display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    Text,
    Concealed,
}

/// A top-level field of an item's detail block.
///
/// Top-level fields carry their kind under the `type` key, while
/// section fields use `kind` — the two shapes are kept as separate
/// structs rather than papered over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Field {
    /// Semantic tag, e.g. "username" or "password". May be empty.
    #[serde(default)]
    pub designation: String,

    #[serde(rename = "type", default)]
    pub kind: FieldKind,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub value: String,
}

/// A field scoped to a named section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionField {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub kind: FieldKind,

    #[serde(default)]
    pub value: String,
}

/// A named group of section fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub fields: Vec<SectionField>,
}

/// The detail block of an item: fields, sections, and free-form notes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Detail {
    #[serde(default)]
    pub fields: Vec<Field>,

    #[serde(default)]
    pub sections: Vec<Section>,

    #[serde(default)]
    pub notes: String,
}

/// A labeled URL attached to an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlEntry {
    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub url: String,
}

/// One stored credential item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub category: Category,

    /// Trashed items sort to the bottom and carry a `[Deleted]` marker.
    #[serde(default)]
    pub trashed: bool,

    #[serde(default)]
    pub urls: Vec<UrlEntry>,

    /// One-line synopsis shown next to the title in list rows
    /// (typically the account name or email).
    #[serde(default)]
    pub info: String,

    #[serde(default)]
    pub detail: Detail,
}
