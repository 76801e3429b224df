//! Vault access — encrypted credential storage.
//!
//! This module provides:
//! - `ItemRecord` and the field/section types it contains (`item`)
//! - The binary profile file format (`format`)
//! - `Vault`, `Profile`, and `UnlockedProfile` handles plus the
//!   `create_profile` provisioning helper (`store`)

pub mod format;
pub mod item;
pub mod store;

// Re-export the most commonly used items.
pub use format::{ProfileHeader, StoredKdfParams};
pub use item::{
    Category, Detail, Field, FieldKind, ItemRecord, Section, SectionField, UrlEntry,
    PASSWORD_DESIGNATION,
};
pub use store::{create_profile, Profile, UnlockedProfile, Vault};
