//! The interactive unlock-and-browse core.
//!
//! This module provides:
//! - The unlock session: vault opening, profile chooser, retry loop (`session`)
//! - Deterministic item ordering and display wrappers (`catalog`)
//! - The incremental search predicate (`search`)
//! - Masked row and detail rendering (`render`)
//! - The secret-extraction rule (`extract`)

pub mod catalog;
pub mod extract;
pub mod render;
pub mod search;
pub mod session;

// Re-export the most commonly used items.
pub use catalog::{build_catalog, DisplayItem};
pub use extract::extract_secret;
pub use render::{compact_row, detail_view};
pub use search::matches;
pub use session::{open_vault, select_profile, unlock_interactive, unlock_with_retry};
