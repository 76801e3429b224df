//! Clipboard output — the single write at the end of a session.

use arboard::Clipboard;

use crate::errors::{Result, VaultPickError};

/// Place `text` on the system clipboard.
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard =
        Clipboard::new().map_err(|e| VaultPickError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| VaultPickError::Clipboard(e.to_string()))
}
