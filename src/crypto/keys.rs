//! Zeroizing wrapper for the derived profile key.

use zeroize::Zeroize;

/// Length of the profile key (256 bits).
const KEY_LEN: usize = 32;

/// A wrapper around a 32-byte profile key that automatically zeroes
/// its memory when dropped.
///
/// The key is derived from the passphrase at unlock time and must not
/// linger in memory once the decrypted payload is in hand.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct ProfileKey {
    bytes: [u8; KEY_LEN],
}

impl ProfileKey {
    /// Create a new `ProfileKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to pass to the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}
