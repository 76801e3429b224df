//! Cryptographic primitives for vaultpick.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption (`encryption`)
//! - Argon2id passphrase-based key derivation (`kdf`)
//! - The zeroizing `ProfileKey` wrapper (`keys`)

pub mod encryption;
pub mod kdf;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_profile_key, ...};
pub use encryption::{decrypt, encrypt};
pub use kdf::{derive_profile_key, generate_salt, KdfParams};
pub use keys::ProfileKey;
