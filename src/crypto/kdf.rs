//! Passphrase-based key derivation using Argon2id.
//!
//! Argon2id is a memory-hard KDF that protects against brute-force and
//! GPU-based attacks.  The parameters used at profile creation are
//! stored in the profile header so unlock always replays the same
//! settings.

use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;

use crate::errors::{Result, VaultPickError};

/// Length of the salt in bytes (256 bits).
const SALT_LEN: usize = 32;

/// Length of the derived key in bytes (256 bits, for AES-256).
const KEY_LEN: usize = 32;

/// Minimum safe memory cost in KiB (8 MB).
const MIN_MEMORY_KIB: u32 = 8_192;

/// Configurable Argon2id parameters.
///
/// These are persisted verbatim in the profile header so a vault
/// created with custom settings unlocks with the same settings.
#[derive(Debug, Clone, Copy)]
pub struct KdfParams {
    /// Memory cost in KiB (default: 65 536 = 64 MB).
    pub memory_kib: u32,
    /// Number of iterations (default: 3).
    pub iterations: u32,
    /// Parallelism lanes (default: 4).
    pub parallelism: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            memory_kib: 65_536,
            iterations: 3,
            parallelism: 4,
        }
    }
}

/// Derive a 32-byte profile key from a passphrase and salt using Argon2id.
///
/// The same passphrase + salt + params will always produce the same key.
/// Enforces minimum Argon2 parameters to prevent dangerously weak KDF settings.
pub fn derive_profile_key(
    passphrase: &[u8],
    salt: &[u8],
    kdf_params: &KdfParams,
) -> Result<[u8; KEY_LEN]> {
    if kdf_params.memory_kib < MIN_MEMORY_KIB {
        return Err(VaultPickError::KeyDerivationFailed(format!(
            "Argon2 memory_kib must be at least {MIN_MEMORY_KIB} (got {})",
            kdf_params.memory_kib
        )));
    }
    if kdf_params.iterations < 1 {
        return Err(VaultPickError::KeyDerivationFailed(
            "Argon2 iterations must be at least 1".into(),
        ));
    }
    if kdf_params.parallelism < 1 {
        return Err(VaultPickError::KeyDerivationFailed(
            "Argon2 parallelism must be at least 1".into(),
        ));
    }

    let params = Params::new(
        kdf_params.memory_kib,
        kdf_params.iterations,
        kdf_params.parallelism,
        Some(KEY_LEN),
    )
    .map_err(|e| VaultPickError::KeyDerivationFailed(format!("invalid Argon2 params: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = [0u8; KEY_LEN];
    argon2
        .hash_password_into(passphrase, salt, &mut key)
        .map_err(|e| {
            VaultPickError::KeyDerivationFailed(format!("Argon2id hashing failed: {e}"))
        })?;

    Ok(key)
}

/// Generate a cryptographically random 32-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng.fill_bytes(&mut salt);
    salt
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cheap params so tests don't burn 64 MB per derivation.
    fn test_params() -> KdfParams {
        KdfParams {
            memory_kib: MIN_MEMORY_KIB,
            iterations: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn same_inputs_same_key() {
        let salt = [7u8; 32];
        let a = derive_profile_key(b"hunter2", &salt, &test_params()).unwrap();
        let b = derive_profile_key(b"hunter2", &salt, &test_params()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_passphrase_different_key() {
        let salt = [7u8; 32];
        let a = derive_profile_key(b"hunter2", &salt, &test_params()).unwrap();
        let b = derive_profile_key(b"hunter3", &salt, &test_params()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn rejects_weak_memory() {
        let salt = [7u8; 32];
        let weak = KdfParams {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        };
        assert!(derive_profile_key(b"pw", &salt, &weak).is_err());
    }
}
