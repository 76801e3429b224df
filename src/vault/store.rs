//! High-level vault access used by the browsing session.
//!
//! A vault is a directory holding one `.profile` file per profile.
//! `Vault::open` enumerates the profiles, `Profile::unlock` decrypts
//! one with a passphrase, and `UnlockedProfile::items` parses the
//! decrypted item list.  The browsing core consumes only these
//! operations and never looks inside the files itself.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use zeroize::Zeroizing;

use crate::crypto::encryption::{decrypt, encrypt};
use crate::crypto::kdf::{derive_profile_key, generate_salt, KdfParams};
use crate::crypto::keys::ProfileKey;
use crate::errors::{Result, VaultPickError};

use super::format::{self, ProfileHeader, RawProfile, StoredKdfParams, CURRENT_VERSION};
use super::item::ItemRecord;

/// File extension that marks a profile inside a vault directory.
const PROFILE_EXT: &str = "profile";

// ---------------------------------------------------------------------------
// Vault
// ---------------------------------------------------------------------------

/// An opened vault directory with its enumerated profiles.
///
/// Read-only: nothing in the browsing workflow ever writes back.
pub struct Vault {
    root: PathBuf,
    profiles: BTreeMap<String, PathBuf>,
}

impl Vault {
    /// Open a vault directory and enumerate its profiles.
    ///
    /// Fails with `InvalidPath` if the path does not exist, and with
    /// `NotAVault` if it is not a directory or contains no `.profile`
    /// files.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(VaultPickError::InvalidPath(path.to_path_buf()));
        }
        if !path.is_dir() {
            return Err(VaultPickError::NotAVault(path.to_path_buf()));
        }

        let mut profiles = BTreeMap::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let entry_path = entry.path();
            if entry_path.extension().and_then(|e| e.to_str()) != Some(PROFILE_EXT) {
                continue;
            }
            if let Some(stem) = entry_path.file_stem().and_then(|s| s.to_str()) {
                profiles.insert(stem.to_string(), entry_path.clone());
            }
        }

        if profiles.is_empty() {
            return Err(VaultPickError::NotAVault(path.to_path_buf()));
        }

        Ok(Self {
            root: path.to_path_buf(),
            profiles,
        })
    }

    /// Names of all profiles in this vault, sorted.
    pub fn profile_names(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }

    /// Load the named profile's header and sealed payload.
    pub fn profile(&self, name: &str) -> Result<Profile> {
        let path = self
            .profiles
            .get(name)
            .ok_or_else(|| VaultPickError::ProfileNotFound(name.to_string()))?;

        let raw = format::read_profile(path)?;
        Ok(Profile {
            name: name.to_string(),
            raw,
        })
    }

    /// Path of the vault directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// A profile whose header has been read but whose payload is still
/// sealed.  Transitions once to `UnlockedProfile` via `unlock`.
pub struct Profile {
    name: String,
    raw: RawProfile,
}

impl Profile {
    /// Profile name (the file stem inside the vault directory).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Passphrase hint stored in the plaintext header. May be empty.
    pub fn password_hint(&self) -> &str {
        &self.raw.header.password_hint
    }

    /// Attempt to unlock this profile with a passphrase.
    ///
    /// Derives the profile key with the stored Argon2 params and
    /// decrypts the payload.  A GCM authentication failure maps to
    /// `WrongPassphrase`, which callers treat as recoverable; every
    /// other error is fatal to the session.
    pub fn unlock(&self, passphrase: &[u8]) -> Result<UnlockedProfile> {
        let stored = self.raw.header.kdf_params.unwrap_or_default();
        let params = KdfParams {
            memory_kib: stored.memory_kib,
            iterations: stored.iterations,
            parallelism: stored.parallelism,
        };

        // ProfileKey wipes the derived key when it goes out of scope.
        let key = ProfileKey::new(derive_profile_key(
            passphrase,
            &self.raw.header.salt,
            &params,
        )?);
        let plaintext = decrypt(key.as_bytes(), &self.raw.payload)?;

        Ok(UnlockedProfile {
            name: self.name.clone(),
            plaintext: Zeroizing::new(plaintext),
        })
    }
}

// ---------------------------------------------------------------------------
// UnlockedProfile
// ---------------------------------------------------------------------------

/// A successfully unlocked profile holding the decrypted item payload.
///
/// The plaintext is wiped from memory when the profile is dropped.
pub struct UnlockedProfile {
    name: String,
    plaintext: Zeroizing<Vec<u8>>,
}

impl UnlockedProfile {
    /// Profile name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parse and return the item list.
    pub fn items(&self) -> Result<Vec<ItemRecord>> {
        serde_json::from_slice(&self.plaintext)
            .map_err(|e| VaultPickError::InvalidProfileFormat(format!("item JSON: {e}")))
    }
}

// ---------------------------------------------------------------------------
// Provisioning
// ---------------------------------------------------------------------------

/// Create a new profile file inside a vault directory.
///
/// Generates a random salt, derives the profile key from the
/// passphrase, encrypts the serialized item list, and writes the
/// profile atomically.  Pass `None` for `kdf_params` to use the
/// defaults.  Used by vault provisioning tools and test fixtures; the
/// browsing workflow itself never writes.
pub fn create_profile(
    vault_dir: &Path,
    name: &str,
    password_hint: &str,
    passphrase: &[u8],
    items: &[ItemRecord],
    kdf_params: Option<&KdfParams>,
) -> Result<PathBuf> {
    let path = vault_dir.join(format!("{name}.{PROFILE_EXT}"));
    if path.exists() {
        return Err(VaultPickError::ProfileAlreadyExists(path));
    }

    let salt = generate_salt();
    let effective_params = kdf_params.copied().unwrap_or_default();

    let key = ProfileKey::new(derive_profile_key(passphrase, &salt, &effective_params)?);

    let item_bytes = serde_json::to_vec(items)
        .map_err(|e| VaultPickError::SerializationError(format!("items: {e}")))?;
    let payload = encrypt(key.as_bytes(), &item_bytes)?;

    let header = ProfileHeader {
        version: CURRENT_VERSION,
        name: name.to_string(),
        password_hint: password_hint.to_string(),
        salt: salt.to_vec(),
        kdf_params: Some(StoredKdfParams {
            memory_kib: effective_params.memory_kib,
            iterations: effective_params.iterations,
            parallelism: effective_params.parallelism,
        }),
        created_at: Utc::now(),
    };

    format::write_profile(&path, &header, &payload)?;
    Ok(path)
}
