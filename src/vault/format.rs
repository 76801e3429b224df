//! Binary profile file format.
//!
//! A `.profile` file has this layout:
//!
//! ```text
//! [VPRF: 4 bytes][version: 1 byte][header_len: 4 bytes LE][header JSON][payload]
//! ```
//!
//! - **Magic** (`VPRF`): identifies the file as a vaultpick profile.
//! - **Version**: format version (currently `1`).
//! - **Header length**: little-endian u32 telling us where the header
//!   JSON ends and the encrypted payload begins.
//! - **Header JSON**: serialized `ProfileHeader` (plaintext — it holds
//!   the salt and hint needed *before* unlock).
//! - **Payload**: the item list JSON encrypted with AES-256-GCM
//!   (12-byte nonce prepended). GCM authentication doubles as the
//!   integrity check for the whole payload.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{Result, VaultPickError};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Magic bytes at the start of every profile file.
const MAGIC: &[u8; 4] = b"VPRF";

/// Current binary format version.
pub const CURRENT_VERSION: u8 = 1;

/// Fixed-size prefix: 4 (magic) + 1 (version) + 4 (header_len).
const PREFIX_LEN: usize = 9;

// ---------------------------------------------------------------------------
// ProfileHeader
// ---------------------------------------------------------------------------

/// Argon2 parameters stored in the profile header so the exact same
/// KDF settings are used when unlocking.  If missing, defaults are
/// used (m=64MB, t=3, p=4).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StoredKdfParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for StoredKdfParams {
    fn default() -> Self {
        Self {
            memory_kib: 65_536,
            iterations: 3,
            parallelism: 4,
        }
    }
}

/// Plaintext metadata stored at the beginning of a profile file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileHeader {
    /// Format version.
    pub version: u8,

    /// Profile name (e.g. "default").
    pub name: String,

    /// Passphrase hint shown at the unlock prompt. May be empty.
    #[serde(default)]
    pub password_hint: String,

    /// The salt used for Argon2id key derivation (base64 in JSON).
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub salt: Vec<u8>,

    /// Argon2 params used at profile creation (stored so unlock uses the same).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kdf_params: Option<StoredKdfParams>,

    /// When this profile was first created.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Raw data read from a profile file on disk.
pub struct RawProfile {
    pub header: ProfileHeader,
    /// The encrypted payload (nonce || ciphertext), still sealed.
    pub payload: Vec<u8>,
}

/// Read a profile file from disk and split it into header + payload.
///
/// Only the plaintext header is parsed here; decrypting the payload is
/// the caller's job once a passphrase-derived key is available.
pub fn read_profile(path: &Path) -> Result<RawProfile> {
    if !path.exists() {
        return Err(VaultPickError::InvalidPath(path.to_path_buf()));
    }

    let data = fs::read(path)?;

    if data.len() < PREFIX_LEN {
        return Err(VaultPickError::InvalidProfileFormat(
            "file too small to be a valid profile".into(),
        ));
    }

    // --- Parse the fixed-size prefix ---

    if &data[0..4] != MAGIC {
        return Err(VaultPickError::InvalidProfileFormat(
            "missing VPRF magic bytes".into(),
        ));
    }

    let version = data[4];
    if version != CURRENT_VERSION {
        return Err(VaultPickError::InvalidProfileFormat(format!(
            "unsupported version {version}, expected {CURRENT_VERSION}"
        )));
    }

    let header_len_u32 = u32::from_le_bytes(
        data[5..9]
            .try_into()
            .map_err(|_| VaultPickError::InvalidProfileFormat("bad header length".into()))?,
    );
    let header_len = usize::try_from(header_len_u32).map_err(|_| {
        VaultPickError::InvalidProfileFormat(format!(
            "header length {header_len_u32} exceeds platform address space"
        ))
    })?;

    let header_end = PREFIX_LEN + header_len;
    if header_end > data.len() {
        return Err(VaultPickError::InvalidProfileFormat(
            "header length exceeds file size".into(),
        ));
    }

    // --- Split header from payload ---

    let header: ProfileHeader = serde_json::from_slice(&data[PREFIX_LEN..header_end])
        .map_err(|e| VaultPickError::InvalidProfileFormat(format!("header JSON: {e}")))?;

    let payload = data[header_end..].to_vec();

    Ok(RawProfile { header, payload })
}

/// Write a profile file to disk **atomically**.
///
/// 1. Serialize the header to JSON.
/// 2. Write magic + version + header + encrypted payload to a temp
///    file in the same directory.
/// 3. Rename the temp file over the target path.
///
/// The rename ensures readers never see a half-written file.
pub fn write_profile(path: &Path, header: &ProfileHeader, payload: &[u8]) -> Result<()> {
    let header_bytes = serde_json::to_vec(header)
        .map_err(|e| VaultPickError::SerializationError(format!("header: {e}")))?;

    let header_len = u32::try_from(header_bytes.len()).map_err(|_| {
        VaultPickError::SerializationError(format!(
            "header length {} exceeds u32::MAX",
            header_bytes.len()
        ))
    })?;

    let total = PREFIX_LEN + header_bytes.len() + payload.len();
    let mut buf = Vec::with_capacity(total);

    buf.extend_from_slice(MAGIC); // 4 bytes
    buf.push(CURRENT_VERSION); // 1 byte
    buf.extend_from_slice(&header_len.to_le_bytes()); // 4 bytes LE
    buf.extend_from_slice(&header_bytes); // header JSON
    buf.extend_from_slice(payload); // nonce || ciphertext

    // Atomic write: write to a temp file, then rename.
    // The temp file is in the same directory so rename is guaranteed
    // to be atomic on the same filesystem.
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, &buf)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Serde helpers: Vec<u8> <-> base64 string
// ---------------------------------------------------------------------------

pub fn base64_encode<S: Serializer>(bytes: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&BASE64.encode(bytes))
}

pub fn base64_decode<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<u8>, D::Error> {
    let s = String::deserialize(deserializer)?;
    BASE64
        .decode(s.as_bytes())
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn header() -> ProfileHeader {
        ProfileHeader {
            version: CURRENT_VERSION,
            name: "default".into(),
            password_hint: "favorite color".into(),
            salt: vec![9u8; 32],
            kdf_params: Some(StoredKdfParams::default()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn write_then_read_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("default.profile");

        write_profile(&path, &header(), b"opaque-payload").unwrap();

        let raw = read_profile(&path).unwrap();
        assert_eq!(raw.header.name, "default");
        assert_eq!(raw.header.password_hint, "favorite color");
        assert_eq!(raw.header.salt, vec![9u8; 32]);
        assert_eq!(raw.payload, b"opaque-payload");
    }

    #[test]
    fn rejects_bad_magic() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bogus.profile");
        fs::write(&path, b"NOPE\x01\x00\x00\x00\x00").unwrap();

        assert!(matches!(
            read_profile(&path),
            Err(VaultPickError::InvalidProfileFormat(_))
        ));
    }

    #[test]
    fn rejects_truncated_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("short.profile");
        fs::write(&path, b"VP").unwrap();

        assert!(read_profile(&path).is_err());
    }

    #[test]
    fn missing_file_is_invalid_path() {
        assert!(matches!(
            read_profile(Path::new("/no/such/file.profile")),
            Err(VaultPickError::InvalidPath(_))
        ));
    }
}
