use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in vaultpick.
#[derive(Debug, Error)]
pub enum VaultPickError {
    // --- Vault-open errors ---
    #[error("No vault found at {0}")]
    InvalidPath(PathBuf),

    #[error("{0} is not a valid vault — no profiles found")]
    NotAVault(PathBuf),

    #[error("Profile '{0}' not found in this vault")]
    ProfileNotFound(String),

    #[error("Invalid profile format: {0}")]
    InvalidProfileFormat(String),

    #[error("Profile already exists at {0}")]
    ProfileAlreadyExists(PathBuf),

    // --- Unlock errors ---
    #[error("wrong passphrase")]
    WrongPassphrase,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- Interaction errors ---
    #[error("Prompt failed: {0}")]
    PromptFailed(String),

    #[error("Cancelled")]
    Cancelled,

    // --- Clipboard errors ---
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Convenience type alias for vaultpick results.
pub type Result<T> = std::result::Result<T, VaultPickError>;
