//! The unlock-and-browse session: vault opening, profile selection,
//! and the unlock retry loop.

use std::path::Path;

use dialoguer::{Password, Select};
use zeroize::Zeroizing;

use crate::cli::output;
use crate::errors::{Result, VaultPickError};
use crate::vault::{Profile, UnlockedProfile, Vault};

/// Open the vault directory, announcing the path first.
pub fn open_vault(path: &Path) -> Result<Vault> {
    output::info(&format!("Opening vault: {}", path.display()));
    Vault::open(path)
}

/// Pick a profile to unlock.
///
/// A single-profile vault (the usual case) is selected automatically;
/// otherwise a plain single-select chooser is shown.  Cancelling the
/// chooser is fatal to the session.
pub fn select_profile(vault: &Vault) -> Result<String> {
    let names = vault.profile_names();
    if names.len() == 1 {
        return Ok(names[0].clone());
    }

    let choice = Select::new()
        .with_prompt("Select profile (usually default)")
        .items(&names)
        .default(0)
        .interact_opt()
        .map_err(|e| VaultPickError::PromptFailed(format!("profile chooser: {e}")))?;

    match choice {
        Some(idx) => {
            output::info(&format!("Opening profile: {}", names[idx]));
            Ok(names[idx].clone())
        }
        None => Err(VaultPickError::Cancelled),
    }
}

/// Run the unlock retry loop against a passphrase source.
///
/// Each iteration asks `prompt` for a passphrase (handing it the
/// stored hint) and attempts the unlock.  A wrong passphrase goes to
/// `warn` and the loop continues — indefinitely, with no lockout or
/// backoff.  Any other failure, including a cancelled prompt,
/// propagates and ends the session.
///
/// The prompt and warning sink are injected so tests can script
/// passphrases and count warnings without a terminal.
pub fn unlock_with_retry<P, W>(profile: &Profile, mut prompt: P, mut warn: W) -> Result<UnlockedProfile>
where
    P: FnMut(&str) -> Result<Zeroizing<String>>,
    W: FnMut(&str),
{
    loop {
        let passphrase = prompt(profile.password_hint())?;
        match profile.unlock(passphrase.as_bytes()) {
            Ok(unlocked) => return Ok(unlocked),
            Err(VaultPickError::WrongPassphrase) => warn("wrong passphrase, try again"),
            Err(e) => return Err(e),
        }
    }
}

/// Unlock a profile with the interactive masked prompt.
pub fn unlock_interactive(profile: &Profile) -> Result<UnlockedProfile> {
    unlock_with_retry(profile, prompt_passphrase, |msg| output::warning(msg))
}

/// Masked passphrase prompt showing the profile's stored hint.
///
/// Empty input is rejected locally by the validator and never reaches
/// the unlock attempt.
fn prompt_passphrase(hint: &str) -> Result<Zeroizing<String>> {
    let label = if hint.is_empty() {
        "Passphrase".to_string()
    } else {
        format!("Passphrase (hint: {hint})")
    };

    let pw = Password::new()
        .with_prompt(label)
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.is_empty() {
                Err("Passphrase cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact()
        .map_err(|e| VaultPickError::PromptFailed(format!("passphrase prompt: {e}")))?;

    Ok(Zeroizing::new(pw))
}
