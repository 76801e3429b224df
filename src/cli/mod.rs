//! CLI module — Clap argument parser, output helpers, and vault path
//! expansion.

pub mod output;

use std::path::PathBuf;

use clap::Parser;

/// vaultpick CLI: browse an encrypted credential vault and copy a
/// password to the clipboard.
#[derive(Parser)]
#[command(
    name = "vaultpick",
    about = "Interactive browser for encrypted credential vaults",
    version
)]
pub struct Cli {
    /// Path to the vault directory (a leading `~` is expanded)
    pub vault: String,

    /// Reveal concealed field values in search and display
    #[arg(short = 's', long = "show-secrets")]
    pub show_secrets: bool,
}

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// `~user` forms are left untouched, as is any path where the home
/// directory cannot be determined.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix('~') {
        if rest.is_empty() {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        } else if let Some(stripped) = rest.strip_prefix('/') {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
    }
    PathBuf::from(path)
}
