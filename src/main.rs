use clap::Parser;

use vaultpick::browse;
use vaultpick::cli::{expand_tilde, output, Cli};
use vaultpick::clipboard;
use vaultpick::errors::{Result, VaultPickError};
use vaultpick::tui;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors exit 1; --help and --version exit 0.
            let code = i32::from(err.use_stderr());
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run(&cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let path = expand_tilde(&cli.vault);

    let vault = browse::open_vault(&path)?;
    let profile_name = browse::select_profile(&vault)?;
    let profile = vault.profile(&profile_name)?;

    let unlocked = browse::unlock_interactive(&profile)?;
    let items = unlocked.items()?;

    let catalog = browse::build_catalog(items, cli.show_secrets);

    let choice = tui::pick(
        "Choose an item to copy its password:",
        10,
        &catalog,
        browse::matches,
        browse::compact_row,
        browse::detail_view,
    )?;
    let picked = choice.ok_or(VaultPickError::Cancelled)?;

    match browse::extract_secret(&catalog[picked].record) {
        Some(secret) => {
            clipboard::copy(secret)?;
            output::success("password copied to clipboard");
        }
        None => output::info("this item has no password field — clipboard left unchanged"),
    }

    Ok(())
}
