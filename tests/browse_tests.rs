//! End-to-end tests for the unlock-and-browse workflow, run against
//! real profile files on disk.  The interactive prompts are replaced
//! by scripted closures through the same seams `main` uses.

use tempfile::TempDir;
use zeroize::Zeroizing;

use vaultpick::browse::{
    build_catalog, compact_row, detail_view, extract_secret, matches, select_profile,
    unlock_with_retry,
};
use vaultpick::crypto::KdfParams;
use vaultpick::vault::{
    create_profile, Category, Detail, Field, FieldKind, ItemRecord, UrlEntry, Vault,
};

fn test_kdf() -> KdfParams {
    KdfParams {
        memory_kib: 8_192,
        iterations: 1,
        parallelism: 1,
    }
}

fn login(title: &str, url: &str, username: &str, password: &str) -> ItemRecord {
    ItemRecord {
        title: title.into(),
        category: Category::Login,
        urls: vec![UrlEntry {
            label: String::new(),
            url: url.into(),
        }],
        info: username.into(),
        detail: Detail {
            fields: vec![
                Field {
                    designation: "username".into(),
                    kind: FieldKind::Text,
                    title: "username".into(),
                    value: username.into(),
                },
                Field {
                    designation: "password".into(),
                    kind: FieldKind::Concealed,
                    title: "password".into(),
                    value: password.into(),
                },
            ],
            ..Detail::default()
        },
        ..ItemRecord::default()
    }
}

fn note(title: &str, notes: &str, trashed: bool) -> ItemRecord {
    ItemRecord {
        title: title.into(),
        category: Category::SecureNote,
        trashed,
        detail: Detail {
            notes: notes.into(),
            ..Detail::default()
        },
        ..ItemRecord::default()
    }
}

fn fixture_vault(dir: &TempDir) -> Vault {
    let items = vec![
        note("Wifi codes", "front desk\r\nback office", false),
        login("GitHub", "https://github.com/login", "bob", "gh-s3cret"),
        note("Old ideas", "scrapped", true),
        login("Mail", "https://mail.example.com", "bob@example.com", "mail-pw"),
    ];
    create_profile(
        dir.path(),
        "default",
        "the usual",
        b"open sesame",
        &items,
        Some(&test_kdf()),
    )
    .unwrap();
    Vault::open(dir.path()).unwrap()
}

// ---------------------------------------------------------------------------
// Full session: unlock on first try, browse, extract
// ---------------------------------------------------------------------------

#[test]
fn first_try_unlock_browses_without_warnings() {
    let dir = TempDir::new().unwrap();
    let vault = fixture_vault(&dir);

    // Single profile is selected automatically, no chooser involved.
    let name = select_profile(&vault).unwrap();
    assert_eq!(name, "default");

    let profile = vault.profile(&name).unwrap();
    let mut warnings = 0;
    let unlocked = unlock_with_retry(
        &profile,
        |_| Ok(Zeroizing::new("open sesame".to_string())),
        |_| warnings += 1,
    )
    .unwrap();
    assert_eq!(warnings, 0);

    let catalog = build_catalog(unlocked.items().unwrap(), false);

    // Ordering: logins first (category), trashed note last.
    let titles: Vec<&str> = catalog.iter().map(|d| d.record.title.as_str()).collect();
    assert_eq!(titles, vec!["GitHub", "Mail", "Wifi codes", "Old ideas"]);
    assert!(catalog.last().unwrap().record.trashed);

    // Narrow down to the GitHub login and copy its password.
    let hits: Vec<_> = catalog.iter().filter(|d| matches("github", d)).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(extract_secret(&hits[0].record), Some("gh-s3cret"));
}

#[test]
fn two_wrong_passphrases_then_success() {
    let dir = TempDir::new().unwrap();
    let vault = fixture_vault(&dir);
    let profile = vault.profile("default").unwrap();

    let script = ["guess one", "guess two", "open sesame"];
    let mut attempt = 0;
    let mut warnings = Vec::new();

    let unlocked = unlock_with_retry(
        &profile,
        |hint| {
            assert_eq!(hint, "the usual");
            let pw = script[attempt];
            attempt += 1;
            Ok(Zeroizing::new(pw.to_string()))
        },
        |msg| warnings.push(msg.to_string()),
    )
    .unwrap();

    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().all(|w| w.contains("wrong passphrase")));
    assert_eq!(unlocked.items().unwrap().len(), 4);
}

// ---------------------------------------------------------------------------
// Search and masking through a full session
// ---------------------------------------------------------------------------

#[test]
fn concealed_values_stay_out_of_search_and_display_by_default() {
    let dir = TempDir::new().unwrap();
    let vault = fixture_vault(&dir);
    let unlocked = vault
        .profile("default")
        .unwrap()
        .unlock(b"open sesame")
        .unwrap();

    let hidden = build_catalog(unlocked.items().unwrap(), false);
    assert!(hidden.iter().all(|d| !matches("gh-s3cret", d)));
    for item in &hidden {
        assert!(!detail_view(item).contains("gh-s3cret"));
    }

    let revealed = build_catalog(unlocked.items().unwrap(), true);
    assert!(revealed.iter().any(|d| matches("gh-s3cret", d)));
}

#[test]
fn rows_are_single_line_and_notes_keep_structure() {
    let dir = TempDir::new().unwrap();
    let vault = fixture_vault(&dir);
    let unlocked = vault
        .profile("default")
        .unwrap()
        .unlock(b"open sesame")
        .unwrap();

    let catalog = build_catalog(unlocked.items().unwrap(), false);
    let wifi = catalog
        .iter()
        .find(|d| d.record.title == "Wifi codes")
        .unwrap();

    assert!(!compact_row(wifi).contains('\n'));
    assert!(detail_view(wifi).contains("front desk\nback office"));
}

#[test]
fn item_without_password_field_extracts_nothing() {
    let dir = TempDir::new().unwrap();
    let vault = fixture_vault(&dir);
    let unlocked = vault
        .profile("default")
        .unwrap()
        .unlock(b"open sesame")
        .unwrap();

    let catalog = build_catalog(unlocked.items().unwrap(), false);
    let wifi = catalog
        .iter()
        .find(|d| d.record.title == "Wifi codes")
        .unwrap();

    assert_eq!(extract_secret(&wifi.record), None);
}
