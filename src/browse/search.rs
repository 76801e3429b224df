//! Incremental search predicate for the item picker.

use crate::vault::FieldKind;

use super::catalog::DisplayItem;

/// Decide whether an item matches a free-text query.
///
/// The searchable text is the title, every URL, every field value
/// (concealed values only when the session reveals secrets), and the
/// notes.  Matching is a plain case-insensitive substring test — no
/// tokenization, no ranking — so filtered rows keep the catalog's
/// order.  The empty query matches everything.
///
/// Called once per catalog entry on every keystroke, so it stays
/// O(item text) with no I/O.
pub fn matches(query: &str, item: &DisplayItem) -> bool {
    if query.is_empty() {
        return true;
    }

    let record = &item.record;
    let mut blob = String::with_capacity(record.title.len() + record.detail.notes.len());

    blob.push_str(&record.title);
    for url in &record.urls {
        blob.push_str(&url.url);
    }
    for field in &record.detail.fields {
        if item.show_secrets || field.kind != FieldKind::Concealed {
            blob.push_str(&field.value);
        }
    }
    for section in &record.detail.sections {
        for field in &section.fields {
            if item.show_secrets || field.kind != FieldKind::Concealed {
                blob.push_str(&field.value);
            }
        }
    }
    blob.push_str(&record.detail.notes);

    blob.to_lowercase().contains(&query.to_lowercase())
}
