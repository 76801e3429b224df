//! Rendering of items for the picker: one-line rows and the
//! multi-line detail pane.
//!
//! Masking is a pure function of (field kind, show_secrets).  The
//! placeholder is a fixed-length run of asterisks so the rendered
//! output never leaks the secret's real length.

use console::style;

use crate::vault::FieldKind;

use super::catalog::DisplayItem;

/// Fixed masking placeholder — length is independent of the secret.
const MASK: &str = "********";

/// URLs longer than this many characters are cut to a prefix in the
/// detail pane.
const URL_PREFIX_LEN: usize = 150;

/// Generic label for URLs stored without one.
const DEFAULT_URL_LABEL: &str = "website";

// ---------------------------------------------------------------------------
// Newline normalization
// ---------------------------------------------------------------------------

/// Collapse every line break (CRLF, bare CR, bare LF) to a single
/// space.  Used for list rows, which must never contain a control
/// line-break.
pub fn collapse_newlines(s: &str) -> String {
    s.replace("\r\n", " ").replace('\r', " ").replace('\n', " ")
}

/// Normalize CRLF and bare CR to bare LF, preserving the multi-line
/// structure.  Used for values and notes in the detail pane.
pub fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

// ---------------------------------------------------------------------------
// Compact row
// ---------------------------------------------------------------------------

/// Render an item as a single list row:
/// `[Deleted] [Category] Title synopsis`.
pub fn compact_row(item: &DisplayItem) -> String {
    let record = &item.record;
    let mut row = String::new();

    if record.trashed {
        row.push_str(&style("[Deleted] ").red().to_string());
    }
    row.push_str(
        &style(format!("[{}]", record.category))
            .blue()
            .to_string(),
    );
    row.push(' ');
    row.push_str(&record.title);

    if !record.info.is_empty() {
        row.push(' ');
        row.push_str(&style(collapse_newlines(&record.info)).dim().to_string());
    }

    row
}

// ---------------------------------------------------------------------------
// Detail view
// ---------------------------------------------------------------------------

/// Mask or normalize a field value according to the session flag.
fn field_value(kind: FieldKind, value: &str, show_secrets: bool) -> String {
    if kind == FieldKind::Concealed && !show_secrets {
        MASK.to_string()
    } else {
        normalize_newlines(value)
    }
}

/// Truncate a URL to a bounded character prefix.
fn truncate_url(url: &str) -> String {
    url.chars().take(URL_PREFIX_LEN).collect()
}

/// Render the multi-line detail pane for the hovered item.
pub fn detail_view(item: &DisplayItem) -> String {
    let record = &item.record;
    let mut out = String::new();

    out.push_str("------------ Item ------------\n");
    out.push_str(&format!("{} {}", style("Name:").dim(), record.title));

    for url in &record.urls {
        let label = if url.label.is_empty() {
            DEFAULT_URL_LABEL
        } else {
            &url.label
        };
        out.push_str(&format!(
            "\n{} {}",
            style(format!("{label}:")).dim(),
            truncate_url(&url.url)
        ));
    }

    // Top-level fields: only those with a designation.
    for field in &record.detail.fields {
        if field.designation.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "\n{} {}",
            style(format!("{}:", field.designation)).dim(),
            field_value(field.kind, &field.value, item.show_secrets)
        ));
    }

    // Sections: need a title and at least one non-empty value.
    for section in &record.detail.sections {
        if section.title.is_empty() || section.fields.iter().all(|f| f.value.is_empty()) {
            continue;
        }
        out.push_str(&format!("\n{}", style(format!("[{}]", section.title)).dim()));
        for field in &section.fields {
            if field.value.is_empty() {
                continue;
            }
            out.push_str(&format!(
                "\n{} {}",
                style(format!("{}:", field.title)).dim(),
                field_value(field.kind, &field.value, item.show_secrets)
            ));
        }
    }

    if !record.detail.notes.is_empty() {
        out.push_str(&format!(
            "\n{} {}",
            style("Notes:").dim(),
            normalize_newlines(&record.detail.notes)
        ));
    }

    out
}
