//! Locating the secret to copy once an item has been chosen.

use crate::vault::{ItemRecord, PASSWORD_DESIGNATION};

/// Return the value of the first top-level field designated as the
/// password, scanning fields in their stored order.
///
/// `None` is not an error: the caller reports a neutral notice and
/// leaves the clipboard untouched.
pub fn extract_secret(record: &ItemRecord) -> Option<&str> {
    record
        .detail
        .fields
        .iter()
        .find(|field| field.designation == PASSWORD_DESIGNATION)
        .map(|field| field.value.as_str())
}
