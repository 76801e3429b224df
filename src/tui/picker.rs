//! Searchable single-select list on a raw terminal.
//!
//! The picker owns nothing about items: callers hand in a match
//! predicate plus row/detail render functions, and get back the index
//! of the chosen item in the original slice.  Filtering preserves the
//! slice order; typing narrows the list, arrows move the cursor,
//! Enter selects, Escape cancels.

use console::{style, Key, Term};

use crate::errors::{Result, VaultPickError};

/// Cursor marker in front of the hovered row.
const MARKER: &str = "\u{25b8}";

/// Run the picker and return the index of the chosen item, or `None`
/// if the user cancelled with Escape.
///
/// Renders to stderr like the other prompts, redrawing in place after
/// every key.  The predicate is invoked once per item per keystroke,
/// so it must be cheap.
pub fn pick<T>(
    prompt: &str,
    page_size: usize,
    items: &[T],
    matches: impl Fn(&str, &T) -> bool,
    row: impl Fn(&T) -> String,
    detail: impl Fn(&T) -> String,
) -> Result<Option<usize>> {
    let term = Term::stderr();
    if !term.is_term() {
        return Err(VaultPickError::PromptFailed(
            "item picker needs an interactive terminal".into(),
        ));
    }

    term.hide_cursor()?;
    let result = run_loop(&term, prompt, page_size, items, matches, row, detail);
    term.show_cursor()?;
    result
}

fn run_loop<T>(
    term: &Term,
    prompt: &str,
    page_size: usize,
    items: &[T],
    matches: impl Fn(&str, &T) -> bool,
    row: impl Fn(&T) -> String,
    detail: impl Fn(&T) -> String,
) -> Result<Option<usize>> {
    let mut query = String::new();
    let mut cursor = 0usize;
    let mut drawn = 0usize;

    loop {
        // Filter against the current query, keeping original order.
        let filtered: Vec<usize> = (0..items.len())
            .filter(|&idx| matches(&query, &items[idx]))
            .collect();
        if cursor >= filtered.len() {
            cursor = filtered.len().saturating_sub(1);
        }

        // Window of rows around the cursor.
        let start = if cursor < page_size {
            0
        } else {
            cursor + 1 - page_size
        };
        let end = (start + page_size).min(filtered.len());

        // Compose the full frame before touching the terminal.
        let mut lines = Vec::with_capacity(page_size + 4);
        lines.push(format!("{} {}", style(prompt).bold(), query));

        if filtered.is_empty() {
            lines.push(style("  (no matching items)").dim().to_string());
        }
        for (pos, &idx) in filtered[start..end].iter().enumerate() {
            let marker = if start + pos == cursor { MARKER } else { " " };
            lines.push(format!("{} {}", marker, row(&items[idx])));
        }
        if let Some(&idx) = filtered.get(cursor) {
            for line in detail(&items[idx]).split('\n') {
                lines.push(line.to_string());
            }
        }

        term.clear_last_lines(drawn)?;
        for line in &lines {
            term.write_line(line)?;
        }
        drawn = lines.len();

        match term.read_key()? {
            Key::ArrowUp => cursor = cursor.saturating_sub(1),
            Key::ArrowDown => {
                if cursor + 1 < filtered.len() {
                    cursor += 1;
                }
            }
            Key::Enter => {
                if let Some(&idx) = filtered.get(cursor) {
                    term.clear_last_lines(drawn)?;
                    return Ok(Some(idx));
                }
            }
            Key::Escape => {
                term.clear_last_lines(drawn)?;
                return Ok(None);
            }
            Key::Backspace => {
                query.pop();
                cursor = 0;
            }
            Key::Char(c) if !c.is_control() => {
                query.push(c);
                cursor = 0;
            }
            _ => {}
        }
    }
}
