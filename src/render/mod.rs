//! Structure renderer: nested framework values to nested HTML tables.
//!
//! The renderer is a pure transform — same [`Value`] in, same markup out.
//! It holds no state, touches no filesystem or clock, and cannot fail:
//! every variant of the closed input type has a rendering rule.
//!
//! Mappings become two-column tables (key cell, value cell), one row per
//! entry in insertion order; nested mappings recurse into nested tables.
//! Sequences render like mappings keyed by decimal indices. Empty
//! containers and the explicit [`Value::Empty`] marker render as the
//! literal indicator text `array()`.
//!
//! Input is assumed finite and acyclic. Collectors replace the one known
//! self-referential framework field before a [`Value`] tree is ever built
//! (see the request section), so no cycle detection happens here.

mod markup;
mod style;
mod table;

use std::borrow::Cow;

use crate::value::Value;

pub use markup::Html;
pub use style::{Role, StyleSheet};
pub use table::{Cell, Table};

/// Indicator text for empty mappings, empty sequences, and [`Value::Empty`].
pub const EMPTY_INDICATOR: &str = "array()";

/// Render a value as nested table markup.
///
/// Scalars render as their literal form (`true`, `NULL`, `42`, strings
/// as-is, unquoted); containers as tables per the module docs.
pub fn render_value(value: &Value, styles: &StyleSheet) -> Html {
    let mut out = String::new();
    write_value(&mut out, value, styles);
    Html::from_string(out)
}

/// Strip embedded NUL characters from a key before display.
///
/// PHP's object-to-array cast mangles private property names with `\0`
/// markers; a key renders identically with or without them.
pub fn strip_nul(key: &str) -> Cow<'_, str> {
    if key.contains('\0') {
        Cow::Owned(key.replace('\0', ""))
    } else {
        Cow::Borrowed(key)
    }
}

pub(crate) fn write_value(out: &mut String, value: &Value, styles: &StyleSheet) {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Float(n) => out.push_str(&n.to_string()),
        Value::Str(s) => out.push_str(s),
        Value::Empty => out.push_str(EMPTY_INDICATOR),
        Value::List(items) if items.is_empty() => out.push_str(EMPTY_INDICATOR),
        Value::Map(entries) if entries.is_empty() => out.push_str(EMPTY_INDICATOR),
        Value::List(items) => {
            open_table(out, styles);
            for (index, item) in items.iter().enumerate() {
                write_entry_row(out, &index.to_string(), item, styles);
            }
            close_table(out);
        }
        Value::Map(entries) => {
            open_table(out, styles);
            for (key, entry) in entries {
                write_entry_row(out, key, entry, styles);
            }
            close_table(out);
        }
    }
}

fn open_table(out: &mut String, styles: &StyleSheet) {
    out.push_str("\n<table style=\"");
    out.push_str(&styles.inner_table);
    out.push_str("\">\n");
}

fn close_table(out: &mut String) {
    out.push_str("</table>\n");
}

fn write_entry_row(out: &mut String, key: &str, value: &Value, styles: &StyleSheet) {
    out.push_str("<tr><td style=\"");
    out.push_str(&styles.inner_key);
    out.push_str("\">");
    out.push_str(&strip_nul(key));
    out.push_str("</td><td style=\"");
    out.push_str(&styles.inner_value);
    out.push_str("\">");
    write_value(out, value, styles);
    out.push_str("</td></tr>\n");
}
