//! Session section: every session key under its own spanning heading.

use crate::render::{Cell, Table};
use crate::report::sections::push_content_rows;
use crate::report::Section;
use crate::snapshot::Snapshot;
use crate::value::Value;

pub fn collect(snapshot: &Snapshot) -> Section {
    let Some(entries) = snapshot.session.as_ref().and_then(Value::as_map) else {
        let table = Table::new().row(vec![Cell::error("No session data found")]);
        return Section::new("Session").table(table);
    };

    let mut table = Table::new();
    for (key, value) in entries {
        table = table.row(vec![Cell::heading(key.as_str()).span(2)]);
        table = push_content_rows(table, value);
    }
    Section::new("Session").table(table)
}
