//! Request section: main and active request state, side by side.
//!
//! Rows follow the main request's property order. The
//! `controller_instance` property points back into the request graph and
//! is never traversed; both context cells show a fixed placeholder
//! instead. Any other self-reference must already be replaced by the
//! exporter before it reaches the snapshot.

use crate::render::{strip_nul, Cell, Table};
use crate::report::Section;
use crate::snapshot::Snapshot;
use crate::value::Value;

const RECURSION_PLACEHOLDER: &str = "*RECURSION*";

pub fn collect(snapshot: &Snapshot) -> Section {
    let request = snapshot.request.as_ref();
    let main = request
        .and_then(|r| r.main.as_ref())
        .and_then(Value::as_map);

    let Some(properties) = main else {
        let table = Table::new().row(vec![Cell::error("No request data found")]);
        return Section::new("Request").table(table);
    };

    let active = request.and_then(|r| r.active.as_ref());
    let mut table = Table::new().heading(["Property", "Main", "Active"]);

    for (raw_key, main_value) in properties {
        let key = strip_nul(raw_key);
        if key == "controller_instance" {
            table = table.row(vec![
                Cell::key(key.into_owned()),
                Cell::text(RECURSION_PLACEHOLDER),
                Cell::text(RECURSION_PLACEHOLDER),
            ]);
            continue;
        }

        let active_value = active
            .and_then(|a| a.get(&key))
            .cloned()
            .unwrap_or(Value::Null);
        table = table.row(vec![
            Cell::key(key.into_owned()),
            Cell::value(main_value.clone()),
            Cell::value(active_value),
        ]);
    }

    Section::new("Request").table(table)
}
