//! Search paths section: the framework's cascading file lookup order.

use crate::render::{Cell, Table};
use crate::report::Section;
use crate::snapshot::Snapshot;

pub fn collect(snapshot: &Snapshot) -> Section {
    let mut table = Table::new();
    if snapshot.paths.is_empty() {
        table = table.row(vec![Cell::error("No search paths found")]);
    } else {
        for path in &snapshot.paths {
            table = table.row(vec![Cell::text(path.as_str())]);
        }
    }
    Section::new("Search Paths").table(table)
}
