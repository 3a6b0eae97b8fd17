//! Modules section: configured module paths, what they contain on disk,
//! and whether the always-loaded modules were actually found.

use crate::render::{Cell, Table};
use crate::report::Section;
use crate::scan::{DirListing, Scanner};
use crate::snapshot::Snapshot;

pub fn collect(snapshot: &Snapshot, scanner: &Scanner) -> Section {
    let mut found = Table::new().heading(["Module Paths", "Modules Found"]);
    let mut discovered: Vec<String> = Vec::new();

    if snapshot.config.module_paths.is_empty() {
        found = found.row(vec![Cell::key("no module paths defined"), Cell::text("")]);
    } else {
        for path in &snapshot.config.module_paths {
            let listing = match scanner.subdirectories(path) {
                DirListing::Entries(names) => {
                    discovered.extend(names.iter().cloned());
                    Cell::lines(names)
                }
                DirListing::Missing => Cell::text("directory not found"),
                DirListing::Empty => Cell::text("directory is empty"),
            };
            found = found.row(vec![Cell::key(path.as_str()), listing]);
        }
    }

    let mut always = Table::new().row(vec![Cell::heading("Always Loaded").span(2)]);
    if snapshot.config.always_load.modules.is_empty() {
        always = always.row(vec![Cell::key("--"), Cell::text("none")]);
    } else {
        for module in &snapshot.config.always_load.modules {
            let status = if discovered.iter().any(|name| name == module) {
                "ok"
            } else {
                "module not found"
            };
            always = always.row(vec![Cell::key(module.as_str()), Cell::text(status)]);
        }
    }

    Section::new("Modules").table(found).table(always)
}
