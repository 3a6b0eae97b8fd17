//! Packages section: what the package path holds and whether the
//! always-loaded packages are present with a bootstrap file.

use std::path::Path;

use crate::render::{Cell, Table};
use crate::report::Section;
use crate::scan::{DirListing, Scanner};
use crate::snapshot::Snapshot;

pub fn collect(snapshot: &Snapshot, scanner: &Scanner) -> Section {
    let package_path = snapshot.config.package_path.as_deref();

    let available_cell = match package_path {
        None => Cell::text("no package path defined"),
        Some(path) => match scanner.subdirectories(path) {
            DirListing::Entries(names) => Cell::lines(names),
            DirListing::Missing => Cell::text("directory not found"),
            DirListing::Empty => Cell::text("directory is empty"),
        },
    };
    let available = Table::new()
        .heading(["Packages Available"])
        .row(vec![available_cell]);

    let mut always = Table::new().row(vec![Cell::heading("Always Loaded").span(2)]);
    if snapshot.config.always_load.packages.is_empty() {
        always = always.row(vec![Cell::key("--"), Cell::text("none")]);
    } else {
        for package in &snapshot.config.always_load.packages {
            let status = package_status(package, package_path, scanner);
            always = always.row(vec![Cell::key(package.as_str()), Cell::text(status)]);
        }
    }

    Section::new("Packages").table(available).table(always)
}

fn package_status(package: &str, package_path: Option<&str>, scanner: &Scanner) -> &'static str {
    let Some(root) = package_path else {
        return "package not found";
    };
    let dir = Path::new(root).join(package);
    if !scanner.is_dir(&dir) {
        return "package not found";
    }
    if scanner.is_file(dir.join("bootstrap.php")) {
        "ok"
    } else {
        "bootstrap.php not found"
    }
}
