//! Database section: the active connection profile with its table list,
//! and any inactive profiles.

use crate::render::{Cell, Table};
use crate::report::Section;
use crate::snapshot::Snapshot;
use crate::value::Value;

const MISSING_CONFIG: &str = "Fuel database configuration file not found. \
    Check that database configuration file <code>APPPATH/config/db.php</code> \
    exists and is properly formatted. See \
    <a href=\"http://fuelphp.com/docs/classes/database/introduction.html\" \
    target=\"_blank\">Fuel documentation</a>";

const MISSING_ACTIVE: &str = "Database configuration does not name an active \
    connection. Check that <code>APPPATH/config/db.php</code> defines the \
    <code>active</code> key";

pub fn collect(snapshot: &Snapshot) -> Section {
    let Some(profiles) = snapshot.db.as_ref().and_then(Value::as_map) else {
        return error_section(MISSING_CONFIG);
    };

    let active_name = profiles
        .iter()
        .find(|(key, _)| key == "active")
        .and_then(|(_, value)| value.as_str());
    let Some(active_name) = active_name else {
        return error_section(MISSING_ACTIVE);
    };

    let active_settings = profiles
        .iter()
        .find(|(key, _)| key == active_name)
        .map(|(_, value)| value.clone())
        .unwrap_or(Value::Null);

    let active = Table::new()
        .row(vec![Cell::heading("Active Configuration").span(2)])
        .row(vec![Cell::key(active_name), Cell::value(active_settings)])
        .row(vec![
            Cell::key("tables"),
            Cell::lines(snapshot.tables.clone()),
        ]);

    let mut inactive = Table::new().row(vec![Cell::heading("Inactive Configurations").span(2)]);
    for (key, value) in profiles {
        if key == "active" || key == active_name {
            continue;
        }
        inactive = inactive.row(vec![Cell::key(key.as_str()), Cell::value(value.clone())]);
    }

    Section::new("Database").table(active).table(inactive)
}

fn error_section(message: &str) -> Section {
    Section::new("Database").table(Table::new().row(vec![Cell::error(message)]))
}
