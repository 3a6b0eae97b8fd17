//! Routes section: every loaded routes file and its parsed definitions.

use crate::render::{Cell, Table};
use crate::report::Section;
use crate::snapshot::Snapshot;
use crate::value::Value;

pub fn collect(snapshot: &Snapshot) -> Section {
    let mut table = Table::new().heading(["File", "Array"]);

    let routes = snapshot.routes.as_ref().and_then(Value::as_map);
    match routes {
        Some(files) if !files.is_empty() => {
            for (path, definitions) in files {
                table = table.row(vec![
                    Cell::key(path.as_str()),
                    Cell::value(definitions.clone()),
                ]);
            }
        }
        _ => {
            table = table.row(vec![
                Cell::key("No routes found"),
                Cell::text("Routes are optional"),
            ]);
        }
    }

    Section::new("Routes").table(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::StyleSheet;

    fn render(snapshot: &Snapshot) -> String {
        collect(snapshot)
            .render(&StyleSheet::default())
            .into_string()
    }

    #[test]
    fn test_row_per_file_with_rendered_definitions() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{"routes": {
                "app/config/routes.php": {"_root_": "welcome/index", "_404_": "welcome/404"},
                "core/config/routes.php": {}
            }}"#,
        )
        .unwrap();
        let html = render(&snapshot);
        assert!(html.contains(">File</th>"));
        assert!(html.contains(">Array</th>"));
        assert!(html.contains(">app/config/routes.php</td>"));
        assert!(html.contains(">_root_</td>"));
        assert!(html.contains(">welcome/index</td>"));
        // The empty routes file still gets a row, with the indicator.
        assert!(html.contains(">core/config/routes.php</td>"));
        assert!(html.contains(">array()</td>"));
    }

    #[test]
    fn test_missing_routes_sentinel_row() {
        let html = render(&Snapshot::default());
        assert!(html.contains(">No routes found</td>"));
        assert!(html.contains(">Routes are optional</td>"));
    }

    #[test]
    fn test_empty_routes_map_sentinel_row() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"routes": {}}"#).unwrap();
        assert!(render(&snapshot).contains(">No routes found</td>"));
    }
}
