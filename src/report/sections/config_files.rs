//! Configuration section: loaded config files grouped by directory.
//!
//! Directories display in reverse discovery order, so the application's
//! own config (found last in the cascade) comes first.

use crate::render::{Cell, Table};
use crate::report::sections::push_content_rows;
use crate::report::Section;
use crate::snapshot::Snapshot;
use crate::value::Value;

const MISSING_CONFIG: &str = "No configuration files found! Check that the \
    default configuration file <code>APPPATH/config/config.php</code> exists \
    and is properly formatted. See \
    <a href=\"http://fuelphp.com/docs/classes/config.html\" \
    target=\"_blank\">Fuel documentation</a>";

pub fn collect(snapshot: &Snapshot) -> Section {
    let groups = snapshot.config_files.as_ref().and_then(Value::as_map);
    let groups = match groups {
        Some(groups) if !groups.is_empty() => groups,
        _ => {
            let table = Table::new().row(vec![Cell::error(MISSING_CONFIG)]);
            return Section::new("Configuration").table(table);
        }
    };

    let mut section = Section::new("Configuration");
    for (directory, files) in groups.iter().rev() {
        let Some(files) = files.as_map() else {
            continue;
        };
        section = section.sub_heading(directory.as_str());
        for (filename, contents) in files {
            let table = Table::new().row(vec![Cell::heading(filename.as_str()).span(2)]);
            section = section.table(push_content_rows(table, contents));
        }
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::StyleSheet;

    fn render(json: &str) -> String {
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        collect(&snapshot)
            .render(&StyleSheet::default())
            .into_string()
    }

    #[test]
    fn test_directories_display_in_reverse_order() {
        let html = render(
            r#"{"config_files": {
                "core/config": {"config.php": {"language": "en"}},
                "app/config": {"config.php": {"language": "de"}}
            }}"#,
        );
        let app = html.find(">app/config</h2>").expect("app dir heading");
        let core = html.find(">core/config</h2>").expect("core dir heading");
        assert!(app < core);
    }

    #[test]
    fn test_file_tables_under_directory_heading() {
        let html = render(
            r#"{"config_files": {
                "app/config": {
                    "config.php": {"base_url": null, "index_file": false},
                    "empty.php": {}
                }
            }}"#,
        );
        assert!(html.contains("<th colspan=\"2\""));
        assert!(html.contains(">config.php</th>"));
        assert!(html.contains(">base_url</td>"));
        assert!(html.contains(">NULL</td>"));
        assert!(html.contains(">index_file</td>"));
        assert!(html.contains(">false</td>"));
        assert!(html.contains(">empty.php</th>"));
        assert!(html.contains(">array()</td>"));
    }

    #[test]
    fn test_nested_config_values_render_recursively() {
        let html = render(
            r#"{"config_files": {
                "app/config": {"db.php": {"default": {"type": "mysqli"}}}
            }}"#,
        );
        assert!(html.contains(">default</td>"));
        assert!(html.contains(">type</td>"));
        assert!(html.contains(">mysqli</td>"));
    }

    #[test]
    fn test_missing_config_files_error_cell() {
        for json in ["{}", r#"{"config_files": {}}"#] {
            let html = render(json);
            assert!(html.contains("No configuration files found!"));
            assert!(html.contains("<code>APPPATH/config/config.php</code>"));
            assert!(html.contains("http://fuelphp.com/docs/classes/config.html"));
        }
    }
}
