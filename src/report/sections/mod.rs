//! Report section collectors, one per introspection category.
//!
//! Collectors never fail: absent or empty source data becomes an
//! error-role cell or sentinel text inside the section, and the rest of
//! the report is unaffected.

pub mod config_files;
pub mod database;
pub mod modules;
pub mod packages;
pub mod paths;
pub mod request;
pub mod routes;
pub mod session;

use crate::render::{Cell, Table, EMPTY_INDICATOR};
use crate::value::Value;

/// Append the body rows for a container value under a spanning heading.
///
/// Non-empty containers become one key/value row per entry (sequences
/// keyed by index); empty containers a spanning indicator row; scalars
/// a single spanning value row.
fn push_content_rows(mut table: Table, content: &Value) -> Table {
    match content {
        Value::Map(entries) if !entries.is_empty() => {
            for (key, value) in entries {
                table = table.row(vec![Cell::key(key.as_str()), Cell::value(value.clone())]);
            }
        }
        Value::List(items) if !items.is_empty() => {
            for (index, item) in items.iter().enumerate() {
                table = table.row(vec![
                    Cell::key(index.to_string()),
                    Cell::value(item.clone()),
                ]);
            }
        }
        Value::Map(_) | Value::List(_) | Value::Empty => {
            table = table.row(vec![Cell::text(EMPTY_INDICATOR).span(2)]);
        }
        scalar => {
            table = table.row(vec![Cell::value(scalar.clone()).span(2)]);
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::StyleSheet;

    fn rendered(content: &Value) -> String {
        push_content_rows(Table::new(), content)
            .render(&StyleSheet::default())
            .into_string()
    }

    #[test]
    fn test_content_rows_for_map() {
        let content = Value::Map(vec![
            ("driver".to_string(), Value::from("pdo")),
            ("persistent".to_string(), Value::Bool(false)),
        ]);
        let html = rendered(&content);
        assert!(html.contains(">driver</td>"));
        assert!(html.contains(">pdo</td>"));
        assert!(html.contains(">persistent</td>"));
        assert!(html.contains(">false</td>"));
    }

    #[test]
    fn test_content_rows_for_list_use_index_keys() {
        let content = Value::List(vec![Value::from("a"), Value::from("b")]);
        let html = rendered(&content);
        assert!(html.contains(">0</td>"));
        assert!(html.contains(">1</td>"));
    }

    #[test]
    fn test_empty_content_spans_indicator() {
        for content in [Value::Map(vec![]), Value::List(vec![]), Value::Empty] {
            let html = rendered(&content);
            assert!(html.contains("colspan=\"2\""));
            assert!(html.contains(">array()</td>"));
        }
    }

    #[test]
    fn test_scalar_content_spans_value() {
        let html = rendered(&Value::from("plain"));
        assert!(html.contains("colspan=\"2\""));
        assert!(html.contains(">plain</td>"));
    }
}
