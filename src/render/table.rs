//! Styled report tables: rows of role-tagged cells with optional colspan.
//!
//! These are the outer tables report sections are made of, as opposed to
//! the inner tables the recursive value renderer emits. A [`Cell`] carries
//! its content, a [`Role`] resolved against the stylesheet at render time,
//! and a column span. Heading cells emit `<th>`, everything else `<td>`.

use super::markup::Html;
use super::style::{Role, StyleSheet};
use super::{strip_nul, write_value};
use crate::value::Value;

enum CellContent {
    Text(String),
    Value(Value),
    Lines(Vec<String>),
}

/// One table cell: content, display role, column span.
pub struct Cell {
    content: CellContent,
    role: Role,
    span: u32,
}

impl Cell {
    /// Column heading, rendered as `<th>`.
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            content: CellContent::Text(strip_nul(&text.into()).into_owned()),
            role: Role::Heading,
            span: 1,
        }
    }

    /// Key cell naming the row.
    pub fn key(text: impl Into<String>) -> Self {
        Self {
            content: CellContent::Text(strip_nul(&text.into()).into_owned()),
            role: Role::Key,
            span: 1,
        }
    }

    /// Plain text in a value cell, emitted verbatim.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: CellContent::Text(text.into()),
            role: Role::Value,
            span: 1,
        }
    }

    /// Value cell whose content is the recursive render of `value`.
    pub fn value(value: Value) -> Self {
        Self {
            content: CellContent::Value(value),
            role: Role::Value,
            span: 1,
        }
    }

    /// Highlighted diagnostic message cell.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: CellContent::Text(text.into()),
            role: Role::Error,
            span: 1,
        }
    }

    /// Value cell listing one item per line, joined with `<br>`.
    pub fn lines(lines: Vec<String>) -> Self {
        Self {
            content: CellContent::Lines(lines),
            role: Role::Value,
            span: 1,
        }
    }

    /// Set the column span. Spans of 0 or 1 emit no attribute.
    #[inline]
    pub fn span(mut self, span: u32) -> Self {
        self.span = span;
        self
    }

    fn write_to(&self, out: &mut String, styles: &StyleSheet) {
        let tag = match self.role {
            Role::Heading => "th",
            _ => "td",
        };
        out.push('<');
        out.push_str(tag);
        if self.span > 1 {
            out.push_str(" colspan=\"");
            out.push_str(&self.span.to_string());
            out.push('"');
        }
        out.push_str(" style=\"");
        out.push_str(styles.cell_style(self.role));
        out.push_str("\">");
        match &self.content {
            CellContent::Text(text) => out.push_str(text),
            CellContent::Value(value) => write_value(out, value, styles),
            CellContent::Lines(lines) => out.push_str(&lines.join("<br>")),
        }
        out.push_str("</");
        out.push_str(tag);
        out.push_str(">\n");
    }
}

/// A report table built row by row.
#[derive(Default)]
pub struct Table {
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Add a heading row, one `<th>` per label.
    pub fn heading<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows
            .push(labels.into_iter().map(Cell::heading).collect());
        self
    }

    /// Add a data row.
    pub fn row(mut self, cells: Vec<Cell>) -> Self {
        self.rows.push(cells);
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn write_to(&self, out: &mut String, styles: &StyleSheet) {
        out.push_str("<table style=\"");
        out.push_str(&styles.table);
        out.push_str("\">\n");
        for row in &self.rows {
            out.push_str("<tr>\n");
            for cell in row {
                cell.write_to(out, styles);
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</table>\n");
    }

    pub fn render(&self, styles: &StyleSheet) -> Html {
        let mut out = String::new();
        self.write_to(&mut out, styles);
        Html::from_string(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::EMPTY_INDICATOR;

    fn styles() -> StyleSheet {
        StyleSheet::default()
    }

    #[test]
    fn test_heading_cells_emit_th() {
        let table = Table::new().heading(["File", "Array"]);
        let html = table.render(&styles());
        assert!(html.as_str().contains("<th style="));
        assert!(html.as_str().contains(">File</th>"));
        assert!(html.as_str().contains(">Array</th>"));
        assert!(!html.as_str().contains("<td"));
    }

    #[test]
    fn test_key_and_value_cells_emit_td() {
        let table = Table::new().row(vec![Cell::key("name"), Cell::text("fuelinfo")]);
        let html = table.render(&styles());
        assert!(html.as_str().contains(">name</td>"));
        assert!(html.as_str().contains(">fuelinfo</td>"));
        assert!(!html.as_str().contains("<th"));
    }

    #[test]
    fn test_span_attribute_only_above_one() {
        let s = styles();
        let plain = Table::new().row(vec![Cell::text("a")]).render(&s);
        assert!(!plain.as_str().contains("colspan"));

        let spanned = Table::new()
            .row(vec![Cell::heading("Always Loaded").span(2)])
            .render(&s);
        assert!(spanned.as_str().contains("<th colspan=\"2\" style="));
    }

    #[test]
    fn test_role_styles_resolve_against_sheet() {
        let mut s = styles();
        s.heading = "H".to_string();
        s.key = "K".to_string();
        s.value = "V".to_string();
        s.error = "E".to_string();
        let html = Table::new()
            .heading(["h"])
            .row(vec![Cell::key("k"), Cell::value(Value::Int(1))])
            .row(vec![Cell::error("boom")])
            .render(&s);
        let text = html.as_str();
        assert!(text.contains("<th style=\"H\">h</th>"));
        assert!(text.contains("<td style=\"K\">k</td>"));
        assert!(text.contains("<td style=\"V\">1</td>"));
        assert!(text.contains("<td style=\"E\">boom</td>"));
    }

    #[test]
    fn test_value_cell_renders_structure() {
        let nested = Value::Map(vec![("k".to_string(), Value::Int(7))]);
        let html = Table::new()
            .row(vec![Cell::key("data"), Cell::value(nested)])
            .render(&styles());
        assert!(html.as_str().contains("<table style=")); // outer
        assert!(html.as_str().contains(">7</td>"));
        assert_eq!(html.as_str().matches("<table").count(), 2);
    }

    #[test]
    fn test_value_cell_empty_container_shows_indicator() {
        let html = Table::new()
            .row(vec![Cell::key("cfg"), Cell::value(Value::Map(vec![]))])
            .render(&styles());
        assert!(html.as_str().contains(&format!(">{EMPTY_INDICATOR}</td>")));
        assert_eq!(html.as_str().matches("<table").count(), 1);
    }

    #[test]
    fn test_lines_join_with_br() {
        let html = Table::new()
            .row(vec![Cell::lines(vec![
                "auth".to_string(),
                "orm".to_string(),
                "parser".to_string(),
            ])])
            .render(&styles());
        assert!(html.as_str().contains(">auth<br>orm<br>parser</td>"));
    }

    #[test]
    fn test_text_passes_markup_through() {
        let html = Table::new()
            .row(vec![Cell::error("see <code>config.php</code>")])
            .render(&styles());
        assert!(html.as_str().contains("see <code>config.php</code>"));
    }

    #[test]
    fn test_key_strips_nul_bytes() {
        let html = Table::new()
            .row(vec![Cell::key("\0Request\0uri")])
            .render(&styles());
        assert!(html.as_str().contains(">Requesturi</td>"));
    }

    #[test]
    fn test_row_markup_shape() {
        let s = styles();
        let html = Table::new().row(vec![Cell::text("x")]).render(&s);
        let expected = format!(
            "<table style=\"{t}\">\n<tr>\n<td style=\"{v}\">x</td>\n</tr>\n</table>\n",
            t = s.table,
            v = s.value,
        );
        assert_eq!(html.as_str(), expected);
    }
}
