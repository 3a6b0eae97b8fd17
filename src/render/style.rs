//! Inline styling for report markup.
//!
//! Every style the report emits is resolved through an explicit
//! [`StyleSheet`] value passed into rendering; there is no global style
//! state. The `Default` sheet reproduces the classic Fuelinfo palette.

/// Style role of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Column or group heading cell, emitted as `<th>`.
    Heading,
    /// Key cell of a key/value row.
    Key,
    /// Value cell.
    Value,
    /// Inline error/notice cell.
    Error,
}

/// Inline CSS strings for every role and wrapper tag the report uses.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    /// Section wrapper `<div>`.
    pub block: String,
    /// Section title `<h1>`.
    pub h1: String,
    /// Sub-heading `<h2>` (configuration directory names).
    pub h2: String,
    /// Section-level `<table>`.
    pub table: String,
    /// Heading cell `<th>`.
    pub heading: String,
    /// Key cell `<td>`.
    pub key: String,
    /// Value cell `<td>`.
    pub value: String,
    /// Error/notice cell `<td>`.
    pub error: String,
    /// Nested `<table>` produced by the structure renderer.
    pub inner_table: String,
    /// Key cell inside a nested table.
    pub inner_key: String,
    /// Value cell inside a nested table.
    pub inner_value: String,
}

impl StyleSheet {
    /// Inline style for a cell with the given role.
    pub fn cell_style(&self, role: Role) -> &str {
        match role {
            Role::Heading => &self.heading,
            Role::Key => &self.key,
            Role::Value => &self.value,
            Role::Error => &self.error,
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            block: "text-align:left; margin:10px; font-family:Helvetica, Arial, \
                    sans-serif; font-size:small; color:#000;"
                .to_string(),
            h1: "font-size:x-large; margin:0; padding:40px 0 10px;".to_string(),
            h2: "font-size:large; margin:0; padding:20px 0 10px;".to_string(),
            table: "border-collapse:collapse; text-align:left; margin-bottom:10px;".to_string(),
            heading: "border:1px solid; padding:7px 7px; background-color:#D788FF; \
                      font-weight:bold; text-align:center;"
                .to_string(),
            key: "border:1px solid; padding:5px 7px; background-color:#EAACFF; \
                  font-weight:bold;"
                .to_string(),
            value: "border:1px solid; padding:5px 7px; background-color:#CCC;".to_string(),
            error: "border:1px solid; padding:5px 7px; background-color:#FFA; width:400px;"
                .to_string(),
            inner_table: "border-collapse: collapse; margin:0;".to_string(),
            inner_key: "border:solid 1px #888; padding:5px 7px; background-color:#E4D4EA; \
                        font-weight:bold;"
                .to_string(),
            inner_value: "border:solid 1px #888; padding:5px 7px; white-space:wrap;".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_style_resolution() {
        let styles = StyleSheet::default();
        assert_eq!(styles.cell_style(Role::Heading), styles.heading);
        assert_eq!(styles.cell_style(Role::Key), styles.key);
        assert_eq!(styles.cell_style(Role::Value), styles.value);
        assert_eq!(styles.cell_style(Role::Error), styles.error);
    }

    #[test]
    fn test_default_palette() {
        let styles = StyleSheet::default();
        assert!(styles.heading.contains("#D788FF"));
        assert!(styles.key.contains("#EAACFF"));
        assert!(styles.error.contains("#FFA"));
        assert!(styles.inner_table.contains("border-collapse"));
    }

    #[test]
    fn test_custom_sheet_is_plain_data() {
        let mut styles = StyleSheet::default();
        styles.value = "color:red;".to_string();
        assert_eq!(styles.cell_style(Role::Value), "color:red;");
    }
}
