//! Rendered markup container.

use std::fmt;

/// A fragment (or whole document) of rendered report HTML.
///
/// Opaque on purpose: callers compose fragments and write them out once,
/// nothing re-parses the markup. Content is not escaped — the report is
/// trusted debug output, never served to end users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Html(String);

impl Html {
    pub(crate) fn from_string(raw: String) -> Self {
        Html(raw)
    }

    /// Borrow the markup text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Markup length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Html {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Html> for String {
    fn from(html: Html) -> Self {
        html.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_accessors() {
        let html = Html::from_string("<p>x</p>".to_string());
        assert_eq!(html.as_str(), "<p>x</p>");
        assert_eq!(html.len(), 8);
        assert!(!html.is_empty());
        assert_eq!(html.to_string(), "<p>x</p>");
        assert_eq!(String::from(html), "<p>x</p>");
    }
}
