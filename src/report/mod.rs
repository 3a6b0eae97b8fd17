//! Report assembly: sections of tables, stitched into an HTML document.

pub mod sections;

use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::render::{Html, StyleSheet, Table};
use crate::scan::Scanner;
use crate::snapshot::Snapshot;

enum SectionItem {
    SubHeading(String),
    Table(Table),
}

/// One titled block of the report.
pub struct Section {
    title: String,
    items: Vec<SectionItem>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn table(mut self, table: Table) -> Self {
        self.items.push(SectionItem::Table(table));
        self
    }

    pub fn sub_heading(mut self, text: impl Into<String>) -> Self {
        self.items.push(SectionItem::SubHeading(text.into()));
        self
    }

    fn write_to(&self, out: &mut String, styles: &StyleSheet) {
        out.push_str("<div style=\"");
        out.push_str(&styles.block);
        out.push_str("\">\n<h1 style=\"");
        out.push_str(&styles.h1);
        out.push_str("\">");
        out.push_str(&self.title);
        out.push_str("</h1>\n");
        for item in &self.items {
            match item {
                SectionItem::SubHeading(text) => {
                    out.push_str("<h2 style=\"");
                    out.push_str(&styles.h2);
                    out.push_str("\">");
                    out.push_str(text);
                    out.push_str("</h2>\n");
                }
                SectionItem::Table(table) => table.write_to(out, styles),
            }
        }
        out.push_str("</div>\n");
    }

    pub fn render(&self, styles: &StyleSheet) -> Html {
        let mut out = String::new();
        self.write_to(&mut out, styles);
        Html::from_string(out)
    }
}

/// A full diagnostic report: ordered sections under one title.
pub struct Report {
    title: String,
    sections: Vec<Section>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    #[inline]
    pub fn section(mut self, section: Section) -> Self {
        self.push(section);
        self
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Render the sections only, for embedding in an existing page.
    pub fn to_fragment(&self, styles: &StyleSheet) -> Html {
        let mut out = String::new();
        for section in &self.sections {
            section.write_to(&mut out, styles);
        }
        Html::from_string(out)
    }

    /// Render a standalone HTML document, optionally auto-refreshing.
    pub fn to_document(&self, styles: &StyleSheet, refresh: Option<Duration>) -> Html {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        if let Some(interval) = refresh {
            out.push_str("<meta http-equiv=\"refresh\" content=\"");
            out.push_str(&interval.as_secs().to_string());
            out.push_str("\">\n");
        }
        out.push_str("<title>");
        out.push_str(&self.title);
        out.push_str("</title>\n</head>\n<body>\n");
        for section in &self.sections {
            section.write_to(&mut out, styles);
        }
        out.push_str("</body>\n</html>\n");
        Html::from_string(out)
    }
}

/// The report sections, in their fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Paths,
    Routes,
    Request,
    Modules,
    Packages,
    Database,
    Session,
    Config,
}

impl SectionKind {
    pub const ALL: [SectionKind; 8] = [
        SectionKind::Paths,
        SectionKind::Routes,
        SectionKind::Request,
        SectionKind::Modules,
        SectionKind::Packages,
        SectionKind::Database,
        SectionKind::Session,
        SectionKind::Config,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::Paths => "paths",
            SectionKind::Routes => "routes",
            SectionKind::Request => "request",
            SectionKind::Modules => "modules",
            SectionKind::Packages => "packages",
            SectionKind::Database => "database",
            SectionKind::Session => "session",
            SectionKind::Config => "config",
        }
    }

    pub fn parse(name: &str) -> Option<SectionKind> {
        SectionKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Collect the requested sections from a snapshot and the application tree.
///
/// A section that finds nothing to show still appears, carrying its
/// diagnostic message; collection never aborts the report.
pub fn build_report(
    snapshot: &Snapshot,
    scanner: &Scanner,
    kinds: &[SectionKind],
    title: impl Into<String>,
) -> Report {
    let mut report = Report::new(title);
    for kind in kinds {
        debug!(section = kind.name(), "collecting report section");
        let section = match kind {
            SectionKind::Paths => sections::paths::collect(snapshot),
            SectionKind::Routes => sections::routes::collect(snapshot),
            SectionKind::Request => sections::request::collect(snapshot),
            SectionKind::Modules => sections::modules::collect(snapshot, scanner),
            SectionKind::Packages => sections::packages::collect(snapshot, scanner),
            SectionKind::Database => sections::database::collect(snapshot),
            SectionKind::Session => sections::session::collect(snapshot),
            SectionKind::Config => sections::config_files::collect(snapshot),
        };
        report.push(section);
    }
    report
}
