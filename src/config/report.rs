//! Report output configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use super::parse::{env_duration, env_opt, env_or};
use super::ConfigError;
use crate::report::SectionKind;

/// What to report and where to put it.
#[derive(Clone, Debug)]
pub struct ReportConfig {
    /// Report and document title.
    pub title: String,
    /// Sections to collect, in display order.
    pub sections: Vec<SectionKind>,
    /// Output file for one-shot mode; None writes to stdout.
    pub output: Option<PathBuf>,
    /// Bind address for serve mode; None stays one-shot.
    pub serve_addr: Option<SocketAddr>,
    /// Auto-refresh interval for the served document.
    pub refresh: Option<Duration>,
}

impl ReportConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let serve_addr = env_opt("SERVE_ADDR")
            .map(|s| {
                s.parse::<SocketAddr>().map_err(|e| ConfigError::Parse {
                    key: "SERVE_ADDR".into(),
                    value: s,
                    error: format!("{}", e),
                })
            })
            .transpose()?;

        Ok(Self {
            title: env_or("REPORT_TITLE", "fuelinfo"),
            sections: parse_sections(&env_or("SECTIONS", "all"))?,
            output: env_opt("OUTPUT").map(PathBuf::from),
            serve_addr,
            refresh: env_duration("REFRESH", "off")?,
        })
    }
}

/// Parse a comma-separated section list; `all` selects every section.
fn parse_sections(value: &str) -> Result<Vec<SectionKind>, ConfigError> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("all") {
        return Ok(SectionKind::ALL.to_vec());
    }

    let mut sections = Vec::new();
    for name in value.split(',') {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        match SectionKind::parse(&name.to_lowercase()) {
            Some(kind) => sections.push(kind),
            None => {
                return Err(ConfigError::Invalid {
                    key: "SECTIONS".into(),
                    message: format!("unknown section '{}'", name),
                })
            }
        }
    }

    if sections.is_empty() {
        return Err(ConfigError::Invalid {
            key: "SECTIONS".into(),
            message: "no sections selected".into(),
        });
    }
    Ok(sections)
}
