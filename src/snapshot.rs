//! Snapshot of framework state exported by the running application.
//!
//! The application dumps its live state (search paths, routes, request
//! data, database settings, session contents, loaded config) to a JSON
//! file; the report is built from that file plus a scan of the module
//! and package directories it names. Every field is optional so a
//! partial export still yields a report, with the missing sections
//! carrying their diagnostic messages.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;
use crate::value::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Cascading file system search paths, highest priority first.
    pub paths: Vec<String>,
    /// Loaded route table, keyed by defining file.
    pub routes: Option<Value>,
    /// Main and active request state.
    pub request: Option<RequestSnapshot>,
    /// Framework configuration the scanner needs.
    pub config: FrameworkConfig,
    /// Database settings, one entry per connection profile plus `active`.
    pub db: Option<Value>,
    /// Table names of the active database connection.
    pub tables: Vec<String>,
    /// Session variables.
    pub session: Option<Value>,
    /// Loaded configuration, keyed by directory then file.
    pub config_files: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RequestSnapshot {
    pub main: Option<Value>,
    pub active: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrameworkConfig {
    pub module_paths: Vec<String>,
    pub package_path: Option<String>,
    pub always_load: AlwaysLoad,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AlwaysLoad {
    pub modules: Vec<String>,
    pub packages: Vec<String>,
}

impl Snapshot {
    /// Load and parse a snapshot file.
    pub fn load(path: &Path) -> Result<Snapshot, Error> {
        let raw = fs::read_to_string(path).map_err(|error| Error::SnapshotRead {
            path: path.to_path_buf(),
            error,
        })?;
        serde_json::from_str(&raw).map_err(|error| Error::SnapshotParse {
            path: path.to_path_buf(),
            error,
        })
    }
}
