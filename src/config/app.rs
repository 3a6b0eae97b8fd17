//! Application tree configuration.

use std::path::{Path, PathBuf};

use super::parse::{env_opt, env_or};
use super::ConfigError;

/// Where the inspected application and its snapshot live.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Application root; relative snapshot paths resolve against it.
    pub app_root: PathBuf,
    /// Path to the exported state snapshot.
    pub snapshot: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let app_root = PathBuf::from(env_or("APP_ROOT", "."));
        let snapshot = snapshot_path(&app_root, env_opt("SNAPSHOT"));
        Ok(Self { app_root, snapshot })
    }
}

/// Resolve the snapshot path: explicit value wins, relative values join
/// the application root, default is `<root>/fuelinfo.json`.
fn snapshot_path(app_root: &Path, explicit: Option<String>) -> PathBuf {
    match explicit {
        Some(path) => {
            let path = PathBuf::from(path);
            if path.is_absolute() {
                path
            } else {
                app_root.join(path)
            }
        }
        None => app_root.join("fuelinfo.json"),
    }
}
