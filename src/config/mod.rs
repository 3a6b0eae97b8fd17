//! Configuration module for fuelinfo.
//!
//! This module provides centralized configuration loading from environment variables.
//!
//! # Example
//!
//! ```rust,ignore
//! use fuelinfo::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("Application root: {:?}", config.app.app_root);
//! println!("Snapshot: {:?}", config.app.snapshot);
//! ```

mod app;
mod error;
mod logging;
mod parse;
mod report;

pub use app::AppConfig;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use report::ReportConfig;

/// Complete application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Application tree configuration.
    pub app: AppConfig,
    /// Report configuration.
    pub report: ReportConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            app: AppConfig::from_env()?,
            report: ReportConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }

    /// Print configuration summary to log.
    pub fn log_summary(&self) {
        use tracing::info;

        info!("Configuration loaded:");
        info!("  Application root: {:?}", self.app.app_root);
        info!("  Snapshot: {:?}", self.app.snapshot);
        info!("  Title: {}", self.report.title);
        info!(
            "  Sections: {}",
            self.report
                .sections
                .iter()
                .map(|s| s.name())
                .collect::<Vec<_>>()
                .join(",")
        );

        match &self.report.output {
            Some(path) => info!("  Output: {:?}", path),
            None => info!("  Output: stdout"),
        }

        if let Some(addr) = self.report.serve_addr {
            info!("  Serve: {}", addr);
        }

        if let Some(refresh) = self.report.refresh {
            info!("  Auto-refresh: {}s", refresh.as_secs());
        }
    }
}
