use std::fs;
use std::io::Write;
use std::sync::Arc;

use tracing::{error, info};

use fuelinfo::config::Config;
use fuelinfo::error::Error;
use fuelinfo::render::StyleSheet;
use fuelinfo::report::build_report;
use fuelinfo::scan::Scanner;
use fuelinfo::serve::{self, ServeState};
use fuelinfo::snapshot::Snapshot;

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("fuelinfo: {}", e);
            std::process::exit(1);
        }
    };

    fuelinfo::logging::init(&config.logging);

    info!("fuelinfo {}", fuelinfo::VERSION);
    config.log_summary();

    if let Err(e) = run(config) {
        error!("{}", e);
        eprintln!("fuelinfo: {}", e);
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<(), Error> {
    match config.report.serve_addr {
        Some(addr) => {
            // Single-threaded runtime: one debug endpoint, blocking
            // filesystem reads per request are acceptable.
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let state = Arc::new(ServeState::new(config));
            runtime.block_on(async move {
                tokio::select! {
                    result = serve::run(addr, state) => result,
                    _ = tokio::signal::ctrl_c() => {
                        info!("Shutting down...");
                        Ok(())
                    }
                }
            })
        }
        None => one_shot(&config),
    }
}

/// Collect once, render, write to the configured output.
fn one_shot(config: &Config) -> Result<(), Error> {
    let snapshot = Snapshot::load(&config.app.snapshot)?;
    let scanner = Scanner::new(&config.app.app_root);
    let report = build_report(
        &snapshot,
        &scanner,
        &config.report.sections,
        config.report.title.clone(),
    );
    let document = report.to_document(&StyleSheet::default(), config.report.refresh);

    match &config.report.output {
        Some(path) => {
            fs::write(path, document.as_str()).map_err(|error| Error::OutputWrite {
                path: path.clone(),
                error,
            })?;
            info!(
                "Report written to {:?} ({} bytes, {} sections)",
                path,
                document.len(),
                report.sections().len()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(document.as_str().as_bytes())?;
        }
    }
    Ok(())
}
