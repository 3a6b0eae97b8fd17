//! Local HTTP endpoint serving the report.
//!
//! A single-user debug server: `GET /` re-reads the snapshot, re-scans the
//! application tree and returns the freshly rendered document, so the page
//! can sit open in a browser (optionally auto-refreshing) while the
//! application is poked at. `GET /health` returns a small JSON status.

use std::convert::Infallible;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming as IncomingBody;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::error::Error;
use crate::render::StyleSheet;
use crate::report::build_report;
use crate::scan::Scanner;
use crate::snapshot::Snapshot;

/// Everything a request needs to rebuild the report.
pub struct ServeState {
    config: Config,
    styles: StyleSheet,
}

impl ServeState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            styles: StyleSheet::default(),
        }
    }

    /// Collect and render the full document from current application state.
    fn render_document(&self) -> Result<String, Error> {
        let snapshot = Snapshot::load(&self.config.app.snapshot)?;
        let scanner = Scanner::new(&self.config.app.app_root);
        let report = build_report(
            &snapshot,
            &scanner,
            &self.config.report.sections,
            self.config.report.title.clone(),
        );
        Ok(report
            .to_document(&self.styles, self.config.report.refresh)
            .into_string())
    }
}

/// Accept loop. Runs until the caller drops the future (ctrl-c in main).
pub async fn run(addr: std::net::SocketAddr, state: Arc<ServeState>) -> Result<(), Error> {
    let listener = TcpListener::bind(addr).await?;
    info!("Serving report on http://{}/", addr);

    loop {
        let (stream, _) = listener.accept().await?;
        let _ = stream.set_nodelay(true);
        let state = Arc::clone(&state);

        tokio::spawn(async move {
            let service = service_fn(move |req: Request<IncomingBody>| {
                let state = Arc::clone(&state);
                async move {
                    Ok::<_, Infallible>(respond(req.uri().path(), &state))
                }
            });

            let io = TokioIo::new(stream);
            let _ = http1::Builder::new().serve_connection(io, service).await;
        });
    }
}

/// Build the response for one request path.
fn respond(path: &str, state: &ServeState) -> Response<Full<Bytes>> {
    match path {
        "/" => match state.render_document() {
            Ok(html) => response(StatusCode::OK, "text/html; charset=utf-8", html),
            Err(e) => {
                error!("report generation failed: {}", e);
                response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "text/plain; charset=utf-8",
                    format!("report generation failed: {}\n", e),
                )
            }
        },
        "/health" => {
            let now = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default();
            let body = serde_json::json!({
                "status": "ok",
                "timestamp": now.as_secs(),
                "snapshot": state.config.app.snapshot.display().to_string(),
                "snapshot_present": state.config.app.snapshot.is_file(),
            });
            response(StatusCode::OK, "application/json", body.to_string())
        }
        _ => response(
            StatusCode::NOT_FOUND,
            "text/plain; charset=utf-8",
            "not found\n".to_string(),
        ),
    }
}

fn response(status: StatusCode, content_type: &str, body: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::new())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, LogFormat, LoggingConfig, ReportConfig};
    use crate::report::SectionKind;
    use std::fs;

    fn state_for(dir: &std::path::Path, snapshot_json: &str) -> ServeState {
        let snapshot = dir.join("fuelinfo.json");
        fs::write(&snapshot, snapshot_json).unwrap();

        ServeState::new(Config {
            app: AppConfig {
                app_root: dir.to_path_buf(),
                snapshot,
            },
            report: ReportConfig {
                title: "fuelinfo".to_string(),
                sections: SectionKind::ALL.to_vec(),
                output: None,
                serve_addr: None,
                refresh: Some(std::time::Duration::from_secs(5)),
            },
            logging: LoggingConfig {
                filter: "fuelinfo=info".to_string(),
                format: LogFormat::Text,
                service_name: "fuelinfo".to_string(),
            },
        })
    }

    async fn body_text(res: Response<Full<Bytes>>) -> String {
        use http_body_util::BodyExt;
        let collected = res.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(collected.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_root_serves_rendered_document() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path(), r#"{"paths": ["app/", "core/"]}"#);

        let res = respond("/", &state);
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()["Content-Type"], "text/html; charset=utf-8");
        let body = body_text(res).await;
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains(">Search Paths</h1>"));
        assert!(body.contains("<meta http-equiv=\"refresh\" content=\"5\">"));
    }

    #[tokio::test]
    async fn test_health_reports_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path(), "{}");

        let res = respond("/health", &state);
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()["Content-Type"], "application/json");
        let body: serde_json::Value = serde_json::from_str(&body_text(res).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["snapshot_present"], true);
    }

    #[test]
    fn test_unknown_path_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path(), "{}");
        assert_eq!(respond("/metrics", &state).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_missing_snapshot_is_500() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path(), "{}");
        fs::remove_file(dir.path().join("fuelinfo.json")).unwrap();
        assert_eq!(
            respond("/", &state).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
