//! HTTP endpoint for spreadsheet processing
//!
//! Exposes the classifier over hyper http1:
//! - `POST /process` - spreadsheet bytes in, classified spreadsheet out
//! - `GET /healthz`  - liveness probe
//!
//! Import failures map to 400 with a JSON `{"detail": ...}` body; an upload
//! over the configured size limit maps to 413.

use crate::domain::ScheduleTable;
use crate::infra::Config;
use crate::io::xlsx;
use crate::services;
use bytes::Bytes;
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Body, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{error, info, warn};

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

fn json_response(status: StatusCode, body: serde_json::Value) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body.to_string())))
        .expect("static response should not fail")
}

fn error_response(status: StatusCode, detail: &str) -> Response<Full<Bytes>> {
    json_response(status, serde_json::json!({ "detail": detail }))
}

/// Run the full import -> classify -> export pipeline on an upload
fn process_upload(
    schedule: &ScheduleTable,
    body: &[u8],
) -> Result<Vec<u8>, Response<Full<Bytes>>> {
    let rows = xlsx::read_marks(body).map_err(|e| {
        warn!(error = %e, "upload_rejected");
        error_response(StatusCode::BAD_REQUEST, &e.to_string())
    })?;

    let table = services::process_rows(schedule, rows);

    xlsx::write_results(&table).map_err(|e| {
        error!(error = %e, "result_serialization_failed");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "error generando Excel")
    })
}

/// Collect an upload body under the size limit.
///
/// Exceeding the limit maps to 413; any other body failure (e.g. a client
/// disconnect mid-upload) is a plain 400, not a size complaint.
async fn collect_upload<B>(
    body: B,
    max_upload_bytes: usize,
) -> Result<Bytes, Response<Full<Bytes>>>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    match Limited::new(body, max_upload_bytes).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(e) if e.is::<LengthLimitError>() => {
            warn!(limit = max_upload_bytes, "upload_too_large");
            Err(error_response(StatusCode::PAYLOAD_TOO_LARGE, "Archivo demasiado grande"))
        }
        Err(e) => {
            warn!(error = %e, "upload_read_failed");
            Err(error_response(StatusCode::BAD_REQUEST, "Error leyendo la carga"))
        }
    }
}

async fn handle_request(
    req: Request<Incoming>,
    schedule: Arc<ScheduleTable>,
    max_upload_bytes: usize,
) -> Result<Response<Full<Bytes>>, Infallible> {
    match (req.method(), req.uri().path()) {
        (&Method::POST, "/process") => {
            let body = match collect_upload(req.into_body(), max_upload_bytes).await {
                Ok(body) => body,
                Err(response) => return Ok(response),
            };

            let started = Instant::now();
            match process_upload(&schedule, &body) {
                Ok(output) => {
                    info!(
                        upload_bytes = body.len(),
                        output_bytes = output.len(),
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "upload_processed"
                    );
                    Ok(Response::builder()
                        .status(StatusCode::OK)
                        .header("Content-Type", XLSX_CONTENT_TYPE)
                        .header("Content-Disposition", "attachment; filename=procesado.xlsx")
                        .body(Full::new(Bytes::from(output)))
                        .expect("static response should not fail"))
                }
                Err(response) => Ok(response),
            }
        }
        (&Method::GET, "/healthz") => {
            Ok(json_response(StatusCode::OK, serde_json::json!({ "status": "ok" })))
        }
        _ => Ok(error_response(StatusCode::NOT_FOUND, "Not Found")),
    }
}

/// Start the processing HTTP server; returns when shutdown is signaled.
pub async fn start_server(
    config: &Config,
    schedule: Arc<ScheduleTable>,
    mut shutdown: watch::Receiver<bool>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr: SocketAddr = format!("{}:{}", config.bind_address(), config.port()).parse()?;
    let listener = TcpListener::bind(addr).await?;
    let max_upload_bytes = config.max_upload_bytes();

    info!(addr = %addr, "http_server_started");

    loop {
        tokio::select! {
            result = listener.accept() => {
                match result {
                    Ok((stream, _addr)) => {
                        let io = TokioIo::new(stream);
                        let schedule = schedule.clone();

                        tokio::spawn(async move {
                            let service = service_fn(move |req| {
                                let schedule = schedule.clone();
                                async move { handle_request(req, schedule, max_upload_bytes).await }
                            });

                            if let Err(e) = http1::Builder::new()
                                .serve_connection(io, service)
                                .await
                            {
                                error!(error = %e, "http_connection_error");
                            }
                        });
                    }
                    Err(e) => {
                        error!(error = %e, "http_accept_error");
                    }
                }
            }
            _ = shutdown.changed() => {
                if *shutdown.borrow() {
                    info!("http_server_shutdown");
                    return Ok(());
                }
            }
        }
    }
}
