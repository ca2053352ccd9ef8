use axum::{
    extract::{ConnectInfo, Request},
    http::header,
    middleware::Next,
    response::Response,
};
use std::{net::SocketAddr, time::Instant};

/// Emits one structured log line per request once the handler has run.
pub async fn access_log_mw(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(req).await;

    tracing::info!(
        ip = %addr.ip(),
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        user_agent = %user_agent,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "handled request"
    );

    response
}
