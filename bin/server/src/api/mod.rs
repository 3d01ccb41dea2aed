pub mod agent;
pub mod errors;
pub mod state;

use crate::opts::HttpOpts;

use std::time::Duration;

use axum::{
    Json, Router,
    extract::{FromRequestParts, Request},
    http::{HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use axum_client_ip::ClientIp;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_app(opts: &HttpOpts, state: state::AppState) -> anyhow::Result<Router> {
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            ip = tracing::field::Empty
        )
    });

    Ok(Router::new()
        .route("/infoz", get(|| async { Json(atb_cli_utils::process_info()) }))
        .route("/healthz", get(|| async { StatusCode::OK }))
        .merge(agent::routes())
        .layer(cors(&opts.origins)?)
        .layer(
            tower::ServiceBuilder::new()
                .layer(opts.client_ip_source.clone().into_extension())
                .layer(trace)
                .layer(middleware::from_fn(record_client_ip)),
        )
        .with_state(state))
}

/// The form posts JSON from a browser, so only the configured UI origins may
/// call in.
fn cors(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let allowed = origins
        .iter()
        .map(|v| v.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600)))
}

async fn record_client_ip(request: Request, next: Next) -> Response {
    let (mut parts, body) = request.into_parts();
    match ClientIp::from_request_parts(&mut parts, &()).await {
        Ok(ClientIp(ip)) => {
            tracing::Span::current().record("ip", ip.to_string());
        }
        Err(_) => tracing::debug!("client ip unavailable"),
    }
    next.run(Request::from_parts(parts, body)).await
}
