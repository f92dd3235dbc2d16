use std::time::Duration;

use axum::{
    Json, Router,
    http::{HeaderName, HeaderValue, Method, Request, Response, StatusCode, Uri, header},
    routing::get,
};
use tower::{Layer, limit::ConcurrencyLimitLayer};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::{config::AppConfig, state::AppState};

pub mod doc;
pub mod extract;
pub mod favorites;
pub mod health;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod users;

const REQUEST_ID_HEADER: &str = "x-request-id";

// Build the resource routers without binding state; it is provided by `create_app`.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/people", people::router())
        .nest("/planets", planets::router())
        .nest("/users", users::router())
        .nest("/favorite", favorites::router())
}

pub fn cors_layer(config: &AppConfig) -> anyhow::Result<CorsLayer> {
    let origin = match &config.cors_allow_origin {
        Some(origin) => AllowOrigin::exact(HeaderValue::from_str(origin)?),
        None => AllowOrigin::any(),
    };
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60)))
}

/// The full application: routes, docs, fallback and the middleware stack.
/// Trailing slashes are trimmed before routing, so `/people/` serves `/people`.
pub fn create_app(state: AppState, cors: CorsLayer) -> NormalizePath<Router> {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id
            )
        })
        .on_request(|_request: &Request<_>, _span: &tracing::Span| {
            tracing::info!("request started");
        })
        .on_response(|response: &Response<_>, latency: Duration, _span: &tracing::Span| {
            tracing::info!(
                status = %response.status(),
                ms = %latency.as_millis(),
                "request finished"
            );
        });

    let router = Router::new()
        .route("/", get(sitemap::sitemap))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .merge(create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .layer(cors)
        .layer(trace_layer)
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(RequestBodyLimitLayer::new(1024 * 1024))
        .layer(ConcurrencyLimitLayer::new(100))
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    let body = serde_json::json!({ "msg": "Not Found", "path": uri.path() });
    (StatusCode::NOT_FOUND, Json(body))
}
