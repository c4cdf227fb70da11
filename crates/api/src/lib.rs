//! HTTP API server for the membership service.
//!
//! Binds the member CRUD endpoints to the member service, with structured
//! logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use domain::MemberService;
use member_store::MemberRepository;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::members::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<R: MemberRepository + 'static>(
    state: Arc<AppState<R>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::system::metrics))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/member", post(routes::members::create::<R>))
        .route("/members", get(routes::members::list::<R>))
        .route(
            "/member/{id}",
            get(routes::members::get::<R>)
                .put(routes::members::update::<R>)
                .delete(routes::members::delete::<R>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state around a member repository.
pub fn create_state<R: MemberRepository + 'static>(repository: R) -> Arc<AppState<R>> {
    Arc::new(AppState {
        member_service: MemberService::new(repository),
    })
}
