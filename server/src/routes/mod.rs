//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the survey API proxy and the Leptos SSR app under a
//! single Axum router. The browser talks to `/api/surveys/*` on this host;
//! `proxy` relays those calls to the configured backend.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::extract::Request;
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{any, get};
use client::routes::AppRoute;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Survey API proxy + health check.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/surveys/{*rest}", any(proxy::forward))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Redirect `/surveys/7/` to `/surveys/7` so the page router only sees
/// canonical paths and agrees with [`AppRoute::resolve`].
async fn trim_trailing_slash(request: Request, next: Next) -> Response {
    let path = request.uri().path();
    if let Some(trimmed) = path.strip_suffix('/').filter(|p| !p.is_empty()) {
        let target = match request.uri().query() {
            Some(query) => format!("{trimmed}?{query}"),
            None => trimmed.to_owned(),
        };
        return Redirect::permanent(&target).into_response();
    }
    next.run(request).await
}

/// Give server-rendered not-found pages a 404 status. The page itself comes
/// from the router fallback, which would otherwise answer 200. Static files
/// served by the same fallback are not HTML and keep their status.
async fn tag_not_found(request: Request, next: Next) -> Response {
    let route = AppRoute::resolve(request.uri().path());
    let mut response = next.run(request).await;
    let is_html = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/html"));
    if route == AppRoute::NotFound && is_html && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NOT_FOUND;
    }
    response
}

/// API proxy + Leptos SSR for `/surveys/:id` and the not-found page.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(page_routes(&leptos_options))
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

/// Leptos SSR for the client's route table; unmatched paths render the
/// not-found page with a 404.
fn page_routes(leptos_options: &LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    Router::new()
        .leptos_routes(leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .layer(middleware::from_fn(tag_not_found))
        .layer(middleware::from_fn(trim_trailing_slash))
        .with_state(leptos_options.clone())
}

/// Full application router. Falls back to the API proxy alone when the
/// Leptos configuration is unavailable.
pub fn app(state: AppState) -> Router {
    let router = match leptos_app(state.clone()) {
        Ok(router) => router,
        Err(e) => {
            tracing::warn!(error = %e, "Leptos SSR disabled; serving API proxy only");
            api_routes(state)
        }
    };
    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
