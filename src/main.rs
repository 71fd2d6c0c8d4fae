// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 StayVista

use std::{env, net::SocketAddr};

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use stayvista_server::{
    api::router,
    auth::CookieConfig,
    config,
    providers::stripe::StripeClient,
    state::{AppState, AuthConfig},
    store::InMemoryStore,
};

#[tokio::main]
async fn main() {
    init_tracing();

    let production = env::var(config::APP_ENV)
        .map(|v| v.eq_ignore_ascii_case("production"))
        .unwrap_or(false);

    let secret = match env::var(config::ACCESS_TOKEN_SECRET_ENV) {
        Ok(secret) if !secret.trim().is_empty() => secret,
        _ if production => {
            panic!("ACCESS_TOKEN_SECRET must be set in production");
        }
        _ => {
            warn!("ACCESS_TOKEN_SECRET not set; using an insecure development secret");
            "insecure-dev-secret".to_string()
        }
    };

    let auth = AuthConfig::new(secret, CookieConfig::for_environment(production));
    let mut state = AppState::new(InMemoryStore::new(), auth);

    if StripeClient::is_configured() {
        match StripeClient::from_env() {
            Ok(client) => {
                info!("Stripe payment client configured");
                state = state.with_payments(client);
            }
            Err(e) => warn!(error = %e, "Stripe configuration invalid; payments disabled"),
        }
    } else {
        warn!("STRIPE_SECRET_KEY not set; payment intents will fail");
    }

    let app = router(state, cors_layer());

    // Parse bind address
    let host = env::var(config::HOST_ENV).unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var(config::PORT_ENV)
        .unwrap_or_else(|_| "8000".to_string())
        .parse()
        .unwrap_or(8000);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    info!("StayVista server listening on http://{addr} (docs at /docs)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("HTTP server failed");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    let json = env::var(config::LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// CORS policy from `CORS_ORIGINS`; credentialed requests require an
/// explicit allow-list, so the permissive fallback is development-only.
fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = env::var(config::CORS_ORIGINS_ENV)
        .map(|raw| {
            raw.split(',')
                .filter_map(|origin| HeaderValue::from_str(origin.trim()).ok())
                .collect()
        })
        .unwrap_or_default();

    if origins.is_empty() {
        warn!("CORS_ORIGINS not set; falling back to a permissive CORS policy");
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE])
}
