use std::net::SocketAddr;
use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;

pub mod health_check;
pub mod reviews_controller;

/// Shared by every handler. The HTTP client pools connections, the config is
/// consulted on each request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

pub async fn serve(app_state: AppState) -> anyhow::Result<()> {
    let port = SocketAddr::from((app_state.config.bind_address, app_state.config.port));
    let application = application(app_state);

    info!("API server listening on port: {}", port);
    axum::Server::bind(&port)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the API server")
}

/// Full router with CORS, compression and the 404 fallback applied.
pub fn application(app_state: AppState) -> Router {
    let origins = allowed_origins(&app_state.config.origin_urls);

    router_endpoints(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_methods([Method::GET, Method::OPTIONS])
                        .allow_origin(origins)
                        .allow_headers([ACCEPT, CONTENT_TYPE])
                )
                .layer(CompressionLayer::new())
        )
        .fallback(page_not_found_handler)
}

pub fn router_endpoints(app_state: AppState) -> Router {
    health_check::router()
        .merge(reviews_controller::router(app_state))
}

/// `None` when the list contains the `*` wildcard.
fn parse_origins(origin_urls: &str) -> Option<Vec<HeaderValue>> {
    let origins: Vec<&str> = origin_urls
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if origins.contains(&"*") {
        return None;
    }

    Some(origins
        .into_iter()
        .filter_map(|s| match s.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(e) => {
                warn!("Ignoring invalid origin {:?} due to: {}", s, e);
                None
            }
        })
        .collect())
}

fn allowed_origins(origin_urls: &str) -> AllowOrigin {
    match parse_origins(origin_urls) {
        Some(origins) => AllowOrigin::list(origins),
        None => {
            warn!("ORIGIN_URLS contains '*', allowing requests from any origin");
            AllowOrigin::any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_split_and_trimmed() {
        let origins = parse_origins("https://tailor.example, http://localhost:3000,");
        assert_eq!(origins, Some(vec![
            HeaderValue::from_static("https://tailor.example"),
            HeaderValue::from_static("http://localhost:3000"),
        ]));
    }

    #[test]
    fn invalid_origins_are_dropped() {
        assert_eq!(parse_origins("bad\norigin"), Some(Vec::<HeaderValue>::new()));
    }

    #[test]
    fn wildcard_origin_allows_any() {
        assert_eq!(parse_origins("https://tailor.example, *"), None);
    }

    #[test]
    fn wildcard_origin_builds_application() {
        let config = Config {
            origin_urls: "*".to_string(),
            ..Config::default()
        };

        application(AppState::new(config));
    }
}
