//! HTTP surface: one GET route per served document.
//!
//! Each route declares whether it reads artifact mtimes from disk. Routes
//! the runtime cannot satisfy are not mounted, so an edge deployment can
//! forward them to a filesystem-capable runtime.

use crate::config::SiteConfig;
use crate::registry::RouteRegistry;
use crate::robots::{render_robots_txt, ROBOTS_CONTENT_TYPE};
use crate::sitemap::{SitemapDocument, XML_CONTENT_TYPE};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use chrono::Utc;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

pub const ROBOTS_PATH: &str = "/robots.txt";
pub const ROBOTS_TTL_SECONDS: u32 = 3600;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Sitemap(SitemapDocument),
    Robots,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServedRoute {
    pub path: &'static str,
    pub kind: RouteKind,
    pub ttl_seconds: u32,
    pub requires_filesystem: bool,
}

/// Every route the runtime knows how to serve.
pub fn served_routes() -> Vec<ServedRoute> {
    let mut routes: Vec<ServedRoute> = SitemapDocument::ALL
        .into_iter()
        .map(|doc| ServedRoute {
            path: doc.path(),
            kind: RouteKind::Sitemap(doc),
            ttl_seconds: doc.ttl_seconds(),
            requires_filesystem: doc.requires_filesystem(),
        })
        .collect();
    routes.push(ServedRoute {
        path: ROBOTS_PATH,
        kind: RouteKind::Robots,
        ttl_seconds: ROBOTS_TTL_SECONDS,
        requires_filesystem: false,
    });
    routes
}

/// Routes this configuration can serve.
pub fn mounted_routes(config: &SiteConfig) -> Vec<ServedRoute> {
    served_routes()
        .into_iter()
        .filter(|route| {
            let mountable = !route.requires_filesystem || config.capabilities.filesystem;
            if !mountable {
                debug!(path = route.path, "not mounting route without filesystem access");
            }
            mountable
        })
        .collect()
}

/// `Cache-Control` value for a shared-cache lifetime of `ttl` seconds.
pub fn cache_control(ttl: u32) -> String {
    format!("public, max-age={ttl}, s-maxage={ttl}")
}

pub fn build_router(state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new();
    for route in mounted_routes(&state.config) {
        router = match route.kind {
            RouteKind::Sitemap(doc) => router.route(
                route.path,
                get(move |State(state): State<AppState>| sitemap_handler(state, doc)),
            ),
            RouteKind::Robots => router.route(route.path, get(robots_handler)),
        };
    }
    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn sitemap_handler(state: AppState, document: SitemapDocument) -> Response {
    let now = Utc::now();
    let registry = RouteRegistry::for_config(&state.config, now.date_naive());

    // Rendering may stat files; keep it off the async workers.
    match tokio::task::spawn_blocking(move || document.render(&registry, now)).await {
        Ok(xml) => (
            [
                (header::CONTENT_TYPE, XML_CONTENT_TYPE.to_string()),
                (header::CACHE_CONTROL, cache_control(document.ttl_seconds())),
            ],
            xml,
        )
            .into_response(),
        Err(e) => {
            error!(document = document.name(), "render task failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn robots_handler(State(state): State<AppState>) -> Response {
    let body = render_robots_txt(&state.config.site_url, state.config.deployment);
    (
        [
            (header::CONTENT_TYPE, ROBOTS_CONTENT_TYPE.to_string()),
            (header::CACHE_CONTROL, cache_control(ROBOTS_TTL_SECONDS)),
        ],
        body,
    )
        .into_response()
}
