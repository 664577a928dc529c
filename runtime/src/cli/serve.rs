//! Run the HTTP server until interrupted.

use crate::cli::output::{self, Styled};
use crate::config::SiteConfig;
use crate::server::{build_router, mounted_routes, AppState};
use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::filter::{Directive, EnvFilter};

fn init_tracing(json: bool) -> Result<()> {
    let directive: Directive = "proweb_seo=info"
        .parse()
        .context("invalid default log directive")?;
    let filter = EnvFilter::from_default_env().add_directive(directive);
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("received shutdown signal");
}

/// Bind `config.listen` and serve every route the runtime can satisfy.
pub async fn run(config: SiteConfig, log_json: bool) -> Result<()> {
    let s = Styled::new();
    init_tracing(log_json)?;

    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;
    let addr = listener.local_addr().context("listener has no local address")?;

    info!(
        %addr,
        site = %config.site_url,
        deployment = ?config.deployment,
        filesystem = config.capabilities.filesystem,
        "starting proweb-seo v{}",
        env!("CARGO_PKG_VERSION")
    );
    let routes = mounted_routes(&config);
    for route in &routes {
        info!(path = route.path, ttl = route.ttl_seconds, "mounted route");
    }

    if !output::is_quiet() {
        output::print_header(&s);
        eprintln!("  {} Listening on http://{addr}", s.ok_sym());
        for route in &routes {
            eprintln!(
                "    {} {}",
                s.cyan(route.path),
                s.dim(&format!("max-age {}", output::format_ttl(route.ttl_seconds)))
            );
        }
    }

    let app = build_router(AppState::new(config));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated with an error")?;

    if !output::is_quiet() {
        eprintln!("  {} proweb-seo stopped.", s.ok_sym());
    }
    Ok(())
}
