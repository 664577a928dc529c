//! CLI handler for `proweb-seo render <document>`.

use crate::cli::output;
use crate::config::SiteConfig;
use crate::registry::RouteRegistry;
use crate::robots::{render_robots_txt, ROBOTS_CONTENT_TYPE};
use crate::server::{ROBOTS_PATH, ROBOTS_TTL_SECONDS};
use crate::sitemap::{SitemapDocument, XML_CONTENT_TYPE};
use anyhow::{bail, Result};
use chrono::Utc;

/// A rendered body plus the headers it would be served with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub path: &'static str,
    pub content_type: &'static str,
    pub ttl_seconds: u32,
    pub body: String,
}

fn is_robots(target: &str) -> bool {
    matches!(target.trim(), "robots" | "robots.txt" | ROBOTS_PATH)
}

/// Render `target` (a sitemap name or path, or `robots`) for `config`.
pub fn render(config: &SiteConfig, target: &str) -> Result<Rendered> {
    if is_robots(target) {
        return Ok(Rendered {
            path: ROBOTS_PATH,
            content_type: ROBOTS_CONTENT_TYPE,
            ttl_seconds: ROBOTS_TTL_SECONDS,
            body: render_robots_txt(&config.site_url, config.deployment),
        });
    }

    let document: SitemapDocument = target.parse()?;
    if document.requires_filesystem() && !config.capabilities.filesystem {
        bail!(
            "{} reads artifact timestamps and is not available without filesystem access",
            document.path()
        );
    }
    let now = Utc::now();
    let registry = RouteRegistry::for_config(config, now.date_naive());
    Ok(Rendered {
        path: document.path(),
        content_type: XML_CONTENT_TYPE,
        ttl_seconds: document.ttl_seconds(),
        body: document.render(&registry, now),
    })
}

pub fn run(config: &SiteConfig, target: &str) -> Result<()> {
    let rendered = render(config, target)?;
    if output::is_json() {
        output::print_json(&serde_json::json!({
            "path": rendered.path,
            "content_type": rendered.content_type,
            "ttl_seconds": rendered.ttl_seconds,
            "body": rendered.body,
        }));
    } else {
        print!("{}", rendered.body);
    }
    Ok(())
}
