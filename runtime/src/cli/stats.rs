//! CLI handler for `proweb-seo stats`.

use crate::cli::output::{self, Styled};
use crate::config::SiteConfig;
use crate::registry::RouteRegistry;
use crate::validate::sitemap_stats;
use anyhow::{Context, Result};
use chrono::Utc;

pub fn run(config: &SiteConfig) -> Result<()> {
    let registry = RouteRegistry::for_config(config, Utc::now().date_naive());
    let stats = sitemap_stats(&registry);

    if output::is_json() {
        let value = serde_json::to_value(&stats).context("failed to serialise stats")?;
        output::print_json(&value);
        return Ok(());
    }

    let s = Styled::new();
    output::print_header(&s);
    output::print_section(&s, "Sitemaps");
    for count in &stats.categories {
        output::print_check(s.ok_sym(), count.category, &format!("{} urls", count.urls));
    }
    eprintln!();
    output::print_section(&s, "Media");
    output::print_check(
        s.ok_sym(),
        "images",
        &format!("{} on {} pages", stats.images, stats.image_pages),
    );
    output::print_check(
        s.ok_sym(),
        "videos",
        &format!("{} on {} pages", stats.videos, stats.video_pages),
    );
    output::print_status(&s, &s.green("ok"), &format!("{} urls", stats.total));
    Ok(())
}
