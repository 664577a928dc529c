//! CLI handler for `proweb-seo jsonld <page>`.

use crate::cli::output::{self, Styled};
use crate::config::SiteConfig;
use crate::schema::pages::{page_json_ld, SchemaPage};
use crate::schema::{render_json_ld_script, SchemaContext};
use anyhow::{anyhow, Context, Result};
use chrono::Utc;

/// Print every page path that carries structured data.
pub fn list() {
    let s = Styled::new();
    let pages = SchemaPage::all();
    if output::is_json() {
        let paths: Vec<String> = pages.iter().map(SchemaPage::path).collect();
        output::print_json(&serde_json::json!({ "pages": paths }));
        return;
    }
    for page in &pages {
        println!("{}", page.path());
    }
    if !output::is_quiet() {
        eprintln!("  {} {} pages", s.ok_sym(), pages.len());
    }
}

/// Print the JSON-LD for `page`, either pretty-printed or as an inline
/// script element.
pub fn run(config: &SiteConfig, page: &str, script: bool, nonce: Option<&str>) -> Result<()> {
    let page: SchemaPage = page.parse()?;
    let ctx = SchemaContext::new(config.site_url.clone());
    let document = page_json_ld(&ctx, page, Utc::now().date_naive())
        .ok_or_else(|| anyhow!("{} has no structured data", page.path()))?;

    if script {
        println!("{}", render_json_ld_script(&document, nonce)?);
    } else {
        let pretty =
            serde_json::to_string_pretty(&document).context("failed to serialise json-ld")?;
        println!("{pretty}");
    }
    Ok(())
}
