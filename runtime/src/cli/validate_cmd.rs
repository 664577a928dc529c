//! CLI handler for `proweb-seo validate`.

use crate::cli::output::{self, Styled};
use crate::config::SiteConfig;
use crate::registry::RouteRegistry;
use crate::validate::validate_site;
use anyhow::{bail, Context, Result};
use chrono::Utc;

/// Fails when any issue is found so CI can gate on the exit code.
pub fn run(config: &SiteConfig) -> Result<()> {
    let now = Utc::now();
    let registry = RouteRegistry::for_config(config, now.date_naive());
    let report = validate_site(&registry, config.deployment, now);

    if output::is_json() {
        let value = serde_json::to_value(&report).context("failed to serialise report")?;
        output::print_json(&value);
    } else if !output::is_quiet() || !report.is_valid() {
        let s = Styled::new();
        for issue in &report.issues {
            eprintln!("  {} {issue}", s.fail_sym());
        }
        if report.is_valid() {
            eprintln!("  {} {} urls checked, no issues", s.ok_sym(), report.checked);
        }
    }

    if !report.is_valid() {
        bail!(
            "{} issue(s) across {} urls",
            report.issues.len(),
            report.checked
        );
    }
    Ok(())
}
