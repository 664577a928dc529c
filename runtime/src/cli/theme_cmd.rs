//! CLI handler for `proweb-seo theme <slug>`.

use crate::cli::output::{self, Styled};
use crate::themes::{city_theme, service_theme};
use anyhow::{Context, Result};

pub fn run(slug: &str, service: bool) -> Result<()> {
    let theme = if service {
        service_theme(slug)
    } else {
        city_theme(slug)
    };

    if output::is_json() {
        let value = serde_json::to_value(theme).context("failed to serialise theme")?;
        output::print_json(&value);
        return Ok(());
    }

    let s = Styled::new();
    output::print_check(s.ok_sym(), "primary", theme.primary);
    output::print_check(s.ok_sym(), "secondary", theme.secondary);
    output::print_check(s.ok_sym(), "accent", theme.accent);
    Ok(())
}
