//! Colour themes for city and service hero scenes.
//!
//! Purely decorative; lookups never fail and fall back to a default theme.

use serde::Serialize;

/// Hex colour triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

const fn theme(primary: &'static str, secondary: &'static str, accent: &'static str) -> Theme {
    Theme {
        primary,
        secondary,
        accent,
    }
}

pub static CITY_THEMES: &[(&str, Theme)] = &[
    ("amsterdam", theme("#FF6B35", "#004E89", "#FFD23F")),
    ("rotterdam", theme("#00A878", "#FF6B6B", "#3DCCC7")),
    ("utrecht", theme("#FED766", "#009FB7", "#F77F00")),
    ("den-haag", theme("#7209B7", "#F72585", "#4CC9F0")),
    ("eindhoven", theme("#ED254E", "#47E5BC", "#F9DC5C")),
    ("tilburg", theme("#06A77D", "#D62828", "#F77F00")),
    ("groningen", theme("#4A90E2", "#F5A623", "#50E3C2")),
    ("almere", theme("#00B4D8", "#90E0EF", "#0077B6")),
    ("breda", theme("#9D4EDD", "#FF6D00", "#C77DFF")),
    ("nijmegen", theme("#2A9D8F", "#E76F51", "#F4A261")),
    ("haarlem", theme("#E63946", "#F1FAEE", "#A8DADC")),
    ("arnhem", theme("#52B788", "#2D6A4F", "#95D5B2")),
    ("amersfoort", theme("#457B9D", "#E63946", "#F1FAEE")),
    ("zaanstad", theme("#06D6A0", "#118AB2", "#FFD23F")),
    ("den-bosch", theme("#D62828", "#003049", "#F77F00")),
];

pub static SERVICE_THEMES: &[(&str, Theme)] = &[
    ("website-laten-maken", theme("#4CC9F0", "#4361EE", "#7209B7")),
    ("webshop-laten-maken", theme("#F72585", "#B5179E", "#4361EE")),
    ("seo-optimalisatie", theme("#06D6A0", "#118AB2", "#FFD166")),
    ("3d-website-ervaringen", theme("#F77F00", "#D62828", "#FCBF49")),
    ("onderhoud-support", theme("#4895EF", "#3F37C9", "#4CC9F0")),
];

const DEFAULT_CITY_THEME: Theme = theme("#FF6B35", "#004E89", "#FFD23F");
const DEFAULT_SERVICE_THEME: Theme = theme("#4CC9F0", "#4361EE", "#7209B7");

fn lookup(table: &[(&str, Theme)], slug: &str) -> Option<Theme> {
    table
        .iter()
        .find(|(key, _)| *key == slug)
        .map(|(_, theme)| *theme)
}

/// Theme for `/steden/{slug}`; unknown cities use Amsterdam's.
pub fn city_theme(slug: &str) -> Theme {
    lookup(CITY_THEMES, slug).unwrap_or(DEFAULT_CITY_THEME)
}

/// Theme for `/diensten/{slug}`; unknown services use the website theme.
pub fn service_theme(slug: &str) -> Theme {
    lookup(SERVICE_THEMES, slug).unwrap_or(DEFAULT_SERVICE_THEME)
}
