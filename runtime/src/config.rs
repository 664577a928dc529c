//! Site configuration: base URL, deployment environment, content root.
//!
//! Values come from the environment (and CLI overrides). The base URL follows
//! a fixed fallback chain: `NEXT_PUBLIC_SITE_URL`, then `SITE_URL`, then the
//! production domain.

use crate::error::{Result, SeoError};
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

/// Production domain used when no URL is configured.
pub const DEFAULT_SITE_URL: &str = "https://prowebstudio.nl";

/// Public URL variable, checked first.
pub const PUBLIC_SITE_URL_ENV: &str = "NEXT_PUBLIC_SITE_URL";

/// Internal URL variable, checked second.
pub const SITE_URL_ENV: &str = "SITE_URL";

/// Deployment flag; `preview` switches robots.txt to disallow-all.
pub const DEPLOYMENT_ENV: &str = "VERCEL_ENV";

pub const CONTENT_ROOT_ENV: &str = "PROWEB_CONTENT_ROOT";

pub const LISTEN_ENV: &str = "PROWEB_LISTEN";

pub const DEFAULT_LISTEN: &str = "127.0.0.1:3000";

/// Normalised absolute base URL without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl(String);

impl SiteUrl {
    /// Parse and normalise a base URL. Trailing slashes are stripped.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|source| SeoError::InvalidSiteUrl {
            value: raw.to_string(),
            source,
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(SeoError::UnsupportedScheme(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join a site-relative path (`/diensten`) onto the base.
    pub fn join(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.0)
        } else {
            format!("{}/{path}", self.0)
        }
    }

    /// Host part, used for the robots.txt `Host:` line.
    pub fn host(&self) -> String {
        Url::parse(&self.0)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default()
    }

    /// Strip the base from an absolute URL, returning the site path.
    pub fn path_of<'a>(&self, loc: &'a str) -> Option<&'a str> {
        let rest = loc.strip_prefix(self.0.as_str())?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}

impl Default for SiteUrl {
    fn default() -> Self {
        Self(DEFAULT_SITE_URL.to_string())
    }
}

impl std::fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deployment environment controlling the robots policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Deployment {
    #[default]
    Production,
    Preview,
}

impl Deployment {
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("preview") => Deployment::Preview,
            _ => Deployment::Production,
        }
    }

    pub fn is_preview(self) -> bool {
        self == Deployment::Preview
    }
}

/// What the hosting runtime can do. Edge runtimes have no filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub filesystem: bool,
}

impl Capabilities {
    pub const NODE: Capabilities = Capabilities { filesystem: true };
    pub const EDGE: Capabilities = Capabilities { filesystem: false };
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::NODE
    }
}

/// Resolved configuration for one process.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub site_url: SiteUrl,
    pub deployment: Deployment,
    pub content_root: PathBuf,
    pub capabilities: Capabilities,
    pub listen: SocketAddr,
}

impl SiteConfig {
    /// Build configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Empty values are
    /// treated as unset so the fallback chain continues.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_url = non_empty(PUBLIC_SITE_URL_ENV)
            .or_else(|| non_empty(SITE_URL_ENV))
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
        let site_url = SiteUrl::parse(&raw_url)?;

        let deployment = Deployment::from_env_value(non_empty(DEPLOYMENT_ENV).as_deref());

        let content_root = non_empty(CONTENT_ROOT_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let listen_raw = non_empty(LISTEN_ENV).unwrap_or_else(|| DEFAULT_LISTEN.to_string());
        let listen = listen_raw
            .parse()
            .map_err(|source| SeoError::InvalidListenAddr {
                value: listen_raw.clone(),
                source,
            })?;

        Ok(Self {
            site_url,
            deployment,
            content_root,
            capabilities: Capabilities::default(),
            listen,
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: SiteUrl::default(),
            deployment: Deployment::Production,
            content_root: PathBuf::from("."),
            capabilities: Capabilities::default(),
            listen: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_site_url_fallback_chain() {
        let cfg = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.site_url.as_str(), DEFAULT_SITE_URL);

        let cfg = SiteConfig::from_lookup(lookup(&[(SITE_URL_ENV, "https://internal.test/")]))
            .unwrap();
        assert_eq!(cfg.site_url.as_str(), "https://internal.test");

        let cfg = SiteConfig::from_lookup(lookup(&[
            (SITE_URL_ENV, "https://internal.test"),
            (PUBLIC_SITE_URL_ENV, "https://public.test//"),
        ]))
        .unwrap();
        assert_eq!(cfg.site_url.as_str(), "https://public.test");
    }

    #[test]
    fn test_empty_env_value_continues_chain() {
        let cfg = SiteConfig::from_lookup(lookup(&[
            (PUBLIC_SITE_URL_ENV, "  "),
            (SITE_URL_ENV, "https://internal.test"),
        ]))
        .unwrap();
        assert_eq!(cfg.site_url.as_str(), "https://internal.test");
    }

    #[test]
    fn test_invalid_site_url_rejected() {
        assert!(SiteUrl::parse("not a url").is_err());
        assert!(matches!(
            SiteUrl::parse("ftp://example.com"),
            Err(SeoError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_deployment_flag() {
        let cfg = SiteConfig::from_lookup(lookup(&[(DEPLOYMENT_ENV, "preview")])).unwrap();
        assert!(cfg.deployment.is_preview());
        let cfg = SiteConfig::from_lookup(lookup(&[(DEPLOYMENT_ENV, "production")])).unwrap();
        assert_eq!(cfg.deployment, Deployment::Production);
    }

    #[test]
    fn test_join_and_path_of() {
        let site = SiteUrl::parse("https://example.com/").unwrap();
        assert_eq!(site.join("/diensten"), "https://example.com/diensten");
        assert_eq!(site.join("contact"), "https://example.com/contact");
        assert_eq!(site.path_of("https://example.com/"), Some("/"));
        assert_eq!(site.path_of("https://example.com"), Some("/"));
        assert_eq!(site.path_of("https://example.com/steden/breda"), Some("/steden/breda"));
        assert_eq!(site.path_of("https://example.community/x"), None);
        assert_eq!(site.host(), "example.com");
    }
}
