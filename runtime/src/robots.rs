//! robots.txt: the served policy, its text rendering, and a parser used to
//! check sitemap URLs against the rendered rules.

use crate::config::{Deployment, SiteUrl};
use crate::sitemap::SitemapDocument;
use std::fmt::Write;

pub const ROBOTS_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// One `User-Agent` group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsGroup {
    pub user_agent: &'static str,
    pub allow: &'static [&'static str],
    pub disallow: &'static [&'static str],
    pub crawl_delay: Option<u32>,
}

/// The complete robots.txt content before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsPolicy {
    pub groups: Vec<RobotsGroup>,
    pub sitemaps: Vec<String>,
    pub host: Option<String>,
}

const SITE_SECTIONS: &[&str] = &[
    "/",
    "/diensten/",
    "/diensten/website-laten-maken",
    "/diensten/webshop-laten-maken",
    "/diensten/seo-optimalisatie",
    "/diensten/3d-website-ervaringen",
    "/diensten/onderhoud-support",
    "/contact/",
    "/werkwijze/",
    "/portfolio/",
    "/over-ons/",
    "/locaties/",
    "/privacy/",
    "/voorwaarden/",
];

const CRAWLABLE: &[&str] = &[
    "/",
    "/diensten/",
    "/diensten/website-laten-maken",
    "/diensten/webshop-laten-maken",
    "/diensten/seo-optimalisatie",
    "/diensten/3d-website-ervaringen",
    "/diensten/onderhoud-support",
    "/contact/",
    "/werkwijze/",
    "/portfolio/",
    "/over-ons/",
    "/locaties/",
    "/privacy/",
    "/voorwaarden/",
    "/sitemap*.xml",
    "/robots.txt",
];

const DEFAULT_DISALLOW: &[&str] = &[
    "/speeltuin/",
    "/_next/",
    "/api/",
    "/admin/",
    "*.json$",
    "/sw.js",
    "/offline.html",
    "/overzicht-site/",
    "/.well-known/",
    "/manifest.json",
];

const SEARCH_BOT_DISALLOW: &[&str] = &["/speeltuin/", "/_next/", "/api/", "/admin/", "/overzicht-site/"];

const SOCIAL_BOT_DISALLOW: &[&str] = &["/speeltuin/", "/_next/", "/api/", "/admin/"];

const PRODUCTION_GROUPS: &[RobotsGroup] = &[
    RobotsGroup {
        user_agent: "*",
        allow: CRAWLABLE,
        disallow: DEFAULT_DISALLOW,
        crawl_delay: Some(1),
    },
    RobotsGroup {
        user_agent: "Googlebot",
        allow: CRAWLABLE,
        disallow: SEARCH_BOT_DISALLOW,
        crawl_delay: None,
    },
    RobotsGroup {
        user_agent: "Bingbot",
        allow: SITE_SECTIONS,
        disallow: SEARCH_BOT_DISALLOW,
        crawl_delay: Some(2),
    },
    RobotsGroup {
        user_agent: "facebookexternalhit",
        allow: &["/"],
        disallow: SOCIAL_BOT_DISALLOW,
        crawl_delay: None,
    },
    RobotsGroup {
        user_agent: "Twitterbot",
        allow: &["/"],
        disallow: SOCIAL_BOT_DISALLOW,
        crawl_delay: None,
    },
    RobotsGroup {
        user_agent: "LinkedInBot",
        allow: &["/"],
        disallow: SOCIAL_BOT_DISALLOW,
        crawl_delay: None,
    },
];

/// Sitemaps advertised to crawlers. News and videos are only reachable
/// through the index.
const ADVERTISED_SITEMAPS: &[SitemapDocument] = &[
    SitemapDocument::Index,
    SitemapDocument::Main,
    SitemapDocument::Services,
    SitemapDocument::Locations,
    SitemapDocument::Images,
];

pub fn robots_policy(site: &SiteUrl, deployment: Deployment) -> RobotsPolicy {
    if deployment.is_preview() {
        // Preview deployments must never be indexed.
        return RobotsPolicy {
            groups: vec![RobotsGroup {
                user_agent: "*",
                allow: &[],
                disallow: &["/"],
                crawl_delay: None,
            }],
            sitemaps: Vec::new(),
            host: None,
        };
    }

    RobotsPolicy {
        groups: PRODUCTION_GROUPS.to_vec(),
        sitemaps: ADVERTISED_SITEMAPS
            .iter()
            .map(|doc| site.join(doc.path()))
            .collect(),
        host: Some(site.host()),
    }
}

impl RobotsPolicy {
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "User-Agent: {}", group.user_agent);
            for path in group.allow {
                let _ = writeln!(out, "Allow: {path}");
            }
            for path in group.disallow {
                let _ = writeln!(out, "Disallow: {path}");
            }
            if let Some(delay) = group.crawl_delay {
                let _ = writeln!(out, "Crawl-delay: {delay}");
            }
        }

        if self.host.is_some() || !self.sitemaps.is_empty() {
            out.push('\n');
        }
        if let Some(host) = &self.host {
            let _ = writeln!(out, "Host: {host}");
        }
        for sitemap in &self.sitemaps {
            let _ = writeln!(out, "Sitemap: {sitemap}");
        }
        out
    }
}

pub fn render_robots_txt(site: &SiteUrl, deployment: Deployment) -> String {
    robots_policy(site, deployment).render()
}

/// Rules that apply to one user agent after parsing.
#[derive(Debug, Clone, Default)]
pub struct RobotsRules {
    pub allowed: Vec<String>,
    pub disallowed: Vec<String>,
    pub crawl_delay: Option<f32>,
    pub sitemaps: Vec<String>,
    pub host: Option<String>,
}

impl RobotsRules {
    /// Longest matching pattern wins; ties go to `Allow`.
    pub fn is_allowed(&self, path: &str) -> bool {
        let longest = |patterns: &[String]| {
            patterns
                .iter()
                .filter(|p| path_matches(path, p))
                .map(String::len)
                .max()
        };
        match (longest(&self.allowed), longest(&self.disallowed)) {
            (_, None) => true,
            (None, Some(_)) => false,
            (Some(allow), Some(disallow)) => allow >= disallow,
        }
    }
}

/// Parse robots.txt for `user_agent`. A group naming the agent exactly
/// (case-insensitive) takes precedence over the `*` group.
pub fn parse_robots(txt: &str, user_agent: &str) -> RobotsRules {
    let ua_lower = user_agent.to_lowercase();
    let mut specific = RobotsRules::default();
    let mut wildcard = RobotsRules::default();
    let mut found_specific = false;

    let mut sitemaps = Vec::new();
    let mut host = None;

    // Consecutive User-Agent lines share one group.
    let mut group_agents: Vec<String> = Vec::new();
    let mut in_rules = false;

    for line in txt.lines() {
        let line = line.split('#').next().unwrap_or("").trim();
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        let value = value.trim();

        if key == "user-agent" {
            if in_rules {
                group_agents.clear();
                in_rules = false;
            }
            group_agents.push(value.to_lowercase());
            continue;
        }

        let target = if group_agents.iter().any(|ua| *ua == ua_lower) {
            found_specific = true;
            Some(&mut specific)
        } else if group_agents.iter().any(|ua| ua == "*") {
            Some(&mut wildcard)
        } else {
            None
        };

        match key.as_str() {
            "allow" | "disallow" | "crawl-delay" => {
                in_rules = true;
                let Some(rules) = target else { continue };
                match key.as_str() {
                    "allow" if !value.is_empty() => rules.allowed.push(value.to_string()),
                    "disallow" if !value.is_empty() => rules.disallowed.push(value.to_string()),
                    "crawl-delay" => {
                        if let Ok(delay) = value.parse::<f32>() {
                            rules.crawl_delay = Some(delay);
                        }
                    }
                    _ => {}
                }
            }
            "sitemap" if !value.is_empty() => sitemaps.push(value.to_string()),
            "host" if !value.is_empty() => host = Some(value.to_string()),
            _ => {}
        }
    }

    let mut rules = if found_specific { specific } else { wildcard };
    rules.sitemaps = sitemaps;
    rules.host = host;
    rules
}

/// `*` matches any run of characters; a trailing `$` anchors the end.
fn path_matches(path: &str, pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }
    let (pattern, anchored) = match pattern.strip_suffix('$') {
        Some(p) => (p, true),
        None => (pattern, false),
    };
    glob(path.as_bytes(), pattern.as_bytes(), anchored)
}

fn glob(path: &[u8], pattern: &[u8], anchored: bool) -> bool {
    match pattern.split_first() {
        None => !anchored || path.is_empty(),
        Some((b'*', rest)) => (0..=path.len()).any(|i| glob(&path[i..], rest, anchored)),
        Some((c, rest)) => path.first() == Some(c) && glob(&path[1..], rest, anchored),
    }
}
