//! Sanity checks over the registry and the rendered documents.

use crate::config::Deployment;
use crate::registry::{Category, RouteEntry, RouteRegistry};
use crate::robots::{parse_robots, render_robots_txt};
use crate::sitemap::{parse_sitemap_locs, SitemapDocument};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    #[error("invalid url {loc:?}")]
    InvalidUrl { loc: String },

    #[error("priority {priority} out of range for {loc}")]
    PriorityOutOfRange { loc: String, priority: f64 },

    #[error("duplicate path {path} in {category}")]
    DuplicatePath { category: &'static str, path: String },

    #[error("lastmod {lastmod} for {loc} is not a plausible date")]
    InvalidLastModified { loc: String, lastmod: NaiveDate },

    #[error("{document} is not well-formed xml: {message}")]
    MalformedDocument {
        document: &'static str,
        message: String,
    },

    #[error("{loc} is advertised in {document} but disallowed by robots.txt")]
    BlockedByRobots { document: &'static str, loc: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub checked: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.checked += other.checked;
        self.issues.extend(other.issues);
    }
}

/// URL shape, priority range and path uniqueness for one category's entries.
/// `today` bounds `lastmod`: later dates are rejected.
pub fn validate_sitemap_entries(
    category: Category,
    entries: &[RouteEntry],
    today: NaiveDate,
) -> ValidationReport {
    let mut report = ValidationReport {
        checked: entries.len(),
        issues: Vec::new(),
    };
    let mut seen = HashSet::new();

    for entry in entries {
        let url_ok = Url::parse(&entry.loc)
            .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
            .unwrap_or(false);
        if !url_ok {
            report.issues.push(ValidationIssue::InvalidUrl {
                loc: entry.loc.clone(),
            });
        }
        if !(0.0..=1.0).contains(&entry.priority) {
            report.issues.push(ValidationIssue::PriorityOutOfRange {
                loc: entry.loc.clone(),
                priority: entry.priority,
            });
        }
        if entry.last_modified == NaiveDate::MIN || entry.last_modified > today {
            report.issues.push(ValidationIssue::InvalidLastModified {
                loc: entry.loc.clone(),
                lastmod: entry.last_modified,
            });
        }
        if !seen.insert(entry.path.as_str()) {
            report.issues.push(ValidationIssue::DuplicatePath {
                category: category.as_str(),
                path: entry.path.clone(),
            });
        }
    }
    report
}

/// Validate every category, every rendered document, and, for production,
/// that no advertised URL is blocked by the served robots.txt.
pub fn validate_site(
    registry: &RouteRegistry,
    deployment: Deployment,
    now: DateTime<Utc>,
) -> ValidationReport {
    let mut report = ValidationReport::default();
    for category in Category::ALL {
        report.merge(validate_sitemap_entries(
            category,
            &registry.routes_for_category(category),
            registry.today(),
        ));
    }

    let robots = (!deployment.is_preview())
        .then(|| parse_robots(&render_robots_txt(registry.site(), deployment), "*"));

    for document in SitemapDocument::ALL {
        let xml = document.render(registry, now);
        match parse_sitemap_locs(&xml) {
            Ok(locs) => {
                let Some(rules) = &robots else { continue };
                for loc in locs {
                    let path = registry.site().path_of(&loc).unwrap_or("/");
                    if !rules.is_allowed(path) {
                        report.issues.push(ValidationIssue::BlockedByRobots {
                            document: document.name(),
                            loc,
                        });
                    }
                }
            }
            Err(e) => report.issues.push(ValidationIssue::MalformedDocument {
                document: document.name(),
                message: e.to_string(),
            }),
        }
    }
    report
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: &'static str,
    pub urls: usize,
}

/// URL counts across the sitemaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapStats {
    pub categories: Vec<CategoryCount>,
    pub image_pages: usize,
    pub images: usize,
    pub video_pages: usize,
    pub videos: usize,
    /// Sum over `categories`.
    pub total: usize,
}

pub fn sitemap_stats(registry: &RouteRegistry) -> SitemapStats {
    let categories: Vec<CategoryCount> = Category::ALL
        .into_iter()
        .map(|category| CategoryCount {
            category: category.as_str(),
            urls: registry.routes_for_category(category).len(),
        })
        .collect();
    let image_pages = registry.image_pages();
    let video_pages = registry.video_pages();
    SitemapStats {
        total: categories.iter().map(|c| c.urls).sum(),
        categories,
        image_pages: image_pages.len(),
        images: image_pages.iter().map(|p| p.images.len()).sum(),
        video_pages: video_pages.len(),
        videos: video_pages.iter().map(|p| p.videos.len()).sum(),
    }
}
