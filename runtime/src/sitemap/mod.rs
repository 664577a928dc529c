//! Sitemap documents: the index plus one generator per category.
//!
//! Generators are pure functions of a [`RouteRegistry`] snapshot and the
//! request time. The same registry data on the same calendar day yields
//! byte-identical output.

pub mod index;
pub mod media;
pub mod news;
pub mod urlset;
pub mod xml;

use crate::error::SeoError;
use crate::registry::{Category, RouteRegistry};
use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use std::str::FromStr;
use tracing::debug;

pub const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// Every XML document served by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SitemapDocument {
    Index,
    Main,
    Services,
    Locations,
    News,
    Images,
    Videos,
}

impl SitemapDocument {
    pub const ALL: [SitemapDocument; 7] = [
        SitemapDocument::Index,
        SitemapDocument::Main,
        SitemapDocument::Services,
        SitemapDocument::Locations,
        SitemapDocument::News,
        SitemapDocument::Images,
        SitemapDocument::Videos,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SitemapDocument::Index => "index",
            SitemapDocument::Main => "main",
            SitemapDocument::Services => "services",
            SitemapDocument::Locations => "locations",
            SitemapDocument::News => "news",
            SitemapDocument::Images => "images",
            SitemapDocument::Videos => "videos",
        }
    }

    /// URL path the document is served at.
    pub fn path(self) -> &'static str {
        match self {
            SitemapDocument::Index => "/sitemap-index.xml",
            SitemapDocument::Main => "/sitemap.xml",
            SitemapDocument::Services => "/sitemap-services.xml",
            SitemapDocument::Locations => "/sitemap-locations.xml",
            SitemapDocument::News => "/sitemap-news.xml",
            SitemapDocument::Images => "/sitemap-images.xml",
            SitemapDocument::Videos => "/sitemap-videos.xml",
        }
    }

    /// Shared-cache lifetime in seconds.
    pub fn ttl_seconds(self) -> u32 {
        match self {
            SitemapDocument::Locations => 7200,
            SitemapDocument::Images | SitemapDocument::Videos => 86_400,
            _ => 3600,
        }
    }

    /// Whether rendering reads artifact mtimes from disk.
    pub fn requires_filesystem(self) -> bool {
        matches!(
            self,
            SitemapDocument::Index | SitemapDocument::Services | SitemapDocument::News
        )
    }

    /// Registry category backing this document, if it is a plain url list.
    pub fn category(self) -> Option<Category> {
        match self {
            SitemapDocument::Main => Some(Category::Main),
            SitemapDocument::Services => Some(Category::Services),
            SitemapDocument::Locations => Some(Category::Locations),
            SitemapDocument::News => Some(Category::News),
            _ => None,
        }
    }

    pub fn render(self, registry: &RouteRegistry, now: DateTime<Utc>) -> String {
        let xml = match self {
            SitemapDocument::Index => {
                index::generate_sitemap_index_xml(&index::index_entries(registry))
            }
            SitemapDocument::Main => {
                urlset::generate_urlset_xml(&registry.routes_for_category(Category::Main))
            }
            SitemapDocument::Services => {
                urlset::generate_urlset_xml(&registry.routes_for_category(Category::Services))
            }
            SitemapDocument::Locations => {
                urlset::generate_urlset_xml(&registry.routes_for_category(Category::Locations))
            }
            SitemapDocument::News => {
                let selected = news::select_news_entries(registry.news_entries(), now);
                news::generate_news_sitemap_xml(&selected)
            }
            SitemapDocument::Images => media::generate_image_sitemap_xml(&registry.image_pages()),
            SitemapDocument::Videos => media::generate_video_sitemap_xml(&registry.video_pages()),
        };
        debug!(document = self.name(), bytes = xml.len(), "rendered sitemap");
        xml
    }
}

impl FromStr for SitemapDocument {
    type Err = SeoError;

    /// Accepts a short name (`services`) or the served path
    /// (`/sitemap-services.xml`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SitemapDocument::ALL
            .into_iter()
            .find(|doc| {
                doc.name().eq_ignore_ascii_case(wanted)
                    || doc.path() == wanted
                    || doc.path().trim_start_matches('/') == wanted
            })
            .ok_or_else(|| SeoError::UnknownDocument(s.to_string()))
    }
}

/// Read back every `<loc>` of a sitemap or index document.
///
/// Fails on malformed XML, so it doubles as a well-formedness check.
pub fn parse_sitemap_locs(xml: &str) -> Result<Vec<String>, quick_xml::Error> {
    let mut locs = Vec::new();
    let mut in_loc = false;

    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => in_loc = e.name().as_ref() == b"loc",
            Event::Text(ref e) if in_loc => {
                locs.push(e.unescape()?.trim().to_string());
            }
            Event::End(_) => in_loc = false,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(locs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteUrl;
    use crate::registry::lastmod::LastModifiedResolver;
    use chrono::{NaiveDate, TimeZone};

    fn registry() -> RouteRegistry {
        RouteRegistry::new(
            SiteUrl::parse("https://example.com").unwrap(),
            LastModifiedResolver::new(
                "/nonexistent-content-root",
                true,
                NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            ),
        )
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_every_document_is_well_formed() {
        let reg = registry();
        for doc in SitemapDocument::ALL {
            let xml = doc.render(&reg, now());
            let locs = parse_sitemap_locs(&xml)
                .unwrap_or_else(|e| panic!("{} is malformed: {e}", doc.name()));
            assert!(!locs.is_empty(), "{} has no <loc>", doc.name());
            assert!(locs.iter().all(|l| l.starts_with("https://example.com/")));
        }
    }

    #[test]
    fn test_one_url_per_registry_entry() {
        let reg = registry();
        for doc in [
            SitemapDocument::Main,
            SitemapDocument::Services,
            SitemapDocument::Locations,
        ] {
            let category = doc.category().unwrap();
            let xml = doc.render(&reg, now());
            let entries = reg.routes_for_category(category);
            assert_eq!(xml.matches("<url>").count(), entries.len(), "{}", doc.name());
            let locs = parse_sitemap_locs(&xml).unwrap();
            for entry in &entries {
                assert!(locs.contains(&entry.loc), "{} missing {}", doc.name(), entry.loc);
            }
        }
    }

    /// `(loc, lastmod)` for each `<url>` of a urlset.
    fn url_pairs(xml: &str) -> Vec<(String, String)> {
        let mut reader = quick_xml::Reader::from_str(xml);
        reader.config_mut().trim_text(true);
        let mut pairs = Vec::new();
        let (mut field, mut loc, mut lastmod) = (Vec::new(), String::new(), String::new());
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf).unwrap() {
                Event::Start(e) => field = e.name().as_ref().to_vec(),
                Event::Text(e) => {
                    let text = e.unescape().unwrap().to_string();
                    match field.as_slice() {
                        b"loc" => loc = text,
                        b"lastmod" => lastmod = text,
                        _ => {}
                    }
                }
                Event::End(e) => {
                    if e.name().as_ref() == b"url" {
                        pairs.push((std::mem::take(&mut loc), std::mem::take(&mut lastmod)));
                    }
                    field.clear();
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }
        pairs
    }

    #[test]
    fn test_emitted_urls_resolve_to_registry_entries() {
        let reg = registry();
        for doc in [
            SitemapDocument::Main,
            SitemapDocument::Services,
            SitemapDocument::Locations,
            SitemapDocument::News,
        ] {
            let category = doc.category().unwrap();
            let pairs = url_pairs(&doc.render(&reg, now()));
            assert!(!pairs.is_empty(), "{}", doc.name());
            for (loc, lastmod) in pairs {
                let entry = reg
                    .find_by_loc(category, &loc)
                    .unwrap_or_else(|| panic!("{} emits unknown {loc}", doc.name()));
                assert_eq!(xml::format_date(entry.last_modified), lastmod, "{loc}");
            }
        }
    }

    #[test]
    fn test_render_is_idempotent_within_a_day() {
        let reg = registry();
        let later = Utc.with_ymd_and_hms(2026, 3, 14, 23, 59, 0).unwrap();
        for doc in SitemapDocument::ALL {
            assert_eq!(doc.render(&reg, now()), doc.render(&reg, later), "{}", doc.name());
        }
    }

    #[test]
    fn test_news_falls_back_to_five() {
        let xml = SitemapDocument::News.render(&registry(), now());
        assert_eq!(xml.matches("<news:news>").count(), 5);
        let locs = parse_sitemap_locs(&xml).unwrap();
        assert_eq!(
            locs[0],
            "https://example.com/blog/core-web-vitals-optimalisatie-2025"
        );
    }

    #[test]
    fn test_index_lists_six_category_sitemaps() {
        let locs =
            parse_sitemap_locs(&SitemapDocument::Index.render(&registry(), now())).unwrap();
        assert_eq!(locs.len(), 6);
        assert!(!locs.iter().any(|l| l.ends_with("/sitemap-index.xml")));
    }

    #[test]
    fn test_parse_document_names() {
        assert_eq!("services".parse::<SitemapDocument>().unwrap(), SitemapDocument::Services);
        assert_eq!("/sitemap.xml".parse::<SitemapDocument>().unwrap(), SitemapDocument::Main);
        assert_eq!("sitemap-videos.xml".parse::<SitemapDocument>().unwrap(), SitemapDocument::Videos);
        assert!(matches!(
            "robots".parse::<SitemapDocument>(),
            Err(SeoError::UnknownDocument(_))
        ));
    }

    #[test]
    fn test_cache_lifetimes() {
        assert_eq!(SitemapDocument::Locations.ttl_seconds(), 7200);
        assert_eq!(SitemapDocument::News.ttl_seconds(), 3600);
        assert_eq!(SitemapDocument::Images.ttl_seconds(), 86_400);
        assert!(SitemapDocument::Services.requires_filesystem());
        assert!(!SitemapDocument::Locations.requires_filesystem());
    }

    #[test]
    fn test_malformed_xml_is_rejected() {
        assert!(parse_sitemap_locs("<urlset><url><loc>x</url></urlset>").is_err());
    }
}
