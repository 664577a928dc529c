//! Root `<sitemapindex>` pointing at every category sitemap.

use super::xml::{format_date, XmlBuf, SITEMAP_NS};
use crate::registry::lastmod::{LastModified, Ymd};
use crate::registry::RouteRegistry;
use chrono::NaiveDate;

/// One `<sitemap>` child of the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub loc: String,
    pub lastmod: NaiveDate,
}

/// A category sitemap advertised by the index and the artifacts whose
/// mtimes determine its `lastmod`.
struct IndexedSitemap {
    path: &'static str,
    last_modified: LastModified,
}

const INDEX_FALLBACK: Ymd = Ymd(2025, 10, 8);

const INDEXED_SITEMAPS: &[IndexedSitemap] = &[
    IndexedSitemap {
        path: "/sitemap.xml",
        last_modified: LastModified::LatestOf {
            artifacts: &[
                "src/app/sitemap.ts",
                "src/app/page.tsx",
                "src/app/contact/page.tsx",
                "src/app/portfolio/page.tsx",
            ],
            fallback: INDEX_FALLBACK,
        },
    },
    IndexedSitemap {
        path: "/sitemap-services.xml",
        last_modified: LastModified::LatestOf {
            artifacts: &[
                "src/app/sitemap-services.xml/route.ts",
                "src/app/diensten/page.tsx",
                "src/app/diensten/website-laten-maken/page.tsx",
                "src/app/diensten/webshop-laten-maken/page.tsx",
                "src/app/diensten/seo-optimalisatie/page.tsx",
                "src/app/diensten/3d-website-ervaringen/page.tsx",
                "src/app/diensten/onderhoud-support/page.tsx",
            ],
            fallback: INDEX_FALLBACK,
        },
    },
    IndexedSitemap {
        path: "/sitemap-locations.xml",
        last_modified: LastModified::LatestOf {
            artifacts: &[
                "src/app/sitemap-locations.xml/route.ts",
                "src/app/locaties/page.tsx",
            ],
            fallback: INDEX_FALLBACK,
        },
    },
    IndexedSitemap {
        path: "/sitemap-images.xml",
        last_modified: LastModified::File {
            artifact: "src/app/sitemap-images.xml/route.ts",
            fallback: INDEX_FALLBACK,
        },
    },
    IndexedSitemap {
        path: "/sitemap-news.xml",
        last_modified: LastModified::File {
            artifact: "src/app/sitemap-news.xml/route.ts",
            fallback: INDEX_FALLBACK,
        },
    },
    IndexedSitemap {
        path: "/sitemap-videos.xml",
        last_modified: LastModified::File {
            artifact: "src/app/sitemap-videos.xml/route.ts",
            fallback: INDEX_FALLBACK,
        },
    },
];

/// Index entries for the served category sitemaps.
pub fn index_entries(registry: &RouteRegistry) -> Vec<IndexEntry> {
    INDEXED_SITEMAPS
        .iter()
        .map(|sitemap| IndexEntry {
            loc: registry.site().join(sitemap.path),
            lastmod: registry.resolver().resolve(&sitemap.last_modified),
        })
        .collect()
}

pub fn generate_sitemap_index_xml(entries: &[IndexEntry]) -> String {
    let mut xml = XmlBuf::new();
    xml.open_root("sitemapindex", &[("xmlns", SITEMAP_NS)]);
    for entry in entries {
        xml.open(1, "sitemap");
        xml.text(2, "loc", &entry.loc);
        xml.text(2, "lastmod", &format_date(entry.lastmod));
        xml.close(1, "sitemap");
    }
    xml.finish("sitemapindex")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteUrl;
    use crate::registry::lastmod::LastModifiedResolver;
    use std::fs;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_index_xml_shape() {
        let xml = generate_sitemap_index_xml(&[
            IndexEntry {
                loc: "https://example.com/sitemap.xml".into(),
                lastmod: date(2025, 1, 2),
            },
            IndexEntry {
                loc: "https://example.com/sitemap-news.xml?a=1&b=2".into(),
                lastmod: date(2025, 3, 4),
            },
        ]);
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
        assert_eq!(xml.matches("<sitemap>").count(), 2);
        assert!(xml.contains("<lastmod>2025-01-02</lastmod>"));
        assert!(xml.contains("sitemap-news.xml?a=1&amp;b=2"));
    }

    #[test]
    fn test_control_characters_are_dropped_from_loc() {
        let xml = generate_sitemap_index_xml(&[IndexEntry {
            loc: "https://example.com/a\u{1}b".into(),
            lastmod: date(2025, 1, 2),
        }]);
        assert!(!xml.contains('\u{1}'));
        assert!(xml.contains("<loc>https://example.com/ab</loc>"));
    }

    #[test]
    fn test_empty_index_is_well_formed() {
        let xml = generate_sitemap_index_xml(&[]);
        assert!(xml.contains("<sitemapindex"));
        assert!(xml.trim_end().ends_with("</sitemapindex>"));
        assert!(!xml.contains("<sitemap>"));
    }

    #[test]
    fn test_served_entries_use_latest_artifact_mtime() {
        let dir = tempdir().unwrap();
        let route = dir.path().join("src/app/sitemap-images.xml");
        fs::create_dir_all(&route).unwrap();
        fs::write(route.join("route.ts"), "export {}").unwrap();

        let today = date(2026, 3, 14);
        let registry = RouteRegistry::new(
            SiteUrl::parse("https://example.com").unwrap(),
            LastModifiedResolver::new(dir.path(), true, today),
        );
        let entries = index_entries(&registry);
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].loc, "https://example.com/sitemap.xml");

        let images = entries
            .iter()
            .find(|e| e.loc.ends_with("/sitemap-images.xml"))
            .unwrap();
        assert_ne!(images.lastmod, INDEX_FALLBACK.to_date());

        let videos = entries
            .iter()
            .find(|e| e.loc.ends_with("/sitemap-videos.xml"))
            .unwrap();
        assert_eq!(videos.lastmod, INDEX_FALLBACK.to_date());
    }
}
