//! Blog posts and company updates exposed in `/sitemap-news.xml`.

use super::lastmod::{LastModified, Ymd};

/// Publisher name in `<news:publication>`.
pub const PUBLICATION_NAME: &str = "ProWeb Studio";
pub const PUBLICATION_LANGUAGE: &str = "nl";

/// Rolling window for news entries, in days before "now".
pub const NEWS_WINDOW_DAYS: i64 = 2;

/// Entries kept when nothing falls inside the window, so the feed never
/// goes empty.
pub const NEWS_FALLBACK_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewsArticle {
    pub path: &'static str,
    pub publication_date: Ymd,
    pub title: &'static str,
    pub keywords: &'static str,
    pub last_modified: LastModified,
}

pub static NEWS_ARTICLES: &[NewsArticle] = &[
    NewsArticle {
        path: "/blog/core-web-vitals-optimalisatie-2025",
        publication_date: Ymd(2025, 1, 15),
        title: "Core Web Vitals Optimalisatie: Complete Gids voor 2025",
        keywords: "Core Web Vitals, website optimalisatie, performance, SEO, Google ranking",
        last_modified: LastModified::File {
            artifact: "docs/CORE_WEB_VITALS_OPTIMIZATION_GUIDE.md",
            fallback: Ymd(2025, 1, 15),
        },
    },
    NewsArticle {
        path: "/blog/3d-websites-toekomst-webdesign",
        publication_date: Ymd(2025, 1, 10),
        title: "3D Websites: De Toekomst van Webdesign in Nederland",
        keywords: "3D websites, webdesign trends, Three.js, immersive experiences, web development",
        last_modified: LastModified::Literal(Ymd(2025, 1, 10)),
    },
    NewsArticle {
        path: "/blog/seo-strategie-nederlandse-bedrijven",
        publication_date: Ymd(2025, 1, 5),
        title: "SEO Strategie voor Nederlandse Bedrijven: Lokale Optimalisatie",
        keywords: "SEO Nederland, lokale SEO, Nederlandse markt, zoekmachine optimalisatie",
        last_modified: LastModified::File {
            artifact: "DUTCH_SEO_IMPLEMENTATION_SUMMARY.md",
            fallback: Ymd(2025, 1, 5),
        },
    },
    NewsArticle {
        path: "/blog/security-headers-website-beveiliging",
        publication_date: Ymd(2024, 12, 20),
        title: "Website Beveiliging: Complete Gids Security Headers 2025",
        keywords: "website beveiliging, security headers, CSP, HTTPS, web security",
        last_modified: LastModified::File {
            artifact: "docs/SECURITY_IMPLEMENTATION_SUMMARY.md",
            fallback: Ymd(2024, 12, 20),
        },
    },
    NewsArticle {
        path: "/blog/performance-optimalisatie-vercel",
        publication_date: Ymd(2024, 12, 15),
        title: "Performance Optimalisatie op Vercel: Best Practices",
        keywords: "Vercel optimalisatie, website performance, CDN, edge computing",
        last_modified: LastModified::File {
            artifact: "VERCEL_PERFORMANCE_OPTIMIZATION.md",
            fallback: Ymd(2024, 12, 15),
        },
    },
    NewsArticle {
        path: "/updates/nieuwe-diensten-2025",
        publication_date: Ymd(2025, 1, 1),
        title: "ProWeb Studio Nieuwe Diensten 2025: 3D Web Experiences",
        keywords: "ProWeb Studio, nieuwe diensten, 3D websites, web development Nederland",
        last_modified: LastModified::Literal(Ymd(2025, 1, 1)),
    },
    NewsArticle {
        path: "/updates/portfolio-update-december-2024",
        publication_date: Ymd(2024, 12, 31),
        title: "Portfolio Update: Nieuwe Projecten en Case Studies",
        keywords: "portfolio update, nieuwe projecten, case studies, web development",
        last_modified: LastModified::Literal(Ymd(2024, 12, 31)),
    },
];
