//! Top-level pages listed in `/sitemap.xml`.
//!
//! `/speeltuin` and the internal overview pages are noindex and stay out.

use super::lastmod::{LastModified, Ymd};
use super::{ChangeFrequency, StaticRoute};

pub static MAIN_PAGES: &[StaticRoute] = &[
    StaticRoute {
        path: "/",
        priority: 1.0,
        change_frequency: ChangeFrequency::Daily,
        last_modified: LastModified::Today,
    },
    StaticRoute {
        path: "/diensten",
        priority: 0.9,
        change_frequency: ChangeFrequency::Weekly,
        last_modified: LastModified::Literal(Ymd(2025, 9, 20)),
    },
    StaticRoute {
        path: "/contact",
        priority: 0.9,
        change_frequency: ChangeFrequency::Monthly,
        last_modified: LastModified::Literal(Ymd(2025, 9, 15)),
    },
    StaticRoute {
        path: "/portfolio",
        priority: 0.9,
        change_frequency: ChangeFrequency::Weekly,
        last_modified: LastModified::Today,
    },
    StaticRoute {
        path: "/werkwijze",
        priority: 0.8,
        change_frequency: ChangeFrequency::Monthly,
        last_modified: LastModified::Literal(Ymd(2025, 9, 10)),
    },
    StaticRoute {
        path: "/over-ons",
        priority: 0.8,
        change_frequency: ChangeFrequency::Monthly,
        last_modified: LastModified::Literal(Ymd(2025, 9, 5)),
    },
    StaticRoute {
        path: "/privacy",
        priority: 0.4,
        change_frequency: ChangeFrequency::Yearly,
        last_modified: LastModified::Literal(Ymd(2025, 8, 1)),
    },
    StaticRoute {
        path: "/voorwaarden",
        priority: 0.4,
        change_frequency: ChangeFrequency::Yearly,
        last_modified: LastModified::Literal(Ymd(2025, 8, 1)),
    },
];

pub const MAIN_LOCALES: &[&str] = &["nl-NL"];
