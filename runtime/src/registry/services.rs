//! Service pages under `/diensten`.

use super::lastmod::{LastModified, Ymd};
use super::{ChangeFrequency, StaticRoute};

const SERVICES_FALLBACK: Ymd = Ymd(2025, 10, 8);

pub static SERVICE_ROUTES: &[StaticRoute] = &[
    StaticRoute {
        path: "/diensten",
        priority: 0.95,
        change_frequency: ChangeFrequency::Weekly,
        last_modified: LastModified::File {
            artifact: "src/app/diensten/page.tsx",
            fallback: SERVICES_FALLBACK,
        },
    },
    StaticRoute {
        path: "/diensten/website-laten-maken",
        priority: 0.95,
        change_frequency: ChangeFrequency::Weekly,
        last_modified: LastModified::File {
            artifact: "src/app/diensten/website-laten-maken/page.tsx",
            fallback: SERVICES_FALLBACK,
        },
    },
    StaticRoute {
        path: "/diensten/webshop-laten-maken",
        priority: 0.95,
        change_frequency: ChangeFrequency::Weekly,
        last_modified: LastModified::File {
            artifact: "src/app/diensten/webshop-laten-maken/page.tsx",
            fallback: SERVICES_FALLBACK,
        },
    },
    StaticRoute {
        path: "/diensten/seo-optimalisatie",
        priority: 0.9,
        change_frequency: ChangeFrequency::Weekly,
        last_modified: LastModified::File {
            artifact: "src/app/diensten/seo-optimalisatie/page.tsx",
            fallback: SERVICES_FALLBACK,
        },
    },
    StaticRoute {
        path: "/diensten/3d-website-ervaringen",
        priority: 0.9,
        change_frequency: ChangeFrequency::Weekly,
        last_modified: LastModified::File {
            artifact: "src/app/diensten/3d-website-ervaringen/page.tsx",
            fallback: SERVICES_FALLBACK,
        },
    },
    StaticRoute {
        path: "/diensten/onderhoud-support",
        priority: 0.9,
        change_frequency: ChangeFrequency::Monthly,
        last_modified: LastModified::File {
            artifact: "src/app/diensten/onderhoud-support/page.tsx",
            fallback: SERVICES_FALLBACK,
        },
    },
];

pub const SERVICE_LOCALES: &[&str] = &["nl-NL", "nl"];

/// A service offered per city (`/steden/{city}/{service}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSubtype {
    pub slug: &'static str,
    pub name: &'static str,
}

pub static SERVICE_SUBTYPES: &[ServiceSubtype] = &[
    ServiceSubtype {
        slug: "website-laten-maken",
        name: "Website Laten Maken",
    },
    ServiceSubtype {
        slug: "webshop-laten-maken",
        name: "Webshop Laten Maken",
    },
    ServiceSubtype {
        slug: "seo-optimalisatie",
        name: "SEO Optimalisatie",
    },
    ServiceSubtype {
        slug: "3d-website-ervaringen",
        name: "3D Website Ervaringen",
    },
    ServiceSubtype {
        slug: "onderhoud-support",
        name: "Website Onderhoud & Support",
    },
];

pub fn service_subtype(slug: &str) -> Option<&'static ServiceSubtype> {
    SERVICE_SUBTYPES.iter().find(|s| s.slug == slug)
}
