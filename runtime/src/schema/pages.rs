//! Page-level composition: which nodes each page emits.

use super::content::{generate_faq_schema, generate_howto_schema, guide, Guide, DEFAULT_FAQ};
use super::service::{
    catalog_entry, generate_service_list_schema, generate_service_schema, AreaServed,
    ServiceInput, SERVICE_CATALOG,
};
use super::site::{
    generate_breadcrumb_schema, generate_local_business_schema, generate_organization_schema,
    generate_webpage_schema, generate_website_schema, Crumb, WebPageInput,
};
use super::{compose, SchemaContext, SchemaNode};
use crate::error::SeoError;
use crate::registry::cities::{self, City};
use crate::registry::services::{self, ServiceSubtype};
use chrono::{Days, NaiveDate};
use serde_json::Value;
use std::str::FromStr;

/// Offers stay valid this long after the render day.
pub const OFFER_VALIDITY_DAYS: u64 = 90;

/// Plain pages with a title and breadcrumb label but no extra nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPage {
    pub path: &'static str,
    pub title: &'static str,
    pub crumb: &'static str,
}

pub static STATIC_PAGES: &[StaticPage] = &[
    StaticPage {
        path: "/werkwijze",
        title: "Werkwijze - Van intake tot launch",
        crumb: "Werkwijze",
    },
    StaticPage {
        path: "/over-ons",
        title: "Over ons - ProWeb Studio team",
        crumb: "Over Ons",
    },
    StaticPage {
        path: "/contact",
        title: "Contact - Neem contact op met ProWeb Studio",
        crumb: "Contact",
    },
    StaticPage {
        path: "/portfolio",
        title: "Portfolio - Projecten van ProWeb Studio",
        crumb: "Portfolio",
    },
    StaticPage {
        path: "/privacy",
        title: "Privacy - Privacybeleid ProWeb Studio",
        crumb: "Privacybeleid",
    },
    StaticPage {
        path: "/voorwaarden",
        title: "Voorwaarden - Algemene voorwaarden ProWeb Studio",
        crumb: "Algemene Voorwaarden",
    },
];

/// A page that carries structured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaPage {
    Home,
    Services,
    ServiceDetail(&'static ServiceSubtype),
    City(&'static City),
    Static(&'static StaticPage),
}

impl SchemaPage {
    pub fn path(&self) -> String {
        match self {
            SchemaPage::Home => "/".to_string(),
            SchemaPage::Services => "/diensten".to_string(),
            SchemaPage::ServiceDetail(service) => format!("/diensten/{}", service.slug),
            SchemaPage::City(city) => format!("/steden/{}", city.slug),
            SchemaPage::Static(page) => page.path.to_string(),
        }
    }

    /// Every page with structured data.
    pub fn all() -> Vec<SchemaPage> {
        let mut pages = vec![SchemaPage::Home, SchemaPage::Services];
        pages.extend(services::SERVICE_SUBTYPES.iter().map(SchemaPage::ServiceDetail));
        pages.extend(cities::CITIES.iter().map(SchemaPage::City));
        pages.extend(STATIC_PAGES.iter().map(SchemaPage::Static));
        pages
    }
}

impl FromStr for SchemaPage {
    type Err = SeoError;

    /// Accepts a site path (`/diensten/seo-optimalisatie`) with or without the
    /// leading slash, or `home`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim().trim_matches('/');
        let unknown = || SeoError::UnknownPage(s.to_string());
        let page = match path.split_once('/') {
            None if path.is_empty() || path == "home" => SchemaPage::Home,
            None if path == "diensten" => SchemaPage::Services,
            None => STATIC_PAGES
                .iter()
                .find(|p| p.path.trim_start_matches('/') == path)
                .map(SchemaPage::Static)
                .ok_or_else(unknown)?,
            Some(("diensten", slug)) => services::service_subtype(slug)
                .map(SchemaPage::ServiceDetail)
                .ok_or_else(unknown)?,
            Some(("steden", slug)) => cities::city(slug)
                .map(SchemaPage::City)
                .ok_or_else(unknown)?,
            Some(_) => return Err(unknown()),
        };
        Ok(page)
    }
}

/// Nodes for `page`, in emission order.
pub fn page_schemas(ctx: &SchemaContext, page: SchemaPage, today: NaiveDate) -> Vec<SchemaNode> {
    let url = ctx.url(&page.path());
    let home = Crumb::new("Home", ctx.url("/"));
    let diensten = Crumb::new("Diensten", ctx.url("/diensten"));
    let valid_until = today.checked_add_days(Days::new(OFFER_VALIDITY_DAYS));

    let (title, description, crumbs, extra): (String, Option<String>, Vec<Crumb>, Vec<SchemaNode>) =
        match page {
            SchemaPage::Home => (
                format!("{} - {}", ctx.identity.name, ctx.identity.tagline),
                Some(ctx.identity.description.to_string()),
                vec![home],
                vec![
                    generate_website_schema(ctx),
                    generate_local_business_schema(ctx, None),
                    generate_faq_schema(ctx, &ctx.node_id("faq"), DEFAULT_FAQ),
                    generate_howto_schema(ctx, &guide(ctx, Guide::Website)),
                ],
            ),
            SchemaPage::Services => {
                let services: Vec<ServiceInput> = SERVICE_CATALOG
                    .iter()
                    .map(|entry| entry.to_input(ctx, valid_until))
                    .collect();
                (
                    "Diensten - Webdesign, 3D websites & SEO".to_string(),
                    None,
                    vec![home, diensten],
                    vec![
                        generate_service_list_schema(ctx, &services),
                        generate_faq_schema(
                            ctx,
                            &format!("{}#faq", ctx.url("/diensten")),
                            DEFAULT_FAQ,
                        ),
                    ],
                )
            }
            SchemaPage::ServiceDetail(service) => {
                let mut extra = Vec::new();
                if let Some(entry) = catalog_entry(service.slug) {
                    extra.push(generate_service_schema(ctx, &entry.to_input(ctx, valid_until)));
                }
                if let Some(kind) = service_guide(service.slug) {
                    extra.push(generate_howto_schema(ctx, &guide(ctx, kind)));
                }
                (
                    format!("{} | {}", service.name, ctx.identity.name),
                    catalog_entry(service.slug).map(|e| e.description.to_string()),
                    vec![home, diensten, Crumb::new(service.name, url.clone())],
                    extra,
                )
            }
            SchemaPage::City(city) => (
                format!("Website laten maken in {} | {}", city.name, ctx.identity.name),
                Some(format!(
                    "Professionele websites en webshops voor bedrijven in {}, {}.",
                    city.name, city.province
                )),
                vec![
                    home,
                    Crumb::new("Locaties", ctx.url("/locaties")),
                    Crumb::new(city.name, url.clone()),
                ],
                vec![
                    generate_local_business_schema(ctx, Some(city.name)),
                    city_service(ctx, city, &url),
                ],
            ),
            SchemaPage::Static(static_page) => {
                let mut extra = Vec::new();
                if static_page.path == "/werkwijze" {
                    extra.push(generate_howto_schema(ctx, &guide(ctx, Guide::Website)));
                }
                (
                    static_page.title.to_string(),
                    None,
                    vec![home, Crumb::new(static_page.crumb, url.clone())],
                    extra,
                )
            }
        };

    let breadcrumb = generate_breadcrumb_schema(ctx, &crumbs);
    let mut nodes = vec![
        generate_organization_schema(ctx),
        generate_webpage_schema(
            ctx,
            &WebPageInput {
                title,
                description,
                url,
                has_breadcrumb: breadcrumb.is_some(),
            },
        ),
    ];
    nodes.extend(breadcrumb);
    nodes.extend(extra);
    nodes
}

/// The page's complete JSON-LD document.
pub fn page_json_ld(ctx: &SchemaContext, page: SchemaPage, today: NaiveDate) -> Option<Value> {
    compose(page_schemas(ctx, page, today))
}

fn service_guide(slug: &str) -> Option<Guide> {
    match slug {
        "website-laten-maken" => Some(Guide::Website),
        "webshop-laten-maken" => Some(Guide::Webshop),
        "seo-optimalisatie" => Some(Guide::Seo),
        _ => None,
    }
}

fn city_service(ctx: &SchemaContext, city: &'static City, url: &str) -> SchemaNode {
    generate_service_schema(
        ctx,
        &ServiceInput {
            name: format!("Website laten maken {}", city.name),
            description: format!(
                "Webdesign, webshops en SEO voor ondernemers in {}",
                city.name
            ),
            service_type: "Web Development".to_string(),
            url: url.to_string(),
            area_served: vec![AreaServed::City(city.name)],
            price_range: None,
            offers: Vec::new(),
            offers_valid_until: None,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteUrl;
    use std::collections::HashSet;

    fn ctx() -> SchemaContext {
        SchemaContext::new(SiteUrl::parse("https://prowebstudio.nl").unwrap())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn types(nodes: &[SchemaNode]) -> Vec<&str> {
        nodes.iter().filter_map(|n| n.schema_type()).collect()
    }

    #[test]
    fn test_parse_pages() {
        assert_eq!("/".parse::<SchemaPage>().unwrap(), SchemaPage::Home);
        assert_eq!("home".parse::<SchemaPage>().unwrap(), SchemaPage::Home);
        assert_eq!("/diensten".parse::<SchemaPage>().unwrap(), SchemaPage::Services);
        assert!(matches!(
            "diensten/seo-optimalisatie".parse::<SchemaPage>(),
            Ok(SchemaPage::ServiceDetail(s)) if s.slug == "seo-optimalisatie"
        ));
        assert!(matches!(
            "/steden/den-haag/".parse::<SchemaPage>(),
            Ok(SchemaPage::City(c)) if c.name == "Den Haag"
        ));
        assert!(matches!(
            "/werkwijze".parse::<SchemaPage>(),
            Ok(SchemaPage::Static(_))
        ));
        for bad in ["/steden/atlantis", "/blog/x", "/onbekend", "/diensten/x/y"] {
            assert!(
                matches!(bad.parse::<SchemaPage>(), Err(SeoError::UnknownPage(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_home_nodes() {
        let nodes = page_schemas(&ctx(), SchemaPage::Home, today());
        assert_eq!(
            types(&nodes),
            [
                "Organization",
                "WebPage",
                "BreadcrumbList",
                "WebSite",
                "LocalBusiness",
                "FAQPage",
                "HowTo"
            ]
        );
    }

    #[test]
    fn test_service_detail_has_priced_service() {
        let page = "/diensten/website-laten-maken".parse().unwrap();
        let nodes = page_schemas(&ctx(), page, today());
        let service = nodes
            .iter()
            .find(|n| n.schema_type() == Some("Service"))
            .unwrap();
        assert_eq!(
            service.get("priceRange").and_then(Value::as_str),
            Some("€2500-€25000 incl. 21% BTW")
        );
        let offers = &service.get("hasOfferCatalog").unwrap()["itemListElement"];
        assert_eq!(offers[0]["priceValidUntil"], "2026-06-12");
    }

    #[test]
    fn test_city_page_is_scoped_to_city() {
        let page = "/steden/utrecht".parse().unwrap();
        let nodes = page_schemas(&ctx(), page, today());
        let business = nodes
            .iter()
            .find(|n| n.schema_type() == Some("LocalBusiness"))
            .unwrap();
        assert_eq!(business.get("areaServed").unwrap()["name"], "Utrecht");
        let crumbs = nodes
            .iter()
            .find(|n| n.schema_type() == Some("BreadcrumbList"))
            .unwrap();
        assert_eq!(crumbs.get("itemListElement").unwrap().as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_every_page_composes_into_a_graph() {
        for page in SchemaPage::all() {
            let value = page_json_ld(&ctx(), page, today()).unwrap();
            assert_eq!(value["@context"], "https://schema.org", "{}", page.path());
            let graph = value["@graph"].as_array().unwrap();
            assert!(graph.iter().all(|n| n.get("@context").is_none()));

            let ids: Vec<&str> = graph.iter().filter_map(|n| n["@id"].as_str()).collect();
            let unique: HashSet<&str> = ids.iter().copied().collect();
            assert_eq!(ids.len(), unique.len(), "duplicate @id on {}", page.path());
        }
    }
}
