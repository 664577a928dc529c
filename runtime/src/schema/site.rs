//! Site-level nodes: Organization, WebSite, WebPage, BreadcrumbList and
//! LocalBusiness.

use super::{non_empty, opt, reference, SchemaContext, SchemaNode};
use serde_json::{json, Value};

fn netherlands(ctx: &SchemaContext) -> Value {
    json!({
        "@type": "Place",
        "name": ctx.identity.country_name,
        "address": {
            "@type": "PostalAddress",
            "addressCountry": ctx.identity.country_code,
        },
    })
}

fn social_profiles(ctx: &SchemaContext) -> Option<Value> {
    non_empty(ctx.identity.social_profiles.to_vec())
}

pub fn generate_organization_schema(ctx: &SchemaContext) -> SchemaNode {
    let id = &ctx.identity;
    let logo_url = ctx.url(id.logo_path);
    SchemaNode::new("Organization")
        .with_id(ctx.organization_id())
        .with("name", id.name)
        .with("alternateName", id.alternate_names.first().copied().unwrap_or(id.name))
        .with("description", id.description)
        .with("inLanguage", id.language)
        .with("url", ctx.url("/"))
        .with(
            "logo",
            json!({
                "@type": "ImageObject",
                "@id": ctx.node_id("logo"),
                "url": logo_url,
                "contentUrl": logo_url,
                "width": 600,
                "height": 60,
                "caption": format!("{} logo", id.name),
            }),
        )
        .with("email", id.email)
        .with("telephone", id.telephone)
        .with(
            "address",
            json!({
                "@type": "PostalAddress",
                "addressCountry": id.country_code,
                "addressRegion": id.region,
            }),
        )
        .with("areaServed", netherlands(ctx))
        .with_optional([("sameAs", social_profiles(ctx))])
        .with(
            "contactPoint",
            json!([{
                "@type": "ContactPoint",
                "telephone": id.telephone,
                "email": id.email,
                "contactType": "Customer Service",
                "areaServed": id.country_code,
                "availableLanguage": ["nl", "en"],
                "hoursAvailable": {
                    "@type": "OpeningHoursSpecification",
                    "dayOfWeek": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
                    "opens": "09:00",
                    "closes": "18:00",
                },
            }]),
        )
}

pub fn generate_website_schema(ctx: &SchemaContext) -> SchemaNode {
    let id = &ctx.identity;
    SchemaNode::new("WebSite")
        .with_id(ctx.website_id())
        .with("name", id.name)
        .with("alternateName", id.alternate_names.to_vec())
        .with("description", id.description)
        .with("url", ctx.url("/"))
        .with("inLanguage", id.language)
        .with("publisher", reference(&ctx.organization_id()))
        .with(
            "potentialAction",
            json!({
                "@type": "SearchAction",
                "target": {
                    "@type": "EntryPoint",
                    "urlTemplate": format!("{}?q={{search_term_string}}", ctx.url("/zoeken")),
                },
                "query-input": "required name=search_term_string",
            }),
        )
}

#[derive(Debug, Clone, Default)]
pub struct WebPageInput {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub has_breadcrumb: bool,
}

pub fn generate_webpage_schema(ctx: &SchemaContext, input: &WebPageInput) -> SchemaNode {
    SchemaNode::new("WebPage")
        .with_id(format!("{}#webpage", input.url))
        .with("name", input.title.as_str())
        .with_optional([("description", opt(input.description.clone()))])
        .with("url", input.url.as_str())
        .with("inLanguage", ctx.identity.language)
        .with("isPartOf", reference(&ctx.website_id()))
        .with("about", reference(&ctx.organization_id()))
        .with("publisher", reference(&ctx.organization_id()))
        .with(
            "mainContentOfPage",
            json!({"@type": "WebPageElement", "cssSelector": "main"}),
        )
        .with_optional([(
            "breadcrumb",
            input
                .has_breadcrumb
                .then(|| reference(&format!("{}#breadcrumb", input.url))),
        )])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub name: String,
    pub url: String,
}

impl Crumb {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// `None` for an empty trail; the node id derives from the last crumb.
pub fn generate_breadcrumb_schema(ctx: &SchemaContext, items: &[Crumb]) -> Option<SchemaNode> {
    let current = items.last()?;
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(i, crumb)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": crumb.name,
                "item": {
                    "@type": "WebPage",
                    "@id": crumb.url,
                    "name": crumb.name,
                    "url": crumb.url,
                },
            })
        })
        .collect();
    Some(
        SchemaNode::new("BreadcrumbList")
            .with_id(format!("{}#breadcrumb", current.url))
            .with("inLanguage", ctx.identity.language)
            .with("itemListElement", elements),
    )
}

/// LocalBusiness, optionally scoped to one city.
pub fn generate_local_business_schema(ctx: &SchemaContext, city: Option<&str>) -> SchemaNode {
    let id = &ctx.identity;
    let (node_id, area_served) = match city {
        Some(city) => (
            ctx.node_id(&format!("localbusiness-{}", slugify(city))),
            json!({"@type": "City", "name": city}),
        ),
        None => (ctx.node_id("localbusiness"), netherlands(ctx)),
    };
    SchemaNode::new("LocalBusiness")
        .with_id(node_id)
        .with("name", id.name)
        .with("description", id.description)
        .with("url", ctx.url("/"))
        .with("telephone", id.telephone)
        .with("email", id.email)
        .with("priceRange", "$$")
        .with("openingHours", id.opening_hours)
        .with(
            "address",
            json!({
                "@type": "PostalAddress",
                "addressLocality": id.locality,
                "addressRegion": id.region,
                "addressCountry": id.country_code,
            }),
        )
        .with("areaServed", area_served)
        .with("parentOrganization", reference(&ctx.organization_id()))
        .with_optional([("sameAs", social_profiles(ctx))])
}

fn slugify(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}
