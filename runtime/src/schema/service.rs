//! Service nodes with Dutch-market price labelling.
//!
//! Price strings carry the VAT (BTW) treatment explicitly, e.g.
//! `€2500-€25000 incl. 21% BTW`. These labels are published as-is.

use super::{non_empty, opt, reference, SchemaContext, SchemaNode};
use chrono::NaiveDate;
use serde_json::{json, Value};

/// Dutch standard VAT rate, percent.
pub const DUTCH_VAT_RATE: u32 = 21;
pub const DEFAULT_CURRENCY: &str = "EUR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u32,
    pub max: Option<u32>,
    pub currency: &'static str,
    pub vat_rate: u32,
}

impl PriceRange {
    /// `€{min}-€{max} incl. {vat}% BTW`, or `€{min}+ incl. {vat}% BTW`.
    pub fn label(&self) -> String {
        match self.max {
            Some(max) => format!("€{}-€{max} incl. {}% BTW", self.min, self.vat_rate),
            None => format!("€{}+ incl. {}% BTW", self.min, self.vat_rate),
        }
    }

    fn aggregate_offer(&self) -> Value {
        let node = SchemaNode::new("AggregateOffer")
            .with("priceCurrency", self.currency)
            .with("lowPrice", self.min)
            .with_optional([("highPrice", opt(self.max))])
            .with(
                "priceSpecification",
                json!({
                    "@type": "PriceSpecification",
                    "price": self.min,
                    "priceCurrency": self.currency,
                    "valueAddedTaxIncluded": true,
                    "valueAddedTaxRate": self.vat_rate,
                }),
            );
        node.into_value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffer {
    pub name: &'static str,
    pub price: u32,
    pub description: &'static str,
}

/// `€{price} incl. 21% BTW`.
pub fn offer_price_label(price: u32) -> String {
    format!("€{price} incl. {DUTCH_VAT_RATE}% BTW")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaServed {
    Country(&'static str),
    City(&'static str),
}

impl AreaServed {
    fn to_value(self) -> Value {
        match self {
            AreaServed::Country(name) => json!({"@type": "Country", "name": name}),
            AreaServed::City(name) => json!({"@type": "City", "name": name}),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceInput {
    pub name: String,
    pub description: String,
    pub service_type: String,
    pub url: String,
    pub area_served: Vec<AreaServed>,
    pub price_range: Option<PriceRange>,
    pub offers: Vec<ServiceOffer>,
    pub offers_valid_until: Option<NaiveDate>,
}

pub fn generate_service_schema(ctx: &SchemaContext, input: &ServiceInput) -> SchemaNode {
    let areas: Vec<Value> = input.area_served.iter().map(|a| a.to_value()).collect();
    let valid_until = input
        .offers_valid_until
        .map(|d| d.format("%Y-%m-%d").to_string());

    let catalog = (!input.offers.is_empty()).then(|| {
        let items: Vec<Value> = input
            .offers
            .iter()
            .enumerate()
            .map(|(i, offer)| {
                SchemaNode::new("Offer")
                    .with("position", i + 1)
                    .with("name", offer.name)
                    .with("description", offer.description)
                    .with("price", offer.price)
                    .with("priceCurrency", DEFAULT_CURRENCY)
                    .with_optional([("priceValidUntil", opt(valid_until.clone()))])
                    .with(
                        "priceSpecification",
                        json!({
                            "@type": "PriceSpecification",
                            "price": offer.price,
                            "priceCurrency": DEFAULT_CURRENCY,
                            "valueAddedTaxIncluded": true,
                            "valueAddedTaxRate": DUTCH_VAT_RATE,
                            "description": offer_price_label(offer.price),
                        }),
                    )
                    .into_value()
            })
            .collect();
        json!({
            "@type": "OfferCatalog",
            "name": format!("{} Pakketten", input.name),
            "itemListElement": items,
        })
    });

    SchemaNode::new("Service")
        .with_id(format!("{}#service", input.url))
        .with("name", input.name.as_str())
        .with("description", input.description.as_str())
        .with("serviceType", input.service_type.as_str())
        .with("url", input.url.as_str())
        .with("inLanguage", ctx.identity.language)
        .with("provider", reference(&ctx.organization_id()))
        .with_optional([("areaServed", non_empty(areas))])
        .with("availableLanguage", json!(["nl", "en"]))
        .with_optional([
            ("priceRange", input.price_range.map(|r| Value::from(r.label()))),
            ("offers", input.price_range.map(|r| r.aggregate_offer())),
            ("hasOfferCatalog", catalog),
        ])
}

/// ItemList of services for the `/diensten` overview.
pub fn generate_service_list_schema(ctx: &SchemaContext, services: &[ServiceInput]) -> SchemaNode {
    let items: Vec<Value> = services
        .iter()
        .enumerate()
        .map(|(i, service)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "item": {
                    "@type": "Service",
                    "@id": format!("{}#service", service.url),
                    "name": service.name,
                    "description": service.description,
                    "url": service.url,
                    "provider": reference(&ctx.organization_id()),
                },
            })
        })
        .collect();
    SchemaNode::new("ItemList")
        .with_id(format!("{}#services", ctx.url("/diensten")))
        .with("inLanguage", ctx.identity.language)
        .with("itemListElement", items)
}

/// Catalog data for one `/diensten/{slug}` page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCatalogEntry {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub service_type: &'static str,
    pub min_price: u32,
    pub max_price: Option<u32>,
    pub offers: &'static [ServiceOffer],
}

pub static SERVICE_CATALOG: &[ServiceCatalogEntry] = &[
    ServiceCatalogEntry {
        slug: "website-laten-maken",
        name: "Website Laten Maken",
        description: "Professionele website ontwikkeling met Next.js, React en moderne technologieën",
        service_type: "Web Development",
        min_price: 2500,
        max_price: Some(25000),
        offers: &[
            ServiceOffer {
                name: "Kickstart",
                price: 1495,
                description: "Professioneel webdesign voor startups en ZZP'ers, tot 5 pagina's",
            },
            ServiceOffer {
                name: "Scale-up",
                price: 2995,
                description: "CMS integratie, uitgebreide SEO en blog module voor groeiende bedrijven",
            },
        ],
    },
    ServiceCatalogEntry {
        slug: "webshop-laten-maken",
        name: "Webshop Laten Maken",
        description: "Professionele webshop ontwikkeling met iDEAL, Mollie en Nederlandse betaalmethoden",
        service_type: "E-commerce Development",
        min_price: 5000,
        max_price: Some(50000),
        offers: &[],
    },
    ServiceCatalogEntry {
        slug: "seo-optimalisatie",
        name: "SEO Optimalisatie",
        description: "Technische SEO, Core Web Vitals optimalisatie en lokale SEO voor de Nederlandse markt",
        service_type: "SEO Services",
        min_price: 750,
        max_price: None,
        offers: &[],
    },
    ServiceCatalogEntry {
        slug: "3d-website-ervaringen",
        name: "3D Website Ervaringen",
        description: "Interactieve 3D web experiences met Three.js, React Three Fiber en WebGL",
        service_type: "3D Web Development",
        min_price: 7500,
        max_price: None,
        offers: &[],
    },
    ServiceCatalogEntry {
        slug: "onderhoud-support",
        name: "Website Onderhoud & Support",
        description: "Beveiligingsupdates, monitoring en doorlopende ondersteuning voor uw website",
        service_type: "Website Maintenance",
        min_price: 95,
        max_price: None,
        offers: &[],
    },
];

pub fn catalog_entry(slug: &str) -> Option<&'static ServiceCatalogEntry> {
    SERVICE_CATALOG.iter().find(|entry| entry.slug == slug)
}

impl ServiceCatalogEntry {
    pub fn to_input(&self, ctx: &SchemaContext, valid_until: Option<NaiveDate>) -> ServiceInput {
        ServiceInput {
            name: self.name.to_string(),
            description: self.description.to_string(),
            service_type: self.service_type.to_string(),
            url: ctx.url(&format!("/diensten/{}", self.slug)),
            area_served: vec![AreaServed::Country(ctx.identity.country_name)],
            price_range: Some(PriceRange {
                min: self.min_price,
                max: self.max_price,
                currency: DEFAULT_CURRENCY,
                vat_rate: DUTCH_VAT_RATE,
            }),
            offers: self.offers.to_vec(),
            offers_valid_until: valid_until,
        }
    }
}
