//! FAQPage and HowTo nodes, plus the published FAQ and guide content.

use super::{non_empty, opt, reference, SchemaContext, SchemaNode};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static DEFAULT_FAQ: &[FaqItem] = &[
    FaqItem {
        question: "Hoeveel kost een professionele website laten maken?",
        answer: "De kosten voor een professionele website variëren van €2.500 voor een starter website tot €25.000+ voor een enterprise maatwerk oplossing. Dit is afhankelijk van functionaliteiten, design complexiteit en integraties.",
    },
    FaqItem {
        question: "Hoe lang duurt het om een website te laten maken?",
        answer: "Een gemiddelde website ontwikkeling duurt 4-8 weken, afhankelijk van de scope. Complexe webshops of 3D websites kunnen 8-12 weken duren.",
    },
    FaqItem {
        question: "Werken jullie met Nederlandse bedrijven?",
        answer: "Ja, wij zijn een Nederlands webbureau geregistreerd bij de KVK. We werken uitsluitend met Nederlandse bedrijven en facturen inclusief Nederlandse BTW.",
    },
    FaqItem {
        question: "Welke betaalmethoden ondersteunen jullie webshops?",
        answer: "Wij integreren alle populaire Nederlandse betaalmethoden: iDEAL, creditcard, PayPal, Apple Pay, en Bancontact via Mollie of Adyen.",
    },
    FaqItem {
        question: "Is mijn website AVG/GDPR compliant?",
        answer: "Ja, alle websites worden gebouwd met privacy-by-design principes en voldoen aan de AVG/GDPR wetgeving. Inclusief cookie consent, privacy statement en verwerkersovereenkomst.",
    },
];

/// `id` is the full node id, e.g. `https://prowebstudio.nl#faq`.
pub fn generate_faq_schema(ctx: &SchemaContext, id: &str, items: &[FaqItem]) -> SchemaNode {
    let questions: Vec<Value> = items
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {"@type": "Answer", "text": faq.answer},
            })
        })
        .collect();
    SchemaNode::new("FAQPage")
        .with_id(id)
        .with("inLanguage", ctx.identity.language)
        .with("mainEntity", questions)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatedCost {
    pub value: String,
    pub currency: &'static str,
    pub vat_included: bool,
}

impl EstimatedCost {
    /// `€{value} incl. BTW` or `€{value} excl. BTW`.
    pub fn label(&self) -> String {
        let treatment = if self.vat_included { "incl." } else { "excl." };
        format!("€{} {treatment} BTW", self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HowToStep {
    pub name: String,
    pub text: String,
    pub image: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HowToInput {
    pub id: String,
    pub name: String,
    pub description: String,
    /// ISO 8601 duration, e.g. `P6W`.
    pub total_time: Option<String>,
    pub estimated_cost: Option<EstimatedCost>,
    pub image: Option<String>,
    pub tools: Vec<String>,
    pub steps: Vec<HowToStep>,
}

pub fn generate_howto_schema(ctx: &SchemaContext, input: &HowToInput) -> SchemaNode {
    let steps: Vec<Value> = input
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            SchemaNode::new("HowToStep")
                .with("position", i + 1)
                .with("name", step.name.as_str())
                .with("text", step.text.as_str())
                .with_optional([
                    ("image", opt(step.image.clone())),
                    ("url", opt(step.url.clone())),
                ])
                .into_value()
        })
        .collect();
    let tools: Vec<Value> = input
        .tools
        .iter()
        .map(|tool| json!({"@type": "HowToTool", "name": tool}))
        .collect();
    let cost = input.estimated_cost.as_ref().map(|cost| {
        json!({
            "@type": "MonetaryAmount",
            "currency": cost.currency,
            "value": cost.value,
            "name": cost.label(),
        })
    });

    SchemaNode::new("HowTo")
        .with_id(input.id.as_str())
        .with("name", input.name.as_str())
        .with("description", input.description.as_str())
        .with("inLanguage", ctx.identity.language)
        .with("author", reference(&ctx.organization_id()))
        .with_optional([
            ("totalTime", opt(input.total_time.clone())),
            ("image", opt(input.image.clone())),
            ("estimatedCost", cost),
            ("tool", non_empty(tools)),
        ])
        .with("step", steps)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guide {
    Website,
    Seo,
    Webshop,
}

impl Guide {
    pub fn slug(self) -> &'static str {
        match self {
            Guide::Website => "website",
            Guide::Seo => "seo",
            Guide::Webshop => "webshop",
        }
    }
}

/// Published step-by-step guide as a [`HowToInput`].
pub fn guide(ctx: &SchemaContext, guide: Guide) -> HowToInput {
    let (name, description, steps): (&str, &str, &[(&str, &str)]) = match guide {
        Guide::Website => (
            "Stap-voor-stap gids: Website laten maken in Nederland",
            "Complete handleiding voor professionele website ontwikkeling conform Nederlandse standaarden",
            &[
                ("Plan uw website", "Bepaal doelgroep, functionaliteiten en compliance vereisten."),
                ("Kies hosting en domein", "Selecteer Nederlandse hosting en registreer .nl domein bij SIDN."),
                ("Implementeer AVG compliance", "Zorg voor privacy statements en cookie consent."),
                ("Optimaliseer voor SEO", "Gebruik Nederlandse zoektermen en lokale SEO."),
            ],
        ),
        Guide::Seo => (
            "SEO Optimalisatie voor Nederlandse websites",
            "Gids voor zoekmachine optimalisatie specifiek voor de Nederlandse markt",
            &[
                ("Keyword onderzoek", "Analyseer Nederlandse zoektermen en zoekvolume."),
                ("Technische SEO", "Optimaliseer Core Web Vitals en site structuur."),
                ("Content optimalisatie", "Schrijf kwalitatieve Nederlandse content."),
                ("Lokale SEO", "Optimaliseer voor Google Mijn Bedrijf."),
            ],
        ),
        Guide::Webshop => (
            "Webshop laten maken: Complete gids",
            "Handleiding voor e-commerce ontwikkeling met Nederlandse betaalmethoden",
            &[
                ("E-commerce platform kiezen", "Selecteer geschikt platform voor uw producten."),
                ("Betaalmethoden integreren", "Koppel iDEAL, Mollie en andere Nederlandse PSPs."),
                ("Juridische compliance", "Voldoe aan consumentenrecht en retourbeleid."),
                ("Launch en marketing", "Start verkoop met conversie-optimalisatie."),
            ],
        ),
    };

    HowToInput {
        id: ctx.node_id(&format!("howto-{}", guide.slug())),
        name: name.to_string(),
        description: description.to_string(),
        steps: steps
            .iter()
            .map(|(name, text)| HowToStep {
                name: name.to_string(),
                text: text.to_string(),
                image: None,
                url: None,
            })
            .collect(),
        ..HowToInput::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteUrl;
    use assert_json_diff::assert_json_eq;

    fn ctx() -> SchemaContext {
        SchemaContext::new(SiteUrl::parse("https://prowebstudio.nl").unwrap())
    }

    #[test]
    fn test_faq_questions() {
        let node = generate_faq_schema(&ctx(), "https://prowebstudio.nl#faq", DEFAULT_FAQ);
        let entities = node.get("mainEntity").unwrap().as_array().unwrap();
        assert_eq!(entities.len(), 5);
        assert_eq!(entities[0]["@type"], "Question");
        assert_eq!(entities[0]["acceptedAnswer"]["@type"], "Answer");
    }

    #[test]
    fn test_estimated_cost_labels() {
        let mut cost = EstimatedCost {
            value: "2500".into(),
            currency: "EUR",
            vat_included: true,
        };
        assert_eq!(cost.label(), "€2500 incl. BTW");
        cost.vat_included = false;
        assert_eq!(cost.label(), "€2500 excl. BTW");
    }

    #[test]
    fn test_howto_optional_fields() {
        let ctx = ctx();
        let bare = generate_howto_schema(&ctx, &guide(&ctx, Guide::Seo));
        for key in ["totalTime", "image", "estimatedCost", "tool"] {
            assert!(bare.get(key).is_none(), "{key} should be omitted");
        }

        let mut input = guide(&ctx, Guide::Website);
        input.total_time = Some("P6W".into());
        input.tools = vec!["Three.js voor 3D websites".into()];
        input.estimated_cost = Some(EstimatedCost {
            value: "2500".into(),
            currency: "EUR",
            vat_included: false,
        });
        input.steps[0].url = Some("https://prowebstudio.nl/werkwijze".into());
        let node = generate_howto_schema(&ctx, &input);

        assert_eq!(node.id(), Some("https://prowebstudio.nl#howto-website"));
        assert_json_eq!(
            node.get("estimatedCost").unwrap(),
            json!({
                "@type": "MonetaryAmount",
                "currency": "EUR",
                "value": "2500",
                "name": "€2500 excl. BTW",
            })
        );
        let steps = node.get("step").unwrap().as_array().unwrap();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0]["position"], 1);
        assert_eq!(steps[0]["url"], "https://prowebstudio.nl/werkwijze");
        assert!(steps[1].get("url").is_none());
    }
}
