//! Business identity shared by every JSON-LD builder.

use crate::config::SiteUrl;

/// Who the site belongs to. Values are published verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIdentity {
    pub name: &'static str,
    pub alternate_names: &'static [&'static str],
    pub tagline: &'static str,
    pub description: &'static str,
    pub email: &'static str,
    pub telephone: &'static str,
    pub locality: &'static str,
    pub region: &'static str,
    pub country_code: &'static str,
    pub country_name: &'static str,
    pub language: &'static str,
    pub logo_path: &'static str,
    pub social_profiles: &'static [&'static str],
    pub opening_hours: &'static str,
}

pub const PROWEB_STUDIO: SiteIdentity = SiteIdentity {
    name: "ProWeb Studio",
    alternate_names: &["ProWeb Studio Nederland", "ProWeb Studio NL"],
    tagline: "Digitale innovatie met kosmische impact",
    description: "Wij ontwerpen en bouwen snelle, veilige en schaalbare 3D-websites die scoren in Google en converteren.",
    email: "contact@prowebstudio.nl",
    telephone: "+31207001234",
    locality: "Amsterdam",
    region: "Noord-Holland",
    country_code: "NL",
    country_name: "Netherlands",
    language: "nl-NL",
    logo_path: "/assets/logo/logo-proweb-lockup.svg",
    social_profiles: &[
        "https://linkedin.com/company/proweb-studio",
        "https://github.com/proweb-studio",
        "https://twitter.com/prowebstudio_nl",
    ],
    opening_hours: "Mo-Fr 09:00-18:00",
};

impl Default for SiteIdentity {
    fn default() -> Self {
        PROWEB_STUDIO
    }
}

/// Site URL plus identity; the input every builder shares.
#[derive(Debug, Clone)]
pub struct SchemaContext {
    pub site: SiteUrl,
    pub identity: SiteIdentity,
}

impl SchemaContext {
    pub fn new(site: SiteUrl) -> Self {
        Self {
            site,
            identity: SiteIdentity::default(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        self.site.join(path)
    }

    /// Site-level node id, e.g. `https://prowebstudio.nl#organization`.
    pub fn node_id(&self, fragment: &str) -> String {
        format!("{}#{fragment}", self.site.as_str())
    }

    pub fn organization_id(&self) -> String {
        self.node_id("organization")
    }

    pub fn website_id(&self) -> String {
        self.node_id("website")
    }
}
