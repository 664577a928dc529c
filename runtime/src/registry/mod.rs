//! Route registry: static page tables resolved into sitemap entries.
//!
//! The tables are immutable and compiled in. A [`RouteRegistry`] binds them
//! to a site URL and a [`LastModifiedResolver`] for one request, so every
//! call sees the same snapshot of filesystem dates and the same "today".

pub mod cities;
pub mod lastmod;
pub mod media;
pub mod news;
pub mod pages;
pub mod services;

use crate::config::{SiteConfig, SiteUrl};
use chrono::NaiveDate;
use lastmod::{LastModified, LastModifiedResolver};

/// `<changefreq>` values from the sitemaps protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

/// Route groups that produce `<url>` entries with priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Main,
    Services,
    Locations,
    News,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Main,
        Category::Services,
        Category::Locations,
        Category::News,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Main => "main",
            Category::Services => "services",
            Category::Locations => "locations",
            Category::News => "news",
        }
    }
}

/// A compiled-in route definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticRoute {
    pub path: &'static str,
    pub priority: f64,
    pub change_frequency: ChangeFrequency,
    pub last_modified: LastModified,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleAlternate {
    pub locale: String,
    pub href: String,
}

/// A resolved sitemap entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEntry {
    pub path: String,
    pub loc: String,
    pub priority: f64,
    pub change_frequency: ChangeFrequency,
    pub last_modified: NaiveDate,
    pub locale_alternates: Vec<LocaleAlternate>,
}

/// A route plus Google News metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsEntry {
    pub route: RouteEntry,
    pub publication_date: NaiveDate,
    pub title: String,
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub loc: String,
    pub caption: Option<String>,
    pub title: Option<String>,
    pub geo_location: Option<String>,
    pub license: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePageEntry {
    pub loc: String,
    pub last_modified: Option<NaiveDate>,
    pub images: Vec<ImageEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEntry {
    pub thumbnail_loc: String,
    pub content_loc: String,
    pub title: String,
    pub description: String,
    pub publication_date: NaiveDate,
    pub duration: Option<u32>,
    pub family_friendly: bool,
    pub live: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoPageEntry {
    pub loc: String,
    pub last_modified: NaiveDate,
    pub videos: Vec<VideoEntry>,
}

pub const NEWS_PRIORITY: f64 = 0.6;

/// Per-request view over the static route tables.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    site: SiteUrl,
    resolver: LastModifiedResolver,
}

impl RouteRegistry {
    pub fn new(site: SiteUrl, resolver: LastModifiedResolver) -> Self {
        Self { site, resolver }
    }

    /// Registry for `config` as seen on `today`.
    pub fn for_config(config: &SiteConfig, today: NaiveDate) -> Self {
        Self::new(
            config.site_url.clone(),
            LastModifiedResolver::new(
                config.content_root.clone(),
                config.capabilities.filesystem,
                today,
            ),
        )
    }

    pub fn site(&self) -> &SiteUrl {
        &self.site
    }

    pub fn resolver(&self) -> &LastModifiedResolver {
        &self.resolver
    }

    pub fn today(&self) -> NaiveDate {
        self.resolver.today()
    }

    /// Entries for one category. Order carries no meaning.
    pub fn routes_for_category(&self, category: Category) -> Vec<RouteEntry> {
        match category {
            Category::Main => self.static_routes(pages::MAIN_PAGES, pages::MAIN_LOCALES),
            Category::Services => {
                self.static_routes(services::SERVICE_ROUTES, services::SERVICE_LOCALES)
            }
            Category::Locations => self.location_routes(),
            Category::News => self.news_entries().into_iter().map(|n| n.route).collect(),
        }
    }

    fn static_routes(&self, table: &[StaticRoute], locales: &[&str]) -> Vec<RouteEntry> {
        table
            .iter()
            .map(|route| {
                self.entry(
                    route.path.to_string(),
                    route.priority,
                    route.change_frequency,
                    self.resolver.resolve(&route.last_modified),
                    locales,
                )
            })
            .collect()
    }

    fn location_routes(&self) -> Vec<RouteEntry> {
        let today = self.today();
        let mut entries: Vec<RouteEntry> = cities::CITIES
            .iter()
            .map(|city| {
                self.entry(
                    format!("/steden/{}", city.slug),
                    cities::city_priority(city.population),
                    ChangeFrequency::Weekly,
                    today,
                    cities::LOCATION_LOCALES,
                )
            })
            .collect();

        for city in cities::largest_cities(cities::COMBINATION_CITY_COUNT) {
            for service in services::SERVICE_SUBTYPES {
                entries.push(self.entry(
                    format!("/steden/{}/{}", city.slug, service.slug),
                    cities::combination_priority(city.population),
                    ChangeFrequency::Weekly,
                    today,
                    cities::LOCATION_LOCALES,
                ));
            }
        }
        entries
    }

    /// Every news article, unfiltered, in table order.
    pub fn news_entries(&self) -> Vec<NewsEntry> {
        news::NEWS_ARTICLES
            .iter()
            .map(|article| NewsEntry {
                route: self.entry(
                    article.path.to_string(),
                    NEWS_PRIORITY,
                    ChangeFrequency::Monthly,
                    self.resolver.resolve(&article.last_modified),
                    &[],
                ),
                publication_date: article.publication_date.to_date(),
                title: article.title.to_string(),
                keywords: article.keywords.to_string(),
            })
            .collect()
    }

    pub fn image_pages(&self) -> Vec<ImagePageEntry> {
        media::IMAGE_PAGES
            .iter()
            .map(|page| ImagePageEntry {
                loc: self.site.join(page.path),
                last_modified: page.last_modified.map(|lm| self.resolver.resolve(&lm)),
                images: page
                    .images
                    .iter()
                    .map(|img| ImageEntry {
                        loc: self.site.join(img.path),
                        caption: img.caption.map(str::to_string),
                        title: img.title.map(str::to_string),
                        geo_location: img.geo_location.map(str::to_string),
                        license: img.license.map(str::to_string),
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn video_pages(&self) -> Vec<VideoPageEntry> {
        media::VIDEO_PAGES
            .iter()
            .map(|page| VideoPageEntry {
                loc: self.site.join(page.path),
                last_modified: self.resolver.resolve(&page.last_modified),
                videos: page
                    .videos
                    .iter()
                    .map(|v| VideoEntry {
                        thumbnail_loc: self.site.join(v.thumbnail_path),
                        content_loc: self.site.join(v.content_path),
                        title: v.title.to_string(),
                        description: v.description.to_string(),
                        publication_date: v.publication_date.to_date(),
                        duration: v.duration,
                        family_friendly: v.family_friendly,
                        live: v.live,
                    })
                    .collect(),
            })
            .collect()
    }

    /// Resolve a `<loc>` emitted by `category`'s sitemap back to its entry.
    /// Paths are unique within a category, not across them (`/diensten`).
    pub fn find_by_loc(&self, category: Category, loc: &str) -> Option<RouteEntry> {
        let path = self.site.path_of(loc)?;
        self.routes_for_category(category)
            .into_iter()
            .find(|entry| entry.path == path)
    }

    fn entry(
        &self,
        path: String,
        priority: f64,
        change_frequency: ChangeFrequency,
        last_modified: NaiveDate,
        locales: &[&str],
    ) -> RouteEntry {
        let loc = self.site.join(&path);
        let locale_alternates = locales
            .iter()
            .map(|locale| LocaleAlternate {
                locale: locale.to_string(),
                href: loc.clone(),
            })
            .collect();
        RouteEntry {
            path,
            loc,
            priority,
            change_frequency,
            last_modified,
            locale_alternates,
        }
    }
}
