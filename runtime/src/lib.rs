//! Sitemap, robots.txt and JSON-LD generation for the ProWeb Studio site.
//!
//! The [`registry`] is the single source of page metadata. [`sitemap`],
//! [`robots`] and [`schema`] render documents from it, and [`server`]
//! exposes them over HTTP with per-document cache lifetimes.

pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod robots;
pub mod schema;
pub mod server;
pub mod sitemap;
pub mod themes;
pub mod validate;

pub use config::{Capabilities, Deployment, SiteConfig, SiteUrl};
pub use error::{Result, SeoError};
pub use registry::RouteRegistry;
pub use sitemap::SitemapDocument;
