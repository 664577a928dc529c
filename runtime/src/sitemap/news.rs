//! Google News sitemap with a rolling publication window.

use super::xml::{format_date, XmlBuf, NEWS_NS, SITEMAP_NS};
use crate::registry::news::{
    NEWS_FALLBACK_COUNT, NEWS_WINDOW_DAYS, PUBLICATION_LANGUAGE, PUBLICATION_NAME,
};
use crate::registry::NewsEntry;
use chrono::{DateTime, Duration, Utc};

/// Entries published within the window before `now`, most recent first.
/// When none qualify, the [`NEWS_FALLBACK_COUNT`] most recent entries are
/// kept instead so the document never goes empty.
pub fn select_news_entries(mut entries: Vec<NewsEntry>, now: DateTime<Utc>) -> Vec<NewsEntry> {
    // Stable: equal dates keep table order.
    entries.sort_by(|a, b| b.publication_date.cmp(&a.publication_date));

    let cutoff = now - Duration::days(NEWS_WINDOW_DAYS);
    let recent = entries
        .iter()
        .filter(|entry| {
            entry
                .publication_date
                .and_hms_opt(0, 0, 0)
                .map(|midnight| midnight.and_utc() >= cutoff)
                .unwrap_or(false)
        })
        .count();

    // Sorted descending, so the window is always a prefix.
    let keep = if recent > 0 {
        recent
    } else {
        NEWS_FALLBACK_COUNT
    };
    entries.truncate(keep);
    entries
}

pub fn generate_news_sitemap_xml(entries: &[NewsEntry]) -> String {
    let mut xml = XmlBuf::new();
    xml.open_root("urlset", &[("xmlns", SITEMAP_NS), ("xmlns:news", NEWS_NS)]);
    for entry in entries {
        xml.open(1, "url");
        xml.text(2, "loc", &entry.route.loc);
        xml.text(2, "lastmod", &format_date(entry.route.last_modified));
        xml.open(2, "news:news");
        xml.open(3, "news:publication");
        xml.text(4, "news:name", PUBLICATION_NAME);
        xml.text(4, "news:language", PUBLICATION_LANGUAGE);
        xml.close(3, "news:publication");
        xml.text(3, "news:publication_date", &format_date(entry.publication_date));
        xml.text(3, "news:title", &entry.title);
        if !entry.keywords.is_empty() {
            xml.text(3, "news:keywords", &entry.keywords);
        }
        xml.close(2, "news:news");
        xml.close(1, "url");
    }
    xml.finish("urlset")
}
