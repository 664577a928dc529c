//! Plain `<urlset>` with `hreflang` alternates: main, services and locations.

use super::xml::{format_date, format_priority, XmlBuf, SITEMAP_NS, XHTML_NS};
use crate::registry::RouteEntry;

pub fn generate_urlset_xml(entries: &[RouteEntry]) -> String {
    let mut xml = XmlBuf::new();
    xml.open_root("urlset", &[("xmlns", SITEMAP_NS), ("xmlns:xhtml", XHTML_NS)]);
    for entry in entries {
        xml.open(1, "url");
        xml.text(2, "loc", &entry.loc);
        xml.text(2, "lastmod", &format_date(entry.last_modified));
        xml.text(2, "changefreq", entry.change_frequency.as_str());
        xml.text(2, "priority", &format_priority(entry.priority));
        for alternate in &entry.locale_alternates {
            xml.empty(
                2,
                "xhtml:link",
                &[
                    ("rel", "alternate"),
                    ("hreflang", &alternate.locale),
                    ("href", &alternate.href),
                ],
            );
        }
        xml.close(1, "url");
    }
    xml.finish("urlset")
}
