//! Google image and video sitemap extensions.

use super::xml::{format_date, XmlBuf, IMAGE_NS, SITEMAP_NS, VIDEO_NS};
use crate::registry::{ImagePageEntry, VideoPageEntry};

pub fn generate_image_sitemap_xml(pages: &[ImagePageEntry]) -> String {
    let mut xml = XmlBuf::new();
    xml.open_root("urlset", &[("xmlns", SITEMAP_NS), ("xmlns:image", IMAGE_NS)]);
    for page in pages {
        xml.open(1, "url");
        xml.text(2, "loc", &page.loc);
        if let Some(lastmod) = page.last_modified {
            xml.text(2, "lastmod", &format_date(lastmod));
        }
        for image in &page.images {
            xml.open(2, "image:image");
            xml.text(3, "image:loc", &image.loc);
            xml.opt_text(3, "image:caption", image.caption.as_deref());
            xml.opt_text(3, "image:title", image.title.as_deref());
            xml.opt_text(3, "image:geo_location", image.geo_location.as_deref());
            xml.opt_text(3, "image:license", image.license.as_deref());
            xml.close(2, "image:image");
        }
        xml.close(1, "url");
    }
    xml.finish("urlset")
}

pub fn generate_video_sitemap_xml(pages: &[VideoPageEntry]) -> String {
    let mut xml = XmlBuf::new();
    xml.open_root("urlset", &[("xmlns", SITEMAP_NS), ("xmlns:video", VIDEO_NS)]);

    if pages.iter().all(|page| page.videos.is_empty()) {
        xml.comment(1, "No videos found");
        return xml.finish("urlset");
    }

    for page in pages.iter().filter(|page| !page.videos.is_empty()) {
        xml.open(1, "url");
        xml.text(2, "loc", &page.loc);
        xml.text(2, "lastmod", &format_date(page.last_modified));
        for video in &page.videos {
            xml.open(2, "video:video");
            xml.text(3, "video:thumbnail_loc", &video.thumbnail_loc);
            xml.text(3, "video:title", &video.title);
            xml.text(3, "video:description", &video.description);
            xml.text(3, "video:content_loc", &video.content_loc);
            if let Some(duration) = video.duration {
                xml.text(3, "video:duration", &duration.to_string());
            }
            xml.text(
                3,
                "video:publication_date",
                &format_date(video.publication_date),
            );
            xml.text(3, "video:family_friendly", yes_no(video.family_friendly));
            xml.text(3, "video:live", yes_no(video.live));
            xml.close(2, "video:video");
        }
        xml.close(1, "url");
    }
    xml.finish("urlset")
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ImageEntry, VideoEntry};
    use chrono::NaiveDate;

    fn image(loc: &str, caption: Option<&str>) -> ImageEntry {
        ImageEntry {
            loc: loc.into(),
            caption: caption.map(Into::into),
            title: None,
            geo_location: None,
            license: None,
        }
    }

    fn video(title: &str, duration: Option<u32>) -> VideoEntry {
        VideoEntry {
            thumbnail_loc: "https://example.com/thumb.jpg".into(),
            content_loc: "https://example.com/v.mp4".into(),
            title: title.into(),
            description: "Beschrijving".into(),
            publication_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            duration,
            family_friendly: true,
            live: false,
        }
    }

    #[test]
    fn test_optional_image_fields_omitted() {
        let xml = generate_image_sitemap_xml(&[ImagePageEntry {
            loc: "https://example.com/".into(),
            last_modified: None,
            images: vec![
                image("https://example.com/a.avif", Some("Caption & more")),
                image("https://example.com/b.svg", None),
            ],
        }]);
        assert_eq!(xml.matches("<image:image>").count(), 2);
        assert_eq!(xml.matches("<image:caption>").count(), 1);
        assert!(xml.contains("<image:caption>Caption &amp; more</image:caption>"));
        assert!(!xml.contains("<image:title>"));
        assert!(!xml.contains("<image:license>"));
        assert!(!xml.contains("<lastmod>"));
    }

    #[test]
    fn test_video_fields() {
        let xml = generate_video_sitemap_xml(&[VideoPageEntry {
            loc: "https://example.com/portfolio".into(),
            last_modified: NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
            videos: vec![video("Demo", Some(120)), video("Live <stream>", None)],
        }]);
        assert_eq!(xml.matches("<video:video>").count(), 2);
        assert_eq!(xml.matches("<video:duration>").count(), 1);
        assert!(xml.contains("<video:duration>120</video:duration>"));
        assert!(xml.contains("<video:family_friendly>yes</video:family_friendly>"));
        assert!(xml.contains("<video:live>no</video:live>"));
        assert!(xml.contains("<video:title>Live &lt;stream&gt;</video:title>"));
        assert!(xml.contains("<video:publication_date>2025-01-10</video:publication_date>"));
        assert!(!xml.contains("No videos found"));
    }

    #[test]
    fn test_empty_video_sitemap() {
        let xml = generate_video_sitemap_xml(&[VideoPageEntry {
            loc: "https://example.com/".into(),
            last_modified: NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
            videos: Vec::new(),
        }]);
        assert!(xml.contains("<!-- No videos found -->"));
        assert!(!xml.contains("<url>"));
        assert!(xml.contains(r#"xmlns:video="http://www.google.com/schemas/sitemap-video/1.1""#));
        assert_eq!(generate_video_sitemap_xml(&[]), xml);
    }
}
