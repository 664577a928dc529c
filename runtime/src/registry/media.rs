//! Curated images and videos per page, for the image and video sitemaps.

use super::lastmod::{LastModified, Ymd};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageAsset {
    pub path: &'static str,
    pub caption: Option<&'static str>,
    pub title: Option<&'static str>,
    pub geo_location: Option<&'static str>,
    pub license: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePage {
    pub path: &'static str,
    pub last_modified: Option<LastModified>,
    pub images: &'static [ImageAsset],
}

const NL: Option<&str> = Some("Netherlands");

pub static IMAGE_PAGES: &[ImagePage] = &[
    ImagePage {
        path: "/",
        last_modified: Some(LastModified::Today),
        images: &[
            ImageAsset {
                path: "/assets/hero/nebula_helix.avif",
                caption: Some("ProWeb Studio - Revolutionaire webontwikkeling met kosmische precisie in Nederland"),
                title: Some("Hero achtergrond - Nebula Helix - Website laten maken"),
                geo_location: NL,
                license: None,
            },
            ImageAsset {
                path: "/assets/hero/nebula_helix.webp",
                caption: Some("ProWeb Studio - Revolutionaire webontwikkeling met kosmische precisie in Nederland"),
                title: Some("Hero achtergrond - Nebula Helix (WebP) - Webdesign Nederland"),
                geo_location: NL,
                license: None,
            },
            ImageAsset {
                path: "/assets/hero_portal_background.avif",
                caption: Some("ProWeb Studio portaal - Toegang tot digitale transformatie voor Nederlandse bedrijven"),
                title: Some("Hero Portal achtergrond - Website ontwikkeling"),
                geo_location: NL,
                license: None,
            },
            ImageAsset {
                path: "/assets/logo/logo-proweb-lockup.svg",
                caption: Some("ProWeb Studio logo - Professionele webontwikkeling Amsterdam Rotterdam Utrecht"),
                title: Some("ProWeb Studio Logo Lockup - Webdesign Bureau Nederland"),
                geo_location: NL,
                license: None,
            },
        ],
    },
    ImagePage {
        path: "/diensten",
        last_modified: Some(LastModified::Literal(Ymd(2025, 9, 20))),
        images: &[
            ImageAsset {
                path: "/assets/nebula_services_background.avif",
                caption: Some("Onze diensten - Webontwikkeling, design en digitale strategieën"),
                title: Some("Services achtergrond - Nebula"),
                geo_location: None,
                license: None,
            },
            ImageAsset {
                path: "/assets/nebula_services_background.webp",
                caption: Some("Onze diensten - Webontwikkeling, design en digitale strategieën"),
                title: Some("Services achtergrond - Nebula (WebP)"),
                geo_location: None,
                license: None,
            },
        ],
    },
    ImagePage {
        path: "/contact",
        last_modified: Some(LastModified::Literal(Ymd(2025, 9, 15))),
        images: &[ImageAsset {
            path: "/assets/glowing_beacon_contact.avif",
            caption: Some("Contact ProWeb Studio - Laat uw digitale visie werkelijkheid worden"),
            title: Some("Contact achtergrond - Glowing Beacon"),
            geo_location: NL,
            license: None,
        }],
    },
    ImagePage {
        path: "/over-ons",
        last_modified: Some(LastModified::Literal(Ymd(2025, 9, 5))),
        images: &[
            ImageAsset {
                path: "/assets/team_core_star.webp",
                caption: Some("Over ProWeb Studio - Ons expertteam en visie"),
                title: Some("Team Core Star achtergrond"),
                geo_location: None,
                license: None,
            },
            ImageAsset {
                path: "/assets/team_core_star.png",
                caption: Some("Over ProWeb Studio - Ons expertteam en visie"),
                title: Some("Team Core Star achtergrond (PNG)"),
                geo_location: None,
                license: None,
            },
        ],
    },
    ImagePage {
        path: "/werkwijze",
        last_modified: Some(LastModified::Literal(Ymd(2025, 9, 10))),
        images: &[ImageAsset {
            path: "/assets/logo/logo-proweb-lockup.svg",
            caption: None,
            title: None,
            geo_location: None,
            license: None,
        }],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoAsset {
    pub thumbnail_path: &'static str,
    pub content_path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub publication_date: Ymd,
    /// Seconds.
    pub duration: Option<u32>,
    pub family_friendly: bool,
    pub live: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoPage {
    pub path: &'static str,
    pub last_modified: LastModified,
    pub videos: &'static [VideoAsset],
}

pub static VIDEO_PAGES: &[VideoPage] = &[
    VideoPage {
        path: "/",
        last_modified: LastModified::Literal(Ymd(2025, 1, 15)),
        videos: &[VideoAsset {
            thumbnail_path: "/assets/video-thumbnails/hero-demo.jpg",
            content_path: "/assets/videos/hero-3d-demo.mp4",
            title: "ProWeb Studio 3D Website Demo - Interactieve Web Experiences",
            description: "Ontdek onze innovatieve 3D website technologie. Bekijk hoe wij interactieve web experiences creëren die uw bezoekers boeien en converteren.",
            publication_date: Ymd(2025, 1, 15),
            duration: None,
            family_friendly: true,
            live: false,
        }],
    },
    VideoPage {
        path: "/diensten/3d-website-ervaringen",
        last_modified: LastModified::Literal(Ymd(2025, 1, 10)),
        videos: &[
            VideoAsset {
                thumbnail_path: "/assets/video-thumbnails/3d-showcase.jpg",
                content_path: "/assets/videos/3d-website-showcase.webm",
                title: "3D Website Showcase - ProWeb Studio Nederland",
                description: "Bekijk onze portfolio van geavanceerde 3D websites. Van immersive productpresentaties tot interactieve bedrijfservaringen.",
                publication_date: Ymd(2025, 1, 10),
                duration: Some(120),
                family_friendly: true,
                live: false,
            },
            VideoAsset {
                thumbnail_path: "/assets/video-thumbnails/three-js-demo.jpg",
                content_path: "/assets/videos/three-js-implementation.mp4",
                title: "Three.js Implementatie - Technische Showcase",
                description: "Technische demonstratie van onze Three.js expertise. Leer hoe wij cutting-edge 3D technologie integreren in webapplicaties.",
                publication_date: Ymd(2025, 1, 5),
                duration: Some(180),
                family_friendly: true,
                live: false,
            },
        ],
    },
    VideoPage {
        path: "/portfolio",
        last_modified: LastModified::Literal(Ymd(2024, 12, 20)),
        videos: &[VideoAsset {
            thumbnail_path: "/assets/video-thumbnails/client-testimonial.jpg",
            content_path: "/assets/videos/client-testimonials.mp4",
            title: "Klant Testimonials - ProWeb Studio Projecten",
            description: "Hoor wat onze klanten zeggen over hun ervaring met ProWeb Studio. Ontdek hoe wij bedrijven helpen hun digitale doelen te bereiken.",
            publication_date: Ymd(2024, 12, 20),
            duration: Some(240),
            family_friendly: true,
            live: false,
        }],
    },
    VideoPage {
        path: "/blog/core-web-vitals-optimalisatie-2025",
        last_modified: LastModified::Literal(Ymd(2025, 1, 15)),
        videos: &[VideoAsset {
            thumbnail_path: "/assets/video-thumbnails/cwv-tutorial.jpg",
            content_path: "/assets/videos/core-web-vitals-tutorial.mp4",
            title: "Core Web Vitals Optimalisatie Tutorial - Performance Tips",
            description: "Leer hoe u Core Web Vitals kunt optimaliseren voor betere website performance en Google rankings. Praktische tips en technieken.",
            publication_date: Ymd(2025, 1, 15),
            duration: Some(600),
            family_friendly: true,
            live: false,
        }],
    },
    VideoPage {
        path: "/over-ons",
        last_modified: LastModified::Literal(Ymd(2024, 12, 1)),
        videos: &[VideoAsset {
            thumbnail_path: "/assets/video-thumbnails/company-intro.jpg",
            content_path: "/assets/videos/proweb-studio-introduction.webm",
            title: "ProWeb Studio - Ons Verhaal en Missie",
            description: "Maak kennis met het team achter ProWeb Studio. Ontdek onze passie voor innovatieve webtechnologie en onze missie om Nederlandse bedrijven digitaal te transformeren.",
            publication_date: Ymd(2024, 12, 1),
            duration: Some(300),
            family_friendly: true,
            live: false,
        }],
    },
];
