use proweb_seo::server::{build_router, AppState};
use proweb_seo::{Capabilities, Deployment, SiteConfig, SiteUrl};
use regex::Regex;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

async fn spawn(config: SiteConfig) -> std::net::SocketAddr {
    let app = build_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

async fn send_raw(addr: std::net::SocketAddr, path: &str) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let req = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("status");
    (status, head.to_ascii_lowercase(), body.to_string())
}

fn config() -> SiteConfig {
    SiteConfig {
        site_url: SiteUrl::parse("https://prowebstudio.nl").expect("site url"),
        content_root: "/nonexistent-content-root".into(),
        ..SiteConfig::default()
    }
}

fn count(pattern: &str, body: &str) -> usize {
    Regex::new(pattern).expect("regex").find_iter(body).count()
}

#[tokio::test]
async fn main_sitemap_lists_eight_pages() {
    let addr = spawn(config()).await;
    let (status, head, body) = send_raw(addr, "/sitemap.xml").await;
    assert_eq!(status, 200);
    assert!(head.contains("content-type: application/xml; charset=utf-8"));
    assert!(head.contains("cache-control: public, max-age=3600, s-maxage=3600"));
    assert_eq!(count(r"<url>", &body), 8);
    assert!(body.contains("<loc>https://prowebstudio.nl/</loc>"));
}

#[tokio::test]
async fn documents_carry_their_own_cache_lifetime() {
    let addr = spawn(config()).await;
    for (path, ttl) in [
        ("/sitemap-locations.xml", 7200),
        ("/sitemap-images.xml", 86400),
        ("/sitemap-videos.xml", 86400),
        ("/sitemap-news.xml", 3600),
        ("/robots.txt", 3600),
    ] {
        let (status, head, _) = send_raw(addr, path).await;
        assert_eq!(status, 200, "{path}");
        assert!(
            head.contains(&format!("max-age={ttl}, s-maxage={ttl}")),
            "{path}: {head}"
        );
    }
}

#[tokio::test]
async fn index_points_at_every_child_sitemap() {
    let addr = spawn(config()).await;
    let (status, _, body) = send_raw(addr, "/sitemap-index.xml").await;
    assert_eq!(status, 200);
    assert!(body.contains("<sitemapindex"));
    assert_eq!(count(r"<sitemap>", &body), 6);
    let locs = proweb_seo::sitemap::parse_sitemap_locs(&body).expect("well-formed index");
    assert!(locs.contains(&"https://prowebstudio.nl/sitemap-videos.xml".to_string()));
}

#[tokio::test]
async fn locations_sitemap_has_cities_and_combinations() {
    let addr = spawn(config()).await;
    let (_, _, body) = send_raw(addr, "/sitemap-locations.xml").await;
    assert_eq!(count(r"<loc>https://prowebstudio\.nl/steden/[a-z-]+</loc>", &body), 16);
    assert_eq!(count(r"<url>", &body), 66);
}

#[tokio::test]
async fn edge_runtime_does_not_mount_filesystem_routes() {
    let addr = spawn(SiteConfig {
        capabilities: Capabilities::EDGE,
        ..config()
    })
    .await;
    for path in ["/sitemap-index.xml", "/sitemap-services.xml", "/sitemap-news.xml"] {
        let (status, _, _) = send_raw(addr, path).await;
        assert_eq!(status, 404, "{path}");
    }
    let (status, _, _) = send_raw(addr, "/sitemap-images.xml").await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn robots_reflects_deployment() {
    let addr = spawn(config()).await;
    let (status, head, body) = send_raw(addr, "/robots.txt").await;
    assert_eq!(status, 200);
    assert!(head.contains("content-type: text/plain"));
    assert!(body.contains("Sitemap: https://prowebstudio.nl/sitemap-index.xml"));
    assert!(body.contains("Host: prowebstudio.nl"));

    let preview = spawn(SiteConfig {
        deployment: Deployment::Preview,
        ..config()
    })
    .await;
    let (_, _, body) = send_raw(preview, "/robots.txt").await;
    assert_eq!(body, "User-Agent: *\nDisallow: /\n");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let addr = spawn(config()).await;
    let (status, _, _) = send_raw(addr, "/sitemap-blog.xml").await;
    assert_eq!(status, 404);
}
