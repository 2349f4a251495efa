//! Server-rendered marketing and documentation pages.
//!
//! Every page carries a [`PageMetadata`] which drives the `<title>`, description, canonical link,
//! Open Graph tags and the JSON-LD block. The base URL used for canonical links and the sitemap
//! comes from [`SiteConfig`], built once at startup.

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use maud::{html, PreEscaped};
use url::Url;

use crate::AppState;

pub mod link;
pub mod metadata;
pub mod pages;

pub use link::SmartLink;
pub use metadata::PageMetadata;
pub use pages::Page;

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub name: String,
    base_url: Url,
}

impl SiteConfig {
    pub fn new(name: impl Into<String>, base_url: &str) -> Result<Self> {
        let mut base_url =
            Url::parse(base_url).with_context(|| format!("Invalid base URL {}", base_url))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            name: name.into(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Site-relative path as served to browsers, under the base URL's path.
    pub fn path_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.path(), path.trim_start_matches('/'))
    }

    /// Absolute URL of a site-relative path.
    pub fn url_for(&self, path: &str) -> String {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map(String::from)
            .unwrap_or_else(|_| self.base_url.to_string())
    }
}

pub fn router() -> Router<AppState> {
    let mut router = Router::new();
    for page in Page::ALL {
        router = router.route(
            page.metadata().path,
            get(move |State(state): State<AppState>| async move {
                Html(page.render(&state.site).into_string())
            }),
        );
    }
    router
        .route("/sitemap.xml", get(handle_sitemap))
        .route("/robots.txt", get(handle_robots))
}

async fn handle_sitemap(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml")],
        sitemap(&state.site),
    )
}

async fn handle_robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!(
            "User-agent: *\nAllow: /\n\nSitemap: {}\n",
            state.site.url_for("/sitemap.xml")
        ),
    )
}

pub fn sitemap(site: &SiteConfig) -> String {
    let urlset = html! {
        (PreEscaped("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"))
        urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" {
            @for page in Page::ALL {
                @let metadata = page.metadata();
                url {
                    loc { (metadata.canonical_url(site)) }
                    priority { @if metadata.path == "/" { "1.0" } @else { "0.8" } }
                }
            }
        }
    };
    urlset.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let site = SiteConfig::new("Vegan Ipsum", "https://example.org/ipsum").unwrap();
        assert_eq!(site.url_for("/docs/cli"), "https://example.org/ipsum/docs/cli");
        assert_eq!(site.url_for("/"), "https://example.org/ipsum/");
    }

    #[test]
    fn paths_keep_base_prefix() {
        let site = SiteConfig::new("Vegan Ipsum", "https://example.org/ipsum").unwrap();
        assert_eq!(site.path_for("/api"), "/ipsum/api");
        assert_eq!(site.path_for("/"), "/ipsum/");

        let site = SiteConfig::new("Vegan Ipsum", "https://example.org").unwrap();
        assert_eq!(site.path_for("/docs/cli"), "/docs/cli");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(SiteConfig::new("Vegan Ipsum", "not a url").is_err());
    }

    #[test]
    fn sitemap_lists_every_page() {
        let site = SiteConfig::new("Vegan Ipsum", "https://example.org").unwrap();
        let xml = sitemap(&site);
        for page in Page::ALL {
            let loc = format!("<loc>{}</loc>", page.metadata().canonical_url(&site));
            assert!(xml.contains(&loc), "missing {loc}");
        }
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    }

    #[test]
    fn sitemap_escapes_locations() {
        let site = SiteConfig::new("Vegan Ipsum", "https://example.org/a&b").unwrap();
        let xml = sitemap(&site);
        assert!(xml.contains("<loc>https://example.org/a&amp;b/about</loc>"), "{xml}");
        assert!(!xml.contains("a&b"));
    }
}
