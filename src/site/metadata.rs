use maud::{html, Markup, PreEscaped};
use serde_json::{json, Value};

use crate::site::SiteConfig;

/// What kind of thing a page describes in structured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    WebSite,
    WebPage,
    SoftwareApplication,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
    /// Site-relative path, always starting with `/`
    pub path: &'static str,
    pub keywords: &'static [&'static str],
    pub schema: SchemaKind,
}

impl PageMetadata {
    pub fn full_title(&self, site: &SiteConfig) -> String {
        if self.path == "/" {
            format!("{} | {}", site.name, self.title)
        } else {
            format!("{} | {}", self.title, site.name)
        }
    }

    pub fn canonical_url(&self, site: &SiteConfig) -> String {
        site.url_for(self.path)
    }

    fn og_type(&self) -> &'static str {
        match self.schema {
            SchemaKind::WebSite => "website",
            SchemaKind::WebPage | SchemaKind::SoftwareApplication => "article",
        }
    }

    pub fn json_ld(&self, site: &SiteConfig) -> Value {
        let url = self.canonical_url(site);
        match self.schema {
            SchemaKind::WebSite => json!({
                "@context": "https://schema.org",
                "@type": "WebSite",
                "name": site.name,
                "url": url,
                "description": self.description,
            }),
            SchemaKind::WebPage => json!({
                "@context": "https://schema.org",
                "@type": "WebPage",
                "name": self.title,
                "url": url,
                "description": self.description,
                "isPartOf": { "@type": "WebSite", "name": site.name, "url": site.url_for("/") },
            }),
            SchemaKind::SoftwareApplication => json!({
                "@context": "https://schema.org",
                "@type": "SoftwareApplication",
                "name": self.title,
                "url": url,
                "description": self.description,
                "applicationCategory": "DeveloperApplication",
                "operatingSystem": "Any",
                "offers": { "@type": "Offer", "price": "0", "priceCurrency": "USD" },
            }),
        }
    }

    /// Everything that goes into `<head>` besides the stylesheet.
    pub fn head(&self, site: &SiteConfig) -> Markup {
        let title = self.full_title(site);
        let canonical = self.canonical_url(site);
        // serde_json does not escape `<`, a `</script>` inside a description would end the block
        let json_ld = self.json_ld(site).to_string().replace('<', "\\u003c");
        html! {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            title { (title) }
            meta name="description" content=(self.description);
            @if !self.keywords.is_empty() {
                meta name="keywords" content=(self.keywords.join(", "));
            }
            link rel="canonical" href=(canonical);
            meta property="og:title" content=(title);
            meta property="og:description" content=(self.description);
            meta property="og:url" content=(canonical);
            meta property="og:type" content=(self.og_type());
            meta property="og:site_name" content=(site.name);
            meta name="twitter:card" content="summary";
            script type="application/ld+json" { (PreEscaped(json_ld)) }
        }
    }
}
