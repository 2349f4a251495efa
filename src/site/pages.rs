use maud::{html, Markup, PreEscaped, Render, DOCTYPE};

use crate::api::params::{DEFAULT_COUNT, MAX_COUNT, MIN_COUNT};
use crate::ipsum::Units;
use crate::site::link::{ButtonType, SmartLink};
use crate::site::metadata::{PageMetadata, SchemaKind};
use crate::site::SiteConfig;

const CSS: &str = include_str!("../../static/style.css");

const NPM_PACKAGE_URL: &str = "https://www.npmjs.com/package/vegan-ipsum";
const VSCODE_EXTENSION_URL: &str =
    "https://marketplace.visualstudio.com/items?itemName=veganipsum.vegan-ipsum";
const REPOSITORY_URL: &str = "https://github.com/veganipsum/vegan-ipsum";
const CONTACT_EMAIL: &str = "hello@veganipsum.me";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Contact,
    ApiDocs,
    CliDocs,
    NpmDocs,
    VsCodeDocs,
}

const NAVIGATION: [(&str, &str); 5] = [
    ("/about", "About"),
    ("/docs/api", "API"),
    ("/docs/cli", "CLI"),
    ("/docs/npm", "NPM"),
    ("/docs/vscode", "VS Code"),
];

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::About,
        Page::Contact,
        Page::ApiDocs,
        Page::CliDocs,
        Page::NpmDocs,
        Page::VsCodeDocs,
    ];

    pub fn metadata(&self) -> PageMetadata {
        match self {
            Page::Home => PageMetadata {
                title: "Plant-based placeholder text",
                description: "Generate vegan-themed lorem ipsum for your designs, mockups and prototypes.",
                path: "/",
                keywords: &["lorem ipsum", "placeholder text", "vegan", "generator"],
                schema: SchemaKind::WebSite,
            },
            Page::About => PageMetadata {
                title: "About",
                description: "Why Vegan Ipsum exists and who makes it.",
                path: "/about",
                keywords: &["about", "vegan ipsum"],
                schema: SchemaKind::WebPage,
            },
            Page::Contact => PageMetadata {
                title: "Contact",
                description: "Get in touch with the Vegan Ipsum team.",
                path: "/contact",
                keywords: &["contact"],
                schema: SchemaKind::WebPage,
            },
            Page::ApiDocs => PageMetadata {
                title: "API",
                description: "Generate vegan placeholder text over HTTP with a single GET or POST request.",
                path: "/docs/api",
                keywords: &["api", "rest", "lorem ipsum api"],
                schema: SchemaKind::SoftwareApplication,
            },
            Page::CliDocs => PageMetadata {
                title: "CLI",
                description: "Generate vegan placeholder text from your terminal.",
                path: "/docs/cli",
                keywords: &["cli", "terminal", "command line"],
                schema: SchemaKind::SoftwareApplication,
            },
            Page::NpmDocs => PageMetadata {
                title: "NPM package",
                description: "Use the vegan-ipsum package from JavaScript and TypeScript.",
                path: "/docs/npm",
                keywords: &["npm", "javascript", "typescript"],
                schema: SchemaKind::SoftwareApplication,
            },
            Page::VsCodeDocs => PageMetadata {
                title: "VS Code extension",
                description: "Insert vegan placeholder text without leaving your editor.",
                path: "/docs/vscode",
                keywords: &["vscode", "extension", "editor"],
                schema: SchemaKind::SoftwareApplication,
            },
        }
    }

    pub fn render(&self, site: &SiteConfig) -> Markup {
        let metadata = self.metadata();
        let content = match self {
            Page::Home => home(site),
            Page::About => about(site),
            Page::Contact => contact(),
            Page::ApiDocs => api_docs(site),
            Page::CliDocs => cli_docs(site),
            Page::NpmDocs => npm_docs(),
            Page::VsCodeDocs => vscode_docs(),
        };
        layout(site, &metadata, content)
    }
}

fn layout(site: &SiteConfig, metadata: &PageMetadata, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (metadata.head(site))
                style { (PreEscaped(CSS)) }
            }
            body {
                header {
                    (internal(site, "/", &site.name))
                    nav {
                        @for (path, label) in NAVIGATION {
                            (internal(site, path, label))
                        }
                    }
                }
                main { (content) }
                footer {
                    (internal(site, "/contact", "Contact"))
                    (SmartLink::External { href: REPOSITORY_URL, label: "GitHub" })
                    (SmartLink::External { href: NPM_PACKAGE_URL, label: "npm" })
                }
            }
        }
    }
}

/// Internal links are served under the base URL's path.
fn internal(site: &SiteConfig, path: &str, label: &str) -> Markup {
    let href = site.path_for(path);
    SmartLink::Internal { href: &href, label }.render()
}

/// The generator form works without scripts: it submits straight to the API.
fn generator_form(site: &SiteConfig) -> Markup {
    html! {
        form id="generator" action=(site.path_for("/api")) method="get" {
            label for="count" { "Amount" }
            input id="count" name="count" type="number" min=(MIN_COUNT) max=(MAX_COUNT) value=(DEFAULT_COUNT);
            label for="units" { "Units" }
            select id="units" name="units" {
                @for units in Units::ALL {
                    option value=(units.as_str()) selected[units == Units::default()] { (units.as_str()) }
                }
            }
            input type="hidden" name="format" value="plain";
            (SmartLink::Button { kind: ButtonType::Submit, label: "Generate" })
        }
    }
}

fn home(site: &SiteConfig) -> Markup {
    html! {
        section {
            h1 { "Plant-based placeholder text" }
            p { "Lorem ipsum, but make it kale. Fill your layouts with chickpeas, tempeh and tahini." }
            (SmartLink::Hash { target: "generator", label: "Try the generator" })
        }
        section { (generator_form(site)) }
        section {
            h2 { "Everywhere you work" }
            ul {
                li { (internal(site, "/docs/api", "HTTP API")) }
                li { (internal(site, "/docs/cli", "Command line")) }
                li { (internal(site, "/docs/npm", "NPM package")) }
                li { (internal(site, "/docs/vscode", "VS Code extension")) }
            }
        }
    }
}

fn about(site: &SiteConfig) -> Markup {
    html! {
        h1 { "About " (site.name) }
        p {
            "Placeholder text does not have to be Latin. " (site.name)
            " swaps the classic filler for fruit, vegetables, grains and spices, so your mockups read a little more appetising."
        }
        p {
            "The project is open source. "
            (SmartLink::External { href: REPOSITORY_URL, label: "Browse the code" })
        }
    }
}

fn contact() -> Markup {
    let mailto = format!("mailto:{}", CONTACT_EMAIL);
    html! {
        h1 { "Contact" }
        p { "Questions, ideas or a favourite vegetable we forgot? Write to us." }
        p { (SmartLink::External { href: &mailto, label: CONTACT_EMAIL }) }
        p {
            "Bugs and feature requests are best filed as "
            (SmartLink::External { href: REPOSITORY_URL, label: "GitHub issues" })
            "."
        }
    }
}

fn api_docs(site: &SiteConfig) -> Markup {
    let endpoint = site.url_for("/api");
    html! {
        h1 { "API" }
        p { "Send a GET request with query parameters or a POST request with a JSON body to " code { (endpoint) } "." }
        table {
            thead { tr { th { "Parameter" } th { "Default" } th { "Allowed values" } } }
            tbody {
                tr { td { code { "count" } } td { (DEFAULT_COUNT) } td { (MIN_COUNT) " to " (MAX_COUNT) } }
                tr { td { code { "units" } } td { (Units::default().as_str()) } td { "paragraphs, sentences, words" } }
                tr { td { code { "format" } } td { "plain" } td { "plain, html" } }
            }
        }
        h2 { "Example" }
        pre { code { "curl '" (endpoint) "?count=2&units=sentences&format=plain'" } }
        pre { code { "{ \"text\": \"Kale tempeh miso lentils. Mango tahini sorrel fig.\" }" } }
        h2 { "Errors" }
        p {
            "Invalid parameters are answered with status 400 and a body of the form "
            code { "{ \"error\": \"...\" }" } ". Unexpected failures use status 500."
        }
    }
}

fn cli_docs(site: &SiteConfig) -> Markup {
    html! {
        h1 { "CLI" }
        p { "The " code { "vegan_ipsum_cli" } " binary calls the API and prints the text." }
        pre { code { "vegan_ipsum_cli --count 2 --units paragraphs --format plain" } }
        p {
            "It talks to " code { (site.url_for("/")) } " unless " code { "--url" }
            " or the " code { "VEGAN_IPSUM_URL" } " environment variable says otherwise. "
            "Press Ctrl-C to cancel a request."
        }
    }
}

fn npm_docs() -> Markup {
    html! {
        h1 { "NPM package" }
        pre { code { "npm install vegan-ipsum" } }
        pre { code { "import { generate } from 'vegan-ipsum';\n\ngenerate({ count: 3, units: 'sentences', format: 'plain' });" } }
        p { (SmartLink::External { href: NPM_PACKAGE_URL, label: "View on npm" }) }
    }
}

fn vscode_docs() -> Markup {
    html! {
        h1 { "VS Code extension" }
        p { "Open the command palette and run " code { "Vegan Ipsum: Insert paragraphs" } " to drop text at the cursor." }
        p { (SmartLink::External { href: VSCODE_EXTENSION_URL, label: "Install from the Marketplace" }) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteConfig {
        SiteConfig::new("Vegan Ipsum", "https://veganipsum.test").unwrap()
    }

    #[test]
    fn paths_are_unique() {
        let mut paths: Vec<&str> = Page::ALL.iter().map(|page| page.metadata().path).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Page::ALL.len());
    }

    #[test]
    fn home_has_generator_form() {
        let html = Page::Home.render(&site()).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<form id="generator" action="/api" method="get">"#));
        assert!(html.contains(r#"<input type="hidden" name="format" value="plain">"#));
        assert!(html.contains(r#"<option value="paragraphs" selected>paragraphs</option>"#));
    }

    #[test]
    fn prefixed_deployment_keeps_base_path() {
        let site = SiteConfig::new("Vegan Ipsum", "https://example.org/ipsum").unwrap();
        let html = Page::Home.render(&site).into_string();
        assert!(html.contains(r#"<form id="generator" action="/ipsum/api" method="get">"#));
        assert!(html.contains(r#"<a href="/ipsum/about">About</a>"#));
        assert!(html.contains(r#"<a href="/ipsum/docs/vscode">VS Code extension</a>"#));
        assert!(!html.contains(r#"href="/docs/"#));
    }

    #[test]
    fn api_docs_show_absolute_endpoint() {
        let html = Page::ApiDocs.render(&site()).into_string();
        assert!(html.contains("https://veganipsum.test/api"));
        assert!(html.contains("\"@type\":\"SoftwareApplication\""));
    }
}
