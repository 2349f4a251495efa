use maud::{html, Markup, Render};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonType {
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// Anything that looks like a link or a button on the site. The variant decides the element
/// and its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmartLink<'a> {
    /// A path on this site, e.g. `/docs/api`
    Internal { href: &'a str, label: &'a str },
    /// An absolute URL elsewhere, opened in a new tab
    External { href: &'a str, label: &'a str },
    /// An anchor on the current page, given without the leading `#`
    Hash { target: &'a str, label: &'a str },
    Button { kind: ButtonType, label: &'a str },
}

impl SmartLink<'_> {
    pub fn label(&self) -> &str {
        match self {
            SmartLink::Internal { label, .. }
            | SmartLink::External { label, .. }
            | SmartLink::Hash { label, .. }
            | SmartLink::Button { label, .. } => label,
        }
    }
}

impl Render for SmartLink<'_> {
    fn render(&self) -> Markup {
        match self {
            SmartLink::Internal { href, label } => html! { a href=(href) { (label) } },
            SmartLink::External { href, label } => html! {
                a href=(href) target="_blank" rel="noopener noreferrer" { (label) }
            },
            SmartLink::Hash { target, label } => html! { a href={ "#" (target) } { (label) } },
            SmartLink::Button { kind, label } => html! { button type=(kind.as_str()) { (label) } },
        }
    }
}
