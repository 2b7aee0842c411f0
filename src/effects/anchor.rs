pub const FRAGMENT_LINK_SELECTOR: &str = r##"a[href^="#"]"##;

/// Element id a same-page anchor points at; `None` for a bare `#`.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
