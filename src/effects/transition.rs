pub const INTERNAL_LINK_SELECTOR: &str = r#"a[href$=".html"]"#;
pub const FADE_IN_DELAY_MS: u32 = 100;
pub const FADE_OUT_MS: u32 = 400;
pub const FADE_IN_TRANSITION: &str = "opacity 0.6s ease-in-out";
pub const FADE_OUT_TRANSITION: &str = "opacity 0.4s ease-in-out";

/// Links that navigate within the site fade the page out first.
pub fn is_internal_href(href: &str) -> bool {
    !href.starts_with("http")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_pages_are_internal() {
        assert!(is_internal_href("about.html"));
        assert!(is_internal_href("/projects/index.html"));
        assert!(is_internal_href("./certifications.html"));
    }

    #[test]
    fn absolute_http_links_are_external() {
        assert!(!is_internal_href("https://example.com/index.html"));
        assert!(!is_internal_href("http://example.com/page.html"));
    }

    #[test]
    fn fade_out_finishes_before_navigation() {
        assert!(FADE_OUT_TRANSITION.contains("0.4s"));
        assert_eq!(FADE_OUT_MS, 400);
    }
}
