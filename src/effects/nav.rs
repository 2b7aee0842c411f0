pub const NAV_LINK_SELECTOR: &str = ".nav-links a";
pub const ACTIVE_CLASS: &str = "active";
pub const DEFAULT_PAGE: &str = "index.html";

/// Last segment of a location pathname, `index.html` when it is empty.
pub fn current_page_segment(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => DEFAULT_PAGE,
    }
}

/// One flag per link: whether its href names the current page.
pub fn active_flags<'a, I>(hrefs: I, current_page: &str) -> Vec<bool>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    hrefs
        .into_iter()
        .map(|href| href == Some(current_page))
        .collect()
}
