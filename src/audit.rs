//! Checks site markup against the hooks the in-page effects look for.

use crate::effects::anchor::{fragment_target, FRAGMENT_LINK_SELECTOR};
use crate::effects::certificate::{certificate_path, CERTIFICATE_BUTTON_SELECTOR, CERT_ATTRIBUTE};
use crate::effects::nav::{active_flags, current_page_segment, NAV_LINK_SELECTOR};
use crate::effects::transition::{is_internal_href, INTERNAL_LINK_SELECTOR};
use crate::telemetry::{log_event, LogLevel};
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::{fs, io, path::Path};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FindingKind {
    MissingCertificate,
    MissingPage,
    DanglingFragment,
    NoActiveNavLink,
}

impl FindingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingCertificate => "missing_certificate",
            Self::MissingPage => "missing_page",
            Self::DanglingFragment => "dangling_fragment",
            Self::NoActiveNavLink => "no_active_nav_link",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub page: String,
    pub kind: FindingKind,
    pub detail: String,
}

fn attribute_values(document: &Html, selector: &str, attribute: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr(attribute))
        .map(ToString::to_string)
        .collect()
}

fn site_relative(href: &str) -> &str {
    let path = href.split(|c| c == '#' || c == '?').next().unwrap_or(href);
    path.trim_start_matches("./").trim_start_matches('/')
}

/// Audits one page. `file_exists` answers for paths relative to the site root.
pub fn audit_page(page: &str, html: &str, file_exists: impl Fn(&str) -> bool) -> Vec<Finding> {
    let document = Html::parse_document(html);
    let mut findings = Vec::new();
    let mut report = |kind: FindingKind, detail: String| {
        findings.push(Finding {
            page: page.to_string(),
            kind,
            detail,
        });
    };

    for cert_name in attribute_values(&document, CERTIFICATE_BUTTON_SELECTOR, CERT_ATTRIBUTE) {
        let path = certificate_path(&cert_name);
        if !file_exists(&path) {
            report(FindingKind::MissingCertificate, path);
        }
    }

    for href in attribute_values(&document, INTERNAL_LINK_SELECTOR, "href") {
        if is_internal_href(&href) && !file_exists(site_relative(&href)) {
            report(FindingKind::MissingPage, href);
        }
    }

    let ids: HashSet<String> = attribute_values(&document, "[id]", "id").into_iter().collect();
    for href in attribute_values(&document, FRAGMENT_LINK_SELECTOR, "href") {
        if let Some(id) = fragment_target(&href) {
            if !ids.contains(id) {
                report(FindingKind::DanglingFragment, href.clone());
            }
        }
    }

    let nav_hrefs = attribute_values(&document, NAV_LINK_SELECTOR, "href");
    if !nav_hrefs.is_empty() {
        let current_page = current_page_segment(page);
        let flags = active_flags(nav_hrefs.iter().map(|href| Some(href.as_str())), current_page);
        if !flags.contains(&true) {
            report(FindingKind::NoActiveNavLink, current_page.to_string());
        }
    }

    findings
}

/// Audits every `.html` file directly under `root`, in file name order.
pub fn audit_site(root: &Path) -> io::Result<Vec<Finding>> {
    let mut pages: Vec<String> = fs::read_dir(root)?
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(".html"))
        .collect();
    pages.sort();

    let mut findings = Vec::new();
    for page in pages {
        let html = fs::read_to_string(root.join(&page))?;
        findings.extend(audit_page(&page, &html, |relative| {
            root.join(relative).is_file()
        }));
    }

    Ok(findings)
}

pub fn run_audit(root: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let findings = audit_site(root)?;

    for finding in &findings {
        log_event(
            LogLevel::Warn,
            "audit_finding",
            serde_json::json!({
                "page": finding.page,
                "kind": finding.kind.as_str(),
                "detail": finding.detail,
            }),
        );
    }

    log_event(
        LogLevel::Info,
        "audit_finished",
        serde_json::json!({
            "siteRoot": root.display().to_string(),
            "findings": findings.len(),
        }),
    );

    if findings.is_empty() {
        Ok(())
    } else {
        Err(format!("{} audit finding(s)", findings.len()).into())
    }
}
