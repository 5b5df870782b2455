// src/services/changelog.rs

//! Changelog page dissection.
//!
//! Extracts the page heading and candidate distribution links, and picks the
//! Linux x64 stable tarball among them.

use scraper::{Html, Selector};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::ChangelogPage;
use crate::utils::resolve_url;

/// Anchor text marker used by newer changelog pages.
const NEW_SYNTAX_MARKER: &str = "tarball";

/// Anchor text marker used by older changelog pages.
const OLD_SYNTAX_MARKER: &str = "tar.";

/// URL substring identifying the Linux x64 stable-channel distribution.
pub const LINUX_X64_STABLE: &str = "linux-x64/stable";

/// Parse a fetched changelog page.
///
/// Tries the new link syntax first and falls back to the old one; an empty
/// `dist_links` means the page carries neither.
pub fn parse_page(html: &str, page_url: &str) -> Result<ChangelogPage> {
    let document = Html::parse_document(html);
    let base = Url::parse(page_url)?;

    let heading = extract_heading(&document)?;
    let mut dist_links = links_matching(&document, &base, NEW_SYNTAX_MARKER)?;
    if dist_links.is_empty() {
        dist_links = links_matching(&document, &base, OLD_SYNTAX_MARKER)?;
    }

    Ok(ChangelogPage {
        heading,
        dist_links,
    })
}

/// Pick the first link (document order) for the Linux x64 stable channel.
pub fn select_dist_link(links: &[String]) -> Option<&str> {
    links
        .iter()
        .map(String::as_str)
        .find(|link| link.contains(LINUX_X64_STABLE))
}

/// Text of the first `h1` on the page, if any.
fn extract_heading(document: &Html) -> Result<Option<String>> {
    let h1_sel = parse_selector("h1")?;
    let heading = document
        .select(&h1_sel)
        .next()
        .map(|h1| h1.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty());
    Ok(heading)
}

/// Hrefs of paragraph anchors whose visible text contains `marker`,
/// resolved against the page URL. Anchors without an href are dropped.
fn links_matching(document: &Html, base: &Url, marker: &str) -> Result<Vec<String>> {
    let anchor_sel = parse_selector("p > a")?;
    let links = document
        .select(&anchor_sel)
        .filter(|a| a.text().collect::<String>().contains(marker))
        .filter_map(|a| a.value().attr("href"))
        .map(|href| resolve_url(base, href))
        .collect();
    Ok(links)
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_URL: &str = "https://code.visualstudio.com/updates/v1_45";

    #[test]
    fn test_heading_extracted() {
        let page = parse_page("<h1>September 2023</h1>", PAGE_URL).unwrap();
        assert_eq!(page.heading.as_deref(), Some("September 2023"));
    }

    #[test]
    fn test_heading_absent() {
        let page = parse_page("<p>no heading here</p>", PAGE_URL).unwrap();
        assert!(page.heading.is_none());
    }

    #[test]
    fn test_new_syntax_preferred_over_old() {
        let html = r#"
            <p><a href="https://dl.example.com/new/linux-x64/stable">tarball</a></p>
            <p><a href="https://dl.example.com/old/code.tar.gz">code.tar.gz</a></p>
        "#;
        let page = parse_page(html, PAGE_URL).unwrap();
        assert_eq!(
            page.dist_links,
            vec!["https://dl.example.com/new/linux-x64/stable"]
        );
    }

    #[test]
    fn test_old_syntax_fallback() {
        let html = r#"
            <p><a href="https://dl.example.com/code-linux.tar.gz">code-linux.tar.gz</a></p>
        "#;
        let page = parse_page(html, PAGE_URL).unwrap();
        assert_eq!(
            page.dist_links,
            vec!["https://dl.example.com/code-linux.tar.gz"]
        );
    }

    #[test]
    fn test_no_links_yields_empty_list() {
        let page = parse_page("<h1>Empty</h1><p>text only</p>", PAGE_URL).unwrap();
        assert!(page.dist_links.is_empty());
    }

    #[test]
    fn test_only_paragraph_anchors_counted() {
        // The marker must appear on an anchor directly under a <p>.
        let html = r#"
            <div><a href="https://dl.example.com/a">tarball</a></div>
            <p><span><a href="https://dl.example.com/b">tarball</a></span></p>
        "#;
        let page = parse_page(html, PAGE_URL).unwrap();
        assert!(page.dist_links.is_empty());
    }

    #[test]
    fn test_anchor_without_href_dropped() {
        let html = r#"<p><a>tarball</a><a href="https://dl.example.com/x">tarball</a></p>"#;
        let page = parse_page(html, PAGE_URL).unwrap();
        assert_eq!(page.dist_links, vec!["https://dl.example.com/x"]);
    }

    #[test]
    fn test_relative_href_resolved_against_page() {
        let html = r#"<p><a href="/download/linux-x64/stable">tarball</a></p>"#;
        let page = parse_page(html, PAGE_URL).unwrap();
        assert_eq!(
            page.dist_links,
            vec!["https://code.visualstudio.com/download/linux-x64/stable"]
        );
    }

    #[test]
    fn test_select_first_platform_match_in_order() {
        let links = vec![
            "https://dl.example.com/darwin/stable".to_string(),
            "https://dl.example.com/linux-x64/stable/a".to_string(),
            "https://dl.example.com/linux-x64/stable/b".to_string(),
        ];
        assert_eq!(
            select_dist_link(&links),
            Some("https://dl.example.com/linux-x64/stable/a")
        );
    }

    #[test]
    fn test_select_none_without_platform_match() {
        let links = vec![
            "https://dl.example.com/darwin/stable".to_string(),
            "https://dl.example.com/win32-x64/stable".to_string(),
        ];
        assert_eq!(select_dist_link(&links), None);
    }
}
