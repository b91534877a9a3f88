//! HTML parser for extracting qualifying hrefs and page bodies
//!
//! This module handles parsing HTML content to extract:
//! - Anchor hrefs ending in `html`, in document order
//! - The `<body>` element of a linked page, serialized back to markup

use crate::url::is_qualifying_href;
use scraper::{Html, Selector};

/// Extracts every qualifying anchor href from a parent page
///
/// # Rules
///
/// - Only `<a href="...">` elements are considered
/// - The raw attribute value must end in `html` (see [`is_qualifying_href`])
/// - Document order is kept and duplicates are not removed
///
/// # Example
///
/// ```
/// use download_all::crawler::extract_hrefs;
///
/// let html = r#"<body><a href="a.html">A</a><a href="b.pdf">B</a><a href="a.html">A</a></body>"#;
/// assert_eq!(extract_hrefs(html), vec!["a.html", "a.html"]);
/// ```
pub fn extract_hrefs(markup: &str) -> Vec<String> {
    let document = Html::parse_document(markup);
    let mut hrefs = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if is_qualifying_href(href) {
                    hrefs.push(href.to_string());
                }
            }
        }
    }

    hrefs
}

/// Extracts the `<body>` element of a page as markup text
///
/// The returned string includes the `<body>` tags themselves. The HTML5
/// parser synthesizes a body for documents that lack one, so `None` is only
/// returned if the selector itself cannot be built.
///
/// # Example
///
/// ```
/// use download_all::crawler::extract_body;
///
/// let body = extract_body("<html><head><title>T</title></head><body><p>Hi</p></body></html>");
/// assert_eq!(body.as_deref(), Some("<body><p>Hi</p></body>"));
/// ```
pub fn extract_body(markup: &str) -> Option<String> {
    let document = Html::parse_document(markup);
    let body_selector = Selector::parse("body").ok()?;

    document
        .select(&body_selector)
        .next()
        .map(|element| element.html())
}
