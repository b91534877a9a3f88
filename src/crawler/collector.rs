//! Link collection from the parent page

use crate::crawler::charset::decode_page_lossy;
use crate::crawler::fetcher::fetch_page;
use crate::crawler::parser::extract_hrefs;
use crate::url::resolve_href;
use crate::DownloadError;
use reqwest::Client;

/// Produces the ordered list of absolute URLs to export
///
/// Every anchor whose href ends in `html` contributes one entry, in document
/// order and with duplicates kept. Relative hrefs are appended to
/// `site_path`, which must already end in `/`.
///
/// # Example
///
/// ```
/// use download_all::collect_links;
///
/// let html = r#"<a href="page2.html">2</a><a href="http://other.com/x.html">x</a><a href="a.pdf">pdf</a>"#;
/// let links = collect_links(html, "http://example.com/docs/");
/// assert_eq!(links, vec![
///     "http://example.com/docs/page2.html".to_string(),
///     "http://other.com/x.html".to_string(),
/// ]);
/// ```
pub fn collect_links(parent_markup: &str, site_path: &str) -> Vec<String> {
    extract_hrefs(parent_markup)
        .iter()
        .map(|href| resolve_href(href, site_path))
        .collect()
}

/// Fetches the parent page once and collects its links
///
/// A failed parent fetch is fatal and returns
/// [`DownloadError::ParentFetch`]; no partial list is produced. The parent
/// markup is decoded in its declared charset, lossily, since only its
/// anchors are used.
pub async fn fetch_parent_links(
    client: &Client,
    parent_url: &str,
    site_path: &str,
) -> Result<Vec<String>, DownloadError> {
    tracing::info!("Fetching parent page {}", parent_url);

    let page = fetch_page(client, parent_url)
        .await
        .map_err(|source| DownloadError::ParentFetch {
            url: parent_url.to_string(),
            source,
        })?;

    let markup = decode_page_lossy(&page);
    let links = collect_links(&markup, site_path);

    tracing::debug!("Resolved links against site path {}", site_path);
    for link in &links {
        tracing::trace!("Collected {}", link);
    }

    Ok(links)
}
