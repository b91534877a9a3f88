//! Charset detection and decoding for fetched pages
//!
//! The encoding is taken, in order, from a byte order mark, the `charset`
//! parameter of the Content-Type header, a `<meta>` charset declaration in
//! the first kilobyte of the document, and finally defaults to UTF-8.

use crate::crawler::fetcher::FetchedPage;
use encoding_rs::{Encoding, UTF_8};
use thiserror::Error;

/// How far into a document `<meta>` charset declarations are looked for
const META_SNIFF_LEN: usize = 1024;

/// The page contains bytes that are invalid in its declared encoding
#[derive(Debug, Error)]
#[error("bytes are not valid {encoding}")]
pub struct DecodeError {
    pub encoding: &'static str,
}

/// Picks the encoding of a page and the length of any byte order mark
pub fn detect_encoding(bytes: &[u8], content_type: Option<&str>) -> (&'static Encoding, usize) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return (encoding, bom_len);
    }

    let declared = content_type
        .and_then(charset_from_content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| charset_from_meta(bytes).and_then(|label| Encoding::for_label(label.as_bytes())));

    (declared.unwrap_or(UTF_8), 0)
}

/// Decodes a page, failing on any byte sequence invalid in its encoding
///
/// # Example
///
/// ```
/// use download_all::crawler::{decode_page, FetchedPage};
///
/// let page = FetchedPage {
///     body: b"<p>caf\xE9</p>".to_vec(),
///     content_type: Some("text/html; charset=iso-8859-1".to_string()),
/// };
/// assert_eq!(decode_page(&page).unwrap(), "<p>café</p>");
/// ```
pub fn decode_page(page: &FetchedPage) -> Result<String, DecodeError> {
    let (encoding, bom_len) = detect_encoding(&page.body, page.content_type.as_deref());

    encoding
        .decode_without_bom_handling_and_without_replacement(&page.body[bom_len..])
        .map(|text| text.into_owned())
        .ok_or(DecodeError {
            encoding: encoding.name(),
        })
}

/// Decodes a page, replacing invalid sequences with U+FFFD
pub fn decode_page_lossy(page: &FetchedPage) -> String {
    let (encoding, bom_len) = detect_encoding(&page.body, page.content_type.as_deref());
    let (text, had_errors) = encoding.decode_without_bom_handling(&page.body[bom_len..]);

    if had_errors {
        tracing::debug!("Replaced invalid {} sequences", encoding.name());
    }

    text.into_owned()
}

fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
        } else {
            None
        }
    })
}

fn charset_from_meta(bytes: &[u8]) -> Option<String> {
    let head = &bytes[..bytes.len().min(META_SNIFF_LEN)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();

    head.match_indices("<meta").find_map(|(start, _)| {
        let tag = &head[start..];
        let tag = &tag[..tag.find('>').unwrap_or(tag.len())];
        let value = &tag[tag.find("charset=")? + "charset=".len()..];
        let value = value.trim_start_matches(|c| c == '"' || c == '\'');
        let end = value
            .find(|c: char| c == '"' || c == '\'' || c == ';' || c == '/' || c.is_whitespace())
            .unwrap_or(value.len());

        let label = &value[..end];
        (!label.is_empty()).then(|| label.to_string())
    })
}
