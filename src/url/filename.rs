use crate::UrlError;

/// Returns the final path segment of a URL, the text after the last `/`
///
/// # Returns
///
/// * `Ok(&str)` - The non-empty final segment
/// * `Err(UrlError::NoFileName)` - The URL ends in `/` or has no segment
///
/// # Examples
///
/// ```
/// use download_all::url::file_name_for;
///
/// assert_eq!(file_name_for("http://x.com/dir/report.html").unwrap(), "report.html");
/// assert!(file_name_for("http://x.com/dir/").is_err());
/// ```
pub fn file_name_for(url: &str) -> Result<&str, UrlError> {
    let segment = match url.rfind('/') {
        Some(idx) => &url[idx + 1..],
        None => url,
    };

    if segment.is_empty() {
        return Err(UrlError::NoFileName(url.to_string()));
    }

    Ok(segment)
}

/// Returns the PDF file name for a URL
///
/// The final path segment has its extension (the text after its last `.`)
/// replaced by `pdf`. A segment without a `.` gets `.pdf` appended.
///
/// # Examples
///
/// ```
/// use download_all::url::pdf_name_for;
///
/// assert_eq!(pdf_name_for("http://x.com/dir/report.html").unwrap(), "report.pdf");
/// assert_eq!(pdf_name_for("http://x.com/dir/v1.2.html").unwrap(), "v1.2.pdf");
/// ```
pub fn pdf_name_for(url: &str) -> Result<String, UrlError> {
    let segment = file_name_for(url)?;

    let stem = match segment.rfind('.') {
        Some(idx) => &segment[..idx],
        None => segment,
    };

    if stem.is_empty() {
        return Err(UrlError::NoFileName(url.to_string()));
    }

    Ok(format!("{}.pdf", stem))
}
