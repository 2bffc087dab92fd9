//! Generic URL decomposition.
//!
//! The URL grammar itself is delegated to the `url` crate; this module only
//! projects a parsed [`Url`] onto the fields links are built from.

use url::Url;

use crate::error::LinkError;

/// The raw parts of a URL a link is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    /// Scheme with trailing colon (`pear:`, `file:`)
    pub protocol: String,
    /// Authority host, empty when absent
    pub hostname: String,
    /// Path, possibly empty. Percent-escapes are kept, not decoded.
    pub pathname: String,
    /// Query with leading `?`, or empty
    pub search: String,
    /// Fragment with leading `#`, or empty
    pub hash: String,
}

impl From<&Url> for UrlParts {
    fn from(url: &Url) -> Self {
        Self {
            protocol: format!("{}:", url.scheme()),
            hostname: url.host_str().unwrap_or_default().to_string(),
            pathname: url.path().to_string(),
            search: prefixed('?', url.query()),
            hash: prefixed('#', url.fragment()),
        }
    }
}

/// An empty query or fragment is dropped along with its delimiter.
fn prefixed(delimiter: char, part: Option<&str>) -> String {
    match part {
        Some(part) if !part.is_empty() => format!("{}{}", delimiter, part),
        _ => String::new(),
    }
}

/// Parse a URL into the parts a link is built from.
///
/// # Examples
///
/// ```
/// use pear_link::split_url;
///
/// let parts = split_url("pear://keet/some/path?x=1#frag").unwrap();
/// assert_eq!(parts.protocol, "pear:");
/// assert_eq!(parts.hostname, "keet");
/// assert_eq!(parts.pathname, "/some/path");
/// assert_eq!(parts.search, "?x=1");
/// assert_eq!(parts.hash, "#frag");
/// ```
pub fn split_url(url: &str) -> Result<UrlParts, LinkError> {
    let parsed = Url::parse(url)?;
    Ok(UrlParts::from(&parsed))
}
