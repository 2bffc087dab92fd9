//! Link parsing.
//!
//! Classify the input, decompose it with the URL grammar, then build either
//! a `file:` link or a `pear:` link with its drive fields and origin.

use tracing::debug;

use crate::alias::AliasTable;
use crate::core::hostname::{decode_hostname, drive_origin};
use crate::error::LinkError;
use crate::platform::Platform;
use crate::types::{Drive, Link, FILE, PEAR};
use crate::url::{effective_url, normalize_link, UrlParts};

/// Parse a link, URL or filesystem path.
///
/// # Examples
///
/// ```
/// use pear_link::{parse_link, AliasTable, FixedPlatform};
///
/// let platform = FixedPlatform::unix("/home/me");
/// let link = parse_link("app/index.js", &AliasTable::empty(), &platform).unwrap();
/// assert_eq!(link.protocol, "file:");
/// assert_eq!(link.pathname, "/home/me/app/index.js");
/// assert_eq!(link.drive.key, None);
/// ```
pub fn parse_link<P: Platform>(
    input: &str,
    aliases: &AliasTable,
    platform: &P,
) -> Result<Link, LinkError> {
    let url = effective_url(input, platform)?;
    let parts = UrlParts::from(&url);

    let link = match parts.protocol.as_str() {
        FILE => file_link(parts)?,
        PEAR => pear_link(parts, aliases)?,
        _ => return Err(LinkError::UnsupportedProtocol(parts.protocol)),
    };

    debug!(input, origin = %link.origin, "parsed link");
    Ok(link)
}

fn file_link(parts: UrlParts) -> Result<Link, LinkError> {
    if parts.pathname.is_empty() {
        return Err(LinkError::PathMissing);
    }
    if !parts.hostname.is_empty() {
        return Err(LinkError::NotRooted);
    }

    let origin = normalize_link(
        &format!("{}//{}{}", parts.protocol, parts.hostname, parts.pathname),
        '/',
    );

    Ok(Link {
        protocol: parts.protocol,
        pathname: parts.pathname,
        search: parts.search,
        hash: parts.hash,
        origin,
        drive: Drive::default(),
    })
}

fn pear_link(parts: UrlParts, aliases: &AliasTable) -> Result<Link, LinkError> {
    let drive = decode_hostname(&parts.hostname, aliases)?;
    let origin = match &drive.key {
        Some(key) => drive_origin(key, aliases),
        None => return Err(LinkError::MissingKey),
    };

    Ok(Link {
        protocol: parts.protocol,
        pathname: parts.pathname,
        search: parts.search,
        hash: parts.hash,
        origin,
        drive,
    })
}
