//! Link serialization, the inverse of parsing.

use tracing::trace;

use crate::error::LinkError;
use crate::types::{Drive, Link, FILE, PEAR};

/// Rebuild the canonical address string of a link.
///
/// `file:` links reuse their pathname verbatim. `pear:` links rebuild the
/// authority from the drive, preferring the alias over the encoded key and
/// leaving out version and hash segments that are not set.
///
/// # Examples
///
/// ```
/// use pear_link::{serialize_link, Drive, DriveKey, Link};
///
/// let link = Link {
///     protocol: "pear:".to_string(),
///     pathname: "/index.html".to_string(),
///     search: String::new(),
///     hash: String::new(),
///     origin: String::new(),
///     drive: Drive {
///         key: Some(DriveKey::from_bytes([0; 32])),
///         fork: Some(1),
///         length: Some(42),
///         hash: None,
///         alias: Some("keet".to_string()),
///     },
/// };
/// assert_eq!(serialize_link(&link).unwrap(), "pear://1.42.keet/index.html");
/// ```
pub fn serialize_link(link: &Link) -> Result<String, LinkError> {
    let serialized = match link.protocol.as_str() {
        FILE => format!(
            "{}//{}{}{}",
            link.protocol, link.pathname, link.search, link.hash
        ),
        PEAR => format!(
            "{}//{}{}{}{}",
            link.protocol,
            drive_authority(&link.drive)?,
            link.pathname,
            link.search,
            link.hash
        ),
        _ => return Err(LinkError::UnsupportedProtocol(link.protocol.clone())),
    };

    trace!(%serialized, "serialized link");
    Ok(serialized)
}

/// Join the present drive fields into a `pear:` authority.
pub fn drive_authority(drive: &Drive) -> Result<String, LinkError> {
    let key = match (&drive.alias, &drive.key) {
        (Some(alias), _) => alias.clone(),
        (None, Some(key)) => key.encode(),
        (None, None) => return Err(LinkError::MissingKey),
    };

    let mut segments = Vec::with_capacity(4);
    match (drive.fork, drive.length) {
        (Some(fork), Some(length)) => {
            segments.push(fork.to_string());
            segments.push(length.to_string());
        }
        (None, None) => {
            if drive.hash.is_some() {
                return Err(LinkError::IncompleteVersion(
                    "content hash requires fork and length",
                ));
            }
        }
        _ => {
            return Err(LinkError::IncompleteVersion(
                "fork and length must be given together",
            ))
        }
    }
    segments.push(key);
    if let Some(hash) = &drive.hash {
        segments.push(hash.encode());
    }

    Ok(segments.join("."))
}
