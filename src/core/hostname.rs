//! `pear:` authority decoding.
//!
//! The authority is split on `.` and the segment count picks the shape:
//!
//! | Segments | Shape                              |
//! |----------|------------------------------------|
//! | 1        | `keyOrAlias`                       |
//! | 3        | `fork.length.keyOrAlias`           |
//! | 4        | `fork.length.keyOrAlias.hash`      |
//!
//! Any other count is rejected, including the bare `fork.length` pair.

use tracing::trace;

use crate::alias::AliasTable;
use crate::error::LinkError;
use crate::key::DriveKey;
use crate::types::{Drive, PEAR};

/// Decode a `pear:` hostname into its drive fields.
///
/// # Examples
///
/// ```
/// use pear_link::{decode_hostname, AliasTable};
///
/// let host = "2.2455.b9abnxwa71999xsweicj6ndya8w9w39z7ssg43pkohd76kzcgpmo";
/// let drive = decode_hostname(host, &AliasTable::empty()).unwrap();
/// assert_eq!(drive.fork, Some(2));
/// assert_eq!(drive.length, Some(2455));
/// assert_eq!(drive.hash, None);
/// ```
pub fn decode_hostname(hostname: &str, aliases: &AliasTable) -> Result<Drive, LinkError> {
    if hostname.is_empty() {
        return Err(LinkError::IncorrectHostname);
    }

    let segments: Vec<&str> = hostname.split('.').collect();
    trace!(hostname, segments = segments.len(), "decoding pear hostname");

    let drive = match segments.as_slice() {
        [key_or_alias] => {
            let (key, alias) = resolve_key(key_or_alias, aliases)?;
            Drive {
                key: Some(key),
                fork: None,
                length: None,
                hash: None,
                alias,
            }
        }
        [fork, length, key_or_alias] => {
            let (fork, length) = (parse_version(fork)?, parse_version(length)?);
            let (key, alias) = resolve_key(key_or_alias, aliases)?;
            Drive {
                key: Some(key),
                fork: Some(fork),
                length: Some(length),
                hash: None,
                alias,
            }
        }
        [fork, length, key_or_alias, hash] => {
            let (fork, length) = (parse_version(fork)?, parse_version(length)?);
            let (key, alias) = resolve_key(key_or_alias, aliases)?;
            Drive {
                key: Some(key),
                fork: Some(fork),
                length: Some(length),
                hash: Some(DriveKey::decode(hash)?),
                alias,
            }
        }
        _ => return Err(LinkError::IncorrectHostname),
    };

    Ok(drive)
}

/// Resolve a key segment through the alias table, falling back to decoding
/// it as key text.
pub fn resolve_key(
    key_or_alias: &str,
    aliases: &AliasTable,
) -> Result<(DriveKey, Option<String>), LinkError> {
    match aliases.resolve(key_or_alias) {
        Some(key) => Ok((*key, Some(key_or_alias.to_string()))),
        None => Ok((DriveKey::decode(key_or_alias)?, None)),
    }
}

/// Origin of a drive: its alias when it has one, its encoded key otherwise.
pub fn drive_origin(key: &DriveKey, aliases: &AliasTable) -> String {
    match aliases.alias_for(key) {
        Some(alias) => format!("{}//{}", PEAR, alias),
        None => format!("{}//{}", PEAR, key.encode()),
    }
}

/// Fork and length are plain decimal integers.
fn parse_version(segment: &str) -> Result<u64, LinkError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LinkError::IncorrectHostname);
    }
    segment.parse().map_err(|_| LinkError::IncorrectHostname)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_Z32: &str = "b9abnxwa71999xsweicj6ndya8w9w39z7ssg43pkohd76kzcgpmo";

    fn aliases() -> AliasTable {
        let key = DriveKey::decode(KEY_Z32).unwrap();
        AliasTable::new([("app".to_string(), key)]).unwrap()
    }

    #[test]
    fn test_single_segment_key() {
        let drive = decode_hostname(KEY_Z32, &AliasTable::empty()).unwrap();
        assert_eq!(drive.key, Some(DriveKey::decode(KEY_Z32).unwrap()));
        assert_eq!(drive.fork, None);
        assert_eq!(drive.length, None);
        assert_eq!(drive.alias, None);
    }

    #[test]
    fn test_single_segment_alias() {
        let drive = decode_hostname("app", &aliases()).unwrap();
        assert_eq!(drive.alias.as_deref(), Some("app"));
        assert_eq!(drive.key, Some(DriveKey::decode(KEY_Z32).unwrap()));
    }

    #[test]
    fn test_versioned_alias() {
        let drive = decode_hostname("0.12.app", &aliases()).unwrap();
        assert_eq!(drive.fork, Some(0));
        assert_eq!(drive.length, Some(12));
        assert_eq!(drive.alias.as_deref(), Some("app"));
    }

    #[test]
    fn test_hash_is_never_alias_resolved() {
        let result = decode_hostname("1.2.app.app", &aliases());
        assert!(matches!(result, Err(LinkError::InvalidKey(_))));
    }

    #[test]
    fn test_rejected_segment_counts() {
        let hosts = vec![
            "2.2455".to_string(),
            format!("1.2.3.{}.{}", KEY_Z32, KEY_Z32),
            format!("a.b.c.d.e.{}", KEY_Z32),
        ];

        for host in hosts {
            assert_eq!(
                decode_hostname(&host, &AliasTable::empty()),
                Err(LinkError::IncorrectHostname),
                "Should reject hostname: {}",
                host
            );
        }
    }

    #[test]
    fn test_empty_hostname() {
        assert_eq!(
            decode_hostname("", &aliases()),
            Err(LinkError::IncorrectHostname)
        );
    }

    #[test]
    fn test_non_integer_version() {
        let bad_versions = vec!["x.1", "1.x", "-1.2", "1.+2", ".2", "1.", "99999999999999999999.1"];

        for version in bad_versions {
            let host = format!("{}.{}", version, KEY_Z32);
            assert_eq!(
                decode_hostname(&host, &AliasTable::empty()),
                Err(LinkError::IncorrectHostname),
                "Should reject version: {}",
                version
            );
        }
    }

    #[test]
    fn test_invalid_key_propagates() {
        let result = decode_hostname("some-invalid-key", &AliasTable::empty());
        assert!(matches!(result, Err(LinkError::InvalidKey(_))));
    }

    #[test]
    fn test_drive_origin_prefers_alias() {
        let key = DriveKey::decode(KEY_Z32).unwrap();
        assert_eq!(drive_origin(&key, &aliases()), "pear://app");
        assert_eq!(
            drive_origin(&key, &AliasTable::empty()),
            format!("pear://{}", KEY_Z32)
        );
    }
}
