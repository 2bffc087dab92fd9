//! Core data structures produced by parsing and consumed by serialization.

use serde::{Deserialize, Serialize};

use crate::key::DriveKey;

/// Scheme of local file links, including the trailing colon.
pub const FILE: &str = "file:";

/// Scheme of application links, including the trailing colon.
pub const PEAR: &str = "pear:";

/// The drive part of a link.
///
/// Every field is `None` for `file:` links. For `pear:` links `key` is
/// always set, `fork` and `length` are set together or not at all, and
/// `hash` is only set when both are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drive {
    /// Drive key, resolved through the alias table when an alias was used.
    #[serde(default)]
    pub key: Option<DriveKey>,
    /// Fork marker of a pinned version.
    #[serde(default)]
    pub fork: Option<u64>,
    /// Length of a pinned version.
    #[serde(default)]
    pub length: Option<u64>,
    /// Content hash pin.
    #[serde(default)]
    pub hash: Option<DriveKey>,
    /// Alias the link was written with, if any.
    #[serde(default)]
    pub alias: Option<String>,
}

impl Drive {
    /// Whether the link pins a fork/length version.
    pub fn is_versioned(&self) -> bool {
        self.fork.is_some() && self.length.is_some()
    }

    /// Whether the link pins a content hash.
    pub fn is_pinned(&self) -> bool {
        self.hash.is_some()
    }
}

/// A parsed `file:` or `pear:` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// `file:` or `pear:`
    pub protocol: String,
    /// Path as the URL grammar yields it, possibly empty for `pear:` links.
    ///
    /// Not percent-decoded: `/my dir/a.js` is stored as `/my%20dir/a.js`,
    /// the form the serializer writes back verbatim.
    #[serde(default)]
    pub pathname: String,
    /// Query including the leading `?`, or empty.
    #[serde(default)]
    pub search: String,
    /// Fragment including the leading `#`, or empty.
    #[serde(default)]
    pub hash: String,
    /// Scheme and authority, without trailing separator.
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub drive: Drive,
}

impl Link {
    pub fn is_pear(&self) -> bool {
        self.protocol == PEAR
    }

    pub fn is_file(&self) -> bool {
        self.protocol == FILE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_predicates() {
        let drive = Drive {
            key: Some(DriveKey::from_bytes([7; 32])),
            fork: Some(2),
            length: Some(2455),
            hash: None,
            alias: None,
        };
        assert!(drive.is_versioned());
        assert!(!drive.is_pinned());

        assert!(!Drive::default().is_versioned());
    }

    #[test]
    fn test_link_protocol_predicates() {
        let link = Link {
            protocol: FILE.to_string(),
            pathname: "/tmp/app".to_string(),
            search: String::new(),
            hash: String::new(),
            origin: "file:///tmp/app".to_string(),
            drive: Drive::default(),
        };

        assert!(link.is_file());
        assert!(!link.is_pear());
    }

    #[test]
    fn test_link_json_defaults() {
        let link: Link = serde_json::from_str(r#"{"protocol":"file:","pathname":"/a"}"#).unwrap();
        assert_eq!(link.search, "");
        assert_eq!(link.drive, Drive::default());
    }
}
