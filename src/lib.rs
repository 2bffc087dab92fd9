//! pear-link - Parse, normalize and serialize application links
//!
//! This crate handles the two link families used to address application
//! bundles and local files interchangeably:
//!
//! - `file:///absolute/path` links (and bare absolute or relative paths)
//! - `pear://[fork.length.]keyOrAlias[.hash][/path][?query][#fragment]` links
//!   addressing a versioned drive by its 32-byte key or by an alias
//!
//! It only manipulates address strings; nothing is fetched or resolved
//! beyond the alias table.
//!
//! # Quick Start
//!
//! ```
//! use pear_link::{AliasTable, DriveKey, PearLink};
//!
//! let keet = DriveKey::decode("oeeoz3w6fjjt7bym3ndpa6hhicm8f8naxyk11z4iypeoupn6jzpo")?;
//! let links = PearLink::from_aliases(AliasTable::new([("keet".to_string(), keet)])?);
//!
//! // Parse an aliased, versioned link
//! let link = links.parse("pear://2.2455.keet/index.html?x=1#main")?;
//! assert_eq!(link.drive.key, Some(keet));
//! assert_eq!(link.drive.fork, Some(2));
//! assert_eq!(link.drive.length, Some(2455));
//! assert_eq!(link.origin, "pear://keet");
//!
//! // Serialize it back
//! assert_eq!(links.serialize(&link)?, "pear://2.2455.keet/index.html?x=1#main");
//!
//! // Paths become file links
//! let link = links.parse("/srv/app/")?;
//! assert_eq!(link.origin, "file:///srv/app");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Link Format
//!
//! The `pear:` authority is split on `.`:
//!
//! | Segments | Shape                          | Drive fields            |
//! |----------|--------------------------------|-------------------------|
//! | 1        | `keyOrAlias`                   | key                     |
//! | 3        | `fork.length.keyOrAlias`       | key, fork, length       |
//! | 4        | `fork.length.keyOrAlias.hash`  | key, fork, length, hash |
//!
//! Keys and hashes are written in z-base-32 (52 characters) or hex
//! (64 characters). The origin of a link is its scheme and key (or alias)
//! only.
//!
//! # Error Handling
//!
//! All fallible functions return `Result<T, LinkError>`. [`LinkError::kind`]
//! tells malformed links apart from undecodable keys.

// Re-export the handler and main operations
pub use crate::core::{parse_link, serialize_link, PearLink};
pub use crate::core::{decode_hostname, drive_authority, drive_origin, resolve_key};

// Re-export URL-level utilities
pub use crate::url::{effective_url, has_drive_letter, normalize_link, split_url, InputKind, UrlParts};

// Re-export public types
pub use alias::AliasTable;
pub use config::{ConfigError, LinkConfig};
pub use error::{ErrorKind, LinkError};
pub use key::{DriveKey, KeyError, KEY_LEN};
pub use platform::{FixedPlatform, HostPlatform, Platform};
pub use types::{Drive, Link, FILE, PEAR};

// Module declarations
pub mod alias;
pub mod config;
pub mod core;
pub mod error;
pub mod key;
pub mod logging;
pub mod platform;
pub mod types;
pub mod url;
