//! Core link operations.
//!
//! This module contains the drive-aware parts of link handling:
//! - Decoding `pear:` authorities into drive fields
//! - Parsing inputs into links
//! - Serializing links back to canonical strings
//! - The configured handler tying them to an alias table

pub mod hostname;
pub mod parser;
pub mod pear_link;
pub mod serializer;

// Re-export main functionality
pub use hostname::{decode_hostname, drive_origin, resolve_key};
pub use parser::parse_link;
pub use pear_link::PearLink;
pub use serializer::{drive_authority, serialize_link};
