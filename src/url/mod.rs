//! URL-level processing.
//!
//! This module contains the parts that work on strings before any drive
//! semantics apply:
//! - Input classification (URL, absolute path, relative path)
//! - Generic URL decomposition
//! - Trailing separator normalization

pub mod classifier;
pub mod normalizer;
pub mod utils;

// Re-export main functionality
pub use classifier::{effective_url, has_drive_letter, to_url_path, InputKind};
pub use normalizer::normalize_link;
pub use utils::{split_url, UrlParts};
