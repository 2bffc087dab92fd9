//! Error types for link parsing and serialization.

use thiserror::Error;

use crate::key::KeyError;

/// Broad classification of a [`LinkError`].
///
/// Every failure is either a malformed link or a key/hash segment the
/// codec could not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The link itself is malformed or unsupported.
    InvalidLink,
    /// A key or content hash failed to decode.
    InvalidKey,
}

/// Errors that can occur while parsing or serializing a link.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinkError {
    /// The input was empty.
    #[error("No link specified")]
    NoLink,

    /// A `file:` link without a path.
    #[error("Path is missing")]
    PathMissing,

    /// A `file:` link that names an authority, e.g. `file://host/path`.
    #[error("Path needs to start from the root, \"/\"")]
    NotRooted,

    /// The `pear:` authority does not have 1, 3 or 4 segments, or its
    /// fork/length segments are not integers.
    #[error("Incorrect hostname")]
    IncorrectHostname,

    /// The scheme is neither `file:` nor `pear:`.
    #[error("Unsupported protocol: {0}")]
    UnsupportedProtocol(String),

    /// The generic URL grammar rejected the input.
    #[error("Invalid link: {0}")]
    UrlParseError(String),

    /// The current working directory could not be read.
    #[error("Cannot resolve relative path: {0}")]
    WorkingDirectory(String),

    /// A drive record has neither a key nor an alias.
    #[error("Drive key is missing")]
    MissingKey,

    /// A drive record carries only one of fork/length, or a content hash
    /// without a version.
    #[error("Incomplete drive version: {0}")]
    IncompleteVersion(&'static str),

    /// An alias name that cannot appear as a hostname label.
    #[error("Invalid alias name: {0}")]
    InvalidAlias(String),

    /// Two alias names bound to the same key.
    #[error("Aliases {0} and {1} are bound to the same key")]
    DuplicateAliasKey(String, String),

    /// A key or content hash that failed to decode.
    #[error(transparent)]
    InvalidKey(#[from] KeyError),
}

impl LinkError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinkError::InvalidKey(_) => ErrorKind::InvalidKey,
            _ => ErrorKind::InvalidLink,
        }
    }
}

impl From<url::ParseError> for LinkError {
    fn from(err: url::ParseError) -> Self {
        LinkError::UrlParseError(err.to_string())
    }
}
