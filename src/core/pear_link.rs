//! The configured link handler.

use crate::alias::AliasTable;
use crate::config::LinkConfig;
use crate::core::parser::parse_link;
use crate::core::serializer::serialize_link;
use crate::error::LinkError;
use crate::platform::{HostPlatform, Platform};
use crate::types::Link;
use crate::url::normalize_link;

/// Parses, serializes and normalizes links against one alias table.
///
/// The table is fixed at construction; a `PearLink` holds no other state
/// and can be shared across threads freely.
///
/// ```
/// use pear_link::{LinkConfig, PearLink};
///
/// let config = LinkConfig::from_toml_str(r#"
///     [aliases]
///     keet = "oeeoz3w6fjjt7bym3ndpa6hhicm8f8naxyk11z4iypeoupn6jzpo"
/// "#)?;
/// let links = PearLink::new(&config)?;
///
/// let link = links.parse("pear://1.20.keet/app#main")?;
/// assert_eq!(link.origin, "pear://keet");
/// assert_eq!(links.serialize(&link)?, "pear://1.20.keet/app#main");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PearLink<P = HostPlatform> {
    aliases: AliasTable,
    platform: P,
}

impl PearLink<HostPlatform> {
    /// Build a handler from configuration, running on the host platform.
    pub fn new(config: &LinkConfig) -> Result<Self, LinkError> {
        Ok(Self::from_aliases(config.alias_table()?))
    }

    /// Build a handler from an existing alias table.
    pub fn from_aliases(aliases: AliasTable) -> Self {
        Self::with_platform(aliases, HostPlatform)
    }
}

impl<P: Platform> PearLink<P> {
    /// Build a handler with an explicit platform.
    pub fn with_platform(aliases: AliasTable, platform: P) -> Self {
        Self { aliases, platform }
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Parse a `pear:` link, `file:` link or filesystem path.
    pub fn parse(&self, link: &str) -> Result<Link, LinkError> {
        parse_link(link, &self.aliases, &self.platform)
    }

    /// Rebuild the canonical address of a parsed link.
    pub fn serialize(&self, link: &Link) -> Result<String, LinkError> {
        serialize_link(link)
    }

    /// Strip trailing separators from a link, origin or native path.
    pub fn normalize(&self, link: &str) -> String {
        normalize_link(link, self.platform.separator())
    }

    /// Parse then serialize: the canonical form of any accepted input.
    pub fn canonicalize(&self, link: &str) -> Result<String, LinkError> {
        self.serialize(&self.parse(link)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FixedPlatform;

    #[test]
    fn test_default_handler_has_no_aliases() {
        let links: PearLink = PearLink::default();
        assert!(links.aliases().is_empty());
        assert!(links.parse("pear://keet").is_err());
    }

    #[test]
    fn test_normalize_uses_platform_separator() {
        let links = PearLink::with_platform(AliasTable::empty(), FixedPlatform::windows("C:\\"));
        assert_eq!(links.normalize("C:\\apps\\"), "C:\\apps");
        assert_eq!(links.normalize("file:///C:/apps/"), "file:///C:/apps");
    }

    #[test]
    fn test_canonicalize_relative_path() {
        let links = PearLink::with_platform(AliasTable::empty(), FixedPlatform::unix("/srv"));
        assert_eq!(links.canonicalize("app/../x.js").unwrap(), "file:///srv/x.js");
    }

    #[test]
    fn test_handler_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PearLink>();
    }
}
