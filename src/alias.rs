//! Alias table: short names bound to drive keys.

use std::collections::BTreeMap;

use crate::error::LinkError;
use crate::key::DriveKey;

/// Immutable, injective mapping from alias name to drive key.
///
/// Both directions are looked up: `pear://keet` resolves forward to a key,
/// and a link given by raw key gets the alias back as its origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: BTreeMap<String, DriveKey>,
}

impl AliasTable {
    /// An empty table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table, rejecting names that are not single hostname labels
    /// and keys bound to more than one name.
    ///
    /// ```
    /// use pear_link::{AliasTable, DriveKey};
    ///
    /// let keet = DriveKey::decode("oeeoz3w6fjjt7bym3ndpa6hhicm8f8naxyk11z4iypeoupn6jzpo").unwrap();
    /// let table = AliasTable::new([("keet".to_string(), keet)]).unwrap();
    /// assert_eq!(table.resolve("keet"), Some(&keet));
    /// assert_eq!(table.alias_for(&keet), Some("keet"));
    /// ```
    pub fn new<I>(entries: I) -> Result<Self, LinkError>
    where
        I: IntoIterator<Item = (String, DriveKey)>,
    {
        let mut table: BTreeMap<String, DriveKey> = BTreeMap::new();
        for (name, key) in entries {
            validate_alias_name(&name)?;

            if let Some(other) = table
                .iter()
                .find(|(_, k)| **k == key)
                .map(|(n, _)| n.clone())
            {
                return Err(LinkError::DuplicateAliasKey(other, name));
            }
            table.insert(name, key);
        }

        Ok(Self { entries: table })
    }

    /// Forward lookup: alias name to key.
    pub fn resolve(&self, name: &str) -> Option<&DriveKey> {
        self.entries.get(name)
    }

    /// Reverse lookup: key to alias name.
    pub fn alias_for(&self, key: &DriveKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, k)| *k == key)
            .map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DriveKey)> {
        self.entries.iter().map(|(name, key)| (name.as_str(), key))
    }
}

/// An alias must survive as one segment of a `pear:` authority.
fn validate_alias_name(name: &str) -> Result<(), LinkError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(LinkError::InvalidAlias(name.to_string()))
    }
}
