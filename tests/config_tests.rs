//! Tests for loading alias configuration from disk.

use std::io::Write;

use pear_link::*;

const KEET_Z32: &str = "oeeoz3w6fjjt7bym3ndpa6hhicm8f8naxyk11z4iypeoupn6jzpo";
const RUNTIME_Z32: &str = "nkw138nybdx6mtf98z497czxogzwje5yzu585c66ofba854gw3ro";

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[aliases]").unwrap();
    writeln!(file, "keet = \"{}\"", KEET_Z32).unwrap();
    writeln!(file, "runtime = \"{}\"", RUNTIME_Z32).unwrap();

    let config = LinkConfig::load(file.path()).unwrap();
    assert_eq!(config.aliases.len(), 2);

    let links = PearLink::new(&config).unwrap();
    let link = links.parse("pear://runtime/boot.js").unwrap();
    assert_eq!(link.drive.key.unwrap().encode(), RUNTIME_Z32);
    assert_eq!(link.origin, "pear://runtime");
}

#[test]
fn test_load_invalid_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[aliases").unwrap();

    let result = LinkConfig::load(file.path());
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_alias_with_dot_rejected() {
    let text = format!("[aliases]\n\"two.parts\" = \"{}\"\n", KEET_Z32);
    let result = LinkConfig::from_toml_str(&text);
    assert!(matches!(
        result,
        Err(ConfigError::Link(LinkError::InvalidAlias(_)))
    ));
}

#[test]
fn test_empty_config_knows_no_aliases() {
    let links = PearLink::new(&LinkConfig::default()).unwrap();
    let err = links.parse("pear://keet").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidKey);
}
