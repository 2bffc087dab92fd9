//! Trailing separator normalization for links, origins and paths.

const URL_PREFIXES: [&str; 2] = ["file://", "pear://"];

/// Strip trailing separators from a link, origin or native path.
///
/// URL-form strings always use `/`; anything else uses the platform
/// `separator`. Both `file://` and `pear://` count as URL-form, which
/// differs from detecting by the `file://` prefix alone: on a `\`
/// platform `pear://keet/` still becomes `pear://keet`, so origins
/// normalize the same everywhere. The scheme's `//` and a bare root path
/// are never stripped, so normalizing twice gives the same result.
///
/// # Examples
///
/// ```
/// use pear_link::normalize_link;
///
/// assert_eq!(normalize_link("file:///tmp/app/", '/'), "file:///tmp/app");
/// assert_eq!(normalize_link("C:\\apps\\", '\\'), "C:\\apps");
/// assert_eq!(normalize_link("/", '/'), "/");
/// ```
pub fn normalize_link(link: &str, separator: char) -> String {
    if let Some(prefix) = URL_PREFIXES.iter().find(|p| link.starts_with(**p)) {
        let rest = &link[prefix.len()..];
        return format!("{}{}", prefix, rest.trim_end_matches('/'));
    }

    let trimmed = link.trim_end_matches(separator);
    if trimmed.is_empty() && !link.is_empty() {
        // root stays a root
        return separator.to_string();
    }
    trimmed.to_string()
}
