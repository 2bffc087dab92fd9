//! Input classification: turn any accepted input into a URL.
//!
//! `pear://` and `file://` inputs are taken as-is, and so is any other
//! `scheme://` input, which later fails as an unsupported protocol. Anything
//! else is a filesystem path: absolute paths become `file://` URLs directly,
//! relative ones are resolved against the working directory first.

use tracing::trace;
use url::Url;

use crate::error::LinkError;
use crate::platform::Platform;

const PEAR_PREFIX: &str = "pear://";
const FILE_PREFIX: &str = "file://";

/// What an input string looks like before any URL parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Starts with `pear://`
    PearUrl,
    /// Starts with `file://`
    FileUrl,
    /// Starts with some other `scheme://`
    OtherUrl,
    /// Rooted at `/` or at a drive letter (`C:`)
    AbsolutePath,
    /// Anything else
    RelativePath,
}

impl InputKind {
    /// Classify an input string.
    pub fn of(input: &str) -> Self {
        if input.starts_with(PEAR_PREFIX) {
            InputKind::PearUrl
        } else if input.starts_with(FILE_PREFIX) {
            InputKind::FileUrl
        } else if input.starts_with('/') || has_drive_letter(input) {
            InputKind::AbsolutePath
        } else if has_scheme_prefix(input) {
            InputKind::OtherUrl
        } else {
            InputKind::RelativePath
        }
    }

    pub fn is_path(&self) -> bool {
        matches!(self, InputKind::AbsolutePath | InputKind::RelativePath)
    }
}

/// Whether a path starts with a Windows drive letter, e.g. `D:`.
pub fn has_drive_letter(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Whether the input opens with `scheme://`, e.g. `http://`.
///
/// A colon alone does not make a URL: `notes:v2.txt` is a relative path.
fn has_scheme_prefix(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Rewrite native separators to `/`.
///
/// Drive-letter paths are always Windows paths, so their backslashes are
/// rewritten regardless of the host separator.
pub fn to_url_path(path: &str, separator: char) -> String {
    if separator != '/' || has_drive_letter(path) {
        path.replace([separator, '\\'], "/")
    } else {
        path.to_string()
    }
}

/// `file:` URL text for an absolute, `/`-separated path.
fn file_url_text(path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", FILE_PREFIX, path)
    } else {
        format!("{}/{}", FILE_PREFIX, path)
    }
}

/// Directory URL for the working directory, always ending in `/`.
///
/// Each directory name is percent-encoded as a path segment, so `?`, `#`
/// and `%` in the working directory stay part of the path.
fn working_dir_url<P: Platform>(platform: &P) -> Result<Url, LinkError> {
    let cwd = to_url_path(&platform.current_dir()?, platform.separator());
    let segments: Vec<&str> = cwd.split('/').filter(|s| !s.is_empty()).collect();

    let mut base = Url::parse(FILE_PREFIX)?;
    {
        let mut path = base.path_segments_mut().map_err(|_| {
            LinkError::WorkingDirectory(format!("cannot use {} as a base", cwd))
        })?;
        path.clear().extend(&segments);
        if !segments.is_empty() {
            path.push("");
        }
    }
    Ok(base)
}

/// Resolve an input string to the URL that gets decomposed.
///
/// # Examples
///
/// ```
/// use pear_link::{effective_url, FixedPlatform};
///
/// let platform = FixedPlatform::unix("/home/me");
/// let url = effective_url("app/index.js", &platform).unwrap();
/// assert_eq!(url.as_str(), "file:///home/me/app/index.js");
///
/// let url = effective_url("D:\\abs\\path", &FixedPlatform::windows("C:\\")).unwrap();
/// assert_eq!(url.as_str(), "file:///D:/abs/path");
/// ```
pub fn effective_url<P: Platform>(input: &str, platform: &P) -> Result<Url, LinkError> {
    if input.is_empty() {
        return Err(LinkError::NoLink);
    }

    let kind = InputKind::of(input);
    trace!(input, ?kind, "classified link input");

    match kind {
        InputKind::PearUrl | InputKind::FileUrl | InputKind::OtherUrl => Ok(Url::parse(input)?),
        InputKind::AbsolutePath => {
            let path = to_url_path(input, platform.separator());
            Ok(Url::parse(&file_url_text(&path))?)
        }
        InputKind::RelativePath => {
            // "./" keeps a leading "name:" segment from reading as a scheme
            let path = format!("./{}", to_url_path(input, platform.separator()));
            let base = working_dir_url(platform)?;
            Ok(base.join(&path)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FixedPlatform;

    #[test]
    fn test_input_kinds() {
        let test_cases = vec![
            ("pear://keet", InputKind::PearUrl),
            ("file:///a/b", InputKind::FileUrl),
            ("/abs/path", InputKind::AbsolutePath),
            ("C:\\abs\\path", InputKind::AbsolutePath),
            ("d:/abs/path", InputKind::AbsolutePath),
            ("foobar", InputKind::RelativePath),
            ("./foo", InputKind::RelativePath),
            ("pear:keet", InputKind::RelativePath),
            ("notes:v2.txt", InputKind::RelativePath),
            ("dir/x://y", InputKind::RelativePath),
            ("http://example.com", InputKind::OtherUrl),
            ("git+ssh://host/repo", InputKind::OtherUrl),
        ];

        for (input, expected) in test_cases {
            assert_eq!(InputKind::of(input), expected, "Wrong kind for: {}", input);
        }
    }

    #[test]
    fn test_urls_used_verbatim() {
        let platform = FixedPlatform::unix("/home/me");
        let url = effective_url("pear://keet/a?b#c", &platform).unwrap();
        assert_eq!(url.as_str(), "pear://keet/a?b#c");
    }

    #[test]
    fn test_absolute_path() {
        let platform = FixedPlatform::unix("/home/me");
        let url = effective_url("/srv/app/index.js", &platform).unwrap();
        assert_eq!(url.as_str(), "file:///srv/app/index.js");
    }

    #[test]
    fn test_relative_path() {
        let platform = FixedPlatform::unix("/home/me");
        let test_cases = vec![
            ("foobar", "file:///home/me/foobar"),
            ("./app/x.js", "file:///home/me/app/x.js"),
            ("../other", "file:///home/other"),
        ];

        for (input, expected) in test_cases {
            let url = effective_url(input, &platform).unwrap();
            assert_eq!(url.as_str(), expected, "Wrong URL for: {}", input);
        }
    }

    #[test]
    fn test_relative_path_with_colon() {
        let platform = FixedPlatform::unix("/home/me");
        let test_cases = vec![
            ("notes:v2.txt", "file:///home/me/notes:v2.txt"),
            ("pear:keet", "file:///home/me/pear:keet"),
            ("dir/a:b", "file:///home/me/dir/a:b"),
        ];

        for (input, expected) in test_cases {
            let url = effective_url(input, &platform).unwrap();
            assert_eq!(url.as_str(), expected, "Wrong URL for: {}", input);
        }
    }

    #[test]
    fn test_working_dir_is_encoded() {
        let test_cases = vec![
            ("/srv/what?x", "file:///srv/what%3Fx/foobar"),
            ("/srv/a#b", "file:///srv/a%23b/foobar"),
            ("/srv/100%", "file:///srv/100%25/foobar"),
            ("/srv/my dir/", "file:///srv/my%20dir/foobar"),
        ];

        for (cwd, expected) in test_cases {
            let url = effective_url("foobar", &FixedPlatform::unix(cwd)).unwrap();
            assert_eq!(url.as_str(), expected, "Wrong URL for cwd: {}", cwd);
            assert_eq!(url.query(), None);
            assert_eq!(url.fragment(), None);
        }
    }

    #[test]
    fn test_relative_path_from_root() {
        let platform = FixedPlatform::unix("/");
        let url = effective_url("foobar", &platform).unwrap();
        assert_eq!(url.as_str(), "file:///foobar");
    }

    #[test]
    fn test_windows_paths() {
        let platform = FixedPlatform::windows("C:\\Users\\me");

        let url = effective_url("D:\\abs\\path", &platform).unwrap();
        assert_eq!(url.as_str(), "file:///D:/abs/path");

        let url = effective_url("app\\main.js", &platform).unwrap();
        assert_eq!(url.as_str(), "file:///C:/Users/me/app/main.js");
    }

    #[test]
    fn test_empty_input() {
        let platform = FixedPlatform::unix("/");
        assert_eq!(effective_url("", &platform), Err(LinkError::NoLink));
    }

    #[test]
    fn test_to_url_path() {
        assert_eq!(to_url_path("a/b", '/'), "a/b");
        assert_eq!(to_url_path("a\\b", '\\'), "a/b");
        assert_eq!(to_url_path("C:\\a\\b", '/'), "C:/a/b");
    }
}
