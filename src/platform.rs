//! Host services needed to turn bare paths into `file:` URLs.

use crate::error::LinkError;

/// Current working directory and native path separator.
pub trait Platform {
    /// Absolute path of the current working directory, in native form.
    fn current_dir(&self) -> Result<String, LinkError>;

    /// Native path separator (`/` on Unix, `\` on Windows).
    fn separator(&self) -> char;
}

/// The process the crate is running in.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl Platform for HostPlatform {
    fn current_dir(&self) -> Result<String, LinkError> {
        let dir = std::env::current_dir().map_err(|e| LinkError::WorkingDirectory(e.to_string()))?;
        dir.into_os_string()
            .into_string()
            .map_err(|dir| LinkError::WorkingDirectory(format!("not valid UTF-8: {:?}", dir)))
    }

    fn separator(&self) -> char {
        std::path::MAIN_SEPARATOR
    }
}

/// A platform with a fixed working directory and separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPlatform {
    pub cwd: String,
    pub separator: char,
}

impl FixedPlatform {
    /// Unix-style platform rooted at `cwd`.
    pub fn unix(cwd: impl Into<String>) -> Self {
        Self {
            cwd: cwd.into(),
            separator: '/',
        }
    }

    /// Windows-style platform rooted at `cwd`, e.g. `C:\Users\me`.
    pub fn windows(cwd: impl Into<String>) -> Self {
        Self {
            cwd: cwd.into(),
            separator: '\\',
        }
    }
}

impl Platform for FixedPlatform {
    fn current_dir(&self) -> Result<String, LinkError> {
        Ok(self.cwd.clone())
    }

    fn separator(&self) -> char {
        self.separator
    }
}

impl<P: Platform + ?Sized> Platform for &P {
    fn current_dir(&self) -> Result<String, LinkError> {
        (**self).current_dir()
    }

    fn separator(&self) -> char {
        (**self).separator()
    }
}
