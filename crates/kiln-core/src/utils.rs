//! Shared utility functions for kiln crates

use crate::error::{Error, Result};
use camino::Utf8PathBuf;

/// Get the user's home directory
///
/// Prefers the HOME environment variable over `dirs::home_dir()` so that
/// tests and wrapper scripts can redirect it.
pub fn get_home_dir() -> Result<Utf8PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return Ok(Utf8PathBuf::from(home));
        }
    }

    dirs::home_dir()
        .and_then(|p| Utf8PathBuf::from_path_buf(p).ok())
        .ok_or(Error::HomeDirNotFound)
}

/// Get the kiln config directory (~/.kiln)
pub fn get_config_dir() -> Result<Utf8PathBuf> {
    Ok(get_home_dir()?.join(".kiln"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_home_dir_from_env() {
        if std::env::var("HOME").is_ok() {
            let home = get_home_dir().unwrap();
            assert!(!home.as_str().is_empty());
        }
    }

    #[test]
    fn test_config_dir_is_under_home() {
        if let Ok(home) = get_home_dir() {
            let dir = get_config_dir().unwrap();
            assert_eq!(dir, home.join(".kiln"));
        }
    }
}
