//! Configuration file location and home directory expansion
//!
//! The configuration file lives at `~/.sbitrc`, following the original
//! tool convention rather than the XDG config directory.

use std::path::{Path, PathBuf};

/// File name of the per-user configuration file, relative to the home directory
const CONFIG_FILE_NAME: &str = ".sbitrc";

/// Get the user's home directory
pub fn home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Get the path to the default configuration file (`~/.sbitrc`)
pub fn default_config_path() -> Option<PathBuf> {
    home_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Expand a leading `~/` to the user's home directory
///
/// Paths without the `~/` prefix are returned unchanged, as is everything
/// when no home directory can be determined.
pub fn expand_user(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Check that a path points to a file with at least one executable bit set
#[cfg(unix)]
pub fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(path) {
        Ok(metadata) => metadata.is_file() && metadata.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

/// Check that a path points to a file
///
/// Executable bits do not exist on this platform, so file existence is the
/// only check performed.
#[cfg(not(unix))]
pub fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}
