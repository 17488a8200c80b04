//! Path utilities for the Zellij sandbox.
//!
//! Inside the plugin sandbox the host filesystem is reachable under `/host`,
//! which usually resolves to the directory Zellij was started from (typically
//! the user's home).

use std::path::PathBuf;

/// Returns the directory staffdesk writes its trace files to.
///
/// # Examples
///
/// ```
/// use staffdesk::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/staffdesk");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("staffdesk")
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// Used for user-supplied paths such as `theme_file`.
///
/// # Examples
///
/// ```
/// use staffdesk::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/nord.toml"), "/host/themes/nord.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
