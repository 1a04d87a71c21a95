//! Path handling for the Zellij sandbox, where `/host` is the directory
//! Zellij was started from (usually the user's home).

use std::path::PathBuf;

/// Directory for the plugin's trace files:
/// `/host/.local/share/zellij/content-picker`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("content-picker")
}

/// Maps `~` and `~/…` onto the sandbox's `/host` mount.
///
/// ```
/// use content_picker::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/snippets.toml"), "/host/snippets.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/catalog.json"), "/etc/catalog.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        format!("/host/{rest}")
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Shows a sandbox path the way the user wrote it.
///
/// ```
/// use content_picker::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/snippets.toml"), "~/snippets.toml");
/// assert_eq!(strip_host_prefix("/host"), "~");
/// assert_eq!(strip_host_prefix("/hostile/file"), "/hostile/file");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix("/host") {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}
