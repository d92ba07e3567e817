//! Data and configuration directory resolution.
//!
//! The desk keeps nothing on disk except its log file and an optional config
//! file. Both locations follow the XDG layout under the user's home directory
//! and can be overridden through the environment.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "HRDESK_DATA_DIR";

/// Environment variable naming a config file to load.
pub const CONFIG_ENV: &str = "HRDESK_CONFIG";

/// Name of the config file looked up in [`config_dir`].
pub const CONFIG_FILE: &str = "config.toml";

fn home_dir() -> PathBuf {
    env::var_os("HOME").map_or_else(|| PathBuf::from("."), PathBuf::from)
}

/// Returns the data directory, where the log file lives.
///
/// `$HRDESK_DATA_DIR` wins when set and non-empty; otherwise
/// `$HOME/.local/share/hrdesk`.
#[must_use]
pub fn data_dir() -> PathBuf {
    match env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => home_dir().join(".local/share").join("hrdesk"),
    }
}

/// Returns the config directory, `$HOME/.config/hrdesk`.
#[must_use]
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join("hrdesk")
}

/// Resolves the config file to load, if any.
///
/// `$HRDESK_CONFIG` is returned as-is (after tilde expansion) even when the
/// file is missing, so a typo surfaces as an error. The default location is
/// only returned when the file exists.
#[must_use]
pub fn config_file() -> Option<PathBuf> {
    if let Some(path) = env::var(CONFIG_ENV).ok().filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(expand_tilde(&path)));
    }
    let default = config_dir().join(CONFIG_FILE);
    default.is_file().then_some(default)
}

/// Expands a leading `~` to the user's home directory.
///
/// # Examples
///
/// ```
/// use hrdesk::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("themes/~draft.toml"), "themes/~draft.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let home = home_dir();
    if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest).to_string_lossy().into_owned()
    } else if path == "~" {
        home.to_string_lossy().into_owned()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expands_against_home() {
        let home = home_dir();
        assert_eq!(expand_tilde("~"), home.to_string_lossy());
        assert_eq!(expand_tilde("~/themes/dark.toml"), home.join("themes/dark.toml").to_string_lossy());
        assert_eq!(expand_tilde("~user/x"), "~user/x");
    }

    #[test]
    fn config_dir_is_under_home() {
        assert!(config_dir().starts_with(home_dir()));
        assert!(config_dir().ends_with(".config/hrdesk"));
    }
}
