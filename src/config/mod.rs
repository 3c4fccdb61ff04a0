use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::core::TICK_MS;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog file replacing the built-in demo data
    pub catalog: Option<String>,

    /// View selected at startup
    pub initial_view: Option<String>,

    /// Animate the stat counters at startup
    pub animate: bool,

    /// Counter animation frame interval; counters still finish within their duration
    pub tick_ms: u64,

    pub log_file: Option<String>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            initial_view: None,
            animate: true,
            tick_ms: TICK_MS,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog.as_deref().and_then(expand_path)
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.as_deref().and_then(expand_path)
    }
}

/// Load the config file, falling back to defaults when it is missing or invalid
pub fn load(explicit: Option<&Path>) -> Config {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) => path,
            None => return Config::default(),
        },
    };
    load_from(&path)
}

pub fn load_from(path: &Path) -> Config {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    match toml::from_str::<Config>(&content) {
        Ok(config) => config,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring invalid config");
            Config::default()
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("DELEGATE_DASH_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("delegate-dash").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("delegate-dash").join("config.toml"));
    }

    directories::ProjectDirs::from("ai", "delegate", "delegate-dash")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("delegate-dash"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("delegate-dash"));
    }
    directories::ProjectDirs::from("ai", "delegate", "delegate-dash")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn export_dir() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("exports"))
}

pub fn expand_path(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(rest) = trimmed.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
            return Some(home.join(rest));
        }
    }

    let mut buf = PathBuf::from(trimmed);
    if buf.is_relative() {
        if let Ok(cwd) = std::env::current_dir() {
            buf = cwd.join(buf);
        }
    }
    Some(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_from(Path::new("/no/such/config.toml"));
        assert!(config.animate);
        assert_eq!(config.tick_ms, TICK_MS);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "initial_view = \"insights\"\nanimate = false").unwrap();
        let config = load_from(file.path());
        assert_eq!(config.initial_view.as_deref(), Some("insights"));
        assert!(!config.animate);
        assert_eq!(config.tick_ms, TICK_MS);
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "animate = \"sometimes\"").unwrap();
        let config = load_from(file.path());
        assert!(config.animate);
    }

    #[test]
    fn test_expand_path() {
        assert_eq!(expand_path("   "), None);
        let abs = expand_path("/tmp/catalog.toml").unwrap();
        assert_eq!(abs, PathBuf::from("/tmp/catalog.toml"));
        assert!(expand_path("catalog.toml").unwrap().is_absolute());
    }
}
