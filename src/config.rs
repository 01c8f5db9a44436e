//! Driver Configuration
//!
//! Optional JSON file describing the owner, log directory and seed items.
//! Every field may be omitted.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use todo_lib::TodoItem;

/// Environment variable consulted when no path is passed on the command line
pub const CONFIG_ENV: &str = "TODO_LIST_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub owner: String,
    pub log_dir: PathBuf,
    pub items: Vec<TodoItem>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            owner: "Nelson".to_string(),
            log_dir: PathBuf::from("logs"),
            items: vec![
                TodoItem::new(1, "Buy Flowers"),
                TodoItem::new(2, "Get Shoes"),
                TodoItem::new(3, "Collect Tickets"),
                TodoItem::with_complete(4, "Call Joe", true),
            ],
        }
    }
}

/// First CLI argument wins over the environment variable
pub fn config_path(arg: Option<String>, env: Option<OsString>) -> Option<PathBuf> {
    arg.map(PathBuf::from)
        .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
}

/// Load config from `path`, or the defaults when there is none
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, String> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
    serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_path() {
        let config = load_config(None).unwrap();
        assert_eq!(config.owner, "Nelson");
        assert_eq!(config.items.len(), 4);
        assert!(config.items[3].complete);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.json");
        std::fs::write(
            &path,
            r#"{"owner":"Ada","items":[{"id":9,"description":"Write notes","complete":true}]}"#,
        )
        .unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.owner, "Ada");
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.items, vec![TodoItem::with_complete(9, "Write notes", true)]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("nope.json").as_path())).unwrap_err();
        assert!(err.starts_with("Failed to read config"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_config(Some(path.as_path())).unwrap_err();
        assert!(err.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_config_path_precedence() {
        assert_eq!(
            config_path(Some("a.json".into()), Some("b.json".into())),
            Some(PathBuf::from("a.json"))
        );
        assert_eq!(config_path(None, Some("b.json".into())), Some(PathBuf::from("b.json")));
        assert_eq!(config_path(None, Some(OsString::new())), None);
        assert_eq!(config_path(None, None), None);
    }
}
