use std::{env, fs, path::Path, path::PathBuf};

use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::{info, warn};

pub const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_API_BASE_URL: &str = "http://api.themoviedb.org/3/discover/movie";
pub const DEFAULT_IMAGE_BASE_URL: &str = "http://image.tmdb.org/t/p/w185/";
pub const LOCAL_DATA_DIR: &str = ".popmovies";
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

static CONFIG: Lazy<AppConfig> = Lazy::new(load_config);

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub tmdb_api_key: Option<String>,
    pub api_base_url: String,
    pub image_base_url: String,
    pub prefs_path: PathBuf,
    pub state_path: PathBuf,
    /// Compare vote average / popularity as numbers instead of text.
    pub numeric_sort: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tmdb_api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            prefs_path: PathBuf::from(LOCAL_DATA_DIR).join("ui_prefs.txt"),
            state_path: PathBuf::from(LOCAL_DATA_DIR).join("screen_state.json"),
            numeric_sort: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(alias = "api_key")]
    tmdb_api_key: Option<String>,
    api_base_url: Option<String>,
    image_base_url: Option<String>,
    prefs_path: Option<String>,
    state_path: Option<String>,
    numeric_sort: Option<bool>,
}

/// Process-wide config, read once from `config.json` and the environment.
pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

pub fn load_config() -> AppConfig {
    let mut cfg = load_config_from(Path::new(CONFIG_FILE));
    if let Ok(key) = env::var(API_KEY_ENV) {
        apply_api_key_override(&mut cfg, &key);
    }
    cfg
}

pub fn load_config_from(cfg_path: &Path) -> AppConfig {
    let mut cfg = AppConfig::default();

    match fs::read_to_string(cfg_path) {
        Ok(raw) => match serde_json::from_str::<RawConfig>(&raw) {
            Ok(parsed) => {
                if let Some(key) = parsed.tmdb_api_key.filter(|k| !k.trim().is_empty()) {
                    cfg.tmdb_api_key = Some(key.trim().to_string());
                }
                if let Some(url) = parsed.api_base_url {
                    cfg.api_base_url = url;
                }
                if let Some(url) = parsed.image_base_url {
                    cfg.image_base_url = url;
                }
                if let Some(p) = parsed.prefs_path {
                    cfg.prefs_path = PathBuf::from(p);
                }
                if let Some(p) = parsed.state_path {
                    cfg.state_path = PathBuf::from(p);
                }
                if let Some(numeric) = parsed.numeric_sort {
                    cfg.numeric_sort = numeric;
                }
                info!("Loaded config from {}", cfg_path.display());
            }
            Err(err) => {
                warn!(
                    "Failed to parse {} ({}). Using defaults.",
                    cfg_path.display(),
                    err
                );
            }
        },
        Err(_) => {
            info!("No {} found; using defaults", cfg_path.display());
        }
    }

    cfg
}

fn apply_api_key_override(cfg: &mut AppConfig, key: &str) {
    let key = key.trim();
    if key.is_empty() {
        return;
    }
    if cfg.tmdb_api_key.is_some() {
        info!("{API_KEY_ENV} overrides the api key from {CONFIG_FILE}");
    }
    cfg.tmdb_api_key = Some(key.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("nope.json"));
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
        assert!(!cfg.numeric_sort);
    }

    #[test]
    fn parsed_fields_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "tmdb_api_key": " abc123 ", "numeric_sort": true, "prefs_path": "p/prefs.txt" }}"#
        )
        .unwrap();

        let cfg = load_config_from(file.path());
        assert_eq!(cfg.tmdb_api_key.as_deref(), Some("abc123"));
        assert!(cfg.numeric_sort);
        assert_eq!(cfg.prefs_path, PathBuf::from("p/prefs.txt"));
        assert_eq!(cfg.image_base_url, DEFAULT_IMAGE_BASE_URL);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert_eq!(load_config_from(file.path()), AppConfig::default());
    }

    #[test]
    fn blank_override_keeps_configured_key() {
        let mut cfg = AppConfig {
            tmdb_api_key: Some("from-file".into()),
            ..AppConfig::default()
        };
        apply_api_key_override(&mut cfg, "   ");
        assert_eq!(cfg.tmdb_api_key.as_deref(), Some("from-file"));
        apply_api_key_override(&mut cfg, "from-env");
        assert_eq!(cfg.tmdb_api_key.as_deref(), Some("from-env"));
    }
}
