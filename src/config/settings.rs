use std::env;
use std::path::PathBuf;

use serde::Deserialize;

pub const CACHE_FILE_ENV: &str = "KUBETOKEN_CACHE_FILE";
pub const DEFAULT_CACHE_FILE: &str = "kubetoken-cache.json";

/// Location of the persisted token cache: the env override when set and
/// non-empty, otherwise `~/.kube/kubetoken-cache.json`. `None` only when
/// no home directory can be resolved.
pub fn cache_file_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CACHE_FILE_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    dirs::home_dir().map(|home| home.join(".kube").join(DEFAULT_CACHE_FILE))
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "json".to_string())
            .to_lowercase()
            .as_str()
        {
            "compact" | "text" => LogFormat::Compact,
            _ => LogFormat::Json,
        }
    }
}
