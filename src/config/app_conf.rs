use std::env;

/// Process-level settings (log placement and file verbosity).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_dir: String,
    pub file_log_level: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let log_dir = env::var("APP_LOG_DIR").unwrap_or_else(|_| "logs".to_string());
        let file_log_level = env::var("FILE_LOG_LEVEL").unwrap_or_else(|_| "debug".to_string());
        AppConfig {
            log_dir,
            file_log_level,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_dir: "logs".to_string(),
            file_log_level: "debug".to_string(),
        }
    }
}
