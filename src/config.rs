//! Frontend Configuration
//!
//! A static wasm bundle has no runtime environment, so overrides are read
//! at build time: `TODO_STORAGE_KEY` and `TODO_LOG_LEVEL`.

use log::LevelFilter;
use todo_core::StoreConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Where and how the collection is persisted
    pub store: StoreConfig,
    /// Most verbose level forwarded to the browser console
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("TODO_STORAGE_KEY"), option_env!("TODO_LOG_LEVEL"))
    }

    fn from_values(storage_key: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(key) = storage_key.map(str::trim).filter(|k| !k.is_empty()) {
            config.store = StoreConfig::with_key(key);
        }
        if let Some(level) = log_level.and_then(|l| l.trim().parse::<LevelFilter>().ok()) {
            config.log_level = level;
        }
        config
    }
}

fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
