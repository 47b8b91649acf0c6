use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const SUGGESTED_FEED_URL: &str = "https://marko-app.netlify.app/tai.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Remote JSON feed listing curated applications for the Suggested tab.
    pub suggested_feed_url: String,
    /// Directory AppMan is told to install applications into.
    pub install_dir: PathBuf,
    /// Where downloaded application icons are cached.
    pub icon_cache_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let home = home_dir();
        Self {
            suggested_feed_url: SUGGESTED_FEED_URL.to_string(),
            install_dir: home.join(".appnest"),
            icon_cache_dir: home.join(".cache").join("appnest").join("icons"),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        home_dir().join(".config").join("appnest").join("config.json")
    }
}

pub fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
}

/// Path of the AppMan catalog file enumerating installable applications.
pub fn catalog_path() -> PathBuf {
    home_dir().join(".local").join("share").join("AM").join("x86_64-apps")
}

/// Where the AppMan executable lands after a local installation.
pub fn appman_path() -> PathBuf {
    home_dir().join(".local").join("bin").join("appman")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_feed() {
        let config = Config::default();
        assert_eq!(config.suggested_feed_url, SUGGESTED_FEED_URL);
        assert!(config.install_dir.ends_with(".appnest"));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.suggested_feed_url, config.suggested_feed_url);
        assert_eq!(back.install_dir, config.install_dir);
        assert_eq!(back.icon_cache_dir, config.icon_cache_dir);
    }

    #[test]
    fn catalog_path_is_under_am_data_dir() {
        let p = catalog_path();
        assert!(p.ends_with("AM/x86_64-apps"));
    }
}
