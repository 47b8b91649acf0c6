use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Curated application advertised by the remote feed.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SuggestedApp {
    #[serde(rename = "app_name")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon_url: String,
}

#[derive(Debug, Deserialize)]
struct SuggestedFeed {
    #[serde(default)]
    suggested_apps: Vec<SuggestedApp>,
}

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Shown when the feed cannot be fetched or parsed. The Suggested tab never
/// surfaces a network error to the user.
pub fn fallback_apps() -> Vec<SuggestedApp> {
    vec![SuggestedApp {
        name: "abiword".to_string(),
        description: "AbiWord is a free word processing program.".to_string(),
        icon_url:
            "https://icons.iconarchive.com/icons/papirus-team/papirus-apps/512/abiword-icon.png"
                .to_string(),
    }]
}

pub fn parse_feed(json: &str) -> Result<Vec<SuggestedApp>> {
    let feed: SuggestedFeed = serde_json::from_str(json)?;
    Ok(feed.suggested_apps)
}

fn fetch_feed_blocking(url: &str) -> Result<Vec<SuggestedApp>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    let response = client.get(url).send()?.error_for_status()?;
    let body = response.text()?;
    parse_feed(&body)
}

/// Fetch the suggested-apps feed off the UI thread, degrading to the sample
/// entry on any failure.
pub async fn load_suggested(url: String) -> Vec<SuggestedApp> {
    tokio::task::spawn_blocking(move || match fetch_feed_blocking(&url) {
        Ok(apps) => apps,
        Err(e) => {
            eprintln!("[DEBUG] suggested feed unavailable ({}), using sample", e);
            fallback_apps()
        }
    })
    .await
    .unwrap_or_else(|_| fallback_apps())
}

/// Cache file for an icon, keyed by the URL's basename (query string
/// stripped).
pub fn icon_cache_file(cache_dir: &Path, icon_url: &str) -> PathBuf {
    let basename = icon_url
        .split(['?', '#'])
        .next()
        .unwrap_or(icon_url)
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or("icon");
    cache_dir.join(basename)
}

fn download_icon_blocking(cache_dir: &Path, icon_url: &str) -> Option<PathBuf> {
    if icon_url.is_empty() {
        return None;
    }
    let target = icon_cache_file(cache_dir, icon_url);
    if target.exists() {
        return Some(target);
    }
    fs::create_dir_all(cache_dir).ok()?;

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .ok()?;
    let bytes = client
        .get(icon_url)
        .send()
        .and_then(|r| r.error_for_status())
        .ok()?
        .bytes()
        .ok()?;
    fs::write(&target, &bytes).ok()?;
    Some(target)
}

/// Download every app's icon concurrently. A failed download yields no icon
/// for that app; the list itself always loads.
pub async fn prefetch_icons(
    cache_dir: PathBuf,
    apps: Vec<SuggestedApp>,
) -> Vec<(String, Option<PathBuf>)> {
    let downloads = apps.into_iter().map(|app| {
        let dir = cache_dir.clone();
        tokio::task::spawn_blocking(move || {
            let path = download_icon_blocking(&dir, &app.icon_url);
            (app.name, path)
        })
    });

    futures::future::join_all(downloads)
        .await
        .into_iter()
        .filter_map(|joined| joined.ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_feed_document() {
        let json = r#"{
            "suggested_apps": [
                {"app_name": "gimp", "description": "image editor", "icon_url": "https://x/gimp.png"},
                {"app_name": "krita", "description": "painting", "icon_url": "https://x/krita.png"}
            ]
        }"#;
        let apps = parse_feed(json).unwrap();
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].name, "gimp");
        assert_eq!(apps[1].icon_url, "https://x/krita.png");
    }

    #[test]
    fn malformed_feed_is_an_error() {
        assert!(parse_feed("not json").is_err());
        assert!(parse_feed(r#"{"suggested_apps": "nope"}"#).is_err());
    }

    #[test]
    fn feed_without_list_parses_empty() {
        let apps = parse_feed("{}").unwrap();
        assert!(apps.is_empty());
    }

    #[test]
    fn fallback_sample_is_a_single_entry() {
        let apps = fallback_apps();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].name, "abiword");
    }

    #[test]
    fn icon_cache_keyed_by_url_basename() {
        let dir = Path::new("/tmp/icons");
        assert_eq!(
            icon_cache_file(dir, "https://host/path/abiword-icon.png"),
            dir.join("abiword-icon.png")
        );
        assert_eq!(
            icon_cache_file(dir, "https://host/icon.png?size=512"),
            dir.join("icon.png")
        );
        assert_eq!(icon_cache_file(dir, "https://host/"), dir.join("icon"));
    }
}
