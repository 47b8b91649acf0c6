use std::fs;
use std::path::Path;

use crate::parse;

/// One application row in the installed or available list. Rebuilt on every
/// refresh; the backend owns the persistent state on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    pub name: String,
    pub description: String,
    pub installed: bool,
}

/// Queries shorter than this do not trigger filtering as the user types.
pub const MIN_SEARCH_LEN: usize = 2;

/// Read the AppMan catalog file (one application per line, `◆name : desc`
/// or a bare name) into available-app entries. Blank lines are skipped;
/// an unreadable file degrades to an empty catalog.
pub fn load_available(path: &Path) -> Vec<AppEntry> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("[DEBUG] failed to read catalog {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (name, description) = parse::split_app_line(line);
            AppEntry { name, description, installed: false }
        })
        .collect()
}

/// Case-insensitive filter over name and description. Derives a fresh view;
/// the cached base list is never mutated. Queries under the minimum length
/// return the full list unchanged.
pub fn filter_apps(apps: &[AppEntry], query: &str) -> Vec<AppEntry> {
    let query = query.trim();
    if query.chars().count() < MIN_SEARCH_LEN {
        return apps.to_vec();
    }
    let needle = query.to_lowercase();
    apps.iter()
        .filter(|app| {
            app.name.to_lowercase().contains(&needle)
                || app.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Load the catalog off the UI thread. First call per session; the GUI keeps
/// the result cached in memory afterwards.
pub async fn load_available_async(path: std::path::PathBuf) -> Vec<AppEntry> {
    tokio::task::spawn_blocking(move || load_available(&path))
        .await
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn entry(name: &str, description: &str) -> AppEntry {
        AppEntry {
            name: name.to_string(),
            description: description.to_string(),
            installed: false,
        }
    }

    #[test]
    fn loads_catalog_lines_and_skips_blanks() -> Result<()> {
        let path = std::env::temp_dir().join(format!("appnest-catalog-{}", std::process::id()));
        fs::write(&path, "◆gimp : image editor\n\n◆krita : painting studio\nbare-app\n")?;
        let apps = load_available(&path);
        fs::remove_file(&path)?;

        assert_eq!(apps.len(), 3);
        assert_eq!(apps[0], entry("gimp", "image editor"));
        assert_eq!(apps[1], entry("krita", "painting studio"));
        assert_eq!(apps[2], entry("bare-app", ""));
        assert!(apps.iter().all(|a| !a.installed));
        Ok(())
    }

    #[test]
    fn missing_catalog_degrades_to_empty() {
        let apps = load_available(Path::new("/nonexistent/appnest-no-such-catalog"));
        assert!(apps.is_empty());
    }

    #[test]
    fn short_query_leaves_list_unfiltered() {
        let apps = vec![entry("gimp", "image editor"), entry("krita", "painting")];
        assert_eq!(filter_apps(&apps, ""), apps);
        assert_eq!(filter_apps(&apps, "g"), apps);
    }

    #[test]
    fn filter_matches_name_and_description_case_insensitively() {
        let apps = vec![
            entry("Gimp", "image editor"),
            entry("krita", "Digital PAINTING studio"),
            entry("zettlr", "markdown notes"),
        ];

        let by_name = filter_apps(&apps, "GIMP");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Gimp");

        let by_description = filter_apps(&apps, "painting");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].name, "krita");

        assert!(filter_apps(&apps, "no-match").is_empty());
    }

    #[test]
    fn filter_does_not_mutate_base_list() {
        let apps = vec![entry("gimp", "image editor"), entry("krita", "painting")];
        let before = apps.clone();
        let _ = filter_apps(&apps, "gimp");
        assert_eq!(apps, before);
    }
}
