use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::{self, Config};
use crate::utils;

const INSTALLER_URL: &str = "https://raw.githubusercontent.com/ivan-hc/AM/main/AM-INSTALLER";
const INSTALLER_FILE: &str = "./AM-INSTALLER";

/// Answer to the installer's mode prompt: option 2, local (user) installation.
const INSTALLER_CHOICE: &str = "2\n";

/// OS packages AppMan needs before its installer can run.
const DEPENDENCIES: &[&str] = &[
    "coreutils", "curl", "grep", "less", "sed", "wget",
    "sudo", "binutils", "unzip", "tar", "torsocks", "zsync",
];

/// Every variant aborts startup; no partial UI is shown.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("missing packages could not be installed ({packages}): {reason}")]
    Dependencies { packages: String, reason: String },
    #[error("installer download failed: {0}")]
    Download(String),
    #[error("installer run failed: {0}")]
    InstallerRun(String),
    #[error("appman executable missing after installation")]
    BackendMissing,
    #[error("appman configuration failed: {0}")]
    Configure(String),
}

/// Deletes the downloaded installer script on every exit path.
struct RemoveOnDrop(PathBuf);

impl Drop for RemoveOnDrop {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

/// One-time startup check: make sure the AppMan backend exists, installing
/// and configuring it when absent. Never re-entered during normal operation.
pub fn ensure_backend(config: &Config) -> Result<(), BootstrapError> {
    let appman = config::appman_path();
    if appman.exists() {
        eprintln!("[DEBUG] appman found at {}", appman.display());
        return Ok(());
    }

    utils::print_info("AppMan backend not found, installing...");

    install_dependencies()?;
    run_installer()?;

    if !appman.exists() {
        return Err(BootstrapError::BackendMissing);
    }

    configure_backend(&appman, &config.install_dir)?;
    utils::print_success("AppMan is ready to use");
    Ok(())
}

fn is_package_installed(name: &str) -> bool {
    utils::run_command("dpkg", &["-s", name]).is_ok()
}

fn install_dependencies() -> Result<(), BootstrapError> {
    let missing: Vec<&str> = DEPENDENCIES
        .iter()
        .copied()
        .filter(|dep| !is_package_installed(dep))
        .collect();

    if missing.is_empty() {
        eprintln!("[DEBUG] all backend dependencies present");
        return Ok(());
    }

    // One elevated batch for everything that is missing
    let mut args = vec!["install", "-y"];
    args.extend(&missing);
    utils::run_elevated("apt", &args).map_err(|e| BootstrapError::Dependencies {
        packages: missing.join(", "),
        reason: e.to_string(),
    })?;

    Ok(())
}

fn download_installer(target: &Path) -> Result<(), BootstrapError> {
    let response = reqwest::blocking::get(INSTALLER_URL)
        .and_then(|r| r.error_for_status())
        .map_err(|e| BootstrapError::Download(e.to_string()))?;
    let bytes = response
        .bytes()
        .map_err(|e| BootstrapError::Download(e.to_string()))?;
    fs::write(target, &bytes).map_err(|e| BootstrapError::Download(e.to_string()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(target, fs::Permissions::from_mode(0o755))
            .map_err(|e| BootstrapError::Download(e.to_string()))?;
    }

    Ok(())
}

fn run_installer() -> Result<(), BootstrapError> {
    let script = PathBuf::from(INSTALLER_FILE);
    download_installer(&script)?;
    let _cleanup = RemoveOnDrop(script.clone());

    utils::run_with_input(INSTALLER_FILE, &[], INSTALLER_CHOICE)
        .map_err(|e| BootstrapError::InstallerRun(e.to_string()))?;

    Ok(())
}

fn configure_backend(appman: &Path, install_dir: &Path) -> Result<(), BootstrapError> {
    let answer = format!("{}\n", install_dir.display());
    utils::run_with_input(&appman.to_string_lossy(), &[], &answer)
        .map_err(|e| BootstrapError::Configure(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_removes_file_on_drop() {
        let path = std::env::temp_dir().join(format!("appnest-installer-{}", std::process::id()));
        fs::write(&path, "#!/bin/sh\n").unwrap();
        {
            let _guard = RemoveOnDrop(path.clone());
            assert!(path.exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn guard_ignores_already_missing_file() {
        let path = std::env::temp_dir().join("appnest-never-created");
        let _guard = RemoveOnDrop(path);
        // drop must not panic
    }

    #[test]
    fn guard_runs_on_early_return() {
        let path = std::env::temp_dir().join(format!("appnest-early-{}", std::process::id()));
        fs::write(&path, "x").unwrap();

        fn fails_midway(guard_path: PathBuf) -> Result<(), BootstrapError> {
            let _cleanup = RemoveOnDrop(guard_path);
            Err(BootstrapError::BackendMissing)
        }

        assert!(fails_midway(path.clone()).is_err());
        assert!(!path.exists());
    }
}
