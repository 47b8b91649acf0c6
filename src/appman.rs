use anyhow::{anyhow, Result};
use std::process::Stdio;
use tokio::process::Command;

use crate::catalog::AppEntry;
use crate::parse;

/// Backend executable name, expected on PATH after bootstrap.
pub const APPMAN_BIN: &str = "appman";

/// Run an external command off the UI thread and capture everything it says.
///
/// Success and failure are decided by the error channel alone: any bytes on
/// stderr make the invocation a failure carrying the stripped stderr text,
/// regardless of exit status. The backend routes warnings and errors there
/// and its exit codes are not a reliable signal.
pub async fn run_process(program: &str, args: &[String]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| anyhow!("Failed to launch {}: {}", program, e))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.stderr.is_empty() {
        return Err(anyhow!(parse::strip_ansi(&stderr)));
    }

    let mut merged = String::with_capacity(stdout.len() + stderr.len());
    merged.push_str(&stdout);
    merged.push_str(&stderr);
    Ok(parse::strip_ansi(&merged))
}

async fn run(args: Vec<String>) -> Result<String> {
    run_process(APPMAN_BIN, &args).await
}

/// `appman -f` → the entries of the installed list. Only marker-glyph lines
/// are apps; headers and totals are dropped.
pub async fn list_installed() -> Result<Vec<AppEntry>> {
    let output = run(vec!["-f".into()]).await?;
    Ok(installed_from_output(&output))
}

pub fn installed_from_output(output: &str) -> Vec<AppEntry> {
    output
        .lines()
        .filter(|line| parse::is_app_line(line))
        .map(|line| {
            let (name, description) = parse::split_app_line(line);
            let description = description.split_whitespace().collect::<Vec<_>>().join(" ");
            AppEntry { name, description, installed: true }
        })
        .collect()
}

/// `appman -u [name]` — update one app, or everything when `name` is None.
pub async fn update(name: Option<String>) -> Result<String> {
    let mut args = vec!["-u".to_string()];
    if let Some(name) = name {
        args.push(name);
    }
    run(args).await
}

/// `appman -R name` — remove an installed app. Callers confirm first.
pub async fn remove(name: String) -> Result<String> {
    run(vec!["-R".into(), name]).await
}

/// `appman -i name` — install from the catalog.
pub async fn install(name: String) -> Result<String> {
    run(vec!["-i".into(), name]).await
}

/// `appman about name` — info text, may embed URLs.
pub async fn about(name: String) -> Result<String> {
    run(vec!["about".into(), name]).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn success_returns_stripped_merged_output() {
        let out = run_process(
            "sh",
            &["-c".to_string(), r"printf '\033[31mRed\033[0m'".to_string()],
        )
        .await
        .unwrap();
        assert_eq!(out, "Red");
    }

    #[tokio::test]
    async fn stderr_bytes_mean_failure_even_on_exit_zero() {
        let err = run_process(
            "sh",
            &["-c".to_string(), "echo fine; echo warning >&2; exit 0".to_string()],
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("warning"));
    }

    #[tokio::test]
    async fn nonzero_exit_without_stderr_is_success() {
        let out = run_process(
            "sh",
            &["-c".to_string(), "echo fine; exit 4".to_string()],
        )
        .await
        .unwrap();
        assert_eq!(out, "fine\n");
    }

    #[tokio::test]
    async fn unlaunchable_program_is_failure() {
        let err = run_process("appnest-no-such-binary", &[]).await.unwrap_err();
        assert!(err.to_string().contains("Failed to launch"));
    }

    #[test]
    fn installed_list_keeps_only_marker_lines() {
        let output = "◆App1 : desc1\nnot-an-app-line\n◆App2 : desc2\n";
        let apps = installed_from_output(output);
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].name, "App1");
        assert_eq!(apps[0].description, "desc1");
        assert_eq!(apps[1].name, "App2");
        assert_eq!(apps[1].description, "desc2");
        assert!(apps.iter().all(|a| a.installed));
    }
}
