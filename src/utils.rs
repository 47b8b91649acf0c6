use anyhow::Result;
use colored::*;
use std::io::Write;
use std::process::{Command, Stdio};

pub fn confirm(prompt: &str) -> Result<bool> {
    use std::io::{self, Write};

    print!("{} [y/N]: ", prompt.yellow().bold());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_lowercase() == "y" || input.trim().to_lowercase() == "yes")
}

pub fn is_root() -> bool {
    std::env::var("USER").unwrap_or_default() == "root" ||
    unsafe { libc::geteuid() == 0 }
}

fn check_sudo_available() -> Result<()> {
    let output = Command::new("sudo")
        .arg("--version")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output();

    if output.is_err() {
        anyhow::bail!("sudo is not available. Please install sudo or run as root.");
    }

    Ok(())
}

/// Run a command and capture its stdout. Non-zero exit is an error carrying
/// the stderr text.
pub fn run_command(cmd: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(cmd)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("Command failed: {}", stderr);
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Run a command with elevated privileges, inheriting the terminal. Inside a
/// graphical session pkexec provides the polkit password dialog; otherwise
/// sudo is used. Skipped entirely when already root.
pub fn run_elevated(cmd: &str, args: &[&str]) -> Result<()> {
    let status = if is_root() {
        Command::new(cmd).args(args).status()?
    } else {
        let is_gui = std::env::var("DISPLAY").is_ok() || std::env::var("WAYLAND_DISPLAY").is_ok();

        if is_gui {
            print_info("Elevated privileges required, using pkexec...");

            let mut pkexec_cmd = Command::new("pkexec");
            pkexec_cmd.arg(cmd);
            pkexec_cmd.args(args);

            // Preserve the session environment so the polkit dialog can show
            if let Ok(display) = std::env::var("DISPLAY") {
                pkexec_cmd.env("DISPLAY", display);
            }
            if let Ok(xauth) = std::env::var("XAUTHORITY") {
                pkexec_cmd.env("XAUTHORITY", xauth);
            }
            if let Ok(wayland) = std::env::var("WAYLAND_DISPLAY") {
                pkexec_cmd.env("WAYLAND_DISPLAY", wayland);
            }

            pkexec_cmd.status()?
        } else {
            check_sudo_available()?;
            print_info("Elevated privileges required, using sudo...");

            let mut sudo_cmd = Command::new("sudo");
            sudo_cmd.arg(cmd);
            sudo_cmd.args(args);

            sudo_cmd.status()?
        }
    };

    if !status.success() {
        if status.code() == Some(126) || status.code() == Some(127) {
            anyhow::bail!("Authentication failed or cancelled. Please try again.");
        }
        anyhow::bail!("Command failed with exit code: {:?}", status.code());
    }

    Ok(())
}

/// Drive a program that reads an answer from its interactive prompt: write
/// `input` to stdin, close it, wait for exit. Returns the captured stdout on
/// success, the captured stderr as the error otherwise.
pub fn run_with_input(cmd: &str, args: &[&str], input: &str) -> Result<String> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes())?;
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "{} exited with code {:?}: {}",
            cmd,
            output.status.code(),
            stderr.trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

#[allow(dead_code)]
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_command_captures_stdout() {
        let out = run_command("sh", &["-c", "printf hello"]).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn run_command_fails_on_nonzero_exit() {
        let err = run_command("sh", &["-c", "echo broken >&2; exit 3"]).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn run_with_input_feeds_stdin() {
        let out = run_with_input("sh", &["-c", "read line; printf 'got %s' \"$line\""], "2\n")
            .unwrap();
        assert_eq!(out, "got 2");
    }

    #[test]
    fn run_with_input_reports_failure() {
        let err = run_with_input("sh", &["-c", "exit 1"], "").unwrap_err();
        assert!(err.to_string().contains("exited with code"));
    }
}
