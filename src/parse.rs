use regex::Regex;
use std::sync::OnceLock;

/// Marker glyph AppMan prefixes installed-app lines with in `appman -f` output.
pub const APP_MARKER: char = '◆';

/// Phrase AppMan prints before the summary of a successful installation.
pub const INSTALL_SUCCESS_MARKER: &str = "The following new programs have been installed:";

fn ansi_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-?]*[ -/]*[@-~]").unwrap())
}

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://\S+").unwrap())
}

/// Remove ANSI CSI escape sequences from backend output.
pub fn strip_ansi(text: &str) -> String {
    ansi_regex().replace_all(text, "").into_owned()
}

fn strip_marker(name: &str) -> &str {
    name.trim().strip_prefix(APP_MARKER).unwrap_or(name.trim()).trim()
}

/// Split one line of backend output into (name, description).
///
/// Splits on the first `" : "`, else on the first `"|"`. A description
/// containing the delimiter itself is split at the first occurrence only;
/// the backend does not escape delimiters.
pub fn split_app_line(line: &str) -> (String, String) {
    if let Some(pos) = line.find(" : ") {
        let name = strip_marker(&line[..pos]).to_string();
        let description = line[pos + 3..].trim().to_string();
        (name, description)
    } else if let Some(pos) = line.find('|') {
        let name = strip_marker(&line[..pos]).to_string();
        let description = line[pos + 1..].trim().to_string();
        (name, description)
    } else {
        (strip_marker(line).to_string(), String::new())
    }
}

/// True for lines that describe an app in `appman -f` output. Header and
/// informational lines are not marked and get skipped by callers.
pub fn is_app_line(line: &str) -> bool {
    line.trim().starts_with(APP_MARKER)
}

/// Reduce install output to the part worth showing: everything after the
/// last success marker, or the untouched output when the marker is absent.
pub fn install_summary(output: &str) -> String {
    match output.rfind(INSTALL_SUCCESS_MARKER) {
        Some(pos) => {
            let tail = output[pos + INSTALL_SUCCESS_MARKER.len()..].trim();
            format!("{}\n{}", INSTALL_SUCCESS_MARKER, tail)
        }
        None => output.to_string(),
    }
}

/// Collect http(s) URLs embedded in `appman about` output so the dialog can
/// offer them as openable links.
pub fn extract_urls(text: &str) -> Vec<String> {
    url_regex()
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(['.', ',', ')', ']']).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_colon_delimiter_only() {
        let (name, desc) = split_app_line("◆Foo Bar : does X : extra");
        assert_eq!(name, "Foo Bar");
        assert_eq!(desc, "does X : extra");
    }

    #[test]
    fn splits_on_pipe_when_no_colon_delimiter() {
        let (name, desc) = split_app_line("◆krita | digital painting studio");
        assert_eq!(name, "krita");
        assert_eq!(desc, "digital painting studio");
    }

    #[test]
    fn bare_line_has_empty_description() {
        let (name, desc) = split_app_line("  ◆zettlr  ");
        assert_eq!(name, "zettlr");
        assert_eq!(desc, "");
    }

    #[test]
    fn line_without_marker_keeps_name() {
        let (name, desc) = split_app_line("plainapp : a plain app");
        assert_eq!(name, "plainapp");
        assert_eq!(desc, "a plain app");
    }

    #[test]
    fn strips_csi_sequences() {
        assert_eq!(strip_ansi("\x1b[31mRed\x1b[0m"), "Red");
        assert_eq!(strip_ansi("\x1b[1;32mbold green\x1b[0m rest"), "bold green rest");
        assert_eq!(strip_ansi("no escapes"), "no escapes");
    }

    #[test]
    fn marker_lines_detected() {
        assert!(is_app_line("◆app : desc"));
        assert!(is_app_line("  ◆app"));
        assert!(!is_app_line("YOU HAVE INSTALLED 2 PROGRAMS"));
        assert!(!is_app_line(""));
    }

    #[test]
    fn install_summary_keeps_tail_after_marker() {
        let output = format!(
            "lots of download noise\n{}\n◆newapp : shiny\n",
            INSTALL_SUCCESS_MARKER
        );
        let summary = install_summary(&output);
        assert_eq!(
            summary,
            format!("{}\n◆newapp : shiny", INSTALL_SUCCESS_MARKER)
        );
    }

    #[test]
    fn install_summary_without_marker_is_verbatim() {
        let output = "nothing special happened\n";
        assert_eq!(install_summary(output), output);
    }

    #[test]
    fn urls_extracted_from_about_text() {
        let text = "Site: https://example.org/app. Source https://github.com/x/y";
        let urls = extract_urls(text);
        assert_eq!(urls, vec!["https://example.org/app", "https://github.com/x/y"]);
    }
}
