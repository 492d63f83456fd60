//! Cleanup for collaborator-generated rich text before display.
//!
//! The model is only allowed one inline emphasis tag. Everything else that
//! looks like markup is stripped, along with stray foreign-word noise that
//! breaks the layout's script rendering.

use std::sync::OnceLock;

use regex::Regex;

const BOLD_OPEN_TOKEN: &str = "___B_OPEN___";
const BOLD_CLOSE_TOKEN: &str = "___B_CLOSE___";

fn interjection_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\([A-Za-z]+!\)").expect("static pattern"))
}

fn bold_open_re() -> &'static Regex {
    // Matches attribute-carrying forms too; attributes are dropped.
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<b\b[^>]*>").expect("static pattern"))
}

fn bold_close_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</b>").expect("static pattern"))
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"</?[^>]+(>|$)").expect("static pattern"))
}

fn latin_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:\b[A-Za-z]{3,}\b[\s,]*){8,}").expect("static pattern"))
}

/// Sanitize one collaborator text field.
///
/// Drops parenthesised interjections like `(Seeping!)`, strips every tag
/// except the single allowed emphasis tag (normalized to a bare `<b>`), and
/// removes runs of eight or more loose Latin-script words.
#[must_use]
pub fn sanitize_report_text(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    let text = interjection_re().replace_all(input, "");
    let text = bold_open_re().replace_all(&text, BOLD_OPEN_TOKEN);
    let text = bold_close_re().replace_all(&text, BOLD_CLOSE_TOKEN);
    let text = tag_re().replace_all(&text, "");
    let text = text
        .replace(BOLD_OPEN_TOKEN, "<b>")
        .replace(BOLD_CLOSE_TOKEN, "</b>");
    let text = latin_run_re().replace_all(&text, "");
    text.trim().to_string()
}

/// Sanitize a long-form report and split it into bracket-headed sections.
#[must_use]
pub fn split_sections(text: &str) -> Vec<String> {
    let safe = sanitize_report_text(text);
    let mut sections = Vec::new();
    let mut start = 0;
    for (idx, _) in safe.match_indices('\n') {
        if safe[idx + 1..].starts_with('[') {
            sections.push(safe[start..idx].to_string());
            start = idx + 1;
        }
    }
    sections.push(safe[start..].to_string());
    sections
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
