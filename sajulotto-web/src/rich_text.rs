//! Emphasis-aware rendering for sanitized report text.
//!
//! Sanitized text carries at most one kind of tag, a bare `<b>`; everything
//! here assumes that invariant and never injects raw HTML.

use sajulotto_core::sanitize::{sanitize_report_text, split_sections};
use yew::prelude::*;

/// One run of sanitized text, either plain or emphasized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Emphasis(String),
}

/// Split sanitized text into plain and emphasized runs.
///
/// An unclosed opening tag swallows the remainder as emphasis, matching how
/// browsers close dangling inline elements.
#[must_use]
pub fn split_emphasis(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find("<b>") {
        if open > 0 {
            segments.push(Segment::Plain(rest[..open].to_string()));
        }
        let after_open = &rest[open + 3..];
        match after_open.find("</b>") {
            Some(close) => {
                if close > 0 {
                    segments.push(Segment::Emphasis(after_open[..close].to_string()));
                }
                rest = &after_open[close + 4..];
            }
            None => {
                if !after_open.is_empty() {
                    segments.push(Segment::Emphasis(after_open.to_string()));
                }
                rest = "";
            }
        }
    }
    if !rest.is_empty() {
        segments.push(Segment::Plain(rest.to_string()));
    }
    segments
}

/// Render one sanitized text run with the emphasis styling applied.
#[must_use]
pub fn render_rich(text: &str) -> Html {
    let segments = split_emphasis(&sanitize_report_text(text));
    html! {
        <>
            { for segments.into_iter().map(|segment| match segment {
                Segment::Plain(plain) => html! { <span>{ plain }</span> },
                Segment::Emphasis(emphasized) => {
                    html! { <span class="report-emphasis">{ emphasized }</span> }
                }
            }) }
        </>
    }
}

/// Render a long-form report as one card per bracket-headed section.
#[must_use]
pub fn render_report_sections(report_text: &str) -> Html {
    html! {
        <div class="report-sections">
            { for split_sections(report_text).into_iter().map(|section| html! {
                <div class="report-card">
                    <p class="report-body">{ render_rich(&section) }</p>
                </div>
            }) }
        </div>
    }
}
