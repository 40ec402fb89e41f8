// ABOUTME: Results-table parsing for Multitran pages.
// ABOUTME: Shared node/text helpers plus the row, header, topic and assembly submodules.

//! Results-table parsing module.
//!
//! Turns a parsed results page into the typed lookup graph. The table is
//! located and streamed row by row; rows are classified by shape alone and
//! grouped into translations.
//!
//! Submodules:
//! - `rows`: results-table location, row stream, row classifier.
//! - `header`: header row -> `TranslationHeader`.
//! - `topic`: topic row -> `Topic`, including the meaning state machine.
//! - `assemble`: row grouping and the `parse_results` entry point.

pub mod assemble;
pub mod header;
pub mod rows;
pub mod topic;

pub use assemble::parse_results;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;

// Multitran is not consistent about spacing inside style attributes, so the
// color markers are matched with tolerant patterns.
static GRAY_STYLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:^|;)\s*color\s*:\s*gray").unwrap());
static COMMENT_STYLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)rgb\(\s*60\s*,\s*179\s*,\s*113\s*\)").unwrap());

/// Collapses runs of whitespace (including NBSP) into single spaces.
pub(crate) fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Inner text of an element, whitespace-normalized.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    normalize_whitespace(&el.text().collect::<String>())
}

/// Direct `td` children of a row, in document order.
pub(crate) fn row_cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "td")
        .collect()
}

pub(crate) fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// The gray color style marking pronunciations and context annotations.
pub(crate) fn has_gray_style(el: ElementRef<'_>) -> bool {
    el.value()
        .attr("style")
        .map_or(false, |s| GRAY_STYLE_RE.is_match(s))
}

/// The green marker color distinguishing comment spans.
pub(crate) fn has_comment_style(el: ElementRef<'_>) -> bool {
    el.value()
        .attr("style")
        .map_or(false, |s| COMMENT_STYLE_RE.is_match(s))
}
