// ABOUTME: Locates the results table in a parsed page and streams its rows.
// ABOUTME: Classifies each row as separator, header or topic by structural shape alone.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use super::{has_class, row_cells};
use crate::error::LookupError;

// The results live in a uniquely classed wrapper; its first table is the
// results table.
static WRAPPER_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.middle_col").unwrap());
static TABLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());

/// The structural role of one results-table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Boundary row with no classed cell, delimiting one translation's rows
    /// from the next.
    Separator,
    /// Carries the translated word cell (classed "gray").
    Header,
    /// A subject/translations cell pair.
    Topic,
}

/// Locate the results table and yield its rows in document order.
///
/// A missing wrapper or table means the page layout changed or the results
/// block vanished entirely; an empty row list is the caller's valid
/// "no results" case.
pub fn extract_rows(doc: &Html) -> Result<Vec<ElementRef<'_>>, LookupError> {
    let wrapper = doc
        .select(&WRAPPER_SELECTOR)
        .next()
        .ok_or_else(|| LookupError::structure("ExtractRows", "missing results table"))?;
    let table = wrapper
        .select(&TABLE_SELECTOR)
        .next()
        .ok_or_else(|| LookupError::structure("ExtractRows", "missing results table"))?;
    Ok(child_rows(table))
}

// Only direct rows count: cells may nest further tables, and descendant
// selection would leak their rows into the stream.
fn child_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut rows = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => rows.extend(
                child
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|el| el.value().name() == "tr"),
            ),
            _ => {}
        }
    }
    rows
}

/// Classify a row by shape. Total over any input: rows that are neither
/// separators nor headers are handed to the topic parser, which performs
/// the defensive shape checks.
pub fn classify_row(row: ElementRef<'_>) -> RowKind {
    let cells = row_cells(row);
    if cells.iter().any(|c| has_class(*c, "gray")) {
        return RowKind::Header;
    }
    if cells.iter().all(|c| c.value().attr("class").is_none()) {
        return RowKind::Separator;
    }
    RowKind::Topic
}
