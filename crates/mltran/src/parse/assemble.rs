// ABOUTME: Groups classified results-table rows into Translation records.
// ABOUTME: Hosts parse_results, the markup-tree-to-LookupResult entry point.

use scraper::{ElementRef, Html};

use super::header::parse_header;
use super::rows::{classify_row, extract_rows, RowKind};
use super::topic::parse_topic;
use crate::error::LookupError;
use crate::models::{LookupResult, Translation};

/// Parse a whole results page into a LookupResult.
///
/// A present-but-empty results table is a valid empty result; a missing
/// wrapper or table is a structural error. `phrase` and `url` are left for
/// the client layer to fill.
pub fn parse_results(doc: &Html) -> Result<LookupResult, LookupError> {
    let rows = extract_rows(doc)?;
    let classified: Vec<(RowKind, ElementRef<'_>)> =
        rows.into_iter().map(|row| (classify_row(row), row)).collect();
    let translations = assemble(&classified)?;
    Ok(LookupResult {
        translations,
        ..Default::default()
    })
}

/// Group rows into translations with an index cursor: each group opens at a
/// separator, continues with a header row, and collects topic rows until
/// the next separator, which is left unconsumed to open the next group.
/// The run ends cleanly when no further separator precedes a header row.
fn assemble(rows: &[(RowKind, ElementRef<'_>)]) -> Result<Vec<Translation>, LookupError> {
    let mut translations = Vec::new();
    let mut i = 0;
    while i < rows.len() {
        if rows[i].0 != RowKind::Separator {
            i += 1;
            continue;
        }
        i += 1;
        // lookahead: nothing or another separator here means no entry starts
        if i >= rows.len() || rows[i].0 == RowKind::Separator {
            continue;
        }
        // a topic row here surfaces the header parser's structural error
        let header = parse_header(rows[i].1)?;
        i += 1;
        let mut topics = Vec::new();
        while i < rows.len() && rows[i].0 != RowKind::Separator {
            topics.push(parse_topic(rows[i].1)?);
            i += 1;
        }
        translations.push(Translation { header, topics });
    }
    Ok(translations)
}
