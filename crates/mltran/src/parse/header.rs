// ABOUTME: Parses a header row into a TranslationHeader.
// ABOUTME: Word from the first link; prefix, pronunciation and word class from surrounding nodes.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use super::{element_text, has_class, has_gray_style, row_cells};
use crate::error::LookupError;
use crate::models::TranslationHeader;

static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// Parse a header row.
///
/// The word cell is the one classed "gray"; the word itself is the first
/// link's text. The cell's children are walked left to right: a span before
/// the word link is the prefix (first occurrence only), a gray-styled span
/// after it is the pronunciation, a span classed "small" is trailing
/// decoration, and an `em` node is the word class.
pub fn parse_header(row: ElementRef<'_>) -> Result<TranslationHeader, LookupError> {
    let cell = row_cells(row)
        .into_iter()
        .find(|c| has_class(*c, "gray"))
        .ok_or_else(|| LookupError::structure("ParseHeader", "header missing word cell"))?;

    let word = cell
        .select(&LINK_SELECTOR)
        .next()
        .map(element_text)
        .filter(|w| !w.is_empty())
        .ok_or_else(|| LookupError::structure("ParseHeader", "header missing word link"))?;

    let mut header = TranslationHeader {
        word,
        ..Default::default()
    };
    let mut seen_word_link = false;

    for child in cell.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "a" => seen_word_link = true,
            "span" if !seen_word_link => {
                if header.word_prefix.is_none() {
                    let text = element_text(child);
                    if !text.is_empty() {
                        header.word_prefix = Some(text);
                    }
                }
            }
            "span" => {
                if has_gray_style(child) {
                    if header.pronunciation.is_none() {
                        let text = element_text(child);
                        if !text.is_empty() {
                            header.pronunciation = Some(text);
                        }
                    }
                } else if has_class(child, "small") {
                    // trailing decoration
                } else {
                    log::warn!(
                        "unrecognized span in header row (style={:?})",
                        child.value().attr("style")
                    );
                }
            }
            "em" => {
                if header.word_class.is_none() {
                    let text = element_text(child);
                    if !text.is_empty() {
                        header.word_class = Some(text);
                    }
                }
            }
            _ => {}
        }
    }

    Ok(header)
}
