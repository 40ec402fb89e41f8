// ABOUTME: Parses a topic row: subject cell into short_name/description, translations cell into Meanings.
// ABOUTME: Streams the translations cell's children through a one-accumulator token machine.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Node, Selector};

use super::{element_text, has_comment_style, has_gray_style, row_cells};
use crate::error::LookupError;
use crate::models::{Comment, Context, Meaning, MeaningNode, Topic};

/// Literal text between two inline nodes that closes the current meaning.
const MEANING_SEPARATOR: &str = "; ";

static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
static ITALIC_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("i").unwrap());

/// What a child node of the translations cell means, keyed on (tag, style).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InlineKind {
    /// A link: plain meaning text.
    MeaningLink,
    /// A gray-styled span: an inline Context annotation.
    ContextSpan,
    /// Anything else, including comment-colored spans outside a context
    /// (an old-layout shape this grammar does not cover).
    Other,
}

fn classify_inline(el: ElementRef<'_>) -> InlineKind {
    match el.value().name() {
        "a" => InlineKind::MeaningLink,
        "span" if has_gray_style(el) => InlineKind::ContextSpan,
        _ => InlineKind::Other,
    }
}

/// Parse a topic row into a Topic.
///
/// The row must be a subject/translations cell pair; anything else means
/// the page format changed.
pub fn parse_topic(row: ElementRef<'_>) -> Result<Topic, LookupError> {
    let cells = row_cells(row);
    if cells.len() != 2 {
        return Err(LookupError::structure(
            "ParseTopic",
            "topic row is not a subject/translations cell pair",
        ));
    }
    let (short_name, description) = parse_subject(cells[0]);
    let meanings = parse_meanings(cells[1]);
    Ok(Topic {
        short_name,
        description,
        meanings,
    })
}

// The subject link's title attribute holds the full topic name; at least
// one observed page put it in a nested italic instead, so that fallback is
// kept. No link at all means an uncategorized topic.
fn parse_subject(cell: ElementRef<'_>) -> (Option<String>, Option<String>) {
    let link = match cell.select(&LINK_SELECTOR).next() {
        Some(link) => link,
        None => return (None, None),
    };
    let short_name = Some(element_text(link)).filter(|t| !t.is_empty());
    let description = link
        .value()
        .attr("title")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .or_else(|| {
            link.select(&ITALIC_SELECTOR)
                .next()
                .map(element_text)
                .filter(|t| !t.is_empty())
        });
    (short_name, description)
}

/// Stream the translations cell's children left to right, splitting
/// meanings on the literal `"; "` text that follows an inline node.
///
/// Links append plain text to the current meaning; gray spans append a
/// Context; unrecognized nodes degrade to their plain text rather than
/// aborting the parse. The trailing accumulator becomes the last meaning.
pub fn parse_meanings(cell: ElementRef<'_>) -> Vec<Meaning> {
    let mut meanings = Vec::new();
    let mut current: Vec<MeaningNode> = Vec::new();

    for node in cell.children() {
        if let Some(el) = ElementRef::wrap(node) {
            match classify_inline(el) {
                InlineKind::MeaningLink => {
                    let text = element_text(el);
                    if !text.is_empty() {
                        current.push(MeaningNode::Plain(text));
                    }
                }
                InlineKind::ContextSpan => {
                    let context = parse_context(el);
                    if context.is_empty() {
                        // parse defect; never emit an all-empty Context
                        log::warn!("dropping empty context annotation");
                    } else {
                        current.push(MeaningNode::Context(context));
                    }
                }
                InlineKind::Other => {
                    let text = element_text(el);
                    log::warn!(
                        "unrecognized inline node <{}>, keeping its text",
                        el.value().name()
                    );
                    if !text.is_empty() {
                        current.push(MeaningNode::Plain(text));
                    }
                }
            }
        } else if let Node::Text(text) = node.value() {
            if &**text == MEANING_SEPARATOR && !current.is_empty() {
                meanings.push(Meaning {
                    elements: std::mem::take(&mut current),
                });
            }
        }
    }

    if !current.is_empty() {
        meanings.push(Meaning { elements: current });
    }
    meanings
}

fn parse_context(span: ElementRef<'_>) -> Context {
    let text = leading_text(span).and_then(|raw| trim_annotation_text(&raw));
    let author = italic_link_text(span);
    let comment = span
        .children()
        .filter_map(ElementRef::wrap)
        .find(|child| child.value().name() == "span" && has_comment_style(*child))
        .and_then(parse_comment);
    Context {
        text,
        author,
        comment,
    }
}

// A comment carries its own text plus an attributed author; one without
// both is dropped instead of producing a half-empty node.
fn parse_comment(span: ElementRef<'_>) -> Option<Comment> {
    let text = leading_text(span).and_then(|raw| trim_annotation_text(&raw));
    let author = italic_link_text(span);
    match (text, author) {
        (Some(text), Some(author)) => Some(Comment { text, author }),
        _ => {
            log::warn!("dropping comment annotation without text and author");
            None
        }
    }
}

/// The annotation's own text: its first direct text child, before or
/// between nested markup.
fn leading_text(el: ElementRef<'_>) -> Option<String> {
    el.children().find_map(|node| match node.value() {
        Node::Text(text) => Some((**text).to_string()),
        _ => None,
    })
}

/// Contributor attribution: a direct italic child wrapping a link.
fn italic_link_text(el: ElementRef<'_>) -> Option<String> {
    for child in el.children().filter_map(ElementRef::wrap) {
        if child.value().name() == "i" {
            if let Some(link) = child.select(&LINK_SELECTOR).next() {
                let text = element_text(link);
                if !text.is_empty() {
                    return Some(text);
                }
            }
        }
    }
    None
}

/// Trim outer whitespace (including NBSP) and a single outermost
/// parenthesis pair; interior content is never touched. All-whitespace
/// input becomes None.
fn trim_annotation_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('(').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(')').unwrap_or(trimmed);
    let trimmed = trimmed.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scraper::Html;

    fn parse_cell(cell_html: &str) -> Vec<Meaning> {
        let doc = Html::parse_document(&format!(
            r#"<html><body><table><tr><td class="subj"></td><td class="trans">{}</td></tr></table></body></html>"#,
            cell_html
        ));
        let selector = Selector::parse("td.trans").unwrap();
        parse_meanings(doc.select(&selector).next().unwrap())
    }

    fn parse_row(row_html: &str) -> Result<Topic, LookupError> {
        let doc = Html::parse_document(&format!(
            "<html><body><table>{}</table></body></html>",
            row_html
        ));
        let selector = Selector::parse("tr").unwrap();
        parse_topic(doc.select(&selector).next().unwrap())
    }

    fn plain(text: &str) -> MeaningNode {
        MeaningNode::Plain(text.to_string())
    }

    #[test]
    fn single_link_is_single_meaning() {
        let meanings = parse_cell(r##"<a href="#">meaning</a>"##);
        assert_eq!(
            meanings,
            vec![Meaning {
                elements: vec![plain("meaning")]
            }]
        );
    }

    #[test]
    fn literal_separator_splits_meanings() {
        let meanings = parse_cell(r##"<a href="#">A</a>; <a href="#">B</a>"##);
        assert_eq!(
            meanings,
            vec![
                Meaning {
                    elements: vec![plain("A")]
                },
                Meaning {
                    elements: vec![plain("B")]
                },
            ]
        );
    }

    #[test]
    fn context_around_meaning_stays_in_one_meaning() {
        let meanings = parse_cell(
            r##"<span style="color:gray">pre context</span><a href="#">meaning</a><span style="color:gray">post context</span>"##,
        );
        assert_eq!(
            meanings,
            vec![Meaning {
                elements: vec![
                    MeaningNode::Context(Context {
                        text: Some("pre context".to_string()),
                        ..Default::default()
                    }),
                    plain("meaning"),
                    MeaningNode::Context(Context {
                        text: Some("post context".to_string()),
                        ..Default::default()
                    }),
                ]
            }]
        );
    }

    #[test]
    fn links_without_separator_share_one_meaning() {
        let meanings = parse_cell(
            r##"<a href="#">meaning start</a><span style="color:gray">explanation</span><a href="#">meaning end</a>"##,
        );
        assert_eq!(
            meanings,
            vec![Meaning {
                elements: vec![
                    plain("meaning start"),
                    MeaningNode::Context(Context {
                        text: Some("explanation".to_string()),
                        ..Default::default()
                    }),
                    plain("meaning end"),
                ]
            }]
        );
    }

    #[test]
    fn empty_parenthesis_author_yields_textless_context() {
        let meanings = parse_cell(
            r##"<span style="color:gray">(<i><a href="#">author</a></i>)</span><a href="#">meaning</a>"##,
        );
        assert_eq!(
            meanings,
            vec![Meaning {
                elements: vec![
                    MeaningNode::Context(Context {
                        text: None,
                        author: Some("author".to_string()),
                        comment: None,
                    }),
                    plain("meaning"),
                ]
            }]
        );
    }

    #[test]
    fn trims_parenthesis_pair_and_outer_whitespace() {
        let meanings = parse_cell(
            "<span style=\"color:gray\"> context\u{a0}</span><a href=\"#\">meaning</a><span style=\"color:gray\">(test)</span>",
        );
        assert_eq!(
            meanings,
            vec![Meaning {
                elements: vec![
                    MeaningNode::Context(Context {
                        text: Some("context".to_string()),
                        ..Default::default()
                    }),
                    plain("meaning"),
                    MeaningNode::Context(Context {
                        text: Some("test".to_string()),
                        ..Default::default()
                    }),
                ]
            }]
        );
    }

    #[test]
    fn trimming_never_touches_interior_content() {
        assert_eq!(trim_annotation_text("((x))"), Some("(x)".to_string()));
        assert_eq!(trim_annotation_text("a (b) c"), Some("a (b) c".to_string()));
        assert_eq!(trim_annotation_text(" ( "), None);
        assert_eq!(trim_annotation_text("\u{a0}"), None);
    }

    #[test]
    fn nested_comment_attaches_to_its_context() {
        let meanings = parse_cell(
            r##"<a href="#">meaning</a><span style="color:gray">context<span style="color:rgb(60,179,113)">comment<i><a href="#">author</a></i></span></span>"##,
        );
        assert_eq!(
            meanings,
            vec![Meaning {
                elements: vec![
                    plain("meaning"),
                    MeaningNode::Context(Context {
                        text: Some("context".to_string()),
                        author: None,
                        comment: Some(Comment {
                            text: "comment".to_string(),
                            author: "author".to_string(),
                        }),
                    }),
                ]
            }]
        );
    }

    #[test]
    fn comment_author_is_not_the_context_author() {
        // the only italic link sits inside the comment span; the context
        // itself has no attribution
        let meanings = parse_cell(
            r##"<span style="color:gray">(ctx<span style="color:rgb(60, 179, 113)">note<i><a href="#">lexa</a></i></span>)</span>"##,
        );
        let Meaning { elements } = &meanings[0];
        assert_eq!(elements.len(), 1);
        let MeaningNode::Context(context) = &elements[0] else {
            panic!("expected a context element");
        };
        assert_eq!(context.author, None);
        assert_eq!(
            context.comment,
            Some(Comment {
                text: "note".to_string(),
                author: "lexa".to_string(),
            })
        );
    }

    #[test]
    fn unknown_inline_node_degrades_to_plain_text() {
        let meanings = parse_cell(r##"<a href="#">meaning</a><b>loud</b>"##);
        assert_eq!(
            meanings,
            vec![Meaning {
                elements: vec![plain("meaning"), plain("loud")]
            }]
        );
    }

    #[test]
    fn empty_context_span_is_dropped() {
        let meanings = parse_cell(r##"<span style="color:gray"> ( </span><a href="#">meaning</a>"##);
        assert_eq!(
            meanings,
            vec![Meaning {
                elements: vec![plain("meaning")]
            }]
        );
    }

    #[test]
    fn leading_separator_text_emits_no_empty_meaning() {
        let meanings = parse_cell(r##"; <a href="#">meaning</a>"##);
        assert_eq!(meanings.len(), 1);
    }

    #[test]
    fn subject_link_title_becomes_description() {
        let topic = parse_row(
            r##"<tr><td class="subj"><a href="#" title="General">gen.</a></td><td class="trans"><a href="#">to operate</a></td></tr>"##,
        )
        .unwrap();
        assert_eq!(topic.short_name.as_deref(), Some("gen."));
        assert_eq!(topic.description.as_deref(), Some("General"));
        assert_eq!(topic.meanings.len(), 1);
    }

    #[test]
    fn subject_title_falls_back_to_inner_italic() {
        let topic = parse_row(
            r##"<tr><td class="subj"><a href="#"><i>Law</i></a></td><td class="trans"><a href="#">appeal</a></td></tr>"##,
        )
        .unwrap();
        assert_eq!(topic.description.as_deref(), Some("Law"));
    }

    #[test]
    fn subject_without_link_is_uncategorized() {
        let topic = parse_row(
            r##"<tr><td class="subj"></td><td class="trans"><a href="#">to operate</a></td></tr>"##,
        )
        .unwrap();
        assert_eq!(topic.short_name, None);
        assert_eq!(topic.description, None);
    }

    #[test]
    fn wrong_cell_count_is_structural() {
        let err = parse_row(r#"<tr><td class="subj">only one cell</td></tr>"#).unwrap_err();
        assert!(err.is_structure());
    }
}
