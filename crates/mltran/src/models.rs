// ABOUTME: Data model for parsed Multitran lookup results.
// ABOUTME: LookupResult -> Translation -> Topic -> Meaning -> MeaningNode/Context/Comment.

use serde::Serialize;

/// The header of one translated entry: the word itself plus the optional
/// decorations Multitran prints next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct TranslationHeader {
    pub word: String,
    pub word_class: Option<String>,
    pub pronunciation: Option<String>,
    pub word_prefix: Option<String>,
}

/// An attributed remark nested inside a [`Context`]. Both fields are always
/// present; a comment without text or author never enters the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub text: String,
    pub author: String,
}

/// An inline annotation attached to a meaning: context text, the user who
/// contributed the entry, and/or a nested comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Context {
    pub text: Option<String>,
    pub author: Option<String>,
    pub comment: Option<Comment>,
}

impl Context {
    /// A finalized Context must carry at least one of text/author/comment;
    /// an all-empty one indicates a parse defect and is dropped upstream.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.author.is_none() && self.comment.is_none()
    }
}

/// One element of a meaning, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MeaningNode {
    Plain(String),
    Context(Context),
}

/// One candidate translation rendering: plain text interleaved with inline
/// annotations. Finalized meanings hold at least one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Meaning {
    pub elements: Vec<MeaningNode>,
}

/// A thematic grouping under which meanings are listed. `short_name` and
/// `description` both come from the subject link and are normally
/// co-present; an uncategorized topic has neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Topic {
    pub short_name: Option<String>,
    pub description: Option<String>,
    pub meanings: Vec<Meaning>,
}

/// One header plus the topics listed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub header: TranslationHeader,
    pub topics: Vec<Topic>,
}

/// The result of one phrase lookup: an ordered list of translations.
///
/// `phrase` and `url` are filled by the client layer; when parsing a raw
/// markup tree directly they stay empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct LookupResult {
    pub phrase: String,
    pub url: String,
    pub translations: Vec<Translation>,
}

impl LookupResult {
    /// Returns true if the lookup produced no translations. This is the
    /// valid "no results" outcome, distinct from a structural parse error.
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}
