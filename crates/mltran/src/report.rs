// ABOUTME: Renders a LookupResult as a plain-text report for terminal display.
// ABOUTME: Centered header rules, topic label lines, one line per meaning.

use crate::models::{Context, LookupResult, Meaning, MeaningNode, Topic, Translation, TranslationHeader};

const RULE_WIDTH: usize = 60;

/// Label used for topics without a subject link.
const UNCATEGORIZED: &str = "uncategorized";

impl LookupResult {
    /// Format the result as a plain-text report.
    ///
    /// Each translation opens with its header centered in a 60-column `=`
    /// rule; each topic prints a label line, one line per meaning, and a
    /// closing blank line.
    pub fn format_report(&self) -> String {
        let mut lines = Vec::new();
        for translation in &self.translations {
            render_translation(translation, &mut lines);
        }
        if lines.is_empty() {
            return String::new();
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

fn render_translation(translation: &Translation, lines: &mut Vec<String>) {
    lines.push(header_line(&translation.header));
    for topic in &translation.topics {
        render_topic(topic, lines);
    }
}

fn header_line(header: &TranslationHeader) -> String {
    let mut parts = Vec::new();
    if let Some(ref prefix) = header.word_prefix {
        parts.push(format!("[{}]", prefix));
    }
    parts.push(format!("{}:", header.word));
    if let Some(ref pronunciation) = header.pronunciation {
        parts.push(pronunciation.clone());
    }
    if let Some(ref word_class) = header.word_class {
        parts.push(word_class.clone());
    }
    format!("{:=^width$}", format!(" {} ", parts.join(" ")), width = RULE_WIDTH)
}

fn render_topic(topic: &Topic, lines: &mut Vec<String>) {
    lines.push(topic_label(topic));
    for meaning in &topic.meanings {
        lines.push(render_meaning(meaning));
    }
    lines.push(String::new());
}

fn topic_label(topic: &Topic) -> String {
    match (&topic.short_name, &topic.description) {
        (Some(name), Some(description)) => format!("{} ({})", name, description),
        (Some(name), None) => name.clone(),
        (None, _) => UNCATEGORIZED.to_string(),
    }
}

fn render_meaning(meaning: &Meaning) -> String {
    meaning
        .elements
        .iter()
        .map(render_node)
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_node(node: &MeaningNode) -> String {
    match node {
        MeaningNode::Plain(text) => text.clone(),
        MeaningNode::Context(context) => render_context(context),
    }
}

fn render_context(context: &Context) -> String {
    let mut parts = Vec::new();
    if let Some(ref text) = context.text {
        parts.push(text.clone());
    }
    if let Some(ref author) = context.author {
        parts.push(format!("@{}", author));
    }
    if let Some(ref comment) = context.comment {
        parts.push(format!("{{{} @{}}}", comment.text, comment.author));
    }
    format!("[{}]", parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Comment;
    use pretty_assertions::assert_eq;

    fn meaning(elements: Vec<MeaningNode>) -> Meaning {
        Meaning { elements }
    }

    #[test]
    fn renders_uncategorized_single_meaning() {
        let result = LookupResult {
            translations: vec![Translation {
                header: TranslationHeader {
                    word: "run".to_string(),
                    ..Default::default()
                },
                topics: vec![Topic {
                    short_name: None,
                    description: None,
                    meanings: vec![meaning(vec![MeaningNode::Plain("to operate".to_string())])],
                }],
            }],
            ..Default::default()
        };

        let report = result.format_report();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].chars().count(), 60);
        assert!(lines[0].contains("run:"));
        assert!(lines[0].starts_with('='));
        assert!(lines[0].ends_with('='));
        assert_eq!(lines[1], "uncategorized");
        assert_eq!(lines[2], "to operate");
        assert_eq!(lines[3], "");
    }

    #[test]
    fn header_line_joins_present_parts() {
        let line = header_line(&TranslationHeader {
            word: "run".to_string(),
            word_class: Some("v.".to_string()),
            pronunciation: Some("[rʌn]".to_string()),
            word_prefix: Some("to".to_string()),
        });
        assert!(line.contains(" [to] run: [rʌn] v. "));
        assert_eq!(line.chars().count(), 60);
    }

    #[test]
    fn topic_label_variants() {
        assert_eq!(
            topic_label(&Topic {
                short_name: Some("gen.".to_string()),
                description: Some("General".to_string()),
                ..Default::default()
            }),
            "gen. (General)"
        );
        assert_eq!(
            topic_label(&Topic {
                short_name: Some("gen.".to_string()),
                ..Default::default()
            }),
            "gen."
        );
        assert_eq!(topic_label(&Topic::default()), "uncategorized");
    }

    #[test]
    fn context_renders_present_parts_only() {
        assert_eq!(
            render_context(&Context {
                text: Some("informal".to_string()),
                ..Default::default()
            }),
            "[informal]"
        );
        assert_eq!(
            render_context(&Context {
                author: Some("lexa".to_string()),
                ..Default::default()
            }),
            "[@lexa]"
        );
        assert_eq!(
            render_context(&Context {
                text: Some("informal".to_string()),
                author: Some("lexa".to_string()),
                comment: Some(Comment {
                    text: "rare".to_string(),
                    author: "gramps".to_string(),
                }),
            }),
            "[informal @lexa {rare @gramps}]"
        );
    }

    #[test]
    fn meaning_elements_are_space_joined() {
        let line = render_meaning(&meaning(vec![
            MeaningNode::Context(Context {
                text: Some("of an engine".to_string()),
                ..Default::default()
            }),
            MeaningNode::Plain("to operate".to_string()),
        ]));
        assert_eq!(line, "[of an engine] to operate");
    }

    #[test]
    fn empty_result_renders_empty_report() {
        assert_eq!(LookupResult::default().format_report(), "");
    }
}
