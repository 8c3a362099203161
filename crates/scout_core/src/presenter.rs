//! Best-effort structuring of the job search answer.
//!
//! The answer follows a prompt contract rather than a grammar: `# Group:`
//! headers, a `**Summary**:` line and bulleted listings. Whatever does not
//! fit that shape is kept as plain paragraphs, so presenting never fails.

use std::iter::Peekable;
use std::str::Lines;

const GROUP_MARKER: &str = "group:";
const SUMMARY_LABELS: [&str; 3] = ["**Summary**:", "**Summary:**", "Summary:"];
const URL_SCHEMES: [&str; 2] = ["https://", "http://"];

/// A run of text inside one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Link { label: String, url: String },
}

/// One thematic group of listings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultGroup {
    pub title: String,
    pub summary: Option<String>,
    /// One entry per bullet line.
    pub items: Vec<Vec<Inline>>,
    /// Non-bullet lines that appeared inside the group.
    pub notes: Vec<Vec<Inline>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Group(ResultGroup),
    Paragraph(Vec<Inline>),
}

/// Presents the whole answer at once.
pub fn present(text: &str) -> Vec<Block> {
    segments(text).collect()
}

/// Lazily splits the answer into blocks. The iterator is `Clone`, so a
/// partially consumed walk can be restarted from any point.
pub fn segments(text: &str) -> Segments<'_> {
    Segments {
        lines: text.lines().peekable(),
    }
}

#[derive(Debug, Clone)]
pub struct Segments<'a> {
    lines: Peekable<Lines<'a>>,
}

impl Iterator for Segments<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        loop {
            let line = self.lines.next()?.trim();
            if line.is_empty() {
                continue;
            }
            return Some(match group_title(line) {
                Some(title) => Block::Group(self.collect_group(title)),
                None => Block::Paragraph(parse_inline(line)),
            });
        }
    }
}

impl Segments<'_> {
    fn collect_group(&mut self, title: String) -> ResultGroup {
        let mut group = ResultGroup {
            title,
            ..ResultGroup::default()
        };

        while let Some(&line) = self.lines.peek() {
            let line = line.trim();
            if group_title(line).is_some() {
                break;
            }
            self.lines.next();
            if line.is_empty() {
                continue;
            }

            if group.summary.is_none() {
                if let Some(summary) = summary_text(line) {
                    group.summary = Some(summary.to_string());
                    continue;
                }
            }
            match bullet_body(line) {
                Some(body) => group.items.push(parse_inline(body)),
                None => group.notes.push(parse_inline(line)),
            }
        }

        group
    }
}

/// Splits a line into text and links: `[label](url)` and bare http(s) URLs.
/// Text between links is kept verbatim.
pub fn parse_inline(line: &str) -> Vec<Inline> {
    let mut parts = Vec::new();
    let mut text_start = 0;
    let mut cursor = 0;

    while cursor < line.len() {
        let rest = &line[cursor..];
        match markdown_link(rest).or_else(|| bare_url(rest)) {
            Some((link, consumed)) => {
                push_text(&mut parts, &line[text_start..cursor]);
                parts.push(link);
                cursor += consumed;
                text_start = cursor;
            }
            None => cursor += rest.chars().next().map_or(1, char::len_utf8),
        }
    }
    push_text(&mut parts, &line[text_start..]);

    parts
}

fn push_text(parts: &mut Vec<Inline>, text: &str) {
    if !text.is_empty() {
        parts.push(Inline::Text(text.to_string()));
    }
}

fn markdown_link(rest: &str) -> Option<(Inline, usize)> {
    let inner = rest.strip_prefix('[')?;
    let close = inner.find(']')?;
    let label = &inner[..close];
    let target = inner[close + 1..].strip_prefix('(')?;
    let end = target.find(')')?;
    let url = target[..end].trim();
    if label.trim().is_empty() || url.is_empty() {
        return None;
    }
    // '[' + label + "](" + target + ')'
    let consumed = 1 + close + 2 + end + 1;
    Some((
        Inline::Link {
            label: label.to_string(),
            url: url.to_string(),
        },
        consumed,
    ))
}

fn bare_url(rest: &str) -> Option<(Inline, usize)> {
    let scheme = URL_SCHEMES.iter().find(|scheme| rest.starts_with(*scheme))?;
    let token_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let url = rest[..token_end].trim_end_matches(['.', ',', ';', ')', ']']);
    if url.len() <= scheme.len() {
        return None;
    }
    Some((
        Inline::Link {
            label: url.to_string(),
            url: url.to_string(),
        },
        url.len(),
    ))
}

fn group_title(line: &str) -> Option<String> {
    let rest = line.strip_prefix('#')?.trim_start_matches('#').trim_start();
    let rest = rest.trim_start_matches('*').trim_start();
    let (marker, title) = rest.split_at_checked(GROUP_MARKER.len())?;
    if !marker.eq_ignore_ascii_case(GROUP_MARKER) {
        return None;
    }
    let title = title
        .trim()
        .trim_matches(['"', '\'', '[', ']', '*'])
        .trim();
    (!title.is_empty()).then(|| title.to_string())
}

fn summary_text(line: &str) -> Option<&str> {
    SUMMARY_LABELS
        .iter()
        .find_map(|label| strip_prefix_ignore_case(line, label))
        .map(str::trim)
        .filter(|summary| !summary.is_empty())
}

fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &line[prefix.len()..])
}

fn bullet_body(line: &str) -> Option<&str> {
    let mut chars = line.chars();
    if !matches!(chars.next()?, '*' | '-' | '•') {
        return None;
    }
    let rest = chars.as_str();
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let body = rest.trim_start();
    (!body.is_empty()).then_some(body)
}

#[cfg(test)]
mod tests {
    use super::{bullet_body, group_title, summary_text};

    #[test]
    fn group_header_variants() {
        assert_eq!(group_title("# Group: Remote Roles").as_deref(), Some("Remote Roles"));
        assert_eq!(
            group_title("## group: \"High-Growth Startups\"").as_deref(),
            Some("High-Growth Startups")
        );
        assert_eq!(group_title("#Group:[Top Corporate Roles]").as_deref(), Some("Top Corporate Roles"));
        assert_eq!(group_title("# Group:"), None);
        assert_eq!(group_title("# Remote Roles"), None);
        assert_eq!(group_title("Group: Remote"), None);
    }

    #[test]
    fn summary_labels() {
        assert_eq!(summary_text("**Summary**: hot market"), Some("hot market"));
        assert_eq!(summary_text("**Summary:** hot market"), Some("hot market"));
        assert_eq!(summary_text("summary: hot market"), Some("hot market"));
        assert_eq!(summary_text("**Summary**:   "), None);
        assert_eq!(summary_text("Overview: hot market"), None);
    }

    #[test]
    fn bullets_need_a_marker_and_a_space() {
        assert_eq!(bullet_body("*   Engineer at Acme"), Some("Engineer at Acme"));
        assert_eq!(bullet_body("- Engineer"), Some("Engineer"));
        assert_eq!(bullet_body("• Engineer"), Some("Engineer"));
        assert_eq!(bullet_body("**bold**"), None);
        assert_eq!(bullet_body("-5 degrees"), None);
        assert_eq!(bullet_body("* "), None);
    }
}
