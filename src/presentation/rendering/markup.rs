//! Renders the lightweight markup produced by the model into HTML.
//!
//! Lines are classified into blocks first, then inline emphasis is applied to
//! each block's text. Input is HTML-escaped before any tag is emitted, so the
//! output only ever contains tags created here.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\. ").expect("ordered item pattern is valid"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern is valid"));
static UNDERLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.+?)__").expect("underline pattern is valid"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*|_([^_]+)_").expect("italic pattern is valid"));
static STRIKETHROUGH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~(.+?)~~").expect("strikethrough pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn open_tag(&self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    fn close_tag(&self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Heading { level: u8, text: &'a str },
    Rule,
    Quote(&'a str),
    Item { kind: ListKind, text: &'a str },
    Line(&'a str),
}

impl Block<'_> {
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            Block::Item { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// First matching rule wins: headings, rule, quote, bullet, numbered item.
pub fn classify_line(line: &str) -> Block<'_> {
    if let Some(text) = line.strip_prefix("### ") {
        return Block::Heading { level: 3, text };
    }
    if let Some(text) = line.strip_prefix("## ") {
        return Block::Heading { level: 2, text };
    }
    if let Some(text) = line.strip_prefix("# ") {
        return Block::Heading { level: 1, text };
    }
    if line == "---" {
        return Block::Rule;
    }
    if let Some(text) = line.strip_prefix("> ") {
        return Block::Quote(text);
    }

    let trimmed = line.trim();
    if let Some(text) = trimmed.strip_prefix("* ") {
        return Block::Item {
            kind: ListKind::Unordered,
            text,
        };
    }
    if let Some(marker) = ORDERED_ITEM.find(trimmed) {
        return Block::Item {
            kind: ListKind::Ordered,
            text: &trimmed[marker.end()..],
        };
    }

    Block::Line(line)
}

pub fn render_markup(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut open_list: Option<ListKind> = None;

    for line in text.split('\n') {
        let block = classify_line(line);
        let kind = block.list_kind();

        if let Some(open) = open_list.filter(|open| Some(*open) != kind) {
            lines.push(open.close_tag().to_string());
            open_list = None;
        }
        if let Some(kind) = kind.filter(|_| open_list.is_none()) {
            lines.push(kind.open_tag().to_string());
            open_list = Some(kind);
        }

        lines.push(render_block(&block));
    }

    if let Some(open) = open_list {
        lines.push(open.close_tag().to_string());
    }

    lines.join("\n")
}

fn render_block(block: &Block<'_>) -> String {
    match block {
        Block::Heading { level, text } => {
            format!("<h{level}>{}</h{level}>", format_inline(text))
        }
        Block::Rule => "<hr>".to_string(),
        Block::Quote(text) => format!("<blockquote>{}</blockquote>", format_inline(text)),
        Block::Item { text, .. } => format!("<li>{}</li>", format_inline(text)),
        Block::Line(text) => format_inline(text),
    }
}

/// Escapes the text, wraps backtick spans in `<code>` verbatim and formats
/// emphasis everywhere else. An unpaired backtick is left as-is.
pub fn format_inline(text: &str) -> String {
    let escaped = escape_html(text);
    let mut out = String::with_capacity(escaped.len());
    let mut rest = escaped.as_str();

    while let Some(start) = rest.find('`') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('`') else {
            break;
        };
        out.push_str(&format_emphasis(&rest[..start]));
        out.push_str("<code>");
        out.push_str(&after[..end]);
        out.push_str("</code>");
        rest = &after[end + 1..];
    }

    out.push_str(&format_emphasis(rest));
    out
}

// Underline runs before italic so `__x__` is not read as `_` + `_x_` + `_`.
fn format_emphasis(text: &str) -> String {
    let text = BOLD.replace_all(text, "<strong>${1}</strong>");
    let text = UNDERLINE.replace_all(&text, "<u>${1}</u>");
    let text = ITALIC.replace_all(&text, |caps: &Captures<'_>| {
        let inner = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();
        format!("<em>{}</em>", inner)
    });
    STRIKETHROUGH
        .replace_all(&text, "<del>${1}</del>")
        .into_owned()
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
