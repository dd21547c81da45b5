use std::sync::LazyLock;

use regex::Regex;

static BLANK_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern is valid"));
static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*\-]\s").expect("unordered item pattern is valid"));
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s").expect("heading pattern is valid"));

/// Block-level kinds recognised in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Split a document into blocks on blank lines.
///
/// Whitespace-only blocks are discarded; the rest are returned untrimmed.
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    BLANK_LINE_RE
        .split(markdown)
        .filter(|block| !block.trim().is_empty())
        .collect()
}

/// Classify a block. Checks run in a fixed order and the first match wins.
pub fn classify_block(block: &str) -> BlockKind {
    let kind = if block.starts_with("```") && block.ends_with("```") {
        BlockKind::Code
    } else if block.split('\n').all(|line| line.starts_with('>')) {
        BlockKind::Quote
    } else if block.split('\n').all(|line| UNORDERED_ITEM_RE.is_match(line)) {
        BlockKind::UnorderedList
    } else if is_ordered_list(block) {
        BlockKind::OrderedList
    } else if HEADING_RE.is_match(block) {
        BlockKind::Heading
    } else {
        BlockKind::Paragraph
    };

    log::debug!("classified block as {kind:?}");
    kind
}

/// Every line must carry its own 1-based number followed by `.` and whitespace.
fn is_ordered_list(block: &str) -> bool {
    block.split('\n').enumerate().all(|(i, line)| {
        line.strip_prefix(&format!("{}.", i + 1))
            .and_then(|rest| rest.chars().next())
            .is_some_and(char::is_whitespace)
    })
}
