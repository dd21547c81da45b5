use std::sync::LazyLock;

use regex::Regex;

use crate::block::{BlockKind, classify_block, markdown_to_blocks};
use crate::error::{Error, Result};
use crate::inline::text_to_text_runs;
use crate::node::{RenderNode, text_run_to_node};

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+)\s+(.*)").expect("heading pattern is valid"));
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s+(.*?)\s*$").expect("title pattern is valid"));
static LIST_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*\-]\s+|\d+\.\s+").expect("list marker pattern is valid"));

/// Parse markdown into a `div` holding one node per block
pub fn markdown_to_render_tree(markdown: &str) -> Result<RenderNode> {
    let children = markdown_to_blocks(markdown)
        .into_iter()
        .map(block_to_node)
        .collect::<Result<Vec<_>>>()?;

    Ok(RenderNode::parent("div", children))
}

fn block_to_node(block: &str) -> Result<RenderNode> {
    match classify_block(block) {
        BlockKind::Heading => heading_to_node(block),
        BlockKind::Code => Ok(code_to_node(block)),
        BlockKind::Quote => quote_to_node(block),
        BlockKind::UnorderedList => list_to_node(block, "ul"),
        BlockKind::OrderedList => list_to_node(block, "ol"),
        BlockKind::Paragraph => Ok(RenderNode::parent("p", text_to_children(block)?)),
    }
}

fn heading_to_node(block: &str) -> Result<RenderNode> {
    let caps = HEADING_RE
        .captures(block)
        .ok_or_else(|| Error::InvalidHeading(block.to_string()))?;
    let level = caps[1].len();
    let tag = format!("h{level}");

    Ok(RenderNode::parent(&tag, text_to_children(&caps[2])?))
}

/// Code blocks are never inline-parsed. The first line after the fence is
/// the language tag and is discarded.
fn code_to_node(block: &str) -> RenderNode {
    let inner = block.trim_matches('`');
    let body = match inner.split_once('\n') {
        Some((_language, rest)) => rest,
        None => inner,
    };

    RenderNode::parent("pre", vec![RenderNode::leaf("code", body.trim())])
}

fn quote_to_node(block: &str) -> Result<RenderNode> {
    let text = block
        .split('\n')
        .map(|line| line.trim_start_matches(['>', ' ']).trim())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(RenderNode::parent("blockquote", text_to_children(&text)?))
}

fn list_to_node(block: &str, tag: &str) -> Result<RenderNode> {
    let items = block
        .split('\n')
        .map(|line| {
            let content = LIST_MARKER_RE.find(line).map_or("", |m| &line[m.end()..]);
            Ok(RenderNode::parent("li", text_to_children(content)?))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RenderNode::parent(tag, items))
}

fn text_to_children(text: &str) -> Result<Vec<RenderNode>> {
    text_to_text_runs(text)?.iter().map(text_run_to_node).collect()
}

/// Find the single H1 heading of a document.
///
/// The title is returned as written, inline markers included. Fails when the
/// document has no H1 block or more than one.
pub fn extract_title(markdown: &str) -> Result<String> {
    let mut titles: Vec<String> = markdown_to_blocks(markdown)
        .into_iter()
        .filter(|block| classify_block(block) == BlockKind::Heading)
        .filter_map(|block| TITLE_RE.captures(block))
        .map(|caps| caps[1].trim().to_string())
        .collect();

    match titles.len() {
        0 => Err(Error::NoTitle),
        1 => Ok(titles.remove(0)),
        _ => Err(Error::MultipleTitles(titles)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::render_to_html;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn to_html(markdown: &str) -> String {
        render_to_html(&markdown_to_render_tree(markdown).unwrap()).unwrap()
    }

    #[rstest]
    #[case("", "<div></div>")]
    #[case(
        "This is a paragraph\n        \nAnd another paragraph",
        "<div><p>This is a paragraph</p><p>And another paragraph</p></div>"
    )]
    #[case("# H1\n\n## H2\n\n### H3", "<div><h1>H1</h1><h2>H2</h2><h3>H3</h3></div>")]
    #[case("```\nprint('Hello World')\n```", "<div><pre><code>print('Hello World')</code></pre></div>")]
    #[case(
        "> First quote line\n> Second quote line",
        "<div><blockquote>First quote line Second quote line</blockquote></div>"
    )]
    #[case("* Item 1\n- Item 2", "<div><ul><li>Item 1</li><li>Item 2</li></ul></div>")]
    #[case("1. First\n2. Second", "<div><ol><li>First</li><li>Second</li></ol></div>")]
    #[case(
        "Paragraph with *italic* and `code`",
        "<div><p>Paragraph with <i>italic</i> and <code>code</code></p></div>"
    )]
    #[case("```\nx = `a````", "<div><pre><code>x = `a</code></pre></div>")]
    #[case("i", "<div><p></p></div>")]
    fn renders_blocks(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(to_html(markdown), expected);
    }

    #[test]
    fn mixed_content() {
        let md = "# Header\n\nParagraph with **bold** text\n\n- List item 1\n- List item 2";
        assert_eq!(
            to_html(md),
            "<div><h1>Header</h1><p>Paragraph with <b>bold</b> text</p><ul><li>List item 1</li><li>List item 2</li></ul></div>"
        );
    }

    #[test]
    fn links_and_images() {
        let md = "See [the docs](/docs) and ![logo](/logo.png)";
        assert_eq!(
            to_html(md),
            "<div><p>See <a href=\"/docs\">the docs</a> and <img src=\"/logo.png\" alt=\"logo\"></img></p></div>"
        );
    }

    #[test]
    fn code_block_drops_language_line_and_skips_inline_parsing() {
        let md = "```rust\nlet x = *y;\n```";
        assert_eq!(to_html(md), "<div><pre><code>let x = *y;</code></pre></div>");
    }

    #[test]
    fn single_line_code_block_keeps_content() {
        assert_eq!(
            to_html("```This is a code block```"),
            "<div><pre><code>This is a code block</code></pre></div>"
        );
    }

    #[test]
    fn multi_line_heading_keeps_first_line() {
        assert_eq!(to_html("# Title\nmore text"), "<div><h1>Title</h1></div>");
    }

    #[test]
    fn quote_without_space_after_marker() {
        assert_eq!(
            to_html(">tight\n>  loose"),
            "<div><blockquote>tight loose</blockquote></div>"
        );
    }

    #[test]
    fn list_items_are_inline_parsed() {
        assert_eq!(
            to_html("- **bold** item\n- `code` item"),
            "<div><ul><li><b>bold</b> item</li><li><code>code</code> item</li></ul></div>"
        );
    }

    #[test]
    fn output_is_wrapped_in_div() {
        let html = to_html("# Title\n\n> quote\n\n1. one\n\ntext");
        assert!(html.starts_with("<div>"));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn unmatched_delimiter_aborts_document() {
        let err = markdown_to_render_tree("fine\n\nbroken **bold").unwrap_err();
        assert!(matches!(err, Error::UnmatchedDelimiter(_)));
    }

    #[test]
    fn valid_title() {
        let md = "# My Awesome Title\n        \n## Subheading\nSome content";
        assert_eq!(extract_title(md).unwrap(), "My Awesome Title");
    }

    #[test]
    fn title_keeps_inline_markers() {
        assert_eq!(
            extract_title("# Title with **bold** and *italic*").unwrap(),
            "Title with **bold** and *italic*"
        );
    }

    #[test]
    fn title_among_other_headings() {
        let md = "## Not a Title\n\n# Actual Title\n\n### Another Heading";
        assert_eq!(extract_title(md).unwrap(), "Actual Title");
    }

    #[test]
    fn title_not_first_and_trailing_whitespace() {
        assert_eq!(extract_title("Some content\n\n# The Real Title  \n").unwrap(), "The Real Title");
    }

    #[test]
    fn no_title() {
        let md = "## Not a Title\n        This document has no H1";
        assert!(matches!(extract_title(md), Err(Error::NoTitle)));
    }

    #[test]
    fn multiline_h1_is_not_a_title() {
        let md = "# Title spanning\n        multiple lines";
        assert!(matches!(extract_title(md), Err(Error::NoTitle)));
    }

    #[test]
    fn code_block_is_not_a_title() {
        let md = "```\n        # Not a title\n        ```\n\n# Actual Title";
        assert_eq!(extract_title(md).unwrap(), "Actual Title");
    }

    #[test]
    fn multiple_titles_are_all_reported() {
        let err = extract_title("# First Title\n\n# Second Title").unwrap_err();
        match &err {
            Error::MultipleTitles(titles) => {
                assert_eq!(titles, &vec!["First Title".to_string(), "Second Title".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let message = err.to_string();
        assert!(message.contains("First Title"));
        assert!(message.contains("Second Title"));
    }
}
