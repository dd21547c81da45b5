use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("image pattern is valid"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("link pattern is valid"));

/// Kind of an inline text run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextKind::Text => "text",
            TextKind::Bold => "bold",
            TextKind::Italic => "italic",
            TextKind::Code => "code",
            TextKind::Link => "link",
            TextKind::Image => "image",
        };
        f.write_str(name)
    }
}

/// A typed run of inline text. `url` is set for links and images only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub content: String,
    pub kind: TextKind,
    pub url: Option<String>,
}

impl TextRun {
    /// A run without a url. Use [`TextRun::link`] or [`TextRun::image`] for
    /// kinds that need one.
    pub fn new(content: impl Into<String>, kind: TextKind) -> Self {
        Self {
            content: content.into(),
            kind,
            url: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(content, TextKind::Text)
    }

    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: TextKind::Link,
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: TextKind::Image,
            url: Some(url.into()),
        }
    }
}

/// Split every plain-text run on `delimiter`, turning the enclosed segments
/// into runs of `kind`.
///
/// Fails if a plain-text run holds an odd number of delimiters. Segments that
/// are exactly `"i"` are dropped, which existing pages depend on.
pub fn split_by_delimiter(
    runs: Vec<TextRun>,
    delimiter: &str,
    kind: TextKind,
) -> Result<Vec<TextRun>> {
    let mut out = Vec::with_capacity(runs.len());

    for run in runs {
        if run.kind != TextKind::Text {
            out.push(run);
            continue;
        }

        let segments: Vec<&str> = run.content.split(delimiter).collect();
        if segments.len() % 2 == 0 {
            return Err(Error::UnmatchedDelimiter(delimiter.to_string()));
        }

        for (i, segment) in segments.into_iter().enumerate() {
            if segment == "i" {
                continue;
            }
            let segment_kind = if i % 2 == 0 { TextKind::Text } else { kind };
            out.push(TextRun::new(segment, segment_kind));
        }
    }

    Ok(out)
}

/// All `![alt](url)` pairs in `text`, left to right.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    captures(&IMAGE_RE, text)
}

/// All `[label](url)` pairs in `text`, left to right.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    captures(&LINK_RE, text)
}

fn captures(re: &Regex, text: &str) -> Vec<(String, String)> {
    re.captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

pub fn split_images(runs: Vec<TextRun>) -> Vec<TextRun> {
    split_with(runs, extract_markdown_images, |label, url| {
        (format!("![{label}]({url})"), TextRun::image(label, url))
    })
}

pub fn split_links(runs: Vec<TextRun>) -> Vec<TextRun> {
    split_with(runs, extract_markdown_links, |label, url| {
        (format!("[{label}]({url})"), TextRun::link(label, url))
    })
}

/// Shared walk for images and links: each match is cut out of the text that
/// remains after the previous one, at its first occurrence.
fn split_with<E, M>(runs: Vec<TextRun>, extract: E, make: M) -> Vec<TextRun>
where
    E: Fn(&str) -> Vec<(String, String)>,
    M: Fn(&str, &str) -> (String, TextRun),
{
    let mut out = Vec::with_capacity(runs.len());

    for run in runs {
        if run.kind != TextKind::Text {
            out.push(run);
            continue;
        }

        let matches = extract(&run.content);
        if matches.is_empty() {
            out.push(run);
            continue;
        }

        let mut remaining = run.content.as_str();
        for (label, url) in &matches {
            let (literal, matched) = make(label.as_str(), url.as_str());
            let (before, after) = remaining.split_once(literal.as_str()).unwrap_or((remaining, ""));
            if !before.is_empty() {
                out.push(TextRun::text(before));
            }
            out.push(matched);
            remaining = after;
        }

        if !remaining.is_empty() {
            out.push(TextRun::text(remaining));
        }
    }

    out
}

/// Parse a line of inline markdown into text runs.
pub fn text_to_text_runs(text: &str) -> Result<Vec<TextRun>> {
    let runs = vec![TextRun::text(text)];

    let runs = split_by_delimiter(runs, "**", TextKind::Bold)?;
    let runs = split_by_delimiter(runs, "*", TextKind::Italic)?;
    let runs = split_by_delimiter(runs, "`", TextKind::Code)?;
    let runs = split_images(runs);
    let runs = split_links(runs);

    Ok(runs)
}
