use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// An HTML page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read a template from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(Error::io(path))?;
        Ok(Self::new(source))
    }

    /// Fill in both placeholders and point root-relative `href`/`src`
    /// attributes at `base_path`.
    pub fn render(&self, title: &str, content: &str, base_path: &str) -> String {
        let page = self
            .source
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, content);
        rewrite_base_path(&page, base_path)
    }
}

/// Rewrite `href="/` and `src="/` prefixes to start with `base_path`.
pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    if base_path == "/" {
        return html.to_string();
    }
    let base = if base_path.ends_with('/') {
        base_path.to_string()
    } else {
        format!("{base_path}/")
    };
    html.replace("href=\"/", &format!("href=\"{base}"))
        .replace("src=\"/", &format!("src=\"{base}"))
}
