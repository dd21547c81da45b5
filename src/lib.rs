//! Markdown to HTML for a small static site generator.
//!
//! The dialect is deliberately small: blank-line separated blocks (paragraphs,
//! headings, fenced code, quotes, flat lists) with bold, italic, code, link
//! and image spans that never nest.
//!
//! ```
//! let html = mdsite::markdown_to_html("# Hello\n\nSome *text*").unwrap();
//! assert_eq!(html, "<div><h1>Hello</h1><p>Some <i>text</i></p></div>");
//! ```

mod block;
mod config;
mod error;
mod html;
mod inline;
mod node;
mod parser;
pub mod site;
mod template;

pub use block::{BlockKind, classify_block, markdown_to_blocks};
pub use config::{Config, PathsConfig, SiteConfig};
pub use error::{Error, Result};
pub use html::render_to_html;
pub use inline::{
    TextKind, TextRun, extract_markdown_images, extract_markdown_links, split_by_delimiter, split_images,
    split_links, text_to_text_runs,
};
pub use node::{Attributes, RenderNode, text_run_to_node};
pub use parser::{extract_title, markdown_to_render_tree};
pub use template::{Template, rewrite_base_path};

/// Convert markdown straight to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    let tree = markdown_to_render_tree(markdown)?;
    render_to_html(&tree)
}

/// Render a full page: the document's title and HTML are placed into the
/// template. Returns the page and the title.
pub fn render_page(markdown: &str, template: &Template, base_path: &str) -> Result<(String, String)> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html(markdown)?;
    let page = template.render(&title, &content, base_path);
    Ok((page, title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_needs_a_title() {
        let template = Template::new("{{ Content }}");
        assert!(matches!(
            render_page("no heading here", &template, "/"),
            Err(Error::NoTitle)
        ));
    }

    #[test]
    fn page_is_filled() {
        let template = Template::new("<title>{{ Title }}</title>{{ Content }}");
        let (page, title) = render_page("# Home\n\nWelcome", &template, "/").unwrap();
        assert_eq!(title, "Home");
        assert_eq!(page, "<title>Home</title><div><h1>Home</h1><p>Welcome</p></div>");
    }
}
