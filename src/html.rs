use crate::error::{Error, Result};
use crate::node::{Attributes, RenderNode};

/// Serialize a render tree to HTML
pub fn render_to_html(node: &RenderNode) -> Result<String> {
    let mut out = String::new();
    emit_node(node, &mut out)?;
    Ok(out)
}

fn emit_node(node: &RenderNode, out: &mut String) -> Result<()> {
    match node {
        RenderNode::Leaf {
            tag,
            value,
            attributes,
        } => {
            let value = value.as_deref().ok_or(Error::MissingValue)?;
            match tag {
                Some(tag) => {
                    open_tag(tag, attributes, out);
                    out.push_str(value);
                    close_tag(tag, out);
                }
                None => out.push_str(value),
            }
        }
        RenderNode::Parent {
            tag,
            children,
            attributes,
        } => {
            let tag = tag.as_deref().ok_or(Error::MissingTag)?;
            let children = children.as_ref().ok_or(Error::MissingChildren)?;

            open_tag(tag, attributes, out);
            for child in children {
                // A child repeating its parent's tag is inlined without a wrapper
                if child.tag() == Some(tag) {
                    match child.value() {
                        Some(value) if !value.is_empty() => out.push_str(value),
                        _ => emit_node(child, out)?,
                    }
                } else {
                    emit_node(child, out)?;
                }
            }
            close_tag(tag, out);
        }
    }
    Ok(())
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    for (key, value) in attributes {
        out.push_str(&format!(" {key}=\"{value}\""));
    }
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
