use crate::error::{Error, Result};
use crate::inline::{TextKind, TextRun};

/// Ordered attribute list, serialized in insertion order.
pub type Attributes = Vec<(String, String)>;

/// A node of the HTML output tree.
///
/// The optional fields model values that were never set; an empty string or
/// an empty child list is a valid, present value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },
    Parent {
        tag: Option<String>,
        children: Option<Vec<RenderNode>>,
        attributes: Attributes,
    },
}

impl RenderNode {
    /// Untagged leaf, rendered as its bare value.
    pub fn text(value: impl Into<String>) -> Self {
        RenderNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Vec::new(),
        }
    }

    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        RenderNode::Leaf {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attributes: Vec::new(),
        }
    }

    pub fn parent(tag: &str, children: Vec<RenderNode>) -> Self {
        RenderNode::Parent {
            tag: Some(tag.to_string()),
            children: Some(children),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute, keeping earlier ones first.
    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        match &mut self {
            RenderNode::Leaf { attributes, .. } | RenderNode::Parent { attributes, .. } => {
                attributes.push((key.to_string(), value.into()));
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            RenderNode::Leaf { tag, .. } | RenderNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    /// Raw value of a leaf. Parents never carry one.
    pub fn value(&self) -> Option<&str> {
        match self {
            RenderNode::Leaf { value, .. } => value.as_deref(),
            RenderNode::Parent { .. } => None,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            RenderNode::Leaf { attributes, .. } | RenderNode::Parent { attributes, .. } => attributes,
        }
    }
}

/// Convert one text run into its leaf node.
///
/// Link and image runs must carry a url; a run built with [`TextRun::new`]
/// for either kind has none and is rejected with [`Error::InvalidTextRun`].
pub fn text_run_to_node(run: &TextRun) -> Result<RenderNode> {
    let node = match run.kind {
        TextKind::Text => RenderNode::text(run.content.as_str()),
        TextKind::Bold => RenderNode::leaf("b", run.content.as_str()),
        TextKind::Italic => RenderNode::leaf("i", run.content.as_str()),
        TextKind::Code => RenderNode::leaf("code", run.content.as_str()),
        TextKind::Link => {
            let url = run.url.as_deref().ok_or(Error::InvalidTextRun(run.kind))?;
            RenderNode::leaf("a", run.content.as_str()).with_attribute("href", url)
        }
        TextKind::Image => {
            let url = run.url.as_deref().ok_or(Error::InvalidTextRun(run.kind))?;
            RenderNode::leaf("img", "")
                .with_attribute("src", url)
                .with_attribute("alt", run.content.as_str())
        }
    };
    Ok(node)
}
