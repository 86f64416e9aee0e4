use super::attributes::Attributes;
use crate::error::Error;

/// A node with no children: `<tag attrs>value</tag>`, or the bare value when
/// there is no tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attributes: Attributes,
}

impl LeafNode {
    pub fn new(tag: Option<&str>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// An untagged leaf that renders as its value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(None, value)
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn render(&self) -> Result<String, Error> {
        let value = self.value.as_deref().ok_or(Error::MissingValue)?;
        match self.tag.as_deref() {
            None | Some("") => Ok(value.to_string()),
            Some(tag) => Ok(format!(
                "<{tag}{}>{value}</{tag}>",
                self.attributes.render()
            )),
        }
    }
}

/// A tagged node whose output is its children's output, in order, wrapped in
/// the tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Option<Vec<HtmlNode>>,
    pub attributes: Attributes,
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children: Some(children),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Renders the subtree. The first failing child aborts the whole render.
    pub fn render(&self) -> Result<String, Error> {
        let tag = match self.tag.as_deref() {
            None | Some("") => return Err(Error::MissingTag),
            Some(tag) => tag,
        };
        let children = match self.children.as_deref() {
            None | Some([]) => return Err(Error::MissingChildren),
            Some(children) => children,
        };

        let mut out = format!("<{tag}{}>", self.attributes.render());
        for child in children {
            out.push_str(&child.render()?);
        }
        out.push_str(&format!("</{tag}>"));
        Ok(out)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn render(&self) -> Result<String, Error> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.render(),
            HtmlNode::Parent(parent) => parent.render(),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}
