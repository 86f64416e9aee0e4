use super::{
    attributes::Attributes,
    node::{HtmlNode, LeafNode, ParentNode},
};
use crate::{
    error::Error,
    inline::{Segment, SegmentKind, parse_inline},
};

/// Maps a segment to the leaf node that renders it.
///
/// | kind   | tag    | value | attributes         |
/// |--------|--------|-------|--------------------|
/// | Plain  |        | text  |                    |
/// | Bold   | `b`    | text  |                    |
/// | Italic | `i`    | text  |                    |
/// | Code   | `code` | text  |                    |
/// | Link   | `a`    | text  | `href`             |
/// | Image  | `img`  | `""`  | `src`, `alt`       |
///
/// A link or image without a url gets an empty `href` / `src`.
pub fn to_html_node(segment: &Segment) -> LeafNode {
    build_leaf(segment, false)
}

/// Like [`to_html_node`], with text and attribute values HTML-escaped.
pub fn to_html_node_escaped(segment: &Segment) -> LeafNode {
    build_leaf(segment, true)
}

fn build_leaf(segment: &Segment, escape: bool) -> LeafNode {
    let url = segment.url.as_deref().unwrap_or_default();
    let (text, attr_text, url) = if escape {
        (
            html_escape::encode_text(&segment.text).into_owned(),
            html_escape::encode_double_quoted_attribute(&segment.text).into_owned(),
            html_escape::encode_double_quoted_attribute(url).into_owned(),
        )
    } else {
        (segment.text.clone(), segment.text.clone(), url.to_string())
    };

    match segment.kind {
        SegmentKind::Plain => LeafNode::text(text),
        SegmentKind::Bold => LeafNode::new(Some("b"), text),
        SegmentKind::Italic => LeafNode::new(Some("i"), text),
        SegmentKind::Code => LeafNode::new(Some("code"), text),
        SegmentKind::Link => LeafNode::new(Some("a"), text)
            .with_attributes(Attributes::new().with("href", url)),
        SegmentKind::Image => LeafNode::new(Some("img"), "")
            .with_attributes(Attributes::new().with("src", url).with("alt", attr_text)),
    }
}

/// Parses `text` and renders it inside a `wrapper` element.
///
/// ```rust
/// use markdown_sitegen_engine::render_inline;
///
/// let html = render_inline("see [docs](/docs)", "p", false).unwrap();
/// assert_eq!(html, r#"<p>see <a href="/docs">docs</a></p>"#);
/// ```
pub fn render_inline(text: &str, wrapper: &str, escape: bool) -> Result<String, Error> {
    let convert: fn(&Segment) -> LeafNode = if escape {
        to_html_node_escaped
    } else {
        to_html_node
    };
    let children = parse_inline(text)
        .iter()
        .map(|segment| HtmlNode::from(convert(segment)))
        .collect();
    log::debug!("rendering inline text ({} bytes) into <{wrapper}>", text.len());
    ParentNode::new(wrapper, children).render()
}
