use markdown_sitegen_engine::{
    Error, HtmlNode, LeafNode, ParentNode, Segment, SegmentKind, parse_inline, to_html_node,
};
use pretty_assertions::assert_eq;

fn render_all(segments: &[Segment]) -> Result<String, Error> {
    segments.iter().map(|s| to_html_node(s).render()).collect()
}

#[test]
fn end_to_end_segments() {
    let text = "This is **text** with an *italic* word and a `code block` and an ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)";
    assert_eq!(
        parse_inline(text),
        vec![
            Segment::plain("This is "),
            Segment::new("text", SegmentKind::Bold),
            Segment::plain(" with an "),
            Segment::new("italic", SegmentKind::Italic),
            Segment::plain(" word and a "),
            Segment::new("code block", SegmentKind::Code),
            Segment::plain(" and an "),
            Segment::with_url(
                "obi wan image",
                SegmentKind::Image,
                "https://i.imgur.com/fJRm4Vk.jpeg"
            ),
            Segment::plain(" and a "),
            Segment::with_url("link", SegmentKind::Link, "https://boot.dev"),
        ]
    );
}

#[test]
fn end_to_end_html() {
    let text = "This is **text** with an *italic* word and a `code block` and an ![alt](u1) and a [link](u2)";
    let html = render_all(&parse_inline(text)).unwrap();
    insta::assert_snapshot!(
        html,
        @r#"This is <b>text</b> with an <i>italic</i> word and a <code>code block</code> and an <img src="u1" alt="alt"></img> and a <a href="u2">link</a>"#
    );
}

#[test]
fn images_and_links_interleaved() {
    let text = "This is text with an ![image1](https://example.com/image1.jpg) and a [link1](https://example.com/link1) and another ![image2](https://example.com/image2.jpg) and another [link2](https://example.com/link2).";
    let kinds: Vec<_> = parse_inline(text).into_iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SegmentKind::Plain,
            SegmentKind::Image,
            SegmentKind::Plain,
            SegmentKind::Link,
            SegmentKind::Plain,
            SegmentKind::Image,
            SegmentKind::Plain,
            SegmentKind::Link,
            SegmentKind::Plain,
        ]
    );
}

#[test]
fn mixed_markup_snapshot() {
    insta::assert_debug_snapshot!(parse_inline("a **b** [c](d)"), @r#"
    [
        Segment {
            text: "a ",
            kind: Plain,
            url: None,
        },
        Segment {
            text: "b",
            kind: Bold,
            url: None,
        },
        Segment {
            text: " ",
            kind: Plain,
            url: None,
        },
        Segment {
            text: "c",
            kind: Link,
            url: Some(
                "d",
            ),
        },
    ]
    "#);
}

#[test]
fn nested_emphasis_renders_side_by_side() {
    let html = render_all(&parse_inline("This is **bold and *italic* text**.")).unwrap();
    assert_eq!(html, "This is <b>bold and </b><i>italic</i><b> text</b>.");
}

#[test]
fn rendered_tags_match_segment_kinds() {
    let text = "`c` **b** *i* ![a](u) [l](v) plain";
    for segment in parse_inline(text) {
        let html = to_html_node(&segment).render().unwrap();
        let expected_prefix = match segment.kind {
            SegmentKind::Plain => "",
            SegmentKind::Bold => "<b>",
            SegmentKind::Italic => "<i>",
            SegmentKind::Code => "<code>",
            SegmentKind::Link => "<a href=",
            SegmentKind::Image => "<img src=",
        };
        assert!(
            html.starts_with(expected_prefix),
            "{html} should start with {expected_prefix}"
        );
    }
}

#[test]
fn block_parser_wraps_inline_output() {
    let children = parse_inline("Hello *world*")
        .iter()
        .map(|s| HtmlNode::from(to_html_node(s)))
        .collect();
    let paragraph = ParentNode::new("p", children);
    assert_eq!(
        paragraph.render(),
        Ok("<p>Hello <i>world</i></p>".to_string())
    );
}

#[test]
fn collaborator_segments_from_tags() {
    let segments = [("Go ", "text"), ("home", "link")]
        .into_iter()
        .map(|(text, tag)| {
            let url = (tag == "link").then(|| "/".to_string());
            Segment::from_tag(text, tag, url)
        })
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(render_all(&segments), Ok(r#"Go <a href="/">home</a>"#.to_string()));

    assert_eq!(
        Segment::from_tag("x", "strike", None),
        Err(Error::InvalidKind("strike".to_string()))
    );
}

#[test]
fn leaf_without_value_fails_inside_tree() {
    let tree = ParentNode::new("p", vec![LeafNode::default().into()]);
    assert_eq!(tree.render(), Err(Error::MissingValue));
}
