use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The closed set of inline formatting kinds.
///
/// Serialized with the lowercase tags `text`, `bold`, `italic`, `code`, `link`
/// and `image`; block-level collaborators build segments from these tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Unformatted text.
    #[serde(rename = "text")]
    Plain,
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
    /// `` `code` ``
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl SegmentKind {
    pub const ALL: [SegmentKind; 6] = [
        SegmentKind::Plain,
        SegmentKind::Bold,
        SegmentKind::Italic,
        SegmentKind::Code,
        SegmentKind::Link,
        SegmentKind::Image,
    ];

    /// The serialization tag for this kind.
    pub fn as_tag(self) -> &'static str {
        match self {
            SegmentKind::Plain => "text",
            SegmentKind::Bold => "bold",
            SegmentKind::Italic => "italic",
            SegmentKind::Code => "code",
            SegmentKind::Link => "link",
            SegmentKind::Image => "image",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for SegmentKind {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        SegmentKind::ALL
            .into_iter()
            .find(|kind| kind.as_tag() == tag)
            .ok_or_else(|| Error::InvalidKind(tag.to_string()))
    }
}

/// One run of inline text with a single formatting kind.
///
/// `text` never contains the markup that produced it. `url` is only set for
/// [`SegmentKind::Link`] and [`SegmentKind::Image`] segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Segment {
    pub fn new(text: impl Into<String>, kind: SegmentKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn with_url(text: impl Into<String>, kind: SegmentKind, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SegmentKind::Plain)
    }

    /// Builds a segment from a string kind tag, rejecting tags outside the
    /// closed set.
    pub fn from_tag(
        text: impl Into<String>,
        tag: &str,
        url: Option<String>,
    ) -> Result<Self, Error> {
        let kind = tag.parse()?;
        Ok(Self {
            text: text.into(),
            kind,
            url,
        })
    }
}
