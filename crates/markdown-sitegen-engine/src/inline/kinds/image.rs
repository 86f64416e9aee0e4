use std::sync::OnceLock;

use regex::Regex;

/// An inline image, `![alt](url)`.
pub struct Image;

impl Image {
    /// Captures the alt text and the url, both non-greedy and possibly empty.
    pub const PATTERN: &'static str = r"!\[(.*?)\]\((.*?)\)";

    pub fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid image regex"))
    }
}
