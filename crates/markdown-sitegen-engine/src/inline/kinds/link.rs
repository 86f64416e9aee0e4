use std::sync::OnceLock;

use regex::Regex;

/// An inline link, `[text](url)`.
///
/// The pattern also matches the tail of an image, so images have to be split
/// out before links are searched for.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"\[(.*?)\]\((.*?)\)";

    pub fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid link regex"))
    }
}
