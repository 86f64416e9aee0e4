/// Bold text, `**like this**`.
pub struct Strong;

impl Strong {
    pub const DELIMITER: &'static str = "**";
}

/// Italic text, `*like this*`.
///
/// Must be split after [`Strong`], since every `**` is also two `*`.
pub struct Emphasis;

impl Emphasis {
    pub const DELIMITER: &'static str = "*";
}
