/// Structural event classification.
///
/// Data-carrying variants embed their value directly, the position lives on
/// [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// `<name`, the tag name exactly as written.
    TagOpen(String),
    /// `</`, never correlated with a name.
    TagClose,
    /// One token of a `class="..."` attribute.
    Class(String),
}

/// A structural event found in the markup.
///
/// `position` is a byte offset into the source. For class tokens it is the
/// attribute offset plus the token index, so tokens of one attribute stay in
/// left-to-right order after merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub position: usize,
}

impl Event {
    pub fn new(kind: EventKind, position: usize) -> Self {
        Self { kind, position }
    }

    pub fn open(position: usize, tag: impl Into<String>) -> Self {
        Self::new(EventKind::TagOpen(tag.into()), position)
    }

    pub fn close(position: usize) -> Self {
        Self::new(EventKind::TagClose, position)
    }

    pub fn class(position: usize, name: impl Into<String>) -> Self {
        Self::new(EventKind::Class(name.into()), position)
    }
}

/// Elements that never hold children and have no closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "doctype", "area", "base", "br", "col", "command", "embed", "frame", "hr",
    "img", "input", "keygen", "link", "meta", "param", "source", "wbr",
];

/// Check if a tag name is a void element. Case is ignored, so `IMG` and
/// `img` are both void.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|void| void.eq_ignore_ascii_case(tag))
}
