//! Autoclass Levels
//!
//! Replays the scanner's event stream over an implicit stack of open tags and
//! assigns every distinct class a nesting level. Only class-bearing elements
//! count toward depth, so wrappers without classes never indent their styled
//! children.
//!
//! ```text
//! &[Event] → Assigner::assign() → Vec<LeveledClass>
//! ```

pub mod assigner;

use std::collections::BTreeSet;

pub use assigner::Assigner;

/// A distinct class with the tag that introduced it and its nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeveledClass {
    pub tag: String,
    pub name: String,
    pub level: usize,
}

impl LeveledClass {
    pub fn new(tag: impl Into<String>, name: impl Into<String>, level: usize) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
            level,
        }
    }
}

/// Scan `html` and assign levels in one step.
pub fn analyze(html: &str, ignored: &BTreeSet<String>) -> Vec<LeveledClass> {
    let events = autoclass_scanner::Scanner::scan(html);
    Assigner::assign(&events, ignored)
}
