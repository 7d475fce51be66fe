//! Level assignment over a stack of open tags.
//!
//! Closing tags are matched to openings purely by stack order. A tag is
//! "settled" once the next structural event after its own classes arrives:
//! at that point its level is fixed, its new classes are emitted, and a void
//! tag is popped again.

use std::collections::{BTreeSet, HashSet};

use autoclass_scanner::{is_void_element, Event, EventKind};
use log::{debug, trace};

use crate::LeveledClass;

/// An open tag on the replay stack.
struct Frame {
    tag: String,
    void: bool,
    classes: Vec<String>,
    level: Option<usize>,
}

impl Frame {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            void: is_void_element(tag),
            classes: Vec::new(),
            level: None,
        }
    }

    fn has_classes(&self) -> bool {
        !self.classes.is_empty()
    }
}

/// Replays structural events and collects leveled classes.
pub struct Assigner<'a> {
    ignored: &'a BTreeSet<String>,
    stack: Vec<Frame>,
    /// The top frame is still receiving its own class tokens.
    collecting: bool,
    seen: HashSet<String>,
    classes: Vec<LeveledClass>,
    underflows: usize,
    strays: usize,
}

impl<'a> Assigner<'a> {
    pub fn new(ignored: &'a BTreeSet<String>) -> Self {
        Self {
            ignored,
            stack: Vec::new(),
            collecting: false,
            seen: HashSet::new(),
            classes: Vec::new(),
            underflows: 0,
            strays: 0,
        }
    }

    /// Assign levels to every distinct, non-ignored class in `events`.
    ///
    /// `events` must be in document order, as produced by
    /// [`autoclass_scanner::Scanner::scan`].
    pub fn assign(events: &[Event], ignored: &BTreeSet<String>) -> Vec<LeveledClass> {
        let mut assigner = Assigner::new(ignored);
        for event in events {
            assigner.process(event);
        }
        assigner.finish()
    }

    /// Feed one event.
    pub fn process(&mut self, event: &Event) {
        match &event.kind {
            EventKind::TagOpen(tag) => {
                self.settle();
                self.stack.push(Frame::new(tag));
                self.collecting = true;
            }
            EventKind::Class(name) => self.add_class(name, event.position),
            EventKind::TagClose => {
                self.settle();
                if self.stack.pop().is_none() {
                    self.underflows += 1;
                }
            }
        }
    }

    /// Settle the last open tag and return the collected classes.
    /// Tags still open at this point are abandoned.
    pub fn finish(mut self) -> Vec<LeveledClass> {
        self.settle();
        debug!(
            "assigned {} classes ({} unclosed tags, {} unmatched closes, {} stray classes)",
            self.classes.len(),
            self.stack.len(),
            self.underflows,
            self.strays,
        );
        self.classes
    }

    fn add_class(&mut self, name: &str, position: usize) {
        if self.ignored.contains(name) {
            trace!("ignoring class {name:?} at {position}");
            return;
        }
        match self.stack.last_mut() {
            Some(frame) if self.collecting => frame.classes.push(name.to_string()),
            // Outside any opening tag
            _ => self.strays += 1,
        }
    }

    /// Fix the level of the top frame, emit its unseen classes, and pop it
    /// if it is void.
    fn settle(&mut self) {
        if !self.collecting {
            return;
        }
        self.collecting = false;

        let depth = self.stack.iter().filter(|f| f.has_classes()).count();
        let Some(frame) = self.stack.last_mut() else {
            return;
        };

        if frame.has_classes() {
            let level = *frame.level.get_or_insert(depth.saturating_sub(1));
            for class in &frame.classes {
                if self.seen.insert(class.clone()) {
                    trace!("class {class:?} on <{}> at level {level}", frame.tag);
                    self.classes
                        .push(LeveledClass::new(frame.tag.as_str(), class.as_str(), level));
                }
            }
        }

        if frame.void {
            self.stack.pop();
        }
    }
}
