use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;

use crate::event::{Event, EventKind};

/// `<` followed by a tag name. Tag names keep the case they were written in.
static OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([-A-Za-z0-9_]+)").expect("open tag pattern is valid"));

/// A whitespace-preceded `class` attribute with a single or double quoted value.
static CLASS_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s+(?i:class)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("class attribute pattern is valid")
});

const CLOSE_TAG: &str = "</";

/// HTML structure scanner.
///
/// Runs three independent passes over the source (open tags, close tags,
/// class attributes) and merges their events by position:
/// - open and close tags are found lexically, without name matching
/// - class attribute values are split into one event per token
/// - the merge is a stable sort, so ties keep pass order
pub struct Scanner<'a> {
    source: &'a str,
    events: Vec<Event>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            events: Vec::new(),
        }
    }

    /// Scan the entire source into a position-ordered vector of events.
    pub fn scan(source: &str) -> Vec<Event> {
        let mut scanner = Scanner::new(source);
        scanner.scan_open_tags();
        scanner.scan_close_tags();
        scanner.scan_classes();
        scanner.finish()
    }

    fn scan_open_tags(&mut self) {
        for caps in OPEN_TAG.captures_iter(self.source) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            self.events.push(Event::open(whole.start(), name.as_str()));
        }
    }

    fn scan_close_tags(&mut self) {
        for (position, _) in self.source.match_indices(CLOSE_TAG) {
            self.events.push(Event::close(position));
        }
    }

    fn scan_classes(&mut self) {
        for caps in CLASS_ATTR.captures_iter(self.source) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let value = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            trace!("class attribute at {}: {value:?}", whole.start());

            // Empty attribute: no events
            for (index, class) in split_classes(value).enumerate() {
                self.events.push(Event::class(whole.start() + index, class));
            }
        }
    }

    /// Merge all passes into document order.
    fn finish(mut self) -> Vec<Event> {
        self.events.sort_by_key(|event| event.position);
        debug!(
            "scanned {} events ({} tags, {} classes)",
            self.events.len(),
            self.events
                .iter()
                .filter(|e| matches!(e.kind, EventKind::TagOpen(_)))
                .count(),
            self.events
                .iter()
                .filter(|e| matches!(e.kind, EventKind::Class(_)))
                .count(),
        );
        self.events
    }
}

/// Split a class attribute value into its tokens, ignoring surrounding and
/// repeated whitespace.
pub fn split_classes(value: &str) -> impl Iterator<Item = &str> {
    value.split_whitespace()
}
