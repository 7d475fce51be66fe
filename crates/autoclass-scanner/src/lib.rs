//! Autoclass Scanner
//!
//! Scans raw HTML text for opening tags, closing tags and `class` attributes,
//! and merges them into one position-ordered stream of structural events.
//! No tree is built here and no well-formedness is assumed; pairing opens
//! with closes is left to `autoclass-levels`.
//!
//! # Example
//!
//! ```
//! use autoclass_scanner::{EventKind, Scanner};
//!
//! let events = Scanner::scan(r#"<p class="lead"></p>"#);
//! assert_eq!(events.len(), 3);
//! assert_eq!(events[1].kind, EventKind::Class("lead".into()));
//! ```

pub mod event;
pub mod scanner;

pub use event::{is_void_element, Event, EventKind, VOID_ELEMENTS};
pub use scanner::{split_classes, Scanner};
