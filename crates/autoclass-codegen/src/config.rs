//! Render configuration.
//!
//! [`RenderConfig`] is an immutable value read by the renderer. Build one
//! with [`RenderConfig::builder`], or mutate it through the validating
//! setters on [`crate::Autoclass`].

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::ConfigError;

/// Character used for one indent step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentKind {
    Tabs,
    Spaces,
}

impl IndentKind {
    /// One indent unit: the indent character repeated `count` times.
    /// A count of zero is treated as one.
    pub fn unit(self, count: usize) -> String {
        let ch = match self {
            IndentKind::Tabs => "\t",
            IndentKind::Spaces => " ",
        };
        ch.repeat(count.max(1))
    }
}

impl FromStr for IndentKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tabs" => Ok(IndentKind::Tabs),
            "spaces" => Ok(IndentKind::Spaces),
            _ => Err(ConfigError::UnknownIndent(s.to_string())),
        }
    }
}

/// Placement of the opening brace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BraceStyle {
    /// `.a {`
    #[default]
    SameLine,
    /// `.a` then `{` on its own line at the selector's indent.
    OwnLine,
}

impl FromStr for BraceStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(BraceStyle::SameLine),
            "newline" => Ok(BraceStyle::OwnLine),
            _ => Err(ConfigError::UnknownBrace(s.to_string())),
        }
    }
}

/// Which selectors get the tag name in front of the class.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagPolicy {
    /// `.a`
    #[default]
    Omit,
    /// `div.a`
    All,
    /// Tag name only for the listed tags.
    Only(BTreeSet<String>),
}

impl TagPolicy {
    pub fn only<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TagPolicy::Only(tags.into_iter().map(Into::into).collect())
    }

    pub fn includes(&self, tag: &str) -> bool {
        match self {
            TagPolicy::Omit => false,
            TagPolicy::All => true,
            TagPolicy::Only(tags) => tags.contains(tag),
        }
    }
}

impl From<bool> for TagPolicy {
    fn from(all: bool) -> Self {
        if all {
            TagPolicy::All
        } else {
            TagPolicy::Omit
        }
    }
}

/// Change to the set of ignored class names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ignore {
    Class(String),
    Classes(Vec<String>),
    /// Stop ignoring anything.
    Clear,
}

/// Options read by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// One indent step.
    pub indent: String,
    /// Never indent selectors, whatever their level.
    pub flat: bool,
    /// Put an indented blank line inside each rule body.
    pub inner: bool,
    pub tags: TagPolicy,
    pub brace: BraceStyle,
    /// Blank lines between rules.
    pub separator_lines: usize,
    pub ignored: BTreeSet<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: IndentKind::Spaces.unit(4),
            flat: false,
            inner: true,
            tags: TagPolicy::Omit,
            brace: BraceStyle::SameLine,
            separator_lines: 0,
            ignored: BTreeSet::new(),
        }
    }
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }

    pub fn apply_ignore(&mut self, change: Ignore) {
        match change {
            Ignore::Class(class) => {
                self.ignored.insert(class);
            }
            Ignore::Classes(classes) => self.ignored.extend(classes),
            Ignore::Clear => self.ignored.clear(),
        }
    }
}

/// Builder for [`RenderConfig`], starting from the defaults.
#[derive(Debug, Clone, Default)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    pub fn indent(mut self, kind: IndentKind, count: usize) -> Self {
        self.config.indent = kind.unit(count);
        self
    }

    pub fn flat(mut self, flat: bool) -> Self {
        self.config.flat = flat;
        self
    }

    pub fn inner(mut self, inner: bool) -> Self {
        self.config.inner = inner;
        self
    }

    pub fn tags(mut self, tags: TagPolicy) -> Self {
        self.config.tags = tags;
        self
    }

    pub fn brace(mut self, brace: BraceStyle) -> Self {
        self.config.brace = brace;
        self
    }

    pub fn separator_lines(mut self, lines: usize) -> Self {
        self.config.separator_lines = lines;
        self
    }

    pub fn ignore<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.ignored.extend(classes.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> RenderConfig {
        self.config
    }
}
