//! JS-facing option values.
//!
//! These mirror the loosely typed arguments a JavaScript caller passes and
//! convert into the typed configuration of `autoclass-codegen`.

use autoclass_codegen::{Autoclass, ConfigError, Ignore, TagPolicy};
use serde::Deserialize;

/// Argument of `ignore()`: `"name"`, `["a", "b"]`, or `false` to clear.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IgnoreArg {
    One(String),
    Many(Vec<String>),
    Clear(bool),
}

impl From<IgnoreArg> for Ignore {
    fn from(arg: IgnoreArg) -> Self {
        match arg {
            IgnoreArg::One(class) => Ignore::Class(class),
            IgnoreArg::Many(classes) => Ignore::Classes(classes),
            IgnoreArg::Clear(_) => Ignore::Clear,
        }
    }
}

/// Argument of `tag()`: `true`/`false`, `"div"`, or `["ul", "li"]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TagArg {
    All(bool),
    One(String),
    Many(Vec<String>),
}

impl From<TagArg> for TagPolicy {
    fn from(arg: TagArg) -> Self {
        match arg {
            TagArg::All(all) => TagPolicy::from(all),
            TagArg::One(tag) => TagPolicy::only([tag]),
            TagArg::Many(tags) => TagPolicy::only(tags),
        }
    }
}

/// Options object accepted by `generate(html, options)`.
///
/// ```text
/// { indent: "tabs", indentCount: 1, flat: false, inner: true,
///   tag: ["ul", "li"], brace: "newline", line: 1, ignore: ["clearfix"] }
/// ```
///
/// Missing fields keep their defaults. `line` is the number of blank lines
/// between rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    pub indent: Option<String>,
    pub indent_count: Option<usize>,
    pub flat: Option<bool>,
    pub inner: Option<bool>,
    pub tag: Option<TagArg>,
    pub brace: Option<String>,
    pub line: Option<usize>,
    pub ignore: Option<IgnoreArg>,
}

impl RenderOptions {
    /// Apply every present option. On error `ac` is left untouched.
    pub fn apply(&self, ac: &mut Autoclass) -> Result<(), ConfigError> {
        let mut next = ac.clone();
        if let Some(kind) = &self.indent {
            next.indent(kind, self.indent_count.unwrap_or(1))?;
        }
        if let Some(flat) = self.flat {
            next.flat(flat);
        }
        if let Some(inner) = self.inner {
            next.inner(inner);
        }
        if let Some(tag) = &self.tag {
            next.tag(tag.clone().into());
        }
        if let Some(kind) = &self.brace {
            next.brace(kind)?;
        }
        if let Some(lines) = self.line {
            next.line(lines > 0, lines);
        }
        if let Some(ignore) = &self.ignore {
            next.ignore(ignore.clone().into());
        }
        *ac = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoclass_codegen::BraceStyle;

    #[test]
    fn test_ignore_arg_conversion() {
        assert_eq!(Ignore::from(IgnoreArg::One("a".into())), Ignore::Class("a".into()));
        assert_eq!(
            Ignore::from(IgnoreArg::Many(vec!["a".into(), "b".into()])),
            Ignore::Classes(vec!["a".into(), "b".into()])
        );
        assert_eq!(Ignore::from(IgnoreArg::Clear(false)), Ignore::Clear);
    }

    #[test]
    fn test_tag_arg_conversion() {
        assert_eq!(TagPolicy::from(TagArg::All(true)), TagPolicy::All);
        assert_eq!(TagPolicy::from(TagArg::All(false)), TagPolicy::Omit);
        assert_eq!(TagPolicy::from(TagArg::One("div".into())), TagPolicy::only(["div"]));
        assert_eq!(
            TagPolicy::from(TagArg::Many(vec!["ul".into(), "li".into()])),
            TagPolicy::only(["li", "ul"])
        );
    }

    #[test]
    fn test_apply_all_options() {
        let mut ac = Autoclass::default();
        let options = RenderOptions {
            indent: Some("spaces".into()),
            indent_count: Some(2),
            flat: Some(true),
            inner: Some(false),
            tag: Some(TagArg::One("li".into())),
            brace: Some("newline".into()),
            line: Some(2),
            ignore: Some(IgnoreArg::One("clearfix".into())),
        };
        options.apply(&mut ac).unwrap();
        let config = ac.config();
        assert_eq!(config.indent, "  ");
        assert!(config.flat);
        assert!(!config.inner);
        assert_eq!(config.tags, TagPolicy::only(["li"]));
        assert_eq!(config.brace, BraceStyle::OwnLine);
        assert_eq!(config.separator_lines, 2);
        assert!(config.ignored.contains("clearfix"));
    }

    #[test]
    fn test_failed_apply_leaves_config() {
        let mut ac = Autoclass::default();
        let options = RenderOptions {
            flat: Some(true),
            indent: Some("dots".into()),
            ..Default::default()
        };
        assert_eq!(
            options.apply(&mut ac),
            Err(ConfigError::UnknownIndent("dots".into()))
        );
        assert!(!ac.config().flat);
    }

    #[test]
    fn test_zero_line_disables_separator() {
        let mut ac = Autoclass::default();
        ac.line(true, 3);
        RenderOptions {
            line: Some(0),
            ..Default::default()
        }
        .apply(&mut ac)
        .unwrap();
        assert_eq!(ac.config().separator_lines, 0);
    }
}
