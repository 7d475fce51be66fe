//! Autoclass Code Generator
//!
//! Produces a skeleton stylesheet from HTML markup: one empty rule per
//! distinct class, indented by how deeply its element is nested among other
//! class-bearing elements.
//!
//! ```text
//! html → Scanner::scan() → Assigner::assign() → css::generate() → String
//! ```
//!
//! # Example
//!
//! ```
//! use autoclass_codegen::Autoclass;
//!
//! let mut ac = Autoclass::new(r#"<ul class="menu"><li class="item"></li></ul>"#);
//! ac.inner(false).indent("spaces", 2).unwrap();
//! assert_eq!(ac.render(), ".menu {\n}\n  .item {\n  }");
//! ```

pub mod config;
pub mod css;

use autoclass_levels::LeveledClass;

pub use config::{BraceStyle, Ignore, IndentKind, RenderConfig, RenderConfigBuilder, TagPolicy};

/// Invalid value for an enumerated option. The configuration is left
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown indent type: {0}")]
    UnknownIndent(String),
    #[error("Unknown brace type: {0}")]
    UnknownBrace(String),
}

/// Generate the skeleton stylesheet for `html`.
pub fn generate(html: &str, config: &RenderConfig) -> String {
    let classes = autoclass_levels::analyze(html, &config.ignored);
    css::generate(&classes, config)
}

/// Markup plus render configuration, with chained setters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Autoclass {
    markup: String,
    config: RenderConfig,
}

impl Autoclass {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            config: RenderConfig::default(),
        }
    }

    pub fn with_config(markup: impl Into<String>, config: RenderConfig) -> Self {
        Self {
            markup: markup.into(),
            config,
        }
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Replace the markup rendered next.
    pub fn set_markup(&mut self, markup: impl Into<String>) -> &mut Self {
        self.markup = markup.into();
        self
    }

    /// Set the indent unit from `"tabs"` or `"spaces"`.
    pub fn indent(&mut self, kind: &str, count: usize) -> Result<&mut Self, ConfigError> {
        let kind: IndentKind = kind.parse()?;
        Ok(self.indent_with(kind, count))
    }

    pub fn indent_with(&mut self, kind: IndentKind, count: usize) -> &mut Self {
        self.config.indent = kind.unit(count);
        self
    }

    pub fn ignore(&mut self, change: Ignore) -> &mut Self {
        self.config.apply_ignore(change);
        self
    }

    pub fn flat(&mut self, flat: bool) -> &mut Self {
        self.config.flat = flat;
        self
    }

    pub fn inner(&mut self, inner: bool) -> &mut Self {
        self.config.inner = inner;
        self
    }

    pub fn tag(&mut self, tags: TagPolicy) -> &mut Self {
        self.config.tags = tags;
        self
    }

    /// Set the brace style from `"default"` or `"newline"`.
    pub fn brace(&mut self, kind: &str) -> Result<&mut Self, ConfigError> {
        let style: BraceStyle = kind.parse()?;
        Ok(self.brace_style(style))
    }

    pub fn brace_style(&mut self, style: BraceStyle) -> &mut Self {
        self.config.brace = style;
        self
    }

    /// Separate rules with `count` blank lines, or none when disabled.
    pub fn line(&mut self, enabled: bool, count: usize) -> &mut Self {
        self.config.separator_lines = if enabled { count.max(1) } else { 0 };
        self
    }

    /// The leveled classes the next render would emit.
    pub fn classes(&self) -> Vec<LeveledClass> {
        autoclass_levels::analyze(&self.markup, &self.config.ignored)
    }

    pub fn render(&self) -> String {
        generate(&self.markup, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const WRAP: &str = r#"<div class="wrap"><p class="text"></p></div>"#;

    // =========================================================================
    // Setters
    // =========================================================================

    #[test]
    fn test_unknown_indent_leaves_config_unchanged() {
        let mut ac = Autoclass::new(WRAP);
        ac.indent("tabs", 1).unwrap();
        let err = ac.indent("dashes", 2).unwrap_err();
        assert_eq!(err, ConfigError::UnknownIndent("dashes".into()));
        assert_eq!(err.to_string(), "Unknown indent type: dashes");
        assert_eq!(ac.config().indent, "\t");
    }

    #[test]
    fn test_unknown_brace_leaves_config_unchanged() {
        let mut ac = Autoclass::new(WRAP);
        ac.brace("newline").unwrap();
        let err = ac.brace("inline").unwrap_err();
        assert_eq!(err.to_string(), "Unknown brace type: inline");
        assert_eq!(ac.config().brace, BraceStyle::OwnLine);
    }

    #[test]
    fn test_setter_idempotent() {
        let mut ac = Autoclass::new(WRAP);
        ac.indent("spaces", 2).unwrap();
        let once = ac.render();
        ac.indent("spaces", 2).unwrap();
        assert_eq!(ac.render(), once);
    }

    #[test]
    fn test_line_count_defaults_to_one() {
        let mut ac = Autoclass::default();
        ac.line(true, 0);
        assert_eq!(ac.config().separator_lines, 1);
        ac.line(false, 3);
        assert_eq!(ac.config().separator_lines, 0);
    }

    #[test]
    fn test_chained_setters() {
        let mut ac = Autoclass::new(WRAP);
        ac.flat(true)
            .inner(false)
            .tag(TagPolicy::All)
            .line(true, 1)
            .ignore(Ignore::Class("unused".into()));
        assert_eq!(ac.render(), "div.wrap {\n}\n\np.text {\n}");
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    #[test]
    fn test_empty_markup() {
        assert_eq!(Autoclass::new("").render(), "");
    }

    #[test]
    fn test_markup_without_classes() {
        assert_eq!(Autoclass::new("<div><p>hi</p></div>").render(), "");
    }

    #[test]
    fn test_default_render() {
        assert_eq!(
            Autoclass::new(WRAP).render(),
            ".wrap {\n    \n}\n    .text {\n        \n    }"
        );
    }

    #[test]
    fn test_render_with_tags() {
        let mut ac = Autoclass::new(WRAP);
        ac.tag(TagPolicy::All);
        assert_eq!(
            ac.render(),
            "div.wrap {\n    \n}\n    p.text {\n        \n    }"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let ac = Autoclass::new(
            r#"<nav class="menu"><a class="link active"></a><a class="link"></a></nav>"#,
        );
        assert_eq!(ac.render(), ac.render());
    }

    #[test]
    fn test_duplicate_class_rendered_once() {
        let ac = Autoclass::new(
            r#"<ul class="list"><li class="item"></li><li class="item"></li><li class="item"></li></ul>"#,
        );
        let css = ac.render();
        assert_eq!(css.matches(".item {").count(), 1);
        assert_eq!(css, ".list {\n    \n}\n    .item {\n        \n    }");
    }

    #[test]
    fn test_ignored_class_never_rendered() {
        let mut ac = Autoclass::new(r#"<div class="box clearfix"><p class="clearfix"></p></div>"#);
        ac.ignore(Ignore::Classes(vec!["clearfix".into()])).inner(false);
        let css = ac.render();
        assert!(!css.contains("clearfix"));
        assert_eq!(css, ".box {\n}");
    }

    #[test]
    fn test_clear_ignored() {
        let mut ac = Autoclass::new(r#"<div class="a"></div>"#);
        ac.ignore(Ignore::Class("a".into()));
        assert_eq!(ac.render(), "");
        ac.ignore(Ignore::Clear);
        assert_eq!(ac.render(), ".a {\n    \n}");
    }

    #[test]
    fn test_flat_has_no_indentation() {
        let mut ac = Autoclass::new(
            r#"<div class="a"><div class="b"><div class="c"><img class="d"></div></div></div>"#,
        );
        ac.flat(true);
        for line in ac.render().lines().filter(|l| l.contains('.')) {
            assert!(line.starts_with('.'), "indented selector: {line:?}");
        }
    }

    #[test]
    fn test_set_markup_replaces_input() {
        let mut ac = Autoclass::new(WRAP);
        ac.set_markup(r#"<span class="only"></span>"#).inner(false);
        assert_eq!(ac.markup(), r#"<span class="only"></span>"#);
        assert_eq!(ac.render(), ".only {\n}");
    }

    #[test]
    fn test_classes_exposed() {
        let ac = Autoclass::new(WRAP);
        assert_eq!(
            ac.classes(),
            vec![
                LeveledClass::new("div", "wrap", 0),
                LeveledClass::new("p", "text", 1),
            ]
        );
    }

    #[test]
    fn test_generate_with_built_config() {
        let config = RenderConfig::builder()
            .indent(IndentKind::Tabs, 1)
            .tags(TagPolicy::only(["li"]))
            .inner(false)
            .build();
        let html = r#"<ul class="nav">
    <li class="nav-item"><a class="nav-link" href="/"></a></li>
    <li class="nav-item"><img class="nav-icon" src="i.png"></li>
</ul>"#;
        assert_eq!(
            generate(html, &config),
            ".nav {\n}\n\tli.nav-item {\n\t}\n\t\t.nav-link {\n\t\t}\n\t\t.nav-icon {\n\t\t}"
        );
    }
}
