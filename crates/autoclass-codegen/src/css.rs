//! CSS skeleton generator.
//!
//! Turns leveled classes into empty rule blocks.

use autoclass_levels::LeveledClass;
use log::debug;

use crate::config::{BraceStyle, RenderConfig};

/// Generate the skeleton stylesheet for `classes`.
pub fn generate(classes: &[LeveledClass], config: &RenderConfig) -> String {
    let separator = format!("\n{}", "\n".repeat(config.separator_lines));
    let rules: Vec<String> = classes.iter().map(|class| rule(class, config)).collect();
    debug!("rendered {} rules", rules.len());
    rules.join(&separator)
}

fn rule(class: &LeveledClass, config: &RenderConfig) -> String {
    let indent = if config.flat {
        String::new()
    } else {
        config.indent.repeat(class.level)
    };
    let tag = if config.tags.includes(&class.tag) {
        class.tag.as_str()
    } else {
        ""
    };

    let mut out = format!("{indent}{tag}.{}", class.name);
    match config.brace {
        BraceStyle::SameLine => out.push_str(" {"),
        BraceStyle::OwnLine => {
            out.push('\n');
            out.push_str(&indent);
            out.push('{');
        }
    }
    if config.inner {
        out.push('\n');
        out.push_str(&indent);
        out.push_str(&config.indent);
    }
    out.push('\n');
    out.push_str(&indent);
    out.push('}');
    out
}
