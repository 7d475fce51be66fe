//! WASM bindings for autoclass.
//!
//! Exposes the `Autoclasscss` class with the familiar setters (`indent`,
//! `ignore`, `flat`, `inner`, `tag`, `brace`, `line`, `set`) plus `get`, and
//! a one-shot `generate(html, options)`. Setters return the generator, so
//! `new Autoclasscss(html).indent("tabs").flat(true).get()` chains. Invalid
//! option values throw.

pub mod options;

use autoclass_codegen::Autoclass;
use wasm_bindgen::prelude::*;

pub use options::{IgnoreArg, RenderOptions, TagArg};

fn js_error(e: impl ToString) -> JsError {
    JsError::new(&e.to_string())
}

/// CSS skeleton generator for JavaScript callers.
#[wasm_bindgen]
pub struct Autoclasscss {
    ac: Autoclass,
}

#[wasm_bindgen]
impl Autoclasscss {
    #[wasm_bindgen(constructor)]
    pub fn new(html: Option<String>) -> Autoclasscss {
        Autoclasscss {
            ac: Autoclass::new(html.unwrap_or_default()),
        }
    }

    /// `"tabs"` or `"spaces"`, `count` defaults to 1.
    pub fn indent(mut self, kind: &str, count: Option<usize>) -> Result<Autoclasscss, JsError> {
        self.ac.indent(kind, count.unwrap_or(1)).map_err(js_error)?;
        Ok(self)
    }

    /// A class name, an array of class names, or `false` to clear.
    pub fn ignore(mut self, classes: JsValue) -> Result<Autoclasscss, JsError> {
        let arg: IgnoreArg = serde_wasm_bindgen::from_value(classes).map_err(js_error)?;
        self.ac.ignore(arg.into());
        Ok(self)
    }

    pub fn flat(mut self, state: bool) -> Autoclasscss {
        self.ac.flat(state);
        self
    }

    pub fn inner(mut self, state: bool) -> Autoclasscss {
        self.ac.inner(state);
        self
    }

    /// `true`/`false`, a tag name, or an array of tag names.
    pub fn tag(mut self, tag: JsValue) -> Result<Autoclasscss, JsError> {
        let arg: TagArg = serde_wasm_bindgen::from_value(tag).map_err(js_error)?;
        self.ac.tag(arg.into());
        Ok(self)
    }

    /// `"default"` or `"newline"`.
    pub fn brace(mut self, kind: &str) -> Result<Autoclasscss, JsError> {
        self.ac.brace(kind).map_err(js_error)?;
        Ok(self)
    }

    pub fn line(mut self, state: bool, count: Option<usize>) -> Autoclasscss {
        self.ac.line(state, count.unwrap_or(1));
        self
    }

    pub fn set(mut self, html: String) -> Autoclasscss {
        self.ac.set_markup(html);
        self
    }

    pub fn get(&self) -> String {
        self.ac.render()
    }

    /// Leveled classes as `[{ tag, name, level }]`.
    pub fn classes(&self) -> Result<js_sys::Array, JsError> {
        let out = js_sys::Array::new();
        for class in self.ac.classes() {
            let obj = js_sys::Object::new();
            js_sys::Reflect::set(&obj, &"tag".into(), &class.tag.into())
                .map_err(|_| JsError::new("Failed to set tag property"))?;
            js_sys::Reflect::set(&obj, &"name".into(), &class.name.into())
                .map_err(|_| JsError::new("Failed to set name property"))?;
            js_sys::Reflect::set(&obj, &"level".into(), &(class.level as u32).into())
                .map_err(|_| JsError::new("Failed to set level property"))?;
            out.push(&obj);
        }
        Ok(out)
    }
}

/// Generate a skeleton in one call.
///
/// `options` is a plain object, see [`RenderOptions`]. `undefined` or `null`
/// uses the defaults.
#[wasm_bindgen]
pub fn generate(html: &str, options: JsValue) -> Result<String, JsError> {
    let options: RenderOptions = if options.is_undefined() || options.is_null() {
        RenderOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(js_error)?
    };
    render_with(html, &options).map_err(js_error)
}

/// Native half of [`generate`].
pub fn render_with(
    html: &str,
    options: &RenderOptions,
) -> Result<String, autoclass_codegen::ConfigError> {
    let mut ac = Autoclass::new(html);
    options.apply(&mut ac)?;
    Ok(ac.render())
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
