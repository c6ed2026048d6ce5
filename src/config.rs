//! Reads the JavaScript options bag into [`RawOptions`].
//!
//! Keys are the camelCase names callers already use
//! (`element`, `duration`, `mainAudio`, `endAudio`, `preloadAudio`,
//! `loopAudio`, `startCallback`, `endCallback`, `targetElement`,
//! `verticalPadding`). Values of the wrong type are logged and dropped;
//! nothing here throws.

use crate::core::{AudioSource, Callback, RawOptions};
use crate::dom;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Look up `key`, treating `undefined` (and a non-object bag) as absent.
fn field(bag: &JsValue, key: &str) -> Option<JsValue> {
    if !bag.is_object() {
        return None;
    }
    Reflect::get(bag, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined())
}

/// A node given directly, or a CSS selector string. Falsy values mean "none".
fn element_field<T: JsCast>(document: &web::Document, v: JsValue, key: &str) -> Option<T> {
    if !v.is_truthy() {
        return None;
    }
    let v = match v.as_string() {
        Some(selector) => JsValue::from(dom::query_element(document, &selector)?),
        None => v,
    };
    match v.dyn_into::<T>() {
        Ok(el) => Some(el),
        Err(other) => {
            log::warn!("[config] {} is not an HTML element: {:?}", key, other);
            None
        }
    }
}

fn number_field(v: JsValue, key: &str) -> Option<f64> {
    if v.is_null() {
        return None;
    }
    let n = v.as_f64();
    if n.is_none() {
        log::warn!("[config] {} should be a number, got {:?}", key, v);
    }
    n
}

fn audio_field(v: JsValue) -> AudioSource {
    match v.as_string() {
        Some(url) if !url.is_empty() => AudioSource::Url(url),
        _ => AudioSource::Off,
    }
}

fn callback_field(v: JsValue, key: &'static str) -> Option<Callback> {
    if !v.is_truthy() {
        return None;
    }
    match v.dyn_into::<Function>() {
        Ok(f) => Some(js_callback(f, key)),
        Err(other) => {
            log::warn!("[config] {} is not a function: {:?}", key, other);
            None
        }
    }
}

fn js_callback(f: Function, key: &'static str) -> Callback {
    Box::new(move || {
        if let Err(e) = f.call0(&JsValue::NULL) {
            log::error!("[elevator] {} threw: {:?}", key, e);
        }
    })
}

/// `element` is any element (only clicked); `targetElement` must be an
/// `HTMLElement` since its layout offset is read.
pub fn read_options(
    bag: &JsValue,
    document: &web::Document,
) -> (Option<web::Element>, RawOptions<web::HtmlElement>) {
    let element =
        field(bag, "element").and_then(|v| element_field::<web::Element>(document, v, "element"));
    let raw = RawOptions {
        duration: field(bag, "duration").and_then(|v| number_field(v, "duration")),
        main_audio: field(bag, "mainAudio").map(audio_field),
        end_audio: field(bag, "endAudio").map(audio_field),
        preload_audio: field(bag, "preloadAudio").map(|v| v.is_truthy()),
        loop_audio: field(bag, "loopAudio").map(|v| v.is_truthy()),
        start_callback: field(bag, "startCallback")
            .and_then(|v| callback_field(v, "startCallback")),
        end_callback: field(bag, "endCallback").and_then(|v| callback_field(v, "endCallback")),
        target_element: field(bag, "targetElement")
            .and_then(|v| element_field(document, v, "targetElement")),
        vertical_padding: field(bag, "verticalPadding")
            .and_then(|v| number_field(v, "verticalPadding")),
    };
    (element, raw)
}
