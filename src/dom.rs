use crate::core::vertical_offset_of;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current vertical scroll of the page, fractional where the engine reports
/// it. Falls back to the `<html>`/`<body>` element offsets.
pub fn scroll_top(window: &web::Window, document: &web::Document) -> f64 {
    if let Ok(y) = window.scroll_y() {
        return y;
    }
    let root = document
        .document_element()
        .map(|el| el.scroll_top())
        .unwrap_or(0);
    if root != 0 {
        return root as f64;
    }
    document.body().map(|b| b.scroll_top()).unwrap_or(0) as f64
}

#[inline]
pub fn scroll_window_to(window: &web::Window, y: f64) {
    window.scroll_to_with_x_and_y(0.0, y);
}

/// Offset of `el` from the document origin, summed up the offset-parent chain.
pub fn document_offset_top(el: &web::HtmlElement) -> f64 {
    vertical_offset_of(
        el,
        |e| e.offset_top() as f64,
        |e| {
            e.offset_parent()
                .and_then(|p| p.dyn_into::<web::HtmlElement>().ok())
        },
    )
}

/// Resolve a CSS selector to an element, logging when nothing matches.
pub fn query_element(document: &web::Document, selector: &str) -> Option<web::Element> {
    match document.query_selector(selector) {
        Ok(Some(el)) => Some(el),
        Ok(None) => {
            log::warn!("[elevator] no element matches {:?}", selector);
            None
        }
        Err(e) => {
            log::warn!("[elevator] bad selector {:?}: {:?}", selector, e);
            None
        }
    }
}
