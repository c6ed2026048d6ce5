use crate::audio::{self, WebAudioTrack};
use crate::core::{
    AudioFactory, FrameHandle, FrameScheduler, LayoutQuery, ScrollSurface, SharedAnimator,
};
use crate::dom;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebAnimator = SharedAnimator<WebHost>;

/// Browser side of the animator: requestAnimationFrame, window scroll,
/// offset layout and `<audio>` elements.
pub struct WebHost {
    window: web::Window,
    document: web::Document,
    on_frame: Closure<dyn FnMut(f64)>,
}

impl WebHost {
    /// `animator` is the cell this host will live in; the frame closure
    /// reaches back through it.
    pub fn new(
        window: web::Window,
        document: web::Document,
        animator: Weak<WebAnimator>,
    ) -> Self {
        let on_frame = Closure::wrap(Box::new(move |timestamp: f64| {
            if let Some(shared) = animator.upgrade() {
                shared.on_frame(timestamp);
            }
        }) as Box<dyn FnMut(f64)>);
        Self {
            window,
            document,
            on_frame,
        }
    }
}

impl FrameScheduler for WebHost {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        match self
            .window
            .request_animation_frame(self.on_frame.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::error!("[frame] requestAnimationFrame error: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            log::warn!("[frame] cancelAnimationFrame error: {:?}", e);
        }
    }
}

impl ScrollSurface for WebHost {
    fn scroll_offset(&self) -> f64 {
        dom::scroll_top(&self.window, &self.document)
    }

    fn scroll_to(&mut self, offset: f64) {
        dom::scroll_window_to(&self.window, offset);
    }
}

impl LayoutQuery for WebHost {
    type Node = web::HtmlElement;

    fn vertical_offset(&self, node: &web::HtmlElement) -> f64 {
        dom::document_offset_top(node)
    }
}

impl AudioFactory for WebHost {
    type Track = WebAudioTrack;

    fn load_audio(&self, url: &str, preload: bool, looping: bool) -> Option<WebAudioTrack> {
        audio::create_track(url, preload, looping)
    }
}
