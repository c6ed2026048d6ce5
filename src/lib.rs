//! Smoothly scroll the page to a target with an eased curve, optionally
//! playing elevator music on the way and a ding on arrival.
//!
//! The state machine in [`core`] is platform-free; the browser bindings
//! (`Elevator`, compiled for `wasm32`) plug `web-sys` into it.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod config;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;

#[cfg(target_arch = "wasm32")]
pub use web_binding::*;

#[cfg(target_arch = "wasm32")]
mod web_binding {
    use crate::constants::{BLUR_EVENT, CLICK_EVENT};
    use crate::core::{Capabilities, ScrollAnimator, SharedAnimator};
    use crate::events::Listener;
    use crate::frame::{WebAnimator, WebHost};
    use crate::{config, dom};
    use js_sys::Reflect;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::prelude::*;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        Ok(())
    }

    fn capabilities(window: &web::Window) -> Capabilities {
        Capabilities::detect(|name| Reflect::has(window, &JsValue::from_str(name)).unwrap_or(false))
    }

    fn with_animator(weak: &Weak<WebAnimator>, f: impl FnOnce(&WebAnimator)) {
        if let Some(shared) = weak.upgrade() {
            f(&shared);
        }
    }

    struct Wired {
        animator: Rc<WebAnimator>,
        _click: Option<Listener>,
        _blur: Listener,
    }

    fn wire(options: &JsValue) -> anyhow::Result<Option<Wired>> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let caps = capabilities(&window);
        if !caps.is_complete() {
            // Take the stairs instead.
            log::warn!("[elevator] missing {:?}; effect disabled", caps.missing());
            return Ok(None);
        }
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

        let (element, raw) = config::read_options(options, &document);
        let opts = raw.with_defaults();

        let animator = Rc::new_cyclic(|weak: &Weak<WebAnimator>| {
            let host = WebHost::new(window.clone(), document.clone(), weak.clone());
            SharedAnimator::new(ScrollAnimator::new(host, opts))
        });

        let click = match element {
            Some(el) => {
                let weak = Rc::downgrade(&animator);
                Some(Listener::new(&el, CLICK_EVENT, move |_| {
                    with_animator(&weak, |a| {
                        a.trigger();
                    })
                })?)
            }
            None => None,
        };

        let weak = Rc::downgrade(&animator);
        let blur = Listener::new(&window, BLUR_EVENT, move |_| {
            with_animator(&weak, |a| a.on_focus_lost())
        })?;

        Ok(Some(Wired {
            animator,
            _click: click,
            _blur: blur,
        }))
    }

    /// Scroll-to-target effect. Construct with an options object, e.g.
    /// `new Elevator({ element, targetElement, mainAudio: "music.mp3" })`.
    ///
    /// In environments without the required APIs the instance is inert.
    #[wasm_bindgen]
    pub struct Elevator {
        wired: Option<Wired>,
    }

    #[wasm_bindgen]
    impl Elevator {
        #[wasm_bindgen(constructor)]
        pub fn new(options: JsValue) -> Elevator {
            let wired = match wire(&options) {
                Ok(w) => w,
                Err(e) => {
                    log::error!("[elevator] init error: {:?}", e);
                    None
                }
            };
            Elevator { wired }
        }

        /// Start a run; ignored while one is in flight.
        pub fn elevate(&self) {
            if let Some(w) = &self.wired {
                w.animator.trigger();
            }
        }

        /// Same as `elevate`.
        pub fn trigger(&self) {
            self.elevate();
        }

        #[wasm_bindgen(js_name = isElevating)]
        pub fn is_elevating(&self) -> bool {
            self.wired
                .as_ref()
                .map(|w| w.animator.is_elevating())
                .unwrap_or(false)
        }

        /// Whether the effect is live (all host APIs were present).
        #[wasm_bindgen(js_name = isActive)]
        pub fn is_active(&self) -> bool {
            self.wired.is_some()
        }

        /// Stop any run and remove the event listeners.
        pub fn destroy(&mut self) {
            if let Some(w) = self.wired.take() {
                w.animator.cancel();
            }
        }
    }

    impl Drop for Elevator {
        fn drop(&mut self) {
            self.destroy();
        }
    }
}
