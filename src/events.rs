use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event subscription that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        mut handler: impl FnMut(&web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(&ev))
            as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
