use crate::core::AudioTrack;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// An `<audio>` element used for the ride music or the arrival ding.
pub struct WebAudioTrack {
    el: web::HtmlAudioElement,
    label: String,
}

pub fn create_track(url: &str, preload: bool, looping: bool) -> Option<WebAudioTrack> {
    match web::HtmlAudioElement::new_with_src(url) {
        Ok(el) => {
            el.set_preload(if preload { "auto" } else { "none" });
            el.set_loop(looping);
            Some(WebAudioTrack {
                el,
                label: url.to_string(),
            })
        }
        Err(e) => {
            log::error!("[audio] {} load error: {:?}", url, e);
            None
        }
    }
}

impl AudioTrack for WebAudioTrack {
    fn play(&self) {
        // Autoplay policies reject the promise when there was no user gesture.
        match self.el.play() {
            Ok(promise) => {
                let label = self.label.clone();
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("[audio] {} play rejected: {:?}", label, e);
                    }
                });
            }
            Err(e) => log::warn!("[audio] {} play error: {:?}", self.label, e),
        }
    }

    fn pause(&self) {
        if let Err(e) = self.el.pause() {
            log::warn!("[audio] {} pause error: {:?}", self.label, e);
        }
    }

    fn rewind(&self) {
        self.el.set_current_time(0.0);
    }
}
