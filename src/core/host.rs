//! Capabilities the animator needs from its environment.
//!
//! The browser implementation lives in `frame.rs`; tests plug in fakes that
//! record what the animator asked for.

use crate::constants::REQUIRED_WINDOW_APIS;

/// Id of a pending frame callback, used to revoke it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

pub trait FrameScheduler {
    /// Ask for one callback before the next repaint. `None` if the host
    /// refused the request.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

pub trait ScrollSurface {
    fn scroll_offset(&self) -> f64;
    fn scroll_to(&mut self, offset: f64);
}

pub trait LayoutQuery {
    type Node;
    /// Cumulative top offset of `node` from the document origin.
    fn vertical_offset(&self, node: &Self::Node) -> f64;
}

pub trait AudioTrack {
    fn play(&self);
    fn pause(&self);
    fn rewind(&self);
}

pub trait AudioFactory {
    type Track: AudioTrack;
    fn load_audio(&self, url: &str, preload: bool, looping: bool) -> Option<Self::Track>;
}

/// Everything the animator drives.
pub trait Host: FrameScheduler + ScrollSurface + LayoutQuery + AudioFactory {}

impl<T> Host for T where T: FrameScheduler + ScrollSurface + LayoutQuery + AudioFactory {}

/// Which of the required host APIs are present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub animation_frames: bool,
    pub audio: bool,
    pub event_listeners: bool,
}

impl Capabilities {
    pub const ALL: Capabilities = Capabilities {
        animation_frames: true,
        audio: true,
        event_listeners: true,
    };

    /// Build from a property check, e.g. `|name| Reflect::has(&window, name)`.
    pub fn detect(mut has: impl FnMut(&str) -> bool) -> Self {
        let [raf, audio, listeners] = REQUIRED_WINDOW_APIS;
        Self {
            animation_frames: has(raf),
            audio: has(audio),
            event_listeners: has(listeners),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.animation_frames && self.audio && self.event_listeners
    }

    pub fn missing(&self) -> Vec<&'static str> {
        let [raf, audio, listeners] = REQUIRED_WINDOW_APIS;
        let mut out = Vec::new();
        if !self.animation_frames {
            out.push(raf);
        }
        if !self.audio {
            out.push(audio);
        }
        if !self.event_listeners {
            out.push(listeners);
        }
        out
    }
}

/// Sum `offset_top` up the offset-parent chain starting at `node`.
pub fn vertical_offset_of<N>(
    node: &N,
    offset_top: impl Fn(&N) -> f64,
    offset_parent: impl Fn(&N) -> Option<N>,
) -> f64 {
    let mut total = offset_top(node);
    let mut parent = offset_parent(node);
    while let Some(p) = parent {
        total += offset_top(&p);
        parent = offset_parent(&p);
    }
    total
}
