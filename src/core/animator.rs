//! The scroll state machine: `Idle` (no session) and `Animating` (a session).
//!
//! All host interaction goes through the [`Host`] traits, so a run can be
//! stepped frame by frame with a fake host.
//!
//! The animator never calls user hooks itself. Each step reports the
//! [`Transition`] it crossed and the owner runs the hooks afterwards, so a hook
//! can query or re-trigger the animator without finding it borrowed.

use super::easing::{derived_duration, ease_in_out_quad};
use super::host::{AudioFactory, AudioTrack, FrameHandle, Host, LayoutQuery};
use super::options::{Callback, ElevatorOptions};
use crate::constants::DEFAULT_END_POSITION;
use std::cell::{Ref, RefCell, RefMut};

/// Lifecycle edges crossed by one animator call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub started: bool,
    pub finished: bool,
}

impl Transition {
    pub const NONE: Transition = Transition {
        started: false,
        finished: false,
    };
    const STARTED: Transition = Transition {
        started: true,
        finished: false,
    };
    const FINISHED: Transition = Transition {
        started: false,
        finished: true,
    };

    pub fn is_none(&self) -> bool {
        !self.started && !self.finished
    }

    fn and(self, other: Transition) -> Transition {
        Transition {
            started: self.started || other.started,
            finished: self.finished || other.finished,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hook {
    Start,
    End,
}

/// The user's start/end callbacks.
#[derive(Default)]
pub struct Hooks {
    pub start: Option<Callback>,
    pub end: Option<Callback>,
}

impl Hooks {
    pub fn slot(&mut self, hook: Hook) -> &mut Option<Callback> {
        match hook {
            Hook::Start => &mut self.start,
            Hook::End => &mut self.end,
        }
    }

    /// Run the hooks for `t`, start before end.
    pub fn fire(&mut self, t: Transition) {
        if t.started {
            if let Some(cb) = self.start.as_mut() {
                cb();
            }
        }
        if t.finished {
            if let Some(cb) = self.end.as_mut() {
                cb();
            }
        }
    }
}

/// State of one in-flight run.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub start_position: f64,
    pub end_position: f64,
    pub duration: f64,
    /// Latched from the first frame timestamp of the run.
    pub start_time: Option<f64>,
    pub pending_frame: Option<FrameHandle>,
}

impl Session {
    pub fn position_at(&self, elapsed: f64) -> f64 {
        ease_in_out_quad(
            elapsed.min(self.duration),
            self.start_position,
            self.end_position - self.start_position,
            self.duration,
        )
    }
}

pub struct ScrollAnimator<H: Host> {
    host: H,
    target: Option<<H as LayoutQuery>::Node>,
    padding: f64,
    custom_duration: Option<f64>,
    end_position: f64,
    main_audio: Option<<H as AudioFactory>::Track>,
    end_audio: Option<<H as AudioFactory>::Track>,
    hooks: Hooks,
    session: Option<Session>,
}

impl<H: Host> ScrollAnimator<H> {
    pub fn new(host: H, options: ElevatorOptions<<H as LayoutQuery>::Node>) -> Self {
        let custom_duration = options.custom_duration();
        let padding = options.padding();
        let main_audio = options
            .main_audio
            .url()
            .and_then(|url| host.load_audio(url, options.preload_audio, options.loop_audio));
        let end_audio = options
            .end_audio
            .url()
            .and_then(|url| host.load_audio(url, true, false));
        Self {
            host,
            target: options.target_element,
            padding,
            custom_duration,
            end_position: DEFAULT_END_POSITION,
            main_audio,
            end_audio,
            hooks: Hooks {
                start: options.start_callback,
                end: options.end_callback,
            },
            session: None,
        }
    }

    pub fn is_elevating(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn end_position(&self) -> f64 {
        self.end_position
    }

    pub fn custom_duration(&self) -> Option<f64> {
        self.custom_duration
    }

    pub fn has_main_audio(&self) -> bool {
        self.main_audio.is_some()
    }

    pub fn has_end_audio(&self) -> bool {
        self.end_audio.is_some()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Move the user hooks out, for owners that run them outside a borrow.
    pub fn take_hooks(&mut self) -> Hooks {
        std::mem::take(&mut self.hooks)
    }

    /// Run the hooks still held by the animator for `t`.
    pub fn notify(&mut self, t: Transition) {
        self.hooks.fire(t);
    }

    /// Re-read the target's live layout offset. Without a target the previous
    /// end position (initially the top) is kept.
    pub fn update_end_position(&mut self) -> f64 {
        if let Some(target) = &self.target {
            self.end_position = self.host.vertical_offset(target) - self.padding;
        }
        self.end_position
    }

    /// Start a run. No-op while one is already in flight.
    pub fn trigger(&mut self) -> Transition {
        if self.session.is_some() {
            log::debug!("[elevator] already elevating; trigger ignored");
            return Transition::NONE;
        }
        let start_position = self.host.scroll_offset();
        let end_position = self.update_end_position();
        let duration = self
            .custom_duration
            .unwrap_or_else(|| derived_duration(start_position, end_position));

        // Session goes in before any side effect that could re-enter.
        self.session = Some(Session {
            start_position,
            end_position,
            duration,
            start_time: None,
            pending_frame: None,
        });
        log::debug!(
            "[elevator] start {:.1} -> {:.1} over {:.0}ms",
            start_position,
            end_position,
            duration
        );

        if duration.is_nan() || duration <= 0.0 {
            self.host.scroll_to(end_position);
            return Transition::STARTED.and(self.finish());
        }

        let scheduled = self.schedule_next();
        if let Some(a) = &self.main_audio {
            a.play();
        }
        if scheduled {
            Transition::STARTED
        } else {
            Transition::STARTED.and(self.jump_and_finish())
        }
    }

    /// One animation frame. `timestamp` is the host's monotonic frame time in
    /// ms. Frames that arrive while idle are ignored.
    pub fn on_frame(&mut self, timestamp: f64) -> Transition {
        let Some(session) = self.session.as_mut() else {
            log::debug!("[elevator] stale frame at {:.1}ms ignored", timestamp);
            return Transition::NONE;
        };
        session.pending_frame = None;
        let start_time = *session.start_time.get_or_insert(timestamp);
        let elapsed = timestamp - start_time;
        let position = session.position_at(elapsed);
        let done = elapsed >= session.duration;

        self.host.scroll_to(position);

        if done {
            self.finish()
        } else if !self.schedule_next() {
            self.jump_and_finish()
        } else {
            Transition::NONE
        }
    }

    /// Focus loss: abandon the run but land on the destination. No end audio,
    /// no end callback.
    pub fn on_focus_lost(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        if let Some(handle) = session.pending_frame {
            self.host.cancel_frame(handle);
        }
        self.stop_main_audio();
        let end = self.update_end_position();
        log::debug!("[elevator] focus lost; jumping to {:.1}", end);
        self.host.scroll_to(end);
    }

    /// Drop any in-flight run without touching the scroll position.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            if let Some(handle) = session.pending_frame {
                self.host.cancel_frame(handle);
            }
            self.stop_main_audio();
        }
    }

    fn schedule_next(&mut self) -> bool {
        let handle = self.host.request_frame();
        match (self.session.as_mut(), handle) {
            (Some(session), Some(h)) => {
                session.pending_frame = Some(h);
                true
            }
            (_, None) => {
                log::warn!("[elevator] frame request refused; skipping animation");
                false
            }
            (None, Some(h)) => {
                self.host.cancel_frame(h);
                false
            }
        }
    }

    fn jump_and_finish(&mut self) -> Transition {
        match self.session.as_ref().map(|s| s.end_position) {
            Some(end) => {
                self.host.scroll_to(end);
                self.finish()
            }
            None => Transition::NONE,
        }
    }

    fn finish(&mut self) -> Transition {
        self.session = None;
        self.stop_main_audio();
        if let Some(a) = &self.end_audio {
            a.play();
        }
        log::debug!("[elevator] arrived at {:.1}", self.end_position);
        Transition::FINISHED
    }

    fn stop_main_audio(&self) {
        if let Some(a) = &self.main_audio {
            a.pause();
            a.rewind();
        }
    }
}

/// An animator shared with event handlers. Hooks live outside the animator's
/// cell and run after its borrow is released.
pub struct SharedAnimator<H: Host> {
    animator: RefCell<ScrollAnimator<H>>,
    hooks: RefCell<Hooks>,
}

impl<H: Host> SharedAnimator<H> {
    pub fn new(mut animator: ScrollAnimator<H>) -> Self {
        let hooks = animator.take_hooks();
        Self {
            animator: RefCell::new(animator),
            hooks: RefCell::new(hooks),
        }
    }

    /// Step the animator with `f`, then run whatever hooks the step crossed.
    /// Ignored if the animator is mid-step further up the stack.
    pub fn drive(&self, f: impl FnOnce(&mut ScrollAnimator<H>) -> Transition) -> Transition {
        let t = match self.animator.try_borrow_mut() {
            Ok(mut a) => f(&mut a),
            Err(_) => {
                log::debug!("[elevator] re-entrant step ignored");
                return Transition::NONE;
            }
        };
        if t.started {
            self.run_hook(Hook::Start);
        }
        if t.finished {
            self.run_hook(Hook::End);
        }
        t
    }

    // The callback is taken out while it runs, so a nested run that crosses
    // the same edge skips it instead of recursing.
    fn run_hook(&self, hook: Hook) {
        let cb = match self.hooks.try_borrow_mut() {
            Ok(mut h) => h.slot(hook).take(),
            Err(_) => None,
        };
        let Some(mut cb) = cb else {
            return;
        };
        cb();
        if let Ok(mut h) = self.hooks.try_borrow_mut() {
            h.slot(hook).get_or_insert(cb);
        }
    }

    pub fn trigger(&self) -> Transition {
        self.drive(|a| a.trigger())
    }

    pub fn on_frame(&self, timestamp: f64) -> Transition {
        self.drive(|a| a.on_frame(timestamp))
    }

    pub fn on_focus_lost(&self) {
        self.drive(|a| {
            a.on_focus_lost();
            Transition::NONE
        });
    }

    pub fn cancel(&self) {
        self.drive(|a| {
            a.cancel();
            Transition::NONE
        });
    }

    /// `false` while a step is in progress further up the stack.
    pub fn is_elevating(&self) -> bool {
        self.animator
            .try_borrow()
            .map(|a| a.is_elevating())
            .unwrap_or(false)
    }

    pub fn animator(&self) -> Ref<'_, ScrollAnimator<H>> {
        self.animator.borrow()
    }

    pub fn animator_mut(&self) -> RefMut<'_, ScrollAnimator<H>> {
        self.animator.borrow_mut()
    }
}
