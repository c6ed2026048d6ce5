//! Construction options and the defaults merge.
//!
//! `RawOptions` mirrors the bag a caller hands in: every field is optional and
//! `None` means "left undefined". `with_defaults` fills only those undefined
//! fields; anything the caller set explicitly (including `false`) is kept.

use crate::constants::{DEFAULT_LOOP_AUDIO, DEFAULT_PRELOAD_AUDIO};

/// User hook invoked when a run starts or finishes.
pub type Callback = Box<dyn FnMut()>;

/// Audio option: a URL to load, or switched off.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AudioSource {
    Url(String),
    #[default]
    Off,
}

impl AudioSource {
    pub fn url(&self) -> Option<&str> {
        match self {
            AudioSource::Url(u) if !u.is_empty() => Some(u),
            _ => None,
        }
    }

    pub fn is_off(&self) -> bool {
        self.url().is_none()
    }
}

/// `N` is the host's layout node type. The click target (`element`) is not
/// part of this bag: it is wiring, handled by whoever installs listeners.
pub struct RawOptions<N> {
    pub duration: Option<f64>,
    pub main_audio: Option<AudioSource>,
    pub end_audio: Option<AudioSource>,
    pub preload_audio: Option<bool>,
    pub loop_audio: Option<bool>,
    pub start_callback: Option<Callback>,
    pub end_callback: Option<Callback>,
    pub target_element: Option<N>,
    pub vertical_padding: Option<f64>,
}

impl<N> Default for RawOptions<N> {
    fn default() -> Self {
        Self {
            duration: None,
            main_audio: None,
            end_audio: None,
            preload_audio: None,
            loop_audio: None,
            start_callback: None,
            end_callback: None,
            target_element: None,
            vertical_padding: None,
        }
    }
}

pub struct ElevatorOptions<N> {
    /// Fixed duration in ms; see [`ElevatorOptions::custom_duration`].
    pub duration: Option<f64>,
    pub main_audio: AudioSource,
    pub end_audio: AudioSource,
    pub preload_audio: bool,
    pub loop_audio: bool,
    pub start_callback: Option<Callback>,
    pub end_callback: Option<Callback>,
    /// Scroll destination; the top of the document when absent.
    pub target_element: Option<N>,
    pub vertical_padding: Option<f64>,
}

impl<N> RawOptions<N> {
    pub fn with_defaults(self) -> ElevatorOptions<N> {
        ElevatorOptions {
            duration: self.duration,
            main_audio: self.main_audio.unwrap_or_default(),
            end_audio: self.end_audio.unwrap_or_default(),
            preload_audio: self.preload_audio.unwrap_or(DEFAULT_PRELOAD_AUDIO),
            loop_audio: self.loop_audio.unwrap_or(DEFAULT_LOOP_AUDIO),
            start_callback: self.start_callback,
            end_callback: self.end_callback,
            target_element: self.target_element,
            vertical_padding: self.vertical_padding,
        }
    }
}

impl<N> Default for ElevatorOptions<N> {
    fn default() -> Self {
        RawOptions::default().with_defaults()
    }
}

impl<N> ElevatorOptions<N> {
    /// The configured duration, if it is usable as a fixed duration.
    /// Zero and NaN count as "not configured", so the duration is derived from
    /// distance instead.
    pub fn custom_duration(&self) -> Option<f64> {
        self.duration.filter(|d| *d != 0.0 && !d.is_nan())
    }

    /// Padding subtracted from the target offset; zero when unset.
    pub fn padding(&self) -> f64 {
        self.vertical_padding
            .filter(|p| p.is_finite())
            .unwrap_or(0.0)
    }
}
