/// Scroll timing and option defaults.
///
/// Kept in one place so the host-side tests and the browser bindings agree on
/// the same numbers.
// Travel speed when no explicit duration is configured (ms per pixel)
pub const SCROLL_MS_PER_PX: f64 = 1.5;

// Option defaults applied to fields the caller left undefined
pub const DEFAULT_PRELOAD_AUDIO: bool = true;
pub const DEFAULT_LOOP_AUDIO: bool = true;

// Scroll destination when no target element is configured (top of document)
pub const DEFAULT_END_POSITION: f64 = 0.0;

// DOM event names
pub const CLICK_EVENT: &str = "click";
pub const BLUR_EVENT: &str = "blur";

// Window properties that must exist for the effect to run
pub const REQUIRED_WINDOW_APIS: [&str; 3] = ["requestAnimationFrame", "Audio", "addEventListener"];
