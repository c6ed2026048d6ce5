pub mod animator;
pub mod easing;
pub mod host;
pub mod options;

pub use animator::*;
pub use easing::*;
pub use host::*;
pub use options::*;
