//! Platform abstraction layer
//!
//! Thin wrappers over the window library for:
//! - Input events (keyboard state, quit requests)
//! - Time (frame delta and frame pacing)

pub mod input;
pub mod time;

pub use input::{InputSource, KeyState, WindowInput, poll_input};
pub use time::{FrameLimiter, sim_dt};
