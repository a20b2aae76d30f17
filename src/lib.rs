//! Navex - dodge homing missiles fired from four corner towers
//!
//! Core modules:
//! - `sim`: Deterministic simulation (steering, collisions, spawning, game state)
//! - `renderer`: Immediate-mode drawing on top of macroquad
//! - `platform`: Keyboard/quit polling and frame pacing
//! - `settings`: Command-line configuration

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::StartupError;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (window size in pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Frame pacing
    pub const TARGET_FPS: u32 = 60;
    /// Largest dt fed to the simulation in one frame (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Player movement speed (pixels/s)
    pub const PLAYER_SPEED: f32 = 100.0;
    pub const PLAYER_RADIUS: f32 = 10.0;

    /// Missile homing acceleration (pixels/s²)
    pub const MISSILE_ACCEL: f32 = 240.0;
    /// Missile speed cap (pixels/s)
    pub const MAX_MISSILE_SPEED: f32 = 120.0;
    pub const MISSILE_RADIUS: f32 = 5.0;

    /// Towers sit in the corners, inset by their radius
    pub const TOWER_RADIUS: f32 = 10.0;
    pub const TOWER_INSET: f32 = 10.0;

    /// Obstacle layout
    pub const OBSTACLE_RADIUS: f32 = 20.0;
    pub const OBSTACLE_COUNT: usize = 4;
    /// Obstacles stay this far from the arena edges
    pub const OBSTACLE_MARGIN: f32 = 100.0;
    /// Extra per-axis gap kept between obstacles and the player spawn
    pub const OBSTACLE_CLEARANCE: f32 = 20.0;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Unit vector pointing from `from` to `to`.
///
/// Returns `None` when the points coincide (or the offset is not finite), so
/// callers can skip the heading update instead of dividing by zero.
#[inline]
pub fn unit_toward(from: Vec2, to: Vec2) -> Option<Vec2> {
    let offset = to - from;
    let len = offset.length();
    if len > 0.0 && len.is_finite() {
        Some(offset / len)
    } else {
        None
    }
}

/// Heading angle of a vector in radians, measured like `atan2(y, x)`
#[inline]
pub fn heading_angle(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}
