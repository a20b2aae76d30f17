//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through the `dt` passed to `tick`
//! - Seeded RNG only
//! - Stable iteration order (insertion order of entities)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawner;
pub mod state;
pub mod steering;
pub mod tick;

pub use collision::{CollisionReport, circles_overlap, prune_dead, resolve_collisions};
pub use spawner::{Spawner, try_spawn};
pub use state::{Entity, EntityKind, GamePhase, GameState, TowerColor};
pub use steering::Target;
pub use tick::{TickInput, tick};
