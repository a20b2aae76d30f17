//! Throttled missile spawning
//!
//! At most one missile per tick, never more than `max_missiles` in flight,
//! and never two within `interval_ms` of simulated time.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{GameState, TowerColor};

/// Spawner configuration and timing state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    /// Maximum missiles in flight at once
    pub max_missiles: u32,
    /// Minimum simulated time between spawns (milliseconds)
    pub interval_ms: u64,
    /// Simulated time of the last spawn (milliseconds, 0 = run start)
    pub last_spawn_ms: f64,
}

impl Spawner {
    pub fn new(max_missiles: u32, interval_ms: u64) -> Self {
        Self {
            max_missiles,
            interval_ms,
            last_spawn_ms: 0.0,
        }
    }

    /// Whether a spawn is allowed with `in_flight` missiles at time `now_ms`
    pub fn ready(&self, in_flight: usize, now_ms: f64) -> bool {
        in_flight < self.max_missiles as usize
            && now_ms - self.last_spawn_ms >= self.interval_ms as f64
    }
}

/// Spawn one missile from a random tower if the spawner allows it.
///
/// Returns the new missile's ID.
pub fn try_spawn(state: &mut GameState) -> Option<u32> {
    let now = state.elapsed_ms;
    if !state.spawner.ready(state.missile_count(), now) {
        return None;
    }

    let color = TowerColor::ALL[state.rng().random_range(0..TowerColor::ALL.len())];
    // A missing tower (only possible in hand-built arenas) skips this spawn
    let origin = state.tower(color)?.pos;

    let id = state.spawn_missile(color, origin);
    state.spawner.last_spawn_ms = now;
    log::debug!(
        "spawned missile #{} from {} tower at {:.0}ms ({} in flight)",
        id,
        color.as_str(),
        now,
        state.missile_count()
    );
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MISSILE_RADIUS;
    use crate::settings::SimConfig;
    use crate::sim::state::EntityKind;

    fn state(max_missiles: u32, missile_interval_ms: u64) -> GameState {
        GameState::new(
            SimConfig {
                max_missiles,
                missile_interval_ms,
            },
            1234,
        )
    }

    #[test]
    fn test_waits_for_interval() {
        let mut state = state(5, 1000);
        state.elapsed_ms = 999.0;
        assert!(try_spawn(&mut state).is_none());
        state.elapsed_ms = 1000.0;
        assert!(try_spawn(&mut state).is_some());
        assert_eq!(state.spawner.last_spawn_ms, 1000.0);

        state.elapsed_ms = 1500.0;
        assert!(try_spawn(&mut state).is_none());
        state.elapsed_ms = 2000.0;
        assert!(try_spawn(&mut state).is_some());
        assert_eq!(state.missile_count(), 2);
    }

    #[test]
    fn test_respects_max_in_flight() {
        let mut state = state(2, 0);
        for step in 0..10 {
            state.elapsed_ms = step as f64 * 100.0;
            try_spawn(&mut state);
            assert!(state.missile_count() <= 2);
        }
        assert_eq!(state.missile_count(), 2);
    }

    #[test]
    fn test_zero_max_never_spawns() {
        let mut state = state(0, 0);
        for step in 0..100 {
            state.elapsed_ms = step as f64 * 1000.0;
            assert!(try_spawn(&mut state).is_none());
        }
        assert_eq!(state.missile_count(), 0);
    }

    #[test]
    fn test_missile_starts_on_its_tower() {
        let mut state = state(1, 0);
        let id = try_spawn(&mut state).unwrap();
        let missile = state.entities.iter().find(|e| e.id == id).unwrap();
        let EntityKind::Missile { origin } = missile.kind else {
            panic!("expected a missile, got {:?}", missile.kind);
        };
        assert_eq!(missile.pos, state.tower(origin).unwrap().pos);
        assert_eq!(missile.radius, MISSILE_RADIUS);
        assert_eq!(missile.vel, glam::Vec2::ZERO);
    }

    #[test]
    fn test_origins_cover_all_towers() {
        let mut state = state(u32::MAX, 0);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            if let Some(id) = try_spawn(&mut state) {
                let missile = state.entities.iter().find(|e| e.id == id).unwrap();
                if let EntityKind::Missile { origin } = missile.kind {
                    seen.insert(origin);
                }
            }
        }
        assert_eq!(seen.len(), 4);
    }
}
