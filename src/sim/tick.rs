//! Simulation tick
//!
//! Advances the game by one frame: player input, spawning, steering,
//! collisions, then pruning.

use super::collision::{prune_dead, resolve_collisions};
use super::spawner::try_spawn;
use super::state::{GamePhase, GameState};
use super::steering::Target;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Window close requested
    pub quit: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::Ended {
        return;
    }
    if input.quit {
        log::info!("Quit requested after {} ticks", state.time_ticks);
        state.phase = GamePhase::Ended;
        return;
    }

    state.time_ticks += 1;
    state.elapsed_ms += f64::from(dt) * 1000.0;

    // Player moves first so everything else chases its fresh position
    let Some(player) = state.player_mut() else {
        state.phase = GamePhase::Ended;
        return;
    };
    player.apply_input(input, dt);
    let target = Target::of(player);

    try_spawn(state);

    for entity in &mut state.entities {
        entity.update(&target, dt);
    }

    let report = resolve_collisions(&mut state.entities);
    state.score += report.points;
    let removed = prune_dead(&mut state.entities);
    if report.hits > 0 {
        log::debug!(
            "tick {}: {} hits, +{} points, {} removed, score {}",
            state.time_ticks,
            report.hits,
            report.points,
            removed,
            state.score
        );
    }

    if state.player().is_none() {
        log::info!(
            "Player destroyed at tick {} with score {}",
            state.time_ticks,
            state.score
        );
        state.phase = GamePhase::Ended;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{OBSTACLE_RADIUS, PLAYER_SPEED};
    use crate::settings::SimConfig;
    use crate::sim::state::{EntityKind, TowerColor};
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn config(max_missiles: u32, missile_interval_ms: u64) -> SimConfig {
        SimConfig {
            max_missiles,
            missile_interval_ms,
        }
    }

    /// Standard arena with the random obstacles removed
    fn open_arena(max_missiles: u32, missile_interval_ms: u64) -> GameState {
        let mut state = GameState::new(config(max_missiles, missile_interval_ms), 12345);
        state.entities.retain(|e| !e.kind.is_obstacle());
        state
    }

    #[test]
    fn test_obstacle_on_spawn_ends_first_tick() {
        let mut state = open_arena(5, 100);
        let center = state.player().unwrap().pos;
        state.spawn_obstacle(center, 50.0);

        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.phase, GamePhase::Ended);
        assert!(state.player().is_none());
        assert_eq!(state.score, 0);
        assert_eq!(state.time_ticks, 1);
        // The obstacle survives
        assert_eq!(
            state.entities.iter().filter(|e| e.kind.is_obstacle()).count(),
            1
        );
    }

    #[test]
    fn test_no_missiles_when_max_is_zero() {
        let mut state = open_arena(0, 0);
        for _ in 0..600 {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.missile_count(), 0);
        assert_eq!(state.score, 0);
        assert!((state.elapsed_ms - 10_000.0).abs() < 1.0);
    }

    #[test]
    fn test_quit_ends_without_advancing() {
        let mut state = open_arena(1, 0);
        let input = TickInput {
            quit: true,
            right: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.phase, GamePhase::Ended);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.player().unwrap().pos, Vec2::new(400.0, 300.0));

        // Ended is terminal
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_player_moves_before_spawn_and_steering() {
        let mut state = open_arena(1, 0);
        let input = TickInput {
            up: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);

        let player = state.player().unwrap().pos;
        assert!((player.y - (300.0 - PLAYER_SPEED * DT)).abs() < 1e-3);

        // Towers face the moved player
        let red = state.tower(TowerColor::Red).unwrap();
        let expected = (player - red.pos).normalize();
        assert!((red.vel.normalize() - expected).length() < 1e-4);

        // The missile spawned this tick was already steered once
        assert_eq!(state.missile_count(), 1);
        let missile = state
            .entities
            .iter()
            .find(|e| e.kind.is_missile())
            .unwrap();
        assert!(missile.vel.length() > 0.0);
    }

    #[test]
    fn test_missile_hits_obstacle_scores() {
        let mut state = open_arena(0, 0);
        state.spawn_obstacle(Vec2::new(200.0, 200.0), OBSTACLE_RADIUS);
        state.spawn_missile(TowerColor::Red, Vec2::new(200.0, 218.0));

        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.score, 1);
        assert_eq!(state.missile_count(), 0);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_missiles_colliding_score_two() {
        let mut state = open_arena(0, 0);
        state.spawn_missile(TowerColor::Red, Vec2::new(600.0, 100.0));
        state.spawn_missile(TowerColor::Cyan, Vec2::new(603.0, 100.0));

        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.score, 2);
        assert_eq!(state.missile_count(), 0);
    }

    #[test]
    fn test_missile_reaches_player() {
        let mut state = open_arena(0, 0);
        state.spawn_missile(TowerColor::Green, Vec2::new(400.0, 200.0));

        let mut ticks = 0;
        while state.is_running() && ticks < 10_000 {
            tick(&mut state, &TickInput::default(), DT);
            ticks += 1;
        }

        assert_eq!(state.phase, GamePhase::Ended);
        assert_eq!(state.score, 1);
        assert!(state.player().is_none());
    }

    #[test]
    fn test_missing_player_ends_run() {
        let mut state = open_arena(0, 0);
        state.entities.retain(|e| e.kind != EntityKind::Player);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Ended);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(config(4, 200), 99999);
        let mut state2 = GameState::new(config(4, 200), 99999);

        let inputs = [
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput {
                down: true,
                right: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for step in 0..300 {
            let input = &inputs[step % inputs.len()];
            tick(&mut state1, input, DT);
            tick(&mut state2, input, DT);
        }

        let snap1 = serde_json::to_string(&state1).unwrap();
        let snap2 = serde_json::to_string(&state2).unwrap();
        assert_eq!(snap1, snap2);
    }
}
