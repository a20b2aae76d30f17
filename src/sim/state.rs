//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`, so a single tick
//! can be driven in isolation from tests.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawner::Spawner;
use crate::consts::*;
use crate::settings::SimConfig;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player destroyed or quit requested (terminal)
    Ended,
}

/// Identity of a tower, also carried by every missile it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerColor {
    Red,
    Cyan,
    Yellow,
    Green,
}

impl TowerColor {
    /// All towers, in spawn order
    pub const ALL: [TowerColor; 4] = [
        TowerColor::Red,
        TowerColor::Cyan,
        TowerColor::Green,
        TowerColor::Yellow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TowerColor::Red => "red",
            TowerColor::Cyan => "cyan",
            TowerColor::Yellow => "yellow",
            TowerColor::Green => "green",
        }
    }

    /// Corner position of this tower inside an arena of the given size
    pub fn corner(&self, width: f32, height: f32) -> Vec2 {
        let (left, top) = (TOWER_INSET, TOWER_INSET);
        let (right, bottom) = (width - TOWER_INSET, height - TOWER_INSET);
        match self {
            TowerColor::Red => Vec2::new(left, top),
            TowerColor::Cyan => Vec2::new(right, bottom),
            TowerColor::Yellow => Vec2::new(right, top),
            TowerColor::Green => Vec2::new(left, bottom),
        }
    }
}

/// Entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Tower(TowerColor),
    Missile { origin: TowerColor },
    Obstacle,
}

impl EntityKind {
    #[inline]
    pub fn is_player(&self) -> bool {
        matches!(self, EntityKind::Player)
    }

    #[inline]
    pub fn is_tower(&self) -> bool {
        matches!(self, EntityKind::Tower(_))
    }

    #[inline]
    pub fn is_missile(&self) -> bool {
        matches!(self, EntityKind::Missile { .. })
    }

    #[inline]
    pub fn is_obstacle(&self) -> bool {
        matches!(self, EntityKind::Obstacle)
    }
}

/// A simulated circle in the arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Facing direction (radians)
    pub orientation: f32,
    /// Cleared once by collision resolution; dead entities are pruned the same tick
    pub alive: bool,
}

impl Entity {
    pub fn new(id: u32, kind: EntityKind, pos: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "entity radius must be positive");
        Self {
            id,
            kind,
            pos,
            vel: Vec2::ZERO,
            radius,
            orientation: 0.0,
            alive: true,
        }
    }

    /// Mark the entity destroyed
    #[inline]
    pub fn kill(&mut self) {
        self.alive = false;
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Arena size (pixels)
    pub width: f32,
    pub height: f32,
    /// Score
    pub score: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulated time since the run started (milliseconds)
    pub elapsed_ms: f64,
    /// Missile spawner
    pub spawner: Spawner,
    /// Live entities, in insertion order
    pub entities: Vec<Entity>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create the standard arena: player at center, a tower in every
    /// corner and randomly placed obstacles.
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let mut state = Self::empty(config, seed, ARENA_WIDTH, ARENA_HEIGHT);

        let center = Vec2::new(state.width / 2.0, state.height / 2.0);
        state.spawn(EntityKind::Player, center, PLAYER_RADIUS);
        for color in TowerColor::ALL {
            let pos = color.corner(state.width, state.height);
            state.spawn(EntityKind::Tower(color), pos, TOWER_RADIUS);
        }
        for _ in 0..OBSTACLE_COUNT {
            let pos = state.random_obstacle_position(center);
            state.spawn_obstacle(pos, OBSTACLE_RADIUS);
        }

        log::debug!(
            "Arena ready: {} entities, seed {}",
            state.entities.len(),
            seed
        );
        state
    }

    /// Create a state with no entities at all
    pub fn empty(config: SimConfig, seed: u64, width: f32, height: f32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            width,
            height,
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            elapsed_ms: 0.0,
            spawner: Spawner::new(config.max_missiles, config.missile_interval_ms),
            entities: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an entity and return its ID
    pub fn spawn(&mut self, kind: EntityKind, pos: Vec2, radius: f32) -> u32 {
        let id = self.next_entity_id();
        self.entities.push(Entity::new(id, kind, pos, radius));
        id
    }

    pub fn spawn_obstacle(&mut self, pos: Vec2, radius: f32) -> u32 {
        self.spawn(EntityKind::Obstacle, pos, radius)
    }

    pub fn spawn_missile(&mut self, origin: TowerColor, pos: Vec2) -> u32 {
        self.spawn(EntityKind::Missile { origin }, pos, MISSILE_RADIUS)
    }

    /// The player, if still alive
    pub fn player(&self) -> Option<&Entity> {
        self.entities.iter().find(|e| e.kind.is_player())
    }

    pub fn player_mut(&mut self) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.kind.is_player())
    }

    pub fn tower(&self, color: TowerColor) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|e| e.kind == EntityKind::Tower(color))
    }

    /// Number of missiles currently in flight
    pub fn missile_count(&self) -> usize {
        self.entities.iter().filter(|e| e.kind.is_missile()).count()
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Simulation RNG (seeded, serialized with the state)
    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Pick an obstacle position inside the margins that keeps clear of
    /// `avoid` on both axes.
    fn random_obstacle_position(&mut self, avoid: Vec2) -> Vec2 {
        let clearance = PLAYER_RADIUS + OBSTACLE_CLEARANCE;
        let x_range = OBSTACLE_MARGIN..=(self.width - OBSTACLE_MARGIN);
        let y_range = OBSTACLE_MARGIN..=(self.height - OBSTACLE_MARGIN);

        let mut x = self.rng.random_range(x_range.clone());
        while (avoid.x - x).abs() < clearance {
            x = self.rng.random_range(x_range.clone());
        }
        let mut y = self.rng.random_range(y_range.clone());
        while (avoid.y - y).abs() < clearance {
            y = self.rng.random_range(y_range.clone());
        }
        Vec2::new(x, y)
    }
}
