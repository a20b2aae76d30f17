//! Per-kind movement rules
//!
//! Obstacles never move, the player follows raw directional input, towers
//! turn to face the player and missiles home in with bounded acceleration.

use glam::Vec2;

use super::state::{Entity, EntityKind};
use super::tick::TickInput;
use crate::consts::{MAX_MISSILE_SPEED, MISSILE_ACCEL, PLAYER_SPEED};
use crate::{heading_angle, unit_toward};

/// What every non-player entity steers against (the player's current motion)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Target {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Target {
    pub fn of(entity: &Entity) -> Self {
        Self {
            pos: entity.pos,
            vel: entity.vel,
        }
    }
}

impl TickInput {
    /// Combined intent vector. Left beats right and up beats down when both
    /// directions of an axis are held.
    pub fn intent(&self) -> Vec2 {
        let x = if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        };
        let y = if self.up {
            -1.0
        } else if self.down {
            1.0
        } else {
            0.0
        };
        Vec2::new(x, y)
    }
}

impl Entity {
    /// Move the player by its input. No-op for every other kind.
    ///
    /// Velocity is left untouched: the player's motion is pure displacement.
    pub fn apply_input(&mut self, input: &TickInput, dt: f32) {
        if !self.kind.is_player() {
            return;
        }
        let intent = input.intent();
        let len = intent.length();
        if len > 0.0 {
            self.pos += intent / len * PLAYER_SPEED * dt;
        }
    }

    /// Advance this entity one tick toward `target`
    pub fn update(&mut self, target: &Target, dt: f32) {
        match self.kind {
            EntityKind::Player | EntityKind::Obstacle => {}
            EntityKind::Tower(_) => self.face_target(target.pos, dt),
            EntityKind::Missile { .. } => self.home_in(target.pos, dt),
        }
    }

    /// Tower facing. Velocity here only drives orientation; the tower stays put.
    fn face_target(&mut self, target: Vec2, dt: f32) {
        let Some(heading) = unit_toward(self.pos, target) else {
            log::trace!("tower {} sits on its target, keeping facing", self.id);
            return;
        };
        self.vel = heading * PLAYER_SPEED * dt;
        self.orientation = heading_angle(self.vel);
    }

    /// Homing law: accelerate toward the target, cap speed, integrate.
    fn home_in(&mut self, target: Vec2, dt: f32) {
        match unit_toward(self.pos, target) {
            Some(heading) => self.vel += heading * MISSILE_ACCEL * dt,
            None => log::trace!("missile {} on target, no acceleration", self.id),
        }

        let speed = self.vel.length();
        if speed > MAX_MISSILE_SPEED {
            self.vel = self.vel / speed * MAX_MISSILE_SPEED;
        }

        self.pos += self.vel * dt;
        self.orientation = heading_angle(self.vel);
    }
}
