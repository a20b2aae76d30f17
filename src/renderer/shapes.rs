//! Colors and primitives for each entity kind

use glam::Vec2;
use macroquad::color::Color;
use macroquad::shapes::{draw_circle, draw_line};

use crate::sim::{Entity, EntityKind, TowerColor};

/// Arena background (dodger blue 4)
pub fn background() -> Color {
    Color::from_rgba(16, 78, 139, 255)
}

pub fn score_text() -> Color {
    Color::from_rgba(255, 255, 255, 255)
}

/// Tower color, shared by the missiles it fires
pub fn tower_color(color: TowerColor) -> Color {
    match color {
        TowerColor::Red => Color::from_rgba(255, 0, 0, 255),
        TowerColor::Cyan => Color::from_rgba(0, 255, 255, 255),
        TowerColor::Yellow => Color::from_rgba(255, 255, 0, 255),
        TowerColor::Green => Color::from_rgba(0, 255, 0, 255),
    }
}

/// Fill color of an entity
pub fn fill_color(kind: EntityKind) -> Color {
    match kind {
        // Deep pink
        EntityKind::Player => Color::from_rgba(255, 20, 147, 255),
        EntityKind::Tower(color) | EntityKind::Missile { origin: color } => tower_color(color),
        // Gray 90
        EntityKind::Obstacle => Color::from_rgba(229, 229, 229, 255),
    }
}

/// A line showing which way an entity faces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacingLine {
    pub from: Vec2,
    pub to: Vec2,
    pub thickness: f32,
    pub color: Color,
}

/// Facing indicator: towers get a long black barrel, missiles a short white
/// nose. Players and obstacles have none.
pub fn facing_line(entity: &Entity) -> Option<FacingLine> {
    let (length, thickness, color) = match entity.kind {
        EntityKind::Tower(_) => (entity.radius * 2.0, 4.0, Color::from_rgba(0, 0, 0, 255)),
        EntityKind::Missile { .. } => (entity.radius, 2.0, Color::from_rgba(255, 255, 255, 255)),
        EntityKind::Player | EntityKind::Obstacle => return None,
    };
    let dir = Vec2::new(entity.orientation.cos(), entity.orientation.sin());
    Some(FacingLine {
        from: entity.pos,
        to: entity.pos + dir * length,
        thickness,
        color,
    })
}

/// Draw one entity: a filled circle plus its facing line
pub fn draw_entity(entity: &Entity) {
    draw_circle(
        entity.pos.x,
        entity.pos.y,
        entity.radius,
        fill_color(entity.kind),
    );
    if let Some(line) = facing_line(entity) {
        draw_line(
            line.from.x,
            line.from.y,
            line.to.x,
            line.to.y,
            line.thickness,
            line.color,
        );
    }
}
