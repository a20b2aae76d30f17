//! Collision detection and response between circles
//!
//! Every unordered pair is tested once per tick. Towers are ghosts: they never
//! take part in a collision outcome. Obstacles are immortal and destroy
//! whatever touches them; any other overlapping pair destroys both members.
//! Each missile involved in a collision is worth one point.

use super::state::Entity;
use crate::distance;

/// Outcome of one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Points earned this pass
    pub points: u64,
    /// Number of overlapping pairs that were resolved
    pub hits: u32,
    /// Whether the player was marked dead
    pub player_hit: bool,
}

/// Whether two circles overlap (touching edges do not count)
#[inline]
pub fn circles_overlap(a: &Entity, b: &Entity) -> bool {
    distance(a.pos, b.pos) < a.radius + b.radius
}

/// Test every pair and mark the losers dead.
///
/// Runs against the current contents of `entities` without removing anything,
/// so an entity killed earlier in the pass still collides with later ones.
pub fn resolve_collisions(entities: &mut [Entity]) -> CollisionReport {
    let mut report = CollisionReport::default();

    for i in 0..entities.len() {
        if entities[i].kind.is_tower() {
            continue;
        }
        for j in (i + 1)..entities.len() {
            let (head, tail) = entities.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            if b.kind.is_tower() || !circles_overlap(a, b) {
                continue;
            }
            resolve_pair(a, b, &mut report);
        }
    }

    report
}

fn resolve_pair(a: &mut Entity, b: &mut Entity, report: &mut CollisionReport) {
    match (a.kind.is_obstacle(), b.kind.is_obstacle()) {
        // Two obstacles never hurt each other
        (true, true) => return,
        (true, false) => b.kill(),
        (false, true) => a.kill(),
        (false, false) => {
            a.kill();
            b.kill();
        }
    }

    report.hits += 1;
    for member in [&*a, &*b] {
        if member.kind.is_missile() {
            report.points += 1;
        }
        if member.kind.is_player() && !member.alive {
            report.player_hit = true;
        }
    }

    log::debug!(
        "collision {:?}#{} x {:?}#{}",
        a.kind,
        a.id,
        b.kind,
        b.id
    );
}

/// Drop every dead entity, returning how many were removed
pub fn prune_dead(entities: &mut Vec<Entity>) -> usize {
    let before = entities.len();
    entities.retain(|e| e.alive);
    before - entities.len()
}
