#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Turn resolution: decides which enemies are blocked and which breach.

use castle_defender_core::{CastleMap, CellCoord, Enemy, Guard, TurnResolution};
use castle_defender_system_pathfinding::Pathfinder;
use log::trace;

/// Resolver that keeps its pathfinding workspace alive between turns.
#[derive(Clone, Debug, Default)]
pub struct TurnResolver {
    pathfinder: Pathfinder,
    occupied: Vec<CellCoord>,
}

impl TurnResolver {
    /// Creates a resolver with an empty workspace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes every enemy from its spawn to the keep around `guards`.
    ///
    /// Inputs are left untouched; the returned resolution holds fresh enemy
    /// records positioned back on their spawn cells.
    pub fn resolve(
        &mut self,
        enemies: &[Enemy],
        guards: &[Guard],
        map: &CastleMap,
    ) -> TurnResolution {
        self.occupied.clear();
        self.occupied.extend(guards.iter().map(|guard| guard.cell));

        let Self {
            pathfinder,
            occupied,
        } = self;
        resolve_turn_with(enemies, map, |enemy| {
            pathfinder.find_path(map, enemy.spawn, map.keep(), occupied.iter().copied())
        })
    }
}

/// One-shot form of [`TurnResolver::resolve`].
#[must_use]
pub fn resolve_turn(enemies: &[Enemy], guards: &[Guard], map: &CastleMap) -> TurnResolution {
    TurnResolver::new().resolve(enemies, guards, map)
}

/// Resolves a turn using `route` to compute each enemy's path.
///
/// An enemy is blocked exactly when its route is empty and breaches exactly
/// when its route ends on the keep. A non-empty route that stops short of the
/// keep is neither.
pub fn resolve_turn_with<F>(enemies: &[Enemy], map: &CastleMap, mut route: F) -> TurnResolution
where
    F: FnMut(&Enemy) -> Vec<CellCoord>,
{
    let keep = map.keep();
    let mut blocked_count = 0;
    let mut breached_count = 0;

    let resolved: Vec<Enemy> = enemies
        .iter()
        .map(|enemy| {
            let path = route(enemy);
            let blocked = path.is_empty();
            let reached_keep = path.last() == Some(&keep);
            if blocked {
                blocked_count += 1;
            }
            if reached_keep {
                breached_count += 1;
            }
            trace!(
                "enemy {} ({}) from {}: {} cells, blocked={blocked}, breach={reached_keep}",
                enemy.id.get(),
                enemy.kind.label(),
                enemy.spawn,
                path.len()
            );

            Enemy {
                current: enemy.spawn,
                direction: enemy.gate.heading(),
                path,
                path_index: 0,
                blocked,
                reached_keep,
                ..enemy.clone()
            }
        })
        .collect();

    TurnResolution {
        enemies: resolved,
        blocked_count,
        breached_count,
        success: breached_count == 0,
    }
}
