#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Hint engine proposing a single guard placement.

use castle_defender_core::{
    is_valid_placement, CastleMap, CellCoord, Enemy, Guard, PlacementHint,
};
use castle_defender_system_pathfinding::Pathfinder;
use log::debug;

/// Index along a route of the cell a hint proposes to guard.
const INTERDICTION_INDEX: usize = 2;

/// Hint engine that keeps its pathfinding workspace between requests.
#[derive(Clone, Debug, Default)]
pub struct HintEngine {
    pathfinder: Pathfinder,
    occupied: Vec<CellCoord>,
}

impl HintEngine {
    /// Creates a hint engine with an empty workspace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Proposes a guard placement interdicting the longest open route.
    ///
    /// Every enemy is re-routed from its spawn regardless of its recorded
    /// outcome. The candidate for an enemy is the third cell of its route, or
    /// the last cell when the route is shorter, and is only kept when it is a
    /// legal placement. Among candidates the longest route wins; equal lengths
    /// keep the lowest enemy id.
    pub fn suggest(
        &mut self,
        enemies: &[Enemy],
        guards: &[Guard],
        map: &CastleMap,
    ) -> Option<PlacementHint> {
        self.occupied.clear();
        self.occupied.extend(guards.iter().map(|guard| guard.cell));

        let mut ordered: Vec<&Enemy> = enemies.iter().collect();
        ordered.sort_by_key(|enemy| enemy.id);

        let mut best: Option<PlacementHint> = None;
        for enemy in ordered {
            let route = self.pathfinder.find_path(
                map,
                enemy.spawn,
                map.keep(),
                self.occupied.iter().copied(),
            );
            if route.len() <= 1 {
                continue;
            }

            let cell = route[INTERDICTION_INDEX.min(route.len() - 1)];
            if !is_valid_placement(cell, map, guards) {
                continue;
            }

            let candidate = PlacementHint {
                cell,
                enemy: enemy.id,
                route_length: route.len(),
            };
            if best.map_or(true, |current| candidate.route_length > current.route_length) {
                best = Some(candidate);
            }
        }

        debug!("hint requested for {} enemies: {best:?}", enemies.len());
        best
    }
}

/// One-shot form of [`HintEngine::suggest`].
#[must_use]
pub fn suggest_placement(
    enemies: &[Enemy],
    guards: &[Guard],
    map: &CastleMap,
) -> Option<PlacementHint> {
    HintEngine::new().suggest(enemies, guards, map)
}
