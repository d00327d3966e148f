#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! A* shortest-path search from a spawn cell to the keep.
//!
//! The search is 4-connected and uses the Manhattan heuristic, which is
//! admissible and consistent on this grid, so the first time the goal leaves
//! the open set its route is optimal. Walls and guard-occupied cells are
//! impassable, except the goal itself which is always enterable. Ties on `f`
//! are broken by lowest row, then lowest column, so identical inputs always
//! produce identical routes.

use std::collections::BTreeSet;

use castle_defender_core::{CastleMap, CellCoord};
use log::trace;

/// Reusable A* workspace.
///
/// Score, parent and closed buffers are dense, row-major and sized to the
/// map, so running the search for every enemy of a turn allocates only the
/// returned route.
#[derive(Clone, Debug, Default)]
pub struct Pathfinder {
    g_scores: Vec<u32>,
    came_from: Vec<Option<usize>>,
    closed: Vec<bool>,
    occupied: Vec<bool>,
    open: BTreeSet<OpenNode>,
    expansions: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenNode {
    f: u32,
    row: u32,
    column: u32,
}

impl OpenNode {
    fn at(cell: CellCoord, g: u32, goal: CellCoord) -> Self {
        Self {
            f: g + cell.manhattan_distance(goal),
            row: cell.row(),
            column: cell.column(),
        }
    }

    fn cell(self) -> CellCoord {
        CellCoord::new(self.column, self.row)
    }
}

impl Pathfinder {
    /// Creates an empty workspace. Buffers grow on first use.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the shortest route from `start` to `goal`.
    ///
    /// The returned route begins with `start` and ends with `goal`. It is
    /// empty when no route exists or when either endpoint is a wall or lies
    /// off the map.
    pub fn find_path<I>(
        &mut self,
        map: &CastleMap,
        start: CellCoord,
        goal: CellCoord,
        occupied: I,
    ) -> Vec<CellCoord>
    where
        I: IntoIterator<Item = CellCoord>,
    {
        self.prepare(map, occupied);

        let passable = |cell| map.terrain(cell).is_some_and(|terrain| terrain.is_passable());
        if !passable(start) || !passable(goal) {
            return Vec::new();
        }
        if start == goal {
            return vec![start];
        }

        let (Some(start_index), Some(goal_index)) = (map.index(start), map.index(goal)) else {
            return Vec::new();
        };

        self.g_scores[start_index] = 0;
        let _ = self.open.insert(OpenNode::at(start, 0, goal));

        while let Some(node) = self.open.pop_first() {
            let cell = node.cell();
            let Some(index) = map.index(cell) else {
                continue;
            };
            if self.closed[index] {
                continue;
            }
            if index == goal_index {
                let route = self.reconstruct(map, start_index, goal_index);
                trace!(
                    "route {start} -> {goal}: {} cells after {} expansions",
                    route.len(),
                    self.expansions
                );
                return route;
            }

            self.closed[index] = true;
            self.expansions += 1;
            let next_g = self.g_scores[index] + 1;

            for neighbor in neighbors(cell, map.size()) {
                let Some(neighbor_index) = map.index(neighbor) else {
                    continue;
                };
                if self.closed[neighbor_index] || !passable(neighbor) {
                    continue;
                }
                if self.occupied[neighbor_index] && neighbor_index != goal_index {
                    continue;
                }
                if next_g >= self.g_scores[neighbor_index] {
                    continue;
                }

                self.g_scores[neighbor_index] = next_g;
                self.came_from[neighbor_index] = Some(index);
                let _ = self.open.insert(OpenNode::at(neighbor, next_g, goal));
            }
        }

        trace!(
            "no route {start} -> {goal} after {} expansions",
            self.expansions
        );
        Vec::new()
    }

    /// Number of cells expanded by the most recent search.
    #[must_use]
    pub fn last_expansions(&self) -> usize {
        self.expansions
    }

    fn prepare<I>(&mut self, map: &CastleMap, occupied: I)
    where
        I: IntoIterator<Item = CellCoord>,
    {
        let cell_count = map.cell_count();
        if self.g_scores.len() != cell_count {
            self.g_scores = vec![u32::MAX; cell_count];
            self.came_from = vec![None; cell_count];
            self.closed = vec![false; cell_count];
            self.occupied = vec![false; cell_count];
        } else {
            self.g_scores.fill(u32::MAX);
            self.came_from.fill(None);
            self.closed.fill(false);
            self.occupied.fill(false);
        }
        self.open.clear();
        self.expansions = 0;

        for cell in occupied {
            if let Some(index) = map.index(cell) {
                self.occupied[index] = true;
            }
        }
    }

    fn reconstruct(&self, map: &CastleMap, start_index: usize, goal_index: usize) -> Vec<CellCoord> {
        let mut route = Vec::new();
        let mut cursor = Some(goal_index);
        while let Some(index) = cursor {
            if let Some(cell) = map.cell_at(index) {
                route.push(cell);
            }
            if index == start_index {
                break;
            }
            cursor = self.came_from[index];
        }
        route.reverse();
        route
    }
}

/// One-shot convenience wrapper around [`Pathfinder::find_path`].
#[must_use]
pub fn find_path(
    map: &CastleMap,
    start: CellCoord,
    goal: CellCoord,
    occupied: &[CellCoord],
) -> Vec<CellCoord> {
    Pathfinder::new().find_path(map, start, goal, occupied.iter().copied())
}

fn neighbors(cell: CellCoord, size: u32) -> impl Iterator<Item = CellCoord> {
    let mut candidates = [None; 4];
    let mut count = 0;

    if let Some(row) = cell.row().checked_sub(1) {
        candidates[count] = Some(CellCoord::new(cell.column(), row));
        count += 1;
    }

    if let Some(column) = cell.column().checked_add(1) {
        if column < size {
            candidates[count] = Some(CellCoord::new(column, cell.row()));
            count += 1;
        }
    }

    if let Some(row) = cell.row().checked_add(1) {
        if row < size {
            candidates[count] = Some(CellCoord::new(cell.column(), row));
            count += 1;
        }
    }

    if let Some(column) = cell.column().checked_sub(1) {
        candidates[count] = Some(CellCoord::new(column, cell.row()));
        count += 1;
    }

    candidates.into_iter().take(count).flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use castle_defender_core::{Gate, Terrain};

    fn map(size: u32) -> CastleMap {
        CastleMap::generate(size).expect("valid size")
    }

    #[test]
    fn neighbors_respect_bounds() {
        let corner: Vec<_> = neighbors(CellCoord::new(0, 0), 3).collect();
        assert_eq!(corner, vec![CellCoord::new(1, 0), CellCoord::new(0, 1)]);

        let center: Vec<_> = neighbors(CellCoord::new(1, 1), 3).collect();
        assert_eq!(center.len(), 4);
    }

    #[test]
    fn north_gate_walks_straight_to_keep() {
        let map = map(8);
        let route = find_path(&map, map.gate(Gate::North), map.keep(), &[]);

        let expected: Vec<CellCoord> = (0..=4).map(|row| CellCoord::new(4, row)).collect();
        assert_eq!(route, expected);
    }

    #[test]
    fn start_equal_to_goal_yields_single_cell() {
        let map = map(5);
        assert_eq!(
            find_path(&map, map.keep(), map.keep(), &[]),
            vec![map.keep()]
        );
    }

    #[test]
    fn wall_endpoints_yield_empty_route() {
        let map = map(6);
        assert!(find_path(&map, CellCoord::new(0, 0), map.keep(), &[]).is_empty());
        assert!(find_path(&map, map.keep(), CellCoord::new(5, 5), &[]).is_empty());
        assert!(find_path(&map, CellCoord::new(9, 9), map.keep(), &[]).is_empty());
    }

    #[test]
    fn guard_forces_detour() {
        let map = map(8);
        let guard = CellCoord::new(4, 2);
        let route = find_path(&map, map.gate(Gate::North), map.keep(), &[guard]);

        assert!(!route.contains(&guard));
        assert_eq!(route.len(), 7, "one sidestep out and one back in");
        // Equal-cost detours exist on both sides; lower rows, then lower
        // columns, are expanded first.
        let expected: Vec<CellCoord> = [(4, 0), (4, 1), (3, 1), (3, 2), (3, 3), (4, 3), (4, 4)]
            .into_iter()
            .map(|(column, row)| CellCoord::new(column, row))
            .collect();
        assert_eq!(route, expected);
    }

    #[test]
    fn goal_is_enterable_even_when_marked_occupied() {
        let map = map(5);
        let route = find_path(&map, map.gate(Gate::West), map.keep(), &[map.keep()]);
        assert_eq!(route.last(), Some(&map.keep()));
    }

    #[test]
    fn sealed_gate_yields_empty_route() {
        let map = map(8);
        let inside = CellCoord::new(4, 1);
        assert!(find_path(&map, map.gate(Gate::North), map.keep(), &[inside]).is_empty());
    }

    #[test]
    fn walls_are_never_crossed() {
        let mut map = map(7);
        for column in 1..6 {
            if column != 5 {
                map = map
                    .with_terrain(CellCoord::new(column, 2), Terrain::Wall)
                    .expect("editable");
            }
        }
        let route = find_path(&map, map.gate(Gate::North), map.keep(), &[]);

        assert!(route.contains(&CellCoord::new(5, 2)), "must use the gap");
        assert!(route
            .iter()
            .all(|cell| map.terrain(*cell) != Some(Terrain::Wall)));
    }

    #[test]
    fn workspace_reuse_matches_fresh_search() {
        let map = map(9);
        let guards = [CellCoord::new(4, 2), CellCoord::new(3, 3)];
        let mut pathfinder = Pathfinder::new();

        let first = pathfinder.find_path(&map, map.gate(Gate::North), map.keep(), guards);
        let _ = pathfinder.find_path(
            &map,
            map.gate(Gate::East),
            map.keep(),
            std::iter::empty(),
        );
        let again = pathfinder.find_path(&map, map.gate(Gate::North), map.keep(), guards);

        assert_eq!(first, again);
        assert_eq!(
            first,
            find_path(&map, map.gate(Gate::North), map.keep(), &guards)
        );
    }

    #[test]
    fn workspace_adapts_to_new_map_size() {
        let small = map(5);
        let large = map(11);
        let mut pathfinder = Pathfinder::new();

        let short = pathfinder.find_path(&small, small.gate(Gate::South), small.keep(), Vec::new());
        let long = pathfinder.find_path(&large, large.gate(Gate::South), large.keep(), Vec::new());

        assert_eq!(short.len(), 3);
        assert_eq!(long.len(), 6);
        assert!(pathfinder.last_expansions() >= 5);
    }
}
