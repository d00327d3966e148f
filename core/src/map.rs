//! Castle map layout: the wall ring, four gates and the central keep.

use crate::{CellCoord, Gate, MapError, Terrain};

const MIN_MAP_SIZE: u32 = 3;

/// Immutable square grid describing the castle terrain.
///
/// Guard occupancy is tracked by the session, never baked into the map, so a
/// single map can be shared read-only by every system for the whole session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastleMap {
    size: u32,
    cells: Vec<Terrain>,
    keep: CellCoord,
    gates: [(Gate, CellCoord); 4],
}

impl CastleMap {
    /// Builds the canonical castle layout for a map of side `size`.
    ///
    /// The outer ring is wall except for the four gate midpoints, the keep sits
    /// at `(size / 2, size / 2)` and every other interior cell is path.
    pub fn generate(size: u32) -> Result<Self, MapError> {
        if size < MIN_MAP_SIZE {
            return Err(MapError::TooSmall { size });
        }

        let mid = size / 2;
        let last = size - 1;
        let keep = CellCoord::new(mid, mid);
        let gates = [
            (Gate::North, CellCoord::new(mid, 0)),
            (Gate::South, CellCoord::new(mid, last)),
            (Gate::East, CellCoord::new(last, mid)),
            (Gate::West, CellCoord::new(0, mid)),
        ];

        let side = size as usize;
        let mut cells = Vec::with_capacity(side * side);
        for row in 0..size {
            for column in 0..size {
                let on_ring = row == 0 || column == 0 || row == last || column == last;
                let terrain = if on_ring { Terrain::Wall } else { Terrain::Path };
                cells.push(terrain);
            }
        }

        let mut map = Self {
            size,
            cells,
            keep,
            gates,
        };
        for (gate, cell) in gates {
            map.paint(cell, Terrain::Gate(gate));
        }
        map.paint(keep, Terrain::Keep);
        Ok(map)
    }

    /// Returns a copy of the map with `cell` repainted as `terrain`.
    ///
    /// Only wall, path and empty cells may be repainted, and only with one of
    /// those three classifications, so the gate and keep layout survives any
    /// sequence of edits.
    pub fn with_terrain(mut self, cell: CellCoord, terrain: Terrain) -> Result<Self, MapError> {
        let Some(current) = self.terrain(cell) else {
            return Err(MapError::OutOfBounds { cell });
        };
        let protected = |terrain: Terrain| matches!(terrain, Terrain::Gate(_) | Terrain::Keep);
        if protected(current) || protected(terrain) {
            return Err(MapError::ProtectedCell { cell });
        }

        self.paint(cell, terrain);
        Ok(self)
    }

    /// Side length of the square map.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Total number of cells in the map.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cell enemies try to reach.
    #[must_use]
    pub const fn keep(&self) -> CellCoord {
        self.keep
    }

    /// Gate cells in [`Gate::ALL`] order.
    #[must_use]
    pub fn gates(&self) -> &[(Gate, CellCoord)] {
        &self.gates
    }

    /// Cell occupied by the provided gate.
    #[must_use]
    pub fn gate(&self, gate: Gate) -> CellCoord {
        let slot = match gate {
            Gate::North => 0,
            Gate::South => 1,
            Gate::East => 2,
            Gate::West => 3,
        };
        self.gates[slot].1
    }

    /// Reports whether the cell lies within the map.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.size && cell.row() < self.size
    }

    /// Terrain at the provided cell, or `None` when out of bounds.
    #[must_use]
    pub fn terrain(&self, cell: CellCoord) -> Option<Terrain> {
        self.index(cell).and_then(|index| self.cells.get(index).copied())
    }

    /// Row-major dense index of the cell, or `None` when out of bounds.
    #[must_use]
    pub fn index(&self, cell: CellCoord) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        let row = usize::try_from(cell.row()).ok()?;
        let column = usize::try_from(cell.column()).ok()?;
        let width = usize::try_from(self.size).ok()?;
        Some(row * width + column)
    }

    /// Cell stored at the provided row-major dense index.
    #[must_use]
    pub fn cell_at(&self, index: usize) -> Option<CellCoord> {
        if index >= self.cells.len() {
            return None;
        }
        let width = self.size as usize;
        let column = u32::try_from(index % width).ok()?;
        let row = u32::try_from(index / width).ok()?;
        Some(CellCoord::new(column, row))
    }

    fn paint(&mut self, cell: CellCoord, terrain: Terrain) {
        if let Some(index) = self.index(cell) {
            self.cells[index] = terrain;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_rejects_maps_without_interior() {
        assert_eq!(CastleMap::generate(0), Err(MapError::TooSmall { size: 0 }));
        assert_eq!(CastleMap::generate(2), Err(MapError::TooSmall { size: 2 }));
        assert!(CastleMap::generate(3).is_ok());
    }

    #[test]
    fn eight_by_eight_layout_places_gates_and_keep() {
        let map = CastleMap::generate(8).expect("valid size");

        assert_eq!(map.keep(), CellCoord::new(4, 4));
        assert_eq!(map.gate(Gate::North), CellCoord::new(4, 0));
        assert_eq!(map.gate(Gate::South), CellCoord::new(4, 7));
        assert_eq!(map.gate(Gate::East), CellCoord::new(7, 4));
        assert_eq!(map.gate(Gate::West), CellCoord::new(0, 4));
        assert_eq!(map.terrain(CellCoord::new(4, 4)), Some(Terrain::Keep));
        assert_eq!(
            map.terrain(CellCoord::new(4, 0)),
            Some(Terrain::Gate(Gate::North))
        );
    }

    #[test]
    fn outer_ring_is_wall_except_gates() {
        let map = CastleMap::generate(9).expect("valid size");
        let gate_cells: Vec<CellCoord> = map.gates().iter().map(|(_, cell)| *cell).collect();

        for index in 0..map.cell_count() {
            let cell = map.cell_at(index).expect("index in range");
            let on_ring = cell.row() == 0
                || cell.column() == 0
                || cell.row() == map.size() - 1
                || cell.column() == map.size() - 1;
            let terrain = map.terrain(cell).expect("cell in range");

            if gate_cells.contains(&cell) {
                assert!(matches!(terrain, Terrain::Gate(_)));
            } else if on_ring {
                assert_eq!(terrain, Terrain::Wall, "ring cell {cell} must be wall");
            } else if cell == map.keep() {
                assert_eq!(terrain, Terrain::Keep);
            } else {
                assert_eq!(terrain, Terrain::Path, "interior cell {cell} must be path");
            }
        }
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(CastleMap::generate(10), CastleMap::generate(10));
    }

    #[test]
    fn out_of_bounds_queries_return_none() {
        let map = CastleMap::generate(5).expect("valid size");
        assert_eq!(map.terrain(CellCoord::new(5, 0)), None);
        assert_eq!(map.index(CellCoord::new(0, 5)), None);
        assert_eq!(map.cell_at(25), None);
        assert_eq!(map.cell_at(7), Some(CellCoord::new(2, 1)));
    }

    #[test]
    fn with_terrain_protects_gates_and_keep() {
        let map = CastleMap::generate(7).expect("valid size");
        let keep = map.keep();
        let north = map.gate(Gate::North);

        assert_eq!(
            map.clone().with_terrain(keep, Terrain::Wall),
            Err(MapError::ProtectedCell { cell: keep })
        );
        assert_eq!(
            map.clone().with_terrain(north, Terrain::Path),
            Err(MapError::ProtectedCell { cell: north })
        );
        assert_eq!(
            map.clone()
                .with_terrain(CellCoord::new(2, 2), Terrain::Gate(Gate::East)),
            Err(MapError::ProtectedCell {
                cell: CellCoord::new(2, 2)
            })
        );
        assert_eq!(
            map.clone().with_terrain(CellCoord::new(9, 9), Terrain::Wall),
            Err(MapError::OutOfBounds {
                cell: CellCoord::new(9, 9)
            })
        );

        let walled = map
            .with_terrain(CellCoord::new(2, 2), Terrain::Wall)
            .expect("interior cell is editable");
        assert_eq!(walled.terrain(CellCoord::new(2, 2)), Some(Terrain::Wall));
    }
}
