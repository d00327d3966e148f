//! Guard placement rules.

use crate::{CastleMap, CellCoord, Guard, PlacementError};

/// Checks whether a guard may be stationed on `cell`, reporting why not.
///
/// The cell must lie on the map, carry path or empty terrain, and not already
/// hold a guard. Supply is a session concern and is not checked here.
pub fn validate_placement(
    cell: CellCoord,
    map: &CastleMap,
    guards: &[Guard],
) -> Result<(), PlacementError> {
    let terrain = map.terrain(cell).ok_or(PlacementError::OutOfBounds)?;
    if !terrain.is_buildable() {
        return Err(PlacementError::Unbuildable);
    }
    if guards.iter().any(|guard| guard.cell == cell) {
        return Err(PlacementError::Occupied);
    }
    Ok(())
}

/// Boolean form of [`validate_placement`]. Never panics.
#[must_use]
pub fn is_valid_placement(cell: CellCoord, map: &CastleMap, guards: &[Guard]) -> bool {
    validate_placement(cell, map, guards).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Gate, GuardId, GuardKind, Terrain};

    fn map() -> CastleMap {
        CastleMap::generate(8).expect("valid size")
    }

    #[test]
    fn interior_path_cell_is_valid() {
        assert!(is_valid_placement(CellCoord::new(2, 4), &map(), &[]));
    }

    #[test]
    fn empty_terrain_is_buildable() {
        let map = map()
            .with_terrain(CellCoord::new(3, 3), Terrain::Empty)
            .expect("editable");
        assert!(is_valid_placement(CellCoord::new(3, 3), &map, &[]));
    }

    #[test]
    fn out_of_bounds_is_rejected_without_panicking() {
        let map = map();
        assert_eq!(
            validate_placement(CellCoord::new(8, 2), &map, &[]),
            Err(PlacementError::OutOfBounds)
        );
        assert!(!is_valid_placement(
            CellCoord::new(u32::MAX, u32::MAX),
            &map,
            &[]
        ));
    }

    #[test]
    fn walls_gates_and_keep_are_unbuildable() {
        let map = map();
        for cell in [
            CellCoord::new(0, 0),
            map.gate(Gate::North),
            map.gate(Gate::West),
            map.keep(),
        ] {
            assert_eq!(
                validate_placement(cell, &map, &[]),
                Err(PlacementError::Unbuildable),
                "{cell} must not accept guards"
            );
        }
    }

    #[test]
    fn occupied_cell_is_rejected() {
        let cell = CellCoord::new(4, 2);
        let guards = [Guard::new(GuardId::new(0), GuardKind::Guard, cell)];
        assert_eq!(
            validate_placement(cell, &map(), &guards),
            Err(PlacementError::Occupied)
        );
        assert!(is_valid_placement(CellCoord::new(4, 3), &map(), &guards));
    }
}
