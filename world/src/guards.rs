//! Guard roster for the active planning phase.

use castle_defender_core::{CellCoord, Guard, GuardId, GuardKind};

/// Registry that stores stationed guards, allocates identifiers and tracks
/// the supply left for the current turn.
#[derive(Clone, Debug)]
pub(crate) struct GuardRegistry {
    entries: Vec<Guard>,
    next_guard_id: GuardId,
    supply: u32,
}

impl GuardRegistry {
    /// Creates an empty registry holding `supply` for the first turn.
    pub(crate) fn new(supply: u32) -> Self {
        Self {
            entries: Vec::new(),
            next_guard_id: GuardId::new(0),
            supply,
        }
    }

    /// Guards in placement order.
    pub(crate) fn as_slice(&self) -> &[Guard] {
        &self.entries
    }

    pub(crate) fn supply(&self) -> u32 {
        self.supply
    }

    pub(crate) fn can_afford(&self, kind: GuardKind) -> bool {
        kind.cost() <= self.supply
    }

    /// Stations a guard and spends its cost. Callers validate beforehand.
    pub(crate) fn station(&mut self, kind: GuardKind, cell: CellCoord) -> Guard {
        debug_assert!(self.can_afford(kind), "station requires sufficient supply");
        let guard = Guard::new(self.next_guard_id, kind, cell);
        self.next_guard_id = GuardId::new(self.next_guard_id.get().wrapping_add(1));
        self.supply = self.supply.saturating_sub(guard.cost);
        self.entries.push(guard);
        guard
    }

    /// Removes a guard and refunds its cost.
    pub(crate) fn withdraw(&mut self, id: GuardId) -> Option<Guard> {
        let position = self.entries.iter().position(|guard| guard.id == id)?;
        let guard = self.entries.remove(position);
        self.supply = self.supply.saturating_add(guard.cost);
        Some(guard)
    }

    /// Clears the roster for a new planning phase. Identifiers keep counting.
    pub(crate) fn reset(&mut self, supply: u32) {
        self.entries.clear();
        self.supply = supply;
    }
}
