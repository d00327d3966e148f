#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Castle Defender simulation.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative session, and pure systems. Adapters submit [`Command`] values
//! describing player intent, the session executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values describing the
//! outcome. Systems (pathfinding, scenario generation, turn resolution, hints
//! and scoring) are pure functions over the types declared here.

mod map;
mod placement;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use map::CastleMap;
pub use placement::{is_valid_placement, validate_placement};

/// Canonical banner emitted when a session boots.
pub const WELCOME_BANNER: &str = "Defend the keep!";

/// Upper bound on the number of enemies a single turn may spawn.
pub const MAX_ENEMIES_PER_TURN: u32 = 4;

/// Upper bound of the score handed to the scoring backend.
pub const MAX_SCORE: u32 = 200;

/// Commands that express all permissible session mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Requests placement of a guard on the provided cell.
    PlaceGuard {
        /// Cell the guard should occupy.
        cell: CellCoord,
        /// Type of guard to station.
        kind: GuardKind,
    },
    /// Requests removal of a guard placed during the current planning phase.
    RemoveGuard {
        /// Identifier of the guard targeted for removal.
        guard: GuardId,
    },
    /// Locks in the current guard layout and resolves the active turn.
    ConfirmTurn,
    /// Asks the session to propose a single guard placement.
    RequestHint,
}

/// Events broadcast by the session after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that a guard was stationed.
    GuardPlaced {
        /// Guard record stored by the session.
        guard: Guard,
    },
    /// Reports that a guard placement request was rejected.
    GuardPlacementRejected {
        /// Cell provided in the placement request.
        cell: CellCoord,
        /// Type of guard requested.
        kind: GuardKind,
        /// Specific reason the placement failed.
        reason: PlacementError,
    },
    /// Confirms that a guard was withdrawn and its cost refunded.
    GuardRemoved {
        /// Guard record that was removed.
        guard: Guard,
    },
    /// Reports that a guard removal request was rejected.
    GuardRemovalRejected {
        /// Identifier of the guard targeted for removal.
        guard: GuardId,
        /// Specific reason the removal failed.
        reason: RemovalError,
    },
    /// Announces the outcome of a confirmed turn.
    TurnResolved {
        /// Resolved enemies, counts and updated session totals.
        report: TurnReport,
    },
    /// Carries the answer to a hint request.
    HintSuggested {
        /// Suggested placement, or `None` when no enemy can be interdicted.
        hint: Option<PlacementHint>,
    },
    /// Announces that the session ended and carries the score handoff.
    GameOver {
        /// Final tallies for the finished session.
        summary: SessionSummary,
    },
    /// Reports that a command could not be processed in the current state.
    CommandRejected {
        /// Reason the session refused the command.
        reason: SessionError,
    },
}

/// Location of a single grid cell expressed as column and row coordinates.
///
/// Row zero is the northern edge of the castle map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: CellCoord) -> u32 {
        self.column().abs_diff(other.column()) + self.row().abs_diff(other.row())
    }

    /// Direction of travel from `self` to an orthogonally adjacent `other`.
    ///
    /// Returns `None` when the two cells are not direct neighbours.
    #[must_use]
    pub fn direction_to(self, other: CellCoord) -> Option<Direction> {
        let column_diff = self.column.abs_diff(other.column);
        let row_diff = self.row.abs_diff(other.row);
        if column_diff + row_diff != 1 {
            return None;
        }

        if column_diff == 1 {
            if other.column > self.column {
                Some(Direction::East)
            } else {
                Some(Direction::West)
            }
        } else if other.row > self.row {
            Some(Direction::South)
        } else {
            Some(Direction::North)
        }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Cardinal movement directions available to enemies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing column indices.
    East,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward decreasing column indices.
    West,
}

/// One of the four fixed entrances carved into the castle wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gate {
    /// Midpoint of the northern edge.
    North,
    /// Midpoint of the southern edge.
    South,
    /// Midpoint of the eastern edge.
    East,
    /// Midpoint of the western edge.
    West,
}

impl Gate {
    /// Every gate in canonical order.
    pub const ALL: [Gate; 4] = [Gate::North, Gate::South, Gate::East, Gate::West];

    /// Direction an enemy spawned at this gate initially faces.
    #[must_use]
    pub const fn heading(self) -> Direction {
        match self {
            Self::North => Direction::South,
            Self::South => Direction::North,
            Self::East => Direction::West,
            Self::West => Direction::East,
        }
    }

    /// Lower-case name used in briefings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

/// Classification of a single castle map cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    /// Impassable masonry.
    Wall,
    /// Open courtyard that enemies may cross and guards may hold.
    Path,
    /// Unpaved ground; traversable and buildable like [`Terrain::Path`].
    Empty,
    /// Entrance where enemies spawn.
    Gate(Gate),
    /// The single goal cell enemies try to reach.
    Keep,
}

impl Terrain {
    /// Reports whether enemies may step onto the cell.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Reports whether a guard may be stationed on the cell.
    #[must_use]
    pub const fn is_buildable(self) -> bool {
        matches!(self, Self::Path | Self::Empty)
    }
}

/// Difficulty tiers offered by the game shell.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Small board, generous lives, no breach penalty.
    #[default]
    Easy,
    /// Medium board with a breach penalty.
    Moderate,
    /// Large board, long campaign, steep penalty.
    Hard,
}

impl Difficulty {
    /// Every tier from easiest to hardest.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Moderate, Difficulty::Hard];

    /// Tuning constants associated with the tier.
    #[must_use]
    pub const fn profile(self) -> DifficultyProfile {
        match self {
            Self::Easy => DifficultyProfile {
                grid_size: 8,
                turn_count: 5,
                lives: 5,
                base_enemies: 1,
                points_per_success: 25,
                penalty_per_breach: 0,
                supply_per_turn: 30,
            },
            Self::Moderate => DifficultyProfile {
                grid_size: 10,
                turn_count: 6,
                lives: 4,
                base_enemies: 2,
                points_per_success: 40,
                penalty_per_breach: 20,
                supply_per_turn: 40,
            },
            Self::Hard => DifficultyProfile {
                grid_size: 12,
                turn_count: 8,
                lives: 3,
                base_enemies: 2,
                points_per_success: 50,
                penalty_per_breach: 30,
                supply_per_turn: 45,
            },
        }
    }
}

/// Per-tier tuning constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DifficultyProfile {
    /// Side length of the square castle map.
    pub grid_size: u32,
    /// Number of turns generated for a session.
    pub turn_count: u32,
    /// Lives available before the keep falls.
    pub lives: u32,
    /// Enemies spawned on the first turn.
    pub base_enemies: u32,
    /// Points awarded for every turn resolved without a breach.
    pub points_per_success: u32,
    /// Points deducted for every enemy that reached the keep.
    pub penalty_per_breach: u32,
    /// Supply available for guards during each planning phase.
    pub supply_per_turn: u32,
}

impl DifficultyProfile {
    /// Number of enemies spawned on the zero-based `turn_index`.
    ///
    /// Grows by one every second turn and never exceeds
    /// [`MAX_ENEMIES_PER_TURN`].
    #[must_use]
    pub fn enemies_for_turn(&self, turn_index: u32) -> u32 {
        self.base_enemies
            .saturating_add(turn_index / 2)
            .min(MAX_ENEMIES_PER_TURN)
    }
}

/// Enemy archetypes that march on the keep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    /// Standard foot soldier.
    Soldier,
    /// Ranged attacker.
    Archer,
    /// Armoured attacker.
    Knight,
    /// Fast infiltrator.
    Assassin,
}

impl EnemyKind {
    /// Every archetype in canonical order.
    pub const ALL: [EnemyKind; 4] = [
        EnemyKind::Soldier,
        EnemyKind::Archer,
        EnemyKind::Knight,
        EnemyKind::Assassin,
    ];

    /// Cells the archetype covers per animation step.
    #[must_use]
    pub const fn speed(self) -> u32 {
        match self {
            Self::Soldier | Self::Archer | Self::Knight => 1,
            Self::Assassin => 2,
        }
    }

    /// Single-character glyph used by text adapters.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Soldier => 's',
            Self::Archer => 'a',
            Self::Knight => 'k',
            Self::Assassin => 'x',
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Soldier => "soldier",
            Self::Archer => "archer",
            Self::Knight => "knight",
            Self::Assassin => "assassin",
        }
    }
}

/// Types of guards the player can station.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardKind {
    /// Basic sentry.
    Guard,
    /// Sentry equipped with a bow.
    ArcherGuard,
    /// Heavily armoured sentry.
    KnightGuard,
}

impl GuardKind {
    /// Every guard type from cheapest to most expensive.
    pub const ALL: [GuardKind; 3] = [
        GuardKind::Guard,
        GuardKind::ArcherGuard,
        GuardKind::KnightGuard,
    ];

    /// Supply spent when stationing the guard.
    #[must_use]
    pub const fn cost(self) -> u32 {
        match self {
            Self::Guard => 10,
            Self::ArcherGuard => 15,
            Self::KnightGuard => 20,
        }
    }

    /// Nominal strength shown to the player. Any guard blocks its cell.
    #[must_use]
    pub const fn strength(self) -> u32 {
        match self {
            Self::Guard => 1,
            Self::ArcherGuard => 2,
            Self::KnightGuard => 3,
        }
    }

    /// Single-character glyph used by text adapters.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Guard => 'G',
            Self::ArcherGuard => 'A',
            Self::KnightGuard => 'K',
        }
    }
}

/// Unique identifier assigned to an enemy within its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(u32);

impl EnemyId {
    /// Creates a new enemy identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a guard by the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GuardId(u32);

impl GuardId {
    /// Creates a new guard identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Player-stationed obstacle occupying a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guard {
    /// Identifier allocated by the session.
    pub id: GuardId,
    /// Cell held by the guard.
    pub cell: CellCoord,
    /// Type of guard.
    pub kind: GuardKind,
    /// Supply spent on the guard.
    pub cost: u32,
    /// Nominal strength of the guard.
    pub strength: u32,
}

impl Guard {
    /// Creates a guard whose cost and strength follow its kind.
    #[must_use]
    pub const fn new(id: GuardId, kind: GuardKind, cell: CellCoord) -> Self {
        Self {
            id,
            cell,
            kind,
            cost: kind.cost(),
            strength: kind.strength(),
        }
    }
}

/// State of a single enemy within a turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Enemy {
    /// Identifier unique within the owning turn.
    pub id: EnemyId,
    /// Archetype of the enemy.
    pub kind: EnemyKind,
    /// Cells covered per animation step.
    pub speed: u32,
    /// Gate cell where the enemy entered.
    pub spawn: CellCoord,
    /// Cell currently occupied by the enemy.
    pub current: CellCoord,
    /// Direction the enemy currently faces.
    pub direction: Direction,
    /// Gate the enemy entered through.
    pub gate: Gate,
    /// Route toward the keep, starting at the spawn cell. Empty when blocked.
    pub path: Vec<CellCoord>,
    /// Index of `current` within `path`.
    pub path_index: usize,
    /// Indicates that no route to the keep exists.
    pub blocked: bool,
    /// Indicates that the route terminates on the keep.
    pub reached_keep: bool,
}

impl Enemy {
    /// Creates a freshly spawned enemy standing on its gate.
    #[must_use]
    pub fn spawn_at(id: EnemyId, kind: EnemyKind, gate: Gate, spawn: CellCoord) -> Self {
        Self {
            id,
            kind,
            speed: kind.speed(),
            spawn,
            current: spawn,
            direction: gate.heading(),
            gate,
            path: Vec::new(),
            path_index: 0,
            blocked: false,
            reached_keep: false,
        }
    }

    /// Advances the enemy a single cell along its path.
    ///
    /// Returns `false` without mutating anything once the end of the path is
    /// reached, so repeated calls at the end are harmless.
    pub fn advance(&mut self) -> bool {
        let next_index = self.path_index + 1;
        let Some(&next) = self.path.get(next_index) else {
            return false;
        };

        if let Some(direction) = self.current.direction_to(next) {
            self.direction = direction;
        }
        self.current = next;
        self.path_index = next_index;
        true
    }

    /// Number of cells left to traverse before the path ends.
    #[must_use]
    pub fn remaining_steps(&self) -> usize {
        self.path.len().saturating_sub(self.path_index + 1)
    }
}

/// One discrete round of play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// One-based turn number.
    pub turn_number: u32,
    /// Enemies spawned for the turn.
    pub enemies: Vec<Enemy>,
    /// Human-readable summary of the incoming enemies.
    pub briefing: String,
}

/// Outcome of resolving a turn against a guard layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResolution {
    /// Resolved copies of the turn's enemies.
    pub enemies: Vec<Enemy>,
    /// Number of enemies without a route to the keep.
    pub blocked_count: u32,
    /// Number of enemies whose route ends on the keep.
    pub breached_count: u32,
    /// `true` when no enemy breached.
    pub success: bool,
}

/// Session-level report produced after a turn is confirmed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// One-based number of the resolved turn.
    pub turn_number: u32,
    /// Per-enemy outcome of the turn.
    pub resolution: TurnResolution,
    /// Lives left after applying the turn's breaches.
    pub lives_remaining: u32,
    /// Running score after the turn.
    pub score: u32,
    /// Indicates that the session has ended.
    pub game_over: bool,
}

/// Suggested guard placement produced by the hint engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementHint {
    /// Cell the guard should hold.
    pub cell: CellCoord,
    /// Enemy whose route the placement interdicts.
    pub enemy: EnemyId,
    /// Number of cells in that enemy's current route.
    pub route_length: usize,
}

/// Final tallies handed to the scoring backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Tier the session was played on.
    pub difficulty: Difficulty,
    /// Final score within `0..=MAX_SCORE`.
    pub score: u32,
    /// Turns confirmed before the session ended.
    pub turns_played: u32,
    /// Turns resolved without a breach.
    pub successful_turns: u32,
    /// Enemies that reached the keep across the session.
    pub breaches: u32,
    /// Lives left when the session ended.
    pub lives_remaining: u32,
}

/// Reasons a castle map cannot be constructed or edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum MapError {
    /// The requested side length cannot fit a wall ring around a distinct keep.
    #[error("castle map size {size} is too small; at least 3 cells are required")]
    TooSmall {
        /// Requested side length.
        size: u32,
    },
    /// The edit targeted a cell outside the map.
    #[error("cell {cell} lies outside the castle map")]
    OutOfBounds {
        /// Offending cell.
        cell: CellCoord,
    },
    /// The edit targeted a gate or the keep, or tried to create one.
    #[error("cell {cell} is a gate or the keep and cannot be repainted")]
    ProtectedCell {
        /// Offending cell.
        cell: CellCoord,
    },
}

/// Reasons a guard placement request may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum PlacementError {
    /// The requested cell lies outside the castle map.
    #[error("cell lies outside the castle map")]
    OutOfBounds,
    /// The terrain at the requested cell cannot hold a guard.
    #[error("terrain cannot hold a guard")]
    Unbuildable,
    /// Another guard already holds the requested cell.
    #[error("cell is already guarded")]
    Occupied,
    /// The planning phase does not have enough supply left.
    #[error("not enough supply left this turn")]
    InsufficientSupply,
}

/// Reasons a guard removal request may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum RemovalError {
    /// No guard with the provided identifier is stationed.
    #[error("no guard with that identifier is stationed")]
    MissingGuard,
}

/// Reasons a session refuses to process a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum SessionError {
    /// Every turn was resolved or the keep has fallen.
    #[error("the session is over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{de::DeserializeOwned, Serialize};

    #[test]
    fn manhattan_distance_matches_expectation() {
        let origin = CellCoord::new(1, 1);
        let destination = CellCoord::new(4, 3);
        assert_eq!(origin.manhattan_distance(destination), 5);
        assert_eq!(destination.manhattan_distance(origin), 5);
    }

    #[test]
    fn direction_to_neighbors() {
        let origin = CellCoord::new(3, 3);
        assert_eq!(
            origin.direction_to(CellCoord::new(3, 2)),
            Some(Direction::North)
        );
        assert_eq!(
            origin.direction_to(CellCoord::new(4, 3)),
            Some(Direction::East)
        );
        assert_eq!(
            origin.direction_to(CellCoord::new(3, 4)),
            Some(Direction::South)
        );
        assert_eq!(
            origin.direction_to(CellCoord::new(2, 3)),
            Some(Direction::West)
        );
        assert_eq!(origin.direction_to(origin), None);
        assert_eq!(origin.direction_to(CellCoord::new(4, 4)), None);
    }

    #[test]
    fn enemy_count_grows_mildly_and_caps() {
        let profile = Difficulty::Moderate.profile();
        let counts: Vec<u32> = (0..10).map(|turn| profile.enemies_for_turn(turn)).collect();
        assert_eq!(counts, vec![2, 2, 3, 3, 4, 4, 4, 4, 4, 4]);
    }

    #[test]
    fn easy_tier_has_no_breach_penalty() {
        assert_eq!(Difficulty::Easy.profile().penalty_per_breach, 0);
        assert!(Difficulty::Moderate.profile().penalty_per_breach > 0);
        assert!(Difficulty::Hard.profile().penalty_per_breach > 0);
    }

    #[test]
    fn guard_constants_follow_kind() {
        let guard = Guard::new(GuardId::new(3), GuardKind::KnightGuard, CellCoord::new(2, 2));
        assert_eq!(guard.cost, 20);
        assert_eq!(guard.strength, 3);
    }

    #[test]
    fn guard_tables_scale_with_kind() {
        let costs: Vec<u32> = GuardKind::ALL.iter().map(|kind| kind.cost()).collect();
        let strengths: Vec<u32> = GuardKind::ALL.iter().map(|kind| kind.strength()).collect();
        let glyphs: Vec<char> = GuardKind::ALL.iter().map(|kind| kind.glyph()).collect();

        assert_eq!(costs, vec![10, 15, 20]);
        assert_eq!(strengths, vec![1, 2, 3]);
        assert_eq!(glyphs, vec!['G', 'A', 'K']);
    }

    #[test]
    fn enemy_advance_is_idempotent_at_path_end() {
        let spawn = CellCoord::new(2, 0);
        let mut enemy = Enemy::spawn_at(EnemyId::new(0), EnemyKind::Knight, Gate::North, spawn);
        enemy.path = vec![spawn, CellCoord::new(2, 1), CellCoord::new(3, 1)];

        assert_eq!(enemy.direction, Direction::South);
        assert!(enemy.advance());
        assert_eq!(enemy.current, CellCoord::new(2, 1));
        assert!(enemy.advance());
        assert_eq!(enemy.current, CellCoord::new(3, 1));
        assert_eq!(enemy.direction, Direction::East);
        assert_eq!(enemy.remaining_steps(), 0);

        let settled = enemy.clone();
        assert!(!enemy.advance());
        assert_eq!(enemy, settled);
    }

    #[test]
    fn enemy_without_path_never_moves() {
        let spawn = CellCoord::new(0, 4);
        let mut enemy = Enemy::spawn_at(EnemyId::new(1), EnemyKind::Assassin, Gate::West, spawn);
        assert_eq!(enemy.speed, 2);
        assert!(!enemy.advance());
        assert_eq!(enemy.current, spawn);
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn session_summary_round_trips_through_bincode() {
        assert_round_trip(&SessionSummary {
            difficulty: Difficulty::Hard,
            score: 140,
            turns_played: 8,
            successful_turns: 5,
            breaches: 2,
            lives_remaining: 1,
        });
    }

    #[test]
    fn placement_error_messages_are_readable() {
        assert_eq!(
            PlacementError::Occupied.to_string(),
            "cell is already guarded"
        );
        assert_eq!(
            MapError::TooSmall { size: 2 }.to_string(),
            "castle map size 2 is too small; at least 3 cells are required"
        );
    }
}
