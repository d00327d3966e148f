#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state management for Castle Defender.

mod guards;

use castle_defender_core::{
    validate_placement, CastleMap, CellCoord, Command, Difficulty, Event, GuardKind, MapError,
    PlacementError, RemovalError, SessionError, SessionSummary, Turn, TurnReport,
    WELCOME_BANNER,
};
use castle_defender_system_hints::HintEngine;
use castle_defender_system_scenario::generate_scenarios;
use castle_defender_system_scoring::score;
use castle_defender_system_turn_resolution::TurnResolver;
use log::{debug, info};
use rand::Rng;

use crate::guards::GuardRegistry;

/// Represents a single Castle Defender game in progress.
///
/// The session exclusively owns the generated turns and the guard roster.
/// All mutation flows through [`apply`]; reads go through [`query`].
#[derive(Debug)]
pub struct Session {
    banner: &'static str,
    difficulty: Difficulty,
    map: CastleMap,
    turns: Vec<Turn>,
    current_turn: usize,
    lives: u32,
    score: u32,
    successful_turns: u32,
    breaches: u32,
    guards: GuardRegistry,
    resolver: TurnResolver,
    hints: HintEngine,
    game_over: bool,
}

impl Session {
    /// Starts a session, generating the map and every turn up front.
    ///
    /// All randomness is drawn from `rng`, so a seeded RNG replays the same
    /// campaign.
    pub fn start<R>(difficulty: Difficulty, rng: &mut R) -> Result<Self, MapError>
    where
        R: Rng + ?Sized,
    {
        let profile = difficulty.profile();
        let map = CastleMap::generate(profile.grid_size)?;
        let turns = generate_scenarios(difficulty, &map, rng);
        info!(
            "session started on {:?}: {} turns on a {}-cell castle, {} lives",
            difficulty,
            turns.len(),
            map.size(),
            profile.lives
        );

        Ok(Self {
            banner: WELCOME_BANNER,
            difficulty,
            game_over: turns.is_empty(),
            map,
            turns,
            current_turn: 0,
            lives: profile.lives,
            score: 0,
            successful_turns: 0,
            breaches: 0,
            guards: GuardRegistry::new(profile.supply_per_turn),
            resolver: TurnResolver::new(),
            hints: HintEngine::new(),
        })
    }

    fn summary(&self) -> SessionSummary {
        SessionSummary {
            difficulty: self.difficulty,
            score: self.score,
            turns_played: u32::try_from(self.current_turn).unwrap_or(u32::MAX),
            successful_turns: self.successful_turns,
            breaches: self.breaches,
            lives_remaining: self.lives,
        }
    }

    fn place_guard(&mut self, cell: CellCoord, kind: GuardKind, out_events: &mut Vec<Event>) {
        let verdict = validate_placement(cell, &self.map, self.guards.as_slice()).and_then(|()| {
            if self.guards.can_afford(kind) {
                Ok(())
            } else {
                Err(PlacementError::InsufficientSupply)
            }
        });

        match verdict {
            Ok(()) => {
                let guard = self.guards.station(kind, cell);
                debug!(
                    "guard {} ({kind:?}) stationed at {cell}; {} supply left",
                    guard.id.get(),
                    self.guards.supply()
                );
                out_events.push(Event::GuardPlaced { guard });
            }
            Err(reason) => {
                debug!("guard placement at {cell} rejected: {reason}");
                out_events.push(Event::GuardPlacementRejected { cell, kind, reason });
            }
        }
    }

    fn confirm_turn(&mut self, out_events: &mut Vec<Event>) {
        let Some(turn) = self.turns.get_mut(self.current_turn) else {
            self.game_over = true;
            out_events.push(Event::CommandRejected {
                reason: SessionError::GameOver,
            });
            return;
        };

        let resolution = self
            .resolver
            .resolve(&turn.enemies, self.guards.as_slice(), &self.map);
        turn.enemies.clone_from(&resolution.enemies);
        let turn_number = turn.turn_number;

        self.lives = self.lives.saturating_sub(resolution.breached_count);
        self.breaches = self.breaches.saturating_add(resolution.breached_count);
        if resolution.success {
            self.successful_turns += 1;
        }
        self.score = score(self.difficulty, self.successful_turns, self.breaches);
        self.current_turn += 1;
        self.game_over = self.lives == 0 || self.current_turn >= self.turns.len();
        self.guards.reset(self.difficulty.profile().supply_per_turn);

        info!(
            "turn {turn_number} resolved: {} blocked, {} breached; lives {}, score {}",
            resolution.blocked_count, resolution.breached_count, self.lives, self.score
        );

        out_events.push(Event::TurnResolved {
            report: TurnReport {
                turn_number,
                resolution,
                lives_remaining: self.lives,
                score: self.score,
                game_over: self.game_over,
            },
        });

        if self.game_over {
            let summary = self.summary();
            info!("session over: {summary:?}");
            out_events.push(Event::GameOver { summary });
        }
    }
}

/// Applies the provided command to the session, mutating state deterministically.
pub fn apply(session: &mut Session, command: Command, out_events: &mut Vec<Event>) {
    if session.game_over {
        debug!("ignoring {command:?}: session is over");
        out_events.push(Event::CommandRejected {
            reason: SessionError::GameOver,
        });
        return;
    }

    match command {
        Command::PlaceGuard { cell, kind } => session.place_guard(cell, kind, out_events),
        Command::RemoveGuard { guard } => match session.guards.withdraw(guard) {
            Some(guard) => {
                debug!("guard {} withdrawn from {}", guard.id.get(), guard.cell);
                out_events.push(Event::GuardRemoved { guard });
            }
            None => out_events.push(Event::GuardRemovalRejected {
                guard,
                reason: RemovalError::MissingGuard,
            }),
        },
        Command::ConfirmTurn => session.confirm_turn(out_events),
        Command::RequestHint => {
            let enemies = session
                .turns
                .get(session.current_turn)
                .map_or(&[][..], |turn| turn.enemies.as_slice());
            let hint = session
                .hints
                .suggest(enemies, session.guards.as_slice(), &session.map);
            out_events.push(Event::HintSuggested { hint });
        }
    }
}

/// Query functions that provide read-only access to the session state.
pub mod query {
    use castle_defender_core::{CastleMap, Difficulty, Guard, SessionSummary, Turn};

    use super::Session;

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(session: &Session) -> &'static str {
        session.banner
    }

    /// Tier the session is played on.
    #[must_use]
    pub fn difficulty(session: &Session) -> Difficulty {
        session.difficulty
    }

    /// Provides read-only access to the castle map.
    #[must_use]
    pub fn map(session: &Session) -> &CastleMap {
        &session.map
    }

    /// Every turn of the session. Resolved turns hold resolved enemies.
    #[must_use]
    pub fn turns(session: &Session) -> &[Turn] {
        &session.turns
    }

    /// Turn awaiting guard placement, or `None` once the session is over.
    #[must_use]
    pub fn current_turn(session: &Session) -> Option<&Turn> {
        if session.game_over {
            return None;
        }
        session.turns.get(session.current_turn)
    }

    /// Guards stationed for the current planning phase.
    #[must_use]
    pub fn guards(session: &Session) -> &[Guard] {
        session.guards.as_slice()
    }

    /// Supply left for the current planning phase.
    #[must_use]
    pub fn supply_remaining(session: &Session) -> u32 {
        session.guards.supply()
    }

    /// Lives left before the keep falls.
    #[must_use]
    pub fn lives(session: &Session) -> u32 {
        session.lives
    }

    /// Running score.
    #[must_use]
    pub fn score(session: &Session) -> u32 {
        session.score
    }

    /// Reports whether the session has ended.
    #[must_use]
    pub fn is_game_over(session: &Session) -> bool {
        session.game_over
    }

    /// Current tallies in the shape handed to the scoring backend.
    #[must_use]
    pub fn summary(session: &Session) -> SessionSummary {
        session.summary()
    }
}
