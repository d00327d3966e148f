//! Headless player that follows the hint engine.

use castle_defender_core::{Command, Event, Guard, GuardKind, SessionSummary, TurnReport};
use castle_defender_world::{self as world, query, Session};
use log::{debug, warn};

/// Guard placement policy applied before every confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Strategy {
    pub(crate) guard_kind: GuardKind,
    pub(crate) max_guards_per_turn: u32,
}

/// Everything that happened while playing one turn.
#[derive(Clone, Debug)]
pub(crate) struct PlayedTurn {
    pub(crate) briefing: String,
    pub(crate) guards: Vec<Guard>,
    pub(crate) report: TurnReport,
}

/// Plays the current turn: asks for hints, stations guards, confirms.
///
/// Returns `None` once the session has ended.
pub(crate) fn play_turn(session: &mut Session, strategy: Strategy) -> Option<PlayedTurn> {
    let briefing = query::current_turn(session)?.briefing.clone();
    let mut events = Vec::new();

    for _ in 0..strategy.max_guards_per_turn {
        if query::supply_remaining(session) < strategy.guard_kind.cost() {
            debug!("supply exhausted after {} guards", query::guards(session).len());
            break;
        }
        if !place_hinted_guard(session, strategy.guard_kind, &mut events) {
            break;
        }
    }

    let guards = query::guards(session).to_vec();
    events.clear();
    world::apply(session, Command::ConfirmTurn, &mut events);

    let report = events.into_iter().find_map(|event| match event {
        Event::TurnResolved { report } => Some(report),
        _ => None,
    })?;

    Some(PlayedTurn {
        briefing,
        guards,
        report,
    })
}

/// Plays turns until the session ends and returns the final tallies.
pub(crate) fn play_session<F>(
    session: &mut Session,
    strategy: Strategy,
    mut on_turn: F,
) -> SessionSummary
where
    F: FnMut(&Session, &PlayedTurn),
{
    while let Some(played) = play_turn(session, strategy) {
        on_turn(session, &played);
    }
    query::summary(session)
}

fn place_hinted_guard(session: &mut Session, kind: GuardKind, events: &mut Vec<Event>) -> bool {
    events.clear();
    world::apply(session, Command::RequestHint, events);
    let hint = events.iter().find_map(|event| match event {
        Event::HintSuggested { hint } => *hint,
        _ => None,
    });
    let Some(hint) = hint else {
        debug!("no further hint available");
        return false;
    };

    events.clear();
    world::apply(
        session,
        Command::PlaceGuard {
            cell: hint.cell,
            kind,
        },
        events,
    );
    events.iter().any(|event| match event {
        Event::GuardPlaced { guard } => {
            debug!("stationed {:?} at {}", guard.kind, guard.cell);
            true
        }
        Event::GuardPlacementRejected { cell, reason, .. } => {
            warn!("hinted placement at {cell} rejected: {reason}");
            false
        }
        _ => false,
    })
}
