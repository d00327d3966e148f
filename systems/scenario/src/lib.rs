#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Spawn scenario generation for a whole session.
//!
//! Every turn of the session is produced up front. Each enemy independently
//! draws a gate and an archetype from the caller-provided RNG, so seeding the
//! RNG makes the entire campaign reproducible.

use std::fmt::Write as _;

use castle_defender_core::{CastleMap, Difficulty, Enemy, EnemyId, EnemyKind, Gate, Turn};
use log::debug;
use rand::{seq::SliceRandom, Rng};

/// Generates every turn for a session on `difficulty`.
///
/// Spawn points are the gate cells of `map`. Enemy identifiers restart at
/// zero on every turn; enemies never carry identity across turns.
pub fn generate_scenarios<R>(difficulty: Difficulty, map: &CastleMap, rng: &mut R) -> Vec<Turn>
where
    R: Rng + ?Sized,
{
    let profile = difficulty.profile();
    let turns: Vec<Turn> = (0..profile.turn_count)
        .map(|turn_index| {
            let count = profile.enemies_for_turn(turn_index);
            let enemies: Vec<Enemy> = (0..count)
                .map(|slot| spawn_enemy(EnemyId::new(slot), map, rng))
                .collect();
            let turn_number = turn_index + 1;
            Turn {
                turn_number,
                briefing: briefing(turn_number, &enemies),
                enemies,
            }
        })
        .collect();

    debug!(
        "generated {} turns for {difficulty:?} ({} enemies total)",
        turns.len(),
        turns.iter().map(|turn| turn.enemies.len()).sum::<usize>()
    );
    turns
}

fn spawn_enemy<R>(id: EnemyId, map: &CastleMap, rng: &mut R) -> Enemy
where
    R: Rng + ?Sized,
{
    let gate = Gate::ALL[rng.gen_range(0..Gate::ALL.len())];
    let kind = *EnemyKind::ALL.choose(rng).unwrap_or(&EnemyKind::Soldier);
    Enemy::spawn_at(id, kind, gate, map.gate(gate))
}

/// Human-readable summary of how many enemies approach each gate.
///
/// Gates are listed in [`Gate::ALL`] order and gates without enemies are
/// omitted, e.g. `Turn 2: 3 enemies approaching (north: 2, west: 1).`
#[must_use]
pub fn briefing(turn_number: u32, enemies: &[Enemy]) -> String {
    let noun = if enemies.len() == 1 { "enemy" } else { "enemies" };
    let mut text = format!("Turn {turn_number}: {} {noun} approaching", enemies.len());

    let mut first = true;
    for gate in Gate::ALL {
        let count = enemies.iter().filter(|enemy| enemy.gate == gate).count();
        if count == 0 {
            continue;
        }
        let separator = if first { " (" } else { ", " };
        let _ = write!(text, "{separator}{}: {count}", gate.label());
        first = false;
    }
    if !first {
        text.push(')');
    }
    text.push('.');
    text
}
