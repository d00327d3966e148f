#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Bounded session scoring.

use castle_defender_core::{Difficulty, MAX_SCORE};

/// Maps successful defences and breaches to a score in `0..=MAX_SCORE`.
///
/// Each successful defence earns the tier's points; every breach then costs
/// the tier's penalty, except on [`Difficulty::Easy`] which never penalises.
/// Counts are unsigned, so negative input cannot be expressed.
#[must_use]
pub fn score(difficulty: Difficulty, success_count: u32, breach_count: u32) -> u32 {
    let profile = difficulty.profile();
    let earned = u64::from(success_count) * u64::from(profile.points_per_success);
    let penalty = match difficulty {
        Difficulty::Easy => 0,
        Difficulty::Moderate | Difficulty::Hard => {
            u64::from(breach_count) * u64::from(profile.penalty_per_breach)
        }
    };

    let clamped = earned.saturating_sub(penalty).min(u64::from(MAX_SCORE));
    u32::try_from(clamped).unwrap_or(MAX_SCORE)
}
