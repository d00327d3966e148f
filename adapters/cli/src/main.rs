#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that plays a Castle Defender session headlessly.

mod autoplay;
mod board;
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use castle_defender_core::{Difficulty, GuardKind, SessionSummary};
use castle_defender_world::{query, Session};
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    autoplay::{PlayedTurn, Strategy},
    config::{FileConfig, Overrides, Settings},
};

/// Command-line arguments accepted by the Castle Defender binary.
#[derive(Debug, Parser)]
#[command(name = "castle-defender", about = "Plays a Castle Defender session from the terminal")]
struct CliArgs {
    /// Difficulty tier to play.
    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,
    /// Seed for scenario generation. A random seed is chosen when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log verbosity written to stderr (off, error, warn, info, debug, trace).
    #[arg(long)]
    log_level: Option<LevelFilter>,
    /// Maximum number of guards the autoplayer stations per turn.
    #[arg(long)]
    max_guards: Option<u32>,
    /// Guard type the autoplayer stations.
    #[arg(long, value_enum)]
    guard_kind: Option<GuardKindArg>,
    /// Print only the final summary as JSON.
    #[arg(long)]
    json: bool,
    /// Skip drawing the board after each turn.
    #[arg(long)]
    quiet_board: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DifficultyArg {
    Easy,
    Moderate,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(value: DifficultyArg) -> Self {
        match value {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Moderate => Difficulty::Moderate,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum GuardKindArg {
    Guard,
    Archer,
    Knight,
}

impl From<GuardKindArg> for GuardKind {
    fn from(value: GuardKindArg) -> Self {
        match value {
            GuardKindArg::Guard => GuardKind::Guard,
            GuardKindArg::Archer => GuardKind::ArcherGuard,
            GuardKindArg::Knight => GuardKind::KnightGuard,
        }
    }
}

impl CliArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            difficulty: self.difficulty.map(Difficulty::from),
            seed: self.seed,
            max_guards_per_turn: self.max_guards,
            guard_kind: self.guard_kind.map(GuardKind::from),
            log_level: self.log_level,
        }
    }
}

/// Entry point for the Castle Defender command-line interface.
fn main() -> Result<()> {
    let args = CliArgs::parse();
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(args.overrides(), file)?;
    init_logging(settings.log_level)?;

    let seed = settings.seed.unwrap_or_else(rand::random);
    info!("starting {:?} session with seed {seed}", settings.difficulty);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut session = Session::start(settings.difficulty, &mut rng)
        .context("failed to start castle defender session")?;
    let strategy = Strategy {
        guard_kind: settings.guard_kind,
        max_guards_per_turn: settings.max_guards_per_turn,
    };

    if !args.json {
        println!("{}", query::welcome_banner(&session));
        println!("Difficulty: {:?} (seed {seed})", settings.difficulty);
    }

    let show_board = !args.json && !args.quiet_board;
    let summary = autoplay::play_session(&mut session, strategy, |session, played| {
        if !args.json {
            print_turn(session, played, show_board);
        }
    });

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&summary).context("failed to encode session summary")?;
        println!("{rendered}");
    } else {
        print_summary(&summary);
    }

    Ok(())
}

fn init_logging(level: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .context("failed to install logger")
}

fn print_turn(session: &Session, played: &PlayedTurn, show_board: bool) {
    let report = &played.report;
    let resolution = &report.resolution;

    println!();
    println!("{}", played.briefing);
    println!(
        "Guards stationed: {} | blocked: {} | breached: {} | lives: {} | score: {}",
        played.guards.len(),
        resolution.blocked_count,
        resolution.breached_count,
        report.lives_remaining,
        report.score
    );
    for enemy in &resolution.enemies {
        println!("  {}", board::outcome(enemy));
    }
    if show_board {
        print!(
            "{}",
            board::render(query::map(session), &played.guards, &resolution.enemies)
        );
    }
    if resolution.success {
        println!("The keep holds.");
    } else {
        println!("The keep was breached!");
    }
}

fn print_summary(summary: &SessionSummary) {
    println!();
    println!("Game over.");
    println!(
        "Turns played: {} ({} held, {} breaches)",
        summary.turns_played, summary.successful_turns, summary.breaches
    );
    println!("Lives remaining: {}", summary.lives_remaining);
    println!("Final score: {}", summary.score);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_overrides() {
        let args = CliArgs::parse_from([
            "castle-defender",
            "--difficulty",
            "hard",
            "--seed",
            "7",
            "--max-guards",
            "2",
            "--guard-kind",
            "knight",
            "--log-level",
            "debug",
        ]);
        let overrides = args.overrides();

        assert_eq!(overrides.difficulty, Some(Difficulty::Hard));
        assert_eq!(overrides.seed, Some(7));
        assert_eq!(overrides.max_guards_per_turn, Some(2));
        assert_eq!(overrides.guard_kind, Some(GuardKind::KnightGuard));
        assert_eq!(overrides.log_level, Some(LevelFilter::Debug));
    }

    #[test]
    fn omitted_flags_defer_to_config() {
        let args = CliArgs::parse_from(["castle-defender"]);
        assert_eq!(args.overrides(), Overrides::default());
        assert!(!args.json);
        assert!(!args.quiet_board);
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        let parsed = CliArgs::try_parse_from(["castle-defender", "--difficulty", "nightmare"]);
        assert!(parsed.is_err());
    }
}
