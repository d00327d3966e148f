//! Optional TOML configuration merged beneath command-line flags.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use castle_defender_core::{Difficulty, GuardKind};
use log::LevelFilter;
use serde::Deserialize;

/// Guards the autoplayer stations per turn when nothing else is configured.
pub(crate) const DEFAULT_MAX_GUARDS: u32 = 4;

/// Contents of a configuration file. Every table and key is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub(crate) session: SessionSection,
    pub(crate) autoplay: AutoplaySection,
    pub(crate) logging: LoggingSection,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct SessionSection {
    pub(crate) difficulty: Option<Difficulty>,
    pub(crate) seed: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct AutoplaySection {
    pub(crate) max_guards_per_turn: Option<u32>,
    pub(crate) guard_kind: Option<GuardKind>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct LoggingSection {
    pub(crate) level: Option<String>,
}

impl FileConfig {
    /// Loads and parses the configuration file at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file at {}", path.display()))
    }

    pub(crate) fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("invalid castle defender config toml")
    }
}

/// Fully resolved run settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) difficulty: Difficulty,
    pub(crate) seed: Option<u64>,
    pub(crate) max_guards_per_turn: u32,
    pub(crate) guard_kind: GuardKind,
    pub(crate) log_level: LevelFilter,
}

/// Values supplied on the command line. `None` defers to the config file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Overrides {
    pub(crate) difficulty: Option<Difficulty>,
    pub(crate) seed: Option<u64>,
    pub(crate) max_guards_per_turn: Option<u32>,
    pub(crate) guard_kind: Option<GuardKind>,
    pub(crate) log_level: Option<LevelFilter>,
}

impl Settings {
    /// Layers command-line overrides over the file config over defaults.
    pub(crate) fn resolve(overrides: Overrides, file: FileConfig) -> Result<Self> {
        let file_level = file
            .logging
            .level
            .as_deref()
            .map(|level| {
                level
                    .parse::<LevelFilter>()
                    .with_context(|| format!("unknown log level `{level}` in config"))
            })
            .transpose()?;

        Ok(Self {
            difficulty: overrides
                .difficulty
                .or(file.session.difficulty)
                .unwrap_or_default(),
            seed: overrides.seed.or(file.session.seed),
            max_guards_per_turn: overrides
                .max_guards_per_turn
                .or(file.autoplay.max_guards_per_turn)
                .unwrap_or(DEFAULT_MAX_GUARDS),
            guard_kind: overrides
                .guard_kind
                .or(file.autoplay.guard_kind)
                .unwrap_or(GuardKind::Guard),
            log_level: overrides
                .log_level
                .or(file_level)
                .unwrap_or(LevelFilter::Warn),
        })
    }
}
