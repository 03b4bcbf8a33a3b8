//! Run settings merged from command-line flags and an optional TOML file.

use std::{fs, path::Path, time::Duration};

use anyhow::{Context, Result};
use serde::Deserialize;
use sha2::{Digest, Sha256};

/// Tick spacing used when neither the flags nor the file provide one.
pub(crate) const DEFAULT_TICK_MS: u64 = 100;

/// Log filter used when neither the flags, the file nor `RUST_LOG` provide one.
pub(crate) const DEFAULT_LOG_FILTER: &str = "dungeon_stay=info";

/// Values accepted in the `--config` file. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub(crate) seed: Option<String>,
    pub(crate) tick_ms: Option<u64>,
    pub(crate) vsync: Option<bool>,
    pub(crate) log_filter: Option<String>,
}

impl FileConfig {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub(crate) fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Values supplied on the command line; `None` defers to the file.
#[derive(Clone, Debug, Default)]
pub(crate) struct FlagOverrides {
    pub(crate) seed: Option<String>,
    pub(crate) tick_ms: Option<u64>,
    pub(crate) vsync: bool,
    pub(crate) log_filter: Option<String>,
}

/// Fully resolved run settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) rng_seed: u64,
    pub(crate) tick_interval: Duration,
    pub(crate) vsync: bool,
    pub(crate) log_filter: Option<String>,
}

impl Settings {
    /// Merges flags over file values; `random_seed` is only called when no phrase is given.
    pub(crate) fn resolve<R>(flags: FlagOverrides, file: FileConfig, random_seed: R) -> Self
    where
        R: FnOnce() -> u64,
    {
        let rng_seed = flags
            .seed
            .or(file.seed)
            .map_or_else(random_seed, |phrase| seed_from_phrase(&phrase));
        let tick_ms = flags.tick_ms.or(file.tick_ms).unwrap_or(DEFAULT_TICK_MS);

        Self {
            rng_seed,
            tick_interval: Duration::from_millis(tick_ms),
            vsync: flags.vsync || file.vsync.unwrap_or(false),
            log_filter: flags.log_filter.or(file.log_filter),
        }
    }
}

/// Hashes a seed phrase into the 64-bit seed of the placement stream.
pub(crate) fn seed_from_phrase(phrase: &str) -> u64 {
    let digest = Sha256::digest(phrase.as_bytes());
    let mut bytes = [0_u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}
