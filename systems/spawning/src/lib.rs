#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic spawning system responsible for placing enemies and weapons.
//!
//! Placement draws from the caller-supplied list of free tiles without
//! replacement, so a single batch never stacks two units on one tile. When
//! the list runs dry the remaining units of the batch are skipped.

use dungeon_stay_core::{Command, EnemyKind, Position, WeaponKind, ENEMY_STRENGTH_RANGE};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::warn;

/// Configuration parameters required to construct the spawning system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided seed.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self { rng_seed }
    }
}

/// Pure system that deterministically emits spawn commands.
#[derive(Debug)]
pub struct Spawning {
    rng: ChaCha8Rng,
}

impl Spawning {
    /// Creates a new spawning system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        }
    }

    /// Queues `count` enemies of random kind and strength on distinct free tiles.
    ///
    /// Tiles handed out are removed from `free_tiles`.
    pub fn spawn_enemies(
        &mut self,
        count: usize,
        free_tiles: &mut Vec<Position>,
        out: &mut Vec<Command>,
    ) {
        for placed in 0..count {
            let Some(position) = self.take_tile(free_tiles) else {
                warn!(requested = count, placed, "no free tile left for enemy");
                return;
            };
            let kind = EnemyKind::ALL[self.rng.gen_range(0..EnemyKind::ALL.len())];
            let strength = self.rng.gen_range(ENEMY_STRENGTH_RANGE);
            out.push(Command::SpawnEnemy {
                kind,
                position,
                strength,
            });
        }
    }

    /// Queues `count` weapons of random kind on distinct free tiles.
    ///
    /// Tiles handed out are removed from `free_tiles`.
    pub fn spawn_weapons(
        &mut self,
        count: usize,
        free_tiles: &mut Vec<Position>,
        out: &mut Vec<Command>,
    ) {
        for placed in 0..count {
            let Some(position) = self.take_tile(free_tiles) else {
                warn!(requested = count, placed, "no free tile left for weapon");
                return;
            };
            let kind = WeaponKind::ALL[self.rng.gen_range(0..WeaponKind::ALL.len())];
            out.push(Command::SpawnWeapon { kind, position });
        }
    }

    fn take_tile(&mut self, free_tiles: &mut Vec<Position>) -> Option<Position> {
        if free_tiles.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..free_tiles.len());
        Some(free_tiles.remove(index))
    }
}
