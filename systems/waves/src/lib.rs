#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Wave progression system that restocks the dungeon once it is cleared.

use dungeon_stay_core::{Command, EnemyView, Event, WAVE_ENEMY_BONUS, WAVE_WEAPON_COUNT};

/// Number of units the spawning system should place for a wave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnPlan {
    /// Wave the plan belongs to.
    pub wave: u32,
    /// Enemies to place.
    pub enemies: usize,
    /// Weapons to place.
    pub weapons: usize,
}

impl SpawnPlan {
    /// Plan for the provided wave number: `wave + 2` enemies and one weapon.
    #[must_use]
    pub fn for_wave(wave: u32) -> Self {
        let enemies = wave.saturating_add(WAVE_ENEMY_BONUS);
        Self {
            wave,
            enemies: usize::try_from(enemies).unwrap_or(usize::MAX),
            weapons: WAVE_WEAPON_COUNT,
        }
    }
}

/// Pure system that advances waves.
#[derive(Debug, Default)]
pub struct Waves;

impl Waves {
    /// Emits `Command::AdvanceWave` when no enemy is left standing.
    pub fn handle(&self, enemies: &EnemyView, out: &mut Vec<Command>) {
        if enemies.is_empty() {
            out.push(Command::AdvanceWave);
        }
    }

    /// Converts the most recent `WaveStarted` event into a spawn plan.
    #[must_use]
    pub fn spawn_plan(&self, events: &[Event]) -> Option<SpawnPlan> {
        events.iter().rev().find_map(|event| match event {
            Event::WaveStarted { wave } => Some(SpawnPlan::for_wave(*wave)),
            _ => None,
        })
    }
}
