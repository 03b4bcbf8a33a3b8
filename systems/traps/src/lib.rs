#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that fires traps an enemy is standing on.

use dungeon_stay_core::{Command, EnemyView, TrapView};

/// Trap resolution system.
///
/// Each trap fires at most once per tick. The world picks the victim when
/// the command is applied, so two traps stacked on one tile only both fire
/// if the first one leaves its victim alive.
#[derive(Debug, Default)]
pub struct Traps;

impl Traps {
    /// Queues `Command::SpringTrap` for every trap whose tile holds an enemy.
    pub fn handle(&self, traps: &TrapView, enemies: &EnemyView, out: &mut Vec<Command>) {
        if enemies.is_empty() {
            return;
        }

        for trap in traps.iter() {
            if enemies.iter().any(|enemy| enemy.position == trap.position) {
                out.push(Command::SpringTrap { trap: trap.id });
            }
        }
    }
}
