#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that turns a player attack into melee damage commands.

use dungeon_stay_core::{Command, EnemyView, PlayerSnapshot, SessionState};

/// Melee system that queues damage for every enemy within reach.
#[derive(Debug, Default)]
pub struct Combat {
    scratch: Vec<Command>,
}

impl Combat {
    /// Creates a new combat system with empty scratch buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits `Command::DamageEnemy` for each enemy adjacent to the player.
    ///
    /// Every target receives the full melee damage of the wielded armament;
    /// the blow is not split between enemies.
    pub fn handle(
        &mut self,
        session: SessionState,
        player: &PlayerSnapshot,
        enemies: &EnemyView,
        out: &mut Vec<Command>,
    ) {
        if !session.is_active() || enemies.is_empty() {
            return;
        }

        self.scratch.clear();

        let amount = player.melee_damage();
        for enemy in enemies.iter() {
            if enemy.position.is_adjacent(player.position) {
                self.scratch.push(Command::DamageEnemy {
                    enemy: enemy.id,
                    amount,
                });
            }
        }

        if self.scratch.is_empty() {
            return;
        }

        out.reserve(self.scratch.len());
        out.append(&mut self.scratch);
    }
}
