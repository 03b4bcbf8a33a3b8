#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic pursuit system that advances enemies and resolves their strikes.

use dungeon_stay_core::{Command, EnemyView, MapBounds, PlayerSnapshot, Position, Step};

/// Pure system that moves every enemy one step toward the player.
///
/// Enemies are processed in world order. Each enemy's step is followed
/// immediately by its strike, so log lines and damage interleave the same way
/// the world applies them.
#[derive(Debug, Default)]
pub struct Movement {
    scratch: Vec<Command>,
}

impl Movement {
    /// Creates a new movement system with empty scratch buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits `StepEnemy` and `StrikePlayer` commands for the current tick.
    pub fn handle(
        &mut self,
        bounds: MapBounds,
        player: &PlayerSnapshot,
        enemies: &EnemyView,
        out: &mut Vec<Command>,
    ) {
        if enemies.is_empty() {
            return;
        }

        self.scratch.clear();

        for enemy in enemies.iter() {
            let step = Step::toward(enemy.position, player.position);
            let destination = if step.is_none() {
                enemy.position
            } else {
                self.scratch.push(Command::StepEnemy {
                    enemy: enemy.id,
                    step,
                });
                advance(bounds, enemy.position, step)
            };

            if destination.is_adjacent(player.position) {
                self.scratch
                    .push(Command::StrikePlayer { enemy: enemy.id });
            }
        }

        out.reserve(self.scratch.len());
        out.append(&mut self.scratch);
    }
}

/// Tile an enemy lands on once the world applies `step`.
fn advance(bounds: MapBounds, from: Position, step: Step) -> Position {
    from.offset(step)
        .map_or(from, |candidate| bounds.clamp_interior(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dungeon_stay_core::{Armament, EnemyId, EnemyKind, EnemySnapshot, Tint, PLAYER_GLYPH};

    #[test]
    fn distant_enemy_only_steps() {
        let mut movement = Movement::new();
        let enemies = EnemyView::from_snapshots(vec![enemy(0, 10, 2)]);
        let mut out = Vec::new();

        movement.handle(MapBounds::default(), &player(), &enemies, &mut out);

        assert_eq!(
            out,
            vec![Command::StepEnemy {
                enemy: EnemyId::new(0),
                step: Step::new(1, 1),
            }]
        );
    }

    #[test]
    fn enemy_that_closes_in_strikes_after_stepping() {
        let mut movement = Movement::new();
        let enemies = EnemyView::from_snapshots(vec![enemy(3, 15, 9), enemy(4, 17, 7)]);
        let mut out = Vec::new();

        movement.handle(MapBounds::default(), &player(), &enemies, &mut out);

        assert_eq!(
            out,
            vec![
                Command::StepEnemy {
                    enemy: EnemyId::new(3),
                    step: Step::new(0, -1),
                },
                Command::StrikePlayer {
                    enemy: EnemyId::new(3)
                },
                Command::StepEnemy {
                    enemy: EnemyId::new(4),
                    step: Step::new(-1, 0),
                },
                Command::StrikePlayer {
                    enemy: EnemyId::new(4)
                },
            ]
        );
    }

    #[test]
    fn enemy_on_player_tile_strikes_without_moving() {
        let mut movement = Movement::new();
        let enemies = EnemyView::from_snapshots(vec![enemy(1, 15, 7)]);
        let mut out = Vec::new();

        movement.handle(MapBounds::default(), &player(), &enemies, &mut out);

        assert_eq!(
            out,
            vec![Command::StrikePlayer {
                enemy: EnemyId::new(1)
            }]
        );
    }

    fn player() -> PlayerSnapshot {
        PlayerSnapshot {
            position: Position::new(15, 7),
            glyph: PLAYER_GLYPH,
            tint: Tint::Green,
            health: 100,
            strength: 10,
            inventory: vec![Armament::Fists],
            wielded: Armament::Fists,
            traps: 0,
        }
    }

    fn enemy(id: u32, x: u32, y: u32) -> EnemySnapshot {
        EnemySnapshot {
            id: EnemyId::new(id),
            kind: EnemyKind::Ghost,
            position: Position::new(x, y),
            glyph: EnemyKind::Ghost.glyph(),
            tint: EnemyKind::Ghost.tint(),
            health: 15,
            strength: 6,
        }
    }
}
