#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that collects weapons lying under the player.

use dungeon_stay_core::{Command, PlayerSnapshot, WeaponView};

/// Emits pickup commands for weapons sharing the player's tile.
#[derive(Debug, Default)]
pub struct Pickup;

impl Pickup {
    /// Queues `Command::PickUpWeapon` for each weapon on the player's tile, in world order.
    ///
    /// Collection happens regardless of the session state; a defeated player
    /// standing on a weapon still picks it up.
    pub fn handle(&self, player: &PlayerSnapshot, weapons: &WeaponView, out: &mut Vec<Command>) {
        out.extend(
            weapons
                .iter()
                .filter(|weapon| weapon.position == player.position)
                .map(|weapon| Command::PickUpWeapon { weapon: weapon.id }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dungeon_stay_core::{Armament, Position, Tint, WeaponId, WeaponKind, WeaponSnapshot};

    #[test]
    fn ignores_weapons_elsewhere() {
        let weapons = WeaponView::from_snapshots(vec![weapon(0, 3, 3), weapon(1, 15, 7)]);
        let player = PlayerSnapshot {
            position: Position::new(15, 7),
            glyph: '@',
            tint: Tint::Green,
            health: 100,
            strength: 10,
            inventory: Vec::new(),
            wielded: Armament::Fists,
            traps: 0,
        };
        let mut out = Vec::new();

        Pickup.handle(&player, &weapons, &mut out);

        assert_eq!(
            out,
            vec![Command::PickUpWeapon {
                weapon: WeaponId::new(1)
            }]
        );
    }

    fn weapon(id: u32, x: u32, y: u32) -> WeaponSnapshot {
        WeaponSnapshot {
            id: WeaponId::new(id),
            kind: WeaponKind::Bow,
            position: Position::new(x, y),
            glyph: WeaponKind::Bow.glyph(),
            tint: WeaponKind::Bow.tint(),
        }
    }
}
