//! Entity records owned by the world.

use dungeon_stay_core::{
    Armament, EnemyId, EnemyKind, EnemySnapshot, PlayerSnapshot, Position, Tint, TrapId,
    TrapSnapshot, WeaponId, WeaponKind, WeaponSnapshot, PLAYER_GLYPH, PLAYER_HEALTH,
    PLAYER_STRENGTH, TRAP_DAMAGE, TRAP_GLYPH,
};

/// Positional and visual record shared by every simulated object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Entity {
    pub(crate) position: Position,
    pub(crate) glyph: char,
    pub(crate) tint: Tint,
}

impl Entity {
    pub(crate) const fn new(position: Position, glyph: char, tint: Tint) -> Self {
        Self {
            position,
            glyph,
            tint,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Player {
    pub(crate) entity: Entity,
    pub(crate) health: i32,
    pub(crate) strength: i32,
    inventory: Vec<Armament>,
    wielded: Armament,
    pub(crate) traps: u32,
}

impl Player {
    pub(crate) fn spawn_at(position: Position) -> Self {
        Self {
            entity: Entity::new(position, PLAYER_GLYPH, Tint::Green),
            health: PLAYER_HEALTH,
            strength: PLAYER_STRENGTH,
            inventory: vec![Armament::Fists],
            wielded: Armament::Fists,
            traps: 0,
        }
    }

    /// Appends a weapon to the inventory and wields it.
    pub(crate) fn equip(&mut self, kind: WeaponKind) {
        let armament = Armament::Weapon(kind);
        self.inventory.push(armament);
        self.wielded = armament;
    }

    pub(crate) fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            position: self.entity.position,
            glyph: self.entity.glyph,
            tint: self.entity.tint,
            health: self.health,
            strength: self.strength,
            inventory: self.inventory.clone(),
            wielded: self.wielded,
            traps: self.traps,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Enemy {
    pub(crate) id: EnemyId,
    pub(crate) entity: Entity,
    pub(crate) kind: EnemyKind,
    pub(crate) health: i32,
    pub(crate) strength: i32,
}

impl Enemy {
    pub(crate) fn new(id: EnemyId, kind: EnemyKind, position: Position, strength: i32) -> Self {
        Self {
            id,
            entity: Entity::new(position, kind.glyph(), kind.tint()),
            kind,
            health: kind.base_health(),
            strength,
        }
    }

    /// Removes health and reports whether the enemy died.
    pub(crate) fn take_damage(&mut self, amount: i32) -> bool {
        self.health = self.health.saturating_sub(amount);
        self.health <= 0
    }

    pub(crate) fn snapshot(&self) -> EnemySnapshot {
        EnemySnapshot {
            id: self.id,
            kind: self.kind,
            position: self.entity.position,
            glyph: self.entity.glyph,
            tint: self.entity.tint,
            health: self.health,
            strength: self.strength,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Weapon {
    pub(crate) id: WeaponId,
    pub(crate) entity: Entity,
    pub(crate) kind: WeaponKind,
}

impl Weapon {
    pub(crate) fn new(id: WeaponId, kind: WeaponKind, position: Position) -> Self {
        Self {
            id,
            entity: Entity::new(position, kind.glyph(), kind.tint()),
            kind,
        }
    }

    pub(crate) fn snapshot(&self) -> WeaponSnapshot {
        WeaponSnapshot {
            id: self.id,
            kind: self.kind,
            position: self.entity.position,
            glyph: self.entity.glyph,
            tint: self.entity.tint,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Trap {
    pub(crate) id: TrapId,
    pub(crate) entity: Entity,
    pub(crate) damage: i32,
}

impl Trap {
    pub(crate) fn new(id: TrapId, position: Position) -> Self {
        Self {
            id,
            entity: Entity::new(position, TRAP_GLYPH, Tint::Red),
            damage: TRAP_DAMAGE,
        }
    }

    pub(crate) fn snapshot(&self) -> TrapSnapshot {
        TrapSnapshot {
            id: self.id,
            position: self.entity.position,
            glyph: self.entity.glyph,
            tint: self.entity.tint,
            damage: self.damage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_starts_unarmed() {
        let player = Player::spawn_at(Position::new(15, 7));
        let snapshot = player.snapshot();
        assert_eq!(snapshot.inventory, vec![Armament::Fists]);
        assert_eq!(snapshot.wielded, Armament::Fists);
        assert_eq!(snapshot.melee_damage(), PLAYER_STRENGTH);
    }

    #[test]
    fn equipping_keeps_fists_and_wields_latest() {
        let mut player = Player::spawn_at(Position::new(2, 2));
        player.equip(WeaponKind::Bow);
        player.equip(WeaponKind::Sword);
        let snapshot = player.snapshot();
        assert_eq!(
            snapshot.inventory,
            vec![
                Armament::Fists,
                Armament::Weapon(WeaponKind::Bow),
                Armament::Weapon(WeaponKind::Sword),
            ]
        );
        assert_eq!(snapshot.wielded, Armament::Weapon(WeaponKind::Sword));
    }

    #[test]
    fn enemy_reports_death_at_zero_health() {
        let mut goblin = Enemy::new(EnemyId::new(0), EnemyKind::Goblin, Position::new(1, 1), 5);
        assert!(!goblin.take_damage(10));
        assert!(goblin.take_damage(10));
        assert_eq!(goblin.health, 0);
    }
}
