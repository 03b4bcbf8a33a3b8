#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Dungeon Stay.

mod entities;
mod message_log;

use dungeon_stay_core::{
    Command, DamageSource, EnemyId, Event, MapBounds, Position, SessionState, SpawnError, TrapId,
    WeaponId, KILL_SCORE, MESSAGE_LOG_CAPACITY,
};
use tracing::{debug, warn};

use self::{
    entities::{Enemy, Player, Trap, Weapon},
    message_log::MessageLog,
};

/// Represents the authoritative Dungeon Stay world state.
#[derive(Debug)]
pub struct World {
    bounds: MapBounds,
    player: Player,
    enemies: Vec<Enemy>,
    weapons: Vec<Weapon>,
    traps: Vec<Trap>,
    wave: u32,
    score: u32,
    messages: MessageLog,
    session: SessionState,
    next_enemy_id: u32,
    next_weapon_id: u32,
    next_trap_id: u32,
}

impl World {
    /// Creates a new world on the classic 30×15 map with no enemies or weapons.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bounds(MapBounds::default())
    }

    fn with_bounds(bounds: MapBounds) -> Self {
        Self {
            bounds,
            player: Player::spawn_at(bounds.center()),
            enemies: Vec::new(),
            weapons: Vec::new(),
            traps: Vec::new(),
            wave: 1,
            score: 0,
            messages: MessageLog::with_capacity(MESSAGE_LOG_CAPACITY),
            session: SessionState::Active,
            next_enemy_id: 0,
            next_weapon_id: 0,
            next_trap_id: 0,
        }
    }

    fn log(&mut self, text: String) {
        self.messages.push(text);
    }

    fn is_occupied(&self, position: Position) -> bool {
        self.player.entity.position == position
            || self
                .enemies
                .iter()
                .any(|enemy| enemy.entity.position == position)
            || self
                .weapons
                .iter()
                .any(|weapon| weapon.entity.position == position)
            || self.traps.iter().any(|trap| trap.entity.position == position)
    }

    fn check_spawn_tile(&self, position: Position) -> Result<(), SpawnError> {
        if !self.bounds.is_interior(position) {
            return Err(SpawnError::OutOfBounds);
        }
        if self.is_occupied(position) {
            return Err(SpawnError::Occupied);
        }
        Ok(())
    }

    fn enemy_index(&self, enemy: EnemyId) -> Option<usize> {
        self.enemies.iter().position(|candidate| candidate.id == enemy)
    }

    fn weapon_index(&self, weapon: WeaponId) -> Option<usize> {
        self.weapons
            .iter()
            .position(|candidate| candidate.id == weapon)
    }

    fn trap_index(&self, trap: TrapId) -> Option<usize> {
        self.traps.iter().position(|candidate| candidate.id == trap)
    }

    fn allocate_enemy_id(&mut self) -> EnemyId {
        let id = EnemyId::new(self.next_enemy_id);
        self.next_enemy_id = self.next_enemy_id.saturating_add(1);
        id
    }

    fn allocate_weapon_id(&mut self) -> WeaponId {
        let id = WeaponId::new(self.next_weapon_id);
        self.next_weapon_id = self.next_weapon_id.saturating_add(1);
        id
    }

    fn allocate_trap_id(&mut self) -> TrapId {
        let id = TrapId::new(self.next_trap_id);
        self.next_trap_id = self.next_trap_id.saturating_add(1);
        id
    }

    /// Applies damage to the enemy stored at `index`, removing it when lethal.
    fn damage_enemy_at(
        &mut self,
        index: usize,
        amount: i32,
        source: DamageSource,
        out_events: &mut Vec<Event>,
    ) {
        let enemy = &mut self.enemies[index];
        let (id, kind) = (enemy.id, enemy.kind);
        let killed = enemy.take_damage(amount);
        let remaining = enemy.health;

        if killed {
            let _ = self.enemies.remove(index);
            self.score = self.score.saturating_add(KILL_SCORE);
            let text = match source {
                DamageSource::Melee => format!("You killed the {kind}!"),
                DamageSource::Trap => format!("Trap killed {kind}!"),
            };
            self.log(text);
            out_events.push(Event::EnemyKilled {
                enemy: id,
                kind,
                source,
            });
            return;
        }

        if source == DamageSource::Melee {
            self.log(format!("You hit the {kind}! (HP: {remaining})"));
        }
        out_events.push(Event::EnemyDamaged {
            enemy: id,
            kind,
            source,
            remaining,
        });
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureMap { width, height } => {
            *world = World::with_bounds(MapBounds::new(width, height));
            out_events.push(Event::MapConfigured {
                bounds: world.bounds,
            });
        }
        Command::ConfigurePlayer {
            health,
            strength,
            traps,
        } => {
            world.player.health = world.player.health.min(health);
            world.player.strength = strength;
            world.player.traps = traps;
        }
        Command::LogMessage { text } => world.log(text),
        Command::MovePlayer { direction } => {
            if !world.session.is_active() {
                return;
            }

            let from = world.player.entity.position;
            let Some(to) = from
                .offset(direction.step())
                .filter(|candidate| world.bounds.is_interior(*candidate))
            else {
                return;
            };

            world.player.entity.position = to;
            out_events.push(Event::PlayerMoved { from, to });
        }
        Command::PlaceTrap => {
            if !world.session.is_active() {
                return;
            }

            if world.player.traps == 0 {
                world.log("No traps left!".to_owned());
                out_events.push(Event::TrapUnavailable);
                return;
            }

            let position = world.player.entity.position;
            let trap = world.allocate_trap_id();
            world.traps.push(Trap::new(trap, position));
            world.player.traps -= 1;
            world.log("Trap placed!".to_owned());
            out_events.push(Event::TrapPlaced { trap, position });
        }
        Command::DamageEnemy { enemy, amount } => {
            if !world.session.is_active() {
                return;
            }

            if let Some(index) = world.enemy_index(enemy) {
                world.damage_enemy_at(index, amount, DamageSource::Melee, out_events);
            }
        }
        Command::PickUpWeapon { weapon } => {
            let Some(index) = world.weapon_index(weapon) else {
                return;
            };
            if world.weapons[index].entity.position != world.player.entity.position {
                return;
            }

            let picked = world.weapons.remove(index);
            world.player.equip(picked.kind);
            world.log(format!("You picked up a {}!", picked.kind));
            out_events.push(Event::WeaponPickedUp {
                weapon,
                kind: picked.kind,
            });
        }
        Command::SpringTrap { trap } => {
            let Some(trap_index) = world.trap_index(trap) else {
                return;
            };
            let position = world.traps[trap_index].entity.position;
            let damage = world.traps[trap_index].damage;
            let Some(enemy_index) = world
                .enemies
                .iter()
                .position(|enemy| enemy.entity.position == position)
            else {
                return;
            };

            let enemy = world.enemies[enemy_index].id;
            world.damage_enemy_at(enemy_index, damage, DamageSource::Trap, out_events);
            let _ = world.traps.remove(trap_index);
            out_events.push(Event::TrapSprung { trap, enemy });
        }
        Command::StepEnemy { enemy, step } => {
            let bounds = world.bounds;
            let Some(index) = world.enemy_index(enemy) else {
                return;
            };

            let entity = &mut world.enemies[index].entity;
            let from = entity.position;
            let to = from
                .offset(step)
                .map_or(from, |candidate| bounds.clamp_interior(candidate));
            if to == from {
                return;
            }

            entity.position = to;
            out_events.push(Event::EnemyAdvanced { enemy, from, to });
        }
        Command::StrikePlayer { enemy } => {
            let Some(index) = world.enemy_index(enemy) else {
                return;
            };

            let attacker = &world.enemies[index];
            let (kind, damage) = (attacker.kind, attacker.strength);
            world.player.health = world.player.health.saturating_sub(damage);
            let remaining = world.player.health;
            world.log(format!("{kind} hit you! (HP: {remaining})"));
            out_events.push(Event::PlayerStruck {
                enemy,
                damage,
                remaining,
            });

            if world.session.is_active() && remaining <= 0 {
                world.session = SessionState::Defeated;
                world.log("YOU DIED!".to_owned());
                out_events.push(Event::PlayerDefeated);
                debug!(wave = world.wave, score = world.score, "player defeated");
            }
        }
        Command::SpawnEnemy {
            kind,
            position,
            strength,
        } => {
            if let Err(reason) = world.check_spawn_tile(position) {
                warn!(%position, ?reason, "enemy spawn rejected");
                out_events.push(Event::SpawnRejected { position, reason });
                return;
            }

            let enemy = world.allocate_enemy_id();
            world.enemies.push(Enemy::new(enemy, kind, position, strength));
            out_events.push(Event::EnemySpawned {
                enemy,
                kind,
                position,
            });
        }
        Command::SpawnWeapon { kind, position } => {
            if let Err(reason) = world.check_spawn_tile(position) {
                warn!(%position, ?reason, "weapon spawn rejected");
                out_events.push(Event::SpawnRejected { position, reason });
                return;
            }

            let weapon = world.allocate_weapon_id();
            world.weapons.push(Weapon::new(weapon, kind, position));
            out_events.push(Event::WeaponSpawned {
                weapon,
                kind,
                position,
            });
        }
        Command::AdvanceWave => {
            world.wave = world.wave.saturating_add(1);
            world.player.traps = world.player.traps.saturating_add(1);
            let wave = world.wave;
            world.log(format!("Wave {wave} incoming!"));
            out_events.push(Event::WaveStarted { wave });
            debug!(wave, score = world.score, "wave advanced");
        }
        Command::Terminate => {
            if world.session == SessionState::Terminated {
                return;
            }
            world.session = SessionState::Terminated;
            out_events.push(Event::SessionTerminated);
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use dungeon_stay_core::{
        EnemyView, MapBounds, PlayerSnapshot, Position, SessionState, TrapView, WeaponView,
        WorldSnapshot,
    };

    use super::World;

    /// Dimensions of the walled map.
    #[must_use]
    pub fn bounds(world: &World) -> MapBounds {
        world.bounds
    }

    /// Captures the player's current state.
    #[must_use]
    pub fn player(world: &World) -> PlayerSnapshot {
        world.player.snapshot()
    }

    /// Captures a read-only view of the enemies in world order.
    #[must_use]
    pub fn enemy_view(world: &World) -> EnemyView {
        EnemyView::from_snapshots(world.enemies.iter().map(|enemy| enemy.snapshot()).collect())
    }

    /// Captures a read-only view of the weapons lying on the map.
    #[must_use]
    pub fn weapon_view(world: &World) -> WeaponView {
        WeaponView::from_snapshots(
            world
                .weapons
                .iter()
                .map(|weapon| weapon.snapshot())
                .collect(),
        )
    }

    /// Captures a read-only view of the armed traps in placement order.
    #[must_use]
    pub fn trap_view(world: &World) -> TrapView {
        TrapView::from_snapshots(world.traps.iter().map(|trap| trap.snapshot()).collect())
    }

    /// Current wave number.
    #[must_use]
    pub fn wave(world: &World) -> u32 {
        world.wave
    }

    /// Accumulated score.
    #[must_use]
    pub fn score(world: &World) -> u32 {
        world.score
    }

    /// Session lifecycle state.
    #[must_use]
    pub fn session_state(world: &World) -> SessionState {
        world.session
    }

    /// Retained log lines, oldest first.
    pub fn messages(world: &World) -> impl Iterator<Item = &str> {
        world.messages.iter()
    }

    /// Interior tiles not held by the player or any other entity, in row-major order.
    #[must_use]
    pub fn free_tiles(world: &World) -> Vec<Position> {
        world
            .bounds
            .interior_tiles()
            .filter(|tile| !world.is_occupied(*tile))
            .collect()
    }

    /// Captures the complete world state handed to renderers.
    #[must_use]
    pub fn snapshot(world: &World) -> WorldSnapshot {
        WorldSnapshot {
            bounds: world.bounds,
            player: player(world),
            enemies: enemy_view(world).into_vec(),
            weapons: weapon_view(world).into_vec(),
            traps: trap_view(world).into_vec(),
            wave: world.wave,
            score: world.score,
            messages: messages(world).map(str::to_owned).collect(),
            session: world.session,
        }
    }
}
