#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Tick driver that owns the Dungeon Stay world and its systems.
//!
//! Every call to [`Simulation::advance`] consumes exactly one [`Input`] and
//! runs the stages of a tick in a fixed order: quit check, player action,
//! weapon pickup, trap resolution, enemy pursuit and strikes, and finally
//! wave progression. Each stage reads fresh views of the world, lets its
//! system emit commands, and applies them before the next stage starts.

use dungeon_stay_core::{
    Command, Event, Input, SessionState, WorldSnapshot, INITIAL_ENEMY_COUNT, INITIAL_WEAPON_COUNT,
    MAP_HEIGHT, MAP_WIDTH, MIN_MAP_DIMENSION,
};
use dungeon_stay_system_bootstrap::Bootstrap;
use dungeon_stay_system_combat::Combat;
use dungeon_stay_system_movement::Movement;
use dungeon_stay_system_pickup::Pickup;
use dungeon_stay_system_spawning::{self as spawning, Spawning};
use dungeon_stay_system_traps::Traps;
use dungeon_stay_system_waves::Waves;
use dungeon_stay_world::{self as world, query, World};
use thiserror::Error;
use tracing::{debug, trace};

/// Seed used when the caller does not provide one.
pub const DEFAULT_RNG_SEED: u64 = 0x5eed_d00d_0000_0001;

/// Parameters required to start a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    width: u32,
    height: u32,
    rng_seed: u64,
}

impl Config {
    /// Creates a configuration for a map of the given size.
    #[must_use]
    pub const fn new(width: u32, height: u32, rng_seed: u64) -> Self {
        Self {
            width,
            height,
            rng_seed,
        }
    }

    /// Returns a copy of the configuration using a different seed.
    #[must_use]
    pub const fn with_seed(self, rng_seed: u64) -> Self {
        Self { rng_seed, ..self }
    }

    /// Number of columns including the wall ring.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows including the wall ring.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Seed of the placement random stream.
    #[must_use]
    pub const fn rng_seed(&self) -> u64 {
        self.rng_seed
    }

    /// Checks that the map leaves at least one interior tile.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_MAP_DIMENSION || self.height < MIN_MAP_DIMENSION {
            return Err(ConfigError::MapTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(MAP_WIDTH, MAP_HEIGHT, DEFAULT_RNG_SEED)
    }
}

/// Errors raised when a session cannot be configured.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The map has no room inside its wall ring.
    #[error("map must be at least {min}x{min} tiles (received {width}x{height})", min = MIN_MAP_DIMENSION)]
    MapTooSmall {
        /// Requested number of columns.
        width: u32,
        /// Requested number of rows.
        height: u32,
    },
}

/// Result of a single tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// Session state once the tick completed.
    pub session: SessionState,
    /// Every event the world broadcast during the tick, in application order.
    pub events: Vec<Event>,
}

/// Owns the world and every system participating in a tick.
#[derive(Debug)]
pub struct Simulation {
    world: World,
    bootstrap: Bootstrap,
    combat: Combat,
    pickup: Pickup,
    traps: Traps,
    movement: Movement,
    spawning: Spawning,
    waves: Waves,
    commands: Vec<Command>,
    ticks: u64,
}

impl Simulation {
    /// Starts a session: configures the map, greets the player, then places
    /// two weapons followed by three enemies.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut simulation = Self::with_world(World::new(), config.rng_seed);
        let mut events = Vec::new();

        simulation.commands.push(Command::ConfigureMap {
            width: config.width,
            height: config.height,
        });
        simulation.execute(&mut events);

        simulation.bootstrap.greet(&mut simulation.commands);
        simulation.execute(&mut events);

        let mut free_tiles = query::free_tiles(&simulation.world);
        simulation.spawning.spawn_weapons(
            INITIAL_WEAPON_COUNT,
            &mut free_tiles,
            &mut simulation.commands,
        );
        simulation.spawning.spawn_enemies(
            INITIAL_ENEMY_COUNT,
            &mut free_tiles,
            &mut simulation.commands,
        );
        simulation.execute(&mut events);

        debug!(
            width = config.width,
            height = config.height,
            seed = config.rng_seed,
            "session started"
        );
        Ok(simulation)
    }

    /// Wraps an already populated world without greeting or spawning.
    ///
    /// Useful for scripted scenarios that place every entity explicitly.
    #[must_use]
    pub fn with_world(world: World, rng_seed: u64) -> Self {
        Self {
            world,
            bootstrap: Bootstrap,
            combat: Combat::new(),
            pickup: Pickup,
            traps: Traps,
            movement: Movement::new(),
            spawning: Spawning::new(spawning::Config::new(rng_seed)),
            waves: Waves,
            commands: Vec::new(),
            ticks: 0,
        }
    }

    /// Runs one tick driven by `input`.
    ///
    /// Once the session is terminated further calls change nothing and
    /// report no events.
    pub fn advance(&mut self, input: Input) -> TickOutcome {
        let mut events = Vec::new();

        if query::session_state(&self.world) == SessionState::Terminated {
            return self.outcome(events);
        }

        self.ticks = self.ticks.saturating_add(1);
        trace!(tick = self.ticks, ?input, "advancing simulation");

        if input == Input::Quit {
            self.commands.push(Command::Terminate);
            self.execute(&mut events);
            debug!(tick = self.ticks, "session terminated");
            return self.outcome(events);
        }

        self.player_action(input, &mut events);
        self.resolve_pickups(&mut events);
        self.resolve_traps(&mut events);
        self.resolve_enemies(&mut events);
        self.resolve_wave(&mut events);

        self.outcome(events)
    }

    /// Captures the state renderers draw from.
    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        query::snapshot(&self.world)
    }

    /// Read-only access to the owned world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Current session state.
    #[must_use]
    pub fn session_state(&self) -> SessionState {
        query::session_state(&self.world)
    }

    /// Number of ticks advanced so far, including the quitting one.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn player_action(&mut self, input: Input, events: &mut Vec<Event>) {
        let session = query::session_state(&self.world);
        if !session.is_active() {
            return;
        }

        match input {
            Input::Attack => {
                self.combat.handle(
                    session,
                    &query::player(&self.world),
                    &query::enemy_view(&self.world),
                    &mut self.commands,
                );
            }
            Input::PlaceTrap => self.commands.push(Command::PlaceTrap),
            Input::MoveUp | Input::MoveDown | Input::MoveLeft | Input::MoveRight => {
                if let Some(direction) = input.direction() {
                    self.commands.push(Command::MovePlayer { direction });
                }
            }
            Input::Quit | Input::NoOp => {}
        }
        self.execute(events);
    }

    fn resolve_pickups(&mut self, events: &mut Vec<Event>) {
        self.pickup.handle(
            &query::player(&self.world),
            &query::weapon_view(&self.world),
            &mut self.commands,
        );
        self.execute(events);
    }

    fn resolve_traps(&mut self, events: &mut Vec<Event>) {
        self.traps.handle(
            &query::trap_view(&self.world),
            &query::enemy_view(&self.world),
            &mut self.commands,
        );
        self.execute(events);
    }

    fn resolve_enemies(&mut self, events: &mut Vec<Event>) {
        self.movement.handle(
            query::bounds(&self.world),
            &query::player(&self.world),
            &query::enemy_view(&self.world),
            &mut self.commands,
        );
        self.execute(events);
    }

    fn resolve_wave(&mut self, events: &mut Vec<Event>) {
        self.waves
            .handle(&query::enemy_view(&self.world), &mut self.commands);
        if self.commands.is_empty() {
            return;
        }

        let mut wave_events = Vec::new();
        self.execute(&mut wave_events);

        if let Some(plan) = self.waves.spawn_plan(&wave_events) {
            let mut free_tiles = query::free_tiles(&self.world);
            self.spawning
                .spawn_enemies(plan.enemies, &mut free_tiles, &mut self.commands);
            self.spawning
                .spawn_weapons(plan.weapons, &mut free_tiles, &mut self.commands);
            self.execute(&mut wave_events);
            debug!(
                wave = plan.wave,
                enemies = query::enemy_view(&self.world).len(),
                "wave populated"
            );
        }

        events.append(&mut wave_events);
    }

    fn execute(&mut self, events: &mut Vec<Event>) {
        for command in self.commands.drain(..) {
            world::apply(&mut self.world, command, events);
        }
    }

    fn outcome(&self, events: Vec<Event>) -> TickOutcome {
        TickOutcome {
            session: query::session_state(&self.world),
            events,
        }
    }
}
