#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Dungeon Stay engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit one [`Input`] per
//! tick, the simulation translates it into [`Command`] values describing
//! desired mutations, the world executes those commands via its `apply` entry
//! point, and then broadcasts [`Event`] values for systems to react to
//! deterministically. Renderers only ever see an immutable [`WorldSnapshot`].

use std::{fmt, ops::RangeInclusive};

use serde::{de, Deserialize, Deserializer, Serialize};

/// Canonical banner emitted when a session boots.
pub const WELCOME_BANNER: &str = "Welcome to DUNGEON STAY!";

/// Width of the default map including the wall ring.
pub const MAP_WIDTH: u32 = 30;

/// Height of the default map including the wall ring.
pub const MAP_HEIGHT: u32 = 15;

/// Smallest map edge that still leaves a single interior tile.
pub const MIN_MAP_DIMENSION: u32 = 3;

/// Number of enemies spawned when a session starts.
pub const INITIAL_ENEMY_COUNT: usize = 3;

/// Number of weapons spawned when a session starts.
pub const INITIAL_WEAPON_COUNT: usize = 2;

/// Number of weapons spawned alongside every new wave.
pub const WAVE_WEAPON_COUNT: usize = 1;

/// Extra enemies added on top of the wave number for each new wave.
pub const WAVE_ENEMY_BONUS: u32 = 2;

/// Health the player starts a session with.
pub const PLAYER_HEALTH: i32 = 100;

/// Base melee strength of the player.
pub const PLAYER_STRENGTH: i32 = 10;

/// Damage dealt by a sprung trap.
pub const TRAP_DAMAGE: i32 = 25;

/// Inclusive range enemy strength is drawn from at spawn.
pub const ENEMY_STRENGTH_RANGE: RangeInclusive<i32> = 5..=15;

/// Number of messages retained by the message log.
pub const MESSAGE_LOG_CAPACITY: usize = 5;

/// Score awarded for every enemy killed, regardless of the damage source.
pub const KILL_SCORE: u32 = 10;

/// Glyph used to draw the player.
pub const PLAYER_GLYPH: char = '@';

/// Glyph used to draw a trap.
pub const TRAP_GLYPH: char = '^';

/// Discrete command produced by the input source once per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// Move the player one tile toward decreasing `y`.
    MoveUp,
    /// Move the player one tile toward increasing `y`.
    MoveDown,
    /// Move the player one tile toward decreasing `x`.
    MoveLeft,
    /// Move the player one tile toward increasing `x`.
    MoveRight,
    /// Strike every enemy adjacent to the player.
    Attack,
    /// Spend one trap at the player's tile.
    PlaceTrap,
    /// End the session.
    Quit,
    /// Let the world advance without a player action.
    NoOp,
}

impl Input {
    /// Direction associated with a movement input, if any.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::MoveUp => Some(Direction::North),
            Self::MoveDown => Some(Direction::South),
            Self::MoveLeft => Some(Direction::West),
            Self::MoveRight => Some(Direction::East),
            Self::Attack | Self::PlaceTrap | Self::Quit | Self::NoOp => None,
        }
    }
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Resets the world to an empty map with the provided dimensions.
    ConfigureMap {
        /// Number of columns including the wall ring.
        width: u32,
        /// Number of rows including the wall ring.
        height: u32,
    },
    /// Overrides the player's combat attributes and trap inventory.
    ///
    /// Meant for scripted session setup. Health is only ever lowered, so a
    /// request above the current value leaves it unchanged.
    ConfigurePlayer {
        /// Health the player should have, capped at the current value.
        health: i32,
        /// Melee strength the player should have.
        strength: i32,
        /// Number of traps held by the player.
        traps: u32,
    },
    /// Appends a line to the bounded message log.
    LogMessage {
        /// Text to append.
        text: String,
    },
    /// Requests that the player step one tile in the provided direction.
    MovePlayer {
        /// Direction of travel.
        direction: Direction,
    },
    /// Requests that the player spend one trap at the current tile.
    PlaceTrap,
    /// Applies melee damage from the player to an enemy.
    DamageEnemy {
        /// Enemy receiving the damage.
        enemy: EnemyId,
        /// Amount of health removed.
        amount: i32,
    },
    /// Moves a weapon lying on the player's tile into the inventory.
    PickUpWeapon {
        /// Weapon being collected.
        weapon: WeaponId,
    },
    /// Fires a trap against the first enemy standing on it.
    SpringTrap {
        /// Trap being sprung.
        trap: TrapId,
    },
    /// Moves an enemy by a single pursuit step.
    StepEnemy {
        /// Enemy taking the step.
        enemy: EnemyId,
        /// Per-axis displacement.
        step: Step,
    },
    /// Applies an enemy's strength as damage to the player.
    StrikePlayer {
        /// Enemy delivering the blow.
        enemy: EnemyId,
    },
    /// Inserts a new enemy at the provided position.
    SpawnEnemy {
        /// Kind of enemy to create.
        kind: EnemyKind,
        /// Tile the enemy should occupy.
        position: Position,
        /// Strength rolled for the enemy.
        strength: i32,
    },
    /// Inserts a new weapon at the provided position.
    SpawnWeapon {
        /// Kind of weapon to create.
        kind: WeaponKind,
        /// Tile the weapon should occupy.
        position: Position,
    },
    /// Moves the session to the next wave.
    AdvanceWave,
    /// Ends the session.
    Terminate,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Confirms that the map was reset to new dimensions.
    MapConfigured {
        /// Bounds of the freshly configured map.
        bounds: MapBounds,
    },
    /// Confirms that the player moved between two tiles.
    PlayerMoved {
        /// Tile occupied before the move.
        from: Position,
        /// Tile occupied after the move.
        to: Position,
    },
    /// Confirms that a trap was placed.
    TrapPlaced {
        /// Identifier assigned to the trap.
        trap: TrapId,
        /// Tile the trap occupies.
        position: Position,
    },
    /// Reports that a trap placement failed because the inventory is empty.
    TrapUnavailable,
    /// Reports that an enemy survived a hit.
    EnemyDamaged {
        /// Enemy that was hit.
        enemy: EnemyId,
        /// Kind of the enemy that was hit.
        kind: EnemyKind,
        /// Origin of the damage.
        source: DamageSource,
        /// Health left after the hit.
        remaining: i32,
    },
    /// Reports that an enemy was killed and removed.
    EnemyKilled {
        /// Enemy that was killed.
        enemy: EnemyId,
        /// Kind of the enemy that was killed.
        kind: EnemyKind,
        /// Origin of the lethal damage.
        source: DamageSource,
    },
    /// Confirms that the player collected a weapon.
    WeaponPickedUp {
        /// Weapon that left the map.
        weapon: WeaponId,
        /// Kind of weapon that is now wielded.
        kind: WeaponKind,
    },
    /// Confirms that a trap fired and was consumed.
    TrapSprung {
        /// Trap that fired.
        trap: TrapId,
        /// Enemy caught by the trap.
        enemy: EnemyId,
    },
    /// Confirms that an enemy moved.
    EnemyAdvanced {
        /// Enemy that moved.
        enemy: EnemyId,
        /// Tile occupied before the move.
        from: Position,
        /// Tile occupied after the move.
        to: Position,
    },
    /// Reports that an enemy hit the player.
    PlayerStruck {
        /// Enemy that delivered the blow.
        enemy: EnemyId,
        /// Damage dealt.
        damage: i32,
        /// Player health after the blow.
        remaining: i32,
    },
    /// Announces that the player's health dropped to zero or below.
    PlayerDefeated,
    /// Confirms that an enemy entered the map.
    EnemySpawned {
        /// Identifier assigned to the enemy.
        enemy: EnemyId,
        /// Kind of enemy.
        kind: EnemyKind,
        /// Tile the enemy occupies.
        position: Position,
    },
    /// Confirms that a weapon entered the map.
    WeaponSpawned {
        /// Identifier assigned to the weapon.
        weapon: WeaponId,
        /// Kind of weapon.
        kind: WeaponKind,
        /// Tile the weapon occupies.
        position: Position,
    },
    /// Reports that a spawn request could not be honoured.
    SpawnRejected {
        /// Requested tile.
        position: Position,
        /// Reason the spawn was refused.
        reason: SpawnError,
    },
    /// Announces the start of a new wave.
    WaveStarted {
        /// Number of the wave that just began.
        wave: u32,
    },
    /// Announces that the session ended.
    SessionTerminated,
}

/// Lifecycle state of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// The player is alive and commands are accepted.
    #[default]
    Active,
    /// The player died; only quitting is accepted.
    Defeated,
    /// The session has ended.
    Terminated,
}

impl SessionState {
    /// Reports whether player actions are currently accepted.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Origin of damage applied to an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageSource {
    /// The player's melee attack.
    Melee,
    /// A trap placed by the player.
    Trap,
}

/// Reasons a spawn request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnError {
    /// The requested tile is part of the wall ring or outside the map.
    OutOfBounds,
    /// The requested tile already holds the player or another entity.
    Occupied,
}

/// Colour category attached to every drawable entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tint {
    /// Used for the player.
    Green,
    /// Used for goblins and traps.
    Red,
    /// Used for orcs.
    Yellow,
    /// Used for ghosts.
    White,
    /// Used for swords.
    Blue,
    /// Used for bows.
    Cyan,
    /// Used for axes.
    Magenta,
}

/// Cardinal movement directions available to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing `y`.
    North,
    /// Movement toward increasing `x`.
    East,
    /// Movement toward increasing `y`.
    South,
    /// Movement toward decreasing `x`.
    West,
}

impl Direction {
    /// Unit step corresponding to the direction.
    #[must_use]
    pub const fn step(self) -> Step {
        match self {
            Self::North => Step::new(0, -1),
            Self::East => Step::new(1, 0),
            Self::South => Step::new(0, 1),
            Self::West => Step::new(-1, 0),
        }
    }
}

/// Per-axis displacement where each component is -1, 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    dx: i8,
    dy: i8,
}

impl Step {
    /// Step that does not move.
    pub const NONE: Self = Self { dx: 0, dy: 0 };

    /// Creates a step, clamping each component into `-1..=1`.
    #[must_use]
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self {
            dx: clamp_unit(dx),
            dy: clamp_unit(dy),
        }
    }

    /// Step that reduces the Chebyshev distance from `from` to `to` by one.
    ///
    /// Each axis moves by the sign of the coordinate delta, so an entity that
    /// is already aligned on an axis keeps that coordinate.
    #[must_use]
    pub fn toward(from: Position, to: Position) -> Self {
        Self {
            dx: axis_sign(from.x, to.x),
            dy: axis_sign(from.y, to.y),
        }
    }

    /// Horizontal component.
    #[must_use]
    pub const fn dx(&self) -> i8 {
        self.dx
    }

    /// Vertical component.
    #[must_use]
    pub const fn dy(&self) -> i8 {
        self.dy
    }

    /// Reports whether the step leaves the entity in place.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

const fn clamp_unit(value: i8) -> i8 {
    if value > 1 {
        1
    } else if value < -1 {
        -1
    } else {
        value
    }
}

fn axis_sign(from: u32, to: u32) -> i8 {
    match from.cmp(&to) {
        std::cmp::Ordering::Less => 1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => -1,
    }
}

/// Location of a single map tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    x: u32,
    y: u32,
}

impl Position {
    /// Creates a new tile position.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Zero-based column of the tile.
    #[must_use]
    pub const fn x(&self) -> u32 {
        self.x
    }

    /// Zero-based row of the tile.
    #[must_use]
    pub const fn y(&self) -> u32 {
        self.y
    }

    /// Largest per-axis distance between two positions.
    #[must_use]
    pub fn chebyshev_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Reports whether `other` lies in the 8-neighbourhood of this tile or on it.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.chebyshev_distance(other) <= 1
    }

    /// Applies a step, returning `None` when a coordinate would underflow.
    #[must_use]
    pub fn offset(self, step: Step) -> Option<Position> {
        let x = self.x.checked_add_signed(i32::from(step.dx))?;
        let y = self.y.checked_add_signed(i32::from(step.dy))?;
        Some(Position::new(x, y))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Dimensions of a walled map.
///
/// The outermost ring of tiles is wall; every entity lives inside
/// `[1, width - 2] × [1, height - 2]`. Deserialisation rejects edges shorter
/// than [`MIN_MAP_DIMENSION`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MapBounds {
    width: u32,
    height: u32,
}

impl MapBounds {
    /// Creates bounds, raising each edge to [`MIN_MAP_DIMENSION`] if needed.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(MIN_MAP_DIMENSION),
            height: height.max(MIN_MAP_DIMENSION),
        }
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

    /// Tile the player starts on.
    #[must_use]
    pub const fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// Reports whether the position lies strictly inside the wall ring.
    #[must_use]
    pub fn is_interior(&self, position: Position) -> bool {
        (1..self.width - 1).contains(&position.x()) && (1..self.height - 1).contains(&position.y())
    }

    /// Reports whether the position belongs to the wall ring.
    #[must_use]
    pub fn is_wall(&self, position: Position) -> bool {
        position.x() < self.width && position.y() < self.height && !self.is_interior(position)
    }

    /// Moves a position onto the nearest interior tile.
    #[must_use]
    pub fn clamp_interior(&self, position: Position) -> Position {
        Position::new(
            position.x().clamp(1, self.width - 2),
            position.y().clamp(1, self.height - 2),
        )
    }

    /// Iterates interior tiles in row-major order.
    pub fn interior_tiles(&self) -> impl Iterator<Item = Position> {
        let width = self.width;
        (1..self.height - 1).flat_map(move |y| (1..width - 1).map(move |x| Position::new(x, y)))
    }
}

impl Default for MapBounds {
    fn default() -> Self {
        Self::new(MAP_WIDTH, MAP_HEIGHT)
    }
}

impl<'de> Deserialize<'de> for MapBounds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            width: u32,
            height: u32,
        }

        let Raw { width, height } = Raw::deserialize(deserializer)?;
        if width < MIN_MAP_DIMENSION || height < MIN_MAP_DIMENSION {
            return Err(de::Error::custom(format_args!(
                "map bounds {width}x{height} are below the {MIN_MAP_DIMENSION}x{MIN_MAP_DIMENSION} minimum"
            )));
        }
        Ok(Self { width, height })
    }
}

/// Kinds of enemies that roam the dungeon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Common, fragile attacker.
    Goblin,
    /// Heavy attacker with twice a goblin's health.
    Orc,
    /// Frail attacker.
    Ghost,
}

impl EnemyKind {
    /// Every enemy kind, in spawn-table order.
    pub const ALL: [EnemyKind; 3] = [Self::Goblin, Self::Orc, Self::Ghost];

    /// Health an enemy of this kind spawns with.
    #[must_use]
    pub const fn base_health(self) -> i32 {
        match self {
            Self::Goblin => 20,
            Self::Orc => 40,
            Self::Ghost => 15,
        }
    }

    /// Glyph used to draw the enemy.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Goblin => 'g',
            Self::Orc => 'O',
            Self::Ghost => '&',
        }
    }

    /// Colour category used to draw the enemy.
    #[must_use]
    pub const fn tint(self) -> Tint {
        match self {
            Self::Goblin => Tint::Red,
            Self::Orc => Tint::Yellow,
            Self::Ghost => Tint::White,
        }
    }

    /// Lower-case name used in log messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Goblin => "goblin",
            Self::Orc => "orc",
            Self::Ghost => "ghost",
        }
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kinds of weapons that can be found lying in the dungeon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Balanced blade.
    Sword,
    /// Light ranged weapon used in melee.
    Bow,
    /// Heaviest hitter.
    Axe,
}

impl WeaponKind {
    /// Every weapon kind, in spawn-table order.
    pub const ALL: [WeaponKind; 3] = [Self::Sword, Self::Bow, Self::Axe];

    /// Damage added to the player's strength while wielded.
    #[must_use]
    pub const fn damage_bonus(self) -> i32 {
        match self {
            Self::Sword => 15,
            Self::Bow => 10,
            Self::Axe => 20,
        }
    }

    /// Glyph used to draw the weapon.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Sword => '/',
            Self::Bow => '}',
            Self::Axe => '\\',
        }
    }

    /// Colour category used to draw the weapon.
    #[must_use]
    pub const fn tint(self) -> Tint {
        match self {
            Self::Sword => Tint::Blue,
            Self::Bow => Tint::Cyan,
            Self::Axe => Tint::Magenta,
        }
    }

    /// Lower-case name used in log messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sword => "sword",
            Self::Bow => "bow",
            Self::Axe => "axe",
        }
    }
}

impl fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Entry of the player's inventory.
///
/// `Fists` is the built-in unarmed entry that every inventory starts with and
/// never loses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Armament {
    /// Bare hands, no damage bonus.
    Fists,
    /// A collected weapon.
    Weapon(WeaponKind),
}

impl Armament {
    /// Damage added to the player's strength while this entry is wielded.
    #[must_use]
    pub const fn damage_bonus(self) -> i32 {
        match self {
            Self::Fists => 0,
            Self::Weapon(kind) => kind.damage_bonus(),
        }
    }

    /// Lower-case name used in the HUD.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fists => "fists",
            Self::Weapon(kind) => kind.name(),
        }
    }
}

impl fmt::Display for Armament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unique identifier assigned to an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(u32);

impl EnemyId {
    /// Creates a new enemy identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a weapon lying on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WeaponId(u32);

impl WeaponId {
    /// Creates a new weapon identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a trap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrapId(u32);

impl TrapId {
    /// Creates a new trap identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Immutable representation of the player used for queries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Tile the player occupies.
    pub position: Position,
    /// Glyph used to draw the player.
    pub glyph: char,
    /// Colour category used to draw the player.
    pub tint: Tint,
    /// Remaining health; negative once defeated enemies keep striking.
    pub health: i32,
    /// Base melee strength.
    pub strength: i32,
    /// Collected armaments in acquisition order, starting with fists.
    pub inventory: Vec<Armament>,
    /// Armament currently used for melee.
    pub wielded: Armament,
    /// Number of traps the player can still place.
    pub traps: u32,
}

impl PlayerSnapshot {
    /// Damage a melee attack deals with the wielded armament.
    #[must_use]
    pub const fn melee_damage(&self) -> i32 {
        self.strength + self.wielded.damage_bonus()
    }
}

/// Immutable representation of a single enemy used for queries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemySnapshot {
    /// Unique identifier assigned to the enemy.
    pub id: EnemyId,
    /// Kind of enemy.
    pub kind: EnemyKind,
    /// Tile the enemy occupies.
    pub position: Position,
    /// Glyph used to draw the enemy.
    pub glyph: char,
    /// Colour category used to draw the enemy.
    pub tint: Tint,
    /// Remaining health.
    pub health: i32,
    /// Damage dealt to the player per strike.
    pub strength: i32,
}

/// Immutable representation of a weapon lying on the map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponSnapshot {
    /// Unique identifier assigned to the weapon.
    pub id: WeaponId,
    /// Kind of weapon.
    pub kind: WeaponKind,
    /// Tile the weapon occupies.
    pub position: Position,
    /// Glyph used to draw the weapon.
    pub glyph: char,
    /// Colour category used to draw the weapon.
    pub tint: Tint,
}

/// Immutable representation of an armed trap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrapSnapshot {
    /// Unique identifier assigned to the trap.
    pub id: TrapId,
    /// Tile the trap occupies.
    pub position: Position,
    /// Glyph used to draw the trap.
    pub glyph: char,
    /// Colour category used to draw the trap.
    pub tint: Tint,
    /// Damage dealt when sprung.
    pub damage: i32,
}

/// Read-only snapshot describing all enemies in the dungeon.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnemyView {
    snapshots: Vec<EnemySnapshot>,
}

impl EnemyView {
    /// Creates a new enemy view from snapshots listed in world order.
    #[must_use]
    pub fn from_snapshots(snapshots: Vec<EnemySnapshot>) -> Self {
        Self { snapshots }
    }

    /// Iterator over the captured enemy snapshots in world order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &EnemySnapshot> {
        self.snapshots.iter()
    }

    /// Number of enemies captured by the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Reports whether the dungeon holds no enemies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<EnemySnapshot> {
        self.snapshots
    }
}

/// Read-only snapshot describing all weapons lying in the dungeon.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeaponView {
    snapshots: Vec<WeaponSnapshot>,
}

impl WeaponView {
    /// Creates a new weapon view from snapshots listed in world order.
    #[must_use]
    pub fn from_snapshots(snapshots: Vec<WeaponSnapshot>) -> Self {
        Self { snapshots }
    }

    /// Iterator over the captured weapon snapshots in world order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &WeaponSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<WeaponSnapshot> {
        self.snapshots
    }
}

/// Read-only snapshot describing all armed traps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrapView {
    snapshots: Vec<TrapSnapshot>,
}

impl TrapView {
    /// Creates a new trap view from snapshots listed in placement order.
    #[must_use]
    pub fn from_snapshots(snapshots: Vec<TrapSnapshot>) -> Self {
        Self { snapshots }
    }

    /// Iterator over the captured trap snapshots in placement order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &TrapSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<TrapSnapshot> {
        self.snapshots
    }
}

/// Complete read-only picture of the world handed to renderers each tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Map dimensions.
    pub bounds: MapBounds,
    /// Player state.
    pub player: PlayerSnapshot,
    /// Enemies in world order.
    pub enemies: Vec<EnemySnapshot>,
    /// Weapons in world order.
    pub weapons: Vec<WeaponSnapshot>,
    /// Traps in placement order.
    pub traps: Vec<TrapSnapshot>,
    /// Current wave number, starting at 1.
    pub wave: u32,
    /// Accumulated score.
    pub score: u32,
    /// Most recent log lines, oldest first.
    pub messages: Vec<String>,
    /// Session lifecycle state.
    pub session: SessionState,
}
