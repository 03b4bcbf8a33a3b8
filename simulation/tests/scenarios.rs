use dungeon_stay_core::{
    Armament, Command, DamageSource, Direction, EnemyId, EnemyKind, Event, Input, Position,
    SessionState, WeaponId, WeaponKind, KILL_SCORE,
};
use dungeon_stay_simulation::Simulation;
use dungeon_stay_world::{self as world, World};

const SEED: u64 = 0x0bad_cafe;

fn scripted(commands: Vec<Command>) -> Simulation {
    let mut world = World::new();
    let mut events = Vec::new();
    for command in commands {
        world::apply(&mut world, command, &mut events);
    }
    assert!(
        events
            .iter()
            .all(|event| !matches!(event, Event::SpawnRejected { .. })),
        "scenario setup must not collide: {events:?}"
    );
    Simulation::with_world(world, SEED)
}

fn enemy(kind: EnemyKind, x: u32, y: u32, strength: i32) -> Command {
    Command::SpawnEnemy {
        kind,
        position: Position::new(x, y),
        strength,
    }
}

#[test]
fn fists_wound_an_adjacent_goblin() {
    let mut simulation = scripted(vec![enemy(EnemyKind::Goblin, 15, 6, 5)]);

    let outcome = simulation.advance(Input::Attack);

    assert_eq!(outcome.session, SessionState::Active);
    let snapshot = simulation.snapshot();
    assert_eq!(snapshot.enemies.len(), 1);
    assert_eq!(snapshot.enemies[0].health, 10);
    assert_eq!(snapshot.messages[0], "You hit the goblin! (HP: 10)");
    assert_eq!(snapshot.messages[1], "goblin hit you! (HP: 95)");
    assert_eq!(snapshot.player.health, 95);
}

#[test]
fn axe_kill_clears_wave_and_restocks() {
    let mut simulation = scripted(vec![
        Command::SpawnWeapon {
            kind: WeaponKind::Axe,
            position: Position::new(16, 7),
        },
        Command::MovePlayer {
            direction: Direction::East,
        },
        Command::PickUpWeapon {
            weapon: WeaponId::new(0),
        },
        enemy(EnemyKind::Goblin, 16, 6, 9),
    ]);
    assert_eq!(
        simulation.snapshot().player.wielded,
        Armament::Weapon(WeaponKind::Axe)
    );

    let outcome = simulation.advance(Input::Attack);

    assert!(outcome.events.contains(&Event::WaveStarted { wave: 2 }));
    let snapshot = simulation.snapshot();
    assert_eq!(snapshot.score, KILL_SCORE);
    assert_eq!(snapshot.wave, 2);
    assert_eq!(snapshot.enemies.len(), 4);
    assert_eq!(snapshot.weapons.len(), 1);
    assert_eq!(snapshot.player.traps, 1);
    assert_eq!(
        snapshot.messages,
        vec![
            "You picked up a axe!",
            "You killed the goblin!",
            "Wave 2 incoming!",
        ]
    );
}

#[test]
fn two_strikes_defeat_player_in_one_tick() {
    let mut simulation = scripted(vec![
        Command::ConfigurePlayer {
            health: 10,
            strength: 10,
            traps: 0,
        },
        enemy(EnemyKind::Goblin, 14, 6, 6),
        enemy(EnemyKind::Orc, 16, 8, 7),
    ]);

    let outcome = simulation.advance(Input::NoOp);

    assert_eq!(outcome.session, SessionState::Defeated);
    assert_eq!(
        outcome
            .events
            .iter()
            .filter(|event| matches!(event, Event::PlayerDefeated))
            .count(),
        1
    );
    assert_eq!(simulation.snapshot().player.health, -3);
}

#[test]
fn defeated_player_keeps_taking_hits_but_cannot_act() {
    let mut simulation = scripted(vec![
        Command::ConfigurePlayer {
            health: 5,
            strength: 10,
            traps: 2,
        },
        enemy(EnemyKind::Orc, 15, 6, 8),
    ]);

    let _ = simulation.advance(Input::NoOp);
    assert_eq!(simulation.session_state(), SessionState::Defeated);
    let health_after_defeat = simulation.snapshot().player.health;

    let outcome = simulation.advance(Input::Attack);
    assert!(!outcome
        .events
        .iter()
        .any(|event| matches!(event, Event::EnemyDamaged { .. } | Event::EnemyKilled { .. })));

    let _ = simulation.advance(Input::MoveLeft);
    let _ = simulation.advance(Input::PlaceTrap);

    let snapshot = simulation.snapshot();
    assert_eq!(snapshot.session, SessionState::Defeated);
    assert_eq!(snapshot.player.position, Position::new(15, 7));
    assert_eq!(snapshot.player.traps, 2);
    assert!(snapshot.traps.is_empty());
    assert_eq!(snapshot.player.health, health_after_defeat - 3 * 8);
    assert_eq!(
        snapshot
            .messages
            .iter()
            .filter(|line| line.as_str() == "YOU DIED!")
            .count(),
        1
    );

    let outcome = simulation.advance(Input::Quit);
    assert_eq!(outcome.session, SessionState::Terminated);
}

#[test]
fn trap_catches_approaching_goblin() {
    let mut simulation = scripted(vec![
        Command::ConfigurePlayer {
            health: 100,
            strength: 10,
            traps: 1,
        },
        enemy(EnemyKind::Goblin, 13, 7, 5),
    ]);

    let outcome = simulation.advance(Input::PlaceTrap);
    assert!(outcome
        .events
        .iter()
        .any(|event| matches!(event, Event::TrapPlaced { .. })));
    let _ = simulation.advance(Input::NoOp);
    let outcome = simulation.advance(Input::NoOp);

    assert!(outcome
        .events
        .iter()
        .any(|event| matches!(event, Event::TrapSprung { .. })));
    let snapshot = simulation.snapshot();
    assert!(snapshot.traps.is_empty());
    assert_eq!(snapshot.score, KILL_SCORE);
    assert_eq!(snapshot.wave, 2);
    assert_eq!(snapshot.player.traps, 1);
    assert!(snapshot
        .messages
        .iter()
        .any(|line| line == "Trap killed goblin!"));
}

fn armed_with_traps(traps: u32, enemies: Vec<Command>) -> Simulation {
    let mut commands = vec![Command::ConfigurePlayer {
        health: 100,
        strength: 10,
        traps,
    }];
    commands.extend(enemies);
    scripted(commands)
}

fn trap_hits(events: &[Event]) -> Vec<(EnemyId, i32)> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::EnemyDamaged {
                enemy,
                source: DamageSource::Trap,
                remaining,
                ..
            } => Some((*enemy, *remaining)),
            _ => None,
        })
        .collect()
}

#[test]
fn surviving_victim_still_consumes_the_trap() {
    let mut simulation = armed_with_traps(1, vec![enemy(EnemyKind::Orc, 13, 7, 5)]);

    let _ = simulation.advance(Input::PlaceTrap);
    let _ = simulation.advance(Input::NoOp);
    assert_eq!(simulation.snapshot().enemies[0].position, Position::new(15, 7));
    let outcome = simulation.advance(Input::NoOp);

    assert_eq!(trap_hits(&outcome.events), vec![(EnemyId::new(0), 15)]);
    assert!(outcome
        .events
        .iter()
        .any(|event| matches!(event, Event::TrapSprung { .. })));
    let snapshot = simulation.snapshot();
    assert!(snapshot.traps.is_empty());
    assert_eq!(snapshot.enemies.len(), 1);
    assert_eq!(snapshot.enemies[0].health, 15);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.wave, 1);
}

#[test]
fn trap_hits_only_the_first_of_stacked_enemies() {
    let mut simulation = armed_with_traps(
        1,
        vec![
            enemy(EnemyKind::Orc, 13, 7, 5),
            enemy(EnemyKind::Orc, 17, 7, 5),
        ],
    );

    let _ = simulation.advance(Input::PlaceTrap);
    let _ = simulation.advance(Input::NoOp);
    let stacked: Vec<Position> = simulation
        .snapshot()
        .enemies
        .iter()
        .map(|orc| orc.position)
        .collect();
    assert_eq!(stacked, vec![Position::new(15, 7), Position::new(15, 7)]);
    let outcome = simulation.advance(Input::NoOp);

    assert_eq!(trap_hits(&outcome.events), vec![(EnemyId::new(0), 15)]);
    let snapshot = simulation.snapshot();
    let health: Vec<i32> = snapshot.enemies.iter().map(|orc| orc.health).collect();
    assert_eq!(health, vec![15, 40]);
    assert!(snapshot.traps.is_empty());
    assert_eq!(snapshot.player.health, 70);
}

#[test]
fn untouched_trap_outlasts_the_wave() {
    let mut simulation = scripted(vec![
        Command::ConfigurePlayer {
            health: 100,
            strength: 20,
            traps: 1,
        },
        enemy(EnemyKind::Goblin, 15, 5, 5),
    ]);

    let _ = simulation.advance(Input::PlaceTrap);
    assert_eq!(simulation.snapshot().enemies[0].position, Position::new(15, 6));
    let outcome = simulation.advance(Input::Attack);

    assert!(outcome.events.contains(&Event::WaveStarted { wave: 2 }));
    assert!(!outcome
        .events
        .iter()
        .any(|event| matches!(event, Event::TrapSprung { .. })));
    let snapshot = simulation.snapshot();
    assert_eq!(snapshot.wave, 2);
    assert_eq!(snapshot.enemies.len(), 4);
    assert_eq!(snapshot.traps.len(), 1);
    assert_eq!(snapshot.traps[0].position, Position::new(15, 7));
    assert_eq!(snapshot.player.traps, 1);
}

#[test]
fn empty_trap_inventory_is_reported() {
    let mut simulation = scripted(vec![enemy(EnemyKind::Ghost, 2, 2, 5)]);

    let outcome = simulation.advance(Input::PlaceTrap);

    assert!(outcome.events.contains(&Event::TrapUnavailable));
    assert_eq!(
        simulation.snapshot().messages.first().map(String::as_str),
        Some("No traps left!")
    );
}

#[test]
fn walls_stop_the_player() {
    let mut simulation = scripted(vec![
        Command::ConfigureMap {
            width: 5,
            height: 5,
        },
        enemy(EnemyKind::Ghost, 1, 1, 5),
    ]);

    for _ in 0..3 {
        let _ = simulation.advance(Input::MoveRight);
    }

    assert_eq!(simulation.snapshot().player.position, Position::new(3, 2));
}
