use dungeon_stay_core::{Command, EnemyKind, Event, Position, SessionState};
use dungeon_stay_system_movement::Movement;
use dungeon_stay_world::{self as world, query, World};

#[test]
fn pursuit_reduces_chebyshev_distance() {
    let mut world = World::new();
    let mut events = Vec::new();
    spawn(&mut world, &mut events, EnemyKind::Goblin, Position::new(1, 1), 5);
    spawn(&mut world, &mut events, EnemyKind::Orc, Position::new(28, 13), 5);
    spawn(&mut world, &mut events, EnemyKind::Ghost, Position::new(15, 2), 5);

    let player = query::player(&world).position;
    let before: Vec<u32> = query::enemy_view(&world)
        .iter()
        .map(|enemy| enemy.position.chebyshev_distance(player))
        .collect();

    pump(&mut world, &mut Movement::new());

    let after: Vec<u32> = query::enemy_view(&world)
        .iter()
        .map(|enemy| enemy.position.chebyshev_distance(player))
        .collect();
    for (before, after) in before.iter().zip(after.iter()) {
        assert_eq!(*after + 1, *before, "each enemy must close in by one tile");
    }
}

#[test]
fn cumulative_strikes_defeat_player_in_one_tick() {
    let mut world = World::new();
    let mut events = Vec::new();
    world::apply(
        &mut world,
        Command::ConfigurePlayer {
            health: 10,
            strength: 10,
            traps: 0,
        },
        &mut events,
    );
    spawn(&mut world, &mut events, EnemyKind::Goblin, Position::new(14, 7), 6);
    spawn(&mut world, &mut events, EnemyKind::Orc, Position::new(16, 8), 7);

    let events = pump(&mut world, &mut Movement::new());

    assert_eq!(query::session_state(&world), SessionState::Defeated);
    assert_eq!(query::player(&world).health, -3);
    assert_eq!(
        events
            .iter()
            .filter(|event| matches!(event, Event::PlayerStruck { .. }))
            .count(),
        2
    );
    let messages: Vec<&str> = query::messages(&world).collect();
    assert_eq!(
        messages,
        vec!["goblin hit you! (HP: 4)", "orc hit you! (HP: -3)", "YOU DIED!"]
    );
}

fn spawn(
    world: &mut World,
    events: &mut Vec<Event>,
    kind: EnemyKind,
    position: Position,
    strength: i32,
) {
    world::apply(
        world,
        Command::SpawnEnemy {
            kind,
            position,
            strength,
        },
        events,
    );
}

fn pump(world: &mut World, movement: &mut Movement) -> Vec<Event> {
    let mut commands = Vec::new();
    movement.handle(
        query::bounds(world),
        &query::player(world),
        &query::enemy_view(world),
        &mut commands,
    );

    let mut events = Vec::new();
    for command in commands {
        world::apply(world, command, &mut events);
    }
    events
}
