use dungeon_stay_core::{Event, Input, SessionState, KILL_SCORE, MESSAGE_LOG_CAPACITY};
use dungeon_stay_simulation::{Config, Simulation};
use proptest::prelude::*;

fn any_input() -> impl Strategy<Value = Input> {
    prop::sample::select(vec![
        Input::MoveUp,
        Input::MoveDown,
        Input::MoveLeft,
        Input::MoveRight,
        Input::Attack,
        Input::PlaceTrap,
        Input::NoOp,
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ticks_preserve_world_invariants(
        seed in any::<u64>(),
        inputs in prop::collection::vec(any_input(), 1..80),
    ) {
        let mut simulation = Simulation::new(Config::default().with_seed(seed)).expect("valid config");
        let mut previous = simulation.snapshot();

        for input in inputs {
            let outcome = simulation.advance(input);
            let snapshot = simulation.snapshot();

            prop_assert!(snapshot.player.health <= previous.player.health);
            prop_assert!(snapshot.score >= previous.score);
            prop_assert_eq!(snapshot.score % KILL_SCORE, 0);
            prop_assert!(snapshot.wave >= previous.wave);
            prop_assert!(snapshot.messages.len() <= MESSAGE_LOG_CAPACITY);
            prop_assert!(snapshot.bounds.is_interior(snapshot.player.position));
            for enemy in &snapshot.enemies {
                prop_assert!(enemy.health > 0);
                prop_assert!(snapshot.bounds.is_interior(enemy.position));
            }
            if previous.session == SessionState::Defeated {
                prop_assert_eq!(snapshot.session, SessionState::Defeated);
                prop_assert_eq!(snapshot.player.position, previous.player.position);
            }
            if snapshot.session == SessionState::Active {
                prop_assert!(snapshot.player.health > 0);
            }

            let kills = outcome
                .events
                .iter()
                .filter(|event| matches!(event, Event::EnemyKilled { .. }))
                .count();
            prop_assert_eq!(snapshot.score - previous.score, KILL_SCORE * kills as u32);

            if let Some(wave) = outcome.events.iter().find_map(|event| match event {
                Event::WaveStarted { wave } => Some(*wave),
                _ => None,
            }) {
                prop_assert_eq!(wave, previous.wave + 1);
                prop_assert_eq!(snapshot.enemies.len() as u32, wave + 2);
                prop_assert_eq!(snapshot.player.traps, previous.player.traps + 1);
            }

            previous = snapshot;
        }
    }
}
