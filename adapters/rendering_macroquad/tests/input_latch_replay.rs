use dungeon_stay_core::Input;
use dungeon_stay_rendering_macroquad::InputLatch;

/// Feeds one optional key press per frame and takes the latch every `frames_per_tick` frames.
fn run_sequence(presses: &[Option<Input>], frames_per_tick: usize) -> Vec<Input> {
    let mut latch = InputLatch::default();
    let mut ticks = Vec::new();
    for (frame, press) in presses.iter().enumerate() {
        if let Some(input) = press {
            latch.register(*input);
        }
        if (frame + 1) % frames_per_tick == 0 {
            ticks.push(latch.take());
        }
    }
    ticks
}

#[test]
fn latest_key_wins_within_a_tick() {
    let presses = [
        Some(Input::MoveUp),
        Some(Input::Attack),
        None,
        None,
        None,
        Some(Input::PlaceTrap),
    ];

    let first_run = run_sequence(&presses, 2);
    let second_run = run_sequence(&presses, 2);

    assert_eq!(first_run, vec![Input::Attack, Input::NoOp, Input::PlaceTrap]);
    assert_eq!(first_run, second_run);
}

#[test]
fn pending_quit_is_never_overwritten() {
    let presses = [Some(Input::Quit), Some(Input::MoveLeft), None, Some(Input::Attack)];

    assert_eq!(run_sequence(&presses, 2), vec![Input::Quit, Input::Attack]);
}
