#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure bootstrap system that greets the player when a session starts.

use dungeon_stay_core::{Command, WELCOME_BANNER};

/// Key bindings announced right after the banner.
pub const CONTROLS_HINT: &str = "Arrow keys: Move | 'a': Attack | 't': Place Trap";

/// Closing line of the greeting.
pub const SURVIVAL_HINT: &str = "Survive as long as you can!";

/// Produces the log lines required to greet the player.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Queues the three welcome lines, banner first.
    pub fn greet(&self, out: &mut Vec<Command>) {
        out.extend(
            [WELCOME_BANNER, CONTROLS_HINT, SURVIVAL_HINT]
                .into_iter()
                .map(|line| Command::LogMessage {
                    text: line.to_owned(),
                }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_lists_banner_controls_and_goal() {
        let mut out = Vec::new();

        Bootstrap.greet(&mut out);

        let lines: Vec<String> = out
            .into_iter()
            .map(|command| match command {
                Command::LogMessage { text } => text,
                other => panic!("unexpected command: {other:?}"),
            })
            .collect();
        assert_eq!(
            lines,
            vec![
                "Welcome to DUNGEON STAY!",
                "Arrow keys: Move | 'a': Attack | 't': Place Trap",
                "Survive as long as you can!",
            ]
        );
    }
}
