/// Key binding: every typed token maps to one action through a single table.
use pairsort_core::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Command(Command),
    Help,
    Quit,
}

const BINDINGS: &[(&str, Action)] = &[
    ("a", Action::Command(Command::ChooseLeft)),
    ("left", Action::Command(Command::ChooseLeft)),
    ("arrowleft", Action::Command(Command::ChooseLeft)),
    ("1", Action::Command(Command::ChooseLeft)),
    ("d", Action::Command(Command::ChooseRight)),
    ("right", Action::Command(Command::ChooseRight)),
    ("arrowright", Action::Command(Command::ChooseRight)),
    ("2", Action::Command(Command::ChooseRight)),
    ("u", Action::Command(Command::Undo)),
    ("b", Action::Command(Command::Undo)),
    ("undo", Action::Command(Command::Undo)),
    ("backspace", Action::Command(Command::Undo)),
    ("r", Action::Command(Command::Restart)),
    ("restart", Action::Command(Command::Restart)),
    ("enter", Action::Command(Command::Restart)),
    ("h", Action::Help),
    ("?", Action::Help),
    ("help", Action::Help),
    ("q", Action::Quit),
    ("quit", Action::Quit),
    ("exit", Action::Quit),
];

/// Look up a typed line. `None` for anything unbound, including an empty line.
pub fn parse_action(line: &str) -> Option<Action> {
    let key = line.trim().to_lowercase();
    BINDINGS
        .iter()
        .find(|(token, _)| *token == key)
        .map(|&(_, action)| action)
}

pub const HELP: &str = "\
Keys (type then press Enter):
  a / left / arrowleft / 1        pick the left character
  d / right / arrowright / 2      pick the right character
  u / b / undo / backspace        take back the last vote
  r / restart / enter             reshuffle and start over
  h / ? / help                    show this help
  q / quit / exit                 stop
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_bindings() {
        for key in ["a", "A", " left ", "ArrowLeft", "1"] {
            assert_eq!(parse_action(key), Some(Action::Command(Command::ChooseLeft)), "{key}");
        }
        for key in ["d", "RIGHT", "arrowright", "2"] {
            assert_eq!(parse_action(key), Some(Action::Command(Command::ChooseRight)), "{key}");
        }
    }

    #[test]
    fn test_undo_restart_quit_help() {
        assert_eq!(parse_action("backspace"), Some(Action::Command(Command::Undo)));
        assert_eq!(parse_action("u"), Some(Action::Command(Command::Undo)));
        assert_eq!(parse_action("Enter"), Some(Action::Command(Command::Restart)));
        assert_eq!(parse_action("r"), Some(Action::Command(Command::Restart)));
        assert_eq!(parse_action("q"), Some(Action::Quit));
        assert_eq!(parse_action("?"), Some(Action::Help));
    }

    #[test]
    fn test_unbound_input() {
        assert_eq!(parse_action(""), None);
        assert_eq!(parse_action("   "), None);
        assert_eq!(parse_action("x"), None);
    }

    #[test]
    fn test_every_command_has_a_binding() {
        for command in [Command::ChooseLeft, Command::ChooseRight, Command::Undo, Command::Restart] {
            assert!(BINDINGS.iter().any(|(_, a)| *a == Action::Command(command)));
        }
    }

    #[test]
    fn test_help_lists_every_binding() {
        let listed: Vec<&str> = HELP
            .lines()
            .skip(1)
            .filter_map(|line| line.trim().split("  ").next())
            .flat_map(|keys| keys.split(" / "))
            .collect();
        for (token, _) in BINDINGS {
            assert!(listed.contains(token), "{token} missing from help");
        }
        assert_eq!(listed.len(), BINDINGS.len());
    }
}
