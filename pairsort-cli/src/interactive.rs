/// Interactive prompts: picking the selection and running the voting loop.
///
/// Generic over reader/writer so the loop can be driven by a script in tests.
use anyhow::Result;
use pairsort_core::{validate_selection, Command, Item, RankedItem, Session, Transition};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::config::ProgressMode;
use crate::input::{parse_action, Action, HELP};
use crate::output::format_catalog;
use crate::render::render_snapshot;
use crate::selection::parse_selection;

/// Read one line. `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Show the numbered catalog and ask until at least two characters are picked.
///
/// Returns `None` if input ends first.
pub fn prompt_selection(catalog: &[Item], input: &mut impl BufRead, out: &mut impl Write) -> Result<Option<Vec<Item>>> {
    write!(out, "{}", format_catalog(catalog))?;
    loop {
        write!(out, "Select characters (numbers, ranges or names, comma or space separated): ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        match parse_selection(&line, catalog) {
            Ok(picked) => {
                let selection: Vec<Item> = picked.into_iter().map(|idx| catalog[idx].clone()).collect();
                match validate_selection(&selection) {
                    Ok(()) => return Ok(Some(selection)),
                    Err(e) => writeln!(out, "{e}")?,
                }
            }
            Err(e) => writeln!(out, "{e}")?,
        }
    }
}

/// Run the voting loop until quit or end of input.
///
/// Returns the final ranking if every pair was voted on.
pub fn run_session(
    session: &mut Session,
    input: &mut impl BufRead,
    out: &mut impl Write,
    mode: ProgressMode,
) -> Result<Option<Vec<RankedItem>>> {
    render_snapshot(out, &session.snapshot(), mode)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            break;
        };

        match parse_action(&line) {
            Some(Action::Command(command)) => {
                let transition = session.dispatch(command);
                debug!(?command, ?transition, "dispatched");
                if transition == Transition::Ignored {
                    let note = match command {
                        Command::Undo => "Nothing to undo.",
                        _ => "All pairs are voted. Press r to restart or u to undo.",
                    };
                    writeln!(out, "{note}")?;
                }
            }
            Some(Action::Help) => {
                write!(out, "{HELP}")?;
                continue;
            }
            Some(Action::Quit) => break,
            None if line.trim().is_empty() => {}
            None => {
                writeln!(out, "Unknown key \"{}\".", line.trim())?;
                write!(out, "{HELP}")?;
                continue;
            }
        }

        render_snapshot(out, &session.snapshot(), mode)?;
    }

    Ok(session.ranking())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn catalog() -> Vec<Item> {
        ["Ayla", "Bram", "Cass"].iter().map(|n| Item::new(*n, "")).collect()
    }

    fn run(names: &[&str], script: &str) -> (Option<Vec<RankedItem>>, String, Session) {
        let selection = names.iter().map(|n| Item::new(*n, "")).collect();
        let mut session = Session::with_seed(selection, 10).unwrap();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let ranking = run_session(&mut session, &mut input, &mut out, ProgressMode::Percent).unwrap();
        (ranking, String::from_utf8(out).unwrap(), session)
    }

    #[test]
    fn test_prompt_selection_retries_until_valid() {
        let mut input = Cursor::new(b"Zed\n2\n3, ayla\n".to_vec());
        let mut out = Vec::new();
        let selection = prompt_selection(&catalog(), &mut input, &mut out).unwrap().unwrap();

        let names: Vec<&str> = selection.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Ayla", "Cass"]);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1. Ayla\n2. Bram\n3. Cass\n"));
        assert!(text.contains("No character named \"Zed\""));
        assert!(text.contains("Select at least 2 characters to rank (got 1)"));
    }

    #[test]
    fn test_prompt_selection_end_of_input() {
        let mut input = Cursor::new(b"1\n".to_vec());
        let mut out = Vec::new();
        assert!(prompt_selection(&catalog(), &mut input, &mut out).unwrap().is_none());
    }

    #[test]
    fn test_two_item_session_vote_undo_vote() {
        let (ranking, text, session) = run(&["X", "Y"], "d\nu\nright\n");
        let ranking = ranking.unwrap();
        assert_eq!(ranking[0].to_string(), "1. Y");
        assert_eq!(session.history().len(), 1);
        assert!(text.contains("Results\n  1. Y\n  2. X\n"));
    }

    #[test]
    fn test_quit_before_completion() {
        let (ranking, _, session) = run(&["A", "B", "C"], "a\nq\nd\n");
        assert!(ranking.is_none());
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn test_ignored_commands_are_reported() {
        let (_, text, _) = run(&["X", "Y"], "u\na\na\n");
        assert!(text.contains("Nothing to undo."));
        assert!(text.contains("All pairs are voted."));
    }

    #[test]
    fn test_unknown_key_and_help() {
        let (ranking, text, session) = run(&["X", "Y"], "zzz\nh\n\n");
        assert!(ranking.is_none());
        assert_eq!(session.cursor(), 0);
        assert!(text.contains("Unknown key \"zzz\""));
        assert!(text.contains("pick the left character"));
    }

    #[test]
    fn test_unknown_input_shows_help_and_keeps_state() {
        let (ranking, text, session) = run(&["X", "Y", "Z"], "a\nzzz\n");
        assert!(ranking.is_none());
        assert_eq!(session.cursor(), 1);
        let after = text.split("Unknown key \"zzz\".").nth(1).unwrap();
        assert!(after.starts_with("\nKeys (type then press Enter):"));
        assert!(after.contains("take back the last vote"));
    }

    #[test]
    fn test_restart_mid_session() {
        let (ranking, _, session) = run(&["A", "B", "C"], "a\na\nr\n");
        assert!(ranking.is_none());
        assert_eq!(session.cursor(), 0);
        assert!(session.scores().all(|(_, s)| s == 0));
    }

    #[test]
    fn test_full_three_item_session() {
        let (ranking, _, _) = run(&["A", "B", "C"], "a\na\na\n");
        let ranking = ranking.unwrap();
        assert_eq!(ranking.len(), 3);
        assert_eq!(ranking.iter().map(|r| r.score).sum::<u32>(), 3);
    }
}
