/// Terminal rendering of session snapshots.
use pairsort_core::{Item, Phase, Progress, Snapshot};
use std::io::{self, Write};

use crate::config::ProgressMode;

const BAR_WIDTH: usize = 30;

pub fn progress_label(progress: &Progress, mode: ProgressMode) -> String {
    match mode {
        ProgressMode::Percent => progress.percent_text(),
        ProgressMode::Count => progress.count_text(),
        ProgressMode::Both => format!("{} ({})", progress.percent_text(), progress.count_text()),
    }
}

pub fn progress_bar(progress: &Progress, mode: ProgressMode) -> String {
    let filled = (progress.percent as usize * BAR_WIDTH / 100).min(BAR_WIDTH);
    format!(
        "[{}{}] {}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress_label(progress, mode)
    )
}

fn label(item: &Item) -> String {
    if item.gender.is_empty() {
        item.name.clone()
    } else {
        format!("{} ({})", item.name, item.gender)
    }
}

pub fn render_snapshot(out: &mut impl Write, snapshot: &Snapshot<'_>, mode: ProgressMode) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", progress_bar(&snapshot.progress, mode))?;

    match &snapshot.phase {
        Phase::AwaitingVote { left, right } => {
            writeln!(out, "  [A] {}   vs   {} [D]", label(left), label(right))?;
            if snapshot.can_undo {
                writeln!(out, "  (u to undo)")?;
            }
        }
        Phase::Complete { ranking } => {
            writeln!(out, "Results")?;
            for line in ranking {
                writeln!(out, "  {line}")?;
            }
            writeln!(out, "Press r to restart, q to quit.")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairsort_core::{Command, Session};

    fn render(snapshot: &Snapshot<'_>, mode: ProgressMode) -> String {
        let mut buf = Vec::new();
        render_snapshot(&mut buf, snapshot, mode).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_progress_labels() {
        let progress = Progress::new(2, 3);
        assert_eq!(progress_label(&progress, ProgressMode::Percent), "67%");
        assert_eq!(progress_label(&progress, ProgressMode::Count), "2 / 3");
        assert_eq!(progress_label(&progress, ProgressMode::Both), "67% (2 / 3)");
    }

    #[test]
    fn test_progress_bar_fill() {
        let empty = progress_bar(&Progress::new(0, 4), ProgressMode::Percent);
        assert_eq!(empty, format!("[{}] 0%", "-".repeat(BAR_WIDTH)));
        let half = progress_bar(&Progress::new(2, 4), ProgressMode::Percent);
        assert!(half.starts_with(&format!("[{}{}]", "#".repeat(15), "-".repeat(15))));
        let full = progress_bar(&Progress::new(4, 4), ProgressMode::Count);
        assert_eq!(full, format!("[{}] 4 / 4", "#".repeat(BAR_WIDTH)));
    }

    #[test]
    fn test_render_pair_and_undo_hint() {
        let selection = vec![Item::new("X", "f"), Item::new("Y", "")];
        let mut session = Session::with_seed(selection, 1).unwrap();
        let text = render(&session.snapshot(), ProgressMode::Percent);
        assert!(text.contains("[A] X (f)   vs   Y [D]"));
        assert!(!text.contains("undo"));

        session.dispatch(Command::ChooseRight);
        session.dispatch(Command::Undo);
        let text = render(&session.snapshot(), ProgressMode::Percent);
        assert!(text.contains("0%"));
    }

    #[test]
    fn test_undo_hint_after_first_vote() {
        let selection = vec![Item::new("X", ""), Item::new("Y", ""), Item::new("Z", "")];
        let mut session = Session::with_seed(selection, 2).unwrap();
        session.dispatch(Command::ChooseLeft);
        let text = render(&session.snapshot(), ProgressMode::Count);
        assert!(text.contains("(u to undo)"));
        assert!(text.contains("1 / 3"));
    }

    #[test]
    fn test_render_results() {
        let selection = vec![Item::new("X", ""), Item::new("Y", "")];
        let mut session = Session::with_seed(selection, 1).unwrap();
        session.dispatch(Command::ChooseRight);
        let text = render(&session.snapshot(), ProgressMode::Both);
        assert!(text.contains("Results\n  1. Y\n  2. X\n"));
        assert!(text.contains("100% (1 / 1)"));
    }
}
