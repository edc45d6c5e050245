use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::MoveToColumn,
    queue,
    style::{Print, PrintStyledContent, Stylize},
    terminal::{Clear, ClearType},
};
use speedreader_core::render::{FocusLine, Screen};

/// Single-line renderer that keeps the fixation character on a fixed column.
pub(super) struct TerminalRenderer {
    out: Stdout,
    width: usize,
    anchor_percent: usize,
}

impl TerminalRenderer {
    pub(super) fn new(width: usize, anchor_percent: usize) -> Self {
        Self {
            out: io::stdout(),
            width,
            anchor_percent,
        }
    }

    pub(super) fn render(&mut self, screen: Screen<'_>) -> io::Result<()> {
        let mut out = self.out.lock();
        queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;

        match screen {
            Screen::Empty { wpm } => {
                queue!(out, Print(format!("(nothing to read) {wpm} wpm")))?;
            }
            Screen::Reading {
                word,
                index,
                total,
                wpm,
                progress,
                playing,
                ..
            } => {
                let line = FocusLine::place(word, self.width, self.anchor_percent);
                let gap = self.width.saturating_sub(line.used_cols()).max(1);
                let status = format!(
                    "{:gap$}{} {:>4} wpm {:>3}% {}/{}",
                    "",
                    if playing { '>' } else { '|' },
                    wpm,
                    (progress * 100.0).round() as u32,
                    index + 1,
                    total,
                );

                queue!(
                    out,
                    Print(" ".repeat(line.pad)),
                    Print(line.word.before),
                    PrintStyledContent(line.word.focus.red().bold()),
                    Print(line.word.after),
                    Print(status.dark_grey()),
                )?;
            }
        }

        out.flush()
    }

    pub(super) fn finish(&mut self) -> io::Result<()> {
        let mut out = self.out.lock();
        queue!(out, Print("\r\n"))?;
        out.flush()
    }
}
