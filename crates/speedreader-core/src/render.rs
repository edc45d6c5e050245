//! App-level view models consumed by rendering surfaces.

use crate::focus::split_at_focus;

/// Share of the line width where the fixation character sits.
pub const DEFAULT_ANCHOR_PERCENT: usize = 42;

/// A word cut around its fixation character.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FocusWord<'a> {
    pub before: &'a str,
    pub focus: &'a str,
    pub after: &'a str,
}

impl<'a> FocusWord<'a> {
    pub fn new(word: &'a str) -> Self {
        let (before, focus, after) = split_at_focus(word);
        Self {
            before,
            focus,
            after,
        }
    }
}

/// Fixed-pitch placement of a word so its fixation character lands on the
/// same column for every word.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FocusLine<'a> {
    /// Blank columns to emit before `word.before`.
    pub pad: usize,
    pub anchor_col: usize,
    pub word: FocusWord<'a>,
}

impl<'a> FocusLine<'a> {
    pub fn layout(word: &'a str, width_cols: usize, anchor_percent: usize) -> Self {
        Self::place(FocusWord::new(word), width_cols, anchor_percent)
    }

    pub fn place(word: FocusWord<'a>, width_cols: usize, anchor_percent: usize) -> Self {
        let anchor_col = (width_cols * anchor_percent.min(100)) / 100;
        let before_cols = word.before.chars().count();

        // Words with a long lead-in overflow to the left edge instead of
        // shifting the anchor.
        Self {
            pad: anchor_col.saturating_sub(before_cols),
            anchor_col,
            word,
        }
    }

    /// Columns taken by the padding and the whole word.
    pub fn used_cols(&self) -> usize {
        self.pad
            + self.word.before.chars().count()
            + self.word.focus.chars().count()
            + self.word.after.chars().count()
    }
}

/// Snapshot of the reader handed to rendering surfaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Screen<'a> {
    /// Nothing to read.
    Empty { wpm: u32 },
    Reading {
        word: FocusWord<'a>,
        index: usize,
        total: usize,
        wpm: u32,
        /// 0.0..1.0
        progress: f64,
        playing: bool,
        end_of_sentence: bool,
        end_of_paragraph: bool,
    },
}
