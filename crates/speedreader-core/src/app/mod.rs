//! Playback state machine for RSVP reading.

use log::{debug, info, warn};

use crate::{
    content::{Token, tokenize},
    input::{InputEvent, InputProvider, Key, Modifiers},
    render::{FocusWord, Screen},
    schedule::AdvanceTimer,
    timing::{
        ConfigError, SpeedConfig, SpeedConfigPatch, SpeedPreset, effective_wpm, token_delay_ms,
    },
};

pub const SEEK_STEP_WORDS: usize = 10;
pub const SEEK_STEP_WORDS_LARGE: usize = 50;
pub const WPM_STEP: u32 = 25;
pub const MIN_TARGET_WPM: u32 = 100;
pub const MAX_TARGET_WPM: u32 = 800;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
    /// The last word finished displaying and playback stopped.
    Finished,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputOutcome {
    Ignored,
    Handled,
    /// The reader should be dismissed. Playback is already paused.
    CloseRequested,
}

/// Scheduling state of a [`Player`].
///
/// `Stopped` at the last index is the end of a run; the next `play` restarts
/// from the first word.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RunState {
    Stopped,
    Playing,
    Paused,
}

/// Observable playback state after the latest transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackState<'a> {
    pub current_token: Option<&'a Token>,
    pub current_index: usize,
    pub is_playing: bool,
    pub current_wpm: u32,
    /// `current_index / total`, or 0 for an empty text.
    pub progress: f64,
}

/// Single-threaded RSVP controller. Owns one tokenized text, its speed
/// configuration, and at most one pending advance.
///
/// Time is supplied by the host as a monotonic `now_ms`; the host calls
/// [`Player::tick`] from its event loop and every operation runs to completion
/// before the next one starts.
#[derive(Debug, Clone)]
pub struct Player {
    tokens: Vec<Token>,
    config: SpeedConfig,
    run: RunState,
    index: usize,
    current_wpm: u32,
    timer: AdvanceTimer,
}

include!("view.rs");
include!("runtime.rs");
include!("navigation.rs");
include!("input.rs");

#[cfg(test)]
mod tests;
