//! Core of the SpeedReader RSVP reader: tokenization, pacing, and the
//! playback state machine that drives one-word-at-a-time presentation.

pub mod app;
pub mod content;
pub mod focus;
pub mod input;
pub mod render;
pub mod schedule;
pub mod timing;
