//! Text sources and tokenization for RSVP playback.

mod delay;
pub mod normalize;
mod static_source;
mod text_utils;
pub mod tokenizer;

pub use delay::delay_multiplier;
pub use static_source::{SAMPLE_PARAGRAPHS, StaticText, default_sample_text};
pub use tokenizer::{estimate_reading_minutes, tokenize, word_count};

/// Minimum pause multiplier applied to the last word of a non-final paragraph.
pub const PARAGRAPH_END_MIN_MULTIPLIER: f64 = 2.0;

/// One display unit produced by the tokenizer.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub word: String,
    /// Fixation character, counted in chars.
    pub focus_index: usize,
    /// Display-time scale relative to one word at the current WPM.
    pub delay_multiplier: f64,
    pub is_end_of_sentence: bool,
    pub is_end_of_paragraph: bool,
}

/// Abstract provider of plain text ready for tokenization.
///
/// Extractors for richer formats (documents, web pages, OCR) live outside the
/// core and only need to yield plain text, optionally using blank lines as
/// paragraph separators.
pub trait TextSource {
    type Error;

    fn load(&mut self) -> Result<String, Self::Error>;

    /// Human-readable title when the source knows one.
    fn title(&self) -> Option<&str> {
        None
    }
}
