//! Raw text to RSVP tokens.

use super::{
    PARAGRAPH_END_MIN_MULTIPLIER, Token,
    delay::{delay_multiplier, ends_sentence},
    text_utils::{
        normalize_line_endings, protect_inner_punctuation, restore_inner_punctuation,
        split_paragraphs,
    },
};
use crate::{focus::focus_index, timing::ConfigError};

/// Turn `text` into display tokens in reading order.
///
/// Empty or whitespace-only input yields an empty sequence.
pub fn tokenize(text: &str) -> Vec<Token> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let protected = protect_inner_punctuation(&normalize_line_endings(text));
    let paragraphs: Vec<&str> = split_paragraphs(&protected).collect();
    let last_paragraph = paragraphs.len().saturating_sub(1);

    let mut tokens = Vec::new();
    for (paragraph_idx, paragraph) in paragraphs.iter().enumerate() {
        let mut words = paragraph.split_whitespace().peekable();

        while let Some(raw) = words.next() {
            let word = restore_inner_punctuation(raw);
            let is_end_of_paragraph = words.peek().is_none() && paragraph_idx != last_paragraph;

            let mut multiplier = delay_multiplier(&word);
            if is_end_of_paragraph {
                multiplier = multiplier.max(PARAGRAPH_END_MIN_MULTIPLIER);
            }

            tokens.push(Token {
                focus_index: focus_index(&word),
                delay_multiplier: multiplier,
                is_end_of_sentence: word.chars().next_back().is_some_and(ends_sentence),
                is_end_of_paragraph,
                word,
            });
        }
    }

    tokens
}

pub fn word_count(tokens: &[Token]) -> usize {
    tokens.len()
}

/// Whole minutes needed to read `tokens` at `wpm`, accounting for pauses.
pub fn estimate_reading_minutes(tokens: &[Token], wpm: u32) -> Result<u32, ConfigError> {
    if wpm == 0 {
        return Err(ConfigError::ZeroWpm);
    }
    if tokens.is_empty() {
        return Ok(0);
    }

    let count = tokens.len() as f64;
    let average_multiplier = tokens.iter().map(|t| t.delay_multiplier).sum::<f64>() / count;
    let effective_wpm = wpm as f64 / average_multiplier;

    Ok((count / effective_wpm).ceil() as u32)
}
