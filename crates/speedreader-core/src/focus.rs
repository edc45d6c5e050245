//! Fixation point (ORP) selection for a single word.

/// Character index, counted in Unicode scalar values, the reader should
/// fixate on for a word of `char_count` characters.
pub const fn focus_index_for_len(char_count: usize) -> usize {
    match char_count {
        0 | 1 => 0,
        2..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}

/// Fixation index for `word`.
pub fn focus_index(word: &str) -> usize {
    focus_index_for_len(word.chars().count())
}

/// Split `word` into the text before the fixation character, the fixation
/// character itself, and the rest. Cuts only on char boundaries.
pub fn split_at_focus(word: &str) -> (&str, &str, &str) {
    let target = focus_index(word);

    let Some((start, ch)) = word.char_indices().nth(target) else {
        return ("", "", "");
    };
    let end = start + ch.len_utf8();

    (&word[..start], &word[start..end], &word[end..])
}
