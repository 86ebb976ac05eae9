//! Word extraction around a cursor offset.
//!
//! The boundaries follow a trailing-word search on the text up to and
//! including the cursor, and a forward search for the first non-word
//! character from the cursor on. When the cursor sits on a non-word
//! character the left search fails, and the failed search is treated as a
//! start one character before the end of the text. That usually produces an
//! empty token, occasionally a single punctuation character; neither ever
//! names a keyword.
//!
//! Offsets below zero are clamped to the start of the text rather than
//! wrapped around to a huge unsigned value.

use std::ops::Range;

/// Word characters are ASCII letters, digits and underscore.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Character range of the word at `offset`.
///
/// `offset` is a character index. Anything that does not fit a `usize`
/// (negative values in particular) is treated as `0`; offsets past the end
/// are allowed. The returned range is never inverted.
pub fn word_span<O: TryInto<usize>>(text: &str, offset: O) -> Range<usize> {
    let offset = offset.try_into().unwrap_or(0);
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    let prefix = &chars[..offset.saturating_add(1).min(len)];
    let run = prefix.iter().rev().take_while(|c| is_word_char(**c)).count();
    let start = if run > 0 {
        prefix.len() - run
    } else {
        len.saturating_sub(1)
    };

    let end = chars
        .get(offset..)
        .and_then(|rest| rest.iter().position(|c| !is_word_char(*c)))
        .map_or(len, |pos| offset + pos);

    start..end.max(start)
}

/// The word at `offset`, see [`word_span`].
pub fn word_at<O: TryInto<usize>>(text: &str, offset: O) -> &str {
    let span = word_span(text, offset);
    let byte = |idx: usize| {
        text.char_indices()
            .nth(idx)
            .map_or(text.len(), |(byte, _)| byte)
    };
    &text[byte(span.start)..byte(span.end)]
}
