// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Middle ellipsis for overlong crumb text.
//!
//! ## Policy
//!
//! Given a maximum length `L` and a text `T` (both counted in `char`s):
//!
//! - If `T` has at most `L` chars, it is returned unchanged.
//! - Otherwise let `part = (L - 5) / 2`, a signed division truncating toward
//!   zero. The result is the head `T[..part + 1]`, then [`ELLIPSIS`], then the
//!   tail `T[len - part..]`.
//!
//! For `L >= 5` the result is `2 * part + 6` chars long, which is `L` or `L + 1`
//! depending on parity.
//!
//! Smaller maxima are not guarded against. Both indices then follow
//! slice-from-end rules: a negative index counts back from the end of `T`, and
//! every index is clamped to `0..=len`. `L` of 0 or 1 keeps all but the last
//! char before the marker, `L` of 2 or 3 yields the bare marker, and `L = 4`
//! keeps the first char. None of that is meaningful; callers configure
//! sensible maxima.
//!
//! ```
//! use understory_crumbs::ellipsis::ellipsize;
//!
//! assert_eq!(ellipsize("short", Some(10)), "short");
//! assert_eq!(ellipsize("abcdefghijklmnop", Some(11)), "abcd ... nop");
//! assert_eq!(ellipsize("anything goes", None), "anything goes");
//! ```

use alloc::borrow::Cow;
use alloc::string::String;

/// Marker inserted in place of the omitted middle section.
pub const ELLIPSIS: &str = " ... ";

/// Number of chars in [`ELLIPSIS`].
const ELLIPSIS_LEN: isize = 5;

/// Shorten `text` to roughly `max_len` chars by cutting out its middle.
///
/// `None` means the level has no configured limit and the text is borrowed
/// back unchanged.
pub fn ellipsize(text: &str, max_len: Option<usize>) -> Cow<'_, str> {
    let Some(max_len) = max_len else {
        return Cow::Borrowed(text);
    };
    let len = text.chars().count();
    if len <= max_len {
        return Cow::Borrowed(text);
    }

    let signed_len = isize::try_from(len).unwrap_or(isize::MAX);
    let part = (isize::try_from(max_len).unwrap_or(isize::MAX) - ELLIPSIS_LEN) / 2;
    let head_end = byte_offset(text, slice_index(part + 1, len));
    let tail_start = byte_offset(text, slice_index(signed_len.saturating_sub(part), len));

    let mut out = String::with_capacity(head_end + ELLIPSIS.len() + (text.len() - tail_start));
    out.push_str(&text[..head_end]);
    out.push_str(ELLIPSIS);
    out.push_str(&text[tail_start..]);
    Cow::Owned(out)
}

/// Resolve a possibly negative char index against `len`.
///
/// Negative indices count back from the end; the result lies in `0..=len`.
fn slice_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(len)
    }
}

/// Byte offset of the `n`th char, or the end of the string.
fn byte_offset(text: &str, n: usize) -> usize {
    text.char_indices()
        .nth(n)
        .map_or(text.len(), |(offset, _)| offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn text_within_limit_is_borrowed() {
        let out = ellipsize("exactly ten", Some(11));
        assert!(matches!(out, Cow::Borrowed("exactly ten")));
        assert_eq!(ellipsize("", Some(0)), "");
    }

    #[test]
    fn missing_limit_never_truncates() {
        let long = "x".repeat(500);
        assert_eq!(ellipsize(&long, None), long.as_str());
    }

    #[test]
    fn keeps_head_and_tail_around_marker() {
        // L = 30 -> part = 12: 13 head chars, 12 tail chars.
        let text = "Electronics and Household Appliances";
        let out = ellipsize(text, Some(30));
        assert_eq!(out, "Electronics a ... d Appliances");
    }

    // Length contract: 2 * part + 6 for every overlong text.
    #[test]
    fn truncated_length_follows_part_length() {
        let text: String = ('a'..='z').cycle().take(80).collect();
        for max in 5..60 {
            let part = (max - 5) / 2;
            let out = ellipsize(&text, Some(max));
            assert_eq!(out.chars().count(), 2 * part + 6, "max = {max}");
            assert!(out.starts_with(&text[..part + 1]), "head for max = {max}");
            assert!(out.ends_with(&text[text.len() - part..]), "tail for max = {max}");
            assert!(out.contains(ELLIPSIS), "marker for max = {max}");
        }
    }

    // Below five the indices go negative and count back from the end.
    #[test]
    fn tiny_limits_follow_from_end_indices() {
        let cases = [
            (0, "abcdefg ... "),
            (1, "abcdefg ... "),
            (2, " ... "),
            (3, " ... "),
            (4, "a ... "),
        ];
        for (max, expected) in cases {
            assert_eq!(ellipsize("abcdefgh", Some(max)), expected, "max = {max}");
        }
    }

    #[test]
    fn tiny_limits_on_multibyte_text() {
        assert_eq!(ellipsize("äöüß", Some(0)), "äöü ... ");
        assert_eq!(ellipsize("äöüß", Some(3)), " ... ");
    }

    #[test]
    fn slice_index_clamps_both_ways() {
        assert_eq!(slice_index(-1, 8), 7);
        assert_eq!(slice_index(-20, 8), 0);
        assert_eq!(slice_index(3, 8), 3);
        assert_eq!(slice_index(10, 8), 8);
    }

    #[test]
    fn counts_chars_not_bytes() {
        let text = "äöüäöüäöüäöü";
        assert_eq!(ellipsize(text, Some(12)), text);
        // L = 9 -> part = 2.
        assert_eq!(ellipsize(text, Some(9)), "äöü ... öü");
    }

    #[test]
    fn reference_samples() {
        let cases = vec![
            ("Munich, Bavaria, Germany", 15, "Munich ... rmany"),
            ("abcdefghijk", 10, "abc ... jk"),
        ];
        for (text, max, expected) in cases {
            assert_eq!(ellipsize(text, Some(max)), expected, "{text} @ {max}");
        }
    }
}
