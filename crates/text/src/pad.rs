//! Padding helpers.
//!
//! Lengths are counted in `char`s. A pad string longer than one character is
//! repeated and then cut so the result has exactly the requested length.

use crate::number::{is_minus_zero, number_to_string};

const DEFAULT_PAD: &str = " ";

/// Pads `s` at the start with `pad` until it has at least `n` characters.
///
/// An empty `pad` pads with spaces. Surplus pad characters are cut at the
/// start, so `pad_left("test", "ab", 9)` is `"bababtest"`.
pub fn pad_left(s: &str, pad: &str, n: usize) -> String {
    let missing = n.saturating_sub(s.chars().count());
    if missing == 0 {
        return s.to_owned();
    }
    let pad = if pad.is_empty() { DEFAULT_PAD } else { pad };
    let pad_len = pad.chars().count();
    let repeats = missing.div_ceil(pad_len);
    let surplus = repeats * pad_len - missing;

    let mut result: String = pad.repeat(repeats).chars().skip(surplus).collect();
    result.push_str(s);
    result
}

/// Pads `s` at the end with `pad` until it has at least `n` characters.
///
/// An empty `pad` pads with spaces. Surplus pad characters are cut at the
/// end, so `pad_right("test", "ab", 9)` is `"testababa"`.
pub fn pad_right(s: &str, pad: &str, n: usize) -> String {
    let missing = n.saturating_sub(s.chars().count());
    let pad = if pad.is_empty() { DEFAULT_PAD } else { pad };

    let mut result = s.to_owned();
    result.extend(pad.chars().cycle().take(missing));
    result
}

/// Pads a number with leading zeros to at least `n` characters.
///
/// A leading minus sign counts toward `n`. With `handle_minus_zero`, `-0.0`
/// is rendered as `"-0"`, padded like any negative number. Digits follow
/// [`number_to_string`], so infinity pads as `"Infinity"`.
pub fn pad_number(s: f64, n: usize, handle_minus_zero: bool) -> String {
    let negative = (handle_minus_zero && is_minus_zero(s)) || s < 0.0;
    let digits = number_to_string(s.abs());
    if negative {
        format!("-{}", pad_left(&digits, "0", n.saturating_sub(1)))
    } else {
        pad_left(&digits, "0", n)
    }
}
