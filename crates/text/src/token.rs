//! Token formatters.
//!
//! Each constructor returns a shareable formatter closure. Formatters compose
//! with [`concat_number`] and [`concat_string`], each step receiving the
//! output of the previous one.
//!
//! The `locale` parameters are accepted for call-site compatibility and
//! currently ignored; case mapping uses Unicode default rules.

use std::sync::Arc;

use crate::pad::{pad_left, pad_number, pad_right};

/// Formats a number.
pub type NumberTokenFormat = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Formats a string. Numbers are formatted as their digit string first.
pub type StringTokenFormat = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Zero pads a number to `n` characters.
pub fn pad_number_left(n: usize) -> NumberTokenFormat {
    Arc::new(move |input| pad_number(input, n, false))
}

/// Pads a string at the start with `pad` to `n` characters.
pub fn pad_string_left(pad: &str, n: usize) -> StringTokenFormat {
    let pad = pad.to_owned();
    Arc::new(move |input: &str| pad_left(input, &pad, n))
}

/// Pads a string at the end with `pad` to `n` characters.
pub fn pad_string_right(pad: &str, n: usize) -> StringTokenFormat {
    let pad = pad.to_owned();
    Arc::new(move |input: &str| pad_right(input, &pad, n))
}

pub fn to_upper_case(_locale: &str) -> StringTokenFormat {
    Arc::new(str::to_uppercase)
}

pub fn to_lower_case(_locale: &str) -> StringTokenFormat {
    Arc::new(str::to_lowercase)
}

/// Upper cases the first character. Only the first character of its upper
/// case mapping is kept, so the length never changes.
pub fn first_to_upper(_locale: &str) -> StringTokenFormat {
    Arc::new(|input: &str| map_first(input, |c| c.to_uppercase().next().unwrap_or(c)))
}

/// Lower cases the first character, keeping the length.
pub fn first_to_lower(_locale: &str) -> StringTokenFormat {
    Arc::new(|input: &str| map_first(input, |c| c.to_lowercase().next().unwrap_or(c)))
}

/// Swaps the case of every character.
pub fn to_inverse_case(_locale: &str) -> StringTokenFormat {
    Arc::new(|input: &str| input.chars().map(invert_case).collect())
}

/// Swaps the case of the first character.
pub fn first_to_inverse(_locale: &str) -> StringTokenFormat {
    Arc::new(|input: &str| map_first(input, invert_case))
}

/// Applies `first`, then every formatter of `rest` in order.
pub fn concat_number(
    first: NumberTokenFormat,
    rest: impl IntoIterator<Item = StringTokenFormat>,
) -> NumberTokenFormat {
    let rest: Vec<StringTokenFormat> = rest.into_iter().collect();
    Arc::new(move |input| chain(first(input), &rest))
}

/// Applies `first`, then every formatter of `rest` in order.
pub fn concat_string(
    first: StringTokenFormat,
    rest: impl IntoIterator<Item = StringTokenFormat>,
) -> StringTokenFormat {
    let rest: Vec<StringTokenFormat> = rest.into_iter().collect();
    Arc::new(move |input: &str| chain(first(input), &rest))
}

fn chain(initial: String, formatters: &[StringTokenFormat]) -> String {
    formatters
        .iter()
        .fold(initial, |value, formatter| formatter(&value))
}

fn map_first(input: &str, map: impl FnOnce(char) -> char) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(input.len());
            result.push(map(first));
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

/// A character equal to its lower case form becomes upper case, any other
/// becomes lower case.
fn invert_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    if lower.next() == Some(c) && lower.next().is_none() {
        c.to_uppercase().next().unwrap_or(c)
    } else {
        c.to_lowercase().next().unwrap_or(c)
    }
}
