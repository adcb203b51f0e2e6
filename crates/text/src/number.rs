//! Numeric helpers.

/// Returns `true` if and only if `n` is negative zero.
///
/// Comparison treats `-0.0` like `0.0`, so the sign bit is checked
/// explicitly.
pub fn is_minus_zero(n: f64) -> bool {
    n == 0.0 && n.is_sign_negative()
}

/// Renders `n` the way JavaScript's `String(n)` does.
///
/// Non-finite values are `"NaN"`, `"Infinity"` and `"-Infinity"`. Magnitudes
/// of `1e21` and above, or below `1e-6`, use exponent notation with an
/// explicit sign, as in `"1e+21"` and `"1.5e-7"`.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    let magnitude = n.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{n:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }
    // -0.0 prints as "-0" in Rust but "0" in JavaScript
    if n == 0.0 {
        return "0".to_owned();
    }
    n.to_string()
}

/// Clamps `n` into the given bounds.
///
/// A missing bound leaves that side open. When `lower > upper` the result is
/// always one of the bounds, the lower one winning.
///
/// # Examples
///
/// ```rust,ignore
/// use morph_text::adjust;
///
/// assert_eq!(adjust(150, Some(0), Some(100)), 100);
/// assert_eq!(adjust(-50, None, Some(100)), -50);
/// ```
pub fn adjust<N: PartialOrd>(n: N, lower: Option<N>, upper: Option<N>) -> N {
    match (lower, upper) {
        (Some(lower), _) if n < lower => lower,
        (_, Some(upper)) if n > upper => upper,
        _ => n,
    }
}
