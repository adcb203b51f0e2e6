//! Delimiter splitting.

/// Escape character masking the next character in [`split_simple`].
const MASK: char = '\\';

/// Splits `s` on `delim`. A backslash masks the following character, so
/// `\.` is a literal dot and `\\` a literal backslash.
///
/// An empty input or an empty delimiter yields `[s]`.
///
/// # Examples
///
/// ```rust,ignore
/// use morph_text::split_simple;
///
/// assert_eq!(split_simple(r"abc\.def.ghi", "."), ["abc.def", "ghi"]);
/// ```
pub fn split_simple(s: &str, delim: &str) -> Vec<String> {
    if s.is_empty() || delim.is_empty() {
        return vec![s.to_owned()];
    }
    if !s.contains(MASK) {
        return s.split(delim).map(str::to_owned).collect();
    }

    let mut result = Vec::new();
    let mut part = String::new();
    let mut masked = false;
    let mut rest = s;
    while let Some(c) = rest.chars().next() {
        if masked {
            masked = false;
            part.push(c);
        } else if c == MASK {
            masked = true;
        } else if let Some(tail) = rest.strip_prefix(delim) {
            result.push(std::mem::take(&mut part));
            rest = tail;
            continue;
        } else {
            part.push(c);
        }
        rest = &rest[c.len_utf8()..];
    }
    result.push(part);
    result
}

/// Splits `s` into alternating unenclosed and enclosed parts.
///
/// The result always starts with an unenclosed part and has one unenclosed
/// part between enclosed ones, possibly empty. Nested brackets stay inside
/// their enclosing part: `a+(b+(c+d))+(e+f)` splits into
/// `["a+", "b+(c+d)", "+", "e+f", ""]`.
///
/// `alt_starts` are further delimiters that also pair with `end` inside an
/// enclosed part, so `${b:{c}}` with start `${`, end `}` and alternative
/// start `{` finds the outermost closing bracket.
///
/// An empty input, empty delimiters, or an input without `start` yields
/// `[s]`.
pub fn split_bracket(s: &str, start: &str, end: &str, alt_starts: &[&str]) -> Vec<String> {
    if s.is_empty() || start.is_empty() || end.is_empty() || !s.contains(start) {
        return vec![s.to_owned()];
    }
    let starts: Vec<&str> = alt_starts.iter().copied().chain([start]).collect();

    let mut depth = 0_usize;
    let mut result = Vec::new();
    let mut part = String::new();
    let mut rest = s;
    while let Some(c) = rest.chars().next() {
        let consumed = if depth == 0 {
            if rest.starts_with(start) {
                result.push(std::mem::take(&mut part));
                depth += 1;
                start.len()
            } else {
                // stray end delimiters are plain text here
                part.push(c);
                c.len_utf8()
            }
        } else if rest.starts_with(end) {
            depth -= 1;
            if depth == 0 {
                result.push(std::mem::take(&mut part));
            } else {
                part.push_str(end);
            }
            end.len()
        } else if let Some(nested) = starts.iter().find(|nested| rest.starts_with(**nested)) {
            depth += 1;
            part.push_str(nested);
            nested.len()
        } else {
            part.push(c);
            c.len_utf8()
        };
        rest = &rest[consumed..];
    }
    result.push(part);
    result
}
