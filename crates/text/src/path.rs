//! Nested lookup and overwrite on JSON values.
//!
//! A [`Path`] is a list of [`Segment`]s. Parsed from a string, segments are
//! separated by `.` and a backslash masks a literal dot (see
//! [`split_simple`]). A segment addresses an object member by name or an
//! array element by index; a name consisting of a canonical non-negative
//! integer (`0`, `17`, but not `01` or `-1`) addresses array elements too.

use std::borrow::Cow;
use std::fmt;

use serde_json::{Map, Value};

use crate::split::split_simple;

// ============================================================================
// SEGMENT
// ============================================================================

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A member name.
    Key(String),
    /// An array index.
    Index(usize),
}

impl Segment {
    /// The segment as an object member name.
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            Self::Key(key) => Cow::Borrowed(key),
            Self::Index(index) => Cow::Owned(index.to_string()),
        }
    }

    /// The segment as an array index, if it is one.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Key(key) => canonical_index(key),
            Self::Index(index) => Some(*index),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_key())
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// `0` or a digit string without leading zero.
fn canonical_index(key: &str) -> Option<usize> {
    let canonical = key == "0"
        || (key.starts_with(|c: char| matches!(c, '1'..='9'))
            && key.bytes().all(|b| b.is_ascii_digit()));
    if canonical { key.parse().ok() } else { None }
}

// ============================================================================
// PATH
// ============================================================================

/// A sequence of segments into a nested value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Creates a path from explicit segments.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Parses a dotted path. `a\.b.c` has the two segments `a.b` and `c`.
    pub fn parse(path: &str) -> Self {
        Self::new(
            split_simple(path, ".")
                .into_iter()
                .map(Segment::Key)
                .collect(),
        )
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<usize> for Path {
    fn from(index: usize) -> Self {
        Self::new(vec![Segment::Index(index)])
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}

impl<const N: usize> From<[Segment; N]> for Path {
    fn from(segments: [Segment; N]) -> Self {
        Self::new(segments.into())
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ============================================================================
// LOOKUP / OVERWRITE
// ============================================================================

fn child<'a>(value: &'a Value, segment: &Segment) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment.as_key().as_ref()),
        Value::Array(items) => items.get(segment.as_index()?),
        _ => None,
    }
}

/// Returns the nested child of `value` at `path`, or `None` if any step is
/// missing or passes through a scalar.
///
/// # Examples
///
/// ```rust,ignore
/// use morph_text::{lookup, Segment};
/// use serde_json::json;
///
/// let value = json!({ "a": [{ "b": 1 }, { "b": 2 }] });
/// assert_eq!(lookup(&value, "a.1.b"), Some(&json!(2)));
/// assert_eq!(lookup(&value, [Segment::from("a"), 0.into()]), Some(&json!({ "b": 1 })));
/// ```
pub fn lookup(value: &Value, path: impl Into<Path>) -> Option<&Value> {
    let path = path.into();
    if path.segments.is_empty() {
        return None;
    }
    path.segments
        .iter()
        .try_fold(value, |current, segment| child(current, segment))
}

/// The container created for a missing intermediate step.
fn container_for(next: &Segment) -> Value {
    if next.as_index().is_some() {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

/// Arrays are never grown beyond this many elements.
pub const MAX_ARRAY_LEN: usize = 1 << 20;

/// Returns the slot for `index`, growing `items` with `null` as needed, or
/// `None` when that would exceed [`MAX_ARRAY_LEN`].
fn grow(items: &mut Vec<Value>, index: usize) -> Option<&mut Value> {
    if index >= items.len() {
        let len = index.checked_add(1).filter(|len| *len <= MAX_ARRAY_LEN)?;
        items.resize(len, Value::Null);
    }
    items.get_mut(index)
}

/// Sets the nested child of `target` at `path` to `value`.
///
/// Missing intermediate steps are created: an array when the following
/// segment is an index, an object otherwise. Arrays indexed past their end
/// grow with `null`, up to [`MAX_ARRAY_LEN`] elements. A path passing through
/// a scalar (including `null`) or an index beyond that limit leaves `target`
/// unchanged.
pub fn overwrite(target: &mut Value, path: impl Into<Path>, value: Value) {
    let path = path.into();
    let Some((last, init)) = path.segments.split_last() else {
        return;
    };

    let mut current = target;
    for (position, segment) in init.iter().enumerate() {
        let next = init.get(position + 1).unwrap_or(last);
        current = match current {
            Value::Object(map) => map
                .entry(segment.as_key().into_owned())
                .or_insert_with(|| container_for(next)),
            Value::Array(items) => {
                let Some(index) = segment.as_index() else {
                    return;
                };
                let missing = index >= items.len();
                let Some(slot) = grow(items, index) else {
                    return;
                };
                if missing {
                    *slot = container_for(next);
                }
                slot
            }
            _ => return,
        };
    }

    match current {
        Value::Object(map) => {
            map.insert(last.as_key().into_owned(), value);
        }
        Value::Array(items) => {
            if let Some(slot) = last.as_index().and_then(|index| grow(items, index)) {
                *slot = value;
            }
        }
        _ => {}
    }
}
