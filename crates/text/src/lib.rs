//! # morph-text
//!
//! Small, stateless string and value helpers used across morph:
//!
//! - [`number`]: number rendering plus negative zero and bound helpers
//! - [`pad`]: left / right padding with arbitrary pad strings
//! - [`split`]: escaped delimiter splitting and bracket-aware splitting
//! - [`path`]: nested lookup and overwrite on [`serde_json::Value`]
//! - [`token`]: composable formatter closures for numbers and strings
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use morph_text::{lookup, pad_number, split_simple};
//! use serde_json::json;
//!
//! assert_eq!(pad_number(-456.0, 6, false), "-00456");
//! assert_eq!(split_simple(r"a\.b.c", "."), ["a.b", "c"]);
//! assert_eq!(lookup(&json!({ "a": [1, 2] }), "a.1"), Some(&json!(2)));
//! ```

pub mod number;
pub mod pad;
pub mod path;
pub mod split;
pub mod token;

pub use number::{adjust, is_minus_zero, number_to_string};
pub use pad::{pad_left, pad_number, pad_right};
pub use path::{MAX_ARRAY_LEN, Path, Segment, lookup, overwrite};
pub use split::{split_bracket, split_simple};
pub use token::{NumberTokenFormat, StringTokenFormat};
