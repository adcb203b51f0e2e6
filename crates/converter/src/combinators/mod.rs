//! Combinators: build converters from closures and other converters.
//!
//! - [`marshal`], [`unmarshal`], [`convert`]: lift closures
//! - [`identity`], [`swap`], [`map`]: reshape a converter
//! - [`nullsafe`], [`undefinedsafe`], [`nullsafe_string`]: idempotent
//!   wrapping, see [`wrap`]

pub mod function;
pub mod swap;
pub mod wrap;

pub use function::{FnConverter, FnMarshaller, FnUnmarshaller, convert, identity, marshal, unmarshal};
pub use swap::{Swap, swap};
pub use wrap::{
    IntoNullSafe, IntoNullSafeString, IntoUndefinedSafe, map, nullsafe, nullsafe_string,
    undefinedsafe,
};
