//! # morph-converter
//!
//! Composable, bidirectional converters between object values and their
//! serialized form.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use morph_converter::prelude::*;
//!
//! // Compose with .nullsafe() / .map() / .swap()
//! let colors = ColorConverter.nullsafe().map();
//! let parsed = colors.unmarshal(vec![Some("#f00".into()), None])?;
//! assert_eq!(parsed, vec![Some(Color::new(255, 0, 0)), None]);
//! ```
//!
//! ## Capabilities
//!
//! A type is a converter as soon as it implements both
//! [`Marshaller`](foundation::Marshaller) and
//! [`Unmarshaller`](foundation::Unmarshaller). Wrapping with
//! [`nullsafe`](combinators::nullsafe) and friends is idempotent; converter
//! types from other crates opt in with [`wrappable!`].
//!
//! ## Resolution
//!
//! [`create_converter_instance`](convertable::create_converter_instance)
//! turns a [`Convertable`](convertable::Convertable), or a provider of one,
//! into a shared converter.

// Nested wrappers (UndefinedSafe<NullSafe<ArrayConverter<...>>>) and shared
// factory handles produce long types.
#![allow(clippy::type_complexity)]

pub mod color;
pub mod combinators;
pub mod convertable;
pub mod converters;
pub mod foundation;
mod macros;
pub mod prelude;

#[cfg(test)]
mod test_util;

pub use color::{Color, ColorConverter};
