//! Built-in converters.
//!
//! | Converter | Converts |
//! |---|---|
//! | [`IdentityConverter`] | `T <-> T` |
//! | [`NullSafe`] | `Option<T> <-> Option<S>` |
//! | [`UndefinedSafe`] | `Undefinable<T> <-> Undefinable<S>` |
//! | [`NullSafeString`] | `Option<T> <-> String` |
//! | [`ArrayConverter`] | `Vec<T> <-> Vec<S>` |
//! | [`EnumStringConverter`] | `T <-> String` |

pub mod array;
pub mod enum_string;
pub mod identity;
pub mod nullsafe;
pub mod nullsafe_string;
pub mod undefinedsafe;

pub use array::ArrayConverter;
pub use enum_string::{EnumStringConverter, StringEnum};
pub use identity::IdentityConverter;
pub use nullsafe::NullSafe;
pub use nullsafe_string::NullSafeString;
pub use undefinedsafe::UndefinedSafe;
