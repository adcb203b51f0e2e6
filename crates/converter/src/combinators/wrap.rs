//! Idempotent wrapping into [`NullSafe`], [`UndefinedSafe`] and
//! [`NullSafeString`], plus [`map`].
//!
//! Wrapping is expressed as a capability: each wrapper type implements its
//! own `Into*` trait by returning itself, every other converter type by
//! wrapping. `nullsafe(nullsafe(c))` therefore has the type `NullSafe<C>` and
//! is the very value `nullsafe(c)` returned.
//!
//! Converter types defined outside this crate opt in with
//! [`wrappable!`](crate::wrappable).

use std::sync::Arc;

use crate::combinators::{FnConverter, FnMarshaller, FnUnmarshaller, Swap};
use crate::converters::{
    ArrayConverter, EnumStringConverter, IdentityConverter, NullSafe, NullSafeString,
    UndefinedSafe,
};
use crate::ColorConverter;

// ============================================================================
// CAPABILITIES
// ============================================================================

/// Conversion into a null-safe converter.
pub trait IntoNullSafe: Sized {
    type Output;

    fn into_nullsafe(self) -> Self::Output;
}

/// Conversion into an undefined-safe converter.
pub trait IntoUndefinedSafe: Sized {
    type Output;

    fn into_undefinedsafe(self) -> Self::Output;
}

/// Conversion into a converter treating the empty string as `None`.
pub trait IntoNullSafeString: Sized {
    type Output;

    fn into_nullsafe_string(self) -> Self::Output;
}

impl<C> IntoNullSafe for NullSafe<C> {
    type Output = Self;

    fn into_nullsafe(self) -> Self {
        self
    }
}

impl<C> IntoUndefinedSafe for UndefinedSafe<C> {
    type Output = Self;

    fn into_undefinedsafe(self) -> Self {
        self
    }
}

impl<C> IntoNullSafeString for NullSafeString<C> {
    type Output = Self;

    fn into_nullsafe_string(self) -> Self {
        self
    }
}

// the remaining two capabilities of each wrapper wrap
crate::wrappable!(@undefinedsafe <C> NullSafe<C>);
crate::wrappable!(@nullsafe_string <C> NullSafe<C>);
crate::wrappable!(@nullsafe <C> UndefinedSafe<C>);
crate::wrappable!(@nullsafe_string <C> UndefinedSafe<C>);
crate::wrappable!(@nullsafe <C> NullSafeString<C>);
crate::wrappable!(@undefinedsafe <C> NullSafeString<C>);

crate::wrappable!(<T> IdentityConverter<T>);
crate::wrappable!(<C> ArrayConverter<C>);
crate::wrappable!(<T> EnumStringConverter<T>);
crate::wrappable!(<C> Swap<C>);
crate::wrappable!(<F> FnMarshaller<F>);
crate::wrappable!(<F> FnUnmarshaller<F>);
crate::wrappable!(<M, U> FnConverter<M, U>);
crate::wrappable!(<C: ?Sized> Arc<C>);
crate::wrappable!(<C: ?Sized> Box<C>);
crate::wrappable!(ColorConverter);

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// Wraps `converter` into a [`NullSafe`] unless it already is one.
///
/// # Examples
///
/// ```rust,ignore
/// use morph_converter::prelude::*;
///
/// let once = nullsafe(ColorConverter);
/// let twice: NullSafe<ColorConverter> = nullsafe(once);
/// ```
pub fn nullsafe<C: IntoNullSafe>(converter: C) -> C::Output {
    converter.into_nullsafe()
}

/// Wraps `converter` into an [`UndefinedSafe`] unless it already is one.
pub fn undefinedsafe<C: IntoUndefinedSafe>(converter: C) -> C::Output {
    converter.into_undefinedsafe()
}

/// Wraps `converter` into a [`NullSafeString`] unless it already is one.
pub fn nullsafe_string<C: IntoNullSafeString>(converter: C) -> C::Output {
    converter.into_nullsafe_string()
}

/// Converts vectors element by element with `converter`.
pub fn map<C>(converter: C) -> ArrayConverter<C> {
    ArrayConverter::new(converter)
}
