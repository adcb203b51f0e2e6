//! Core capability traits.
//!
//! A converter translates between an object-side type `T` and a
//! serialized-side type `S`. The two directions are separate capabilities:
//! [`Marshaller`] (`T -> S`) and [`Unmarshaller`] (`S -> T`). Any type
//! implementing both is a [`Converter`]; no further declaration is needed.

use std::sync::Arc;

use crate::combinators::{IntoNullSafe, IntoNullSafeString, IntoUndefinedSafe, Swap};
use crate::converters::ArrayConverter;
use crate::foundation::ConversionResult;

// ============================================================================
// CAPABILITIES
// ============================================================================

/// Turns an object into its serialized form.
///
/// Marshalling a well-formed object does not fail for any converter in this
/// crate. The `Result` exists for adapters such as [`Swap`], whose marshal
/// direction is another converter's unmarshal direction.
///
/// # Examples
///
/// ```rust,ignore
/// use morph_converter::foundation::{ConversionResult, Marshaller};
///
/// struct Upper;
///
/// impl Marshaller<String, String> for Upper {
///     fn marshal(&self, object: String) -> ConversionResult<String> {
///         Ok(object.to_uppercase())
///     }
/// }
/// ```
pub trait Marshaller<T, S> {
    /// Serializes `object`.
    fn marshal(&self, object: T) -> ConversionResult<S>;
}

/// Turns a serialized form back into an object.
pub trait Unmarshaller<T, S> {
    /// Deserializes `serialized`.
    ///
    /// Fails with a [`ConversionError`](crate::foundation::ConversionError)
    /// if `serialized` does not represent a `T`.
    fn unmarshal(&self, serialized: S) -> ConversionResult<T>;
}

/// Both directions of a conversion between `T` and `S`.
///
/// Implemented for every type that implements [`Marshaller<T, S>`] and
/// [`Unmarshaller<T, S>`].
pub trait Converter<T, S>: Marshaller<T, S> + Unmarshaller<T, S> {}

impl<T, S, C> Converter<T, S> for C where C: Marshaller<T, S> + Unmarshaller<T, S> {}

// ============================================================================
// SHARED HANDLES
// ============================================================================

/// A shareable, type-erased marshaller.
pub type SharedMarshaller<T, S> = Arc<dyn Marshaller<T, S> + Send + Sync>;

/// A shareable, type-erased unmarshaller.
pub type SharedUnmarshaller<T, S> = Arc<dyn Unmarshaller<T, S> + Send + Sync>;

/// A shareable, type-erased converter.
pub type SharedConverter<T, S> = Arc<dyn Converter<T, S> + Send + Sync>;

// ============================================================================
// FORWARDING
// ============================================================================

macro_rules! forward_capabilities {
    ($($pointer:ty),* $(,)?) => {$(
        impl<T, S, C> Marshaller<T, S> for $pointer
        where
            C: Marshaller<T, S> + ?Sized,
        {
            fn marshal(&self, object: T) -> ConversionResult<S> {
                (**self).marshal(object)
            }
        }

        impl<T, S, C> Unmarshaller<T, S> for $pointer
        where
            C: Unmarshaller<T, S> + ?Sized,
        {
            fn unmarshal(&self, serialized: S) -> ConversionResult<T> {
                (**self).unmarshal(serialized)
            }
        }
    )*};
}

forward_capabilities!(&C, Box<C>, Arc<C>);

// ============================================================================
// CONVERTER EXTENSION TRAIT
// ============================================================================

/// Fluent combinator methods, implemented for every converter.
///
/// # Examples
///
/// ```rust,ignore
/// use morph_converter::prelude::*;
///
/// let tags = EnumStringConverter::<Tag>::of().nullsafe().map();
/// assert_eq!(tags.unmarshal(vec![None, Some("RED".into())])?, vec![None, Some(Tag::Red)]);
/// ```
pub trait ConverterExt<T, S>: Converter<T, S> + Sized {
    /// Exchanges the marshal and unmarshal directions.
    fn swap(self) -> Swap<Self> {
        Swap::new(self)
    }

    /// Converts vectors element by element.
    fn map(self) -> ArrayConverter<Self> {
        ArrayConverter::new(self)
    }

    /// Passes `None` through on both sides. Idempotent.
    fn nullsafe(self) -> <Self as IntoNullSafe>::Output
    where
        Self: IntoNullSafe,
    {
        self.into_nullsafe()
    }

    /// Passes `Undefined` through on both sides. Idempotent.
    fn undefinedsafe(self) -> <Self as IntoUndefinedSafe>::Output
    where
        Self: IntoUndefinedSafe,
    {
        self.into_undefinedsafe()
    }

    /// Maps `None` to the empty string and back. Idempotent.
    fn nullsafe_string(self) -> <Self as IntoNullSafeString>::Output
    where
        Self: IntoNullSafeString,
    {
        self.into_nullsafe_string()
    }

    /// Erases the type into a [`SharedConverter`].
    fn shared(self) -> SharedConverter<T, S>
    where
        Self: Send + Sync + 'static,
    {
        Arc::new(self)
    }
}

impl<T, S, C> ConverterExt<T, S> for C where C: Converter<T, S> {}
