//! Lifting plain closures into marshallers, unmarshallers and converters.

use std::fmt;

use crate::converters::IdentityConverter;
use crate::foundation::{ConversionResult, Marshaller, Unmarshaller};

// ============================================================================
// FN MARSHALLER
// ============================================================================

/// A marshaller backed by a closure `Fn(T) -> S`.
#[derive(Clone, Copy)]
pub struct FnMarshaller<F> {
    function: F,
}

impl<F> FnMarshaller<F> {
    pub fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F> fmt::Debug for FnMarshaller<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMarshaller").finish_non_exhaustive()
    }
}

impl<T, S, F> Marshaller<T, S> for FnMarshaller<F>
where
    F: Fn(T) -> S,
{
    fn marshal(&self, object: T) -> ConversionResult<S> {
        Ok((self.function)(object))
    }
}

// ============================================================================
// FN UNMARSHALLER
// ============================================================================

/// An unmarshaller backed by a closure `Fn(S) -> ConversionResult<T>`.
#[derive(Clone, Copy)]
pub struct FnUnmarshaller<F> {
    function: F,
}

impl<F> FnUnmarshaller<F> {
    pub fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F> fmt::Debug for FnUnmarshaller<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnUnmarshaller").finish_non_exhaustive()
    }
}

impl<T, S, F> Unmarshaller<T, S> for FnUnmarshaller<F>
where
    F: Fn(S) -> ConversionResult<T>,
{
    fn unmarshal(&self, serialized: S) -> ConversionResult<T> {
        (self.function)(serialized)
    }
}

// ============================================================================
// FN CONVERTER
// ============================================================================

/// A converter backed by a marshal closure and an unmarshal closure.
#[derive(Clone, Copy)]
pub struct FnConverter<M, U> {
    marshal: M,
    unmarshal: U,
}

impl<M, U> FnConverter<M, U> {
    pub fn new(marshal: M, unmarshal: U) -> Self {
        Self { marshal, unmarshal }
    }
}

impl<M, U> fmt::Debug for FnConverter<M, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnConverter").finish_non_exhaustive()
    }
}

impl<T, S, M, U> Marshaller<T, S> for FnConverter<M, U>
where
    M: Fn(T) -> S,
{
    fn marshal(&self, object: T) -> ConversionResult<S> {
        Ok((self.marshal)(object))
    }
}

impl<T, S, M, U> Unmarshaller<T, S> for FnConverter<M, U>
where
    U: Fn(S) -> ConversionResult<T>,
{
    fn unmarshal(&self, serialized: S) -> ConversionResult<T> {
        (self.unmarshal)(serialized)
    }
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

/// Lifts a closure into a [`Marshaller`].
pub fn marshal<T, S, F>(function: F) -> FnMarshaller<F>
where
    F: Fn(T) -> S,
{
    FnMarshaller::new(function)
}

/// Lifts a closure into an [`Unmarshaller`].
pub fn unmarshal<T, S, F>(function: F) -> FnUnmarshaller<F>
where
    F: Fn(S) -> ConversionResult<T>,
{
    FnUnmarshaller::new(function)
}

/// Lifts a pair of closures into a [`Converter`](crate::foundation::Converter).
///
/// # Examples
///
/// ```rust,ignore
/// use morph_converter::prelude::*;
///
/// let number = convert(
///     |n: u16| n.to_string(),
///     |s: String| s.parse().map_err(|_| ConversionError::malformed("not a number", &s)),
/// );
/// assert_eq!(number.unmarshal("42".into())?, 42);
/// ```
pub fn convert<T, S, M, U>(marshal: M, unmarshal: U) -> FnConverter<M, U>
where
    M: Fn(T) -> S,
    U: Fn(S) -> ConversionResult<T>,
{
    FnConverter::new(marshal, unmarshal)
}

/// A converter returning its input in both directions.
pub fn identity<T>() -> IdentityConverter<T> {
    IdentityConverter::new()
}
