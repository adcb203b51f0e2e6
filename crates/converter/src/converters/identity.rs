//! IDENTITY converter - both directions return their input

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{ConversionResult, Marshaller, Unmarshaller};

/// A converter whose object and serialized types are the same.
pub struct IdentityConverter<T> {
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> IdentityConverter<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for IdentityConverter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for IdentityConverter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IdentityConverter<T> {}

impl<T> fmt::Debug for IdentityConverter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IdentityConverter")
    }
}

impl<T> Marshaller<T, T> for IdentityConverter<T> {
    fn marshal(&self, object: T) -> ConversionResult<T> {
        Ok(object)
    }
}

impl<T> Unmarshaller<T, T> for IdentityConverter<T> {
    fn unmarshal(&self, serialized: T) -> ConversionResult<T> {
        Ok(serialized)
    }
}
