//! NULLSAFE STRING converter - `None` is the empty string

use crate::foundation::{ConversionResult, Marshaller, Unmarshaller};

/// Makes a string converter treat the empty string as `None`.
///
/// Only the serialized side is a plain `String`: `None` marshals to `""` and
/// `""` unmarshals to `None`. Every other string is handed to the inner
/// converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullSafeString<C> {
    pub(crate) inner: C,
}

impl<C> NullSafeString<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T, C> Marshaller<Option<T>, String> for NullSafeString<C>
where
    C: Marshaller<T, String>,
{
    fn marshal(&self, object: Option<T>) -> ConversionResult<String> {
        match object {
            None => Ok(String::new()),
            Some(object) => self.inner.marshal(object),
        }
    }
}

impl<T, C> Unmarshaller<Option<T>, String> for NullSafeString<C>
where
    C: Unmarshaller<T, String>,
{
    fn unmarshal(&self, serialized: String) -> ConversionResult<Option<T>> {
        if serialized.is_empty() {
            Ok(None)
        } else {
            self.inner.unmarshal(serialized).map(Some)
        }
    }
}
