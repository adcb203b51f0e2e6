//! NULLSAFE converter - passes `None` through

use crate::foundation::{ConversionResult, Marshaller, Unmarshaller};

/// Makes a converter work with `Option` on both sides.
///
/// `None` maps to `None` in both directions without calling the inner
/// converter. Inner errors are returned unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullSafe<C> {
    pub(crate) inner: C,
}

impl<C> NullSafe<C> {
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

impl<T, S, C> Marshaller<Option<T>, Option<S>> for NullSafe<C>
where
    C: Marshaller<T, S>,
{
    fn marshal(&self, object: Option<T>) -> ConversionResult<Option<S>> {
        object.map(|object| self.inner.marshal(object)).transpose()
    }
}

impl<T, S, C> Unmarshaller<Option<T>, Option<S>> for NullSafe<C>
where
    C: Unmarshaller<T, S>,
{
    fn unmarshal(&self, serialized: Option<S>) -> ConversionResult<Option<T>> {
        serialized
            .map(|serialized| self.inner.unmarshal(serialized))
            .transpose()
    }
}
