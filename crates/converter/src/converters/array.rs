//! ARRAY converter - converts vectors element by element

use crate::foundation::{ConversionResult, Marshaller, Unmarshaller};

/// Applies a converter to every element of a vector, keeping the order.
///
/// The first failing element aborts the conversion; its error is returned
/// unchanged and no partial result is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayConverter<C> {
    pub(crate) inner: C,
}

impl<C> ArrayConverter<C> {
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

impl<T, S, C> Marshaller<Vec<T>, Vec<S>> for ArrayConverter<C>
where
    C: Marshaller<T, S>,
{
    fn marshal(&self, object: Vec<T>) -> ConversionResult<Vec<S>> {
        object
            .into_iter()
            .map(|element| self.inner.marshal(element))
            .collect()
    }
}

impl<T, S, C> Unmarshaller<Vec<T>, Vec<S>> for ArrayConverter<C>
where
    C: Unmarshaller<T, S>,
{
    fn unmarshal(&self, serialized: Vec<S>) -> ConversionResult<Vec<T>> {
        serialized
            .into_iter()
            .map(|element| self.inner.unmarshal(element))
            .collect()
    }
}
