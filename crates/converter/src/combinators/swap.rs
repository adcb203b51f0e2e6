//! SWAP combinator - exchanges marshal and unmarshal

use crate::foundation::{ConversionResult, Marshaller, Unmarshaller};

/// Exchanges the directions of a converter.
///
/// If `C` converts `T <-> S`, `Swap<C>` converts `S <-> T`: its marshal is
/// the inner unmarshal and its unmarshal is the inner marshal, so a failing
/// inner unmarshal surfaces from [`Swap::marshal`](Marshaller::marshal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swap<C> {
    pub(crate) inner: C,
}

impl<C> Swap<C> {
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

impl<T, S, C> Marshaller<S, T> for Swap<C>
where
    C: Unmarshaller<T, S>,
{
    fn marshal(&self, object: S) -> ConversionResult<T> {
        self.inner.unmarshal(object)
    }
}

impl<T, S, C> Unmarshaller<S, T> for Swap<C>
where
    C: Marshaller<T, S>,
{
    fn unmarshal(&self, serialized: T) -> ConversionResult<S> {
        self.inner.marshal(serialized)
    }
}

/// Swaps the directions of `converter`.
pub fn swap<C>(converter: C) -> Swap<C> {
    Swap::new(converter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::Dummy;

    #[test]
    fn test_swap_marshal_is_inner_unmarshal() {
        let sut = swap(Dummy);
        assert_eq!(sut.marshal("test".into()).unwrap(), "unmarshal test");
    }

    #[test]
    fn test_swap_unmarshal_is_inner_marshal() {
        let sut = swap(Dummy);
        assert_eq!(sut.unmarshal("test".into()).unwrap(), "marshal test");
    }

    #[test]
    fn test_swap_marshal_surfaces_inner_error() {
        let sut = swap(Dummy);
        assert!(sut.marshal("fail".into()).is_err());
    }

    #[test]
    fn test_double_swap_restores_directions() {
        let sut = swap(swap(Dummy));
        assert_eq!(sut.marshal("x".into()).unwrap(), "marshal x");
        assert_eq!(sut.into_inner().into_inner().unmarshal("x".into()).unwrap(), "unmarshal x");
    }
}
