//! UNDEFINEDSAFE converter - passes `Undefined` through

use crate::foundation::{ConversionResult, Marshaller, Undefinable, Unmarshaller};

/// Makes a converter work with [`Undefinable`] on both sides.
///
/// `Undefined` maps to `Undefined` in both directions without calling the
/// inner converter. Inner errors are returned unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndefinedSafe<C> {
    pub(crate) inner: C,
}

impl<C> UndefinedSafe<C> {
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

impl<T, S, C> Marshaller<Undefinable<T>, Undefinable<S>> for UndefinedSafe<C>
where
    C: Marshaller<T, S>,
{
    fn marshal(&self, object: Undefinable<T>) -> ConversionResult<Undefinable<S>> {
        object.map(|object| self.inner.marshal(object)).transpose()
    }
}

impl<T, S, C> Unmarshaller<Undefinable<T>, Undefinable<S>> for UndefinedSafe<C>
where
    C: Unmarshaller<T, S>,
{
    fn unmarshal(&self, serialized: Undefinable<S>) -> ConversionResult<Undefinable<T>> {
        serialized
            .map(|serialized| self.inner.unmarshal(serialized))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{Dummy, Untouchable};

    #[test]
    fn test_undefinedsafe_marshal_value() {
        let sut = UndefinedSafe::new(Dummy);
        assert_eq!(
            sut.marshal(Undefinable::Defined("test".into())).unwrap(),
            Undefinable::Defined("marshal test".into())
        );
    }

    #[test]
    fn test_undefinedsafe_marshal_undefined() {
        let sut = UndefinedSafe::new(Dummy);
        assert_eq!(sut.marshal(Undefinable::Undefined).unwrap(), Undefinable::Undefined);
    }

    #[test]
    fn test_undefinedsafe_unmarshal_value() {
        let sut = UndefinedSafe::new(Dummy);
        assert_eq!(
            sut.unmarshal(Undefinable::Defined("test".into())).unwrap(),
            Undefinable::Defined("unmarshal test".into())
        );
    }

    #[test]
    fn test_undefinedsafe_unmarshal_undefined() {
        let sut = UndefinedSafe::new(Dummy);
        assert_eq!(
            sut.unmarshal(Undefinable::Undefined).unwrap(),
            Undefinable::Undefined
        );
    }

    #[test]
    fn test_undefinedsafe_propagates_inner_error() {
        let sut = UndefinedSafe::new(Dummy);
        assert!(sut.unmarshal(Undefinable::Defined("fail".into())).is_err());
    }

    #[test]
    fn test_undefinedsafe_undefined_bypasses_inner() {
        let sut = UndefinedSafe::new(Untouchable);
        assert_eq!(sut.marshal(Undefinable::Undefined).unwrap(), Undefinable::Undefined);
        assert_eq!(sut.unmarshal(Undefinable::Undefined).unwrap(), Undefinable::Undefined);
    }
}
