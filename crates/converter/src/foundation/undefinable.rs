//! A value that may be undefined.
//!
//! `Option<T>` plays the role of a nullable value. [`Undefinable<T>`] is the
//! separate "undefined" state, so `Undefinable<Option<T>>` distinguishes a
//! value, an explicit null, and an absent value.

/// A defined value, or none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Undefinable<T> {
    /// No value.
    #[default]
    Undefined,
    /// A value.
    Defined(T),
}

impl<T> Undefinable<T> {
    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn as_ref(&self) -> Undefinable<&T> {
        match self {
            Self::Undefined => Undefinable::Undefined,
            Self::Defined(value) => Undefinable::Defined(value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Undefinable<U> {
        match self {
            Self::Undefined => Undefinable::Undefined,
            Self::Defined(value) => Undefinable::Defined(f(value)),
        }
    }

    /// Converts into an `Option`, losing the distinction to `null`.
    pub fn defined(self) -> Option<T> {
        match self {
            Self::Undefined => None,
            Self::Defined(value) => Some(value),
        }
    }
}

impl<T, E> Undefinable<Result<T, E>> {
    /// Moves a result out of the undefinable, like [`Option::transpose`].
    pub fn transpose(self) -> Result<Undefinable<T>, E> {
        match self {
            Self::Undefined => Ok(Undefinable::Undefined),
            Self::Defined(result) => result.map(Undefinable::Defined),
        }
    }
}

impl<T> From<T> for Undefinable<T> {
    fn from(value: T) -> Self {
        Self::Defined(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_undefined() {
        assert!(Undefinable::<u8>::default().is_undefined());
    }

    #[test]
    fn test_null_is_defined() {
        let null: Undefinable<Option<u8>> = Undefinable::from(None);
        assert!(null.is_defined());
        assert_eq!(null.defined(), Some(None));
    }

    #[test]
    fn test_transpose() {
        let ok: Undefinable<Result<u8, ()>> = Undefinable::Defined(Ok(1));
        assert_eq!(ok.transpose(), Ok(Undefinable::Defined(1)));

        let err: Undefinable<Result<u8, ()>> = Undefinable::Defined(Err(()));
        assert_eq!(err.transpose(), Err(()));

        let undefined: Undefinable<Result<u8, ()>> = Undefinable::Undefined;
        assert_eq!(undefined.transpose(), Ok(Undefinable::Undefined));
    }
}
