//! Macros for opting converter types into idempotent wrapping.

// ============================================================================
// WRAPPABLE MACRO
// ============================================================================

/// Implements [`IntoNullSafe`], [`IntoUndefinedSafe`] and
/// [`IntoNullSafeString`] for a converter type by wrapping it.
///
/// Generic parameters are listed in angle brackets before the type; `?Sized`
/// is the only bound accepted there.
///
/// ```rust,ignore
/// use morph_converter::wrappable;
///
/// struct Upper;
/// wrappable!(Upper);
///
/// struct Tagged<C> { inner: C }
/// wrappable!(<C> Tagged<C>);
/// ```
///
/// The `@nullsafe`, `@undefinedsafe` and `@nullsafe_string` forms implement a
/// single capability.
///
/// [`IntoNullSafe`]: crate::combinators::IntoNullSafe
/// [`IntoUndefinedSafe`]: crate::combinators::IntoUndefinedSafe
/// [`IntoNullSafeString`]: crate::combinators::IntoNullSafeString
#[macro_export]
macro_rules! wrappable {
    (@nullsafe <$($param:ident $(: ?$sized:ident)?),* $(,)?> $ty:ty) => {
        impl<$($param $(: ?$sized)?),*> $crate::combinators::IntoNullSafe for $ty {
            type Output = $crate::converters::NullSafe<Self>;

            fn into_nullsafe(self) -> Self::Output {
                $crate::converters::NullSafe::new(self)
            }
        }
    };
    (@undefinedsafe <$($param:ident $(: ?$sized:ident)?),* $(,)?> $ty:ty) => {
        impl<$($param $(: ?$sized)?),*> $crate::combinators::IntoUndefinedSafe for $ty {
            type Output = $crate::converters::UndefinedSafe<Self>;

            fn into_undefinedsafe(self) -> Self::Output {
                $crate::converters::UndefinedSafe::new(self)
            }
        }
    };
    (@nullsafe_string <$($param:ident $(: ?$sized:ident)?),* $(,)?> $ty:ty) => {
        impl<$($param $(: ?$sized)?),*> $crate::combinators::IntoNullSafeString for $ty {
            type Output = $crate::converters::NullSafeString<Self>;

            fn into_nullsafe_string(self) -> Self::Output {
                $crate::converters::NullSafeString::new(self)
            }
        }
    };
    (<$($param:ident $(: ?$sized:ident)?),* $(,)?> $ty:ty) => {
        $crate::wrappable!(@nullsafe <$($param $(: ?$sized)?),*> $ty);
        $crate::wrappable!(@undefinedsafe <$($param $(: ?$sized)?),*> $ty);
        $crate::wrappable!(@nullsafe_string <$($param $(: ?$sized)?),*> $ty);
    };
    ($ty:ty) => {
        $crate::wrappable!(<> $ty);
    };
}
