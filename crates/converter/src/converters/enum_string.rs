//! ENUM STRING converter - enum members by name

use std::fmt;

use crate::foundation::{ConversionError, ConversionResult, Marshaller, Unmarshaller};

/// A type with a fixed, ordered table of named members.
///
/// # Examples
///
/// ```rust,ignore
/// use morph_converter::converters::StringEnum;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Level {
///     Low,
///     High,
/// }
///
/// impl StringEnum for Level {
///     const MEMBERS: &'static [(&'static str, Self)] = &[("LOW", Self::Low), ("HIGH", Self::High)];
/// }
/// ```
pub trait StringEnum: Sized + 'static {
    /// `(name, value)` pairs in declaration order.
    const MEMBERS: &'static [(&'static str, Self)];
}

/// Converts enum values to and from their member names.
///
/// Backed by an ordered `(name, value)` table. Marshalling returns the first
/// name whose value matches, so tables with duplicate values still marshal,
/// to the earliest name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumStringConverter<T> {
    members: Vec<(String, T)>,
}

impl<T> EnumStringConverter<T> {
    /// Creates a converter over `(name, value)` pairs.
    pub fn new<N, I>(members: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, T)>,
    {
        Self {
            members: members
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }

    pub fn members(&self) -> &[(String, T)] {
        &self.members
    }
}

impl<T> EnumStringConverter<T>
where
    T: StringEnum + Clone,
{
    /// Creates a converter over the members of `T`.
    pub fn of() -> Self {
        Self::new(T::MEMBERS.iter().cloned())
    }
}

impl<T> Default for EnumStringConverter<T>
where
    T: StringEnum + Clone,
{
    fn default() -> Self {
        Self::of()
    }
}

impl<T> Marshaller<T, String> for EnumStringConverter<T>
where
    T: PartialEq + fmt::Debug,
{
    fn marshal(&self, object: T) -> ConversionResult<String> {
        self.members
            .iter()
            .find(|(_, value)| *value == object)
            .map(|(name, _)| name.clone())
            .ok_or_else(|| ConversionError::unknown_enum_value(format!("{object:?}")))
    }
}

impl<T> Unmarshaller<T, String> for EnumStringConverter<T>
where
    T: Clone,
{
    fn unmarshal(&self, serialized: String) -> ConversionResult<T> {
        self.members
            .iter()
            .find(|(name, _)| *name == serialized)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| ConversionError::unknown_enum_name(serialized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ConversionErrorKind;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum NamedEnum {
        Ghi,
        Jkl,
    }

    impl StringEnum for NamedEnum {
        const MEMBERS: &'static [(&'static str, Self)] = &[("GHI", Self::Ghi), ("JKL", Self::Jkl)];
    }

    #[test]
    fn test_marshal_value_enum() {
        let sut = EnumStringConverter::new([("ABC", "ABC"), ("DEF", "DEF")]);
        assert_eq!(sut.marshal("DEF").unwrap(), "DEF");
        assert_eq!(sut.unmarshal("DEF".into()).unwrap(), "DEF");
    }

    #[test]
    fn test_marshal_number_enum() {
        let sut = EnumStringConverter::new([("MNO", 1), ("PQR", 2)]);
        assert_eq!(sut.marshal(2).unwrap(), "PQR");
    }

    #[test]
    fn test_named_enum_both_directions() {
        let sut = EnumStringConverter::<NamedEnum>::of();
        assert_eq!(sut.marshal(NamedEnum::Jkl).unwrap(), "JKL");
        assert_eq!(sut.unmarshal("JKL".into()).unwrap(), NamedEnum::Jkl);
    }

    #[test]
    fn test_unmarshal_unknown_name() {
        let sut = EnumStringConverter::new([("ABC", "ABC"), ("DEF", "DEF")]);
        let error = sut.unmarshal("XXX".into()).unwrap_err();
        assert_eq!(error.kind(), ConversionErrorKind::UnknownEnumName);
        assert_eq!(error.value(), Some("XXX"));
    }

    #[test]
    fn test_duplicate_values_marshal_to_first_name() {
        let sut = EnumStringConverter::new([("ONE", 1), ("UNO", 1)]);
        assert_eq!(sut.marshal(1).unwrap(), "ONE");
        assert_eq!(sut.unmarshal("UNO".into()).unwrap(), 1);
    }

    #[test]
    fn test_marshal_value_missing_from_partial_table() {
        let sut = EnumStringConverter::new([("GHI", NamedEnum::Ghi)]);
        let error = sut.marshal(NamedEnum::Jkl).unwrap_err();
        assert_eq!(error.kind(), ConversionErrorKind::UnknownEnumValue);
        assert_eq!(error.value(), Some("Jkl"));
    }
}
