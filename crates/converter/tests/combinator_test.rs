//! Combinators and built-in converters working together.

use morph_converter::prelude::*;
use pretty_assertions::assert_eq;

/// Prefixes `"marshal "` / `"unmarshal "`; refuses to unmarshal `"throw"`.
#[derive(Debug, Clone, Copy)]
struct DummyConverter;

impl Marshaller<String, String> for DummyConverter {
    fn marshal(&self, object: String) -> ConversionResult<String> {
        Ok(format!("marshal {object}"))
    }
}

impl Unmarshaller<String, String> for DummyConverter {
    fn unmarshal(&self, serialized: String) -> ConversionResult<String> {
        if serialized == "throw" {
            return Err(ConversionError::malformed("illegal string", serialized));
        }
        Ok(format!("unmarshal {serialized}"))
    }
}

morph_converter::wrappable!(DummyConverter);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Red,
    Green,
}

impl StringEnum for Tag {
    const MEMBERS: &'static [(&'static str, Self)] = &[("RED", Self::Red), ("GREEN", Self::Green)];
}

#[test]
fn test_nullsafe() {
    let sut = nullsafe(DummyConverter);
    assert_eq!(sut.marshal(Some("test".into())).unwrap(), Some("marshal test".into()));
    assert_eq!(sut.marshal(None).unwrap(), None);
}

#[test]
fn test_reuse_nullsafe_instance() {
    let instance = nullsafe(DummyConverter);
    let sut: NullSafe<DummyConverter> = nullsafe(instance);
    assert_eq!(sut.marshal(None).unwrap(), None);
}

#[test]
fn test_nullsafe_string() {
    let sut = nullsafe_string(DummyConverter);
    assert_eq!(sut.marshal(Some("test".into())).unwrap(), "marshal test");
    assert_eq!(sut.marshal(None).unwrap(), "");
    assert_eq!(sut.unmarshal(String::new()).unwrap(), None);
    let _: NullSafeString<DummyConverter> = nullsafe_string(sut);
}

#[test]
fn test_undefinedsafe() {
    let sut = undefinedsafe(DummyConverter);
    assert_eq!(
        sut.marshal(Undefinable::Defined("test".into())).unwrap(),
        Undefinable::Defined("marshal test".into())
    );
    assert_eq!(sut.marshal(Undefinable::Undefined).unwrap(), Undefinable::Undefined);
    let _: UndefinedSafe<DummyConverter> = undefinedsafe(sut);
}

#[test]
fn test_error_carries_description_and_value() {
    let error = DummyConverter.unmarshal("throw".into()).unwrap_err();
    assert_eq!(error.to_string(), "illegal string: throw");
    assert_eq!(error.description(), "illegal string");
    assert_eq!(error.value(), Some("throw"));
}

#[test]
fn test_map_forwards_first_error() {
    let sut = map(DummyConverter);
    assert_eq!(
        sut.marshal(vec!["test".into(), "test2".into()]).unwrap(),
        vec!["marshal test".to_string(), "marshal test2".to_string()]
    );
    let error = sut.unmarshal(vec!["test".into(), "throw".into()]).unwrap_err();
    assert_eq!(error.to_string(), "illegal string: throw");
}

#[test]
fn test_swap() {
    let sut = swap(DummyConverter);
    assert_eq!(sut.marshal("test".into()).unwrap(), "unmarshal test");
    assert_eq!(sut.unmarshal("test".into()).unwrap(), "marshal test");
}

#[test]
fn test_closures() {
    let aye = |b: bool| (if b { "aye" } else { "nay" }).to_string();
    let is_aye = |s: String| -> ConversionResult<bool> { Ok(s == "aye") };

    assert_eq!(marshal(aye).marshal(true).unwrap(), "aye");
    assert!(unmarshal(is_aye).unmarshal("aye".into()).unwrap());

    let sut = convert(aye, is_aye);
    assert_eq!(sut.marshal(false).unwrap(), "nay");
    assert!(!sut.unmarshal("nay".into()).unwrap());
}

#[test]
fn test_identity() {
    assert_eq!(identity::<String>().marshal("test2".into()).unwrap(), "test2");
}

#[test]
fn test_fluent_chain() {
    let sut = EnumStringConverter::<Tag>::of().nullsafe().map();
    assert_eq!(
        sut.unmarshal(vec![None, Some("GREEN".into())]).unwrap(),
        vec![None, Some(Tag::Green)]
    );
    assert_eq!(
        sut.marshal(vec![Some(Tag::Red), None]).unwrap(),
        vec![Some("RED".to_string()), None]
    );
}

#[test]
fn test_nullable_and_undefinable() {
    let sut = EnumStringConverter::<Tag>::of().nullsafe().undefinedsafe();
    assert_eq!(
        sut.unmarshal(Undefinable::Defined(Some("RED".into()))).unwrap(),
        Undefinable::Defined(Some(Tag::Red))
    );
    assert_eq!(
        sut.unmarshal(Undefinable::Defined(None)).unwrap(),
        Undefinable::Defined(None)
    );
    assert_eq!(sut.unmarshal(Undefinable::Undefined).unwrap(), Undefinable::Undefined);
}

#[test]
fn test_unknown_enum_name_inside_array() {
    let sut = EnumStringConverter::<Tag>::of().map();
    let error = sut
        .unmarshal(vec!["RED".into(), "BLUE".into()])
        .unwrap_err();
    assert_eq!(error.kind(), ConversionErrorKind::UnknownEnumName);
    assert_eq!(error.value(), Some("BLUE"));
}

#[test]
fn test_shared_wrappers_are_idempotent() {
    let shared: SharedConverter<Color, String> = ColorConverter.shared();
    let sut: NullSafe<SharedConverter<Color, String>> = nullsafe(nullsafe(shared));
    assert_eq!(sut.marshal(Some(Color::new(0, 0, 255))).unwrap(), Some("#0000ff".into()));
}
