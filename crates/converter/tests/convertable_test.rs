//! Resolution of converter descriptions.

use std::sync::{Arc, Mutex};

use morph_argument::SyncArgument;
use morph_converter::prelude::*;
use pretty_assertions::assert_eq;

struct Prefix(String);

impl Marshaller<String, String> for Prefix {
    fn marshal(&self, object: String) -> ConversionResult<String> {
        Ok(format!("{}{object}", self.0))
    }
}

impl Unmarshaller<String, String> for Prefix {
    fn unmarshal(&self, serialized: String) -> ConversionResult<String> {
        serialized
            .strip_prefix(&self.0)
            .map(str::to_string)
            .ok_or_else(|| ConversionError::malformed("missing prefix", &serialized))
    }
}

fn prefix(text: &str) -> Prefix {
    Prefix(text.to_string())
}

/// Prefixes `"marshal 2 "` when the first parameter is `"two"`, `"marshal "` otherwise.
fn dummy_factory(params: Option<Vec<String>>) -> SharedConverter<String, String> {
    match params.as_deref() {
        Some([first, ..]) if first == "two" => Arc::new(prefix("marshal 2 ")),
        _ => Arc::new(prefix("marshal ")),
    }
}

fn marshal_test(description: &SyncArgument<Convertable<String, String, Vec<String>>>) -> String {
    create_converter_instance(description)
        .marshal("test".into())
        .unwrap()
}

#[test]
fn test_simple_converter() {
    let input = SyncArgument::from(Convertable::instance(prefix("marshal ")));
    assert_eq!(marshal_test(&input), "marshal test");
}

#[test]
fn test_converter_provider() {
    let input = SyncArgument::provider(|| Convertable::instance(prefix("marshal ")));
    assert_eq!(marshal_test(&input), "marshal test");
}

#[test]
fn test_converter_factory() {
    let input = SyncArgument::from(Convertable::factory(dummy_factory));
    assert_eq!(marshal_test(&input), "marshal test");
}

#[test]
fn test_converter_factory_provider() {
    let input = SyncArgument::provider(|| Convertable::factory(dummy_factory));
    assert_eq!(marshal_test(&input), "marshal test");
}

#[test]
fn test_descriptor_without_params() {
    let input = SyncArgument::from(Convertable::descriptor(FactoryDescriptor::new(
        dummy_factory,
    )));
    assert_eq!(marshal_test(&input), "marshal test");
}

#[test]
fn test_descriptor_with_params() {
    let descriptor = FactoryDescriptor::new(dummy_factory).with_params(vec!["two".to_string()]);
    let input = SyncArgument::from(Convertable::from(descriptor));
    assert_eq!(marshal_test(&input), "marshal 2 test");
}

#[test]
fn test_descriptor_with_changing_params_provider() {
    let current = Arc::new(Mutex::new("one".to_string()));
    let source = Arc::clone(&current);
    let params = SyncArgument::provider(move || vec![source.lock().unwrap().clone()]);
    let input = SyncArgument::from(Convertable::descriptor(
        FactoryDescriptor::new(dummy_factory).with_params(params),
    ));

    assert_eq!(marshal_test(&input), "marshal test");
    *current.lock().unwrap() = "two".to_string();
    assert_eq!(marshal_test(&input), "marshal 2 test");
}

#[test]
fn test_resolved_converter_unmarshals() {
    let input = SyncArgument::from(Convertable::<String, String>::instance(prefix("> ")));
    let converter = create_converter_instance(&input);
    assert_eq!(converter.unmarshal("> quoted".into()).unwrap(), "quoted");
    assert_eq!(
        converter.unmarshal("plain".into()).unwrap_err().to_string(),
        "missing prefix: plain"
    );
}

#[test]
fn test_wrapped_instance_is_handed_out_unchanged() {
    let shared = ColorConverter.shared();
    let input = SyncArgument::from(Convertable::<Color, String>::factory(wrap_converter(
        Arc::clone(&shared),
    )));
    assert!(Arc::ptr_eq(&create_converter_instance(&input), &shared));
}
