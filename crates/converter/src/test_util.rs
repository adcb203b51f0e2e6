//! Converters shared by the unit tests.

use crate::foundation::{ConversionError, ConversionResult, Marshaller, Unmarshaller};

/// Prefixes `"marshal "` / `"unmarshal "`, and refuses to unmarshal `"fail"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dummy;

impl Marshaller<String, String> for Dummy {
    fn marshal(&self, object: String) -> ConversionResult<String> {
        Ok(format!("marshal {object}"))
    }
}

impl Unmarshaller<String, String> for Dummy {
    fn unmarshal(&self, serialized: String) -> ConversionResult<String> {
        if serialized == "fail" {
            Err(ConversionError::malformed("dummy failure", serialized))
        } else {
            Ok(format!("unmarshal {serialized}"))
        }
    }
}

crate::wrappable!(Dummy);

/// Panics whenever it is asked to convert; wrappers must bypass it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Untouchable;

impl Marshaller<String, String> for Untouchable {
    fn marshal(&self, object: String) -> ConversionResult<String> {
        panic!("inner marshal called with {object:?}")
    }
}

impl Unmarshaller<String, String> for Untouchable {
    fn unmarshal(&self, serialized: String) -> ConversionResult<String> {
        panic!("inner unmarshal called with {serialized:?}")
    }
}
