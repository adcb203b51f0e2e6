//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use morph_converter::prelude::*;
//!
//! let tags = EnumStringConverter::<Tag>::of().nullsafe_string();
//! ```

// ============================================================================
// FOUNDATION: Capabilities, factories, errors
// ============================================================================

pub use crate::foundation::{
    ConversionError, ConversionErrorKind, ConversionResult, Converter, ConverterExt,
    ConverterFactory, InstanceFactory, Marshaller, MarshallerFactory, SharedConverter,
    SharedConverterFactory, SharedMarshaller, SharedMarshallerFactory, SharedUnmarshaller,
    SharedUnmarshallerFactory, Undefinable, Unmarshaller, UnmarshallerFactory, wrap_converter,
    wrap_marshaller, wrap_unmarshaller,
};

// ============================================================================
// CONVERTERS: Built-in converters
// ============================================================================

pub use crate::converters::{
    ArrayConverter, EnumStringConverter, IdentityConverter, NullSafe, NullSafeString,
    StringEnum, UndefinedSafe,
};
pub use crate::{Color, ColorConverter};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    FnConverter, FnMarshaller, FnUnmarshaller, IntoNullSafe, IntoNullSafeString,
    IntoUndefinedSafe, Swap, convert, identity, map, marshal, nullsafe, nullsafe_string, swap,
    undefinedsafe, unmarshal,
};

// ============================================================================
// RESOLUTION
// ============================================================================

pub use crate::convertable::{Convertable, FactoryDescriptor, create_converter_instance};
