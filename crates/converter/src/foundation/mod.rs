//! Foundation: capability traits, factories, errors and the undefined marker.

pub mod error;
pub mod factory;
pub mod traits;
pub mod undefinable;

pub use error::{ConversionError, ConversionErrorKind, ConversionResult};
pub use factory::{
    ConverterFactory, InstanceFactory, MarshallerFactory, SharedConverterFactory,
    SharedMarshallerFactory, SharedUnmarshallerFactory, UnmarshallerFactory, wrap_converter,
    wrap_marshaller, wrap_unmarshaller,
};
pub use traits::{
    Converter, ConverterExt, Marshaller, SharedConverter, SharedMarshaller, SharedUnmarshaller,
    Unmarshaller,
};
pub use undefinable::Undefinable;
