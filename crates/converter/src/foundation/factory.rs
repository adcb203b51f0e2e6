//! Parametrized construction of converters.
//!
//! A factory turns a parameter `C` into a shared converter, marshaller or
//! unmarshaller. Factories are stateless and may be called any number of
//! times with different parameters. Every closure `Fn(C) -> Shared*` is a
//! factory of the matching kind.

use std::sync::Arc;

use crate::foundation::{SharedConverter, SharedMarshaller, SharedUnmarshaller};

// ============================================================================
// FACTORY TRAITS
// ============================================================================

/// Creates marshallers from a parameter.
pub trait MarshallerFactory<T, S, C> {
    fn create_marshaller(&self, param: C) -> SharedMarshaller<T, S>;
}

/// Creates unmarshallers from a parameter.
pub trait UnmarshallerFactory<T, S, C> {
    fn create_unmarshaller(&self, param: C) -> SharedUnmarshaller<T, S>;
}

/// Creates converters from a parameter.
///
/// # Examples
///
/// ```rust,ignore
/// use morph_converter::prelude::*;
///
/// let prefixed = |prefix: Option<String>| -> SharedConverter<String, String> {
///     let prefix = prefix.unwrap_or_default();
///     convert(move |o: String| format!("{prefix}{o}"), Ok).shared()
/// };
/// let converter = prefixed.create_converter(Some("> ".into()));
/// ```
pub trait ConverterFactory<T, S, C> {
    fn create_converter(&self, param: C) -> SharedConverter<T, S>;
}

impl<T, S, C, F> MarshallerFactory<T, S, C> for F
where
    F: Fn(C) -> SharedMarshaller<T, S>,
{
    fn create_marshaller(&self, param: C) -> SharedMarshaller<T, S> {
        self(param)
    }
}

impl<T, S, C, F> UnmarshallerFactory<T, S, C> for F
where
    F: Fn(C) -> SharedUnmarshaller<T, S>,
{
    fn create_unmarshaller(&self, param: C) -> SharedUnmarshaller<T, S> {
        self(param)
    }
}

impl<T, S, C, F> ConverterFactory<T, S, C> for F
where
    F: Fn(C) -> SharedConverter<T, S>,
{
    fn create_converter(&self, param: C) -> SharedConverter<T, S> {
        self(param)
    }
}

/// A shareable, type-erased converter factory.
pub type SharedConverterFactory<T, S, C> = Arc<dyn ConverterFactory<T, S, C> + Send + Sync>;

/// A shareable, type-erased marshaller factory.
pub type SharedMarshallerFactory<T, S, C> = Arc<dyn MarshallerFactory<T, S, C> + Send + Sync>;

/// A shareable, type-erased unmarshaller factory.
pub type SharedUnmarshallerFactory<T, S, C> =
    Arc<dyn UnmarshallerFactory<T, S, C> + Send + Sync>;

// ============================================================================
// INSTANCE FACTORY
// ============================================================================

/// A factory handing out one fixed instance, whatever the parameter.
///
/// Built by [`wrap_marshaller`], [`wrap_unmarshaller`] and
/// [`wrap_converter`]. It is a factory for every parameter type at once.
#[derive(Clone)]
pub struct InstanceFactory<I> {
    instance: I,
}

impl<I> InstanceFactory<I> {
    pub fn new(instance: I) -> Self {
        Self { instance }
    }

    pub fn instance(&self) -> &I {
        &self.instance
    }

    pub fn into_inner(self) -> I {
        self.instance
    }
}

impl<T, S, C> MarshallerFactory<T, S, C> for InstanceFactory<SharedMarshaller<T, S>> {
    fn create_marshaller(&self, _param: C) -> SharedMarshaller<T, S> {
        Arc::clone(&self.instance)
    }
}

impl<T, S, C> UnmarshallerFactory<T, S, C> for InstanceFactory<SharedUnmarshaller<T, S>> {
    fn create_unmarshaller(&self, _param: C) -> SharedUnmarshaller<T, S> {
        Arc::clone(&self.instance)
    }
}

impl<T, S, C> ConverterFactory<T, S, C> for InstanceFactory<SharedConverter<T, S>> {
    fn create_converter(&self, _param: C) -> SharedConverter<T, S> {
        Arc::clone(&self.instance)
    }
}

/// Wraps a marshaller into a factory that ignores its parameter.
pub fn wrap_marshaller<T, S>(
    instance: SharedMarshaller<T, S>,
) -> InstanceFactory<SharedMarshaller<T, S>> {
    InstanceFactory::new(instance)
}

/// Wraps an unmarshaller into a factory that ignores its parameter.
pub fn wrap_unmarshaller<T, S>(
    instance: SharedUnmarshaller<T, S>,
) -> InstanceFactory<SharedUnmarshaller<T, S>> {
    InstanceFactory::new(instance)
}

/// Wraps a converter into a factory that ignores its parameter.
pub fn wrap_converter<T, S>(
    instance: SharedConverter<T, S>,
) -> InstanceFactory<SharedConverter<T, S>> {
    InstanceFactory::new(instance)
}
