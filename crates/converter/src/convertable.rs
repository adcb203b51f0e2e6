//! Resolving a converter description into a converter.
//!
//! A [`Convertable`] is one of three shapes: a converter instance, a factory
//! called without parameters, or a [`FactoryDescriptor`] pairing a factory
//! with a parameter argument. Any of these may itself be wrapped in a
//! [`SyncArgument`] provider. [`create_converter_instance`] unwraps the
//! provider once, then dispatches on the shape.
//!
//! # Examples
//!
//! ```rust,ignore
//! use morph_argument::SyncArgument;
//! use morph_converter::prelude::*;
//!
//! let description = SyncArgument::provider(|| Convertable::instance(ColorConverter));
//! let converter = create_converter_instance(&description);
//! assert_eq!(converter.marshal(Color::new(255, 0, 0))?, "#ff0000");
//! ```

use std::fmt;
use std::sync::Arc;

use morph_argument::{Argument, SyncArgument};

use crate::foundation::{Converter, ConverterFactory, SharedConverter, SharedConverterFactory};

// ============================================================================
// FACTORY DESCRIPTOR
// ============================================================================

/// A factory together with the parameters to call it with.
///
/// The parameters are a [`SyncArgument`]: a provider is resolved again on
/// every [`create_converter_instance`] call, so one descriptor can yield
/// differently configured converters over time.
pub struct FactoryDescriptor<T, S, P> {
    pub factory: SharedConverterFactory<T, S, Option<P>>,
    pub params: Option<SyncArgument<P>>,
}

impl<T, S, P> FactoryDescriptor<T, S, P> {
    /// Creates a descriptor without parameters.
    pub fn new<F>(factory: F) -> Self
    where
        F: ConverterFactory<T, S, Option<P>> + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(factory))
    }

    /// Creates a descriptor around an already shared factory.
    pub fn from_shared(factory: SharedConverterFactory<T, S, Option<P>>) -> Self {
        Self {
            factory,
            params: None,
        }
    }

    /// Sets the parameters, either a value or a provider.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_params(mut self, params: impl Into<SyncArgument<P>>) -> Self {
        self.params = Some(params.into());
        self
    }
}

impl<T, S, P> FactoryDescriptor<T, S, P>
where
    P: Clone,
{
    fn create(&self) -> SharedConverter<T, S> {
        let params = self.params.as_ref().map(Argument::resolve);
        self.factory.create_converter(params)
    }
}

impl<T, S, P: Clone> Clone for FactoryDescriptor<T, S, P> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
            params: self.params.clone(),
        }
    }
}

impl<T, S, P> fmt::Debug for FactoryDescriptor<T, S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryDescriptor")
            .field("has_params", &self.params.is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// CONVERTABLE
// ============================================================================

/// Anything a converter can be resolved from.
///
/// `P` is the factory parameter type; it defaults to `()` for descriptions
/// that never carry parameters.
pub enum Convertable<T, S, P = ()> {
    /// A ready converter, returned as is.
    Instance(SharedConverter<T, S>),
    /// A factory, called with `None`.
    Factory(SharedConverterFactory<T, S, Option<P>>),
    /// A factory called with freshly resolved parameters.
    Descriptor(FactoryDescriptor<T, S, P>),
}

impl<T, S, P> Convertable<T, S, P> {
    /// Wraps a converter instance.
    pub fn instance<C>(converter: C) -> Self
    where
        C: Converter<T, S> + Send + Sync + 'static,
    {
        Self::Instance(Arc::new(converter))
    }

    /// Wraps a factory that is called without parameters.
    pub fn factory<F>(factory: F) -> Self
    where
        F: ConverterFactory<T, S, Option<P>> + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(factory))
    }

    /// Wraps a factory descriptor.
    pub fn descriptor(descriptor: FactoryDescriptor<T, S, P>) -> Self {
        Self::Descriptor(descriptor)
    }
}

impl<T, S, P> Convertable<T, S, P>
where
    P: Clone,
{
    /// Resolves this description into a converter.
    ///
    /// Instances are handed out as is. Factories are called with `None`.
    /// Descriptors resolve their parameters first, on every call.
    pub fn create_converter(&self) -> SharedConverter<T, S> {
        match self {
            Self::Instance(converter) => {
                tracing::trace!(branch = "instance", "resolved convertable");
                Arc::clone(converter)
            }
            Self::Factory(factory) => {
                tracing::trace!(branch = "factory", "resolved convertable");
                factory.create_converter(None)
            }
            Self::Descriptor(descriptor) => {
                tracing::trace!(
                    branch = "descriptor",
                    has_params = descriptor.params.is_some(),
                    "resolved convertable"
                );
                descriptor.create()
            }
        }
    }

    /// Resolves `argument` (a description or a provider of one) into a
    /// converter. See [`create_converter_instance`].
    pub fn create_converter_instance(argument: &SyncArgument<Self>) -> SharedConverter<T, S> {
        argument.resolve().create_converter()
    }
}

impl<T, S, P: Clone> Clone for Convertable<T, S, P> {
    fn clone(&self) -> Self {
        match self {
            Self::Instance(converter) => Self::Instance(Arc::clone(converter)),
            Self::Factory(factory) => Self::Factory(Arc::clone(factory)),
            Self::Descriptor(descriptor) => Self::Descriptor(descriptor.clone()),
        }
    }
}

impl<T, S, P> fmt::Debug for Convertable<T, S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance(_) => f.write_str("Convertable::Instance"),
            Self::Factory(_) => f.write_str("Convertable::Factory"),
            Self::Descriptor(descriptor) => f
                .debug_tuple("Convertable::Descriptor")
                .field(descriptor)
                .finish(),
        }
    }
}

impl<T, S, P> From<SharedConverter<T, S>> for Convertable<T, S, P> {
    fn from(converter: SharedConverter<T, S>) -> Self {
        Self::Instance(converter)
    }
}

impl<T, S, P> From<SharedConverterFactory<T, S, Option<P>>> for Convertable<T, S, P> {
    fn from(factory: SharedConverterFactory<T, S, Option<P>>) -> Self {
        Self::Factory(factory)
    }
}

impl<T, S, P> From<FactoryDescriptor<T, S, P>> for Convertable<T, S, P> {
    fn from(descriptor: FactoryDescriptor<T, S, P>) -> Self {
        Self::Descriptor(descriptor)
    }
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// Resolves a description, or a provider of one, into a converter.
///
/// The provider is called once per call. The resolved description is then
/// matched in order: instance, factory, descriptor.
pub fn create_converter_instance<T, S, P>(
    argument: &SyncArgument<Convertable<T, S, P>>,
) -> SharedConverter<T, S>
where
    P: Clone,
{
    Convertable::create_converter_instance(argument)
}
