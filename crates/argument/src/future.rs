//! Asynchronous arguments.
//!
//! An [`AsyncArgument`] is a plain value, a synchronous closure, a future, or
//! a closure returning a future. Resolution always hands back a boxed future,
//! so callers await every shape the same way.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::{self, BoxFuture, Shared};

use crate::argument::{Argument, ArgumentResolver, Defer};
use crate::sync::Provider;

/// The deferred shapes of an [`AsyncArgument`].
pub enum AsyncProvider<T> {
    /// A synchronous closure, called on each resolution.
    Function(Arc<dyn Fn() -> T + Send + Sync>),
    /// A single future. It is shared, so the argument can be resolved
    /// any number of times and every resolution sees the same output.
    Future(Shared<BoxFuture<'static, T>>),
    /// A closure creating a fresh future on each resolution.
    AsyncFunction(Arc<dyn Fn() -> BoxFuture<'static, T> + Send + Sync>),
}

impl<T> Defer<T> for AsyncProvider<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Output = BoxFuture<'static, T>;

    fn ready(value: T) -> Self::Output {
        future::ready(value).boxed()
    }

    fn call(&self) -> Self::Output {
        match self {
            Self::Function(function) => future::ready(function()).boxed(),
            Self::Future(shared) => shared.clone().boxed(),
            Self::AsyncFunction(function) => function(),
        }
    }
}

impl<T> Clone for AsyncProvider<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Self::Function(function) => Self::Function(Arc::clone(function)),
            Self::Future(shared) => Self::Future(shared.clone()),
            Self::AsyncFunction(function) => Self::AsyncFunction(Arc::clone(function)),
        }
    }
}

impl<T> fmt::Debug for AsyncProvider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = match self {
            Self::Function(_) => "Function",
            Self::Future(_) => "Future",
            Self::AsyncFunction(_) => "AsyncFunction",
        };
        f.debug_tuple("AsyncProvider").field(&shape).finish()
    }
}

/// A value, or a synchronous or asynchronous provider of it.
pub type AsyncArgument<T> = Argument<T, AsyncProvider<T>>;

/// Resolves an [`AsyncArgument`] into a future.
///
/// # Examples
///
/// ```rust,ignore
/// use morph_argument::{AsyncArgument, AsyncArgumentResolver};
///
/// let sut = AsyncArgumentResolver::new(AsyncArgument::async_function(|| async { 23 }));
/// assert_eq!(sut.get_value().await, 23);
/// ```
pub type AsyncArgumentResolver<T> = ArgumentResolver<T, AsyncProvider<T>>;

impl<T> Argument<T, AsyncProvider<T>>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates an argument produced by a synchronous closure.
    pub fn function<F>(function: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::Deferred(AsyncProvider::Function(Arc::new(function)))
    }

    /// Creates an argument produced by a single future.
    pub fn future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::Deferred(AsyncProvider::Future(future.boxed().shared()))
    }

    /// Creates an argument produced by a closure returning a future.
    pub fn async_function<F, Fut>(function: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::Deferred(AsyncProvider::AsyncFunction(Arc::new(move || {
            function().boxed()
        })))
    }
}

impl<T> Argument<T, Provider<T>>
where
    T: Send + Sync + 'static,
{
    /// Turns a synchronous argument into an asynchronous one.
    pub fn into_async(self) -> AsyncArgument<T> {
        match self {
            Self::Value(value) => Argument::Value(value),
            Self::Deferred(provider) => {
                Argument::Deferred(AsyncProvider::Function(Arc::new(move || provider.call())))
            }
        }
    }
}
