//! Synchronous arguments: a value, or a zero-argument closure returning it.

use std::fmt;
use std::sync::Arc;

use crate::argument::{Argument, ArgumentResolver, Defer};

/// A zero-argument closure producing a `T`.
pub struct Provider<T> {
    function: Arc<dyn Fn() -> T + Send + Sync>,
}

impl<T> Provider<T> {
    /// Wraps a closure.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            function: Arc::new(function),
        }
    }
}

impl<T> Defer<T> for Provider<T> {
    type Output = T;

    fn ready(value: T) -> T {
        value
    }

    fn call(&self) -> T {
        (self.function)()
    }
}

impl<T> Clone for Provider<T> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
        }
    }
}

impl<T> fmt::Debug for Provider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider").finish_non_exhaustive()
    }
}

/// A value or a synchronous provider of it.
pub type SyncArgument<T> = Argument<T, Provider<T>>;

/// Resolves a [`SyncArgument`] inline.
pub type SyncArgumentResolver<T> = ArgumentResolver<T, Provider<T>>;

impl<T> Argument<T, Provider<T>> {
    /// Creates an argument whose value is produced by `function` on each
    /// resolution.
    pub fn provider<F>(function: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::Deferred(Provider::new(function))
    }
}
