//! The generic argument and its resolver.
//!
//! The shape dispatch (plain value or deferred producer) is written once
//! here. The deferred half brings its own [`Defer`] capability, which decides
//! whether resolving blocks and returns the value, or hands back a future.

// ============================================================================
// DEFER CAPABILITY
// ============================================================================

/// Unwraps a possibly-deferred value of type `T`.
///
/// # Examples
///
/// ```rust,ignore
/// use morph_argument::Defer;
///
/// struct Constant(u32);
///
/// impl Defer<u32> for Constant {
///     type Output = u32;
///
///     fn ready(value: u32) -> u32 {
///         value
///     }
///
///     fn call(&self) -> u32 {
///         self.0
///     }
/// }
/// ```
pub trait Defer<T> {
    /// What resolving yields: `T` itself, or a future of `T`.
    type Output;

    /// Lifts an already available value into [`Self::Output`].
    fn ready(value: T) -> Self::Output;

    /// Produces the value. Called on every resolution, never cached.
    fn call(&self) -> Self::Output;
}

// ============================================================================
// ARGUMENT
// ============================================================================

/// A plain value or a deferred producer of one.
#[derive(Debug, Clone)]
pub enum Argument<T, D> {
    /// The value itself.
    Value(T),
    /// A producer, resolved through its [`Defer`] capability.
    Deferred(D),
}

impl<T, D> Argument<T, D> {
    /// Wraps a deferred producer.
    pub fn deferred(producer: D) -> Self {
        Self::Deferred(producer)
    }

    /// Returns `true` if this argument holds a producer.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

impl<T, D> Argument<T, D>
where
    T: Clone,
    D: Defer<T>,
{
    /// Resolves the argument. Plain values are cloned, producers are called.
    pub fn resolve(&self) -> D::Output {
        match self {
            Self::Value(value) => D::ready(value.clone()),
            Self::Deferred(producer) => producer.call(),
        }
    }
}

impl<T, D> From<T> for Argument<T, D> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

// ============================================================================
// RESOLVER
// ============================================================================

/// Holds an [`Argument`] and resolves it on request.
///
/// Each call to [`get_value`](Self::get_value) resolves again, so a producer
/// may yield a different value every time.
#[derive(Debug, Clone)]
pub struct ArgumentResolver<T, D> {
    argument: Argument<T, D>,
}

impl<T, D> ArgumentResolver<T, D> {
    /// Creates a resolver for `argument`.
    pub fn new(argument: Argument<T, D>) -> Self {
        Self { argument }
    }

    /// Returns the held argument.
    pub fn argument(&self) -> &Argument<T, D> {
        &self.argument
    }

    /// Extracts the held argument.
    pub fn into_inner(self) -> Argument<T, D> {
        self.argument
    }
}

impl<T, D> ArgumentResolver<T, D>
where
    T: Clone,
    D: Defer<T>,
{
    /// Resolves the held argument.
    pub fn get_value(&self) -> D::Output {
        self.argument.resolve()
    }
}

// ============================================================================
// TESTS
// ============================================================================
