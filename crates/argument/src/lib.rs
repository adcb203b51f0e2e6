//! # morph-argument
//!
//! Arguments that are either a plain value or something that produces the
//! value on demand.
//!
//! A single [`ArgumentResolver`] handles every flavor. What "producing the
//! value" means is decided by the [`Defer`] capability of the deferred half:
//!
//! - [`Provider`] calls a closure and returns the value inline
//!   ([`SyncArgument`], [`SyncArgumentResolver`]).
//! - `AsyncProvider` (feature `async`) returns a future that yields the value
//!   (`AsyncArgument`, `AsyncArgumentResolver`).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use morph_argument::{SyncArgument, SyncArgumentResolver};
//!
//! let plain = SyncArgumentResolver::new(SyncArgument::from(12));
//! assert_eq!(plain.get_value(), 12);
//!
//! let provided = SyncArgumentResolver::new(SyncArgument::provider(|| 23));
//! assert_eq!(provided.get_value(), 23);
//! ```

pub mod argument;
#[cfg(feature = "async")]
pub mod future;
pub mod sync;

pub use argument::{Argument, ArgumentResolver, Defer};
#[cfg(feature = "async")]
pub use future::{AsyncArgument, AsyncArgumentResolver, AsyncProvider};
pub use sync::{Provider, SyncArgument, SyncArgumentResolver};
