//! # fun
//!
//! Functional containers for explicit presence and failure handling, plus the
//! composition utilities to thread values through them.
//!
//! ## Overview
//!
//! - **Maybe**: an optional value, `Just(value)` or `Nothing`
//! - **Outcome**: a computation that either succeeded or failed, with `try_*`
//!   entry points that capture errors as failures
//! - **Choice**: closed tagged unions over two to six types, `Choice2` ..
//!   `Choice6`
//! - **Function Composition**: `compose!`, `pipe!`, `partial!`, `curry!`
//!   macros and the [`Pipe`](compose::Pipe) extension trait
//! - **Type Classes**: `Functor` and `Monad`, with the `chain!` comprehension
//!   macro on top
//! - **Memoization**: a run-once thunk and a bounded per-key cache
//!
//! Every combinator that takes a handler has an asynchronous variant, and the
//! `*FutureExt` traits extend futures of containers with the same vocabulary.
//!
//! ## Feature Flags
//!
//! - `compose`: composition macros and pipeline traits
//! - `typeclass`: `TypeConstructor`, `Functor`, `Monad`
//! - `maybe`: the `Maybe` container
//! - `outcome`: the `Outcome` container and its `try_*` family
//! - `choice`: `Choice2` .. `Choice6`
//! - `async`: extension traits on futures (pulls `futures`)
//! - `memo`: `memoize0` and `Memoized` (pulls `parking_lot`)
//! - `serde`: `Serialize`/`Deserialize` for every container
//! - `tracing`: debug events when errors are converted or matches fall
//!   through, trace events for memo misses and evictions
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fun::prelude::*;
//!
//! let parsed = Outcome::try_with(|| "21".parse::<i32>(), |error| error.to_string());
//! let answer = chain! {
//!     n <= parsed;
//!     let doubled = n * 2;
//!     Outcome::succeed(doubled)
//! };
//!
//! assert_eq!(answer.to_maybe(), Maybe::just(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the type classes, the composition macros and
/// [`Pipe`](crate::compose::Pipe). The `*FutureExt` traits are left out:
/// their `map` would clash with `futures::FutureExt::map` in code that also
/// imports `futures`, so they are imported from their modules.
///
/// # Usage
///
/// ```rust
/// use fun::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "typeclass")]
    pub use crate::chain;

    #[cfg(feature = "compose")]
    pub use crate::compose::{
        Pipe, compose, compose_back, constant, curry, curry2, curry3, curry4, curry5, curry6, flip, flip_curried,
        identity, partial, pipe, uncurry2, uncurry3, uncurry4, uncurry5, uncurry6,
    };

    #[cfg(feature = "maybe")]
    pub use crate::maybe::{Maybe, ToMaybe};

    #[cfg(feature = "maybe")]
    pub use crate::iter::MaybeIteratorExt;

    #[cfg(feature = "outcome")]
    pub use crate::iter::OutcomeIteratorExt;

    #[cfg(feature = "outcome")]
    pub use crate::outcome::Outcome;

    #[cfg(feature = "choice")]
    pub use crate::choice::{Choice2, Choice3, Choice4, Choice5, Choice6};

    #[cfg(feature = "memo")]
    pub use crate::memo::{Memoized, memoize, memoize0};
}

pub mod error;

#[cfg(feature = "typeclass")]
mod chain_macro;

#[cfg(feature = "compose")]
pub use fun_derive::curry;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "maybe")]
pub mod maybe;

#[cfg(feature = "outcome")]
pub mod outcome;

#[cfg(feature = "choice")]
pub mod choice;

#[cfg(feature = "maybe")]
pub mod iter;

#[cfg(feature = "memo")]
pub mod memo;
