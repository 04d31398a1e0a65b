//! Function composition utilities.
//!
//! # Overview
//!
//! - [`compose!`]: Compose functions right-to-left (`compose!(f, g)(x) == f(g(x))`)
//! - [`compose_back!`]: Compose functions left-to-right (`compose_back!(f, g)(x) == g(f(x))`)
//! - [`pipe!`]: Apply functions to a value left-to-right
//! - [`partial!`]: Partial application with the `__` placeholder
//! - [`curry2!`] through [`curry6!`] and [`curry!`](crate::curry): Curried form
//! - [`uncurry2!`] through [`uncurry6!`]: Back from curried form
//!
//! # Helper Functions
//!
//! - [`identity`], [`constant`], [`flip`], [`flip_curried`]
//!
//! # Pipelines on Values and Futures
//!
//! [`Pipe`] is implemented for every sized value and gives method-call syntax
//! for the same idea as [`pipe!`], along with side-effect taps. With the
//! `async` feature, [`PipeFutureExt`] provides the same vocabulary on any
//! future, running each step after the receiver resolves.
//!
//! # Examples
//!
//! ```
//! use fun::{compose, compose_back, pipe};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! assert_eq!(compose!(add_one, double)(5), 11);
//! assert_eq!(compose_back!(add_one, double)(5), 12);
//! assert_eq!(pipe!(5, double, add_one), 11);
//! ```
//!
//! ```
//! use fun::partial;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! // `__` is matched as a literal token; do not import anything for it.
//! let add_five = partial!(add, 5, __);
//! assert_eq!(add_five(3), 8);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Reversal**: `compose_back!(f, g) == compose!(g, f)`
//! - **Curry round trip**: `uncurry2!(curry2!(f)) == f`

mod compose_macro;
mod curry_macro;
mod partial_macro;
mod pipe_ext;
mod pipe_macro;
mod utils;

pub use pipe_ext::Pipe;
#[cfg(feature = "async")]
pub use pipe_ext::PipeFutureExt;
pub use utils::{constant, flip, flip_curried, identity};

pub use crate::compose;
pub use crate::compose_back;
pub use crate::curry;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::curry5;
pub use crate::curry6;
pub use crate::partial;
pub use crate::pipe;
pub use crate::uncurry2;
pub use crate::uncurry3;
pub use crate::uncurry4;
pub use crate::uncurry5;
pub use crate::uncurry6;
