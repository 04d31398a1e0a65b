//! Type classes shared by the containers of this crate.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation
//! - [`Functor`]: `fmap`, `replace`, `void`
//! - [`Monad`]: `pure`, `flat_map`, `and_then`, `then`
//!
//! `Maybe` and `Outcome` implement both classes, so generic code and the
//! [`chain!`](crate::chain!) macro treat them uniformly.

mod functor;
mod higher;
mod monad;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
