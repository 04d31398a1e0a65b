//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] records the applied type (`Inner`) and how to re-apply
//! the constructor to another type (`WithType<B>`), which is enough to state
//! [`Functor`](super::Functor) and [`Monad`](super::Monad) once for every
//! container in the crate.

/// A type constructor applied to a single type.
///
/// # Examples
///
/// ```
/// use fun::maybe::Maybe;
/// use fun::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Maybe<i32>>();
/// ```
pub trait TypeConstructor {
    /// The type the constructor is applied to, e.g. `i32` for `Maybe<i32>`.
    type Inner;

    /// The same constructor applied to `B`, e.g. `Maybe<String>` for
    /// `Maybe<i32>` and `B = String`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
