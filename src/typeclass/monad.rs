//! The Monad type class.

use super::functor::Functor;

/// A functor whose computations can be sequenced, each step depending on the
/// payload of the previous one.
///
/// `Nothing` and `Failure` short-circuit: once a step produces one, no later
/// step runs. The [`chain!`](crate::chain!) macro is sugar over
/// [`flat_map`](Monad::flat_map).
///
/// # Laws
///
/// - **Left identity**: `Self::pure(a).flat_map(f) == f(a)`
/// - **Right identity**: `m.flat_map(Self::pure) == m`
/// - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
///
/// # Examples
///
/// ```
/// use fun::maybe::Maybe;
/// use fun::typeclass::Monad;
///
/// let halve = |n: i32| if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::Nothing };
///
/// assert_eq!(Maybe::just(8).flat_map(halve).flat_map(halve), Maybe::just(2));
/// assert_eq!(Maybe::just(6).flat_map(halve).flat_map(halve), Maybe::Nothing);
/// ```
pub trait Monad: Functor {
    /// Lifts a bare value into the container.
    fn pure(value: Self::Inner) -> Self;

    /// Feeds the payload to `function` and returns its container.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Monad::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the payload of `self`.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}
