//! The Functor type class.

use super::higher::TypeConstructor;

/// A container whose payload can be transformed without changing its shape.
///
/// # Laws
///
/// - **Identity**: `fa.fmap(|x| x) == fa`
/// - **Composition**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
///
/// Both laws are checked with proptest for `Maybe` and `Outcome`.
///
/// # Examples
///
/// ```
/// use fun::maybe::Maybe;
/// use fun::typeclass::Functor;
///
/// let length = Maybe::just("four").fmap(str::len);
/// assert_eq!(length, Maybe::just(4));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the payload, if there is one.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the payload with `value`, keeping the shape.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the payload, keeping the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}
