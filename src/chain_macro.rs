//! The `chain!` comprehension macro.
//!
//! `chain!` writes a sequence of dependent steps over a [`Monad`] as a block
//! of statements instead of nested `flat_map` closures. It works for
//! [`Maybe`](crate::maybe::Maybe), [`Outcome`](crate::outcome::Outcome) and
//! any other `Monad`.
//!
//! # Syntax
//!
//! - `pattern <= expression;` binds the payload of `expression`
//! - `let pattern = expression;` is a plain binding
//! - the last line is an expression of the same container type
//!
//! `<-` is not a single token to `macro_rules!`, so `<=` stands in for it.
//!
//! # Expansion
//!
//! ```rust,ignore
//! chain! { x <= first; rest }
//! // becomes
//! Monad::flat_map(first, move |x| chain! { rest })
//! ```
//!
//! The steps run left to right and stop at the first `Nothing` or `Failure`.
//!
//! [`Monad`]: crate::typeclass::Monad

/// Sequences monadic steps in statement form.
///
/// # Examples
///
/// ```
/// use fun::chain;
/// use fun::maybe::Maybe;
///
/// let lookup = |key: &str| match key {
///     "width" => Maybe::just(4),
///     "height" => Maybe::just(5),
///     _ => Maybe::Nothing,
/// };
///
/// let area = chain! {
///     width <= lookup("width");
///     height <= lookup("height");
///     let area = width * height;
///     Maybe::just(area)
/// };
/// assert_eq!(area, Maybe::just(20));
///
/// let missing: Maybe<i32> = chain! {
///     width <= lookup("width");
///     depth <= lookup("depth");
///     Maybe::just(width * depth)
/// };
/// assert_eq!(missing, Maybe::Nothing);
/// ```
#[macro_export]
macro_rules! chain {
    // =========================================================================
    // Bind: pattern <= monad; rest
    // =========================================================================

    ($pattern:ident <= $monad:expr ; $($rest:tt)+) => {
        $crate::typeclass::Monad::flat_map($monad, move |$pattern| {
            $crate::chain!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $monad:expr ; $($rest:tt)+) => {
        $crate::typeclass::Monad::flat_map($monad, move |($($pattern)*)| {
            $crate::chain!($($rest)+)
        })
    };

    (_ <= $monad:expr ; $($rest:tt)+) => {
        $crate::typeclass::Monad::flat_map($monad, move |_| {
            $crate::chain!($($rest)+)
        })
    };

    // =========================================================================
    // Pure bindings: let pattern = expression; rest
    // =========================================================================

    (let $pattern:ident : $type:ty = $value:expr ; $($rest:tt)+) => {
        {
            let $pattern: $type = $value;
            $crate::chain!($($rest)+)
        }
    };

    (let $pattern:ident = $value:expr ; $($rest:tt)+) => {
        {
            let $pattern = $value;
            $crate::chain!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $value:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $value;
            $crate::chain!($($rest)+)
        }
    };

    // =========================================================================
    // Terminal
    // =========================================================================

    ($result:expr) => {
        $result
    };
}
