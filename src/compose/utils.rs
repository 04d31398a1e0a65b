//! Combinators used as building blocks for composition.
//!
//! - [`identity`]: I combinator
//! - [`constant`]: K combinator
//! - [`flip`]: C combinator for binary functions
//! - [`flip_curried`]: C combinator for curried functions

/// Returns the value unchanged.
///
/// `identity` is the unit of composition: `compose!(identity, f)` and
/// `compose!(f, identity)` both behave as `f`.
///
/// # Examples
///
/// ```
/// use fun::compose::identity;
/// use fun::maybe::ToMaybe;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(7.to_maybe().map(identity).value(), Ok(7));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use fun::compose::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function: `flip(f)(b, a) == f(a, b)`.
///
/// Flipping twice yields a function equivalent to the original.
///
/// # Examples
///
/// ```
/// use fun::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
///
/// let flipped = flip(subtract);
/// assert_eq!(flipped(3, 10), 7);
/// assert_eq!(flip(flipped)(10, 3), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Swaps the first two arguments of a curried function:
/// `flip_curried(f)(b)(a) == f(a)(b)`.
///
/// The first supplied argument is captured and cloned for every call of the
/// returned inner function, so `B` must be `Clone`.
///
/// # Examples
///
/// ```
/// use fun::compose::flip_curried;
///
/// let divide = |numerator: i32| move |denominator: i32| numerator / denominator;
/// let by = flip_curried(divide);
///
/// assert_eq!(by(2)(10), 5);
/// assert_eq!(by(5)(10), 2);
/// ```
#[inline]
pub fn flip_curried<A, B, C, F, G>(function: F) -> impl Fn(B) -> Box<dyn Fn(A) -> C>
where
    F: Fn(A) -> G + Clone + 'static,
    G: Fn(B) -> C,
    B: Clone + 'static,
    A: 'static,
    C: 'static,
{
    move |second_argument: B| {
        let function = function.clone();
        Box::new(move |first_argument: A| function(first_argument)(second_argument.clone()))
    }
}
