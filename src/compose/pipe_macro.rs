//! The `pipe!` macro.

/// Pipes a value through functions from left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`, which equals `compose!(h, g, f)(x)`.
/// Unlike [`compose!`](crate::compose!), the value is applied immediately,
/// so each function only needs to be [`FnOnce`].
///
/// # Examples
///
/// ```
/// use fun::pipe;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// assert_eq!(pipe!(3, square, double, add_one), 19);
/// ```
///
/// ```
/// use fun::pipe;
/// use fun::maybe::{Maybe, ToMaybe};
///
/// let parsed = pipe!(
///     "42",
///     |text: &str| text.parse::<i32>().ok(),
///     Maybe::from,
///     |number: Maybe<i32>| number.map(|n| n + 1)
/// );
/// assert_eq!(parsed, 43.to_maybe());
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
