//! The `compose!` and `compose_back!` macros.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`: the rightmost
/// function runs first.
///
/// # Syntax
///
/// - `compose!(f)` returns `f` unchanged
/// - `compose!(f, g)` returns `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` nests the same way for any number of functions
///
/// All functions must implement [`Fn`], and each output type must match the
/// input type of the function to its left.
///
/// # Examples
///
/// ```
/// use fun::compose;
///
/// fn celsius_to_fahrenheit(celsius: f64) -> f64 { celsius * 9.0 / 5.0 + 32.0 }
/// fn round(value: f64) -> i64 { value.round() as i64 }
/// fn label(degrees: i64) -> String { format!("{degrees}F") }
///
/// // label(round(celsius_to_fahrenheit(21.5)))
/// let report = compose!(label, round, celsius_to_fahrenheit);
/// assert_eq!(report(21.5), "71F");
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner(input))
    }};
}

/// Composes functions from left to right.
///
/// `compose_back!(f, g, h)(x)` is equivalent to `h(g(f(x)))`: the leftmost
/// function runs first. This is `compose!` with its arguments reversed, and
/// the function-producing counterpart of [`pipe!`](crate::pipe!).
///
/// # Examples
///
/// ```
/// use fun::compose_back;
///
/// fn trim(s: &str) -> &str { s.trim() }
/// fn length(s: &str) -> usize { s.len() }
/// fn is_short(n: usize) -> bool { n < 5 }
///
/// let short_after_trim = compose_back!(trim, length, is_short);
/// assert!(short_after_trim("  abc  "));
/// assert!(!short_after_trim("abcdef"));
/// ```
#[macro_export]
macro_rules! compose_back {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let rest = $crate::compose_back!($($remaining_functions),+);
        move |input| rest(first(input))
    }};
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    fn increment(value: i32) -> i32 {
        value + 1
    }

    fn triple(value: i32) -> i32 {
        value * 3
    }

    #[rstest]
    fn single_function_is_returned_unchanged() {
        let negate = |value: i32| -value;
        assert_eq!(compose!(negate)(4), -4);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(4, 13)]
    #[case(-2, -5)]
    fn rightmost_function_runs_first(#[case] input: i32, #[case] expected: i32) {
        assert_eq!(compose!(increment, triple)(input), expected);
    }

    #[rstest]
    fn trailing_comma_is_accepted() {
        assert_eq!(compose!(increment, triple,)(1), 4);
        assert_eq!(compose_back!(increment, triple,)(1), 6);
    }

    #[rstest]
    fn compose_back_runs_leftmost_first() {
        let words = |text: &str| text.split_whitespace().count();
        assert_eq!(compose_back!(str::trim, words, triple_usize)("  one two  "), 6);
    }

    fn triple_usize(value: usize) -> usize {
        value * 3
    }

    #[rstest]
    #[case(-7)]
    #[case(10)]
    fn compose_back_is_reversed_compose(#[case] input: i32) {
        assert_eq!(compose_back!(increment, triple)(input), compose!(triple, increment)(input));
    }
}
