//! Fixed-arity currying and uncurrying macros.
//!
//! `curry2!` .. `curry6!` accept any function expression (a path, a closure
//! held in a variable, a method reference) and delegate to the
//! [`curry!`](crate::curry) procedural macro, so the curried result and all
//! of its partial applications are reusable `Fn` closures. As with `curry!`,
//! every argument except the last must be `Clone`.
//!
//! `uncurry2!` .. `uncurry6!` go the other way and turn `f(a)(b)(c)` into
//! `g(a, b, c)`.

/// Converts a 2-argument function into curried form: `curry2!(f)(a)(b) == f(a, b)`.
///
/// # Examples
///
/// ```
/// use fun::curry2;
///
/// fn discount(percent: u32, price: u32) -> u32 { price - price * percent / 100 }
///
/// let curried = curry2!(discount);
/// let sale = curried(20);
/// let clearance = curried(50);
///
/// assert_eq!(sale(250), 200);
/// assert_eq!(clearance(250), 125);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = $function;
        $crate::curry!(move |first, second| function(first, second))
    }};
}

/// Converts a 3-argument function into curried form.
///
/// # Examples
///
/// ```
/// use fun::curry3;
///
/// fn volume(width: f64, height: f64, depth: f64) -> f64 { width * height * depth }
///
/// let with_width = curry3!(volume)(2.0);
/// let with_width_height = with_width(3.0);
/// assert!((with_width_height(4.0) - 24.0).abs() < f64::EPSILON);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = $function;
        $crate::curry!(move |first, second, third| function(first, second, third))
    }};
}

/// Converts a 4-argument function into curried form.
///
/// # Examples
///
/// ```
/// use fun::curry4;
///
/// fn sum_four(a: i32, b: i32, c: i32, d: i32) -> i32 { a + b + c + d }
///
/// assert_eq!(curry4!(sum_four)(1)(2)(3)(4), 10);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = $function;
        $crate::curry!(move |first, second, third, fourth| function(first, second, third, fourth))
    }};
}

/// Converts a 5-argument function into curried form.
///
/// # Examples
///
/// ```
/// use fun::curry5;
///
/// fn sum_five(a: i32, b: i32, c: i32, d: i32, e: i32) -> i32 { a + b + c + d + e }
///
/// assert_eq!(curry5!(sum_five)(1)(2)(3)(4)(5), 15);
/// ```
#[macro_export]
macro_rules! curry5 {
    ($function:expr $(,)?) => {{
        let function = $function;
        $crate::curry!(move |first, second, third, fourth, fifth| {
            function(first, second, third, fourth, fifth)
        })
    }};
}

/// Converts a 6-argument function into curried form.
///
/// # Examples
///
/// ```
/// use fun::curry6;
///
/// fn sum_six(a: i32, b: i32, c: i32, d: i32, e: i32, f: i32) -> i32 { a + b + c + d + e + f }
///
/// assert_eq!(curry6!(sum_six)(1)(2)(3)(4)(5)(6), 21);
/// ```
#[macro_export]
macro_rules! curry6 {
    ($function:expr $(,)?) => {{
        let function = $function;
        $crate::curry!(move |first, second, third, fourth, fifth, sixth| {
            function(first, second, third, fourth, fifth, sixth)
        })
    }};
}

/// Converts a curried 2-argument function back: `uncurry2!(f)(a, b) == f(a)(b)`.
///
/// # Examples
///
/// ```
/// use fun::{curry2, uncurry2};
///
/// let add = |first: i32| move |second: i32| first + second;
/// assert_eq!(uncurry2!(add)(2, 3), 5);
///
/// fn subtract(a: i32, b: i32) -> i32 { a - b }
/// assert_eq!(uncurry2!(curry2!(subtract))(10, 4), 6);
/// ```
#[macro_export]
macro_rules! uncurry2 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |first, second| function(first)(second)
    }};
}

/// Converts a curried 3-argument function back: `uncurry3!(f)(a, b, c) == f(a)(b)(c)`.
#[macro_export]
macro_rules! uncurry3 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |first, second, third| function(first)(second)(third)
    }};
}

/// Converts a curried 4-argument function back.
#[macro_export]
macro_rules! uncurry4 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |first, second, third, fourth| function(first)(second)(third)(fourth)
    }};
}

/// Converts a curried 5-argument function back.
#[macro_export]
macro_rules! uncurry5 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |first, second, third, fourth, fifth| {
            function(first)(second)(third)(fourth)(fifth)
        }
    }};
}

/// Converts a curried 6-argument function back.
#[macro_export]
macro_rules! uncurry6 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |first, second, third, fourth, fifth, sixth| {
            function(first)(second)(third)(fourth)(fifth)(sixth)
        }
    }};
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    fn power(base: i64, exponent: u32) -> i64 {
        base.pow(exponent)
    }

    fn add_three(first: i32, second: i32, third: i32) -> i32 {
        first + second + third
    }

    #[rstest]
    fn curry2_partial_application_is_reusable() {
        let curried = curry2!(power);
        let powers_of_two = curried(2);
        assert_eq!(powers_of_two(3), 8);
        assert_eq!(powers_of_two(10), 1024);
        assert_eq!(curried(-3)(3), -27);
    }

    #[rstest]
    fn curry3_applies_one_argument_at_a_time() {
        let hundreds = curry3!(add_three)(100);
        let hundreds_and_tens = hundreds(20);
        assert_eq!(hundreds_and_tens(3), 123);
        assert_eq!(hundreds(40)(5), 145);
    }

    #[rstest]
    fn curry_accepts_owned_non_copy_arguments() {
        let join = |a: String, b: String, c: &str| format!("{a}{b}{c}");
        let curried = curry3!(join);
        let prefix = curried("x".to_string())("y".to_string());
        assert_eq!(prefix("1"), "xy1");
        assert_eq!(prefix("2"), "xy2");
    }

    #[rstest]
    #[case(1, 2, 3, 6)]
    #[case(-1, 0, 1, 0)]
    fn uncurry_inverts_curry(#[case] a: i32, #[case] b: i32, #[case] c: i32, #[case] expected: i32) {
        let round_trip = uncurry3!(curry3!(add_three));
        assert_eq!(round_trip(a, b, c), expected);
    }

    #[rstest]
    fn uncurry6_applies_in_order() {
        let digits = |a: i32| {
            move |b: i32| {
                move |c: i32| move |d: i32| move |e: i32| move |f: i32| a * 100_000 + b * 10_000 + c * 1_000 + d * 100 + e * 10 + f
            }
        };
        assert_eq!(uncurry6!(digits)(1, 2, 3, 4, 5, 6), 123_456);
    }
}
