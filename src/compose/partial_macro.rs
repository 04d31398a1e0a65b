//! The `partial!` macro.

/// Partially applies arguments to a function.
///
/// Every argument position holds either a value, which is fixed, or the `__`
/// placeholder, which becomes a parameter of the returned closure in the
/// same order. Functions of up to six arguments are supported.
///
/// - `partial!(f, a, __)` creates `|b| f(a, b)`
/// - `partial!(f, __, b)` creates `|a| f(a, b)`
/// - `partial!(f, a, b)` creates the thunk `|| f(a, b)`
/// - `partial!(f, __, __)` creates `|a, b| f(a, b)`
///
/// Fixed values are evaluated once, when the macro runs, and cloned into every
/// call, so they must implement [`Clone`]. The returned closure is [`Fn`]
/// whenever the function is.
///
/// Do NOT import anything named `__`: the placeholder is matched as a
/// literal token.
///
/// # Examples
///
/// ```
/// use fun::partial;
///
/// fn format_greeting(greeting: &str, name: &str, punctuation: &str) -> String {
///     format!("{greeting}, {name}{punctuation}")
/// }
///
/// let hello = partial!(format_greeting, "Hello", __, "!");
/// assert_eq!(hello("Alice"), "Hello, Alice!");
/// assert_eq!(hello("Bob"), "Hello, Bob!");
/// ```
///
/// ```
/// use fun::{compose, partial};
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let double_then_add_ten = compose!(partial!(add, 10, __), partial!(multiply, 2, __));
/// assert_eq!(double_then_add_ten(5), 20);
/// ```
#[macro_export]
macro_rules! partial {
    ($function:expr, $($arguments:tt)+) => {
        $crate::__partial_apply!(
            ($function)
            []
            []
            []
            [argument_1 argument_2 argument_3 argument_4 argument_5 argument_6]
            $($arguments)+
        )
    };
}

/// Token muncher behind [`partial!`].
///
/// State: the function, the `let` bindings of fixed values, the closure
/// parameters, the call arguments, and the unused argument names.
#[doc(hidden)]
#[macro_export]
macro_rules! __partial_apply {
    (
        ($function:expr)
        [$($fixed:tt)*]
        [$($parameter:ident)*]
        [$($call:tt)*]
        [$($spare:ident)*]
        $(,)?
    ) => {{
        let function = $function;
        $($fixed)*
        move |$($parameter),*| function($($call)*)
    }};

    (
        ($function:expr)
        [$($fixed:tt)*]
        [$($parameter:ident)*]
        [$($call:tt)*]
        [$next:ident $($spare:ident)*]
        __ $(, $($rest:tt)*)?
    ) => {
        $crate::__partial_apply!(
            ($function)
            [$($fixed)*]
            [$($parameter)* $next]
            [$($call)* $next,]
            [$($spare)*]
            $($($rest)*)?
        )
    };

    (
        ($function:expr)
        [$($fixed:tt)*]
        [$($parameter:ident)*]
        [$($call:tt)*]
        [$next:ident $($spare:ident)*]
        $value:expr $(, $($rest:tt)*)?
    ) => {
        $crate::__partial_apply!(
            ($function)
            [$($fixed)* let $next = $value;]
            [$($parameter)*]
            [$($call)* ::core::clone::Clone::clone(&$next),]
            [$($spare)*]
            $($($rest)*)?
        )
    };
}
