//! Expansion of `curry!`.
//!
//! Accepted input:
//!
//! 1. A closure of two or more parameters: `curry!(|a, b| body)`
//! 2. A function path with an explicit arity: `curry!(function_name, arity)`
//!
//! The expansion shares the function and every captured argument through
//! `Rc`, so a curried function and each of its partial applications can be
//! called any number of times. Captured arguments are handed to the function
//! with `Rc::unwrap_or_clone`, which is why every argument except the last
//! must be `Clone`.
//!
//! For `curry!(|a, b, c| body)` the expansion is shaped like:
//!
//! ```text
//! {
//!     let __fun_function = Rc::new(|a, b, c| body);
//!     move |__fun_argument_0| {
//!         let __fun_function = Rc::clone(&__fun_function);
//!         let __fun_argument_0 = Rc::new(__fun_argument_0);
//!         move |__fun_argument_1| {
//!             let __fun_function = Rc::clone(&__fun_function);
//!             let __fun_argument_0 = Rc::clone(&__fun_argument_0);
//!             let __fun_argument_1 = Rc::new(__fun_argument_1);
//!             move |__fun_argument_2| {
//!                 __fun_function(
//!                     Rc::unwrap_or_clone(Rc::clone(&__fun_argument_0)),
//!                     Rc::unwrap_or_clone(Rc::clone(&__fun_argument_1)),
//!                     __fun_argument_2,
//!                 )
//!             }
//!         }
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{Expr, ExprClosure, ExprLit, ExprPath, Lit, Token, spanned::Spanned};

const MINIMUM_ARITY: usize = 2;

enum CurryInput {
    Closure(ExprClosure),
    FunctionWithArity { function: ExprPath, arity: usize },
}

pub fn curry_impl(input: TokenStream) -> TokenStream {
    match parse_curry_input(input.into()) {
        Ok(CurryInput::Closure(closure)) => generate_curry_from_closure(&closure),
        Ok(CurryInput::FunctionWithArity { function, arity }) => generate_nested_closures(arity, &quote! { #function }),
        Err(error) => error.to_compile_error(),
    }
    .into()
}

const USAGE: &str = "expected `curry!(|a, b, ..| body)` or `curry!(path::to::function, arity)`";

fn usage_error(span: Span) -> syn::Error {
    syn::Error::new(span, USAGE)
}

fn arity_error(span: Span, arity: usize) -> syn::Error {
    syn::Error::new(
        span,
        format!("curry! needs at least {MINIMUM_ARITY} parameters, found {arity}"),
    )
}

fn parse_curry_input(input: TokenStream2) -> syn::Result<CurryInput> {
    let arguments = syn::parse::Parser::parse2(Punctuated::<Expr, Token![,]>::parse_terminated, input)?;
    let mut arguments = arguments.into_iter();

    match (arguments.next(), arguments.next(), arguments.next()) {
        (Some(Expr::Closure(closure)), None, None) => Ok(CurryInput::Closure(closure)),
        (Some(Expr::Path(function)), Some(arity), None) => {
            let arity = parse_arity(&arity)?;
            if arity < MINIMUM_ARITY {
                return Err(arity_error(function.span(), arity));
            }
            Ok(CurryInput::FunctionWithArity { function, arity })
        }
        (Some(Expr::Path(function)), None, None) => Err(syn::Error::new(
            function.span(),
            "a function path needs its arity: `curry!(function, 2)`",
        )),
        (Some(first), _, _) => Err(usage_error(first.span())),
        (None, _, _) => Err(usage_error(Span::call_site())),
    }
}

fn parse_arity(expression: &Expr) -> syn::Result<usize> {
    if let Expr::Lit(ExprLit { lit: Lit::Int(arity), .. }) = expression {
        arity.base10_parse()
    } else {
        Err(syn::Error::new(expression.span(), "the arity must be an integer literal"))
    }
}

fn generate_curry_from_closure(closure: &ExprClosure) -> TokenStream2 {
    let arity = closure.inputs.len();
    if arity < MINIMUM_ARITY {
        return arity_error(closure.span(), arity).to_compile_error();
    }

    generate_nested_closures(arity, &quote! { #closure })
}

fn generate_nested_closures(argument_count: usize, function_expression: &TokenStream2) -> TokenStream2 {
    let argument_identifiers: Vec<Ident> = (0..argument_count)
        .map(|index| format_ident!("__fun_argument_{}", index))
        .collect();

    let last = argument_count - 1;
    let final_arguments = argument_identifiers.iter().enumerate().map(|(index, identifier)| {
        if index < last {
            quote! { ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&#identifier)) }
        } else {
            quote! { #identifier }
        }
    });

    let function_call = quote! { __fun_function(#(#final_arguments),*) };
    let closure_chain = build_closure_chain(&argument_identifiers, function_call);

    quote! {
        {
            let __fun_function = ::std::rc::Rc::new(#function_expression);
            #closure_chain
        }
    }
}

fn build_closure_chain(argument_identifiers: &[Ident], innermost_body: TokenStream2) -> TokenStream2 {
    let last = argument_identifiers.len() - 1;

    argument_identifiers
        .iter()
        .enumerate()
        .rev()
        .fold(innermost_body, |body, (index, identifier)| {
            if index == last {
                return quote! { move |#identifier| { #body } };
            }

            let captured = argument_identifiers[..index].iter().map(|previous| {
                quote! { let #previous = ::std::rc::Rc::clone(&#previous); }
            });

            quote! {
                move |#identifier| {
                    let __fun_function = ::std::rc::Rc::clone(&__fun_function);
                    #(#captured)*
                    let #identifier = ::std::rc::Rc::new(#identifier);
                    #body
                }
            }
        })
}
