//! Implementation of the `choice_types!` procedural macro.
//!
//! Every closed tagged union `Choice2` .. `Choice6` shares the same body, and
//! the partial-match surface grows combinatorially with the arity. Instead of
//! duplicating that code per arity, this module generates it.
//!
//! # Generated Items (per arity `n`)
//!
//! - `enum ChoiceN<T1, .., Tn> { Case1(T1), .., CaseN(Tn) }` deriving
//!   `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug` (and serde traits
//!   behind the `serde` feature of the invoking crate)
//! - constructors `case_k`, queries `index`, `is_case_k`, `into_case_k`,
//!   `case_k_ref`, `as_ref`, and `map_case_k`
//! - exhaustive dispatch `match_with(case_1, .., case_n)`
//! - partial dispatch `match_<i>[_<j>[_<l>]]_or_else(.., otherwise)` for every
//!   subset of size `1..=min(3, n - 2)`
//! - a `ChoiceNMatcher` builder with `case_k`, `or_else` and `finish`
//!
//! # Path Assumptions
//!
//! The expansion refers to `crate::maybe::Maybe`, `crate::error::FailedMatchError`
//! and `crate::choice::{MatchState, unmatched}`, so the macro is meant to be
//! invoked from inside the `fun` crate.

use proc_macro::TokenStream;
use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{LitInt, Token};

const MINIMUM_ARITY: usize = 2;
const MAXIMUM_ARITY: usize = 6;
const MAXIMUM_PARTIAL_CASES: usize = 3;

pub fn choice_types_impl(input: TokenStream) -> TokenStream {
    let expanded = match parse_arities(input) {
        Ok(arities) => {
            let definitions = arities.into_iter().map(generate_choice);
            quote! { #(#definitions)* }
        }
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn parse_arities(input: TokenStream) -> syn::Result<Vec<usize>> {
    let input_tokens: TokenStream2 = input.into();
    let parser = Punctuated::<LitInt, Token![,]>::parse_terminated;
    let literals: Punctuated<LitInt, Token![,]> = syn::parse::Parser::parse2(parser, input_tokens)?;

    if literals.is_empty() {
        return Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "choice_types! requires at least one arity, e.g. choice_types!(2, 3)",
        ));
    }

    literals
        .iter()
        .map(|literal| {
            let arity = literal.base10_parse::<usize>()?;
            if (MINIMUM_ARITY..=MAXIMUM_ARITY).contains(&arity) {
                Ok(arity)
            } else {
                Err(syn::Error::new(
                    literal.span(),
                    format!(
                        "choice_types! supports arities {MINIMUM_ARITY} through {MAXIMUM_ARITY}, got {arity}"
                    ),
                ))
            }
        })
        .collect()
}

/// Identifiers shared by every generated item of one arity.
struct ChoiceShape {
    arity: usize,
    name: Ident,
    matcher_name: Ident,
    type_parameters: Vec<Ident>,
    variants: Vec<Ident>,
}

impl ChoiceShape {
    fn new(arity: usize) -> Self {
        Self {
            arity,
            name: format_ident!("Choice{}", arity),
            matcher_name: format_ident!("Choice{}Matcher", arity),
            type_parameters: (1..=arity).map(|index| format_ident!("T{}", index)).collect(),
            variants: (1..=arity).map(|index| format_ident!("Case{}", index)).collect(),
        }
    }

    /// The type parameter list with position `replaced` swapped for `replacement`.
    fn type_parameters_replacing(&self, replaced: usize, replacement: &Ident) -> Vec<Ident> {
        self.type_parameters
            .iter()
            .enumerate()
            .map(|(position, parameter)| {
                if position == replaced {
                    replacement.clone()
                } else {
                    parameter.clone()
                }
            })
            .collect()
    }
}

fn generate_choice(arity: usize) -> TokenStream2 {
    let shape = ChoiceShape::new(arity);

    let definition = generate_enum(&shape);
    let inherent = generate_inherent_impl(&shape);
    let matcher = generate_matcher(&shape);

    quote! {
        #definition
        #inherent
        #matcher
    }
}

fn generate_enum(shape: &ChoiceShape) -> TokenStream2 {
    let ChoiceShape {
        arity,
        name,
        type_parameters,
        variants,
        ..
    } = shape;

    let type_documentation = format!(
        "A value holding exactly one of {arity} candidate types.\n\n\
         The active variant is the discriminant; [`{name}::index`] reports it 1-based.\n\
         Equality and hashing consider only the discriminant and the active payload."
    );

    let variant_definitions = variants.iter().zip(type_parameters).enumerate().map(
        |(position, (variant, parameter))| {
            let documentation = format!("The value of candidate type {}.", position + 1);
            quote! {
                #[doc = #documentation]
                #variant(#parameter)
            }
        },
    );

    quote! {
        #[doc = #type_documentation]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum #name<#(#type_parameters),*> {
            #(#variant_definitions),*
        }
    }
}

fn generate_inherent_impl(shape: &ChoiceShape) -> TokenStream2 {
    let ChoiceShape {
        arity,
        name,
        matcher_name,
        type_parameters,
        variants,
    } = shape;

    let constructors = generate_constructors(shape);
    let queries = generate_queries(shape);
    let case_maps = generate_case_maps(shape);
    let exhaustive = generate_exhaustive_match(shape);
    let partials = generate_partial_matches(shape);

    let index_arms = variants.iter().enumerate().map(|(position, variant)| {
        let index = position + 1;
        quote! { Self::#variant(_) => #index }
    });

    let as_ref_arms = variants.iter().map(|variant| {
        quote! { Self::#variant(value) => #name::#variant(value) }
    });

    quote! {
        impl<#(#type_parameters),*> #name<#(#type_parameters),*> {
            /// The number of candidate types.
            pub const ARITY: usize = #arity;

            #constructors

            /// Returns the 1-based discriminant of the active case.
            #[inline]
            pub const fn index(&self) -> usize {
                match self {
                    #(#index_arms),*
                }
            }

            /// Borrows the active payload, keeping the discriminant.
            #[inline]
            pub const fn as_ref(&self) -> #name<#(&#type_parameters),*> {
                match self {
                    #(#as_ref_arms),*
                }
            }

            #queries

            #case_maps

            #exhaustive

            #partials

            /// Starts a partial dispatch over any subset of cases.
            ///
            /// Handlers are registered with `case_k`; the dispatch is finished
            /// with `or_else` (fallback for uncovered cases) or `finish`, which
            /// reports [`FailedMatchError`](crate::error::FailedMatchError) when
            /// the active case had no handler.
            #[inline]
            pub fn matcher<R>(self) -> #matcher_name<#(#type_parameters,)* R> {
                #matcher_name {
                    state: crate::choice::MatchState::Pending(self),
                }
            }
        }
    }
}

fn generate_constructors(shape: &ChoiceShape) -> TokenStream2 {
    let methods = shape
        .variants
        .iter()
        .zip(&shape.type_parameters)
        .enumerate()
        .map(|(position, (variant, parameter))| {
            let index = position + 1;
            let method = format_ident!("case_{}", index);
            let documentation = format!("Creates the choice with case {index} active.");
            quote! {
                #[doc = #documentation]
                #[inline]
                pub const fn #method(value: #parameter) -> Self {
                    Self::#variant(value)
                }
            }
        });

    quote! { #(#methods)* }
}

fn generate_queries(shape: &ChoiceShape) -> TokenStream2 {
    let methods = shape
        .variants
        .iter()
        .zip(&shape.type_parameters)
        .enumerate()
        .map(|(position, (variant, parameter))| {
            let index = position + 1;
            let is_method = format_ident!("is_case_{}", index);
            let into_method = format_ident!("into_case_{}", index);
            let ref_method = format_ident!("case_{}_ref", index);
            let is_documentation = format!("Returns `true` if case {index} is active.");
            let into_documentation = format!(
                "Projects case {index} into a `Maybe`, discarding any other case."
            );
            let ref_documentation = format!("Borrows the case {index} payload if it is active.");

            quote! {
                #[doc = #is_documentation]
                #[inline]
                pub const fn #is_method(&self) -> bool {
                    matches!(self, Self::#variant(_))
                }

                #[doc = #into_documentation]
                #[inline]
                pub fn #into_method(self) -> crate::maybe::Maybe<#parameter> {
                    match self {
                        Self::#variant(value) => crate::maybe::Maybe::Just(value),
                        _ => crate::maybe::Maybe::Nothing,
                    }
                }

                #[doc = #ref_documentation]
                #[inline]
                pub const fn #ref_method(&self) -> Option<&#parameter> {
                    match self {
                        Self::#variant(value) => Some(value),
                        _ => None,
                    }
                }
            }
        });

    quote! { #(#methods)* }
}

fn generate_case_maps(shape: &ChoiceShape) -> TokenStream2 {
    let name = &shape.name;
    let mapped_parameter = format_ident!("U");

    let methods = (0..shape.arity).map(|position| {
        let index = position + 1;
        let method = format_ident!("map_case_{}", index);
        let source_parameter = &shape.type_parameters[position];
        let result_parameters = shape.type_parameters_replacing(position, &mapped_parameter);
        let documentation = format!(
            "Transforms the case {index} payload, leaving every other case untouched."
        );

        let arms = shape.variants.iter().enumerate().map(|(arm_position, variant)| {
            if arm_position == position {
                quote! { Self::#variant(value) => #name::#variant(function(value)) }
            } else {
                quote! { Self::#variant(value) => #name::#variant(value) }
            }
        });

        quote! {
            #[doc = #documentation]
            #[inline]
            pub fn #method<#mapped_parameter, F>(self, function: F) -> #name<#(#result_parameters),*>
            where
                F: FnOnce(#source_parameter) -> #mapped_parameter,
            {
                match self {
                    #(#arms),*
                }
            }
        }
    });

    quote! { #(#methods)* }
}

fn generate_exhaustive_match(shape: &ChoiceShape) -> TokenStream2 {
    let handler_names: Vec<Ident> = (1..=shape.arity)
        .map(|index| format_ident!("case_{}", index))
        .collect();
    let handler_types: Vec<Ident> = (1..=shape.arity)
        .map(|index| format_ident!("F{}", index))
        .collect();

    let bounds = handler_types
        .iter()
        .zip(&shape.type_parameters)
        .map(|(handler_type, parameter)| quote! { #handler_type: FnOnce(#parameter) -> R });

    let arms = shape
        .variants
        .iter()
        .zip(&handler_names)
        .map(|(variant, handler)| quote! { Self::#variant(value) => #handler(value) });

    quote! {
        /// Dispatches to the handler of the active case.
        ///
        /// Every case needs a handler; exactly one of them is invoked with the
        /// original payload.
        #[inline]
        pub fn match_with<R, #(#handler_types),*>(self, #(#handler_names: #handler_types),*) -> R
        where
            #(#bounds),*
        {
            match self {
                #(#arms),*
            }
        }
    }
}

fn generate_partial_matches(shape: &ChoiceShape) -> TokenStream2 {
    let largest_subset = MAXIMUM_PARTIAL_CASES.min(shape.arity.saturating_sub(2));

    let methods = (1..=largest_subset)
        .flat_map(|size| combinations(shape.arity, size))
        .map(|subset| generate_partial_match(shape, &subset));

    quote! { #(#methods)* }
}

fn generate_partial_match(shape: &ChoiceShape, subset: &[usize]) -> TokenStream2 {
    let suffix = subset
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("_");
    let method = format_ident!("match_{}_or_else", suffix);

    let handler_names: Vec<Ident> = subset
        .iter()
        .map(|index| format_ident!("case_{}", index))
        .collect();
    let handler_types: Vec<Ident> = subset
        .iter()
        .map(|index| format_ident!("F{}", index))
        .collect();

    let bounds = subset.iter().zip(&handler_types).map(|(index, handler_type)| {
        let parameter = &shape.type_parameters[index - 1];
        quote! { #handler_type: FnOnce(#parameter) -> R }
    });

    let arms = subset.iter().zip(&handler_names).map(|(index, handler)| {
        let variant = &shape.variants[index - 1];
        quote! { Self::#variant(value) => #handler(value), }
    });

    let covered = subset
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let documentation = format!(
        "Handles case(s) {covered}; every other case runs `otherwise`."
    );

    quote! {
        #[doc = #documentation]
        #[inline]
        pub fn #method<R, #(#handler_types,)* E>(
            self,
            #(#handler_names: #handler_types,)*
            otherwise: E,
        ) -> R
        where
            #(#bounds,)*
            E: FnOnce() -> R,
        {
            match self {
                #(#arms)*
                _ => otherwise(),
            }
        }
    }
}

fn generate_matcher(shape: &ChoiceShape) -> TokenStream2 {
    let ChoiceShape {
        name,
        matcher_name,
        type_parameters,
        variants,
        ..
    } = shape;

    let documentation = format!(
        "Partial dispatch builder for [`{name}`], created by [`{name}::matcher`]."
    );

    let case_methods = variants.iter().zip(type_parameters).enumerate().map(
        |(position, (variant, parameter))| {
            let index = position + 1;
            let method = format_ident!("case_{}", index);
            let method_documentation =
                format!("Registers the handler for case {index}.");
            quote! {
                #[doc = #method_documentation]
                #[inline]
                pub fn #method<F>(self, handler: F) -> Self
                where
                    F: FnOnce(#parameter) -> R,
                {
                    match self.state {
                        crate::choice::MatchState::Pending(#name::#variant(value)) => Self {
                            state: crate::choice::MatchState::Matched(handler(value)),
                        },
                        state => Self { state },
                    }
                }
            }
        },
    );

    quote! {
        #[doc = #documentation]
        #[must_use = "a matcher does nothing until `or_else` or `finish` is called"]
        pub struct #matcher_name<#(#type_parameters,)* R> {
            state: crate::choice::MatchState<#name<#(#type_parameters),*>, R>,
        }

        impl<#(#type_parameters,)* R> #matcher_name<#(#type_parameters,)* R> {
            #(#case_methods)*

            /// Returns the matched handler's result, or runs `handler` when no
            /// registered handler covered the active case.
            #[inline]
            pub fn or_else<F>(self, handler: F) -> R
            where
                F: FnOnce() -> R,
            {
                match self.state {
                    crate::choice::MatchState::Matched(result) => result,
                    crate::choice::MatchState::Pending(_) => handler(),
                }
            }

            /// Returns the matched handler's result.
            ///
            /// # Errors
            ///
            /// Returns [`FailedMatchError`](crate::error::FailedMatchError) when
            /// no registered handler covered the active case.
            #[inline]
            pub fn finish(self) -> Result<R, crate::error::FailedMatchError> {
                match self.state {
                    crate::choice::MatchState::Matched(result) => Ok(result),
                    crate::choice::MatchState::Pending(choice) => Err(crate::choice::unmatched(
                        choice.index(),
                        #name::<#(#type_parameters),*>::ARITY,
                    )),
                }
            }
        }
    }
}

/// All strictly increasing `size`-element subsets of `1..=count`, in
/// lexicographic order.
fn combinations(count: usize, size: usize) -> Vec<Vec<usize>> {
    fn extend(
        start: usize,
        count: usize,
        size: usize,
        current: &mut Vec<usize>,
        output: &mut Vec<Vec<usize>>,
    ) {
        if current.len() == size {
            output.push(current.clone());
            return;
        }
        for candidate in start..=count {
            current.push(candidate);
            extend(candidate + 1, count, size, current, output);
            current.pop();
        }
    }

    let mut output = Vec::new();
    extend(1, count, size, &mut Vec::with_capacity(size), &mut output);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(3, 1, 3)]
    #[case(4, 2, 6)]
    #[case(5, 3, 10)]
    #[case(6, 3, 20)]
    fn combinations_has_binomial_count(
        #[case] count: usize,
        #[case] size: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(combinations(count, size).len(), expected);
    }

    #[rstest]
    fn combinations_are_lexicographic() {
        assert_eq!(
            combinations(4, 2),
            vec![
                vec![1, 2],
                vec![1, 3],
                vec![1, 4],
                vec![2, 3],
                vec![2, 4],
                vec![3, 4],
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_combinations_are_strictly_increasing(count in 1_usize..=6, size in 1_usize..=3) {
            for subset in combinations(count, size) {
                prop_assert_eq!(subset.len(), size);
                prop_assert!(subset.windows(2).all(|pair| pair[0] < pair[1]));
                prop_assert!(subset.iter().all(|index| (1..=count).contains(index)));
            }
        }
    }

    #[rstest]
    fn shape_replaces_single_parameter() {
        let shape = ChoiceShape::new(3);
        let replaced = shape.type_parameters_replacing(1, &format_ident!("U"));
        let rendered: Vec<String> = replaced.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["T1", "U", "T3"]);
    }

    #[rstest]
    fn generated_code_names_every_partial_method() {
        let rendered = generate_choice(5).to_string();
        assert!(rendered.contains("match_1_or_else"));
        assert!(rendered.contains("match_2_5_or_else"));
        assert!(rendered.contains("match_3_4_5_or_else"));
        assert!(!rendered.contains("match_1_2_3_4_or_else"));
    }

    #[rstest]
    fn arity_two_has_no_partial_methods() {
        let rendered = generate_choice(2).to_string();
        assert!(!rendered.contains("_or_else <"));
        assert!(rendered.contains("match_with"));
    }
}
