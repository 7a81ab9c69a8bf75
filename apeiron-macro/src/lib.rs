//! Procedural macros used by and exported from the `apeiron` crate.
//!
//! Both macros here exist to generate families of trait impls indexed by
//! arity, which cannot be expressed once-and-for-all in the language itself:
//! the flat-tuple ↔ inductive-list conversions in `apeiron::tuple`, and the
//! `usize`-constant ↔ unary-number conversions in `apeiron::unary`. They are
//! not intended to be invoked outside those two modules.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, Ident, LitInt};

/// Generate `Tuple` and `List` impls converting between flat tuples
/// `(T1, ..., Tn)` and inductive lists `(T1, (T2, (..., ())))` for every
/// arity from zero up to and including the given limit.
///
/// Expands in the scope of `apeiron::tuple`, which defines both traits.
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let limit = parse_macro_input!(input as LitInt);
    let limit = match limit.base10_parse::<usize>() {
        Ok(limit) => limit,
        Err(error) => return error.to_compile_error().into(),
    };

    let mut impls = proc_macro2::TokenStream::new();
    for arity in 0..=limit {
        let params: Vec<Ident> = (1..=arity)
            .map(|i| Ident::new(&format!("T{}", i), Span::call_site()))
            .collect();
        let tuple = quote!((#(#params,)*));
        let list = params
            .iter()
            .rev()
            .fold(quote!(()), |tail, head| quote!((#head, #tail)));
        impls.extend(quote! {
            impl<#(#params),*> Tuple for #tuple {
                type AsList = #list;
            }

            impl<#(#params),*> List for #list {
                type AsTuple = #tuple;
            }
        });
    }
    impls.into()
}

/// Generate `ToUnary` impls for `Number<0>` through `Number<limit>` and the
/// matching `ToConstant` impls for their unary equivalents.
///
/// Expands in the scope of `apeiron::unary`, which defines `Z`, `S`,
/// `Number`, and both conversion traits.
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let limit = parse_macro_input!(input as LitInt);
    let limit = match limit.base10_parse::<usize>() {
        Ok(limit) => limit,
        Err(error) => return error.to_compile_error().into(),
    };

    let mut impls = proc_macro2::TokenStream::new();
    for n in 0..=limit {
        let unary = (0..n).fold(quote!(Z), |inner, _| quote!(S<#inner>));
        impls.extend(quote! {
            impl ToUnary for Number<#n> {
                type AsUnary = #unary;
            }

            impl ToConstant for #unary {
                type AsConstant = Number<#n>;
            }
        });
    }
    impls.into()
}
