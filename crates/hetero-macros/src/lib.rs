//! Derive macros for hetero data types.

use proc_macro::TokenStream;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Attribute, DeriveInput, Meta, Token};

mod datatype;
mod operators;

/// Implements `Datatype`, tagging the type with itself unless
/// `#[datatype(tag = Path)]` names another tag.
#[proc_macro_derive(Datatype, attributes(datatype))]
pub fn derive_datatype(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    datatype::expand_derive(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Implements the native operators of the concepts listed in
/// `#[operators(...)]`.
///
/// Listing `Orderable` also implements the `Comparable` operators, since
/// `PartialOrd` requires `PartialEq`. Operators are implemented with the
/// deriving type on the left only.
#[proc_macro_derive(Operators, attributes(operators))]
pub fn derive_operators(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    operators::expand_derive(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn get_attribute<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident(name))
}

fn parse_attribute_list(attr: &Attribute) -> syn::Result<Punctuated<Meta, Token![,]>> {
    let parser = Punctuated::<Meta, Token![,]>::parse_terminated;
    match &attr.meta {
        Meta::List(meta_list) => parser.parse2(meta_list.tokens.clone()),
        other => Err(syn::Error::new_spanned(
            other,
            "expected a parenthesized list of arguments",
        )),
    }
}
