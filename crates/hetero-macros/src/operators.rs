// #[derive(Operators)] implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, DeriveInput, Error, Generics, Ident, Meta, WherePredicate};

use crate::{get_attribute, parse_attribute_list};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Concept {
    Comparable,
    Orderable,
    Logical,
}

impl Concept {
    fn from_ident(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "Comparable" => Some(Concept::Comparable),
            "Orderable" => Some(Concept::Orderable),
            "Logical" => Some(Concept::Logical),
            _ => None,
        }
    }
}

pub fn expand_derive(input: DeriveInput) -> Result<TokenStream, Error> {
    let attr = get_attribute(&input.attrs, "operators").ok_or_else(|| {
        Error::new_spanned(
            &input.ident,
            "#[derive(Operators)] requires #[operators(...)] naming at least one concept",
        )
    })?;

    let mut concepts = Vec::new();
    for meta in parse_attribute_list(attr)? {
        let concept = match &meta {
            Meta::Path(path) => path.get_ident().and_then(Concept::from_ident),
            _ => None,
        };
        match concept {
            Some(c) if !concepts.contains(&c) => concepts.push(c),
            Some(_) => return Err(Error::new_spanned(meta, "concept listed twice")),
            None => {
                return Err(Error::new_spanned(
                    meta,
                    "expected one of `Comparable`, `Orderable`, `Logical`",
                ))
            }
        }
    }
    if concepts.is_empty() {
        return Err(Error::new_spanned(attr, "no concept listed"));
    }
    // `PartialOrd` requires `PartialEq`.
    if concepts.contains(&Concept::Orderable) && !concepts.contains(&Concept::Comparable) {
        concepts.insert(0, Concept::Comparable);
    }

    let expanded = concepts.iter().map(|concept| match concept {
        Concept::Comparable => comparable(&input),
        Concept::Orderable => orderable(&input),
        Concept::Logical => logical(&input),
    });
    Ok(quote! { #(#expanded)* })
}

/// The input generics plus a trailing `__Rhs` parameter.
fn with_rhs(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    generics.params.push(parse_quote!(__Rhs));
    generics
}

fn where_predicates(generics: &Generics) -> Vec<&WherePredicate> {
    generics
        .where_clause
        .as_ref()
        .map(|w| w.predicates.iter().collect())
        .unwrap_or_default()
}

fn comparable(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let rhs_generics = with_rhs(&input.generics);
    let (rhs_impl_generics, _, _) = rhs_generics.split_for_impl();
    let predicates = where_predicates(&input.generics);
    let ty = quote! { #name #ty_generics };

    quote! {
        impl #impl_generics ::hetero::__internal::EnableOperators<::hetero::__internal::ComparableOps>
            for #ty #where_clause {}

        impl #rhs_impl_generics ::core::cmp::PartialEq<__Rhs> for #ty
        where
            #(#predicates,)*
            #ty: ::hetero::__internal::CompareWith<__Rhs>,
            <#ty as ::hetero::__internal::CompareWith<__Rhs>>::Equal: ::hetero::__internal::IntoBool,
            <#ty as ::hetero::__internal::CompareWith<__Rhs>>::NotEqual: ::hetero::__internal::IntoBool,
        {
            #[inline]
            fn eq(&self, other: &__Rhs) -> bool {
                ::hetero::__internal::IntoBool::to_bool(
                    ::hetero::__internal::CompareWith::equal_to(self, other),
                )
            }

            #[allow(clippy::partialeq_ne_impl)]
            #[inline]
            fn ne(&self, other: &__Rhs) -> bool {
                ::hetero::__internal::IntoBool::to_bool(
                    ::hetero::__internal::CompareWith::not_equal_to(self, other),
                )
            }
        }
    }
}

fn orderable(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let rhs_generics = with_rhs(&input.generics);
    let (rhs_impl_generics, _, _) = rhs_generics.split_for_impl();
    let predicates = where_predicates(&input.generics);
    let ty = quote! { #name #ty_generics };
    let to_bool = quote! { ::hetero::__internal::IntoBool::to_bool };
    let order = quote! { ::hetero::__internal::OrderWith };

    quote! {
        impl #impl_generics ::hetero::__internal::EnableOperators<::hetero::__internal::OrderableOps>
            for #ty #where_clause {}

        impl #rhs_impl_generics ::core::cmp::PartialOrd<__Rhs> for #ty
        where
            #(#predicates,)*
            #ty: ::hetero::__internal::CompareWith<__Rhs> + #order<__Rhs>,
            <#ty as ::hetero::__internal::CompareWith<__Rhs>>::Equal: ::hetero::__internal::IntoBool,
            <#ty as ::hetero::__internal::CompareWith<__Rhs>>::NotEqual: ::hetero::__internal::IntoBool,
            <#ty as #order<__Rhs>>::Less: ::hetero::__internal::IntoBool,
            <#ty as #order<__Rhs>>::LessEqual: ::hetero::__internal::IntoBool,
            <#ty as #order<__Rhs>>::Greater: ::hetero::__internal::IntoBool,
            <#ty as #order<__Rhs>>::GreaterEqual: ::hetero::__internal::IntoBool,
        {
            fn partial_cmp(&self, other: &__Rhs) -> ::core::option::Option<::core::cmp::Ordering> {
                if #to_bool(#order::less_than(self, other)) {
                    ::core::option::Option::Some(::core::cmp::Ordering::Less)
                } else if #to_bool(#order::greater_than(self, other)) {
                    ::core::option::Option::Some(::core::cmp::Ordering::Greater)
                } else if #to_bool(::hetero::__internal::CompareWith::equal_to(self, other)) {
                    ::core::option::Option::Some(::core::cmp::Ordering::Equal)
                } else {
                    ::core::option::Option::None
                }
            }

            #[inline]
            fn lt(&self, other: &__Rhs) -> bool {
                #to_bool(#order::less_than(self, other))
            }

            #[inline]
            fn le(&self, other: &__Rhs) -> bool {
                #to_bool(#order::less_equal(self, other))
            }

            #[inline]
            fn gt(&self, other: &__Rhs) -> bool {
                #to_bool(#order::greater_than(self, other))
            }

            #[inline]
            fn ge(&self, other: &__Rhs) -> bool {
                #to_bool(#order::greater_equal(self, other))
            }
        }
    }
}

fn logical(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let rhs_generics = with_rhs(&input.generics);
    let (rhs_impl_generics, _, _) = rhs_generics.split_for_impl();
    let predicates = where_predicates(&input.generics);
    let ty = quote! { #name #ty_generics };
    let select = quote! { ::hetero::__internal::Select };

    quote! {
        impl #impl_generics ::hetero::__internal::EnableOperators<::hetero::__internal::LogicalOps>
            for #ty #where_clause {}

        impl #impl_generics ::core::ops::Not for #ty
        where
            #(#predicates,)*
            #ty: ::hetero::__internal::Negate,
        {
            type Output = <#ty as ::hetero::__internal::Negate>::Output;

            #[inline]
            fn not(self) -> Self::Output {
                ::hetero::__internal::Negate::negate(self)
            }
        }

        impl #rhs_impl_generics ::core::ops::BitAnd<__Rhs> for #ty
        where
            #(#predicates,)*
            #ty: ::core::clone::Clone + #select<__Rhs, #ty>,
        {
            type Output = <#ty as #select<__Rhs, #ty>>::Output;

            #[inline]
            fn bitand(self, rhs: __Rhs) -> Self::Output {
                ::hetero::__internal::and_(self, rhs)
            }
        }

        impl #rhs_impl_generics ::core::ops::BitOr<__Rhs> for #ty
        where
            #(#predicates,)*
            #ty: ::core::clone::Clone + #select<#ty, __Rhs>,
        {
            type Output = <#ty as #select<#ty, __Rhs>>::Output;

            #[inline]
            fn bitor(self, rhs: __Rhs) -> Self::Output {
                ::hetero::__internal::or_(self, rhs)
            }
        }
    }
}
