// #[derive(Datatype)] implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Error, Expr, Meta, Path};

use crate::{get_attribute, parse_attribute_list};

pub fn expand_derive(input: DeriveInput) -> Result<TokenStream, Error> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let tag = match get_attribute(&input.attrs, "datatype") {
        Some(attr) => parse_tag(attr)?,
        None => None,
    };
    let tag = match tag {
        Some(path) => quote! { #path },
        None => quote! { Self },
    };

    Ok(quote! {
        impl #impl_generics ::hetero::__internal::Datatype for #name #ty_generics #where_clause {
            type Tag = #tag;
        }
    })
}

fn parse_tag(attr: &syn::Attribute) -> Result<Option<Path>, Error> {
    let mut tag = None;
    for meta in parse_attribute_list(attr)? {
        match meta {
            Meta::NameValue(nv) if nv.path.is_ident("tag") => match nv.value {
                Expr::Path(expr) => tag = Some(expr.path),
                other => {
                    return Err(Error::new_spanned(other, "`tag` must be a type path"));
                }
            },
            other => {
                return Err(Error::new_spanned(
                    other,
                    "unknown datatype argument, expected `tag = Path`",
                ));
            }
        }
    }
    Ok(tag)
}
