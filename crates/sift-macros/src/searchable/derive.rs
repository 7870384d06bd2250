//! Implementation of the `#[derive(Searchable)]` macro.
//!
//! This macro generates an implementation of the `Searchable` trait and
//! field name constants for typed field selectors.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{parse_search_attrs, FieldKind};

/// Main implementation of the Searchable derive macro.
pub fn searchable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Searchable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Searchable can only be derived for structs",
            ))
        }
    };

    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let search_attrs = parse_search_attrs(&field.attrs)?;

        if search_attrs.skip {
            continue;
        }

        // Unannotated fields are not searchable
        let kind = match search_attrs.kind {
            Some(k) => k,
            None => continue,
        };

        let query_name = search_attrs
            .rename
            .unwrap_or_else(|| field_name.to_string());

        if !seen.insert(query_name.clone()) {
            return Err(Error::new(
                search_attrs.span,
                format!("duplicate searchable field name '{query_name}'"),
            ));
        }

        let const_name = format_ident!("{}", to_screaming_snake_case(&query_name));

        field_constants.push(quote! {
            /// Field name constant for typed selectors.
            pub const #const_name: &'static str = #query_name;
        });

        let value_expr = match kind {
            FieldKind::String => {
                quote! {
                    ::sift::Value::String(::core::convert::AsRef::<str>::as_ref(&self.#field_name))
                }
            }
            FieldKind::Number => {
                quote! { ::sift::Value::Number(::sift::Number::from(self.#field_name)) }
            }
            FieldKind::Bool => {
                quote! { ::sift::Value::Bool(self.#field_name) }
            }
            FieldKind::Char => {
                quote! { ::sift::Value::Char(self.#field_name) }
            }
            FieldKind::Display => {
                quote! {
                    ::sift::Value::Text(::std::string::ToString::to_string(&self.#field_name))
                }
            }
        };

        field_matches.push(quote! {
            #query_name => #value_expr,
        });
    }

    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_constants)*
        }

        impl #impl_generics ::sift::Searchable for #struct_name #ty_generics #where_clause {
            fn search_field_value(&self, field: &str) -> ::sift::Value<'_> {
                match field {
                    #(#field_matches)*
                    _ => ::sift::Value::None,
                }
            }
        }
    };

    Ok(expanded)
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' || c == '.' || c == ' ' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = true;
        }
    }

    result
}
