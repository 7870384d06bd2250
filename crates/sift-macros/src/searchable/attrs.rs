//! Attribute parsing for the Searchable derive macro.
//!
//! This module provides parsers for the `#[search(...)]` field attributes.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Ident, Lit, Meta, Result, Token,
};

const KIND_NAMES: &str = "String, Number, Bool, Char, Display";

/// How a searchable field is turned into a `sift::Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Borrowed text: `#[search(String)]`
    String,
    /// Numeric: `#[search(Number)]`
    Number,
    /// Boolean: `#[search(Bool)]`
    Bool,
    /// Character: `#[search(Char)]`
    Char,
    /// Formatted via `ToString`: `#[search(Display)]`
    Display,
}

impl FieldKind {
    fn parse_name(name: &str, span: Span) -> Result<Self> {
        match name {
            "String" | "string" | "str" => Ok(FieldKind::String),
            "Number" | "number" => Ok(FieldKind::Number),
            "Bool" | "boolean" | "bool" => Ok(FieldKind::Bool),
            "Char" | "char" => Ok(FieldKind::Char),
            "Display" | "display" => Ok(FieldKind::Display),
            other => Err(Error::new(
                span,
                format!("unknown search kind: '{other}'. Expected one of: {KIND_NAMES}"),
            )),
        }
    }

    /// Parse a field kind from an identifier.
    pub fn from_ident(ident: &Ident) -> Result<Self> {
        Self::parse_name(&ident.to_string(), ident.span())
    }

    /// Parse a field kind from a string literal.
    pub fn from_lit(s: &str, span: Span) -> Result<Self> {
        Self::parse_name(s, span)
    }
}

/// Field-level attributes from `#[search(...)]`.
#[derive(Debug, Clone)]
pub struct SearchAttr {
    /// How the field is read.
    pub kind: Option<FieldKind>,
    /// Skip this field.
    pub skip: bool,
    /// Custom field name (default: the Rust field name).
    pub rename: Option<String>,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for SearchAttr {
    fn default() -> Self {
        SearchAttr {
            kind: None,
            skip: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

fn string_literal(expr: &syn::Expr, what: &str) -> Result<syn::LitStr> {
    match expr {
        syn::Expr::Lit(syn::ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s.clone()),
        other => Err(Error::new(
            other.span(),
            format!("{what} must be a string literal"),
        )),
    }
}

impl Parse for SearchAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = SearchAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                // Kind identifier: search(String), search(Number), etc.
                Meta::Path(p) => {
                    if p.is_ident("skip") {
                        attr.skip = true;
                    } else if let Some(ident) = p.get_ident() {
                        if attr.kind.is_some() {
                            return Err(Error::new(ident.span(), "search kind given twice"));
                        }
                        attr.kind = Some(FieldKind::from_ident(ident)?);
                        attr.span = ident.span();
                    } else {
                        return Err(Error::new(
                            p.span(),
                            format!("expected search kind ({KIND_NAMES}) or skip"),
                        ));
                    }
                }

                // rename = "custom_name" or ty = "bool"
                Meta::NameValue(nv) => {
                    if nv.path.is_ident("rename") {
                        let name = string_literal(&nv.value, "rename")?;
                        if name.value().is_empty() {
                            return Err(Error::new(name.span(), "rename must not be empty"));
                        }
                        attr.rename = Some(name.value());
                    } else if nv.path.is_ident("ty") {
                        // ty = "bool" for kinds that are keywords or primitive names
                        let s = string_literal(&nv.value, "ty")?;
                        attr.kind = Some(FieldKind::from_lit(&s.value(), s.span())?);
                        attr.span = s.span();
                    } else {
                        return Err(Error::new(
                            nv.path.span(),
                            "unknown attribute. Expected: rename or ty",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        format!(
                            "unknown search attribute. Expected: {KIND_NAMES}, skip, rename = \"...\", or ty = \"...\""
                        ),
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Extract `#[search(...)]` attributes from a field's attributes.
pub fn parse_search_attrs(attrs: &[Attribute]) -> Result<SearchAttr> {
    for attr in attrs {
        if attr.path().is_ident("search") {
            return attr.parse_args::<SearchAttr>();
        }
    }
    Ok(SearchAttr::default())
}
