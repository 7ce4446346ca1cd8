//! Record derive macro
//!
//! This macro implements `framix_core::FieldAccessor` for a struct with named fields, so that
//! a slice of such structs can be turned into a Frame.
//!
//! Featured functions catalogue:
//! - `get_rename`
//! - `is_skipped`
//! - `record_fields`
//!
//! These functions are used to find out tagged fields in the compiling time, and the results
//! of these functions are used in proc-macro's token streams (see function `impl_record`).

mod fields;

use quote::quote;
use syn::{
    parse_macro_input, punctuated::Punctuated, token::Comma, Attribute, Data, DeriveInput, Field,
    Fields, Lit, Meta, NestedMeta,
};

use fields::*;

const TAG: &str = "record";
const RENAME: &str = "rename";
const SKIP: &str = "skip";

/// macro for Record derive
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    let stream = impl_record(&input).unwrap_or_else(syn::Error::into_compile_error);

    // Debug use:
    // println!("{}", &stream);

    proc_macro::TokenStream::from(stream)
}

type NamedFields = Punctuated<Field, Comma>;

/// turn ast into `Punctuated<Field, Comma>`, and filter out any type that is not a Rust struct
/// with named fields
fn named_fields(ast: &DeriveInput) -> syn::Result<NamedFields> {
    match &ast.data {
        Data::Struct(s) => match s.fields {
            Fields::Named(ref named_fields) => Ok(named_fields.named.clone()),
            Fields::Unit => Ok(NamedFields::new()),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                &ast.ident,
                "Record only supports structs with named fields",
            )),
        },
        _ => Err(syn::Error::new_spanned(
            &ast.ident,
            "Record only supports Struct",
        )),
    }
}

/// `record(...)` sub-attributes of a field
fn record_metas(attrs: &[Attribute]) -> syn::Result<Vec<NestedMeta>> {
    let mut res = vec![];
    for attr in attrs.iter().filter(|a| a.path.is_ident(TAG)) {
        match attr.parse_meta()? {
            Meta::List(meta_list) => res.extend(meta_list.nested.into_iter()),
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "expected `record(rename = \"...\")` or `record(skip)`",
                ))
            }
        }
    }
    Ok(res)
}

/// find out the column name given by `rename`
///
/// ```rust,ignore
/// struct Quote {
///     #[record(rename = "Name")]
///     name: String,
///     ...
/// }
/// ```
fn get_rename(metas: &[NestedMeta]) -> syn::Result<Option<String>> {
    for nested_meta in metas {
        if let NestedMeta::Meta(Meta::NameValue(mnv)) = nested_meta {
            if mnv.path.is_ident(RENAME) {
                return match mnv.lit {
                    Lit::Str(ref s) => Ok(Some(s.value())),
                    ref lit => Err(syn::Error::new_spanned(lit, "rename expects a string")),
                };
            }
        }
    }
    Ok(None)
}

/// find out whether a field is tagged `skip`
///
/// ```rust,ignore
/// struct Quote {
///     #[record(skip)]
///     cache: Vec<u8>,
///     ...
/// }
/// ```
fn is_skipped(metas: &[NestedMeta]) -> bool {
    metas
        .iter()
        .any(|nm| matches!(nm, NestedMeta::Meta(Meta::Path(path)) if path.is_ident(SKIP)))
}

/// all the fields exposed to the frame builder, in declaration order
fn record_fields(named_fields: &NamedFields) -> syn::Result<RecordFields> {
    let mut res = Vec::with_capacity(named_fields.len());

    for field in named_fields.iter() {
        let metas = record_metas(&field.attrs)?;
        if is_skipped(&metas) {
            continue;
        }
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(field, "unnamed field"))?;
        res.push(RecordField::new(ident, get_rename(&metas)?));
    }

    Ok(RecordFields(res))
}

/// main process of handling derive stream
fn impl_record(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    // name of the struct
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let named_fields = named_fields(input)?;
    let fields = record_fields(&named_fields)?;

    let expanded = quote! {
        impl #impl_generics ::framix_core::FieldAccessor for #name #ty_generics #where_clause {
            fn shape(&self) -> ::framix_core::RecordShape {
                #fields
            }
        }
    };

    Ok(expanded)
}
