//! Record fields
//!
//! A struct field as seen by the frame builder: its Rust identifier and the column name it is
//! exposed under.

use quote::{quote, ToTokens};
use syn::Ident;

/// A non-skipped field of the deriving struct
#[derive(Debug, Clone)]
pub struct RecordField {
    pub ident: Ident,
    pub name: String,
}

impl RecordField {
    /// `rename` overrides the column name, the identifier is used otherwise
    pub fn new(ident: Ident, rename: Option<String>) -> Self {
        let name = rename.unwrap_or_else(|| ident.to_string());
        RecordField { ident, name }
    }
}

/// `RecordField` -> `(String, framix_core::Value)`
impl ToTokens for RecordField {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        let ident = &self.ident;
        let name = &self.name;
        tokens.extend(quote! {
            (
                #name.to_owned(),
                ::framix_core::ToValue::to_value(&self.#ident),
            )
        })
    }
}

/// new type for `Vec<RecordField>`
/// we need it because `syn::ToTokens` cannot be implemented for `Vec<_>`
#[derive(Debug, Clone, Default)]
pub struct RecordFields(pub Vec<RecordField>);

/// `RecordFields` -> `framix_core::RecordShape`
impl ToTokens for RecordFields {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        let d = &self.0;
        tokens.extend(quote! {
            ::framix_core::RecordShape::Struct(vec![#(#d),*])
        })
    }
}
