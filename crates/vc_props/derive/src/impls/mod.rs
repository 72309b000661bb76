//! Code generation for `#[derive(Editable)]`.

// -----------------------------------------------------------------------------
// Modules

mod enum_kind;
mod struct_kind;
mod trait_reflect;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::EditableDerive;

pub(crate) use enum_kind::impl_enum;
pub(crate) use struct_kind::impl_struct;
pub(crate) use trait_reflect::impl_trait_reflect;
pub(crate) use trait_typed::impl_trait_typed;

/// Parse the input and generate every implementation.
pub(crate) fn match_editable_impls(ast: &DeriveInput) -> TokenStream {
    let editable_derive = match EditableDerive::from_input(ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let vc_props_path = crate::path::vc_props();

    let editable_impls: proc_macro2::TokenStream = match editable_derive {
        EditableDerive::Struct(info) => impl_struct(&info, &vc_props_path),
        EditableDerive::Enum(info) => impl_enum(&info, &vc_props_path),
    };

    TokenStream::from(quote! {
        const _: () = {
            #editable_impls
        };
    })
}
