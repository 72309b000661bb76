use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{EditableStruct, FieldStorage, StructField};

/// Generate the `.field(...)` call registering one field.
fn field_tokens(field: &StructField, vc_props_path: &syn::Path) -> TokenStream {
    let field_info_ = crate::path::field_info_(vc_props_path);
    let StructField {
        ident, name, ty, ..
    } = field;

    let constructor = match (field.storage, field.attrs.read_only) {
        (FieldStorage::Value, false) => quote! {
            #field_info_::new::<Self, #ty>(#name, |this| &this.#ident, |this| &mut this.#ident)
        },
        (FieldStorage::Value, true) => quote! {
            #field_info_::read_only::<Self, #ty>(#name, |this| &this.#ident)
        },
        (FieldStorage::Optional, false) => quote! {
            #field_info_::optional::<Self, #ty>(#name, |this| &this.#ident, |this| &mut this.#ident)
        },
        (FieldStorage::Optional, true) => quote! {
            #field_info_::optional_read_only::<Self, #ty>(#name, |this| &this.#ident)
        },
    };

    let visibility = (!field.public).then(|| {
        let visibility_ = crate::path::visibility_(vc_props_path);
        quote! { .with_visibility(#visibility_::Private) }
    });

    let editable = field.attrs.marker.as_ref().map(|marker| {
        let editable_ = crate::path::editable_(vc_props_path);
        let category = marker
            .category
            .as_ref()
            .map(|category| quote! { .with_category(#category) });
        let setter = marker
            .setter
            .as_ref()
            .map(|setter| quote! { .with_setter(#setter) });
        quote! { .with_editable(#editable_::new() #category #setter) }
    });

    quote! {
        .field(#constructor #visibility #editable)
    }
}

/// Implement `Typed` and `Reflect` for a struct with named fields.
pub(crate) fn impl_struct(info: &EditableStruct, vc_props_path: &syn::Path) -> TokenStream {
    let type_info_ = crate::path::type_info_(vc_props_path);
    let struct_info_ = crate::path::struct_info_(vc_props_path);

    let parent = info.parent.as_ref().map(|parent| {
        let ident = parent.ident;
        let ty = parent.ty;
        quote! { .parent::<#ty>(|this| &this.#ident, |this| &mut this.#ident) }
    });

    let fields = info
        .fields
        .iter()
        .map(|field| field_tokens(field, vc_props_path));

    let methods = info
        .attrs
        .methods
        .as_ref()
        .map(|methods| quote! { .methods(#methods()) });

    let type_info_tokens = quote! {
        #type_info_::Struct(
            #struct_info_::builder::<Self>()
                #parent
                #(#fields)*
                #methods
                .build()
        )
    };

    let typed_impl = super::impl_trait_typed(info.ident, vc_props_path, type_info_tokens);
    let reflect_impl = super::impl_trait_reflect(info.ident, vc_props_path, None);

    quote! {
        #typed_impl

        #reflect_impl
    }
}
