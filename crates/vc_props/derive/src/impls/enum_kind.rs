use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::EditableEnum;

/// Implement `Typed` and `Reflect` for an enum of unit variants.
///
/// The display text is the variant name.
pub(crate) fn impl_enum(info: &EditableEnum, vc_props_path: &syn::Path) -> TokenStream {
    let type_info_ = crate::path::type_info_(vc_props_path);
    let enum_info_ = crate::path::enum_info_(vc_props_path);

    let pairs = info.variants.iter().map(|variant| {
        let ident = variant.ident;
        let name = &variant.name;
        quote! { (#name, Self::#ident) }
    });

    let type_info_tokens = quote! {
        #type_info_::Enum(#enum_info_::new::<Self>([
            #(#pairs),*
        ]))
    };

    let arms = info.variants.iter().map(|variant| {
        let ident = variant.ident;
        let name = &variant.name;
        quote! { Self::#ident => #name }
    });

    let display_tokens = quote! {
        f.write_str(match self {
            #(#arms,)*
        })
    };

    let typed_impl = super::impl_trait_typed(info.ident, vc_props_path, type_info_tokens);
    let reflect_impl = super::impl_trait_reflect(info.ident, vc_props_path, Some(display_tokens));

    quote! {
        #typed_impl

        #reflect_impl
    }
}
