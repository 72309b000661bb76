use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

/// Generate implementation code for `Typed`.
///
/// `type_info_tokens` builds the `TypeInfo`, it runs once inside the static cell.
pub(crate) fn impl_trait_typed(
    ident: &Ident,
    vc_props_path: &syn::Path,
    type_info_tokens: TokenStream,
) -> TokenStream {
    let typed_ = crate::path::typed_(vc_props_path);
    let type_info_ = crate::path::type_info_(vc_props_path);
    let info_cell = crate::path::non_generic_type_info_cell_(vc_props_path);

    quote! {
        impl #typed_ for #ident {
            fn type_info() -> &'static #type_info_ {
                static CELL: #info_cell = #info_cell::new();
                CELL.get_or_init(|| {
                    #type_info_tokens
                })
            }
        }
    }
}
