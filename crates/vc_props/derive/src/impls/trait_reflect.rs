use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

/// Generate implementation code for `Reflect`.
///
/// Cloning and debug output forward to the type's own `Clone` and `Debug`.
/// `display_tokens` optionally overrides `reflect_display`.
pub(crate) fn impl_trait_reflect(
    ident: &Ident,
    vc_props_path: &syn::Path,
    display_tokens: Option<TokenStream>,
) -> TokenStream {
    let reflect_ = crate::path::reflect_(vc_props_path);
    let box_ = crate::path::box_(vc_props_path);

    let reflect_display = display_tokens.map(|body| {
        quote! {
            fn reflect_display(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #body
            }
        }
    });

    quote! {
        impl #reflect_ for #ident {
            #[inline]
            fn reflect_clone(&self) -> #box_<dyn #reflect_> {
                #box_::new(<Self as ::core::clone::Clone>::clone(self))
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                <Self as ::core::fmt::Debug>::fmt(self, f)
            }

            #reflect_display
        }
    }
}
