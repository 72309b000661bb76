//! The paths of runtime items used by generated code.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `vc_props` crate.
///
/// 1. For crates that depend on `vc_props`, `::vc_props` is returned.
/// 2. For crates that depend on `vc_editables`, `::vc_editables::props` is returned.
/// 3. For other situations, `::vc_props` is returned, which resolves inside
///    `vc_props` itself through its `extern crate self`.
///
/// Reading the manifest is costly, so the path is obtained once per derive
/// and passed around.
pub(crate) fn vc_props() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_props"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn reflect_(vc_props_path: &syn::Path) -> TokenStream {
    quote! { #vc_props_path::Reflect }
}

#[inline(always)]
pub(crate) fn typed_(vc_props_path: &syn::Path) -> TokenStream {
    quote! { #vc_props_path::info::Typed }
}

#[inline(always)]
pub(crate) fn type_info_(vc_props_path: &syn::Path) -> TokenStream {
    quote! { #vc_props_path::info::TypeInfo }
}

#[inline(always)]
pub(crate) fn struct_info_(vc_props_path: &syn::Path) -> TokenStream {
    quote! { #vc_props_path::info::StructInfo }
}

#[inline(always)]
pub(crate) fn enum_info_(vc_props_path: &syn::Path) -> TokenStream {
    quote! { #vc_props_path::info::EnumInfo }
}

#[inline(always)]
pub(crate) fn field_info_(vc_props_path: &syn::Path) -> TokenStream {
    quote! { #vc_props_path::info::FieldInfo }
}

#[inline(always)]
pub(crate) fn editable_(vc_props_path: &syn::Path) -> TokenStream {
    quote! { #vc_props_path::info::Editable }
}

#[inline(always)]
pub(crate) fn visibility_(vc_props_path: &syn::Path) -> TokenStream {
    quote! { #vc_props_path::info::Visibility }
}

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(vc_props_path: &syn::Path) -> TokenStream {
    quote! { #vc_props_path::impls::NonGenericTypeInfoCell }
}

#[inline(always)]
pub(crate) fn box_(vc_props_path: &syn::Path) -> TokenStream {
    quote! { #vc_props_path::__macro_exports::Box }
}
