//! See [`Editable`](derive_editable).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static EDITABLE_ATTRIBUTE_NAME: &str = "editable";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Editable Derivation
///
/// `#[derive(Editable)]` implements `Typed` and `Reflect` for non-generic
/// structs with named fields and for enums made of unit variants.
///
/// The type must also implement `Clone` and `Debug`.
///
/// ## Structs
///
/// Every field is registered in the type info, in declaration order, so every
/// field type must implement `Typed`, `Reflect` and `Clone`. `pub` fields are
/// public, other fields are private and only reachable through catalogs.
/// A field of type `Option<T>` is registered with declared type `T`, `None`
/// being an unset value.
///
/// Field attributes:
///
/// - `#[editable]`: make the field a property in the default category.
/// - `#[editable(category = "Stats")]`: choose the category.
/// - `#[editable(setter = "set_level")]`: write through a public method
///   taking the field type.
/// - `#[editable(read_only)]`: register the field without assignment.
///   Implies `#[editable]`.
/// - `#[editable(parent)]`: the field embeds the ancestor type, whose fields
///   and methods are inherited. At most one per struct.
/// - `#[editable(skip)]`: leave the field out of the type info.
///
/// Type attribute:
///
/// - `#[editable(methods = path::to::fn)]`: a `fn() -> Vec<MethodInfo>`
///   listing the callable methods of the type.
///
/// ```rust, ignore
/// #[derive(Editable, Clone, Debug)]
/// #[editable(methods = Player::methods)]
/// struct Player {
///     #[editable(parent)]
///     base: Entity,
///     #[editable(category = "Identity")]
///     name: String,
///     #[editable(category = "Stats", setter = "set_level")]
///     level: i32,
///     nickname: Option<String>,
/// }
///
/// impl Player {
///     fn methods() -> Vec<MethodInfo> {
///         vec![MethodInfo::setter("set_level", Self::set_level)]
///     }
/// }
/// ```
///
/// ## Enums
///
/// Only unit variants are supported. The display text of a value is its
/// variant name, and text equal to a variant name converts back to it.
///
/// ```rust, ignore
/// #[derive(Editable, Clone, Copy, Debug)]
/// enum Mode {
///     Idle,
///     Running,
/// }
/// ```
#[proc_macro_derive(Editable, attributes(editable))]
pub fn derive_editable(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_editable_impls(&ast)
}
