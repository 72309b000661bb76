//! Compile-time type information.
//!
//! ## Menu
//!
//! - [`Type`]: A `TypeId` plus the full type path, used for identity and diagnostics.
//!
//! - [`TypeInfo`]: An enum describing a type, the inner is one of following:
//!     - [`StructInfo`]: Declared fields and methods, plus the optional embedded ancestor.
//!     - [`EnumInfo`]: Unit variant names and their constants.
//!     - [`OpaqueInfo`]: Scalars and strings, edited as a single value.
//!
//! - [`ParentInfo`]: The link from a struct to the ancestor it embeds.
//!
//! - [`FieldInfo`]: A declared field, its [`Visibility`] and optional [`Editable`] marker.
//!
//! - [`MethodInfo`]: A callable method with its parameter types.
//!
//! - [`Typed`]: A trait for obtaining `TypeInfo` data.
//!
//! - [`DynamicTyped`]: Provide dynamic dispatch for `Typed`.

// -----------------------------------------------------------------------------
// Modules

mod type_path;

mod editable;
mod enum_info;
mod field_info;
mod method_info;
mod opaque_info;
mod struct_info;
mod type_info;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use editable::Editable;
pub use enum_info::EnumInfo;
pub use field_info::{FieldInfo, Visibility};
pub use method_info::MethodInfo;
pub use opaque_info::OpaqueInfo;
pub use struct_info::{ParentInfo, StructInfo, StructInfoBuilder};
pub use type_info::{Ancestors, ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::Type;
pub use typed::{DynamicTyped, Typed};
