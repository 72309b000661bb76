//! Runtime-reflective, text-editable properties.
//!
//! Types describe themselves through a static [`TypeInfo`](info::TypeInfo):
//! declared fields, callable methods and the ancestor they embed. Fields carrying
//! an [`Editable`](info::Editable) marker become properties, grouped by category
//! in a [`PropertyGroups`](catalog::PropertyGroups) catalog, and each
//! [`PropertyDescriptor`](property::PropertyDescriptor) reads and writes its field
//! on a live object, from a typed value or from text through a
//! [`ParserRegistry`](parse::ParserRegistry).
//!
//! ## Menu
//!
//! - [`info`]: compile-time type information and the [`Typed`](info::Typed) trait.
//! - [`Reflect`]: dynamic values with type info and display text.
//! - [`impls`]: `Reflect` for scalars and strings, and the static info cell.
//! - [`introspect`]: hierarchy walks over fields and methods.
//! - [`parse`]: text-to-value parsers keyed by type.
//! - [`property`]: property descriptors and headless editing helpers.
//! - [`catalog`]: categorized property collections.
//! - [`derive`]: `#[derive(Editable)]`, with the `derive` feature.
//!
//! ## Example
//!
//! ```
//! use vc_props::catalog::build_groups_for;
//! use vc_props::derive::Editable;
//! use vc_props::parse::ParserRegistry;
//!
//! #[derive(Editable, Clone, Debug, Default)]
//! struct Light {
//!     #[editable(category = "Color")]
//!     intensity: f32,
//!     #[editable]
//!     label: String,
//! }
//!
//! let groups = build_groups_for::<Light>();
//! let registry = ParserRegistry::with_defaults();
//! let mut light = Light::default();
//!
//! let intensity = groups.find("intensity").unwrap();
//! assert!(intensity.write_from_text(&mut light, " 0.5 ", &registry));
//! assert_eq!(light.intensity, 0.5);
//! assert_eq!(groups.categories().collect::<Vec<_>>(), ["Color", "Object"]);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Compilation config

/// Trace logs that only exist with the `debug` feature in debug builds.
macro_rules! debug_trace {
    ($($arg:tt)*) => {
        if cfg!(all(debug_assertions, feature = "debug")) {
            ::log::trace!($($arg)*);
        }
    };
}

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro names this crate `vc_props`, which must also resolve
// inside the crate itself and its doc tests.
extern crate self as vc_props;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod catalog;
pub mod error;
pub mod impls;
pub mod info;
pub mod introspect;
pub mod parse;
pub mod property;

#[cfg(test)]
mod fixtures;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use reflection::Reflect;

#[cfg(feature = "derive")]
#[cfg_attr(docsrs, doc(cfg(feature = "derive")))]
pub use vc_props_derive as derive;
