//! Expose selected fields of arbitrary types as categorized, text-editable
//! properties.
//!
//! This crate only re-exports the workspace members:
//!
//! - [`props`]: type metadata, parser registry, property descriptors and catalogs.
//! - [`utils`]: hashing and the insertion-ordered [`TypeIdMap`](utils::TypeIdMap).
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use vc_props as props;
pub use vc_utils as utils;
